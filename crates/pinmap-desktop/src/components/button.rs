//! Themed button primitive

use dioxus::prelude::*;

use crate::theme::PALETTE;

/// Closed set of button styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Danger,
    Outline,
    Success,
    Subtle,
}

impl ButtonVariant {
    fn style(self) -> String {
        match self {
            Self::Primary => format!("background: {}; color: #ffffff; border: none;", PALETTE.accent),
            Self::Danger => format!("background: {}; color: #ffffff; border: none;", PALETTE.danger),
            Self::Success => format!("background: {}; color: #ffffff; border: none;", PALETTE.success),
            Self::Outline => format!(
                "background: transparent; color: {}; border: 1px solid {};",
                PALETTE.text_primary, PALETTE.border
            ),
            Self::Subtle => format!(
                "background: transparent; color: {}; border: none;",
                PALETTE.text_muted
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    const fn style(self) -> &'static str {
        match self {
            Self::Small => "height: 32px; padding: 0 12px; font-size: 13px;",
            Self::Medium => "height: 38px; padding: 0 20px; font-size: 14px;",
            Self::Large => "height: 46px; padding: 0 32px; font-size: 16px;",
        }
    }
}

/// Button with a closed variant/size enumeration; `loading` disables it.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] loading: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_style = variant.style();
    let size_style = size.style();
    let opacity = if loading { "0.5" } else { "1" };

    rsx! {
        button {
            disabled: loading,
            onclick: move |evt| onclick.call(evt),
            style: "display: inline-flex; align-items: center; justify-content: center; gap: 8px; border-radius: 8px; font-weight: 500; cursor: pointer; {variant_style} {size_style} opacity: {opacity};",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_variants() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Medium);
    }

    #[test]
    fn test_variant_styles_are_distinct() {
        let styles = [
            ButtonVariant::Primary.style(),
            ButtonVariant::Danger.style(),
            ButtonVariant::Outline.style(),
            ButtonVariant::Success.style(),
            ButtonVariant::Subtle.style(),
        ];
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
