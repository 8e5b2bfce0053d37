//! Color palette for the desktop app

/// Named colors used by the inline component styles.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg: &'static str,
    pub surface: &'static str,
    pub surface_raised: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub danger: &'static str,
    pub success: &'static str,
}

/// The app is single-theme: a dark scheme with an orange marker accent.
pub const PALETTE: ColorPalette = ColorPalette {
    bg: "#111827",
    surface: "#1f2937",
    surface_raised: "#374151",
    text_primary: "#f9fafb",
    text_muted: "#9ca3af",
    border: "#4b5563",
    accent: "#f97316",
    danger: "#ef4444",
    success: "#22c55e",
};
