//! Pinmap Desktop Application
//!
//! Drop pins on a map, geocode them, and keep remarks about the places.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod map;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pinmap_core=debug".parse().unwrap())
                .add_directive("pinmap_desktop=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Pinmap...");

    let config = Config::new().with_window(WindowBuilder::new().with_title("Pinmap"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
