#![allow(non_snake_case)]
mod api;
mod app;
mod catalog;
mod config;
mod i18n;
mod ui;

use dioxus::prelude::*;
#[cfg(feature = "desktop")]
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::Level;

#[cfg(not(any(feature = "desktop", feature = "web")))]
compile_error!("enable the `desktop` or the `web` feature to pick a platform");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");

    #[cfg(feature = "desktop")]
    {
        let window = WindowBuilder::new()
            .with_title("Pokémon Scarlet and Violet Pokémon Picker Tool")
            .with_always_on_top(false)
            .with_resizable(true);

        let config = DesktopConfig::new()
            .with_background_color((30, 30, 46, 255))
            .with_window(window);

        LaunchBuilder::desktop().with_cfg(config).launch(app::app);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    LaunchBuilder::web().launch(app::app);
}
