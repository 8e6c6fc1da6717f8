//! SAS Research Deck - animated presentation client.
//!
//! A slide deck for the Subcultural Alignment Solver talk: eight slides
//! navigated by keyboard or buttons, a wait-mode transition engine, and
//! an ambient particle background.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View). The navigation and animation-state engine lives in the
//! `deck-core` crate; this crate is the presentation of it.

pub mod app;
pub mod background;
pub mod component;
pub mod constants;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

use iced::window;
use iced::Size;

use app::App;
use constants::APP_NAME;

/// Run the application.
///
/// Initializes logging and the Iced application with the void-dark theme
/// and default window settings.
pub fn run() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting {APP_NAME}");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .antialiasing(true)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 640.0)),
            ..Default::default()
        })
        .run()
}
