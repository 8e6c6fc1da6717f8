//! Main application module.
//!
//! Implements the Iced 0.14 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - views are pure functions
//! - **Timers are subscriptions derived from state** - a timer exists only
//!   while the state that owns it says so, which is what guarantees no
//!   stale timer ever fires into a fresh mount
//!
//! # Module Structure
//!
//! - `handler/` - message handlers organized by concern
//! - `subscription` - all reactive event sources

mod handler;
pub mod subscription;

use iced::{Element, Task, Theme};

use crate::constants::APP_NAME;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::deck_theme;
use crate::view::view_deck;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    pub fn new() -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(),
            },
            Task::none(),
        )
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // =================================================================
            // Navigation
            // =================================================================
            Message::NextSlide => self.go_next(),
            Message::PreviousSlide => self.go_previous(),
            Message::JumpToFirst => self.jump_to(0),
            Message::JumpToLast => self.jump_to(self.state.sequencer.len() - 1),

            // =================================================================
            // Global events
            // =================================================================
            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_press(key, modifiers);
            }
            Message::AnimationTick(now) => self.on_animation_tick(now),

            // =================================================================
            // Slide-local simulations
            // =================================================================
            Message::SimulationTick => self.on_simulation_tick(),
            Message::PipelineTick => self.on_pipeline_tick(),
            Message::BaselineSelected(baseline) => self.select_baseline(baseline),
            Message::StageSelected(stage) => self.select_stage(stage),
            Message::DatasetSelected(dataset) => self.select_dataset(dataset),

            // =================================================================
            // External actions
            // =================================================================
            Message::OpenUrl(url) => {
                let _ = open::that(url);
            }

            Message::Noop => {}
        }
        Task::none()
    }

    /// Render the window. Pure function over current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_deck(&self.state)
    }

    /// Window title tracking the current slide.
    pub fn title(&self) -> String {
        let slide = self.state.current_slide();
        format!("{} {} · {}", slide.section, slide.title, APP_NAME)
    }

    /// The void-dark theme.
    pub fn theme(&self) -> Theme {
        deck_theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> iced::Subscription<Message> {
        subscription::create_subscription(&self.state)
    }
}
