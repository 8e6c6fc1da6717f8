//! Global keyboard bindings.
//!
//! Handles:
//! - ArrowRight / Space - advance one slide
//! - ArrowLeft - retreat one slide
//! - Home / End - jump to the first / last slide
//!
//! Every press is an independent discrete event; the sequencer's boundary
//! clamping is the only rate limiting there is.

use iced::Task;
use iced::keyboard;
use iced::keyboard::key::Named;

use crate::app::App;
use crate::message::Message;

impl App {
    /// Translate a key press into a navigation message.
    pub(crate) fn handle_key_press(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        // Leave modified chords to the platform.
        if modifiers.command() || modifiers.alt() {
            return Task::none();
        }

        match key.as_ref() {
            keyboard::Key::Named(Named::ArrowRight) | keyboard::Key::Named(Named::Space) => {
                Task::done(Message::NextSlide)
            }

            keyboard::Key::Named(Named::ArrowLeft) => Task::done(Message::PreviousSlide),

            keyboard::Key::Named(Named::Home) => Task::done(Message::JumpToFirst),

            keyboard::Key::Named(Named::End) => Task::done(Message::JumpToLast),

            _ => Task::none(),
        }
    }
}
