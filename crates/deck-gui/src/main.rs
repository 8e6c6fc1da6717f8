//! SAS Research Deck - application entry point.

/// Launch the deck.
pub fn main() -> iced::Result {
    deck_gui::run()
}
