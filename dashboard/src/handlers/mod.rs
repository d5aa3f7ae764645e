//! UI event handlers

pub mod events;

pub use events::{handle_event, EventOutcome, UiEvent};
