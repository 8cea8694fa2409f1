//! Mock implementations for testing

pub mod randomness;

pub use randomness::{BrokenKeys, CountingKeys, ScriptedMoves};
pub use scripted_ui::{ScriptedUi, UiEvent};
