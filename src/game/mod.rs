//! Move sets, outcome rules and the collaborator traits

pub mod traits;
pub mod moves;
pub mod outcome;
pub mod matrix;
pub mod selection;
pub mod validation;

// Re-export core traits
pub use traits::{GameUi, KeyGenerator, MoveSelector, UserInput};
pub use moves::{Move, MoveSet};
pub use outcome::{Outcome, OutcomeResolver};
pub use matrix::OutcomeMatrix;
pub use selection::Selection;
pub use validation::MoveSetValidator;
