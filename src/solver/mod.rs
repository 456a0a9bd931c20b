//! Constraint-based solving
//!
//! Derives letter constraints from a guess history, filters the vocabulary down
//! to consistent candidates and picks a suggestion among them.

pub mod constraints;
mod engine;
pub mod filter;
pub mod frequency;
pub mod strategy;

pub use constraints::{ConstraintTable, LetterConstraint, PositionSet, derive};
pub use engine::Solver;
pub use filter::{filter_candidates, satisfies};
pub use frequency::{LETTER_WEIGHTS, WEIGHT_SCALE, frequency_score};
pub use strategy::{
    FirstStrategy, FrequencyStrategy, RandomStrategy, Strategy, StrategyType, suggest,
};
