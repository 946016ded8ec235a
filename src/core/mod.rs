//! Core business logic module with pure functions
//!
//! This module contains pure functions that implement business logic without any I/O operations.
//! Following the "functional core, imperative shell" pattern, all functions here:
//! - Take inputs and return outputs
//! - Have no side effects
//! - Don't read files or prompt the user
//! - Are easily testable without fixtures

pub mod grading;

pub use grading::{
    average_grade, is_passing, parse_grades, select_passing, sort_by_average, AverageMode,
    PASSING_GRADE,
};
