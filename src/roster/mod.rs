//! In-memory student record store
//!
//! The store is an ordered sequence. Order is what `list` displays and what
//! `save` writes, so every mutation keeps it well defined:
//!
//! - [`Roster::add`] appends and then stably re-sorts by average grade
//! - [`Roster::replace`] swaps the whole content, keeping the given order
//!
//! There is no in-place edit or delete.
//!
//! # Examples
//!
//! ```rust
//! use roster::core::AverageMode;
//! use roster::roster::{Roster, Student};
//!
//! let mut roster = Roster::new(AverageMode::Mean);
//! roster.add(Student::new("Sidorov C.C.", "102", vec![5, 5, 5]));
//! roster.add(Student::new("Ivanov A.A.", "101", vec![3, 4, 4]));
//!
//! assert_eq!(roster.students()[0].name, "Ivanov A.A.");
//! assert_eq!(roster.select().len(), 1);
//! ```

pub mod types;

#[cfg(test)]
mod tests;

pub use types::Student;

use crate::core::{grading, AverageMode};
use tracing::debug;

/// Ordered collection of students for one session
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
    mode: AverageMode,
}

impl Roster {
    /// Create an empty roster sorting with the given average mode
    pub fn new(mode: AverageMode) -> Self {
        Self {
            students: Vec::new(),
            mode,
        }
    }

    /// Get current records in display order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn mode(&self) -> AverageMode {
        self.mode
    }

    /// Append a student and re-sort the whole roster by ascending average grade
    pub fn add(&mut self, student: Student) {
        debug!(
            name = %student.name,
            grades = ?student.grades,
            "Adding student"
        );
        self.students.push(student);
        grading::sort_by_average(&mut self.students, self.mode);
    }

    /// Students whose every grade is passing, in roster order
    pub fn select(&self) -> Vec<&Student> {
        grading::select_passing(&self.students)
    }

    /// Replace the whole content, e.g. after a validated load
    pub fn replace(&mut self, students: Vec<Student>) -> Vec<Student> {
        debug!(
            previous = self.students.len(),
            incoming = students.len(),
            "Replacing roster content"
        );
        std::mem::replace(&mut self.students, students)
    }
}
