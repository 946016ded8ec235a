//! Type definitions for student records

use serde::{Deserialize, Serialize};

/// One student entry as it is entered, displayed and persisted
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Surname and initials, free text
    pub name: String,
    /// Group identifier, free text
    pub group_number: String,
    pub grades: Vec<i64>,
}

impl Student {
    #[must_use]
    pub fn new(name: impl Into<String>, group_number: impl Into<String>, grades: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            group_number: group_number.into(),
            grades,
        }
    }

    /// Grades joined for display, e.g. `5, 4, 5`
    pub fn grades_display(&self) -> String {
        self.grades
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
