//! Pure grading functions
//!
//! Sort keys and selection predicates over student records. Nothing here
//! touches the store or performs I/O.

use crate::error::{ErrorCode, RosterError};
use crate::roster::Student;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Lowest grade a student may have and still be selected
pub const PASSING_GRADE: i64 = 4;

/// Divisor used by [`AverageMode::FixedFive`]
pub const FIXED_GRADE_COUNT: i64 = 5;

/// How the average grade used as the sort key is computed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AverageMode {
    /// `sum(grades) / len(grades)`
    #[default]
    Mean,
    /// `sum(grades) / 5`, whatever the number of grades
    FixedFive,
}

impl AverageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::FixedFive => "fixed-five",
        }
    }
}

impl fmt::Display for AverageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AverageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "fixed-five" | "fixed_five" | "fixed5" => Ok(Self::FixedFive),
            other => Err(format!(
                "unknown average mode '{other}' (expected 'mean' or 'fixed-five')"
            )),
        }
    }
}

/// Average grade of a student under the given mode.
///
/// A student with no grades averages to zero in `Mean` mode. The sum is
/// accumulated in `i128`, so any list of `i64` grades is summed exactly.
pub fn average_grade(grades: &[i64], mode: AverageMode) -> f64 {
    let sum: i128 = grades.iter().map(|&g| i128::from(g)).sum();
    match mode {
        AverageMode::Mean if grades.is_empty() => 0.0,
        AverageMode::Mean => sum as f64 / grades.len() as f64,
        AverageMode::FixedFive => sum as f64 / FIXED_GRADE_COUNT as f64,
    }
}

/// Compare two students by average grade, ascending
pub fn compare_by_average(a: &Student, b: &Student, mode: AverageMode) -> Ordering {
    average_grade(&a.grades, mode).total_cmp(&average_grade(&b.grades, mode))
}

/// Stable in-place sort by ascending average grade
pub fn sort_by_average(students: &mut [Student], mode: AverageMode) {
    students.sort_by(|a, b| compare_by_average(a, b, mode));
}

/// True when every grade is at least [`PASSING_GRADE`]
pub fn is_passing(student: &Student) -> bool {
    student.grades.iter().all(|&grade| grade >= PASSING_GRADE)
}

/// Students whose grades are all passing, in their original order
pub fn select_passing(students: &[Student]) -> Vec<&Student> {
    students.iter().filter(|s| is_passing(s)).collect()
}

/// Parse a whitespace-separated grade line such as `5 4 5 3 5`
pub fn parse_grades(line: &str) -> crate::error::Result<Vec<i64>> {
    let grades = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| RosterError::invalid_grade(token))
        })
        .collect::<crate::error::Result<Vec<_>>>()?;

    if grades.is_empty() {
        return Err(RosterError::input(
            ErrorCode::INPUT_NO_GRADES,
            "at least one grade is required",
        ));
    }
    Ok(grades)
}
