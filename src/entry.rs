#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::scale::LetterGrade;

/// How a subject was graded: raw marks or a letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Score {
    /// Marks out of 100.
    Marks(f64),
    /// A letter grade from the fixed table.
    Letter(LetterGrade),
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Marks(marks) => write!(f, "{marks}"),
            Score::Letter(letter) => write!(f, "{letter}"),
        }
    }
}

impl From<f64> for Score {
    fn from(marks: f64) -> Self {
        Score::Marks(marks)
    }
}

impl From<LetterGrade> for Score {
    fn from(letter: LetterGrade) -> Self {
        Score::Letter(letter)
    }
}

/// One subject of a semester.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TypedBuilder)]
pub struct SubjectEntry {
    /// Credits the subject carries.
    pub credits: f64,
    /// Marks or letter grade received.
    #[builder(setter(into))]
    pub score:   Score,
}

impl SubjectEntry {
    /// Creates a new subject entry -
    /// * `credits` - credits the subject carries
    /// * `score` - marks or letter grade received
    pub fn new(credits: f64, score: impl Into<Score>) -> Self {
        Self {
            credits,
            score: score.into(),
        }
    }
}

/// One completed semester.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SemesterEntry {
    /// SGPA earned in the semester.
    pub sgpa: f64,
}

impl SemesterEntry {
    /// Creates a new semester entry.
    pub fn new(sgpa: f64) -> Self {
        Self { sgpa }
    }
}

impl From<f64> for SemesterEntry {
    fn from(sgpa: f64) -> Self {
        Self { sgpa }
    }
}
