#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;

/// Broad classification of a [`GpaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// A count or value falls outside its allowed bounds, or is not a number.
    Range,
    /// A required field was left empty when calculating.
    IncompleteData,
    /// The reduction has nothing to divide by.
    DegenerateInput,
}

/// Which field of an entry a value was typed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    /// Number of subjects or semesters.
    Count,
    /// Subject credits.
    Credits,
    /// Subject marks or letter grade.
    Score,
    /// Semester SGPA.
    Sgpa,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Count => "count",
            Field::Credits => "credits",
            Field::Score => "marks",
            Field::Sgpa => "SGPA",
        };
        write!(f, "{name}")
    }
}

/// What a form is counting, used to word count errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CountOf {
    /// Subjects in a semester.
    Subjects,
    /// Semesters in a programme.
    Semesters,
}

impl Display for CountOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountOf::Subjects => write!(f, "subjects"),
            CountOf::Semesters => write!(f, "semesters"),
        }
    }
}

/// Errors raised while validating input or computing an average.
///
/// Positions are 1-based, matching how entries are numbered on screen.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GpaError {
    /// The count text is not a whole number.
    #[error("Number of {of} must be a whole number, got `{input}`")]
    InvalidCount {
        /// What was being counted.
        of:    CountOf,
        /// The rejected text.
        input: String,
    },
    /// The count is outside its allowed bounds.
    #[error("Number of {of} must be between {min} and {max}")]
    CountOutOfRange {
        /// What was being counted.
        of:    CountOf,
        /// The rejected count.
        count: i64,
        /// Smallest accepted count.
        min:   usize,
        /// Largest accepted count.
        max:   usize,
    },
    /// A value could not be read as a number.
    #[error("The {field} for entry {position} is not a number: `{input}`")]
    NotANumber {
        /// Entry position.
        position: usize,
        /// Field the text came from.
        field:    Field,
        /// The rejected text.
        input:    String,
    },
    /// A score was neither a number nor a known letter grade.
    #[error("The grade for subject {position} must be marks or one of O, A+, A, B+, B, C, F")]
    UnknownLetter {
        /// Entry position.
        position: usize,
        /// The rejected text.
        input:    String,
    },
    /// Marks outside `0..=100`.
    #[error("Marks for Subject {position} must be between 0 and 100")]
    MarksOutOfRange {
        /// Entry position.
        position: usize,
        /// The rejected value.
        marks:    f64,
    },
    /// SGPA outside `0..=10`.
    #[error("SGPA for Semester {position} must be between 0 and 10")]
    SgpaOutOfRange {
        /// Entry position.
        position: usize,
        /// The rejected value.
        sgpa:     f64,
    },
    /// Zero, negative or non-finite credits.
    #[error("Credits for Subject {position} must be greater than zero")]
    CreditsOutOfRange {
        /// Entry position.
        position: usize,
        /// The rejected value.
        credits:  f64,
    },
    /// At least one required field is empty.
    #[error("Please fill in all {0}")]
    IncompleteData(String),
    /// Credits sum to zero.
    #[error("Total credits must be greater than zero")]
    NoCredits,
    /// Nothing to average.
    #[error("At least one semester SGPA is needed")]
    NoSemesters,
    /// Credits so large the weighted sums no longer fit in a float.
    #[error("Credits are too large to average")]
    CreditsOverflow,
}

impl GpaError {
    /// Returns the broad classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GpaError::InvalidCount { .. }
            | GpaError::CountOutOfRange { .. }
            | GpaError::NotANumber { .. }
            | GpaError::UnknownLetter { .. }
            | GpaError::MarksOutOfRange { .. }
            | GpaError::SgpaOutOfRange { .. }
            | GpaError::CreditsOutOfRange { .. } => ErrorKind::Range,
            GpaError::IncompleteData(_) => ErrorKind::IncompleteData,
            GpaError::NoCredits | GpaError::NoSemesters | GpaError::CreditsOverflow => {
                ErrorKind::DegenerateInput
            }
        }
    }

    /// 1-based position of the offending entry, when there is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            GpaError::NotANumber { position, .. }
            | GpaError::UnknownLetter { position, .. }
            | GpaError::MarksOutOfRange { position, .. }
            | GpaError::SgpaOutOfRange { position, .. }
            | GpaError::CreditsOutOfRange { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Short title used when this error is shown as a notification.
    pub fn title(&self) -> &'static str {
        match self {
            GpaError::InvalidCount { .. } | GpaError::CountOutOfRange { .. } => "Invalid Input",
            GpaError::NotANumber { .. } => "Invalid Number",
            GpaError::UnknownLetter { .. } => "Invalid Grade",
            GpaError::MarksOutOfRange { .. } => "Invalid Marks",
            GpaError::SgpaOutOfRange { .. } => "Invalid SGPA",
            GpaError::CreditsOutOfRange { .. } | GpaError::CreditsOverflow => "Invalid Credits",
            GpaError::IncompleteData(_) => "Incomplete Data",
            GpaError::NoCredits => "No Credits",
            GpaError::NoSemesters => "No Semesters",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_errors_name_the_bounds() {
        let err = GpaError::CountOutOfRange {
            of:    CountOf::Semesters,
            count: 9,
            min:   1,
            max:   8,
        };
        assert_eq!(err.to_string(), "Number of semesters must be between 1 and 8");
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.title(), "Invalid Input");
    }

    #[test]
    fn degenerate_errors_are_classified() {
        assert_eq!(GpaError::NoCredits.kind(), ErrorKind::DegenerateInput);
        assert_eq!(GpaError::NoSemesters.kind(), ErrorKind::DegenerateInput);
        assert_eq!(GpaError::CreditsOverflow.kind(), ErrorKind::DegenerateInput);
        assert_eq!(GpaError::CreditsOverflow.title(), "Invalid Credits");
        assert_eq!(
            GpaError::IncompleteData("subjects' credits and marks".into()).kind(),
            ErrorKind::IncompleteData
        );
    }
}
