//! # gradepoint
//!
//! Semester (SGPA) and cumulative (CGPA) grade point averages on a ten point
//! scale, with bounds-checked forms, a command line and an interactive
//! terminal session.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// SGPA and CGPA reductions
pub mod calc;
/// One-shot commands evaluated from command line arguments
pub mod cli;
/// Environment driven settings
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Subjects, semesters and scores
pub mod entry;
/// Validation and computation errors
pub mod error;
/// Screen state for the SGPA and CGPA forms
pub mod form;
/// Success and error notifications
pub mod notify;
/// For all parsers used
pub mod parsers;
/// Tables and JSON for computed results
pub mod report;
/// Marks bands and letter grades
pub mod scale;
/// The interactive calculator
pub mod session;

pub use calc::{CgpaOutcome, SgpaOutcome, cgpa, round2, sgpa};
pub use entry::{Score, SemesterEntry, SubjectEntry};
pub use error::{ErrorKind, GpaError};
pub use form::{CgpaForm, Form, SgpaForm};
pub use report::GpaReport;
pub use scale::{GradeScale, LetterGrade};
