#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::ops::RangeInclusive;

/// Number of subjects a single semester form accepts.
pub const SUBJECT_COUNT: RangeInclusive<usize> = 1..=13;

/// Number of semesters a cumulative form accepts.
pub const SEMESTER_COUNT: RangeInclusive<usize> = 1..=8;

/// Lowest marks a subject can be awarded.
pub const MIN_MARKS: f64 = 0.0;

/// Highest marks a subject can be awarded.
pub const MAX_MARKS: f64 = 100.0;

/// Lowest SGPA a semester can carry.
pub const MIN_SGPA: f64 = 0.0;

/// Highest SGPA a semester can carry.
pub const MAX_SGPA: f64 = 10.0;

/// Words that leave a form screen from the interactive session.
pub const BACK_WORDS: [&str; 2] = ["back", ".."];

/// Words that end the interactive session.
pub const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

/// Banner shown on the landing screen.
pub const LANDING_BANNER: &str = "Calculate your SGPA or CGPA";

/// Landing screen choices, as `(command, description)`.
pub const LANDING_CHOICES: [(&str, &str); 4] = [
    ("sgpa", "Semester Grade Point Average from subject credits and marks"),
    ("cgpa", "Cumulative Grade Point Average from semester SGPAs"),
    ("scale", "Show the marks and letter grade scale"),
    ("quit", "Leave"),
];
