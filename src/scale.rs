#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::constants::{MAX_MARKS, MIN_MARKS};

/// The closed set of letter grades a subject can be awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LetterGrade {
    /// Outstanding
    #[serde(rename = "O")]
    O,
    /// Excellent
    #[serde(rename = "A+")]
    APlus,
    /// Very good
    #[serde(rename = "A")]
    A,
    /// Good
    #[serde(rename = "B+")]
    BPlus,
    /// Above average
    #[serde(rename = "B")]
    B,
    /// Pass
    #[serde(rename = "C")]
    C,
    /// Fail
    #[serde(rename = "F")]
    F,
}

impl LetterGrade {
    /// Every letter grade, best first.
    pub const ALL: [LetterGrade; 7] = [
        LetterGrade::O,
        LetterGrade::APlus,
        LetterGrade::A,
        LetterGrade::BPlus,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::F,
    ];

    /// Grade points awarded for this letter.
    pub fn points(self) -> u8 {
        match self {
            LetterGrade::O => 10,
            LetterGrade::APlus => 9,
            LetterGrade::A => 8,
            LetterGrade::BPlus => 7,
            LetterGrade::B => 6,
            LetterGrade::C => 5,
            LetterGrade::F => 0,
        }
    }

    /// The label as printed on a grade sheet.
    pub fn label(self) -> &'static str {
        match self {
            LetterGrade::O => "O",
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::F => "F",
        }
    }
}

impl Display for LetterGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returned when text is not one of the known letter grades.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("`{0}` is not a letter grade (expected one of O, A+, A, B+, B, C, F)")]
pub struct UnknownLetterGrade(pub String);

impl FromStr for LetterGrade {
    type Err = UnknownLetterGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LetterGrade::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownLetterGrade(s.to_string()))
    }
}

/// One band of the marks scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    /// Lowest marks (inclusive) that fall in this band.
    pub lower:  f64,
    /// Grade points awarded in this band.
    pub points: u8,
    /// Letter grade equivalent to this band.
    pub letter: LetterGrade,
}

/// Ordered mapping from marks to grade points.
///
/// Bands are kept best first and checked top down; the first band whose lower
/// bound the marks reach wins, so a score of exactly 90 lands in the 10-point
/// band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeScale {
    /// Bands sorted by descending lower bound, the last starting at zero.
    bands: Vec<Band>,
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::standard()
    }
}

impl GradeScale {
    /// The ten point scale: 90/80/70/60/50/40 and below 40.
    pub fn standard() -> Self {
        let bands = [
            (90.0, LetterGrade::O),
            (80.0, LetterGrade::APlus),
            (70.0, LetterGrade::A),
            (60.0, LetterGrade::BPlus),
            (50.0, LetterGrade::B),
            (40.0, LetterGrade::C),
            (MIN_MARKS, LetterGrade::F),
        ]
        .into_iter()
        .map(|(lower, letter)| Band {
            lower,
            points: letter.points(),
            letter,
        })
        .collect();

        Self { bands }
    }

    /// The bands of this scale, best first.
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Band containing `marks`, or `None` when marks fall outside `0..=100`.
    pub fn band_for(&self, marks: f64) -> Option<&Band> {
        if !(MIN_MARKS..=MAX_MARKS).contains(&marks) {
            return None;
        }
        self.bands.iter().find(|band| marks >= band.lower)
    }

    /// Grade points for `marks`, or `None` when marks fall outside `0..=100`.
    pub fn points_for(&self, marks: f64) -> Option<u8> {
        self.band_for(marks).map(|band| band.points)
    }

    /// Letter grade equivalent to `marks`.
    pub fn letter_for(&self, marks: f64) -> Option<LetterGrade> {
        self.band_for(marks).map(|band| band.letter)
    }

    /// Printable marks range of each band, best first.
    pub fn ranges(&self) -> Vec<(String, &Band)> {
        let mut upper = MAX_MARKS;
        let mut out = Vec::with_capacity(self.bands.len());
        for band in &self.bands {
            let label = if band.lower == MIN_MARKS {
                format!("below {}", upper + 1.0)
            } else {
                format!("{}-{}", band.lower, upper)
            };
            out.push((label, band));
            upper = band.lower - 1.0;
        }
        out
    }
}
