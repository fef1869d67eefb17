#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::Serialize;

use crate::{
    constants::{MAX_SGPA, MIN_SGPA},
    entry::{Score, SemesterEntry, SubjectEntry},
    error::GpaError,
    scale::GradeScale,
};

/// Rounds half up to two decimal places.
///
/// Only meant for the non-negative averages produced here.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// A validated subject together with the points it earned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradedSubject {
    /// 1-based position of the subject in the form.
    pub position: usize,
    /// The subject as entered.
    pub entry:    SubjectEntry,
    /// Grade points the score converts to.
    pub points:   u8,
}

impl GradedSubject {
    /// Credits multiplied by grade points.
    pub fn weighted(&self) -> f64 {
        self.entry.credits * f64::from(self.points)
    }
}

/// A computed SGPA and the subjects it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SgpaOutcome {
    /// SGPA rounded to two decimals.
    pub value:         f64,
    /// Sum of credits over all subjects.
    pub total_credits: f64,
    /// Subjects in entry order.
    pub subjects:      Vec<GradedSubject>,
}

/// A computed CGPA and the semesters it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CgpaOutcome {
    /// CGPA rounded to two decimals.
    pub value:     f64,
    /// Semesters in entry order.
    pub semesters: Vec<SemesterEntry>,
}

/// Checks one subject and converts its score to grade points.
///
/// * `position`: 1-based position used in error messages
/// * `entry`: the subject to check
/// * `scale`: marks scale to convert with
pub fn grade_subject(
    position: usize,
    entry: &SubjectEntry,
    scale: &GradeScale,
) -> Result<GradedSubject, GpaError> {
    if !entry.credits.is_finite() || entry.credits <= 0.0 {
        return Err(GpaError::CreditsOutOfRange {
            position,
            credits: entry.credits,
        });
    }

    let points = match entry.score {
        Score::Marks(marks) => scale
            .points_for(marks)
            .ok_or(GpaError::MarksOutOfRange { position, marks })?,
        Score::Letter(letter) => letter.points(),
    };

    Ok(GradedSubject {
        position,
        entry: *entry,
        points,
    })
}

/// Checks one semester's SGPA lies within `0..=10`.
pub fn check_semester(position: usize, entry: &SemesterEntry) -> Result<(), GpaError> {
    if (MIN_SGPA..=MAX_SGPA).contains(&entry.sgpa) {
        Ok(())
    } else {
        Err(GpaError::SgpaOutOfRange {
            position,
            sgpa: entry.sgpa,
        })
    }
}

/// Credit-weighted average of grade points over `entries`.
///
/// Every subject is validated before anything is summed; the first invalid
/// subject aborts the computation. Rounding happens once on the final value,
/// which always lies within `0..=10`.
pub fn sgpa(entries: &[SubjectEntry], scale: &GradeScale) -> Result<SgpaOutcome, GpaError> {
    let subjects = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| grade_subject(i + 1, entry, scale))
        .collect::<Result<Vec<_>, _>>()?;

    let total_credits: f64 = subjects.iter().map(|s| s.entry.credits).sum();
    if total_credits <= 0.0 {
        tracing::warn!("Refusing to compute SGPA over zero total credits");
        return Err(GpaError::NoCredits);
    }

    let total_points: f64 = subjects.iter().map(GradedSubject::weighted).sum();
    let value = round2(total_points / total_credits);
    if !total_credits.is_finite() || !(MIN_SGPA..=MAX_SGPA).contains(&value) {
        tracing::warn!(total_points, total_credits, "SGPA sums overflowed");
        return Err(GpaError::CreditsOverflow);
    }
    tracing::debug!(total_points, total_credits, value, "computed SGPA");

    Ok(SgpaOutcome {
        value,
        total_credits,
        subjects,
    })
}

/// Plain mean of the SGPAs in `entries`, rounded once to two decimals.
pub fn cgpa(entries: &[SemesterEntry]) -> Result<CgpaOutcome, GpaError> {
    for (i, entry) in entries.iter().enumerate() {
        check_semester(i + 1, entry)?;
    }

    if entries.is_empty() {
        tracing::warn!("Refusing to compute CGPA over zero semesters");
        return Err(GpaError::NoSemesters);
    }

    let total: f64 = entries.iter().map(|e| e.sgpa).sum();
    let value = round2(total / entries.len() as f64);
    tracing::debug!(total, semesters = entries.len(), value, "computed CGPA");

    Ok(CgpaOutcome {
        value,
        semesters: entries.to_vec(),
    })
}
