#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    calc::{CgpaOutcome, SgpaOutcome},
    config::OutputFormat,
    entry::Score,
    scale::GradeScale,
};

/// Which average a report holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportKind {
    /// Semester Grade Point Average
    #[serde(rename = "SGPA")]
    Sgpa,
    /// Cumulative Grade Point Average
    #[serde(rename = "CGPA")]
    Cgpa,
}

impl Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Sgpa => write!(f, "SGPA"),
            ReportKind::Cgpa => write!(f, "CGPA"),
        }
    }
}

#[derive(Tabled, Debug, Clone, PartialEq, Serialize)]
/// One subject line of an SGPA report
pub struct SubjectRow {
    #[tabled(rename = "Subject")]
    /// * `subject`: 1-based position
    pub subject: usize,
    #[tabled(rename = "Credits")]
    /// * `credits`: credits carried
    pub credits: f64,
    #[tabled(rename = "Score")]
    /// * `score`: marks or letter grade as entered
    pub score:   String,
    #[tabled(rename = "Points")]
    /// * `points`: grade points earned
    pub points:  u8,
}

#[derive(Tabled, Debug, Clone, PartialEq, Serialize)]
/// One semester line of a CGPA report
pub struct SemesterRow {
    #[tabled(rename = "Semester")]
    /// * `semester`: 1-based position
    pub semester: usize,
    #[tabled(rename = "SGPA")]
    /// * `sgpa`: SGPA as entered
    pub sgpa:     f64,
}

/// A computed average ready to be shown or serialised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GpaReport {
    /// Which average this is.
    pub kind:          ReportKind,
    /// The rounded average.
    pub value:         f64,
    /// Sum of credits, for SGPA reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_credits: Option<f64>,
    /// Subject breakdown, for SGPA reports.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subjects:      Vec<SubjectRow>,
    /// Semester breakdown, for CGPA reports.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub semesters:     Vec<SemesterRow>,
}

impl From<SgpaOutcome> for GpaReport {
    fn from(outcome: SgpaOutcome) -> Self {
        let subjects = outcome
            .subjects
            .iter()
            .map(|s| SubjectRow {
                subject: s.position,
                credits: s.entry.credits,
                score:   match s.entry.score {
                    Score::Marks(m) => m.to_string(),
                    Score::Letter(l) => l.to_string(),
                },
                points:  s.points,
            })
            .collect();

        Self {
            kind: ReportKind::Sgpa,
            value: outcome.value,
            total_credits: Some(outcome.total_credits),
            subjects,
            semesters: Vec::new(),
        }
    }
}

impl From<CgpaOutcome> for GpaReport {
    fn from(outcome: CgpaOutcome) -> Self {
        let semesters = outcome
            .semesters
            .iter()
            .enumerate()
            .map(|(i, s)| SemesterRow {
                semester: i + 1,
                sgpa:     s.sgpa,
            })
            .collect();

        Self {
            kind: ReportKind::Cgpa,
            value: outcome.value,
            total_credits: None,
            subjects: Vec::new(),
            semesters,
        }
    }
}

impl GpaReport {
    /// The value formatted with two decimals, e.g. `8.00`.
    pub fn formatted_value(&self) -> String {
        format!("{:.2}", self.value)
    }

    /// One line summary, e.g. `Your SGPA is 5.29`.
    pub fn summary(&self) -> String {
        format!("Your {} is {}", self.kind, self.formatted_value())
    }

    /// Renders the breakdown as a table with the result in the footer.
    pub fn table(&self) -> String {
        let mut table = match self.kind {
            ReportKind::Sgpa => Table::new(&self.subjects),
            ReportKind::Cgpa => Table::new(&self.semesters),
        };

        let footer = match self.total_credits {
            Some(credits) => {
                format!("{}: {} over {credits} credits", self.kind, self.formatted_value())
            }
            None => format!("{}: {}", self.kind, self.formatted_value()),
        };

        table
            .with(Panel::header(format!("{} Breakdown", self.kind)))
            .with(Panel::footer(footer))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern());

        table.to_string()
    }

    /// Serialises the report as pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Renders `report` in the requested output format.
pub fn render(report: &GpaReport, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(report.table()),
        OutputFormat::Json => report.to_json(),
        OutputFormat::Plain => Ok(report.summary()),
    }
}

#[derive(Tabled)]
/// One row of the printed grade scale
struct ScaleRow {
    #[tabled(rename = "Marks")]
    /// * `marks`: range of marks
    marks:  String,
    #[tabled(rename = "Grade")]
    /// * `grade`: letter grade
    grade:  String,
    #[tabled(rename = "Points")]
    /// * `points`: grade points
    points: u8,
}

/// Renders `scale` as a table of marks ranges, letters and points.
pub fn scale_table(scale: &GradeScale) -> String {
    let rows: Vec<ScaleRow> = scale
        .ranges()
        .into_iter()
        .map(|(marks, band)| ScaleRow {
            marks,
            grade: band.letter.to_string(),
            points: band.points,
        })
        .collect();

    let mut table = Table::new(&rows);
    table
        .with(Panel::header("Grade Scale"))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern());
    table.to_string()
}
