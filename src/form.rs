#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::{
    calc::{self, CgpaOutcome, SgpaOutcome},
    constants::{SEMESTER_COUNT, SUBJECT_COUNT},
    entry::{Score, SemesterEntry, SubjectEntry},
    error::{CountOf, Field, GpaError},
    report::GpaReport,
    scale::{GradeScale, LetterGrade},
};

/// Parses a count typed by the user and checks it against `bounds`.
///
/// * `input`: the raw text, surrounding whitespace is ignored
/// * `of`: what is being counted, for error messages
/// * `bounds`: accepted counts, inclusive
pub fn parse_count(
    input: &str,
    of: CountOf,
    bounds: &RangeInclusive<usize>,
) -> Result<usize, GpaError> {
    let count = input
        .trim()
        .parse::<i64>()
        .map_err(|_| GpaError::InvalidCount {
            of,
            input: input.to_string(),
        })?;

    match usize::try_from(count) {
        Ok(n) if bounds.contains(&n) => Ok(n),
        _ => Err(GpaError::CountOutOfRange {
            of,
            count,
            min: *bounds.start(),
            max: *bounds.end(),
        }),
    }
}

/// Checks an already numeric count against `bounds`.
pub fn check_count(
    count: usize,
    of: CountOf,
    bounds: &RangeInclusive<usize>,
) -> Result<usize, GpaError> {
    if bounds.contains(&count) {
        Ok(count)
    } else {
        Err(GpaError::CountOutOfRange {
            of,
            count: i64::try_from(count).unwrap_or(i64::MAX),
            min: *bounds.start(),
            max: *bounds.end(),
        })
    }
}

/// Parses a decimal value typed into `field` of entry `position`.
pub fn parse_number(position: usize, field: Field, input: &str) -> Result<f64, GpaError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| GpaError::NotANumber {
            position,
            field,
            input: input.to_string(),
        })
}

/// Parses a subject score: a number is read as marks, anything else must be a
/// letter grade.
pub fn parse_score(position: usize, input: &str) -> Result<Score, GpaError> {
    if let Ok(marks) = parse_number(position, Field::Score, input) {
        return Ok(Score::Marks(marks));
    }
    input
        .parse::<LetterGrade>()
        .map(Score::Letter)
        .map_err(|_| GpaError::UnknownLetter {
            position,
            input: input.to_string(),
        })
}

/// Identifies one input field of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    /// 1-based entry position.
    pub id:    usize,
    /// Which of the entry's fields.
    pub field: Field,
}

impl Slot {
    /// Human readable label for the field, e.g. `Subject 2 credits`.
    pub fn label(&self) -> String {
        match self.field {
            Field::Credits => format!("Subject {} credits", self.id),
            Field::Score => format!("Subject {} marks or grade", self.id),
            Field::Sgpa => format!("Semester {} SGPA", self.id),
            Field::Count => "Count".to_string(),
        }
    }
}

/// Shared lifecycle of the SGPA and CGPA screens.
///
/// A form starts closed. Setting a valid count opens it with that many blank
/// entries; fields are then filled one at a time and the form is submitted.
/// Failed operations leave the form as it was.
pub trait Form {
    /// What the count of this form refers to.
    const COUNT_OF: CountOf;

    /// Accepted counts.
    fn bounds(&self) -> RangeInclusive<usize>;

    /// Validates `input` as a count and opens the form with that many blank
    /// entries.
    fn set_count(&mut self, input: &str) -> Result<usize, GpaError>;

    /// Every fillable field, in the order they are shown.
    fn slots(&self) -> Vec<Slot>;

    /// Raw text currently held by a field.
    fn value(&self, slot: Slot) -> Option<&str>;

    /// Stores raw text into a field. Returns `false` if the slot does not
    /// exist on this form.
    fn fill(&mut self, slot: Slot, value: &str) -> bool;

    /// Validates all fields and computes the result.
    fn submit(&mut self) -> Result<GpaReport, GpaError>;

    /// Discards entries and results, closing the form.
    fn reset(&mut self);

    /// Whether a count has been accepted.
    fn is_open(&self) -> bool {
        !self.slots().is_empty()
    }
}

/// Raw text of one subject row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubjectField {
    /// 1-based position.
    pub id:      usize,
    /// Credits as typed.
    pub credits: String,
    /// Marks or letter grade as typed.
    pub score:   String,
}

/// State of the SGPA screen.
#[derive(Debug, Clone, Default)]
pub struct SgpaForm {
    /// Scale used to convert marks.
    scale:  GradeScale,
    /// One row per subject.
    fields: Vec<SubjectField>,
    /// Last successful computation.
    result: Option<SgpaOutcome>,
}

impl SgpaForm {
    /// A closed form using the standard scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently on the form.
    pub fn fields(&self) -> &[SubjectField] {
        &self.fields
    }

    /// Last successful result, if any.
    pub fn result(&self) -> Option<&SgpaOutcome> {
        self.result.as_ref()
    }

    /// Sets the credits text of subject `id`.
    pub fn set_credits(&mut self, id: usize, value: &str) -> bool {
        self.fill(
            Slot {
                id,
                field: Field::Credits,
            },
            value,
        )
    }

    /// Sets the marks or grade text of subject `id`.
    pub fn set_score(&mut self, id: usize, value: &str) -> bool {
        self.fill(
            Slot {
                id,
                field: Field::Score,
            },
            value,
        )
    }

    /// Parses and checks every row into a [`SubjectEntry`].
    ///
    /// Rows are checked one at a time in order, so an empty field only wins
    /// over bad values in later rows.
    pub fn entries(&self) -> Result<Vec<SubjectEntry>, GpaError> {
        self.fields
            .iter()
            .map(|f| {
                if f.credits.trim().is_empty() || f.score.trim().is_empty() {
                    return Err(GpaError::IncompleteData("subjects' credits and marks".into()));
                }
                let entry = SubjectEntry::new(
                    parse_number(f.id, Field::Credits, &f.credits)?,
                    parse_score(f.id, &f.score)?,
                );
                calc::grade_subject(f.id, &entry, &self.scale)?;
                Ok(entry)
            })
            .collect()
    }

    /// Validates the form and computes the SGPA, remembering it on success.
    pub fn calculate(&mut self) -> Result<SgpaOutcome, GpaError> {
        let entries = self.entries()?;
        let outcome = calc::sgpa(&entries, &self.scale)?;
        self.result = Some(outcome.clone());
        Ok(outcome)
    }
}

impl Form for SgpaForm {
    const COUNT_OF: CountOf = CountOf::Subjects;

    fn bounds(&self) -> RangeInclusive<usize> {
        SUBJECT_COUNT
    }

    fn set_count(&mut self, input: &str) -> Result<usize, GpaError> {
        let count = parse_count(input, Self::COUNT_OF, &self.bounds())?;
        self.fields = (1..=count)
            .map(|id| SubjectField {
                id,
                ..SubjectField::default()
            })
            .collect();
        self.result = None;
        Ok(count)
    }

    fn slots(&self) -> Vec<Slot> {
        self.fields
            .iter()
            .flat_map(|f| {
                [
                    Slot {
                        id:    f.id,
                        field: Field::Credits,
                    },
                    Slot {
                        id:    f.id,
                        field: Field::Score,
                    },
                ]
            })
            .collect()
    }

    fn value(&self, slot: Slot) -> Option<&str> {
        let row = self.fields.iter().find(|f| f.id == slot.id)?;
        match slot.field {
            Field::Credits => Some(row.credits.as_str()),
            Field::Score => Some(row.score.as_str()),
            Field::Sgpa | Field::Count => None,
        }
    }

    fn fill(&mut self, slot: Slot, value: &str) -> bool {
        let Some(row) = self.fields.iter_mut().find(|f| f.id == slot.id) else {
            return false;
        };
        match slot.field {
            Field::Credits => row.credits = value.to_string(),
            Field::Score => row.score = value.to_string(),
            Field::Sgpa | Field::Count => return false,
        }
        true
    }

    fn submit(&mut self) -> Result<GpaReport, GpaError> {
        self.calculate().map(GpaReport::from)
    }

    fn reset(&mut self) {
        self.fields.clear();
        self.result = None;
    }
}

/// Raw text of one semester row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SemesterField {
    /// 1-based position.
    pub id:   usize,
    /// SGPA as typed.
    pub sgpa: String,
}

/// State of the CGPA screen.
#[derive(Debug, Clone, Default)]
pub struct CgpaForm {
    /// One row per semester.
    fields: Vec<SemesterField>,
    /// Last successful computation.
    result: Option<CgpaOutcome>,
}

impl CgpaForm {
    /// A closed form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently on the form.
    pub fn fields(&self) -> &[SemesterField] {
        &self.fields
    }

    /// Last successful result, if any.
    pub fn result(&self) -> Option<&CgpaOutcome> {
        self.result.as_ref()
    }

    /// Sets the SGPA text of semester `id`.
    pub fn set_sgpa(&mut self, id: usize, value: &str) -> bool {
        self.fill(
            Slot {
                id,
                field: Field::Sgpa,
            },
            value,
        )
    }

    /// Parses and checks every row into a [`SemesterEntry`], in order.
    pub fn entries(&self) -> Result<Vec<SemesterEntry>, GpaError> {
        self.fields
            .iter()
            .map(|f| {
                if f.sgpa.trim().is_empty() {
                    return Err(GpaError::IncompleteData("semester SGPAs".into()));
                }
                let entry = SemesterEntry::new(parse_number(f.id, Field::Sgpa, &f.sgpa)?);
                calc::check_semester(f.id, &entry)?;
                Ok(entry)
            })
            .collect()
    }

    /// Validates the form and computes the CGPA, remembering it on success.
    pub fn calculate(&mut self) -> Result<CgpaOutcome, GpaError> {
        let entries = self.entries()?;
        let outcome = calc::cgpa(&entries)?;
        self.result = Some(outcome.clone());
        Ok(outcome)
    }
}

impl Form for CgpaForm {
    const COUNT_OF: CountOf = CountOf::Semesters;

    fn bounds(&self) -> RangeInclusive<usize> {
        SEMESTER_COUNT
    }

    fn set_count(&mut self, input: &str) -> Result<usize, GpaError> {
        let count = parse_count(input, Self::COUNT_OF, &self.bounds())?;
        self.fields = (1..=count)
            .map(|id| SemesterField {
                id,
                sgpa: String::new(),
            })
            .collect();
        self.result = None;
        Ok(count)
    }

    fn slots(&self) -> Vec<Slot> {
        self.fields
            .iter()
            .map(|f| Slot {
                id:    f.id,
                field: Field::Sgpa,
            })
            .collect()
    }

    fn value(&self, slot: Slot) -> Option<&str> {
        if slot.field != Field::Sgpa {
            return None;
        }
        self.fields
            .iter()
            .find(|f| f.id == slot.id)
            .map(|f| f.sgpa.as_str())
    }

    fn fill(&mut self, slot: Slot, value: &str) -> bool {
        if slot.field != Field::Sgpa {
            return false;
        }
        match self.fields.iter_mut().find(|f| f.id == slot.id) {
            Some(row) => {
                row.sgpa = value.to_string();
                true
            }
            None => false,
        }
    }

    fn submit(&mut self) -> Result<GpaReport, GpaError> {
        self.calculate().map(GpaReport::from)
    }

    fn reset(&mut self) {
        self.fields.clear();
        self.result = None;
    }
}
