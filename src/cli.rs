#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;

use crate::{
    calc,
    constants::{SEMESTER_COUNT, SUBJECT_COUNT},
    entry::{SemesterEntry, SubjectEntry},
    error::{CountOf, Field, GpaError},
    form::{check_count, parse_number, parse_score},
    parsers::parser,
    report::GpaReport,
    scale::GradeScale,
};

/// Reads `credits:score` specs given on the command line.
///
/// A spec the grammar rejects is looked at again piece by piece, so the error
/// names the subject and field the same way the interactive form does.
pub fn subjects(specs: &[impl AsRef<str>]) -> Result<Vec<SubjectEntry>, GpaError> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let spec: &str = spec.as_ref();
            parser::subject(spec).map_err(|e| {
                tracing::debug!("Could not parse subject `{spec}`: {e}");
                diagnose_subject(i + 1, spec)
            })
        })
        .collect()
}

/// Works out why subject `position` did not parse.
fn diagnose_subject(position: usize, spec: &str) -> GpaError {
    let Some((credits, score)) = spec.split_once([':', '=']) else {
        return GpaError::IncompleteData("subjects' credits and marks".into());
    };
    if credits.trim().is_empty() || score.trim().is_empty() {
        return GpaError::IncompleteData("subjects' credits and marks".into());
    }
    if let Err(e) = parse_number(position, Field::Credits, credits) {
        return e;
    }
    match parse_score(position, score) {
        Err(e) => e,
        Ok(_) => GpaError::NotANumber {
            position,
            field: Field::Credits,
            input: spec.to_string(),
        },
    }
}

/// Reads SGPA values given on the command line, separated by spaces or
/// commas.
pub fn semesters(values: &[impl AsRef<str>]) -> Result<Vec<SemesterEntry>, GpaError> {
    let joined = values.iter().map(AsRef::<str>::as_ref).join(" ");
    match parser::sgpa_list(&joined) {
        Ok(sgpas) => Ok(sgpas.into_iter().map(SemesterEntry::new).collect()),
        Err(e) => {
            tracing::debug!("Could not parse SGPA values `{joined}`: {e}");
            Err(diagnose_semesters(&joined))
        }
    }
}

/// Finds the first SGPA value in `joined` that is missing or not a number.
fn diagnose_semesters(joined: &str) -> GpaError {
    let mut position = 0;
    for piece in joined.split(',') {
        if piece.trim().is_empty() {
            return GpaError::IncompleteData("semester SGPAs".into());
        }
        for word in piece.split_whitespace() {
            position += 1;
            if let Err(e) = parse_number(position, Field::Sgpa, word) {
                return e;
            }
        }
    }
    GpaError::NotANumber {
        position: 1,
        field:    Field::Sgpa,
        input:    joined.to_string(),
    }
}

/// Computes the SGPA of subjects given on the command line.
///
/// The number of specs is the subject count and must lie within the same
/// bounds as the SGPA form.
pub fn evaluate_sgpa(
    specs: &[impl AsRef<str>],
    scale: &GradeScale,
) -> Result<GpaReport, GpaError> {
    let entries = subjects(specs)?;
    check_count(entries.len(), CountOf::Subjects, &SUBJECT_COUNT)?;
    calc::sgpa(&entries, scale).map(GpaReport::from)
}

/// Computes the CGPA of SGPA values given on the command line.
///
/// The number of values is the semester count and must lie within the same
/// bounds as the CGPA form.
pub fn evaluate_cgpa(values: &[impl AsRef<str>]) -> Result<GpaReport, GpaError> {
    let entries = semesters(values)?;
    check_count(entries.len(), CountOf::Semesters, &SEMESTER_COUNT)?;
    calc::cgpa(&entries).map(GpaReport::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_letter_names_the_subject() {
        let err = subjects(&["4:95", "4:D"]).expect_err("bad letter");
        assert_eq!(
            err,
            GpaError::UnknownLetter {
                position: 2,
                input:    "D".into(),
            }
        );
    }

    #[test]
    fn non_numeric_credits_are_reported() {
        let err = subjects(&["four:90"]).expect_err("bad credits");
        assert!(matches!(
            err,
            GpaError::NotANumber {
                position: 1,
                field: Field::Credits,
                ..
            }
        ));
    }

    #[test]
    fn missing_score_is_incomplete() {
        for spec in ["4", "4:", ":90"] {
            let err = subjects(&[spec]).expect_err("missing half");
            assert_eq!(err.title(), "Incomplete Data");
        }
    }

    #[test]
    fn bad_sgpa_value_is_located() {
        let err = semesters(&["7.5", "nine"]).expect_err("word");
        assert!(matches!(
            err,
            GpaError::NotANumber {
                position: 2,
                field: Field::Sgpa,
                ..
            }
        ));
        let err = semesters(&["8,,9"]).expect_err("gap");
        assert_eq!(err, GpaError::IncompleteData("semester SGPAs".into()));
    }
}
