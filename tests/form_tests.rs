use gradepoint::{
    CgpaForm, ErrorKind, Form, GpaError, SgpaForm,
    error::{CountOf, Field},
    report::ReportKind,
};

fn filled_sgpa(rows: &[(&str, &str)]) -> SgpaForm {
    let mut form = SgpaForm::new();
    form.set_count(&rows.len().to_string()).expect("count");
    for (i, (credits, score)) in rows.iter().enumerate() {
        assert!(form.set_credits(i + 1, credits));
        assert!(form.set_score(i + 1, score));
    }
    form
}

#[test]
fn semester_counts_outside_one_to_eight_are_rejected() {
    let mut form = CgpaForm::new();
    for input in ["0", "9"] {
        let err = form.set_count(input).expect_err("out of range");
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(!form.is_open());
        assert!(form.fields().is_empty());
    }
    assert_eq!(form.set_count("8"), Ok(8));
    assert_eq!(form.fields().len(), 8);
}

#[test]
fn subject_count_of_fourteen_is_rejected_and_thirteen_accepted() {
    let mut form = SgpaForm::new();
    let err = form.set_count("14").expect_err("too many");
    assert_eq!(
        err,
        GpaError::CountOutOfRange {
            of:    CountOf::Subjects,
            count: 14,
            min:   1,
            max:   13,
        }
    );
    assert!(!form.is_open());

    assert_eq!(form.set_count("13"), Ok(13));
    assert_eq!(form.slots().len(), 26);
}

#[test]
fn rejected_count_keeps_existing_rows() {
    let mut form = filled_sgpa(&[("4", "95"), ("3", "65")]);
    assert!(form.set_count("abc").is_err());
    assert_eq!(form.fields().len(), 2);
    assert_eq!(form.fields()[0].credits, "4");
}

#[test]
fn empty_marks_field_is_incomplete() {
    let mut form = filled_sgpa(&[("4", "95"), ("3", "")]);
    let err = form.calculate().expect_err("incomplete");
    assert_eq!(err.kind(), ErrorKind::IncompleteData);
    assert_eq!(err.to_string(), "Please fill in all subjects' credits and marks");
    assert!(form.result().is_none());
}

#[test]
fn rows_are_checked_in_order() {
    let mut form = filled_sgpa(&[("4", "150"), ("", "65")]);
    let err = form.calculate().expect_err("bad marks first");
    assert_eq!(err.title(), "Invalid Marks");
    assert_eq!(err.position(), Some(1));

    let mut form = filled_sgpa(&[("", "65"), ("4", "150")]);
    let err = form.calculate().expect_err("empty field first");
    assert_eq!(err.kind(), ErrorKind::IncompleteData);
}

#[test]
fn cgpa_rows_are_checked_in_order() {
    let mut form = CgpaForm::new();
    form.set_count("2").expect("count");
    form.set_sgpa(1, "12");
    let err = form.calculate().expect_err("bad sgpa first");
    assert!(matches!(err, GpaError::SgpaOutOfRange { position: 1, .. }));
}

#[test]
fn huge_credits_are_reported_not_averaged() {
    let mut form = filled_sgpa(&[("1e308", "95")]);
    assert_eq!(form.calculate(), Err(GpaError::CreditsOverflow));

    let mut form = filled_sgpa(&[("1e308", "95"), ("1e308", "65")]);
    assert_eq!(form.calculate(), Err(GpaError::CreditsOverflow));
    assert!(form.result().is_none());
}

#[test]
fn zero_credit_row_is_rejected() {
    let mut form = filled_sgpa(&[("0", "95"), ("3", "65")]);
    let err = form.calculate().expect_err("zero credits");
    assert!(matches!(err, GpaError::CreditsOutOfRange { position: 1, .. }));
}

#[test]
fn calculation_stores_the_result() {
    let mut form = filled_sgpa(&[("4", "95"), ("3", "65")]);
    let outcome = form.calculate().expect("sgpa");
    assert_eq!(outcome.value, 5.29);
    assert_eq!(form.result().map(|r| r.value), Some(5.29));
}

#[test]
fn failed_calculation_keeps_previous_result() {
    let mut form = filled_sgpa(&[("4", "95"), ("3", "65")]);
    form.calculate().expect("sgpa");

    assert!(form.set_score(2, "-3"));
    let err = form.calculate().expect_err("negative marks");
    assert!(matches!(err, GpaError::MarksOutOfRange { position: 2, .. }));
    assert_eq!(form.result().map(|r| r.value), Some(5.29));
}

#[test]
fn non_numeric_credits_are_reported() {
    let mut form = filled_sgpa(&[("four", "95")]);
    let err = form.calculate().expect_err("not a number");
    assert_eq!(
        err,
        GpaError::NotANumber {
            position: 1,
            field:    Field::Credits,
            input:    "four".into(),
        }
    );
}

#[test]
fn letter_grades_are_accepted_in_the_score_field() {
    let mut form = filled_sgpa(&[("3", "O"), ("3", "b")]);
    assert_eq!(form.calculate().expect("sgpa").value, 8.0);
}

#[test]
fn cgpa_form_flags_the_offending_semester() {
    let mut form = CgpaForm::new();
    form.set_count("2").expect("count");
    form.set_sgpa(1, "7.5");
    form.set_sgpa(2, "11");

    let err = form.calculate().expect_err("over ten");
    assert_eq!(err.title(), "Invalid SGPA");
    assert_eq!(err.to_string(), "SGPA for Semester 2 must be between 0 and 10");

    form.set_sgpa(2, "9.0");
    let report = form.submit().expect("cgpa");
    assert_eq!(report.kind, ReportKind::Cgpa);
    assert_eq!(report.value, 8.25);
}

#[test]
fn cgpa_form_requires_every_semester() {
    let mut form = CgpaForm::new();
    form.set_count("3").expect("count");
    form.set_sgpa(1, "8");
    form.set_sgpa(3, "8");
    assert_eq!(
        form.calculate().expect_err("incomplete"),
        GpaError::IncompleteData("semester SGPAs".into())
    );
}

#[test]
fn reset_closes_the_form() {
    let mut form = filled_sgpa(&[("4", "95")]);
    form.calculate().expect("sgpa");
    form.reset();
    assert!(!form.is_open());
    assert!(form.result().is_none());
}
