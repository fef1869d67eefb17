use gradepoint::{
    ErrorKind, GpaError, GradeScale, LetterGrade, SubjectEntry, calc::sgpa,
};

fn scale() -> GradeScale {
    GradeScale::standard()
}

#[test]
fn weighted_average_rounds_once() {
    let outcome = sgpa(
        &[SubjectEntry::new(4.0, 95.0), SubjectEntry::new(3.0, 65.0)],
        &scale(),
    )
    .expect("sgpa");

    assert_eq!(outcome.value, 5.29);
    assert_eq!(outcome.total_credits, 7.0);
    assert_eq!(outcome.subjects[0].points, 10);
    assert_eq!(outcome.subjects[1].points, 7);
}

#[test]
fn letters_and_marks_mix() {
    let outcome = sgpa(
        &[
            SubjectEntry::new(3.0, LetterGrade::O),
            SubjectEntry::new(3.0, 55.0),
            SubjectEntry::builder()
                .credits(2.0)
                .score(LetterGrade::F)
                .build(),
        ],
        &scale(),
    )
    .expect("sgpa");

    // (30 + 18 + 0) / 8
    assert_eq!(outcome.value, 6.0);
}

#[test]
fn fractional_credits_are_weighted() {
    let outcome = sgpa(
        &[SubjectEntry::new(1.5, 85.0), SubjectEntry::new(0.5, 45.0)],
        &scale(),
    )
    .expect("sgpa");

    // (13.5 + 2.5) / 2
    assert_eq!(outcome.value, 8.0);
}

#[test]
fn marks_out_of_range_name_the_subject() {
    let err = sgpa(
        &[SubjectEntry::new(4.0, 80.0), SubjectEntry::new(3.0, 101.0)],
        &scale(),
    )
    .expect_err("marks over 100");

    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err.position(), Some(2));
    assert_eq!(err.to_string(), "Marks for Subject 2 must be between 0 and 100");
}

#[test]
fn zero_credits_are_rejected() {
    let err = sgpa(
        &[SubjectEntry::new(0.0, 80.0), SubjectEntry::new(0.0, 60.0)],
        &scale(),
    )
    .expect_err("zero credits");

    assert_eq!(
        err,
        GpaError::CreditsOutOfRange {
            position: 1,
            credits:  0.0,
        }
    );
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn empty_list_is_degenerate() {
    let err = sgpa(&[], &scale()).expect_err("empty");
    assert_eq!(err, GpaError::NoCredits);
    assert_eq!(err.kind(), ErrorKind::DegenerateInput);
}

#[test]
fn zero_credit_subject_next_to_others_is_rejected() {
    let err = sgpa(
        &[SubjectEntry::new(3.0, 65.0), SubjectEntry::new(0.0, 95.0)],
        &scale(),
    )
    .expect_err("zero credits");

    assert_eq!(err.position(), Some(2));
    assert_eq!(err.title(), "Invalid Credits");
}

#[test]
fn huge_credits_never_yield_infinity_or_nan() {
    for entries in [
        vec![SubjectEntry::new(1e308, 95.0)],
        vec![SubjectEntry::new(1e308, 95.0), SubjectEntry::new(1e308, 65.0)],
    ] {
        let err = sgpa(&entries, &scale()).expect_err("overflow");
        assert_eq!(err, GpaError::CreditsOverflow);
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
    }
}
