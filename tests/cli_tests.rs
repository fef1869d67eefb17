use gradepoint::{
    ErrorKind, GpaError, GradeScale,
    cli::{evaluate_cgpa, evaluate_sgpa},
    error::CountOf,
    report::ReportKind,
};

fn specs(n: usize) -> Vec<String> {
    (0..n).map(|_| "3:85".to_string()).collect()
}

#[test]
fn fourteen_subjects_are_rejected() {
    let err = evaluate_sgpa(&specs(14), &GradeScale::standard()).expect_err("too many");
    assert_eq!(
        err,
        GpaError::CountOutOfRange {
            of:    CountOf::Subjects,
            count: 14,
            min:   1,
            max:   13,
        }
    );
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn thirteen_subjects_are_accepted() {
    let report = evaluate_sgpa(&specs(13), &GradeScale::standard()).expect("sgpa");
    assert_eq!(report.kind, ReportKind::Sgpa);
    assert_eq!(report.value, 9.0);
    assert_eq!(report.subjects.len(), 13);
}

#[test]
fn nine_semesters_are_rejected() {
    let values: Vec<String> = (0..9).map(|_| "8".to_string()).collect();
    let err = evaluate_cgpa(&values).expect_err("too many");
    assert!(matches!(
        err,
        GpaError::CountOutOfRange {
            of: CountOf::Semesters,
            count: 9,
            ..
        }
    ));
}

#[test]
fn comma_separated_values_count_one_each() {
    let err = evaluate_cgpa(&["8,8,8", "8 8 8", "8,8,8"]).expect_err("nine values");
    assert_eq!(err.title(), "Invalid Input");

    let report = evaluate_cgpa(&["7.5,", "9.0"]).expect("cgpa");
    assert_eq!(report.value, 8.25);
}

#[test]
fn eight_semesters_are_accepted() {
    let report = evaluate_cgpa(&["8"; 8]).expect("cgpa");
    assert_eq!(report.value, 8.0);
    assert_eq!(report.semesters.len(), 8);
}

#[test]
fn subject_errors_match_the_form() {
    let err = evaluate_sgpa(&["4:95", "3:D"], &GradeScale::standard()).expect_err("letter");
    assert_eq!(err.title(), "Invalid Grade");
    assert_eq!(err.position(), Some(2));

    let err = evaluate_sgpa(&["4:120"], &GradeScale::standard()).expect_err("marks");
    assert_eq!(err.to_string(), "Marks for Subject 1 must be between 0 and 100");
}

#[test]
fn mixed_subjects_compute_the_sgpa() {
    let report = evaluate_sgpa(&["4:95", "3=65"], &GradeScale::standard()).expect("sgpa");
    assert_eq!(report.value, 5.29);
    assert_eq!(report.total_credits, Some(7.0));
}
