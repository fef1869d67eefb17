#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use crate::{
    entry::{Score, SubjectEntry},
    scale::LetterGrade,
};

peg::parser! {
    /// grammars for subjects and SGPA lists given on the command line.
    pub grammar parser() for str {
        /// matches any number of spaces or tabs
        rule whitespace() = quiet!{[' ' | '\t']+}

        /// matches a decimal number, optionally signed, eg. `4`, `3.5`, `.5`
        rule decimal() -> f64
            = n:$("-"? ((['0'..='9']+ ("." ['0'..='9']*)?) / ("." ['0'..='9']+)))
            {? n.parse().or(Err("decimal number")) }

        /// matches a letter grade label, eg. `O`, `A+`
        rule letter() -> LetterGrade
            = l:$(['a'..='z' | 'A'..='Z'] "+"?)
            {? l.parse().or(Err("letter grade (O, A+, A, B+, B, C, F)")) }

        /// matches marks or a letter grade
        rule score() -> Score
            = m:decimal() { Score::Marks(m) }
            / l:letter() { Score::Letter(l) }

        /// separates credits from the score
        rule pair_separator()
            = whitespace()? [':' | '='] whitespace()?

        /// separates SGPA values
        rule list_separator()
            = (whitespace()? "," whitespace()?) / whitespace()

        /// parses `credits:score`, eg. `4:95` or `3:A+`
        pub rule subject() -> SubjectEntry
            = whitespace()? c:decimal() pair_separator() s:score() whitespace()?
            { SubjectEntry::new(c, s) }

        /// parses a list of SGPA values separated by commas or spaces
        pub rule sgpa_list() -> Vec<f64>
            = whitespace()? l:(decimal() ++ list_separator()) whitespace()? { l }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subjects_accept_marks_and_letters() {
        assert_eq!(parser::subject("4:95").ok(), Some(SubjectEntry::new(4.0, 95.0)));
        assert_eq!(
            parser::subject(" 3.5 = a+ ").ok(),
            Some(SubjectEntry::new(3.5, LetterGrade::APlus))
        );
        assert_eq!(parser::subject("2:.5").ok(), Some(SubjectEntry::new(2.0, 0.5)));
    }

    #[test]
    fn subjects_keep_out_of_range_values_for_validation() {
        assert_eq!(parser::subject("-1:120").ok(), Some(SubjectEntry::new(-1.0, 120.0)));
    }

    #[test]
    fn malformed_subjects_are_rejected() {
        assert!(parser::subject("4").is_err());
        assert!(parser::subject("4:D").is_err());
        assert!(parser::subject("four:90").is_err());
        assert!(parser::subject("4:90:1").is_err());
    }

    #[test]
    fn sgpa_lists_split_on_commas_and_spaces() {
        assert_eq!(parser::sgpa_list("7.5, 9.0").ok(), Some(vec![7.5, 9.0]));
        assert_eq!(parser::sgpa_list("8 8 ").ok(), Some(vec![8.0, 8.0]));
        assert!(parser::sgpa_list("").is_err());
        assert!(parser::sgpa_list("8,,9").is_err());
    }
}
