#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use colored::Colorize;
use serde::Serialize;

use crate::{error::GpaError, report::GpaReport};

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Variant {
    /// The action completed.
    Success,
    /// The action was rejected.
    Destructive,
}

/// A short message shown after an action, made of a title and a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Headline, e.g. `Invalid Input`.
    pub title:       String,
    /// Details, e.g. `Number of subjects must be between 1 and 13`.
    pub description: String,
    /// Presentation style.
    pub variant:     Variant,
}

impl Notification {
    /// Whether this notification reports a rejected action.
    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

impl From<&GpaError> for Notification {
    fn from(err: &GpaError) -> Self {
        Self {
            title:       err.title().to_string(),
            description: err.to_string(),
            variant:     Variant::Destructive,
        }
    }
}

impl From<&GpaReport> for Notification {
    fn from(report: &GpaReport) -> Self {
        Self {
            title:       format!("{} Calculated!", report.kind),
            description: report.summary(),
            variant:     Variant::Success,
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let title = match self.variant {
            Variant::Success => self.title.green().bold(),
            Variant::Destructive => self.title.red().bold(),
        };
        write!(f, "{title}\n  {}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CountOf;

    #[test]
    fn errors_become_destructive_notifications() {
        let err = GpaError::CountOutOfRange {
            of:    CountOf::Subjects,
            count: 14,
            min:   1,
            max:   13,
        };
        let note = Notification::from(&err);
        assert!(note.is_destructive());
        assert_eq!(note.title, "Invalid Input");
        assert_eq!(note.description, "Number of subjects must be between 1 and 13");
    }

    #[test]
    fn display_keeps_title_and_description() {
        colored::control::set_override(false);
        let note = Notification {
            title:       "Incomplete Data".into(),
            description: "Please fill in all semester SGPAs".into(),
            variant:     Variant::Destructive,
        };
        assert_eq!(
            note.to_string(),
            "Incomplete Data\n  Please fill in all semester SGPAs"
        );
    }
}
