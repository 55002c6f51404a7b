use crate::records::Record;
use percept::BinaryLabel;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which population the records describe. Only captions and outcome names differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Employee,
    Student,
}

impl Profile {
    pub fn title(self) -> &'static str {
        match self {
            Profile::Employee => "Staff Management - Perceptron",
            Profile::Student => "Student Performance - Perceptron",
        }
    }

    pub fn entity(self) -> &'static str {
        match self {
            Profile::Employee => "Employee",
            Profile::Student => "Student",
        }
    }

    pub fn hours_caption(self) -> &'static str {
        match self {
            Profile::Employee => "Working hours",
            Profile::Student => "Study hours",
        }
    }

    pub fn percentage_caption(self) -> &'static str {
        match self {
            Profile::Employee => "Productivity",
            Profile::Student => "Attendance",
        }
    }

    /// Human-readable text for a predicted or recorded label.
    pub fn outcome(self, label: BinaryLabel) -> &'static str {
        match (self, label) {
            (Profile::Employee, BinaryLabel::Positive) => "Performing",
            (Profile::Employee, BinaryLabel::Negative) => "Not performing",
            (Profile::Student, BinaryLabel::Positive) => "Pass",
            (Profile::Student, BinaryLabel::Negative) => "Fail",
        }
    }

    pub fn describe(self, record: &Record) -> String {
        format!(
            "{}h, {}%, {}",
            record.hours,
            record.percentage,
            self.outcome(record.label)
        )
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Profile::Employee => write!(f, "employee"),
            Profile::Student => write!(f, "student"),
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "employee" => Ok(Profile::Employee),
            "student" => Ok(Profile::Student),
            other => Err(format!("unknown profile '{}'", other)),
        }
    }
}
