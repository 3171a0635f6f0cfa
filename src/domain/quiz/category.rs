use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topic a quiz statement is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementCategory {
    Age,
    Swiping,
    Gender,
    Interests,
    Usage,
    Education,
    Height,
    Relationship,
    Occupation,
    Children,
}

impl StatementCategory {
    pub const COUNT: usize = 10;

    pub const ALL: [StatementCategory; StatementCategory::COUNT] = [
        StatementCategory::Age,
        StatementCategory::Swiping,
        StatementCategory::Gender,
        StatementCategory::Interests,
        StatementCategory::Usage,
        StatementCategory::Education,
        StatementCategory::Height,
        StatementCategory::Relationship,
        StatementCategory::Occupation,
        StatementCategory::Children,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementCategory::Age => "age",
            StatementCategory::Swiping => "swiping",
            StatementCategory::Gender => "gender",
            StatementCategory::Interests => "interests",
            StatementCategory::Usage => "usage",
            StatementCategory::Education => "education",
            StatementCategory::Height => "height",
            StatementCategory::Relationship => "relationship",
            StatementCategory::Occupation => "occupation",
            StatementCategory::Children => "children",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StatementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatementCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatementCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid statement category: {s}"))
    }
}
