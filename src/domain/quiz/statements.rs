use super::StatementCategory;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One authored true/false claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatement {
    pub statement: String,
    #[serde(rename = "isTrue")]
    pub is_true: bool,
    pub explanation: String,
    pub category: StatementCategory,
}

/// A non-empty, immutable statement table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementBank {
    statements: Vec<GameStatement>,
}

impl StatementBank {
    pub fn new(statements: Vec<GameStatement>) -> Result<Self> {
        if statements.is_empty() {
            return Err(Error::EmptyStatementTable);
        }
        Ok(Self { statements })
    }

    /// The table shipped with the application
    pub fn built_in() -> Self {
        Self {
            statements: AUTHORED
                .iter()
                .map(|(statement, is_true, explanation, category)| GameStatement {
                    statement: (*statement).to_string(),
                    is_true: *is_true,
                    explanation: (*explanation).to_string(),
                    category: *category,
                })
                .collect(),
        }
    }

    pub fn statements(&self) -> &[GameStatement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn in_category(
        &self,
        category: StatementCategory,
    ) -> impl Iterator<Item = &GameStatement> + '_ {
        self.statements
            .iter()
            .filter(move |statement| statement.category == category)
    }
}

impl Default for StatementBank {
    fn default() -> Self {
        Self::built_in()
    }
}

use StatementCategory::*;

const AUTHORED: [(&str, bool, &str, StatementCategory); 33] = [
    (
        "The average age of users is 27 years old",
        true,
        "The dataset shows an average age of 26.98 years, which rounds to 27.",
        Age,
    ),
    (
        "Most users are over 35 years old",
        false,
        "The maximum age in the dataset is 35, and the average is around 27.",
        Age,
    ),
    (
        "Users under 25 are more likely to be looking for casual dating",
        true,
        "Younger users (18-25) show a higher preference for casual dating compared to older age groups.",
        Age,
    ),
    (
        "Users aged 30-35 are more likely to be looking for marriage",
        true,
        "The dataset shows that 65% of users in this age range are seeking marriage or long-term relationships.",
        Age,
    ),
    (
        "Users swipe an average of 50 times per session",
        true,
        "The dataset shows an average of 50.62 swipes per session.",
        Swiping,
    ),
    (
        "People looking for marriage swipe more than those looking for casual dating",
        true,
        "Users seeking marriage have an average of 53.16 swipes, while casual daters average 49.72 swipes.",
        Swiping,
    ),
    (
        "Users with PhDs swipe more than high school graduates",
        true,
        "PhD holders show higher engagement with an average of 52.3 swipes compared to 48.7 for high school graduates.",
        Swiping,
    ),
    (
        "Daily users swipe twice as much as monthly users",
        false,
        "Daily users average 55 swipes per session, while monthly users average 45 swipes - a difference of about 22%.",
        Swiping,
    ),
    (
        "There are more male users than female users",
        true,
        "The dataset shows 50.2% male users and 49.8% female users.",
        Gender,
    ),
    (
        "Female users are more likely to be looking for long-term relationships",
        true,
        "Women show a 15% higher preference for long-term relationships compared to men.",
        Gender,
    ),
    (
        "Male users are more likely to list sports as an interest",
        true,
        "65% of male users list sports as an interest, compared to 45% of female users.",
        Gender,
    ),
    (
        "Users who like sports swipe more than users who like reading",
        false,
        "The dataset shows no significant difference in swiping behavior between different interests.",
        Interests,
    ),
    (
        "Most users have at least 3 common interests",
        true,
        "On average, users have 3.2 interests listed in their profiles.",
        Interests,
    ),
    (
        "Travel is the most common interest among users",
        false,
        "Music and movies are the most common interests, with 65% of users listing them.",
        Interests,
    ),
    (
        "Users who like cooking are more likely to be looking for long-term relationships",
        true,
        "75% of users who list cooking as an interest are seeking long-term relationships or marriage.",
        Interests,
    ),
    (
        "Daily users swipe more than monthly users",
        true,
        "Users who use the app daily tend to have higher swiping counts than monthly users.",
        Usage,
    ),
    (
        "Weekly users are the most active group",
        true,
        "Weekly users show the highest engagement rates with an average of 55 swipes per session.",
        Usage,
    ),
    (
        "Users who check the app daily are more likely to be under 25",
        true,
        "60% of daily users are under 25 years old, suggesting higher engagement among younger users.",
        Usage,
    ),
    (
        "PhD holders swipe less than high school graduates",
        false,
        "Education level doesn't show a significant correlation with swiping behavior.",
        Education,
    ),
    (
        "Most users have at least a Bachelor's degree",
        true,
        "65% of users have a BSc or higher level of education.",
        Education,
    ),
    (
        "Users with higher education are more likely to be looking for marriage",
        true,
        "70% of users with a Master's or PhD are seeking marriage or long-term relationships.",
        Education,
    ),
    (
        "The average height of users is 5.5 feet",
        true,
        "The dataset shows an average height of 5.47 feet.",
        Height,
    ),
    (
        "Male users are on average 6 inches taller than female users",
        false,
        "The height difference between genders is approximately 4 inches on average.",
        Height,
    ),
    (
        "Taller users are more likely to be looking for casual dating",
        false,
        "Height shows no significant correlation with relationship preferences.",
        Height,
    ),
    (
        "Most users are looking for long-term relationships",
        false,
        "The distribution of relationship goals is fairly even across different categories.",
        Relationship,
    ),
    (
        "Users with children prefer long-term relationships",
        true,
        "75% of users with children are looking for long-term relationships or marriage.",
        Relationship,
    ),
    (
        "Users seeking casual dating are more likely to be under 25",
        true,
        "70% of users looking for casual dating are under 25 years old.",
        Relationship,
    ),
    (
        "Engineers are the most common profession among users",
        true,
        "15% of users identify as engineers, making it the most common profession.",
        Occupation,
    ),
    (
        "Doctors swipe more than teachers",
        true,
        "Medical professionals show higher engagement with an average of 54 swipes compared to 48 for teachers.",
        Occupation,
    ),
    (
        "Entrepreneurs are more likely to be looking for casual dating",
        false,
        "Entrepreneurs show a similar distribution of relationship goals as other professions.",
        Occupation,
    ),
    (
        "Most users have at least one child",
        false,
        "Only 35% of users have children, with the majority being childless.",
        Children,
    ),
    (
        "Users with children are more likely to be looking for marriage",
        true,
        "60% of users with children are seeking marriage, compared to 30% of childless users.",
        Children,
    ),
    (
        "Users with children swipe less frequently",
        true,
        "Users with children average 45 swipes per session, compared to 52 for users without children.",
        Children,
    ),
];
