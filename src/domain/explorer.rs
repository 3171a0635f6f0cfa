//! Browsing individual profiles one swipe at a time

use crate::domain::avatar::record_avatar_url;
use crate::domain::quiz::SwipeDirection;
use crate::domain::types::RelationshipGoal;
use crate::domain::user::{Gender, UserRecord};
use serde::{Deserialize, Serialize};

/// Which records the explorer cycles through
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "lowercase")]
pub enum ProfileFilter {
    #[default]
    All,
    Gender(Gender),
    Goal(RelationshipGoal),
}

impl ProfileFilter {
    pub fn accepts(&self, record: &UserRecord) -> bool {
        match self {
            ProfileFilter::All => true,
            ProfileFilter::Gender(gender) => record.gender == *gender,
            ProfileFilter::Goal(goal) => record.goal == *goal,
        }
    }
}

/// A cyclic cursor over the records accepted by a filter
///
/// Either swipe direction advances; the cursor wraps at the end of the filtered list.
#[derive(Debug, Clone)]
pub struct ProfileBrowser<'a> {
    filtered: Vec<&'a UserRecord>,
    filter: ProfileFilter,
    position: usize,
}

impl<'a> ProfileBrowser<'a> {
    pub fn new(records: &'a [UserRecord], filter: ProfileFilter) -> Self {
        let filtered = records.iter().filter(|r| filter.accepts(r)).collect();
        Self {
            filtered,
            filter,
            position: 0,
        }
    }

    pub fn filter(&self) -> &ProfileFilter {
        &self.filter
    }

    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// `None` when the filter accepts nothing
    pub fn current(&self) -> Option<&'a UserRecord> {
        if self.filtered.is_empty() {
            return None;
        }
        Some(self.filtered[self.position % self.filtered.len()])
    }

    /// Avatar URL of the profile on screen
    pub fn current_avatar_url(&self) -> Option<String> {
        self.current().map(record_avatar_url)
    }

    pub fn swipe(&mut self, _direction: SwipeDirection) -> Option<&'a UserRecord> {
        if self.filtered.is_empty() {
            return None;
        }
        self.position = (self.position + 1) % self.filtered.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_data::RecordBuilder;
    use crate::domain::types::goals;

    fn records() -> Vec<UserRecord> {
        vec![
            RecordBuilder::new(1).gender(Gender::Male).build(),
            RecordBuilder::new(2)
                .gender(Gender::Female)
                .goal(goals::MARRIAGE)
                .build(),
            RecordBuilder::new(3).gender(Gender::Male).build(),
            RecordBuilder::new(4)
                .gender(Gender::Female)
                .goal(goals::FRIENDSHIP)
                .build(),
        ]
    }

    #[test]
    fn test_browser_wraps_around() {
        let records = records();
        let mut browser = ProfileBrowser::new(&records, ProfileFilter::Gender(Gender::Male));
        assert_eq!(browser.len(), 2);
        assert_eq!(browser.current().unwrap().id.into_inner(), 1);
        let second = browser.swipe(SwipeDirection::Left).unwrap();
        assert_eq!(second.id.into_inner(), 3);
        let wrapped = browser.swipe(SwipeDirection::Right).unwrap();
        assert_eq!(wrapped.id.into_inner(), 1);
    }

    #[test]
    fn test_goal_filter() {
        let records = records();
        let goal = RelationshipGoal::try_new(goals::MARRIAGE.to_string()).unwrap();
        let browser = ProfileBrowser::new(&records, ProfileFilter::Goal(goal));
        assert_eq!(browser.len(), 1);
        assert_eq!(browser.current().unwrap().id.into_inner(), 2);
    }

    #[test]
    fn test_empty_filter_has_no_current_profile() {
        let records = records();
        let goal = RelationshipGoal::try_new(goals::LONG_TERM_RELATIONSHIP.to_string()).unwrap();
        let mut browser = ProfileBrowser::new(&records, ProfileFilter::Goal(goal));
        assert!(browser.is_empty());
        assert!(browser.current().is_none());
        assert!(browser.swipe(SwipeDirection::Right).is_none());
    }

    #[test]
    fn test_current_profile_avatar_follows_the_cursor() {
        let records = records();
        let mut browser = ProfileBrowser::new(&records, ProfileFilter::Gender(Gender::Female));
        let first = browser.current_avatar_url().unwrap();
        assert!(first.contains("seed=Female-25-Engineer"));
        assert!(first.contains("hair=long01"));

        browser.swipe(SwipeDirection::Left);
        assert_eq!(
            browser.current_avatar_url(),
            browser.current().map(record_avatar_url)
        );

        let goal = RelationshipGoal::try_new(goals::LONG_TERM_RELATIONSHIP.to_string()).unwrap();
        let empty = ProfileBrowser::new(&records, ProfileFilter::Goal(goal));
        assert!(empty.current_avatar_url().is_none());
    }

    #[test]
    fn test_filter_serde_shape() {
        let json = serde_json::to_value(ProfileFilter::Gender(Gender::Female)).unwrap();
        assert_eq!(json, serde_json::json!({"by": "gender", "value": "female"}));
        let all: ProfileFilter = serde_json::from_value(serde_json::json!({"by": "all"})).unwrap();
        assert_eq!(all, ProfileFilter::All);
    }
}
