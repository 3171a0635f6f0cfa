use crate::application::journey::UserJourney;
use crate::domain::avatar::query_avatar_url;
use crate::domain::matching::{MatchReport, ProfileMatcher, QueryProfile};
use crate::domain::population::Population;
use crate::error::{Error, Result};
use crate::infrastructure::log_messages::application as messages;
use serde::Serialize;
use tracing::{debug, instrument};

/// Result of one generator submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedProfile {
    pub profile: QueryProfile,
    pub avatar_url: String,
    pub report: MatchReport,
}

/// The profile form: matches a submission and remembers it for later views
#[derive(Debug, Clone)]
pub struct ProfileGenerator {
    matcher: ProfileMatcher,
    journey: UserJourney,
}

impl ProfileGenerator {
    pub fn new(matcher: ProfileMatcher, journey: UserJourney) -> Self {
        Self { matcher, journey }
    }

    /// Scores `profile` against the population and stores it in the journey slot
    ///
    /// On an empty population nothing is stored and `EmptyPopulation` is returned.
    #[instrument(skip(self, population), fields(records = population.len()))]
    pub fn generate(
        &self,
        population: &Population,
        profile: QueryProfile,
    ) -> Result<GeneratedProfile> {
        let report = match self.matcher.evaluate(population.records(), &profile) {
            Ok(report) => report,
            Err(Error::EmptyPopulation) => {
                debug!("{}", messages::PROFILE_NOT_STORED);
                return Err(Error::EmptyPopulation);
            }
            Err(e) => return Err(e),
        };

        self.journey.set_profile(profile.clone());
        debug!(match_percent = %report.match_percent, "{}", messages::PROFILE_STORED);

        Ok(GeneratedProfile {
            avatar_url: query_avatar_url(&profile),
            profile,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interests::Interest;
    use crate::domain::test_data::synthetic_population;
    use crate::domain::types::{goals, Age, RelationshipGoal};
    use crate::domain::user::Gender;

    fn profile() -> QueryProfile {
        QueryProfile {
            age: Age::try_new(27).unwrap(),
            gender: Gender::Female,
            interests: [Interest::Hiking].into_iter().collect(),
            goal: RelationshipGoal::try_new(goals::MARRIAGE.to_string()).unwrap(),
        }
    }

    #[test]
    fn test_generate_stores_profile() {
        let journey = UserJourney::new();
        let generator = ProfileGenerator::new(ProfileMatcher::default(), journey.clone());
        let population = Population::new(synthetic_population(60));

        let generated = generator.generate(&population, profile()).unwrap();
        assert_eq!(generated.report.population, 60);
        assert!(generated.avatar_url.contains("seed=Female-27-Marriage"));
        assert_eq!(journey.profile(), Some(profile()));
    }

    #[test]
    fn test_empty_population_stores_nothing() {
        let journey = UserJourney::new();
        let generator = ProfileGenerator::new(ProfileMatcher::default(), journey.clone());

        let result = generator.generate(&Population::new(Vec::new()), profile());
        assert!(matches!(result, Err(Error::EmptyPopulation)));
        assert!(!journey.has_profile());
    }
}
