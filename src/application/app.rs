use crate::application::generator::ProfileGenerator;
use crate::application::journey::UserJourney;
use crate::config::Settings;
use crate::domain::aggregation::{DashboardSummary, SummaryCache};
use crate::domain::constants::network::DEFAULT_TOP_CONNECTIONS;
use crate::domain::explorer::{ProfileBrowser, ProfileFilter};
use crate::domain::interests::Interest;
use crate::domain::matching::ProfileMatcher;
use crate::domain::network::NetworkDocument;
use crate::domain::population::Population;
use crate::domain::quiz::{StatementBank, SwipeGame};
use crate::error::{Error, Result};
use crate::infrastructure::assets::{AssetSource, FileSystemSource};
use crate::infrastructure::dataset::{self, LabelCount, PrecomputedAggregates};
use crate::infrastructure::log_messages::application as messages;
use crate::infrastructure::scope::{FetchState, ViewScope};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Everything fetched at startup
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub population: Population,
    pub statements: Arc<StatementBank>,
    pub aggregates: Option<PrecomputedAggregates>,
    pub network: Option<NetworkDocument>,
    pub vocabulary: Option<Vec<Interest>>,
}

/// Chart rows from `aggregates.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrecomputedRows {
    pub age_distribution: Vec<LabelCount>,
    pub relationship_goals: Vec<LabelCount>,
    pub interest_distribution: Vec<LabelCount>,
}

impl From<&PrecomputedAggregates> for PrecomputedRows {
    fn from(aggregates: &PrecomputedAggregates) -> Self {
        Self {
            age_distribution: aggregates.age_distribution_rows(),
            relationship_goals: aggregates.relationship_goals_rows(),
            interest_distribution: aggregates.interest_distribution_rows(),
        }
    }
}

/// The dashboard as one serializable document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub summary: DashboardSummary,
    pub interest_network: NetworkDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precomputed: Option<PrecomputedRows>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precomputed_network: Option<NetworkDocument>,
}

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    source: Arc<dyn AssetSource>,
    cache: SummaryCache,
    journey: UserJourney,
    dataset: Option<LoadedDataset>,
}

impl Application {
    pub fn new(settings: Settings) -> Self {
        let source = Arc::new(FileSystemSource::new(settings.data.root.clone()));
        Self::with_source(settings, source)
    }

    pub fn with_source(settings: Settings, source: Arc<dyn AssetSource>) -> Self {
        Self {
            settings,
            source,
            cache: SummaryCache::new(),
            journey: UserJourney::new(),
            dataset: None,
        }
    }

    /// Fetches the population, statement table and precomputed assets concurrently
    ///
    /// The population and statements are required. Precomputed aggregates, the
    /// precomputed network and the interest listing are optional: a failure there is
    /// logged and skipped.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<&LoadedDataset> {
        info!("{}", messages::LOADING_DATASET);
        let scope = ViewScope::new("startup");
        let data = self.settings.data.clone();

        let population = {
            let (source, data) = (self.source.clone(), data.clone());
            scope.spawn(data.users_path.to_string(), async move {
                dataset::load_population(source.as_ref(), &data).await
            })
        };
        let statements = {
            let source = self.source.clone();
            let asset = data.statements_path.clone();
            let label = asset
                .as_ref()
                .map_or_else(|| "built-in statements".to_string(), |a| a.to_string());
            scope.spawn(label, async move {
                dataset::load_statements(source.as_ref(), asset.as_ref())
                    .await
                    .map(Arc::new)
            })
        };
        let aggregates = {
            let (source, asset) = (self.source.clone(), data.aggregates_path.clone());
            scope.spawn(asset.to_string(), async move {
                dataset::load_aggregates(source.as_ref(), &asset).await
            })
        };
        let network = {
            let (source, asset) = (self.source.clone(), data.network_path.clone());
            scope.spawn(asset.to_string(), async move {
                dataset::load_network(source.as_ref(), &asset).await
            })
        };
        let vocabulary = {
            let (source, asset) = (self.source.clone(), data.interests_path.clone());
            scope.spawn(asset.to_string(), async move {
                dataset::load_interests(source.as_ref(), &asset).await
            })
        };

        let population = population.value().await?;
        let statements = statements.value().await?;
        let aggregates = optional(aggregates.asset().to_string(), aggregates.settled().await);
        let network = optional(network.asset().to_string(), network.settled().await);
        let vocabulary = optional(vocabulary.asset().to_string(), vocabulary.settled().await);

        info!(
            records = population.len(),
            statements = statements.len(),
            fingerprint = %population.fingerprint(),
            "{}",
            messages::DATASET_LOADED
        );
        Ok(&*self.dataset.insert(LoadedDataset {
            population,
            statements,
            aggregates,
            network,
            vocabulary,
        }))
    }

    pub fn dataset(&self) -> Result<&LoadedDataset> {
        self.dataset.as_ref().ok_or_else(|| {
            Error::InvalidStateTransition("Dataset requested before it was loaded".to_string())
        })
    }

    pub fn population(&self) -> Result<&Population> {
        Ok(&self.dataset()?.population)
    }

    #[instrument(skip(self))]
    pub fn dashboard(&self) -> Result<DashboardReport> {
        let dataset = self.dataset()?;
        let summary = self.cache.summary(&dataset.population);
        let graph = self
            .cache
            .interest_graph(&dataset.population, &self.settings.network.options());

        let report = DashboardReport {
            summary: summary.as_ref().clone(),
            interest_network: graph.to_document(),
            precomputed: dataset.aggregates.as_ref().map(PrecomputedRows::from),
            precomputed_network: dataset.network.clone(),
        };
        info!(records = report.summary.total_records, "{}", messages::DASHBOARD_READY);
        Ok(report)
    }

    /// Interests offered by the profile form: the loaded listing, or the whole vocabulary
    pub fn interest_options(&self) -> Result<Vec<Interest>> {
        Ok(match &self.dataset()?.vocabulary {
            Some(listed) if !listed.is_empty() => listed.clone(),
            _ => Interest::ALL.to_vec(),
        })
    }

    /// The heaviest co-occurrence links of one interest, for the network tooltip
    pub fn top_connections(&self, interest: Interest) -> Result<Vec<(Interest, usize)>> {
        let graph = self
            .cache
            .interest_graph(self.population()?, &self.settings.network.options());
        Ok(graph.top_connections(interest, DEFAULT_TOP_CONNECTIONS))
    }

    /// A profile generator writing to this application's journey slot
    pub fn generator(&self) -> ProfileGenerator {
        ProfileGenerator::new(
            ProfileMatcher::new(self.settings.matching.criteria()),
            self.journey.clone(),
        )
    }

    pub fn journey(&self) -> &UserJourney {
        &self.journey
    }

    pub fn browser(&self, filter: ProfileFilter) -> Result<ProfileBrowser<'_>> {
        Ok(ProfileBrowser::new(self.population()?.records(), filter))
    }

    pub fn new_game<R: Rng>(&self, rng: R) -> Result<SwipeGame<R>> {
        SwipeGame::new(
            self.dataset()?.statements.clone(),
            self.settings.game.rounds,
            rng,
        )
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

fn optional<T>(asset: String, state: FetchState<T>) -> Option<T> {
    match state {
        FetchState::Ready(value) => Some(value),
        FetchState::Failed(reason) => {
            warn!(asset = %asset, reason = %reason, "{}", messages::OPTIONAL_ASSET_UNAVAILABLE);
            None
        }
        FetchState::Loading | FetchState::Cancelled => None,
    }
}
