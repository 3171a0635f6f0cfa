use crate::domain::config_types::{
    AgeTolerance, AssetPath, CenterLabel, DataFormat, LogFormat, LogLevel, OverlapRatio,
    RequiredAgreements, RoundCount, SuggestionLimit,
};
use crate::domain::constants::{game, matching, network};
use crate::domain::matching::MatchCriteria;
use crate::domain::network::{NetworkOptions, NodeScope};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub data: DataSettings,
    pub matching: MatchingSettings,
    pub network: NetworkSettings,
    pub game: GameSettings,
    pub logging: LoggingSettings,
}

/// Where the static assets live, relative to `root`
#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub root: PathBuf,
    pub format: DataFormat,
    pub users_path: AssetPath,
    pub csv_path: AssetPath,
    pub aggregates_path: AssetPath,
    pub network_path: AssetPath,
    /// Built-in statement table when absent
    pub statements_path: Option<AssetPath>,
    pub interests_path: AssetPath,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatchingSettings {
    pub age_tolerance: AgeTolerance,
    pub required_agreements: RequiredAgreements,
    pub suggestion_limit: SuggestionLimit,
}

impl MatchingSettings {
    pub fn criteria(&self) -> MatchCriteria {
        MatchCriteria {
            age_tolerance: self.age_tolerance,
            required_agreements: self.required_agreements,
            suggestion_limit: self.suggestion_limit,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NetworkSettings {
    pub overlap_ratio: OverlapRatio,
    pub center_label: Option<CenterLabel>,
}

impl NetworkSettings {
    pub fn options(&self) -> NetworkOptions {
        NetworkOptions {
            overlap_ratio: self.overlap_ratio,
            center: self.center_label.clone(),
            scope: NodeScope::Vocabulary,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct GameSettings {
    pub rounds: RoundCount,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        Self::load(&environment, Path::new("config"))
    }

    /// Layers defaults, the files under `config_dir`, then `SWIPE_STATS__*` variables
    pub fn load(environment: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let file = |name: &str| File::from(config_dir.join(name)).required(false);

        let config = Config::builder()
            // Start with default values
            .set_default("data.root", "public")?
            .set_default("data.format", DataFormat::default().as_str())?
            .set_default("data.users_path", "data/users.json")?
            .set_default("data.csv_path", "dataset_preprocessed.csv")?
            .set_default("data.aggregates_path", "data/aggregates.json")?
            .set_default("data.network_path", "data/interest_network.json")?
            .set_default("data.interests_path", "data/interests.json")?
            .set_default(
                "matching.age_tolerance",
                i64::from(matching::DEFAULT_AGE_TOLERANCE),
            )?
            .set_default(
                "matching.required_agreements",
                i64::from(matching::DEFAULT_REQUIRED_AGREEMENTS),
            )?
            .set_default(
                "matching.suggestion_limit",
                matching::DEFAULT_SUGGESTION_LIMIT as i64,
            )?
            .set_default("network.overlap_ratio", network::DEFAULT_OVERLAP_RATIO)?
            .set_default("game.rounds", i64::from(game::DEFAULT_ROUNDS))?
            .set_default("logging.level", LogLevel::default().as_str())?
            .set_default("logging.format", LogFormat::default().as_str())?
            // Add configuration file if it exists
            .add_source(file("default"))
            .add_source(file(environment))
            .add_source(file("local"))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("SWIPE_STATS").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Filesystem location of an asset below the data root
    pub fn asset_location(&self, asset: &AssetPath) -> PathBuf {
        self.data.root.join(asset.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_settings_can_be_loaded() {
        let settings = Settings::new();
        assert!(settings.is_ok());
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load("test", dir.path()).unwrap();
        assert_eq!(settings.data.format, DataFormat::Json);
        assert!(settings.data.statements_path.is_none());
        assert_eq!(settings.matching.criteria(), MatchCriteria::default());
        assert_eq!(settings.network.options(), NetworkOptions::default());
        assert_eq!(settings.game.rounds, RoundCount::default());
        assert_eq!(settings.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_environment_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[matching]\nage_tolerance = 5\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.toml"),
            "[data]\nformat = \"csv\"\nstatements_path = \"data/game_statements.json\"\n\n[network]\ncenter_label = \"Interests\"\n",
        )
        .unwrap();

        let settings = Settings::load("staging", dir.path()).unwrap();
        assert_eq!(settings.matching.age_tolerance.into_inner(), 5);
        assert_eq!(settings.data.format, DataFormat::Csv);
        assert_eq!(
            settings.data.statements_path.as_ref().map(|p| p.to_string()),
            Some("data/game_statements.json".to_string())
        );
        assert!(settings.network.options().center.is_some());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[matching]\nrequired_agreements = 9\n",
        )
        .unwrap();
        assert!(Settings::load("test", dir.path()).is_err());
    }

    #[test]
    fn test_asset_location() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load("test", dir.path()).unwrap();
        assert_eq!(
            settings.asset_location(&settings.data.users_path),
            PathBuf::from("public/data/users.json")
        );
    }
}
