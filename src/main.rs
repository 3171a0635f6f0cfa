use anyhow::Result;
use swipe_stats::config::Settings;
use swipe_stats::domain::config_types::LogFormat;
use swipe_stats::infrastructure::log_messages::{application, configuration};
use swipe_stats::Application;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.as_str()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match settings.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }

    info!(root = %settings.data.root.display(), "{}", configuration::CONFIG_LOADED);
    info!("{}", application::STARTING);

    let mut app = Application::new(settings);
    app.load().await?;
    let report = app.dashboard()?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
