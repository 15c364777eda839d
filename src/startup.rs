use crate::components::grouping::{render_cards, render_month_buckets, EventGrouper};
use crate::config::Config;
use crate::error::{env_error, Error, GroupResult};
use crate::input::load_events;
use crate::utils::{i18n, time::parse_timezone};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Resolve the events file from the command line or the `EVENTS_FILE` variable
pub fn events_path(arg: Option<String>) -> GroupResult<PathBuf> {
    arg.or_else(|| std::env::var("EVENTS_FILE").ok())
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            warn!("{}", t!("cli_missing_events_file"));
            env_error("EVENTS_FILE")
        })
}

/// Group the events in `path` and render them as cards
pub async fn render_events_file(config: &Config, path: &Path) -> GroupResult<String> {
    let timezone = parse_timezone(&config.timezone)?;
    let events = load_events(path).await?;
    let grouper = EventGrouper::new(&config.grouping);

    let output = if config.group_by_month {
        let buckets = grouper.group_by_month(&events, &timezone);
        let group_count: usize = buckets.iter().map(|b| b.groups.len()).sum();
        info!("{}", t!("cli_summary", events = events.len(), groups = group_count));
        render_month_buckets(&buckets, &timezone)
    } else {
        let groups = grouper.group(&events);
        info!("{}", t!("cli_summary", events = events.len(), groups = groups.len()));
        render_cards(&groups, &timezone)
    };

    Ok(output)
}

/// Run the command-line front end
pub async fn run(config: Config, path: PathBuf) -> miette::Result<()> {
    let locale = i18n::set_locale(&config.locale);
    info!("Using locale {}", locale);

    let output = render_events_file(&config, &path).await?;
    print!("{}", output);

    Ok(())
}
