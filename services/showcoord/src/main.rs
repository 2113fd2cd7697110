//! showCoord command-line host.
//!
//! Applies a `showCoord` URL parameter to an in-memory map view:
//! - Reads the parameter from a full URL or takes the raw value
//! - Loads the handler configuration from YAML, with flag overrides
//! - Publishes the view (optionally late, to exercise the view wait)
//! - Reprojects between WGS84 and Web Mercator when needed
//! - Prints the applied center as JSON

mod host;
mod mercator;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use coord_common::{Locale, Wkid};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use url_coordinates::{
    CoordinateParameterProcessor, SharedConfig, UrlCoordinatesConfig, ViewSlot, SHOW_COORD_PARAM,
};

use host::{InMemoryView, TracingFeedback, TracingHighlighter};
use mercator::MercatorTransformer;

#[derive(Parser, Debug)]
#[command(name = "showcoord")]
#[command(about = "Apply a showCoord URL parameter to a map view")]
struct Args {
    /// Application URL carrying the showCoord query parameter
    #[arg(long, conflicts_with = "param")]
    url: Option<String>,

    /// Raw showCoord value, e.g. "52.0,7.5,4326"
    #[arg(short, long)]
    param: Option<String>,

    /// Handler configuration file (YAML or JSON)
    #[arg(long, env = "SHOWCOORD_CONFIG")]
    config: Option<PathBuf>,

    /// WKID of the simulated map view
    #[arg(long, default_value = "4326")]
    view_wkid: u32,

    /// Publish the view only after this many milliseconds
    #[arg(long)]
    view_delay_ms: Option<u64>,

    /// Override verboseInput
    #[arg(long)]
    verbose_input: Option<bool>,

    /// Override validateInput
    #[arg(long)]
    validate_input: Option<bool>,

    /// Override defaultWKID
    #[arg(long)]
    default_wkid: Option<u32>,

    /// Override locale (en, de)
    #[arg(long)]
    locale: Option<Locale>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn load_config(&self) -> Result<UrlCoordinatesConfig> {
        let mut config = match &self.config {
            Some(path) => UrlCoordinatesConfig::load_from_file(path)?,
            None => UrlCoordinatesConfig::default(),
        };

        if let Some(verbose) = self.verbose_input {
            config.verbose_input = verbose;
        }
        if let Some(validate) = self.validate_input {
            config.validate_input = validate;
        }
        if let Some(wkid) = self.default_wkid {
            config.default_wkid = Wkid(wkid);
        }
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        Ok(config)
    }

    /// URL parameters as the host would distribute them.
    fn url_parameters(&self) -> Result<HashMap<String, String>> {
        match (&self.url, &self.param) {
            (Some(url), _) => query_parameters(url),
            (None, Some(raw)) => Ok(HashMap::from([(SHOW_COORD_PARAM.to_string(), raw.clone())])),
            (None, None) => bail!("either --url or --param is required"),
        }
    }
}

/// Decode the query string of `url` into a parameter map.
fn query_parameters(url: &str) -> Result<HashMap<String, String>> {
    let parsed = reqwest::Url::parse(url).with_context(|| format!("Invalid URL: {}", url))?;
    Ok(parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect())
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json)?;

    let config = args.load_config()?;
    let params = args.url_parameters()?;

    info!(
        verbose_input = config.verbose_input,
        validate_input = config.validate_input,
        default_wkid = %config.default_wkid,
        view_wkid = args.view_wkid,
        "Starting showCoord host"
    );

    let slot = ViewSlot::new();
    let view = InMemoryView::new(Wkid(args.view_wkid));

    match args.view_delay_ms {
        Some(delay) => {
            let slot = slot.clone();
            let view = view.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(delay)).await;
                slot.set_view(view);
            });
        }
        None => slot.set_view(view.clone()),
    }

    let processor = CoordinateParameterProcessor::new(
        SharedConfig::new(config),
        Arc::new(slot.watcher()),
        Arc::new(MercatorTransformer),
        Arc::new(TracingHighlighter),
        Arc::new(TracingFeedback),
    );

    let applied = processor
        .decode_url_parameters(&params)
        .await
        .context("showCoord could not be applied")?;

    match applied {
        Some(applied) => {
            println!("{}", serde_json::to_string_pretty(&applied)?);
        }
        None => {
            info!("No {} parameter, map keeps its default center", SHOW_COORD_PARAM);
        }
    }

    Ok(())
}
