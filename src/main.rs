//! A one-shot batch job that posts a monthly reminder to a Slack channel,
//! listing everyone rostered for rides next month.
//!
//! Triggered by an external scheduler; runs the pipeline once and exits.
//! Failing to read the roster or deliver the message is fatal; failing to
//! resolve names to Slack identities merely degrades the mentions to plain
//! text.

use chrono::Local;
use config::Config;
use dotenvy::dotenv;
use error::Failure;
use period::TargetPeriod;
use report::Report;
use sheets::api::{SheetsClient, SpreadsheetId};
use sheets::auth::ServiceAccountKey;
use slack::api::SlackClient;
use slack::mention::{self, Mention};
use std::process::ExitCode;
use tracing::{error, info, warn};

mod config;
mod de;
mod error;
mod period;
mod report;
mod roster;
mod sheets;
mod slack;

/// Application entrypoint. Initialises tracing, validates configuration, and
/// runs the pipeline once.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        warn!("No .env found");
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// The whole pipeline: compute the window, read the roster, extract the
/// participants, resolve their identities, post the reminder.
async fn run(config: &Config) -> Result<(), Failure> {
    info!("Starting monthly ride reminder");

    let period = TargetPeriod::following(Local::now().date_naive());
    info!("Looking for rides in {}", period.label());

    let rows = {
        let key = ServiceAccountKey::from_file(&config.key_file)?;
        let spreadsheet = SpreadsheetId::from_share_url(&config.spreadsheet_url)?;

        let sheets = SheetsClient::new(sheets::api::API_BASE.to_owned());
        let token = sheets.authenticate(&key).await?;
        sheets
            .fetch_rows(&spreadsheet, &config.worksheet, &token)
            .await?
    };

    let participants = roster::extract_participants(&rows, &period);
    info!(
        "Found {} unique participants for {}",
        participants.len(),
        period.label()
    );

    let slack_client = SlackClient::new(slack::api::API_BASE.to_owned());

    let identities = slack_client
        .identity_map_or_empty(&config.channel, config.membership_scope, &config.slack_token)
        .await;
    info!("Built identity map with {} entries", identities.len());

    let mentions: Vec<Mention> = participants
        .iter()
        .map(|name| mention::resolve(&identities, name))
        .collect();
    let maintainer = mention::resolve(&identities, &config.maintainer);

    let report = Report::build(&period, &config.spreadsheet_url, &mentions, &maintainer);

    slack_client
        .post_message(
            &config.channel,
            &report.blocks,
            &report.fallback,
            &config.slack_token,
        )
        .await?;

    info!("Successfully posted reminder to Slack");
    Ok(())
}
