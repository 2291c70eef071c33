mod client;
mod summary;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::client::ApiClient;
use crate::summary::extract_company_summary;

/// Fetches company and profile records from the data API and dumps raw plus
/// summarized JSON files.
#[derive(Debug, Parser)]
#[command(name = "analysis")]
struct Args {
    /// Data API root URL
    #[arg(long)]
    base_url: String,

    /// Company username to fetch
    #[arg(long, default_value = "leartech")]
    company: String,

    /// Profile username to fetch
    #[arg(long, default_value = "dr-libin-pallikunnel-kurian-88741530")]
    profile: String,

    /// Output directory for JSON results
    #[arg(long, default_value = "results")]
    out: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tokio::fs::create_dir_all(&args.out).await?;
    let client = ApiClient::new(&args.base_url);

    // Each fetch is independent and best-effort: a failure is logged and the
    // remaining steps still run.
    if let Err(e) = fetch_company(&client, &args).await {
        error!("Exception occurred while retrieving company data: {e}");
    }
    if let Err(e) = fetch_profile(&client, &args).await {
        error!("Exception occurred while retrieving user profile data: {e}");
    }

    info!("Data analysis complete");
    Ok(())
}

async fn fetch_company(client: &ApiClient, args: &Args) -> Result<()> {
    let response = client
        .call_api("LinkedIn/get_company_details", &[("username", &args.company)])
        .await?;

    write_json(&args.out.join("company_raw_data.json"), &response).await?;
    info!("Company data retrieved and saved");

    if response.success {
        if let Some(data) = &response.data {
            let summary = extract_company_summary(data);
            write_json(&args.out.join("company_summary.json"), &summary).await?;
            info!("Company summary extracted and saved");
        }
    } else {
        error!(
            "Error retrieving company data: {}",
            response.message.as_deref().unwrap_or("unknown")
        );
    }

    Ok(())
}

async fn fetch_profile(client: &ApiClient, args: &Args) -> Result<()> {
    let response = client
        .call_api(
            "LinkedIn/get_user_profile_by_username",
            &[("username", &args.profile)],
        )
        .await?;

    write_json(&args.out.join("user_raw_data.json"), &response).await?;
    info!("User profile data retrieved and saved");

    if !response.success {
        error!(
            "Error retrieving user profile data: {}",
            response.message.as_deref().unwrap_or("unknown")
        );
    }

    Ok(())
}

async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let body = serde_json::to_vec_pretty(value)?;
    tokio::fs::write(path, body).await?;
    Ok(())
}
