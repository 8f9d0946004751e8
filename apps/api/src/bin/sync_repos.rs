//! Fetches a GitHub user's public repositories and prints them as project
//! records, ready to paste into the content file.
//!
//! Usage: `GITHUB_USERNAME=someone sync-repos`

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_api::github::{repos_url, select_repos, GitHubRepo};
use folio_api::models::ProjectRecord;

const USER_AGENT: &str = concat!("folio-api/", env!("CARGO_PKG_VERSION"));

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let username = std::env::var("GITHUB_USERNAME")
        .context("Required environment variable 'GITHUB_USERNAME' is not set")?;

    let url = repos_url(&username);
    info!("Fetching repositories for {username}");

    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let response = client
        .get(&url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        bail!("GitHub returned {status}: {body}");
    }

    let repos: Vec<GitHubRepo> = response
        .json()
        .await
        .context("GitHub response was not a repository list")?;
    let total = repos.len();
    let selected = select_repos(repos);
    if selected.is_empty() {
        warn!("No described, non-fork repositories among {total}");
    }

    for repo in &selected {
        info!(
            name = %repo.name,
            language = repo.language.as_deref().unwrap_or("Not specified"),
            stars = repo.stargazers_count,
            forks = repo.forks_count,
            updated = %repo.updated_at.date_naive(),
            "Selected repository"
        );
    }
    info!("Kept {} of {total} repositories", selected.len());

    let projects: Vec<ProjectRecord> = selected.into_iter().map(ProjectRecord::from).collect();
    println!("{}", serde_json::to_string_pretty(&projects)?);

    Ok(())
}
