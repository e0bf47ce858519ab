mod config;
mod event;
mod files;
mod github;
mod http;
mod logger;

use anyhow::{bail, Context, Result};
use config::Config;
use github::{github_client::GithubClient, tag::is_tag};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load();
    logger::init(config.log_level())?;

    log::info!(
        "Starting {} v{} for {} at {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.github_repository,
        config.github_ref
    );

    if !event::is_target_event(&config) {
        log::info!("This is not target event.");
        return Ok(());
    }

    if !is_tag(&config.github_ref) {
        bail!("GitHub Releases requires a tag");
    }

    let repository = config.repository()?;
    let files = files::paths(&config.files).context("Cannot resolve the files to upload")?;
    let client = GithubClient::new(config.token()?, &config.api_url);

    log::info!("Resolving release");
    let release = github::release(&config, &repository, &client)
        .await
        .context("Cannot resolve the github release")?;

    for path in &files {
        let asset = github::upload(&client, &repository, &release, path)
            .await
            .with_context(|| format!("Cannot upload {}", path.display()))?;
        log::info!(
            "Uploaded {} ({}, {} bytes) to {}",
            asset.name,
            asset.content_type,
            asset.size,
            asset.browser_download_url
        );
    }

    log::info!("Release ready at {}", release.html_url);

    Ok(())
}
