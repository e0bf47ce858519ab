pub mod asset;
pub mod github_client;
mod macros;
pub mod mime;
pub mod release;
pub mod releaser;
pub mod repository;
pub mod request;
pub mod tag;

use self::{
    asset::{Asset, UploadedAsset},
    github_client::GithubClient,
    release::Release,
    releaser::Releaser,
    repository::Repository,
    request::{CreateReleaseRequest, UpdateReleaseRequest},
    tag::Tag,
};
use crate::{config::Config, http::Error};
use anyhow::{Context, Result};
use std::path::Path;

/// Finds the release for the configured tag, creating or updating it when needed.
///
/// A creation failing with anything but not found is assumed to be a race with a
/// concurrent run that created the release first, so resolution starts over.
/// There is no retry limit.
pub async fn release<R: Releaser>(
    config: &Config,
    repository: &Repository,
    releaser: &R,
) -> Result<Release> {
    let tag = config.tag();
    let body = config.release_body()?;
    let mut attempt: u32 = 1;

    loop {
        log::debug!("resolving release for tag {} (attempt {})", tag.value(), attempt);

        match find_release(repository, &tag, releaser).await {
            Ok(release) => {
                return reconcile(config, repository, &tag, body.as_deref(), release, releaser)
                    .await;
            }
            Err(Error::NotFound { .. }) => {
                log::info!("Creating new release for tag {}...", tag.value());

                let request = CreateReleaseRequest::new(
                    tag.value(),
                    config.release_name(&tag),
                    body.clone(),
                    config.draft,
                    config.prerelease,
                );

                match releaser
                    .create_release(&repository.owner, &repository.name, &request)
                    .await
                {
                    Ok(release) => return Ok(release),
                    Err(err @ Error::NotFound { .. }) => {
                        log::error!("Cannot create release for tag {}: {}", tag.value(), err);
                        return Err(err)
                            .context(format!("Cannot create the release for tag {}", tag.value()));
                    }
                    Err(err) => {
                        log::warn!("Release creation failed: {}, retrying...", err);
                        attempt += 1;
                    }
                }
            }
            Err(err) => {
                log::error!(
                    "Unexpected error fetching release for tag {}: {}",
                    config.github_ref,
                    err
                );
                return Err(err)
                    .context(format!("Cannot fetch the release for tag {}", tag.value()));
            }
        }
    }
}

/// Drafts are invisible to the tag lookup, so the full release list is scanned first.
async fn find_release<R: Releaser>(
    repository: &Repository,
    tag: &Tag,
    releaser: &R,
) -> Result<Release, Error> {
    let releases = releaser
        .all_releases(&repository.owner, &repository.name)
        .await?;

    if let Some(release) = releases
        .into_iter()
        .find(|release| release.tag_name == tag.value())
    {
        log::debug!("found release {} in the release list", release.id);
        return Ok(release);
    }

    releaser
        .get_release_by_tag(&repository.owner, &repository.name, tag.value())
        .await
}

async fn reconcile<R: Releaser>(
    config: &Config,
    repository: &Repository,
    tag: &Tag,
    body: Option<&str>,
    release: Release,
    releaser: &R,
) -> Result<Release> {
    if !config.update_draft_flag || config.update_draft_mode == release.draft {
        log::info!(
            "Found release {} ({}) for tag {}, draft: {}, prerelease: {}",
            release.name.as_deref().unwrap_or_default(),
            release.id,
            tag.value(),
            release.draft,
            release.prerelease
        );
        return Ok(release);
    }

    log::info!(
        "Updating draft state of release {} to {}",
        release.id,
        config.update_draft_mode
    );

    let request = UpdateReleaseRequest::new(
        tag.value(),
        &release.target_commitish,
        config.release_name(tag),
        format!(
            "{}\n{}",
            release.body.as_deref().unwrap_or_default(),
            body.unwrap_or_default()
        ),
        config.update_draft_mode,
        config.prerelease,
    );

    releaser
        .update_release(&repository.owner, &repository.name, release.id, &request)
        .await
        .with_context(|| format!("Cannot update release {}", release.id))
}

/// Uploads a file to the release, deleting any asset already published under the same name.
pub async fn upload(
    client: &GithubClient,
    repository: &Repository,
    release: &Release,
    path: impl AsRef<Path>,
) -> Result<UploadedAsset> {
    let asset = Asset::load(path).await?;
    log::info!("Uploading {}...", asset.name);

    let assets = client
        .list_release_assets(&repository.owner, &repository.name, release.id)
        .await
        .context("Cannot list release assets")?;

    if let Some(duplicated) = assets.iter().find(|existing| existing.name == asset.name) {
        log::debug!("deleting existing asset {} ({})", duplicated.name, duplicated.id);
        client
            .delete_release_asset(&repository.owner, &repository.name, duplicated.id)
            .await
            .with_context(|| format!("Cannot delete existing asset {}", duplicated.name))?;
    }

    let name = asset.name.to_owned();
    let uploaded = client
        .upload_release_asset(&repository.owner, &repository.name, release, asset)
        .await
        .with_context(|| format!("Cannot upload asset {}", name))?;

    log::debug!("uploaded asset {} ({})", uploaded.name, uploaded.id);

    Ok(uploaded)
}
