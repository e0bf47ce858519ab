use super::{
    release::Release,
    request::{CreateReleaseRequest, UpdateReleaseRequest},
};
use crate::http::Error;

/// Remote release operations the resolver relies on.
pub trait Releaser {
    /// Fails with [`Error::NotFound`] when no published release carries `tag`.
    /// Drafts are never returned by this lookup.
    async fn get_release_by_tag(&self, owner: &str, repo: &str, tag: &str)
        -> Result<Release, Error>;

    async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateReleaseRequest,
    ) -> Result<Release, Error>;

    async fn update_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        request: &UpdateReleaseRequest,
    ) -> Result<Release, Error>;

    /// Every release of the repository, drafts included, across all pages.
    async fn all_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>, Error>;
}
