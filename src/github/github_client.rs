use super::{
    asset::{Asset, UploadedAsset},
    release::Release,
    releaser::Releaser,
    request::{CreateReleaseRequest, SerializeRequest, UpdateReleaseRequest},
};
use crate::{
    delete, get,
    http::{self, Error, HttpClient},
    patch, post, upload_file,
};
use serde::de::DeserializeOwned;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const PER_PAGE: usize = 100;

pub struct GithubClient {
    http: HttpClient,
    api_url: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>, api_url: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(token),
            api_url: api_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}", self.api_url, owner, repo)
    }

    async fn paginate<T: DeserializeOwned>(&self, uri: &str) -> Result<Vec<T>, Error> {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let page_uri = format!("{}?per_page={}&page={}", uri, PER_PAGE, page);
            log::debug!("fetching {}", page_uri);

            let response = get!(self.http, &page_uri)?;
            let batch = http::parse::<Vec<T>>(&response)?;
            let last_page = batch.len() < PER_PAGE;

            items.extend(batch);

            if last_page {
                break;
            }
            page += 1;
        }

        Ok(items)
    }

    pub(super) async fn list_release_assets(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
    ) -> Result<Vec<UploadedAsset>, Error> {
        let uri = format!("{}/releases/{}/assets", self.repo_url(owner, repo), release_id);

        self.paginate(&uri).await
    }

    pub(super) async fn delete_release_asset(
        &self,
        owner: &str,
        repo: &str,
        asset_id: u64,
    ) -> Result<(), Error> {
        let uri = format!("{}/releases/assets/{}", self.repo_url(owner, repo), asset_id);

        delete!(self.http, &uri)?;

        Ok(())
    }

    pub(super) async fn upload_release_asset(
        &self,
        owner: &str,
        repo: &str,
        release: &Release,
        asset: Asset,
    ) -> Result<UploadedAsset, Error> {
        let uri = format!(
            "{}/repos/{}/{}/releases/{}/assets",
            release.upload_base(),
            owner,
            repo,
            release.id
        );

        let response = upload_file!(
            self.http,
            &uri,
            asset.name.as_str(),
            asset.mime,
            asset.size,
            asset.content
        )?;

        http::parse::<UploadedAsset>(&response)
    }
}

impl Releaser for GithubClient {
    async fn get_release_by_tag(
        &self,
        owner: &str,
        repo: &str,
        tag: &str,
    ) -> Result<Release, Error> {
        let uri = format!("{}/releases/tags/{}", self.repo_url(owner, repo), tag);

        let response = get!(self.http, &uri)?;

        http::parse::<Release>(&response)
    }

    async fn create_release(
        &self,
        owner: &str,
        repo: &str,
        request: &CreateReleaseRequest,
    ) -> Result<Release, Error> {
        let uri = format!("{}/releases", self.repo_url(owner, repo));
        let body = request
            .into_request()
            .map_err(|cause| Error::SerializeRequestError { cause })?;

        let response = post!(self.http, &uri, body)?;

        http::parse::<Release>(&response)
    }

    async fn update_release(
        &self,
        owner: &str,
        repo: &str,
        release_id: u64,
        request: &UpdateReleaseRequest,
    ) -> Result<Release, Error> {
        let uri = format!("{}/releases/{}", self.repo_url(owner, repo), release_id);
        let body = request
            .into_request()
            .map_err(|cause| Error::SerializeRequestError { cause })?;

        let response = patch!(self.http, &uri, body)?;

        http::parse::<Release>(&response)
    }

    async fn all_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>, Error> {
        let uri = format!("{}/releases", self.repo_url(owner, repo));

        self.paginate(&uri).await
    }
}
