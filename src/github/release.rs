use serde::Deserialize;

/// A release as returned by the GitHub releases API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Release {
    pub id: u64,
    #[serde(default)]
    pub upload_url: String,
    #[serde(default)]
    pub html_url: String,
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub target_commitish: String,
    #[serde(default)]
    pub body: Option<String>,
}

impl Release {
    /// Base url used to build the asset upload endpoint, `upload_url` cut before the first `/repos/`.
    pub fn upload_base(&self) -> &str {
        match self.upload_url.find("/repos/") {
            Some(index) => &self.upload_url[..index],
            None => &self.upload_url,
        }
    }
}
