use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateReleaseRequest {
    pub tag_name: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
}

impl CreateReleaseRequest {
    pub fn new(
        tag_name: impl Into<String>,
        name: impl Into<String>,
        body: Option<String>,
        draft: bool,
        prerelease: bool,
    ) -> Self {
        Self {
            tag_name: tag_name.into(),
            name: name.into(),
            body,
            draft,
            prerelease,
        }
    }
}
