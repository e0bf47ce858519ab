mod create_release_request;
mod update_release_request;

pub use create_release_request::CreateReleaseRequest;
pub use update_release_request::UpdateReleaseRequest;

use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(&self) -> Result<String, serde_json::Error>
    where
        Self: Serialize + Sized,
    {
        serde_json::to_string(self)
    }
}

impl SerializeRequest for CreateReleaseRequest {}
impl SerializeRequest for UpdateReleaseRequest {}
