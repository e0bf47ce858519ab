use super::Error;
use reqwest::StatusCode;

pub trait ResponseHandler {
    async fn handle(self) -> Result<String, Error>;
}

impl ResponseHandler for Result<reqwest::Response, reqwest::Error> {
    async fn handle(self) -> Result<String, Error> {
        let response = self.map_err(|cause| Error::SendRequestError { cause })?;
        let status = response.status();

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound { message: text });
        }

        if !status.is_success() {
            return Err(Error::GenericResponseError {
                status: status.as_u16(),
                message: text,
            });
        }

        Ok(text)
    }
}
