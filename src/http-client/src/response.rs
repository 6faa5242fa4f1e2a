use serde::de::DeserializeOwned;

use crate::Result;

/// A response whose status was already checked.
#[derive(Debug)]
pub struct Response(pub(crate) reqwest::Response);

impl Response {
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        Ok(self.0.json().await?)
    }
}
