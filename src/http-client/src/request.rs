use serde::Serialize;
use tracing::warn;

use crate::{Response, Result, error::FailedRequestSnafu};

#[derive(Debug)]
pub struct RequestBuilder(pub(crate) reqwest_middleware::RequestBuilder);

impl RequestBuilder {
    pub fn query(self, query: &impl Serialize) -> Self {
        Self(self.0.query(query))
    }

    /// Sends the request, turning non success statuses into [`FailedRequest`] errors
    /// carrying the response body.
    ///
    /// [`FailedRequest`]: crate::Error::FailedRequest
    pub async fn send(self) -> Result<Response> {
        let response = self.0.send().await?;

        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            let body = response.text().await?;
            warn!(%status, %url, "request failed");
            return FailedRequestSnafu { url, status, body }.fail();
        }

        Ok(Response(response))
    }
}
