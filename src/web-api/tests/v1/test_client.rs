use reqwest::{Client, Method, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use web_api::error::{ErrorDiscriminants, ErrorResponse};

#[derive(Debug, PartialEq, Eq)]
pub struct Error {
    pub error: ErrorDiscriminants,
    pub status: StatusCode,
    pub description: String,
}

#[derive(Clone)]
pub struct ApiClient {
    address: String,
    client: Client,
}

impl ApiClient {
    pub fn new(address: String) -> ApiClient {
        ApiClient {
            address,
            client: Client::new(),
        }
    }

    pub async fn do_request<T: Serialize>(
        &self,
        path: &str,
        method: Method,
        body: Option<&T>,
    ) -> reqwest::Response {
        let mut request = self.client.request(method, format!("{}/{path}", self.address));
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.unwrap()
    }

    pub async fn send<T: Serialize, O: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<&T>,
    ) -> Result<(StatusCode, O), Error> {
        let response = self.do_request(path, method, body).await;
        let status = response.status();
        let text = response.text().await.unwrap();

        if status.is_success() {
            match serde_json::from_str::<O>(&text) {
                Ok(v) => Ok((status, v)),
                Err(e) => panic!("failed to deserialize response, err: {e:?}, body: {text}"),
            }
        } else {
            let body: ErrorResponse = serde_json::from_str(&text).unwrap();
            Err(Error {
                error: body.error,
                status,
                description: body.description,
            })
        }
    }

    pub async fn get<O: DeserializeOwned>(&self, path: &str) -> Result<O, Error> {
        self.send(path, Method::GET, None::<&()>)
            .await
            .map(|(_, v)| v)
    }

    pub fn service_schedule_path(service: &str, delayed_only: bool) -> String {
        format!("services/{service}/schedule?delayedOnly={delayed_only}")
    }
}
