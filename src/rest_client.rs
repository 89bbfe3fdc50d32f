use crate::object_mapper::{MapperError, ObjectMapper};
use crate::telemetry::error_chain_fmt;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

#[derive(thiserror::Error)]
pub enum RestClientError {
    #[error("Failed to execute GET {uri}")]
    Transport {
        uri: Url,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {uri} responded with {status}")]
    Status { uri: Url, status: StatusCode },
    #[error("Failed to decode the response body of GET {uri}")]
    Decode {
        uri: Url,
        #[source]
        source: MapperError,
    },
    #[error("The response body of GET {uri} is not valid UTF-8")]
    InvalidText {
        uri: Url,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl std::fmt::Debug for RestClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Full response envelope: status line, headers and the decoded body.
#[derive(Debug)]
pub struct ResponseEntity<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `None` when the server sent no body or answered with a non-success status.
    /// Error bodies are never decoded: their shape is the server's error
    /// format, not `T`, even when they happen to parse as `T`.
    pub body: Option<T>,
}

impl<T> ResponseEntity<T> {
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct RestClient {
    http_client: Client,
    object_mapper: ObjectMapper,
}

impl RestClient {
    pub fn new(timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            object_mapper: ObjectMapper::new(),
        })
    }

    /// GET `uri` and decode the body into `T`, discarding status and headers.
    /// Any non-success status is an error.
    #[tracing::instrument(name = "Fetching response body", skip(self, uri), fields(uri = %uri))]
    pub async fn get_for_object<T: DeserializeOwned>(&self, uri: &Url) -> Result<T, RestClientError> {
        let bytes = self.get_success_bytes(uri).await?;
        self.object_mapper
            .read_value_from_slice(&bytes)
            .map_err(|source| RestClientError::Decode {
                uri: uri.clone(),
                source,
            })
    }

    /// GET `uri` and return the body as raw text. Bodies that are not UTF-8
    /// are rejected rather than patched up.
    #[tracing::instrument(name = "Fetching response text", skip(self, uri), fields(uri = %uri))]
    pub async fn get_for_string(&self, uri: &Url) -> Result<String, RestClientError> {
        let bytes = self.get_success_bytes(uri).await?;
        String::from_utf8(bytes.to_vec()).map_err(|source| {
            tracing::error!("Response body is not valid UTF-8: {}", source);
            RestClientError::InvalidText {
                uri: uri.clone(),
                source,
            }
        })
    }

    /// GET `uri` and return status, headers and decoded body.
    /// Non-success statuses are reported in the envelope, not as errors.
    #[tracing::instrument(
        name = "Fetching response entity",
        skip(self, uri),
        fields(uri = %uri, status = tracing::field::Empty)
    )]
    pub async fn get_for_entity<T: DeserializeOwned>(
        &self,
        uri: &Url,
    ) -> Result<ResponseEntity<T>, RestClientError> {
        let response = self.send_get(uri).await?;
        let status = response.status();
        tracing::Span::current().record("status", tracing::field::display(status));
        let headers = response.headers().clone();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| RestClientError::Transport {
                uri: uri.clone(),
                source,
            })?;

        let body = if status.is_success() && !bytes.is_empty() {
            let decoded = self
                .object_mapper
                .read_value_from_slice(&bytes)
                .map_err(|source| RestClientError::Decode {
                    uri: uri.clone(),
                    source,
                })?;
            Some(decoded)
        } else {
            None
        };

        Ok(ResponseEntity {
            status,
            headers,
            body,
        })
    }

    async fn get_success_bytes(&self, uri: &Url) -> Result<bytes::Bytes, RestClientError> {
        let response = self.send_get(uri).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!("GET {} responded with {}", uri, status);
            return Err(RestClientError::Status {
                uri: uri.clone(),
                status,
            });
        }
        response
            .bytes()
            .await
            .map_err(|source| RestClientError::Transport {
                uri: uri.clone(),
                source,
            })
    }

    async fn send_get(&self, uri: &Url) -> Result<reqwest::Response, RestClientError> {
        self.http_client
            .get(uri.clone())
            .send()
            .await
            .map_err(|source| {
                tracing::error!("Failed to execute request: {:?}", source);
                RestClientError::Transport {
                    uri: uri.clone(),
                    source,
                }
            })
    }
}
