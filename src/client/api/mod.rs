/**
 * API Gateway
 *
 * Stateless HTTP transport for the backend. It knows how to turn an
 * `Endpoint` plus a `RequestBody` into a request, attach the bearer token and
 * hand back the status and raw JSON body. It holds no session and makes no
 * decisions about success flags; that is the repository layer's job.
 */

pub mod endpoints;
pub mod envelope;

pub use endpoints::Endpoint;
pub use envelope::Envelope;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::client::config::Config;
use crate::shared::ClientError;

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

impl RequestBody {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, ClientError> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(|e| ClientError::decode(e.to_string()))
    }
}

/// One multipart field
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

fn build_form(parts: Vec<FormPart>) -> Result<Form, ClientError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                mime,
                bytes,
            } => {
                let part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&mime)
                    .map_err(|e| ClientError::File(format!("Tipo de archivo inválido: {}", e)))?;
                form.part(name, part)
            }
        };
    }
    Ok(form)
}

/// Status and JSON body of a completed exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    /// Parsed body, `Null` when empty or not JSON
    pub body: Value,
}

/// HTTP client for the backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| ClientError::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a request and collect the response body.
    ///
    /// Only transport failures are errors here; any HTTP status is returned
    /// to the caller.
    pub async fn send(
        &self,
        endpoint: &Endpoint,
        token: Option<&str>,
        body: RequestBody,
    ) -> Result<RawResponse, ClientError> {
        let url = self.config.api_url(&endpoint.path);
        let mut request = self.client.request(endpoint.method.clone(), &url);

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Multipart(parts) => request.multipart(build_form(parts)?),
        };

        tracing::debug!("{} {}", endpoint.method, url);

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::debug!("Non-JSON body from {} ({}): {}", url, status, e);
                Value::Null
            })
        };

        tracing::debug!("{} {} -> {}", endpoint.method, url, status);
        Ok(RawResponse { status, body })
    }
}
