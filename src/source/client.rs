use std::time::{Duration, Instant};

use reqwest::{Client, Url};

use crate::config::SourceConfig;
use crate::country::Country;
use crate::source::error::SourceError;

/// Client for the remote country dataset.
///
/// Every call to [`CountrySource::fetch_all`] downloads the full list; no
/// retry, no caching.
#[derive(Clone)]
pub struct CountrySource {
    client: Client,
    endpoint: Url,
    timeout: Duration,
}

impl CountrySource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let endpoint = endpoint_url(config)?;
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            client,
            endpoint,
            timeout: config.timeout(),
        })
    }

    /// The full request URL, including the `fields` selection.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn fetch_all(&self) -> Result<Vec<Country>, SourceError> {
        let url = self.endpoint.to_string();
        let started = Instant::now();

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Country source returned an error");
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let countries: Vec<Country> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(&url, e)
            } else {
                SourceError::Decode {
                    url: url.clone(),
                    source: e,
                }
            }
        })?;

        tracing::info!(
            records = countries.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched country dataset"
        );
        Ok(countries)
    }

    fn transport_error(&self, url: &str, err: reqwest::Error) -> SourceError {
        if err.is_timeout() {
            SourceError::Timeout {
                url: url.to_string(),
                duration: self.timeout.as_secs(),
            }
        } else {
            SourceError::Request {
                url: url.to_string(),
                source: err,
            }
        }
    }
}

/// `{base_url}/all?fields=a,b,c`
fn endpoint_url(config: &SourceConfig) -> Result<Url, SourceError> {
    let raw = format!("{}/all", config.base_url.trim_end_matches('/'));
    let mut url = Url::parse(&raw).map_err(|e| SourceError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;

    let fields: Vec<&str> = config
        .fields
        .iter()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();
    url.query_pairs_mut().append_pair("fields", &fields.join(","));

    Ok(url)
}
