use reqwest::StatusCode;
use tracing::debug;

use crate::config::Config;

pub mod schema;

pub use schema::QueryResponse;

pub const DEFAULT_API_URL: &str = "https://services.nvd.nist.gov/rest/json/cves/2.0";

const USER_AGENT: &str = concat!(
    "nvdq/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/nexryai/nvdq)"
);

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to fetch CVE data: {status}")]
    Status { status: StatusCode },

    #[error("no record found for {id}")]
    NoSuchCve { id: String },

    #[error("failed to parse NVD response: {0}")]
    Parse(#[source] reqwest::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

pub struct NvdClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl NvdClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Query the NVD for a single CVE record. One GET per call, no
    /// retries; the caller decides what an empty result means.
    pub async fn get_cve(&self, cve_id: &str) -> Result<QueryResponse, Error> {
        debug!(cve_id, "querying NVD");

        let mut request = self
            .client
            .get(&self.base_url)
            .query(&[("cveId", cve_id)])
            .header(reqwest::header::USER_AGENT, USER_AGENT);

        if let Some(key) = &self.api_key {
            request = request.header("apiKey", key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status(),
            });
        }

        let body = response
            .json::<QueryResponse>()
            .await
            .map_err(Error::Parse)?;

        debug!(total_results = body.total_results, "NVD query done");

        Ok(body)
    }
}
