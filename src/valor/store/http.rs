use super::{parse_records, DataSource};
use crate::error::{Result, ValorError};
use crate::model::Record;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use tracing::debug;

/// Fetches the collection document over HTTP(S).
///
/// One GET per fetch, no retries. The client's default timeout applies.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        debug!(url = %self.url, "fetching record document");
        let client = Client::builder()
            .build()
            .map_err(|e| ValorError::load(&self.url, format!("HTTP client build failed: {e}")))?;

        let resp = client
            .get(&self.url)
            .header(USER_AGENT, concat!("valor/", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(|e| ValorError::load(&self.url, e))?;

        ensure_success(&self.url, resp.status())?;

        let body = resp.text().map_err(|e| ValorError::load(&self.url, e))?;
        parse_records(&self.url, &body)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

fn ensure_success(url: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ValorError::load(url, format!("HTTP error! status: {}", status.as_u16())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_pass() {
        assert!(ensure_success("u", StatusCode::OK).is_ok());
        assert!(ensure_success("u", StatusCode::NO_CONTENT).is_ok());
    }

    #[test]
    fn non_success_status_is_a_load_error() {
        let err = ensure_success("https://x/heroes.json", StatusCode::NOT_FOUND).unwrap_err();
        assert!(err.is_load_error());
        assert!(err.to_string().contains("status: 404"));

        let err = ensure_success("u", StatusCode::INTERNAL_SERVER_ERROR).unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn unreachable_host_is_a_load_error() {
        let err = HttpSource::new("http://127.0.0.1:9/heroes.json")
            .fetch()
            .unwrap_err();
        assert!(err.is_load_error());
    }
}
