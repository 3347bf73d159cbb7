//! Blocking HTTP downloads surfaced as readable byte streams.
//!
//! The consumer of a download is a synchronous, `Read`-driven extractor, so
//! this crate deliberately uses reqwest's blocking client: the response body
//! is handed over as-is and pulled through by whoever reads it.

mod error;
mod progress;

pub use error::{Error, Result};
pub use progress::ProgressReader;

use std::io::Read;
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for fetching release archives.
pub struct DownloadClient {
    client: Client,
}

impl DownloadClient {
    /// Build a client with the crate's user agent and a connect timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend cannot be initialized.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }

    /// Issue a GET and return the open response body.
    ///
    /// Any non-success status is an error here, before the body is handed
    /// to a consumer; downstream code may assume the transfer was accepted
    /// by the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent (DNS, connect,
    /// timeout) or if the server responds with a non-success status.
    pub fn get(&self, url: &str) -> Result<Download> {
        debug!(url, "starting download");
        let response = self.client.get(url).send().map_err(Error::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        let length = response.content_length();
        debug!(%status, length, "response accepted");
        Ok(Download { response, length })
    }
}

/// An open, streaming response body.
pub struct Download {
    response: Response,
    length: Option<u64>,
}

impl Download {
    /// Declared body length, when the server sent one.
    pub fn content_length(&self) -> Option<u64> {
        self.length
    }
}

impl Read for Download {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.response.read(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_url_and_code() {
        let err = Error::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://example.invalid/archive.tar.gz".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("https://example.invalid/archive.tar.gz"));
    }
}
