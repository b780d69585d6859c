//! Remote spreadsheet-range backend.
//!
//! Speaks a values-style spreadsheet API: each collection maps to one
//! named range (a tab), reads fetch the range's cell grid as JSON, and a
//! replace clears the range then writes the new grid. The caller supplies
//! an already-obtained bearer token; no credential flow happens here.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::backend::StorageBackend;
use crate::codec::Row;
use crate::error::{StoreError, StoreResult};

/// JSON body of a values read/write: `{"values": [[...], ...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ValueGrid {
    #[serde(default)]
    values: Vec<Row>,
}

/// Stores each collection in one range of a remote spreadsheet.
pub struct SheetBackend {
    client: reqwest::blocking::Client,
    base_url: url::Url,
    spreadsheet_id: String,
    token: String,
}

impl SheetBackend {
    /// Values endpoint of the hosted service.
    pub const DEFAULT_BASE_URL: &'static str = "https://sheets.googleapis.com/v4/spreadsheets/";

    pub fn open(
        base_url: &str,
        spreadsheet_id: impl Into<String>,
        token: impl Into<String>,
    ) -> StoreResult<Self> {
        let base_url = url::Url::parse(base_url)
            .map_err(|err| StoreError::Unavailable(format!("base url {}: {}", base_url, err)))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| StoreError::Unavailable(format!("http client: {}", err)))?;
        Ok(Self {
            client,
            base_url,
            spreadsheet_id: spreadsheet_id.into(),
            token: token.into(),
        })
    }

    fn values_url(&self, collection: &str, suffix: &str) -> StoreResult<url::Url> {
        let path = format!("{}/values/{}{}", self.spreadsheet_id, collection, suffix);
        self.base_url
            .join(&path)
            .map_err(|err| StoreError::Unavailable(format!("values url {}: {}", path, err)))
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder) -> StoreResult<reqwest::blocking::Response> {
        request
            .bearer_auth(&self.token)
            .send()
            .map_err(|err| StoreError::Unavailable(format!("request failed: {}", err)))
    }
}

// The service reports an unknown range as a client error; for this
// backend that means "collection never written", which reads as empty.
fn is_missing_range(status: reqwest::StatusCode) -> bool {
    status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::BAD_REQUEST
}

impl StorageBackend for SheetBackend {
    fn read_all(&self, collection: &str) -> StoreResult<Vec<Row>> {
        let url = self.values_url(collection, "")?;
        let response = self.send(self.client.get(url))?;
        let status = response.status();

        if is_missing_range(status) {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(StoreError::Unavailable(format!(
                "read {}: HTTP {}",
                collection, status
            )));
        }

        let grid: ValueGrid = response
            .json()
            .map_err(|err| StoreError::Unavailable(format!("read {}: {}", collection, err)))?;
        tracing::debug!("read {} rows from range {}", grid.values.len(), collection);
        Ok(grid.values)
    }

    fn replace_all(&self, collection: &str, rows: &[Row]) -> StoreResult<()> {
        let clear_url = self.values_url(collection, ":clear")?;
        let response = self.send(self.client.post(clear_url))?;
        let status = response.status();
        if !status.is_success() && !is_missing_range(status) {
            return Err(StoreError::Unavailable(format!(
                "clear {}: HTTP {}",
                collection, status
            )));
        }

        let mut write_url = self.values_url(collection, "")?;
        write_url
            .query_pairs_mut()
            .append_pair("valueInputOption", "RAW");
        let grid = ValueGrid {
            values: rows.to_vec(),
        };
        let response = self.send(self.client.put(write_url).json(&grid))?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Unavailable(format!(
                "write {}: HTTP {}",
                collection, status
            )));
        }
        tracing::debug!("wrote {} rows to range {}", rows.len(), collection);
        Ok(())
    }
}
