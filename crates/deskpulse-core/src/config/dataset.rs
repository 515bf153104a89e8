//! Ticket dataset location.

use serde::{Deserialize, Serialize};

/// Where the ticket table is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the delimited ticket file. A missing file yields an empty table.
    #[serde(default = "default_path")]
    pub path: String,
    /// Field delimiter; only the first byte is used.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

impl DatasetConfig {
    /// The delimiter as a single byte, falling back to a comma.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.bytes().next().unwrap_or(b',')
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            delimiter: default_delimiter(),
        }
    }
}

fn default_path() -> String {
    "data/sample_tickets.csv".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}
