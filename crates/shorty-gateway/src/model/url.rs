use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: Option<String>,
}

impl ShortenRequest {
    /// Request-level checks done before the key store sees the URL.
    pub fn validate(self) -> Result<String> {
        let url = match self.original_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => return Err(AppError::InvalidInput("URL cannot be empty".to_owned())),
        };

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::InvalidInput(
                "URL must start with http:// or https://".to_owned(),
            ));
        }

        Ok(url)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_key: String,
    pub short_url: String,
}
