use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MAX_DESCRIPTION_CHARS: usize = 2000;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub description: String,
    #[serde(default = "default_style")]
    pub style: String,
}

impl GenerateRequest {
    /// Parses a raw request body and checks the description bounds.
    ///
    /// The length is counted in characters, not bytes, so Cyrillic input
    /// is judged the same way as Latin input.
    pub fn parse(raw: &str) -> Result<Self> {
        let request: GenerateRequest = serde_json::from_str(raw)
            .map_err(|e| Error::validation(format!("Invalid request body: {}", e)))?;

        let length = request.description.chars().count();
        if length < MIN_DESCRIPTION_CHARS || length > MAX_DESCRIPTION_CHARS {
            return Err(Error::validation(format!(
                "description must be between {} and {} characters, got {}",
                MIN_DESCRIPTION_CHARS, MAX_DESCRIPTION_CHARS, length
            )));
        }

        Ok(request)
    }
}

fn default_style() -> String {
    "modern".to_string()
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
