use serde::Deserialize;

/// Defaults applied to HTTP responses
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseConfig {
    /// Content type used when the request carries none
    #[serde(default = "default_content_type")]
    pub default_content_type: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            default_content_type: default_content_type(),
        }
    }
}

fn default_content_type() -> String {
    "application/json".to_owned()
}
