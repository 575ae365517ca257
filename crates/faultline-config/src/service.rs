use serde::Deserialize;

/// Service identity used when building and rendering errors
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Name reported as the source of errors
    pub name: String,
    /// Withhold service name and nested causes from rendered errors
    #[serde(default)]
    pub hide_details: bool,
}
