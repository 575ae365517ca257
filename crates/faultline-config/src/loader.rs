use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the contents are
    /// rejected by [`Config::from_toml`]
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::from_toml(&raw)?;
        tracing::debug!(path = %path.display(), service = %config.service.name, "configuration loaded");

        Ok(config)
    }

    /// Parse configuration text, expanding `{{ env.VAR }}` placeholders first
    ///
    /// # Errors
    ///
    /// Returns an error if variable expansion, TOML parsing or validation
    /// fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the service has no name or the default content
    /// type is not a valid header value
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.service.name.trim().is_empty() {
            anyhow::bail!("service.name must not be empty");
        }

        http::HeaderValue::from_str(&self.response.default_content_type).map_err(|e| {
            anyhow::anyhow!(
                "response.default_content_type `{}` is not a valid header value: {e}",
                self.response.default_content_type
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use indoc::indoc;

    use crate::{Config, LogFormat};

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Config::from_toml("[service]\nname = \"orders\"\n").unwrap();

        assert_eq!(config.service.name, "orders");
        assert!(!config.service.hide_details);
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(!config.logging.only_fatal);
        assert!(config.logging.fixed_attributes.is_empty());
        assert_eq!(config.response.default_content_type, "application/json");
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml(indoc! {r#"
            [service]
            name = "payments"
            hide_details = true

            [logging]
            filter = "faultline=debug,warn"
            format = "text"
            only_fatal = true

            [logging.fixed_attributes]
            region = "eu-west-1"
            tier = "backend"

            [response]
            default_content_type = "application/problem+json"
        "#})
        .unwrap();

        assert!(config.service.hide_details);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.logging.only_fatal);
        assert_eq!(
            config.logging.fixed_attributes.keys().collect::<Vec<_>>(),
            ["region", "tier"]
        );
        assert_eq!(config.response.default_content_type, "application/problem+json");
    }

    #[test]
    fn env_placeholders_are_expanded() {
        temp_env::with_vars([("FL_SERVICE", Some("shipping")), ("FL_HIDE", None)], || {
            let config = Config::from_toml(indoc! {r#"
                [service]
                name = "{{ env.FL_SERVICE }}"
                hide_details = {{ env.FL_HIDE | default("false") }}
            "#})
            .unwrap();

            assert_eq!(config.service.name, "shipping");
            assert!(!config.service.hide_details);
        });
    }

    #[test]
    fn missing_service_section_is_rejected() {
        let err = Config::from_toml("[logging]\nfilter = \"info\"\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn empty_service_name_is_rejected() {
        let err = Config::from_toml("[service]\nname = \"  \"\n").unwrap_err();
        assert_eq!(err.to_string(), "service.name must not be empty");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("[service]\nname = \"a\"\nhide = true\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn invalid_content_type_is_rejected() {
        let err = Config::from_toml(indoc! {r#"
            [service]
            name = "a"

            [response]
            default_content_type = "text/plain\u0001"
        "#})
        .unwrap_err();
        assert!(err.to_string().contains("default_content_type"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[service]\nname = \"from-file\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.service.name, "from-file");
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Config::load(std::path::Path::new("/nonexistent/faultline.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
