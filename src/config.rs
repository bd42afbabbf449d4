use anyhow::{Context, bail};
use serde::Deserialize;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Deployment settings for one Vertex AI call. Every value is explicit;
/// nothing is read from ambient process state after resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexConfig {
    pub project: String,
    pub location: String,
    pub access_token: String,
    pub model: String,
    /// Overrides the regional endpoint, mainly for tests.
    pub endpoint: Option<String>,
}

/// Values parsed from the optional YAML config file.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileValues {
    project: Option<String>,
    location: Option<String>,
    access_token: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
}

/// Command-line values; each one wins over its config-file counterpart.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub project: Option<String>,
    pub location: Option<String>,
    pub access_token: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

impl VertexConfig {
    pub fn resolve(config_path: Option<&str>, overrides: Overrides) -> anyhow::Result<Self> {
        let file = match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file: {}", path))?;
                serde_yaml::from_str::<FileValues>(&content)
                    .with_context(|| format!("failed to parse config file: {}", path))?
            }
            None => FileValues::default(),
        };

        let Some(project) = overrides.project.or(file.project) else {
            bail!("project is not set; pass --project or put `project:` in the config file");
        };
        let Some(location) = overrides.location.or(file.location) else {
            bail!("location is not set; pass --location or put `location:` in the config file");
        };
        let Some(access_token) = overrides.access_token.or(file.access_token) else {
            bail!("access token is not set; pass --token or put `access_token:` in the config file");
        };

        Ok(VertexConfig {
            project,
            location,
            access_token,
            model: overrides
                .model
                .or(file.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: overrides.endpoint.or(file.endpoint),
        })
    }

    pub fn base_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}-aiplatform.googleapis.com", self.location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_resolve_from_file() {
        let file = write_config(
            "project: demo-project\nlocation: us-central1\naccess_token: tok\n",
        );
        let config = VertexConfig::resolve(file.path().to_str(), Overrides::default())
            .expect("complete file should resolve");
        assert_eq!(config.project, "demo-project");
        assert_eq!(config.location, "us-central1");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(
            config.base_url(),
            "https://us-central1-aiplatform.googleapis.com"
        );
    }

    #[test]
    fn test_cli_overrides_win_over_file() {
        let file = write_config(
            "project: demo-project\nlocation: us-central1\naccess_token: tok\nmodel: gemini-2.0-pro\n",
        );
        let config = VertexConfig::resolve(
            file.path().to_str(),
            Overrides {
                project: Some("other-project".to_string()),
                model: Some("gemini-2.5-flash".to_string()),
                ..Default::default()
            },
        )
        .expect("overrides should resolve");
        assert_eq!(config.project, "other-project");
        assert_eq!(config.location, "us-central1");
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_missing_token_fails_before_any_network_use() {
        let file = write_config("project: demo-project\nlocation: us-central1\n");
        let err = VertexConfig::resolve(file.path().to_str(), Overrides::default())
            .err()
            .expect("missing token must fail");
        assert!(err.to_string().contains("access token"));
    }

    #[test]
    fn test_endpoint_override_trims_trailing_slash() {
        let config = VertexConfig::resolve(
            None,
            Overrides {
                project: Some("p".to_string()),
                location: Some("l".to_string()),
                access_token: Some("t".to_string()),
                endpoint: Some("https://example.test/".to_string()),
                ..Default::default()
            },
        )
        .expect("resolve without file");
        assert_eq!(config.base_url(), "https://example.test");
    }
}
