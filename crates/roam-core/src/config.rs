//! Resolution of the itinerary service location.

use std::path::{Path, PathBuf};

use log::debug;
use reqwest::Url;
use serde::Deserialize;

use crate::error::{ConfigResultExt, Result, RoamError};

/// Environment variable that overrides the configured service URL.
pub const API_URL_ENV: &str = "ROAM_API_URL";

/// Service address used when nothing else is configured (local development).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the itinerary service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: Url,
}

impl ServiceConfig {
    /// Parses `base_url` into a config.
    ///
    /// # Errors
    ///
    /// Returns `RoamError::Configuration` when the URL is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .config_context(format!("Invalid service URL '{base_url}'"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(RoamError::configuration(format!(
                "Service URL must use http or https: {base_url}"
            )));
        }
        Ok(Self { base_url })
    }

    /// Joins `path` onto the base URL, keeping any base path prefix.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// URL of `id` within `collection`. The ID is appended as one
    /// percent-encoded path segment, so `/`, `?` and `#` stay part of it.
    ///
    /// # Errors
    ///
    /// Returns `RoamError::Configuration` if the base URL cannot carry a path.
    pub fn resource_url(&self, collection: &str, id: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                RoamError::configuration(format!(
                    "Service URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(collection)
            .push(id);
        Ok(url)
    }
}

/// On-disk configuration file (`config.toml`).
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
}

/// Builder resolving a [`ServiceConfig`] from flags, environment, config file
/// and the development default, in that order.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    base_url: Option<String>,
    config_file: Option<PathBuf>,
    env_url: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit base URL, which wins over every other source.
    pub fn with_base_url(mut self, url: Option<impl Into<String>>) -> Self {
        if let Some(url) = url {
            self.base_url = Some(url.into());
        }
        self
    }

    /// Sets a config file path.
    ///
    /// If not specified, `$XDG_CONFIG_HOME/roam/config.toml` is read when it
    /// exists. An explicit file that cannot be read is an error.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Reads the service URL override from the process environment.
    pub fn with_env(mut self) -> Self {
        self.env_url = std::env::var(API_URL_ENV).ok();
        self
    }

    /// Uses `value` as if it were the environment override.
    pub fn with_env_value(mut self, value: Option<impl Into<String>>) -> Self {
        self.env_url = value.map(Into::into);
        self
    }

    /// Resolves the configuration.
    ///
    /// # Errors
    ///
    /// Returns `RoamError::Configuration` if the chosen URL is invalid or an
    /// explicit config file cannot be read or parsed.
    pub fn build(self) -> Result<ServiceConfig> {
        let non_empty = |s: &String| !s.trim().is_empty();

        if let Some(url) = self.base_url.filter(non_empty) {
            debug!("Using service URL from explicit setting");
            return ServiceConfig::new(&url);
        }
        if let Some(url) = self.env_url.filter(non_empty) {
            debug!("Using service URL from {API_URL_ENV}");
            return ServiceConfig::new(&url);
        }

        let file = match self.config_file {
            Some(path) => Some(read_config_file(&path)?),
            None => match default_config_path() {
                Some(path) => Some(read_config_file(&path)?),
                None => None,
            },
        };
        if let Some(url) = file.and_then(|f| f.api_url).filter(non_empty) {
            debug!("Using service URL from config file");
            return ServiceConfig::new(&url);
        }

        debug!("Using default service URL {DEFAULT_API_URL}");
        ServiceConfig::new(DEFAULT_API_URL)
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .config_context(format!("Failed to read config file '{}'", path.display()))?;
    toml::from_str(&contents)
        .config_context(format!("Failed to parse config file '{}'", path.display()))
}

/// Returns the XDG config file path when such a file exists.
fn default_config_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("roam").find_config_file("config.toml")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    #[test]
    fn test_explicit_url_wins() {
        let dir = TempDir::new().unwrap();
        let file = write_config(&dir, r#"api_url = "http://file.example""#);

        let config = ConfigBuilder::new()
            .with_base_url(Some("https://flag.example"))
            .with_env_value(Some("http://env.example"))
            .with_config_file(Some(&file))
            .build()
            .unwrap();
        assert_eq!(config.base_url.as_str(), "https://flag.example/");
    }

    #[test]
    fn test_env_beats_config_file() {
        let dir = TempDir::new().unwrap();
        let file = write_config(&dir, r#"api_url = "http://file.example""#);

        let config = ConfigBuilder::new()
            .with_env_value(Some("http://env.example:9000"))
            .with_config_file(Some(&file))
            .build()
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://env.example:9000/");
    }

    #[test]
    fn test_config_file_used_when_no_override() {
        let dir = TempDir::new().unwrap();
        let file = write_config(&dir, r#"api_url = "https://itinerary.example/api""#);

        let config = ConfigBuilder::new()
            .with_env_value(None::<String>)
            .with_config_file(Some(&file))
            .build()
            .unwrap();
        assert_eq!(config.base_url.as_str(), "https://itinerary.example/api");
    }

    #[test]
    fn test_default_when_file_has_no_url() {
        let dir = TempDir::new().unwrap();
        let file = write_config(&dir, "");

        let config = ConfigBuilder::new()
            .with_base_url(Some("  "))
            .with_config_file(Some(&file))
            .build()
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn test_missing_explicit_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = ConfigBuilder::new()
            .with_config_file(Some(dir.path().join("nope.toml")))
            .build()
            .unwrap_err();
        assert!(matches!(err, RoamError::Configuration { .. }));
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let file = write_config(&dir, "api_url = [");
        let err = ConfigBuilder::new()
            .with_config_file(Some(&file))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        assert!(ServiceConfig::new("not a url").is_err());
        assert!(ServiceConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ServiceConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(
            config.endpoint("/itinerary/"),
            "http://localhost:8000/itinerary/"
        );

        let prefixed = ServiceConfig::new("https://example.com/api/").unwrap();
        assert_eq!(
            prefixed.endpoint("itinerary/abc"),
            "https://example.com/api/itinerary/abc"
        );
    }

    #[test]
    fn test_resource_url_encodes_id_as_one_segment() {
        let config = ServiceConfig::new("http://localhost:8000").unwrap();
        assert_eq!(
            config.resource_url("itinerary", "abc").unwrap().as_str(),
            "http://localhost:8000/itinerary/abc"
        );
        assert_eq!(
            config
                .resource_url("itinerary", "a/../../itinerary/x?y=1#z")
                .unwrap()
                .as_str(),
            "http://localhost:8000/itinerary/a%2F..%2F..%2Fitinerary%2Fx%3Fy=1%23z"
        );

        let prefixed = ServiceConfig::new("https://example.com/api/").unwrap();
        assert_eq!(
            prefixed.resource_url("itinerary", "42").unwrap().as_str(),
            "https://example.com/api/itinerary/42"
        );
    }
}
