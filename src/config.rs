use std::time::Duration;

use crate::DEFAULT_ENDPOINT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub log_filter: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            log_filter: "artsel=info".into(),
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Applies command-line values on top of defaults and environment.
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        log_filter: Option<String>,
        request_timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(log_filter) = log_filter {
            self.log_filter = log_filter;
        }
        if request_timeout_secs.is_some() {
            self.request_timeout_secs = request_timeout_secs;
        }
        self
    }
}

/// Defaults, overridden by `ARTSEL_*` environment variables.
pub fn load_settings() -> Settings {
    settings_from(|key| std::env::var(key).ok())
}

fn settings_from(var: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(v) = var("ARTSEL_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = var("ARTSEL_LOG") {
        settings.log_filter = v;
    }
    if let Some(secs) = var("ARTSEL_REQUEST_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
        settings.request_timeout_secs = Some(secs);
    }

    settings
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        settings_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_the_public_catalog() {
        let settings = from_pairs(&[]);
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.endpoint, "https://api.artic.edu/api/v1/artworks");
        assert_eq!(settings.request_timeout(), None);
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = from_pairs(&[
            ("ARTSEL_ENDPOINT", "http://127.0.0.1:3000/artworks"),
            ("ARTSEL_LOG", "artsel=debug"),
            ("ARTSEL_REQUEST_TIMEOUT_SECS", " 15 "),
        ]);

        assert_eq!(settings.endpoint, "http://127.0.0.1:3000/artworks");
        assert_eq!(settings.log_filter, "artsel=debug");
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn command_line_wins_over_environment() {
        let settings = from_pairs(&[
            ("ARTSEL_ENDPOINT", "http://env/artworks"),
            ("ARTSEL_REQUEST_TIMEOUT_SECS", "15"),
        ])
        .with_overrides(Some("http://flag/artworks".into()), None, None);

        assert_eq!(settings.endpoint, "http://flag/artworks");
        assert_eq!(settings.log_filter, "artsel=info");
        assert_eq!(settings.request_timeout_secs, Some(15));
    }

    #[test]
    fn unparsable_timeout_is_ignored() {
        let settings = from_pairs(&[("ARTSEL_REQUEST_TIMEOUT_SECS", "soon")]);
        assert_eq!(settings.request_timeout_secs, None);
    }
}
