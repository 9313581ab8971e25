//! Endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default Robot Framework remote server address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8270";

/// Where a [`RemoteLibrary`](crate::RemoteLibrary) sends its calls.
///
/// Every field is optional when deserializing; absent fields take the
/// [`Default`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Server root, e.g. `http://127.0.0.1:8270`.
    pub base_url: String,
    /// URL path selecting one library on a multi-library server.
    pub library: Option<String>,
    /// Per-request timeout in milliseconds. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
}

impl RemoteConfig {
    /// The configured timeout as a [`Duration`].
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            library: None,
            timeout_ms: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config: RemoteConfig = serde_json::from_str("{}").expect("deserializes");
        assert_eq!(config, RemoteConfig::default());
        assert_eq!(config.base_url, "http://127.0.0.1:8270");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn partial_object_overrides_fields() {
        let config: RemoteConfig = serde_json::from_str(
            r#"{"library": "Testcenter/KeywordLibrary/TestKeywords", "timeout_ms": 2500}"#,
        )
        .expect("deserializes");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            config.library.as_deref(),
            Some("Testcenter/KeywordLibrary/TestKeywords")
        );
        assert_eq!(config.timeout(), Some(Duration::from_millis(2500)));
    }
}
