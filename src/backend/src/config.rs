use anyhow::{Context, Result, ensure};
use std::{env, path::PathBuf, sync::OnceLock, time::Duration};

/// Application configuration loaded and validated at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// UI server configuration
    pub ui: UiConfig,

    /// Text-generation provider configuration
    pub provider: ProviderConfig,

    /// Optional TLS certificate configuration
    pub certificate: Option<CertificateConfig>,
}

#[derive(Clone, Debug)]
pub struct UiConfig {
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// API key; suggestions fail while it is unset
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct CertificateConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// Returns a reference to the cached configuration. On first call, it loads
    /// and validates all configuration from environment variables. Subsequent
    /// calls return the cached instance.
    ///
    /// # Panics
    /// Panics if configuration loading fails. Call [`AppConfig::init`] first to
    /// get the error as a value instead.
    pub fn get() -> &'static Self {
        Self::cell()
            .get_or_init(|| Self::load_internal().expect("failed to load application configuration"))
    }

    /// Load the configuration once, reporting errors to the caller
    pub fn init() -> Result<&'static Self> {
        if let Some(config) = Self::cell().get() {
            return Ok(config);
        }
        let config = Self::load_internal()?;
        Ok(Self::cell().get_or_init(|| config))
    }

    fn cell() -> &'static OnceLock<AppConfig> {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
        &APP_CONFIG
    }

    fn load_internal() -> Result<Self> {
        let var = |key: &str| env::var(key).ok();

        let ui = UiConfig::load(var)?;
        let provider = ProviderConfig::load(var)?;
        let certificate = CertificateConfig::load(var)?;

        Ok(Self {
            ui,
            provider,
            certificate,
        })
    }
}

/// Lookup of a configuration variable, `None` when unset
trait Vars: Fn(&str) -> Option<String> {}

impl<F: Fn(&str) -> Option<String>> Vars for F {}

impl UiConfig {
    fn load(var: impl Vars) -> Result<Self> {
        let port = var("UI_PORT")
            .unwrap_or_else(|| "1977".to_string())
            .parse::<u16>()
            .context("failed to parse UI_PORT: invalid format")?;

        Ok(Self { port })
    }
}

impl ProviderConfig {
    pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
    pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    fn load(var: impl Vars) -> Result<Self> {
        // an empty key counts as unset, so the fallback still applies
        let non_empty = |key: &str| var(key).filter(|value| !value.trim().is_empty());
        let api_key = non_empty("GEMINI_API_KEY").or_else(|| non_empty("GOOGLE_API_KEY"));

        let model = var("GEMINI_MODEL").unwrap_or_else(|| Self::DEFAULT_MODEL.to_string());
        ensure!(!model.trim().is_empty(), "failed to load GEMINI_MODEL: empty");

        let base_url = var("GEMINI_BASE_URL")
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = var("PROVIDER_TIMEOUT_SECS")
            .map(|secs| secs.parse::<u64>())
            .unwrap_or(Ok(Self::DEFAULT_TIMEOUT_SECS))
            .context("failed to parse PROVIDER_TIMEOUT_SECS: invalid format")?;
        ensure!(
            timeout_secs > 0,
            "failed to load PROVIDER_TIMEOUT_SECS: must be greater than zero"
        );

        Ok(Self {
            api_key,
            model,
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl CertificateConfig {
    fn load(var: impl Vars) -> Result<Option<Self>> {
        match (var("CERT_PATH"), var("KEY_PATH")) {
            (Some(cert_path), Some(key_path)) => Ok(Some(Self {
                cert_path: cert_path.into(),
                key_path: key_path.into(),
            })),
            (None, None) => Ok(None),
            _ => anyhow::bail!("failed to load certificate config: CERT_PATH and KEY_PATH must be set together"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Vars {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let ui = UiConfig::load(vars(&[])).expect("ui config");
        let provider = ProviderConfig::load(vars(&[])).expect("provider config");
        let certificate = CertificateConfig::load(vars(&[])).expect("certificate config");

        assert_eq!(ui.port, 1977);
        assert_eq!(provider.api_key, None);
        assert_eq!(provider.model, ProviderConfig::DEFAULT_MODEL);
        assert_eq!(provider.base_url, ProviderConfig::DEFAULT_BASE_URL);
        assert_eq!(provider.timeout, Duration::from_secs(30));
        assert!(certificate.is_none());
    }

    #[test]
    fn test_gemini_key_takes_precedence() {
        let provider = ProviderConfig::load(vars(&[
            ("GEMINI_API_KEY", "gemini-key"),
            ("GOOGLE_API_KEY", "google-key"),
        ]))
        .expect("provider config");

        assert_eq!(provider.api_key.as_deref(), Some("gemini-key"));
    }

    #[test]
    fn test_google_key_is_fallback() {
        let provider = ProviderConfig::load(vars(&[("GOOGLE_API_KEY", "google-key")]))
            .expect("provider config");

        assert_eq!(provider.api_key.as_deref(), Some("google-key"));
    }

    #[test]
    fn test_empty_gemini_key_falls_back_to_google_key() {
        let provider = ProviderConfig::load(vars(&[
            ("GEMINI_API_KEY", ""),
            ("GOOGLE_API_KEY", "google-key"),
        ]))
        .expect("provider config");

        assert_eq!(provider.api_key.as_deref(), Some("google-key"));
    }

    #[test]
    fn test_blank_keys_are_unset() {
        let provider = ProviderConfig::load(vars(&[
            ("GEMINI_API_KEY", "  "),
            ("GOOGLE_API_KEY", ""),
        ]))
        .expect("provider config");

        assert_eq!(provider.api_key, None);
    }

    #[test]
    fn test_provider_overrides() {
        let provider = ProviderConfig::load(vars(&[
            ("GEMINI_MODEL", "gemini-test"),
            ("GEMINI_BASE_URL", "http://localhost:8080/v1/"),
            ("PROVIDER_TIMEOUT_SECS", "5"),
        ]))
        .expect("provider config");

        assert_eq!(provider.model, "gemini-test");
        assert_eq!(provider.base_url, "http://localhost:8080/v1");
        assert_eq!(provider.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        for timeout in ["0", "soon", "-1"] {
            let result = ProviderConfig::load(vars(&[("PROVIDER_TIMEOUT_SECS", timeout)]));

            assert!(result.is_err(), "accepted timeout {timeout:?}");
        }
    }

    #[test]
    fn test_empty_model_is_rejected() {
        assert!(ProviderConfig::load(vars(&[("GEMINI_MODEL", " ")])).is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        for port in ["http", "70000", ""] {
            let result = UiConfig::load(vars(&[("UI_PORT", port)]));

            assert!(result.is_err(), "accepted port {port:?}");
        }
    }

    #[test]
    fn test_port_override() {
        let ui = UiConfig::load(vars(&[("UI_PORT", "8443")])).expect("ui config");

        assert_eq!(ui.port, 8443);
    }

    #[test]
    fn test_certificate_paths_together() {
        let certificate = CertificateConfig::load(vars(&[
            ("CERT_PATH", "/cert/cert.pem"),
            ("KEY_PATH", "/cert/key.pem"),
        ]))
        .expect("certificate config")
        .expect("certificate configured");

        assert_eq!(certificate.cert_path, PathBuf::from("/cert/cert.pem"));
        assert_eq!(certificate.key_path, PathBuf::from("/cert/key.pem"));
    }

    #[test]
    fn test_single_certificate_path_is_rejected() {
        for pair in [("CERT_PATH", "/cert/cert.pem"), ("KEY_PATH", "/cert/key.pem")] {
            let err = CertificateConfig::load(vars(&[pair])).unwrap_err();

            assert!(err.to_string().contains("must be set together"));
        }
    }
}
