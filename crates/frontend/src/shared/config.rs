use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub filters: FilterConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Absolute base URL of the Policy API; empty means "same host as the page".
    #[serde(default)]
    pub base_url: String,
    /// Port used when the base URL is derived from the window location
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilterConfig {
    pub debounce_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 8080

[filters]
debounce_ms = 400
"#;

static CONFIG: Lazy<Config> = Lazy::new(|| load_config(option_env!("OASIS_API_BASE_URL")));

/// Parse the embedded configuration and apply the build-time base URL override.
fn load_config(base_url_override: Option<&str>) -> Config {
    let mut config: Config = match toml::from_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded configuration is invalid: {}", e);
            Config {
                api: ApiConfig {
                    base_url: String::new(),
                    port: 8080,
                },
                filters: FilterConfig { debounce_ms: 400 },
            }
        }
    };

    if let Some(base_url) = base_url_override.map(str::trim).filter(|s| !s.is_empty()) {
        log::info!("Using Policy API base URL {}", base_url);
        config.api.base_url = base_url.trim_end_matches('/').to_string();
    }
    config
}

pub fn config() -> &'static Config {
    &CONFIG
}
