//! Server configuration

const DEFAULT_DATABASE_URL: &str = "host=localhost user=postgres dbname=postgres";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_FHIR_BASE_URL: &str = "https://hapi.fhir.org/baseR4";
const DEFAULT_PREDICTION_BASE_URL: &str = "http://localhost:5001";

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// FHIR repository base, without trailing slash
    pub fhir_base_url: String,
    /// Prediction service base; `/predictPneumonia` is appended
    pub prediction_base_url: String,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Self {
            database_url: var("DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_address: var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            fhir_base_url: trim_base(var("FHIR_BASE_URL", DEFAULT_FHIR_BASE_URL)),
            prediction_base_url: trim_base(var("PREDICTION_BASE_URL", DEFAULT_PREDICTION_BASE_URL)),
            cors_origins: var("CORS_ORIGINS", "*")
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        }
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.fhir_base_url, "https://hapi.fhir.org/baseR4");
        assert_eq!(config.prediction_base_url, "http://localhost:5001");
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
    }

    #[test]
    fn reads_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("DATABASE_URL", "postgres://relay@db/images"),
            ("FHIR_BASE_URL", "http://fhir.local/baseR4/"),
            ("PREDICTION_BASE_URL", "http://predict.local//"),
            ("CORS_ORIGINS", "http://a.example, http://b.example,"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.database_url, "postgres://relay@db/images");
        assert_eq!(config.fhir_base_url, "http://fhir.local/baseR4");
        assert_eq!(config.prediction_base_url, "http://predict.local");
        assert_eq!(
            config.cors_origins,
            vec!["http://a.example".to_string(), "http://b.example".to_string()]
        );
    }
}
