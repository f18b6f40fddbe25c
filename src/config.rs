use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Where notes are persisted.
#[derive(Clone, Debug)]
pub enum NotesBackend {
    Supabase {
        url: String,
        api_key: SecretString,
    },
    Mongo {
        conn_string: String,
        db_name: String,
    },
}

impl NotesBackend {
    pub fn name(&self) -> &'static str {
        match self {
            NotesBackend::Supabase { .. } => "supabase",
            NotesBackend::Mongo { .. } => "mongo",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub notes_backend: NotesBackend,
    pub notes_table: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| {
            var(key).ok_or_else(|| AppError::ConfigError(format!("{} is not set", key)))
        };

        let gemini_api_key = var("GEMINI_API_KEY")
            .or_else(|| var("GEMINI_KEY"))
            .map(SecretString::from)
            .ok_or_else(|| {
                AppError::ConfigError("Gemini API key missing, set GEMINI_API_KEY".to_string())
            })?;

        let notes_backend = match var("NOTES_BACKEND")
            .unwrap_or_else(|| "supabase".to_string())
            .to_lowercase()
            .as_str()
        {
            "supabase" => NotesBackend::Supabase {
                url: required("SUPABASE_URL")?,
                api_key: SecretString::from(required("SUPABASE_KEY")?),
            },
            "mongo" | "mongodb" => NotesBackend::Mongo {
                conn_string: required("MONGO_CONN_STRING")?,
                db_name: var("MONGO_DB_NAME").unwrap_or_else(|| "smart-study-partner".to_string()),
            },
            other => {
                return Err(AppError::ConfigError(format!(
                    "Unknown NOTES_BACKEND '{}', expected 'supabase' or 'mongo'",
                    other
                )))
            }
        };

        Ok(Self {
            gemini_api_key,
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: var("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            notes_backend,
            notes_table: var("NOTES_TABLE").unwrap_or_else(|| "notes".to_string()),
            web_server_host: var("WEB_SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            web_server_port: var("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(5000),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test-gemini-key".to_string()),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: "http://127.0.0.1:9/v1beta/openai".to_string(),
            notes_backend: NotesBackend::Supabase {
                url: "http://127.0.0.1:9".to_string(),
                api_key: SecretString::from("test-supabase-key".to_string()),
            },
            notes_table: "notes".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_config_with_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "abc"),
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_KEY", "anon-key"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_api_key.expose_secret(), "abc");
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.gemini_api_base, DEFAULT_GEMINI_API_BASE);
        assert_eq!(config.notes_table, "notes");
        assert_eq!(config.web_server_host, "0.0.0.0");
        assert_eq!(config.web_server_port, 5000);
        assert_eq!(config.notes_backend.name(), "supabase");
    }

    #[test]
    fn test_legacy_key_name_is_accepted() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_KEY", "legacy"),
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_KEY", "anon-key"),
        ]))
        .unwrap();

        assert_eq!(config.gemini_api_key.expose_secret(), "legacy");
    }

    #[test]
    fn test_missing_gemini_key_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "   "),
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_KEY", "anon-key"),
        ]))
        .unwrap_err();

        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_missing_supabase_credential_is_fatal() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "abc"),
            ("SUPABASE_URL", "https://project.supabase.co"),
        ]))
        .unwrap_err();

        assert_eq!(err.to_string(), "Configuration error: SUPABASE_KEY is not set");
    }

    #[test]
    fn test_mongo_backend() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "abc"),
            ("NOTES_BACKEND", "mongo"),
            ("MONGO_CONN_STRING", "mongodb://localhost:27017"),
            ("PORT", "8081"),
        ]))
        .unwrap();

        match config.notes_backend {
            NotesBackend::Mongo { conn_string, db_name } => {
                assert_eq!(conn_string, "mongodb://localhost:27017");
                assert_eq!(db_name, "smart-study-partner");
            }
            other => panic!("expected mongo backend, got {}", other.name()),
        }
        assert_eq!(config.web_server_port, 8081);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "abc"),
            ("NOTES_BACKEND", "sqlite"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("sqlite"));
    }

    #[test]
    fn test_bad_port_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[
            ("GEMINI_API_KEY", "abc"),
            ("SUPABASE_URL", "https://project.supabase.co"),
            ("SUPABASE_KEY", "anon-key"),
            ("PORT", "not-a-port"),
        ]))
        .unwrap();

        assert_eq!(config.web_server_port, 5000);
    }
}
