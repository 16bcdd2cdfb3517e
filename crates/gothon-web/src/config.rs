//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use gothon_core::language::Language;
use serde::Serialize;

use crate::error::AppError;

/// Where session records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    /// One JSON file per session under `sessions_dir`.
    File,
    /// Process memory; records are lost on restart.
    Memory,
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Session storage backend (`SESSION_BACKEND`, `file` or `memory`).
    pub session_backend: SessionBackend,
    /// Directory of the file backend (`SESSIONS_DIR`).
    pub sessions_dir: PathBuf,
    /// Name of the session cookie (`SESSION_COOKIE`).
    pub session_cookie: String,
    /// Cookie lifetime in seconds (`SESSION_MAX_AGE_SECS`).
    pub session_max_age_secs: u32,
    /// Language `/` redirects to (`DEFAULT_LANG`).
    pub default_lang: Language,
    /// Story file to load instead of the bundled story (`STORY_PATH`).
    pub story_path: Option<PathBuf>,
    /// Directory served under `/static` (`STATIC_DIR`).
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 3000,
            session_backend: SessionBackend::File,
            sessions_dir: PathBuf::from("sessions"),
            session_cookie: "gothon_session".to_owned(),
            session_max_age_secs: 3600,
            default_lang: Language::En,
            story_path: None,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for unset variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => defaults.port,
        };
        let session_backend = match lookup("SESSION_BACKEND").as_deref() {
            None | Some("file") => SessionBackend::File,
            Some("memory") => SessionBackend::Memory,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "SESSION_BACKEND must be `file` or `memory`, got {other:?}"
                )));
            }
        };
        let session_max_age_secs = match lookup("SESSION_MAX_AGE_SECS") {
            Some(value) => value.parse().map_err(|e| {
                AppError::Config(format!("SESSION_MAX_AGE_SECS must be a valid u32: {e}"))
            })?,
            None => defaults.session_max_age_secs,
        };
        let default_lang = match lookup("DEFAULT_LANG") {
            Some(value) => value
                .parse()
                .map_err(|e| AppError::Config(format!("DEFAULT_LANG: {e}")))?,
            None => defaults.default_lang,
        };
        let session_cookie = lookup("SESSION_COOKIE").unwrap_or(defaults.session_cookie);
        if session_cookie.is_empty()
            || !session_cookie
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(AppError::Config(format!(
                "SESSION_COOKIE must be a non-empty token, got {session_cookie:?}"
            )));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            session_backend,
            sessions_dir: lookup("SESSIONS_DIR").map_or(defaults.sessions_dir, PathBuf::from),
            session_cookie,
            session_max_age_secs,
            default_lang,
            story_path: lookup("STORY_PATH").map(PathBuf::from),
            static_dir: lookup("STATIC_DIR").map_or(defaults.static_dir, PathBuf::from),
        })
    }

    /// The address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form an address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}
