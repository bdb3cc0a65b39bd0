//! Configuration module
//!
//! Env-var driven configuration for the console: server port, the Alfresco
//! base URL (from which the fixed public API prefixes are derived), the local
//! document store, and upload limits.

use std::env;

use anyhow::{bail, Context};

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_UPLOAD_DIR: &str = "media";
const DEFAULT_UPLOAD_MAX_BYTES: usize = 50 * 1024 * 1024;
const DEFAULT_UPLOAD_ALLOWED_EXTENSIONS: &str =
    "pdf,doc,docx,xls,xlsx,ppt,pptx,txt,png,jpg,jpeg,gif";
const DEFAULT_SESSION_TTL_SECONDS: u64 = 8 * 60 * 60;

/// Fixed public API prefixes under the Alfresco base URL.
const CORE_API_PREFIX: &str = "/alfresco/api/-default-/public/alfresco/versions/1";
const AUTH_API_PREFIX: &str = "/alfresco/api/-default-/public/authentication/versions/1";
const SEARCH_API_PREFIX: &str = "/alfresco/api/-default-/public/search/versions/1";

#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    alfresco_base_url: String,
    database_url: String,
    upload_dir: String,
    upload_max_bytes: usize,
    upload_allowed_extensions: Vec<String>,
    session_ttl_seconds: u64,
    environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Tests pass a map instead of
    /// mutating process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let server_port = match lookup("ALCOVE_SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("ALCOVE_SERVER_PORT must be a port number")?,
            None => DEFAULT_SERVER_PORT,
        };

        let alfresco_base_url = lookup("ALFRESCO_BASE_URL")
            .context("ALFRESCO_BASE_URL is required (e.g. http://localhost:8082)")?
            .trim_end_matches('/')
            .to_string();

        let upload_max_bytes = match lookup("ALCOVE_UPLOAD_MAX_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .context("ALCOVE_UPLOAD_MAX_BYTES must be a byte count")?,
            None => DEFAULT_UPLOAD_MAX_BYTES,
        };

        let session_ttl_seconds = match lookup("ALCOVE_SESSION_TTL_SECONDS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("ALCOVE_SESSION_TTL_SECONDS must be a number of seconds")?,
            None => DEFAULT_SESSION_TTL_SECONDS,
        };

        let upload_allowed_extensions = lookup("ALCOVE_UPLOAD_ALLOWED_EXTENSIONS")
            .unwrap_or_else(|| DEFAULT_UPLOAD_ALLOWED_EXTENSIONS.to_string())
            .split(',')
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        let config = Config {
            server_port,
            alfresco_base_url,
            database_url: lookup("ALCOVE_DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            upload_dir: lookup("ALCOVE_UPLOAD_DIR")
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            upload_max_bytes,
            upload_allowed_extensions,
            session_ttl_seconds,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.alfresco_base_url.starts_with("http://")
            && !self.alfresco_base_url.starts_with("https://")
        {
            bail!(
                "ALFRESCO_BASE_URL must be an absolute http(s) URL, got '{}'",
                self.alfresco_base_url
            );
        }
        if self.session_ttl_seconds == 0 {
            bail!("ALCOVE_SESSION_TTL_SECONDS must be greater than zero");
        }
        if self.upload_max_bytes == 0 {
            bail!("ALCOVE_UPLOAD_MAX_BYTES must be greater than zero");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn upload_dir(&self) -> &str {
        &self.upload_dir
    }

    pub fn upload_max_bytes(&self) -> usize {
        self.upload_max_bytes
    }

    pub fn upload_allowed_extensions(&self) -> &[String] {
        &self.upload_allowed_extensions
    }

    pub fn session_ttl_seconds(&self) -> u64 {
        self.session_ttl_seconds
    }

    /// Core REST API base, e.g. `{base}/alfresco/api/-default-/public/alfresco/versions/1`.
    pub fn core_api_url(&self) -> String {
        format!("{}{}", self.alfresco_base_url, CORE_API_PREFIX)
    }

    /// Authentication API base (ticket create/validate).
    pub fn auth_api_url(&self) -> String {
        format!("{}{}", self.alfresco_base_url, AUTH_API_PREFIX)
    }

    /// Search API base (AFTS and CMIS queries).
    pub fn search_api_url(&self) -> String {
        format!("{}{}", self.alfresco_base_url, SEARCH_API_PREFIX)
    }
}
