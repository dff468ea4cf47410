//! Site configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup closure so tests can feed a fixed map
//! instead of mutating the process environment. `from_env` is the thin
//! wrapper used by `main`.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_OPT_IN_TABLE: &str = "message_opt_ins";
pub const DEFAULT_REMOTE_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REMOTE_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Startup configuration failures. These are the only fatal errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("{present} is set but {missing} is not")]
    PartialSupabase { present: &'static str, missing: &'static str },
}

/// Hosted auth + record store endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project URL without trailing slash, e.g. `https://xyz.supabase.co`.
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// `None` disables the auth and opt-in endpoints (they answer 503).
    pub supabase: Option<SupabaseConfig>,
    pub port: u16,
    pub cookie_secure: bool,
    pub opt_in_table: String,
    pub timeouts: RemoteTimeouts,
}

impl SiteConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `SUPABASE_URL` + `SUPABASE_ANON_KEY` (both or neither)
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: bool; defaults to whether `SITE_URL` is https
    /// - `OPT_IN_TABLE`: default `message_opt_ins`
    /// - `REMOTE_REQUEST_TIMEOUT_SECS`: default 10
    /// - `REMOTE_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error for unparseable values or a half-configured remote.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let supabase = match (get("SUPABASE_URL"), get("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ConfigError::Invalid { var: "SUPABASE_URL", value: url });
                }
                Some(SupabaseConfig { url: url.trim_end_matches('/').to_owned(), anon_key })
            }
            (Some(_), None) => {
                return Err(ConfigError::PartialSupabase { present: "SUPABASE_URL", missing: "SUPABASE_ANON_KEY" });
            }
            (None, Some(_)) => {
                return Err(ConfigError::PartialSupabase { present: "SUPABASE_ANON_KEY", missing: "SUPABASE_URL" });
            }
            (None, None) => None,
        };

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let cookie_secure = match get("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => get("SITE_URL").is_some_and(|url| url.starts_with("https://")),
        };

        let opt_in_table = get("OPT_IN_TABLE").unwrap_or_else(|| DEFAULT_OPT_IN_TABLE.to_owned());
        if !is_table_name(&opt_in_table) {
            return Err(ConfigError::Invalid { var: "OPT_IN_TABLE", value: opt_in_table });
        }

        let timeouts = RemoteTimeouts {
            request_secs: parse_secs(&get, "REMOTE_REQUEST_TIMEOUT_SECS", DEFAULT_REMOTE_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_secs(&get, "REMOTE_CONNECT_TIMEOUT_SECS", DEFAULT_REMOTE_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { supabase, port, cookie_secure, opt_in_table, timeouts })
    }
}

/// Parse the usual spellings of a boolean flag.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_secs<G>(get: &G, var: &'static str, default: u64) -> Result<u64, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ConfigError::Invalid { var, value: raw }),
        },
        None => Ok(default),
    }
}

/// The table name is interpolated into a URL path.
fn is_table_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
