//! Server configuration layered over the Leptos site options.
//!
//! Leptos options come from `[workspace.metadata.leptos]` (or the `LEPTOS_*`
//! variables cargo-leptos exports). The environment can then override:
//! - `PORT`: listen port, keeping the configured host
//! - `SITE_ROOT`: directory holding `pkg/` and static files
//! - `RUST_LOG`: tracing filter, default [`DEFAULT_LOG_FILTER`]

use leptos::config::LeptosOptions;

use crate::error::ServerError;

pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: Option<u16>,
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables. Unset variables leave
    /// the Leptos options untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `PORT` is not a non-zero `u16`.
    pub fn from_env() -> Result<Self, ServerError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let site_root = parse_site_root(std::env::var("SITE_ROOT").ok().as_deref());
        Ok(Self { port, site_root })
    }

    /// Apply the overrides onto loaded Leptos options.
    pub fn apply(&self, options: &mut LeptosOptions) {
        if let Some(port) = self.port {
            options.site_addr.set_port(port);
        }
        if let Some(site_root) = &self.site_root {
            options.site_root = site_root.as_str().into();
        }
    }
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ServerError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ServerError::Config { var: "PORT", value: raw.to_owned() }),
        Ok(port) => Ok(Some(port)),
    }
}

fn parse_site_root(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
