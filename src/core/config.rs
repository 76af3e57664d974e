//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path to open on startup (must be a declared route).
    pub start_route: Option<String>,
    /// Skip entrance animations entirely.
    pub reduced_motion: Option<bool>,
    /// File served by the "Download CV" control.
    pub resume_path: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_ROUTE: &str = "/";
pub const DEFAULT_RESUME_PATH: &str = "resume.pdf";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_route: String,
    pub reduced_motion: bool,
    pub resume_path: PathBuf,
    pub name: Option<String>,
    pub headline: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Folio Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_route = "/"                  # "/", "/about", "/projects", "/skills", "/contact"
# reduced_motion = false             # true skips entrance animations
# resume_path = "resume.pdf"         # file copied by "Download CV"

# [profile]
# name = "ARJUN REJI"
# headline = "MERN Stack Developer"
# email = "arjunreji364@gmail.com"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_route` is the `--route` flag, `cli_reduced_motion` the
/// `--reduced-motion` flag (false = not specified).
pub fn resolve(
    config: &FolioConfig,
    cli_route: Option<&str>,
    cli_reduced_motion: bool,
) -> ResolvedConfig {
    // Start route: CLI → env → config → default
    let start_route = cli_route
        .map(|s| s.to_string())
        .or_else(|| std::env::var("FOLIO_ROUTE").ok())
        .or_else(|| config.general.start_route.clone())
        .unwrap_or_else(|| DEFAULT_START_ROUTE.to_string());

    // Reduced motion: CLI flag → env (any non-empty value) → config → default off
    let reduced_motion = cli_reduced_motion
        || std::env::var("FOLIO_REDUCED_MOTION").is_ok_and(|v| !v.is_empty() && v != "0")
        || config.general.reduced_motion.unwrap_or(false);

    // Resume path: env → config → default
    let resume_path = std::env::var("FOLIO_RESUME")
        .ok()
        .or_else(|| config.general.resume_path.clone())
        .unwrap_or_else(|| DEFAULT_RESUME_PATH.to_string());

    ResolvedConfig {
        start_route,
        reduced_motion,
        resume_path: PathBuf::from(resume_path),
        name: config.profile.name.clone(),
        headline: config.profile.headline.clone(),
        email: config.profile.email.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = FolioConfig::default();
        assert!(config.general.start_route.is_none());
        assert!(config.profile.name.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = FolioConfig::default();
        let resolved = resolve(&config, None, false);
        assert_eq!(resolved.start_route, DEFAULT_START_ROUTE);
        assert!(!resolved.reduced_motion);
        assert_eq!(resolved.resume_path, PathBuf::from(DEFAULT_RESUME_PATH));
        assert!(resolved.name.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FolioConfig {
            general: GeneralConfig {
                start_route: Some("/projects".to_string()),
                reduced_motion: Some(true),
                resume_path: Some("cv/arjun.pdf".to_string()),
            },
            profile: ProfileConfig {
                name: Some("A. Reji".to_string()),
                headline: None,
                email: None,
            },
        };
        let resolved = resolve(&config, None, false);
        assert_eq!(resolved.start_route, "/projects");
        assert!(resolved.reduced_motion);
        assert_eq!(resolved.resume_path, PathBuf::from("cv/arjun.pdf"));
        assert_eq!(resolved.name.as_deref(), Some("A. Reji"));
    }

    #[test]
    fn test_resolve_cli_route_wins() {
        let config = FolioConfig {
            general: GeneralConfig {
                start_route: Some("/about".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("/contact"), false);
        assert_eq!(resolved.start_route, "/contact");
    }

    #[test]
    fn test_resolve_cli_reduced_motion_wins_over_config_off() {
        let config = FolioConfig {
            general: GeneralConfig {
                reduced_motion: Some(false),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None, true);
        assert!(resolved.reduced_motion);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
start_route = "/skills"
reduced_motion = true
resume_path = "docs/resume.pdf"

[profile]
name = "ARJUN REJI"
email = "arjunreji364@gmail.com"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_route.as_deref(), Some("/skills"));
        assert_eq!(config.general.reduced_motion, Some(true));
        assert_eq!(config.profile.name.as_deref(), Some("ARJUN REJI"));
        assert_eq!(config.profile.headline, None);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[profile]
name = "Someone Else"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.profile.name.as_deref(), Some("Someone Else"));
        assert!(config.general.start_route.is_none());
        assert!(config.general.reduced_motion.is_none());
    }
}
