//! Configuration loading
//!
//! Hierarchy (highest priority first):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables (HANDOFF_*)
//! 3. Explicit `--config` file, else `./handoff.toml`
//! 4. User config (`<config_dir>/handoff/config.toml`)
//! 5. Built-in defaults

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::infrastructure::codec::Encoding;

use super::env_validator::{suggest, EnvVarValidator};
use super::types::{Backend, Config};

/// Project-local config file name
pub const LOCAL_CONFIG_FILE: &str = "handoff.toml";

const KNOWN_KEYS: &[&str] = &["store", "backend", "root", "encoding", "fsync"];

/// Non-fatal configuration warning surfaced to CLI users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys)
pub fn load_with_warnings(path: &Path) -> StoreResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);
    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StoreError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    config.source = Some(path.to_path_buf());

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest(&key, KNOWN_KEYS).map(str::to_string),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    debug!(path = %path.display(), "loaded configuration");
    Ok((config, warnings))
}

/// Resolve the configuration file to use and load it
///
/// An explicit path must exist; discovered files are optional. Parse errors
/// are reported either way.
pub fn discover(explicit: Option<&Path>) -> StoreResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        return load_with_warnings(path);
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return load_with_warnings(&local);
    }

    if let Some(user) = user_config_path() {
        if user.is_file() {
            return load_with_warnings(&user);
        }
    }

    Ok((Config::default(), Vec::new()))
}

/// `<config_dir>/handoff/config.toml`, if a config dir is known
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("handoff").join("config.toml"))
}

/// Apply environment variable overrides (HANDOFF_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides<F, W>(mut config: Config, lookup: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    if let Some(value) = lookup("HANDOFF_BACKEND") {
        if let Some(backend) = EnvVarValidator::new("HANDOFF_BACKEND", Backend::NAMES)
            .parse(&value, Backend::parse, &mut *writer)
        {
            config.store.backend = backend;
        }
    }

    if let Some(value) = lookup("HANDOFF_ROOT") {
        if !value.trim().is_empty() {
            config.store.root = Some(PathBuf::from(value));
        }
    }

    if let Some(value) = lookup("HANDOFF_ENCODING") {
        if let Some(encoding) = EnvVarValidator::new("HANDOFF_ENCODING", Encoding::NAMES)
            .parse(&value, Encoding::parse, &mut *writer)
        {
            config.store.encoding = encoding;
        }
    }

    if let Some(value) = lookup("HANDOFF_FSYNC") {
        if let Some(fsync) = EnvVarValidator::new("HANDOFF_FSYNC", &["true", "false"])
            .parse(&value, parse_bool, &mut *writer)
        {
            config.store.fsync = fsync;
        }
    }

    config
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
