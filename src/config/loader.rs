//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{ExoError, ExoResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ExoResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ExoError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Where the user config lives: `$EXOFRAME_CONFIG`, else `<config dir>/exoframe/config.toml`
pub fn config_path() -> Option<PathBuf> {
    config_path_with(|key| std::env::var(key).ok(), dirs::config_dir())
}

fn config_path_with(
    get_env: impl Fn(&str) -> Option<String>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(explicit) = get_env("EXOFRAME_CONFIG").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    config_dir.map(|dir| dir.join("exoframe/config.toml"))
}

/// Load from user config or defaults, with env overrides on top
pub fn load_or_default() -> Config {
    let config = match config_path() {
        Some(path) if path.exists() => match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                debug!("loaded config from {}", path.display());
                report_warnings(&warnings);
                config
            }
            Err(err) => {
                warn!("{}; using defaults", err);
                Config::default()
            }
        },
        _ => Config::default(),
    };

    with_env_overrides(config)
}

/// Apply environment variable overrides (EXOFRAME_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // EXOFRAME_ENDPOINT
    if let Some(endpoint) = get_env("EXOFRAME_ENDPOINT").filter(|v| !v.is_empty()) {
        config.endpoint = endpoint;
    }

    // EXOFRAME_TOKEN
    if let Some(token) = get_env("EXOFRAME_TOKEN") {
        config.token = token;
    }

    // EXOFRAME_TIMEOUT (seconds)
    if let Some(raw) = get_env("EXOFRAME_TIMEOUT") {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => config.timeout_secs = secs,
            _ => warn!(
                "ignoring invalid EXOFRAME_TIMEOUT '{}', keeping {}s",
                raw, config.timeout_secs
            ),
        }
    }

    config
}

fn report_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        match &w.suggestion {
            Some(s) => warn!("unknown config key '{}' in {} (did you mean '{}'?)", w.key, location, s),
            None => warn!("unknown config key '{}' in {}", w.key, location),
        }
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["endpoint", "token", "timeout_secs"];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
