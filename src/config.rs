use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Key events between swap-file writes when not configured.
pub const DEFAULT_AUTOSAVE_INTERVAL: u32 = 10;

/// Defaults read from rc files and merged with command-line flags.
///
/// Files hold the same flags the CLI accepts, so a saved config is just the
/// flags that were on the command line at the time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub join_speakers: bool,
    pub autosave_interval: Option<u32>,
    pub undo_limit: Option<usize>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            join_speakers: self.join_speakers || other.join_speakers,
            autosave_interval: other.autosave_interval.or(self.autosave_interval),
            undo_limit: other.undo_limit.or(self.undo_limit),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }

    pub fn autosave_interval(&self) -> u32 {
        self.autosave_interval.unwrap_or(DEFAULT_AUTOSAVE_INTERVAL)
    }

    pub fn undo_limit(&self) -> usize {
        self.undo_limit.unwrap_or(crate::editor::DEFAULT_UNDO_LIMIT)
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("parley").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("parley")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("parley").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("parley").join("config");
        }
    }

    PathBuf::from(".parleyrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".parleyrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# parley defaults (saved with --save)".to_string());
    if flags.join_speakers {
        lines.push("--join-speakers".to_string());
    }
    if let Some(interval) = flags.autosave_interval {
        lines.push(format!("--autosave-interval {interval}"));
    }
    if let Some(limit) = flags.undo_limit {
        lines.push(format!("--undo-limit {limit}"));
    }
    if let Some(path) = &flags.log_file {
        lines.push(format!("--log-file {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pull known flags out of an argument list, ignoring everything else.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        let mut value = || {
            inline.map(ToOwned::to_owned).or_else(|| {
                let next = tokens.get(i + 1).cloned();
                if next.is_some() {
                    i += 1;
                }
                next
            })
        };
        match name {
            "--join-speakers" => flags.join_speakers = true,
            "--autosave-interval" => {
                if let Some(parsed) = value().and_then(|v| v.parse().ok()) {
                    flags.autosave_interval = Some(parsed);
                }
            }
            "--undo-limit" => {
                if let Some(parsed) = value().and_then(|v| v.parse().ok()) {
                    flags.undo_limit = Some(parsed);
                }
            }
            "--log-file" => {
                if let Some(path) = value() {
                    flags.log_file = Some(PathBuf::from(path));
                }
            }
            _ => {}
        }
        i += 1;
    }
    flags
}
