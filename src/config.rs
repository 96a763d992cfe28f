use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// What submitting the editor opens.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreviewStyle {
    /// Switch the current view to preview mode.
    Inline,
    /// Push a read-only preview of a snapshot on top of the editor.
    #[default]
    Navigated,
}

impl PreviewStyle {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Navigated => "navigated",
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_stats: bool,
    pub osc52: bool,
    pub preview: Option<PreviewStyle>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_stats: self.no_stats || other.no_stats,
            osc52: self.osc52 || other.osc52,
            preview: other.preview.or(self.preview),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("mdpad").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("mdpad")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("mdpad").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("mdpad").join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".mdpadrc")
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
    let mut lines = vec!["# mdpad defaults (saved with --save)".to_string()];
    if flags.no_stats {
        lines.push("--no-stats".to_string());
    }
    if flags.osc52 {
        lines.push("--osc52".to_string());
    }
    if let Some(style) = flags.preview {
        lines.push(format!("--preview {}", style.as_str()));
    }
    if let Some(log_file) = &flags.log_file {
        lines.push(format!("--log-file {}", log_file.display()));
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

/// Extract known flags from CLI-style tokens, ignoring anything else.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--no-stats" => flags.no_stats = true,
            "--osc52" => flags.osc52 = true,
            "--preview" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.preview = parse_preview_style(next);
                    i += 1;
                }
            }
            "--log-file" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.log_file = Some(PathBuf::from(next));
                    i += 1;
                }
            }
            _ => {
                if let Some(value) = token.strip_prefix("--preview=") {
                    flags.preview = parse_preview_style(value);
                } else if let Some(value) = token.strip_prefix("--log-file=") {
                    flags.log_file = Some(PathBuf::from(value));
                }
            }
        }
        i += 1;
    }
    flags
}

fn parse_preview_style(s: &str) -> Option<PreviewStyle> {
    match s {
        "inline" => Some(PreviewStyle::Inline),
        "navigated" => Some(PreviewStyle::Navigated),
        _ => None,
    }
}
