// Config service
// Style options and child profiles persisted as a TOML file

use crate::models::style::{ChartLayout, ChartStyle, ChildProfile};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const CONFIG_FILE: &str = "config.toml";

/// Everything the app remembers between launches. The schedule tables
/// are deliberately absent: CSV files the user exports are their only
/// persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub style: ChartStyle,
    pub layout: ChartLayout,
    pub first_child: ChildProfile,
    pub second_child: ChildProfile,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            layout: ChartLayout::default(),
            first_child: ChildProfile::first_default(),
            second_child: ChildProfile::second_default(),
        }
    }
}

impl AppConfig {
    /// Load the persisted config, falling back to defaults when the file
    /// is missing or unreadable. Never fails.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                log::info!("no config file yet, using defaults");
                Self::default()
            }
            Err(err) => {
                log::warn!("could not load config, using defaults: {err:#}");
                Self::default()
            }
        }
    }

    fn load() -> Result<Option<Self>> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(config))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "family-timetable")
            .context("no home directory for the config file")?;
        Ok(dirs.config_dir().join(CONFIG_FILE))
    }

    /// Profile for a child slot, first slot = 0.
    pub fn child(&self, index: usize) -> &ChildProfile {
        if index == 0 {
            &self.first_child
        } else {
            &self.second_child
        }
    }

    pub fn child_mut(&mut self, index: usize) -> &mut ChildProfile {
        if index == 0 {
            &mut self.first_child
        } else {
            &mut self.second_child
        }
    }
}
