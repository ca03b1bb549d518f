use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locbookrc.json";

/// Project information shown on the instructions sheet.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_app_type")]
    pub app_type: String,
    #[serde(default = "default_platform")]
    pub platform: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            app_type: default_app_type(),
            platform: default_platform(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Category sheet order. Records in categories not listed here are
    /// reported as unrecognized and left out of the workbook.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Classifier block-list; matched case-insensitively as substrings.
    #[serde(default = "default_technical_keywords")]
    pub technical_keywords: Vec<String>,
    #[serde(default)]
    pub project: ProjectInfo,
}

fn default_app_name() -> String {
    "StepzSync".to_string()
}

fn default_app_type() -> String {
    "Fitness Tracking & Racing App".to_string()
}

fn default_platform() -> String {
    "Flutter (iOS & Android)".to_string()
}

pub fn default_categories() -> Vec<String> {
    [
        "Authentication",
        "Profile & Settings",
        "Race Management",
        "Active Races",
        "Social Features",
        "Leaderboard & Stats",
        "Home & Navigation",
        "Dialogs & Popups",
        "Subscription/Premium",
        "Errors & Validation",
        "Admin Dashboard",
        "Common/Shared",
    ]
    .map(String::from)
    .to_vec()
}

pub fn default_technical_keywords() -> Vec<String> {
    [
        "widget",
        "controller",
        "service",
        "model",
        "provider",
        "firebase",
        "firestore",
        "collection",
        "document",
        ".dart",
        ".json",
        "toString",
        "override",
        "async",
        "await",
        "class",
        "extends",
        "implements",
        "void",
        "setState",
        "initState",
        "dispose",
        "BuildContext",
        "StatefulWidget",
        "StatelessWidget",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            technical_keywords: default_technical_keywords(),
            project: ProjectInfo::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error when the category order is empty or contains
    /// duplicates, since both would corrupt the grouping step.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            bail!("'categories' must not be empty");
        }

        for (index, category) in self.categories.iter().enumerate() {
            if self.categories[..index].contains(category) {
                bail!("Duplicate category in 'categories': \"{}\"", category);
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
