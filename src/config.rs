use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = ".locsyncrc.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root", alias = "srcDir")]
    pub source_root: String,
    #[serde(default = "default_locales_root", alias = "localesDir")]
    pub locales_root: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_global_namespace")]
    pub global_namespace: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_source_root() -> String {
    "./src".to_string()
}

fn default_locales_root() -> String {
    "./public/locales".to_string()
}

fn default_languages() -> Vec<String> {
    ["en", "de"].map(String::from).to_vec()
}

fn default_extensions() -> Vec<String> {
    ["tsx", "ts", "jsx", "js"].map(String::from).to_vec()
}

fn default_global_namespace() -> String {
    "translation".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            locales_root: default_locales_root(),
            languages: default_languages(),
            extensions: default_extensions(),
            global_namespace: default_global_namespace(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' must contain at least one language code");
        }
        if let Some(language) = self
            .languages
            .iter()
            .find(|l| l.is_empty() || l.contains(['/', '\\']))
        {
            bail!("Invalid language code in 'languages': \"{}\"", language);
        }
        if self.extensions.is_empty() {
            bail!("'extensions' must contain at least one file extension");
        }
        if self.global_namespace.is_empty() {
            bail!("'globalNamespace' can not be empty");
        }
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }

    /// Extensions without a leading dot: `.tsx` and `tsx` are both accepted.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect()
    }
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
    /// Directory relative paths in the config are resolved against: the
    /// directory of the config file, or the start directory without one.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source_root: PathBuf,
    pub locales_root: PathBuf,
    pub languages: Vec<String>,
    pub extensions: Vec<String>,
    pub global_namespace: String,
    pub ignores: Vec<String>,
}

impl Settings {
    pub fn resolve(config: &Config, base_dir: &Path) -> Self {
        Self {
            source_root: base_dir.join(&config.source_root),
            locales_root: base_dir.join(&config.locales_root),
            languages: config.languages.clone(),
            extensions: config.normalized_extensions(),
            global_namespace: config.global_namespace.clone(),
            ignores: config.ignores.clone(),
        }
    }
}
