use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project-local config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "tocgen.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// Settings that shape discovery, heading scanning and output layout.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Extension of source documents, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Stem of the reserved title document; files starting with it are skipped
    #[serde(default = "default_index_name")]
    pub index_name: String,

    /// Directory the descriptor is written to, relative to the working directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Prefix of every `href` in the descriptor
    #[serde(default = "default_href_prefix")]
    pub href_prefix: String,

    /// Headings deeper than this never become topics
    #[serde(default = "default_max_level")]
    pub max_level: usize,

    /// Front-matter field holding the grouping key
    #[serde(default = "default_group_field")]
    pub group_field: String,

    #[serde(default = "default_front_matter_delimiter")]
    pub front_matter_delimiter: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            index_name: default_index_name(),
            output_dir: default_output_dir(),
            output_file: default_output_file(),
            href_prefix: default_href_prefix(),
            max_level: default_max_level(),
            group_field: default_group_field(),
            front_matter_delimiter: default_front_matter_delimiter(),
        }
    }
}

fn default_extension() -> String {
    "md".to_string()
}

fn default_index_name() -> String {
    "index".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("contents")
}

fn default_output_file() -> String {
    "toc.xml".to_string()
}

fn default_href_prefix() -> String {
    "contents".to_string()
}

fn default_max_level() -> usize {
    3
}

fn default_group_field() -> String {
    "part".to_string()
}

fn default_front_matter_delimiter() -> String {
    "---".to_string()
}

impl GeneratorConfig {
    /// File name of the reserved title document, e.g. `index.md`.
    pub fn index_file_name(&self) -> String {
        format!("{}.{}", self.index_name, self.extension)
    }

    /// Full path of the descriptor.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Link target of a rendered document.
    pub fn href(&self, stem: &str) -> String {
        format!("{}/{}.html", self.href_prefix, stem)
    }
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/tocgen/config.toml
    /// - Linux: ~/.config/tocgen/config.toml
    /// - Windows: %APPDATA%/tocgen/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tocgen").join("config.toml"))
    }

    /// Load config from `./tocgen.toml`, then the platform config file,
    /// or return the defaults if neither exists.
    pub fn load() -> Self {
        if let Some(config) = Self::load_from(Path::new(LOCAL_CONFIG_FILE)) {
            return config;
        }

        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Read a single config file. Missing files are silent, broken ones are
    /// reported and skipped.
    pub fn load_from(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded configuration from {}", path.display());
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.index_file_name(), "index.md");
        assert_eq!(config.output_path(), PathBuf::from("contents").join("toc.xml"));
        assert_eq!(config.max_level, 3);
        assert_eq!(config.group_field, "part");
    }

    #[test]
    fn test_href() {
        let config = GeneratorConfig::default();
        assert_eq!(config.href("intro"), "contents/intro.html");
        assert_eq!(config.href(&config.index_name), "contents/index.html");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[generator]\nmax_level = 2\n").unwrap();
        assert_eq!(config.generator.max_level, 2);
        assert_eq!(config.generator.extension, "md");

        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.generator.output_file, "toc.xml");
    }

    #[test]
    fn test_load_from_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tocgen.toml");
        fs::write(&path, "[generator\nmax_level = ").unwrap();
        assert!(Config::load_from(&path).is_none());
        assert!(Config::load_from(&dir.path().join("missing.toml")).is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tocgen.toml");
        fs::write(&path, "[generator]\nhref_prefix = \"help\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.generator.href("a"), "help/a.html");
    }
}
