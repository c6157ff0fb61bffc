use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::graph::DuplicateEdgePolicy;
use crate::services::algorithm::QueueOrder;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub graph: GraphConfig,
    pub dijkstra: DijkstraConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// 为 false 时输出到 stderr
    pub to_file: bool,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_file: false,
            dir: "logs".to_string(),
            file: "placegraph".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GraphConfig {
    pub duplicate_edges: DuplicateEdgePolicy,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DijkstraConfig {
    pub queue_order: QueueOrder,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert!(!config.log.to_file);
        assert_eq!(config.graph.duplicate_edges, DuplicateEdgePolicy::KeepFirst);
        assert_eq!(config.dijkstra.queue_order, QueueOrder::Tentative);
    }

    #[test]
    fn test_config_load_save() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.log.level = "debug".to_string();
        config.dijkstra.queue_order = QueueOrder::StaticWeight;
        config.save(temp_file.path()).expect("Failed to save config");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config, loaded_config);
    }

    #[test]
    fn test_config_partial_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"[graph]\nduplicate_edges = \"reject\"\n")
            .expect("Failed to write TOML content to temporary file");

        let config = Config::load(temp_file.path()).expect("Failed to load partial config");
        assert_eq!(config.graph.duplicate_edges, DuplicateEdgePolicy::Reject);
        assert_eq!(config.log, LogConfig::default());
        assert_eq!(config.dijkstra.queue_order, QueueOrder::Tentative);
    }

    #[test]
    fn test_config_rejects_unknown_variant() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        temp_file
            .write_all(b"[dijkstra]\nqueue_order = \"fastest\"\n")
            .expect("Failed to write TOML content to temporary file");

        assert!(Config::load(temp_file.path()).is_err());
    }
}
