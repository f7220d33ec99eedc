use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::{PathError, PathResult};
use crate::services::algorithm::Cutoff;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub log: LogConfig,
}

/// 搜索默认参数
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// 找到目标后继续搜索最优路径
    pub exhaustive: bool,
    /// 当前代价超过已知最优路径时剪枝（存在负权边时不安全）
    pub prune_by_best: bool,
    /// 最多扩展的节点数
    pub max_explored: Option<usize>,
    /// 搜索时间上限（毫秒）
    pub time_limit_ms: Option<u64>,
}

impl SearchConfig {
    /// 按配置构建剪枝策略
    pub fn cutoff<'a, N>(&self) -> Cutoff<'a, N> {
        let mut cutoff = Cutoff::none();
        if self.prune_by_best {
            cutoff = cutoff.with_prune_by_best();
        }
        if let Some(max_explored) = self.max_explored {
            cutoff = cutoff.with_max_explored(max_explored);
        }
        if let Some(ms) = self.time_limit_ms {
            cutoff = cutoff.with_time_limit(Duration::from_millis(ms));
        }
        cutoff
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
    /// 异步写入，关闭时由 [`shutdown`](crate::utils::logging::shutdown) 刷新
    pub async_write: bool,
    /// 追加到已有日志文件，否则覆盖
    pub append: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "pathsearch".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
            async_write: true,
            append: true,
        }
    }
}

impl LogConfig {
    pub fn validate(&self) -> PathResult<()> {
        if self.level.trim().is_empty() {
            return Err(PathError::InvalidConfig("log.level 不能为空".to_string()));
        }
        if self.file.trim().is_empty() {
            return Err(PathError::InvalidConfig("log.file 不能为空".to_string()));
        }
        if self.max_files == 0 {
            return Err(PathError::InvalidConfig(
                "log.max_files 必须大于 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> PathResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> PathResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> PathResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> PathResult<()> {
        if self.search.max_explored == Some(0) {
            return Err(PathError::InvalidConfig(
                "search.max_explored 必须大于 0".to_string(),
            ));
        }
        if self.search.time_limit_ms == Some(0) {
            return Err(PathError::InvalidConfig(
                "search.time_limit_ms 必须大于 0".to_string(),
            ));
        }
        self.log.validate()
    }
}
