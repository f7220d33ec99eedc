//! 统一错误处理 for pathsearch
//!
//! 搜索本身的结果（未找到、负权环）以返回值表达，见
//! [`SearchResult`](crate::services::algorithm::SearchResult)。
//! 这里的错误类型覆盖配置、日志等外围操作，以及调用方希望用 `?`
//! 传播搜索失败时的转换。

use thiserror::Error;

/// 统一的错误类型
#[derive(Error, Debug)]
pub enum PathError {
    #[error("未找到满足目标条件的路径")]
    NotFound,

    #[error("检测到负权环，搜索已中止")]
    NegativeCycle,

    #[error("无效配置: {0}")]
    InvalidConfig(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("配置序列化错误: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("日志错误: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error("日志系统已初始化")]
    LoggerAlreadyInitialized,
}

/// 统一的结果类型
pub type PathResult<T> = Result<T, PathError>;
