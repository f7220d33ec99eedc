// 日志工具模块
//
// 搜索引擎内部只使用 log 宏，这里负责把它们接到 flexi_logger 的滚动文件上。
// 日志句柄全局唯一，重复初始化返回错误而不是替换已有 logger。

use crate::config::LogConfig;
use crate::core::{PathError, PathResult};
use flexi_logger::{
    detailed_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use std::sync::{Mutex, MutexGuard, PoisonError};

static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

fn handle_slot() -> MutexGuard<'static, Option<LoggerHandle>> {
    LOGGER_HANDLE.lock().unwrap_or_else(PoisonError::into_inner)
}

fn build_logger(config: &LogConfig) -> PathResult<Logger> {
    let write_mode = if config.async_write {
        WriteMode::Async
    } else {
        WriteMode::Direct
    };

    let logger = Logger::try_with_str(&config.level)?
        .log_to_file(
            FileSpec::default()
                .basename(&config.file)
                .directory(&config.dir),
        )
        .format_for_files(detailed_format)
        .rotate(
            Criterion::Size(config.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.max_files),
        )
        .write_mode(write_mode);

    Ok(if config.append { logger.append() } else { logger })
}

/// 初始化日志系统
///
/// 配置先经过 [`LogConfig::validate`]；已初始化时返回
/// [`PathError::LoggerAlreadyInitialized`]。
///
/// # Examples
/// ```no_run
/// use pathsearch::config::LogConfig;
/// use pathsearch::utils::logging;
///
/// let config = LogConfig::default();
/// logging::init(&config).expect("日志初始化失败");
/// ```
pub fn init(config: &LogConfig) -> PathResult<()> {
    config.validate()?;

    let mut slot = handle_slot();
    if slot.is_some() {
        return Err(PathError::LoggerAlreadyInitialized);
    }
    *slot = Some(build_logger(config)?.start()?);
    drop(slot);

    log::info!(
        "日志系统初始化完成: {}/{} (async={}, append={})",
        config.dir,
        config.file,
        config.async_write,
        config.append
    );
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 异步模式下句柄 drop 时会等待写线程结束
pub fn shutdown() {
    if let Some(handle) = handle_slot().take() {
        handle.flush();
    }
}

pub fn is_initialized() -> bool {
    handle_slot().is_some()
}
