//! 核心类型模块

pub mod error;

pub use error::{PathError, PathResult};
