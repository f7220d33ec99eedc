//! 算法模块
//!
//! 包含最优优先路径搜索引擎及其组成部分
//!
//! # 组成
//! - `path_search`: A* 搜索引擎，支持穷举模式和负权环检测
//! - `frontier`: 惰性删除的优先队列
//! - `cutoff`: 剪枝策略
//! - `graph`: 带权邻接表图及常用查询

pub mod cutoff;
pub mod frontier;
pub mod graph;
pub mod path_search;
pub mod types;

// 重新导出常用类型
pub use cutoff::{Cutoff, CutoffPredicate};
pub use frontier::Frontier;
pub use graph::{euclidean_distance, manhattan_distance, WeightedGraph};
pub use path_search::PathSearch;
pub use types::{SearchOutcome, SearchProgress, SearchResult, SearchState, SearchStats};
