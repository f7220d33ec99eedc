//! 路径搜索共享类型定义
//!
//! 包含搜索结果、统计信息和搜索进度快照

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{PathError, PathResult};

/// 搜索结果：路径及其总代价
///
/// `distance` 的取值有三种含义：
/// - 有限值：找到路径
/// - `f64::INFINITY`：未找到满足目标条件的节点
/// - `f64::NEG_INFINITY`：检测到负权环，搜索中止
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<N> {
    /// 从起点到目标节点（含两端）的节点序列
    pub path: Vec<N>,
    /// 路径总代价
    pub distance: f64,
}

impl<N> SearchResult<N> {
    pub fn new(path: Vec<N>, distance: f64) -> Self {
        Self { path, distance }
    }

    /// 未找到路径时的初始值：(空路径, +inf)
    pub fn not_found() -> Self {
        Self {
            path: Vec::new(),
            distance: f64::INFINITY,
        }
    }

    pub fn is_found(&self) -> bool {
        self.distance.is_finite()
    }

    pub fn is_negative_cycle(&self) -> bool {
        self.distance == f64::NEG_INFINITY
    }

    pub fn outcome(&self) -> SearchOutcome {
        if self.distance == f64::INFINITY {
            SearchOutcome::NotFound
        } else if self.distance == f64::NEG_INFINITY {
            SearchOutcome::NegativeCycle
        } else {
            SearchOutcome::Found
        }
    }

    /// 路径中的节点数
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// 将哨兵结果转换为错误，便于调用方用 `?` 传播
    pub fn into_found(self) -> PathResult<(Vec<N>, f64)> {
        match self.outcome() {
            SearchOutcome::Found => Ok((self.path, self.distance)),
            SearchOutcome::NotFound => Err(PathError::NotFound),
            SearchOutcome::NegativeCycle => Err(PathError::NegativeCycle),
        }
    }
}

impl<N> Default for SearchResult<N> {
    fn default() -> Self {
        Self::not_found()
    }
}

/// 搜索结果分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    Found,
    NotFound,
    NegativeCycle,
}

/// 搜索引擎状态
///
/// 一次搜索是单向的状态机：
/// `Initialized -> Expanding -> Returned | AbortedNegativeCycle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Initialized,
    Expanding,
    Returned,
    AbortedNegativeCycle,
}

/// 搜索统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// 扩展过的不同节点数（不含被剪枝或过期丢弃的）
    pub nodes_explored: usize,
    /// 扩展次数，负权边使已扩展节点再次入队时会重复计数
    pub expansions: usize,
    /// 弹出的队列条目总数
    pub nodes_popped: usize,
    /// 因过期被丢弃的队列条目数
    pub stale_discarded: usize,
    /// 被剪枝策略跳过扩展的节点数
    pub nodes_pruned: usize,
    /// 成功松弛的边数
    pub edges_relaxed: usize,
    /// 弹出时满足目标条件的次数
    pub goals_reached: usize,
    pub execution_time_ms: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_nodes_explored(&mut self) {
        self.nodes_explored += 1;
    }

    pub fn increment_expansions(&mut self) {
        self.expansions += 1;
    }

    pub fn increment_nodes_popped(&mut self) {
        self.nodes_popped += 1;
    }

    pub fn increment_stale_discarded(&mut self) {
        self.stale_discarded += 1;
    }

    pub fn increment_nodes_pruned(&mut self) {
        self.nodes_pruned += 1;
    }

    pub fn increment_edges_relaxed(&mut self) {
        self.edges_relaxed += 1;
    }

    pub fn increment_goals_reached(&mut self) {
        self.goals_reached += 1;
    }

    pub fn set_execution_time(&mut self, time_ms: u64) {
        self.execution_time_ms = time_ms;
    }
}

/// 剪枝判断时提供给剪枝规则的搜索进度快照
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchProgress {
    /// 当前节点的 g 值（起点到该节点的最优已知代价）
    pub cost: f64,
    /// 目前找到的最优完整路径代价，未找到时为 +inf
    pub best_distance: f64,
    /// 已扩展的节点数
    pub explored: usize,
    /// 自本次搜索开始的耗时
    pub elapsed: Duration,
}
