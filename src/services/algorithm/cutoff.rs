//! 剪枝策略
//!
//! 出队节点在目标检测之后、扩展之前交给剪枝策略判断。
//! 任一规则命中时跳过该节点的扩展（不枚举邻居）。

use std::fmt;
use std::time::Duration;

use super::types::SearchProgress;

/// 调用方自定义的剪枝规则
pub type CutoffPredicate<'a, N> = Box<dyn FnMut(&N, &SearchProgress) -> bool + 'a>;

/// 剪枝策略组合
///
/// 默认不剪枝。各规则之间是"或"的关系。
pub struct Cutoff<'a, N> {
    prune_by_best: bool,
    max_explored: Option<usize>,
    time_limit: Option<Duration>,
    predicate: Option<CutoffPredicate<'a, N>>,
}

impl<'a, N> Cutoff<'a, N> {
    /// 不剪枝
    pub fn none() -> Self {
        Self {
            prune_by_best: false,
            max_explored: None,
            time_limit: None,
            predicate: None,
        }
    }

    /// 仅使用调用方规则
    pub fn predicate(predicate: impl FnMut(&N, &SearchProgress) -> bool + 'a) -> Self {
        Self::none().with_predicate(predicate)
    }

    /// 当前节点的 g 值已超过目前最优完整路径代价时剪枝
    ///
    /// 仅在穷举模式下有意义。只有当该节点之后的边代价都非负时才是安全的：
    /// 图中存在负权边时，这条规则可能剪掉之后会变成最优的分支。
    pub fn with_prune_by_best(mut self) -> Self {
        self.prune_by_best = true;
        self
    }

    /// 已扩展节点数达到 `max_explored` 后不再扩展
    pub fn with_max_explored(mut self, max_explored: usize) -> Self {
        self.max_explored = Some(max_explored);
        self
    }

    /// 搜索耗时达到 `limit` 后不再扩展
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_predicate(
        mut self,
        predicate: impl FnMut(&N, &SearchProgress) -> bool + 'a,
    ) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// 是否配置了任何规则
    pub fn is_active(&self) -> bool {
        self.prune_by_best
            || self.max_explored.is_some()
            || self.time_limit.is_some()
            || self.predicate.is_some()
    }

    /// 判断是否跳过该节点的扩展
    pub fn should_prune(&mut self, node: &N, progress: &SearchProgress) -> bool {
        if self.prune_by_best && progress.cost > progress.best_distance {
            return true;
        }

        if let Some(max_explored) = self.max_explored {
            if progress.explored >= max_explored {
                return true;
            }
        }

        if let Some(limit) = self.time_limit {
            if progress.elapsed >= limit {
                return true;
            }
        }

        match self.predicate.as_mut() {
            Some(predicate) => predicate(node, progress),
            None => false,
        }
    }
}

impl<N> Default for Cutoff<'_, N> {
    fn default() -> Self {
        Self::none()
    }
}

impl<N> fmt::Debug for Cutoff<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cutoff")
            .field("prune_by_best", &self.prune_by_best)
            .field("max_explored", &self.max_explored)
            .field("time_limit", &self.time_limit)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}
