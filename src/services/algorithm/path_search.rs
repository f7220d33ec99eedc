//! 最优优先路径搜索（A*）
//!
//! 图结构由调用方在搜索时以回调形式提供：目标判定、启发式、边代价、邻居枚举。
//! 与教科书 A* 相比增加了两点：
//!
//! - 穷举模式：找到目标后继续搜索，返回整个可达（且未被剪枝）区域内的最优目标路径
//! - 负权环保护：若一次松弛会再次改进刚刚经过的那条边，说明搜索无法正常终止，
//!   立即以 `-inf` 距离返回
//!
//! 启发式不要求可采纳，边代价允许为负。

use std::collections::{HashMap, HashSet};
use std::convert::Infallible;
use std::hash::Hash;
use std::time::Instant;

use super::cutoff::Cutoff;
use super::frontier::Frontier;
use super::types::{SearchProgress, SearchResult, SearchState, SearchStats};

/// 路径搜索引擎
///
/// 所有内部状态在每次搜索开始时重置，搜索结束后保留以供检查，
/// 直到下一次搜索或 [`clear`](Self::clear)。
#[derive(Debug, Clone)]
pub struct PathSearch<N> {
    frontier: Frontier<N>,
    /// 前驱节点，用于重建路径和负权环检测
    predecessors: HashMap<N, N>,
    /// g 值：起点到节点的最优已知代价
    g_scores: HashMap<N, f64>,
    /// f 值：g 值 + 启发式估计
    f_scores: HashMap<N, f64>,
    /// 已扩展过的节点，用于按不同节点计数
    expanded: HashSet<N>,
    /// 穷举模式下目前找到的最优结果
    best: SearchResult<N>,
    stats: SearchStats,
    state: SearchState,
}

impl<N: Clone + Eq + Hash> PathSearch<N> {
    pub fn new() -> Self {
        Self {
            frontier: Frontier::new(),
            predecessors: HashMap::new(),
            g_scores: HashMap::new(),
            f_scores: HashMap::new(),
            expanded: HashSet::new(),
            best: SearchResult::not_found(),
            stats: SearchStats::new(),
            state: SearchState::Initialized,
        }
    }

    /// 清空全部搜索状态
    pub fn clear(&mut self) {
        self.frontier.clear();
        self.predecessors.clear();
        self.g_scores.clear();
        self.f_scores.clear();
        self.expanded.clear();
        self.best = SearchResult::not_found();
        self.stats = SearchStats::new();
        self.state = SearchState::Initialized;
    }

    /// 从 `start` 搜索到任一满足 `goal` 的节点
    ///
    /// # 参数
    /// - `start`: 起始节点
    /// - `goal`: 目标判定，每个有效出队节点调用一次
    /// - `heuristic`: 到目标的估计代价，可以不可采纳
    /// - `edge_cost`: 边代价，可以为负
    /// - `neighbors`: 邻居枚举，惰性消费
    /// - `exhaustive`: 为 true 时找到目标后继续搜索，返回最优目标路径
    /// - `cutoff`: 剪枝策略，命中的节点不扩展
    ///
    /// # 返回
    /// - 找到：路径及有限距离
    /// - 未找到：穷举模式下目前最优结果，或 (空路径, +inf)
    /// - 负权环：(目前最优路径, -inf)
    #[allow(clippy::too_many_arguments)]
    pub fn find_path<G, H, C, F, I>(
        &mut self,
        start: N,
        mut goal: G,
        mut heuristic: H,
        mut edge_cost: C,
        mut neighbors: F,
        exhaustive: bool,
        cutoff: Cutoff<'_, N>,
    ) -> SearchResult<N>
    where
        G: FnMut(&N) -> bool,
        H: FnMut(&N) -> f64,
        C: FnMut(&N, &N) -> f64,
        F: FnMut(&N) -> I,
        I: IntoIterator<Item = N>,
    {
        let result = self.try_find_path(
            start,
            |node| Ok::<_, Infallible>(goal(node)),
            |node| Ok(heuristic(node)),
            |from, to| Ok(edge_cost(from, to)),
            |node| Ok(neighbors(node)),
            exhaustive,
            cutoff,
        );

        match result {
            Ok(found) => found,
            Err(never) => match never {},
        }
    }

    /// [`find_path`](Self::find_path) 的可失败版本
    ///
    /// 任一回调返回 `Err` 时立即中止搜索，并将该错误原样返回。
    #[allow(clippy::too_many_arguments)]
    pub fn try_find_path<E, G, H, C, F, I>(
        &mut self,
        start: N,
        mut goal: G,
        mut heuristic: H,
        mut edge_cost: C,
        mut neighbors: F,
        exhaustive: bool,
        mut cutoff: Cutoff<'_, N>,
    ) -> Result<SearchResult<N>, E>
    where
        G: FnMut(&N) -> Result<bool, E>,
        H: FnMut(&N) -> Result<f64, E>,
        C: FnMut(&N, &N) -> Result<f64, E>,
        F: FnMut(&N) -> Result<I, E>,
        I: IntoIterator<Item = N>,
    {
        self.clear();
        let started = Instant::now();
        self.state = SearchState::Expanding;

        let start_estimate = heuristic(&start)?;
        self.g_scores.insert(start.clone(), 0.0);
        self.f_scores.insert(start.clone(), start_estimate);
        self.frontier.push(start, start_estimate);

        log::debug!(
            "路径搜索开始: exhaustive={}, cutoff={:?}",
            exhaustive,
            cutoff
        );

        while let Some((current, priority)) = self.frontier.pop() {
            self.stats.increment_nodes_popped();

            if priority > self.estimate_of(&current) {
                self.stats.increment_stale_discarded();
                log::trace!("丢弃过期队列条目: priority={}", priority);
                continue;
            }

            if goal(&current)? {
                self.stats.increment_goals_reached();
                let found = self.reconstruct_path(&current);

                if !exhaustive {
                    return Ok(self.finish(found, SearchState::Returned, started));
                }

                if found.distance < self.best.distance {
                    log::debug!("更新最优路径: distance={}", found.distance);
                    self.best = found;
                }
            }

            if cutoff.is_active() {
                let progress = SearchProgress {
                    cost: self.cost_to(&current),
                    best_distance: self.best.distance,
                    explored: self.stats.nodes_explored,
                    elapsed: started.elapsed(),
                };
                if cutoff.should_prune(&current, &progress) {
                    self.stats.increment_nodes_pruned();
                    continue;
                }
            }

            self.stats.increment_expansions();
            if self.expanded.insert(current.clone()) {
                self.stats.increment_nodes_explored();
            }

            for neighbor in neighbors(&current)? {
                let candidate = self.cost_to(&current) + edge_cost(&current, &neighbor)?;

                // NaN 代价不视为改进
                if candidate.is_nan() || candidate >= self.cost_to(&neighbor) {
                    continue;
                }

                // 再次改进刚经过的边：沿环的松弛永远不会停止
                if self.predecessors.get(&neighbor) == Some(&current) {
                    log::warn!(
                        "检测到负权环，搜索中止: explored={}",
                        self.stats.nodes_explored
                    );
                    let sentinel = SearchResult::new(self.best.path.clone(), f64::NEG_INFINITY);
                    return Ok(self.finish(sentinel, SearchState::AbortedNegativeCycle, started));
                }

                let estimate = candidate + heuristic(&neighbor)?;
                self.predecessors.insert(neighbor.clone(), current.clone());
                self.g_scores.insert(neighbor.clone(), candidate);
                self.f_scores.insert(neighbor.clone(), estimate);
                self.stats.increment_edges_relaxed();

                self.frontier.push_if_better(neighbor, estimate);
            }
        }

        let best = self.best.clone();
        Ok(self.finish(best, SearchState::Returned, started))
    }

    fn finish(
        &mut self,
        result: SearchResult<N>,
        state: SearchState,
        started: Instant,
    ) -> SearchResult<N> {
        self.state = state;
        self.stats
            .set_execution_time(started.elapsed().as_millis() as u64);
        log::debug!(
            "路径搜索结束: state={:?}, distance={}, explored={}, expansions={}, stale={}",
            state,
            result.distance,
            self.stats.nodes_explored,
            self.stats.expansions,
            self.stats.stale_discarded
        );
        result
    }

    /// 沿前驱链重建从起点到 `node` 的路径
    ///
    /// 距离取 `node` 当前的 g 值（未访问过的节点为 +inf）。
    /// 前驱链出现环时在重复节点之前停止。
    pub fn reconstruct_path(&self, node: &N) -> SearchResult<N> {
        let distance = self.cost_to(node);
        let mut path = vec![node.clone()];
        let mut visited: HashSet<&N> = HashSet::new();
        visited.insert(node);

        let mut current = node;
        while let Some(predecessor) = self.predecessors.get(current) {
            if !visited.insert(predecessor) {
                break;
            }
            path.push(predecessor.clone());
            current = predecessor;
        }

        path.reverse();
        SearchResult::new(path, distance)
    }

    /// 起点到 `node` 的最优已知代价，未访问过的节点为 +inf
    pub fn cost_to(&self, node: &N) -> f64 {
        self.g_scores.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// `node` 的 f 值，未访问过的节点为 +inf
    pub fn estimate_of(&self, node: &N) -> f64 {
        self.f_scores.get(node).copied().unwrap_or(f64::INFINITY)
    }

    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node)
    }

    /// 穷举模式下目前找到的最优结果
    pub fn best_so_far(&self) -> &SearchResult<N> {
        &self.best
    }

    /// 已扩展的不同节点数
    pub fn explored(&self) -> usize {
        self.stats.nodes_explored
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// 前沿队列中剩余的条目数（含过期条目）
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}

impl<N: Clone + Eq + Hash> Default for PathSearch<N> {
    fn default() -> Self {
        Self::new()
    }
}
