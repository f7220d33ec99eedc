//! 带权邻接表图
//!
//! 为没有自有图结构的调用方提供邻接表表示，以及基于 [`PathSearch`] 的常用查询。

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::SearchConfig;

use super::cutoff::Cutoff;
use super::path_search::PathSearch;
use super::types::SearchResult;

/// 带权有向图，值为(邻居, 权重)列表
#[derive(Debug, Clone)]
pub struct WeightedGraph<N> {
    adjacency: HashMap<N, Vec<(N, f64)>>,
}

impl<N: Clone + Eq + Hash> WeightedGraph<N> {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// 由 (起点, 终点, 权重) 列表构建
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N, f64)>) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// 添加有向边，重复添加同一条边时覆盖权重
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) {
        self.add_node(to.clone());
        let edges = self.adjacency.entry(from).or_default();
        match edges.iter_mut().find(|(n, _)| *n == to) {
            Some(edge) => edge.1 = weight,
            None => edges.push((to, weight)),
        }
    }

    pub fn add_undirected_edge(&mut self, a: N, b: N, weight: f64) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// 邻居节点，按添加顺序
    pub fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> + '_ {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(n, _)| n))
    }

    /// 边权重，边不存在时为 +inf
    pub fn edge_cost(&self, from: &N, to: &N) -> f64 {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.iter().find(|(n, _)| n == to))
            .map(|(_, weight)| *weight)
            .unwrap_or(f64::INFINITY)
    }

    /// 路径上相邻节点间边权重之和
    pub fn path_cost(&self, path: &[N]) -> f64 {
        path.windows(2)
            .map(|pair| self.edge_cost(&pair[0], &pair[1]))
            .sum()
    }

    /// 使用 A* 查找 `start` 到 `target` 的最短路径
    ///
    /// # 参数
    /// - `start`: 起始节点
    /// - `target`: 目标节点
    /// - `heuristic`: 启发式函数，估计从当前节点到目标节点的代价
    pub fn shortest_path(
        &self,
        start: &N,
        target: &N,
        mut heuristic: impl FnMut(&N, &N) -> f64,
    ) -> SearchResult<N> {
        if !self.contains_node(start) || !self.contains_node(target) {
            return SearchResult::not_found();
        }

        let mut engine = PathSearch::new();
        engine.find_path(
            start.clone(),
            |node| node == target,
            |node| heuristic(node, target),
            |from, to| self.edge_cost(from, to),
            |node| self.neighbors(node).cloned().collect::<Vec<_>>(),
            false,
            Cutoff::none(),
        )
    }

    /// 查找最短路径，启发式恒为 0（退化为 Dijkstra）
    pub fn shortest_path_no_heuristic(&self, start: &N, target: &N) -> SearchResult<N> {
        self.shortest_path(start, target, |_, _| 0.0)
    }

    /// 使用曼哈顿距离启发式（适用于网格图）
    pub fn shortest_path_manhattan(
        &self,
        start: &N,
        target: &N,
        coordinates: impl Fn(&N) -> (i64, i64),
    ) -> SearchResult<N> {
        self.shortest_path(start, target, |node, target| {
            manhattan_distance(coordinates(node), coordinates(target))
        })
    }

    /// 使用欧几里得距离启发式
    pub fn shortest_path_euclidean(
        &self,
        start: &N,
        target: &N,
        coordinates: impl Fn(&N) -> (f64, f64),
    ) -> SearchResult<N> {
        self.shortest_path(start, target, |node, target| {
            euclidean_distance(coordinates(node), coordinates(target))
        })
    }

    /// 按配置执行搜索（穷举模式和剪枝规则取自配置）
    pub fn search(
        &self,
        start: &N,
        goal: impl FnMut(&N) -> bool,
        heuristic: impl FnMut(&N) -> f64,
        config: &SearchConfig,
    ) -> SearchResult<N> {
        let mut engine = PathSearch::new();
        engine.find_path(
            start.clone(),
            goal,
            heuristic,
            |from, to| self.edge_cost(from, to),
            |node| self.neighbors(node).cloned().collect::<Vec<_>>(),
            config.exhaustive,
            config.cutoff(),
        )
    }
}

impl<N: Clone + Eq + Hash> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightedGraph<usize> {
    /// 由邻接矩阵构建，`matrix[i][j]` 为 `Some(w)` 表示存在边 i->j
    pub fn from_matrix(matrix: &[Vec<Option<f64>>]) -> Self {
        let mut graph = Self::new();
        for (from, row) in matrix.iter().enumerate() {
            graph.add_node(from);
            for (to, weight) in row.iter().enumerate() {
                if let Some(weight) = weight {
                    graph.add_edge(from, to, *weight);
                }
            }
        }
        graph
    }
}

/// 曼哈顿距离
pub fn manhattan_distance(a: (i64, i64), b: (i64, i64)) -> f64 {
    ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f64
}

/// 欧几里得距离
pub fn euclidean_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
