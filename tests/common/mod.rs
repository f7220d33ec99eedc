//! 集成测试共享工具模块
//!
//! 提供测试图数据和参考实现，供所有集成测试使用

#![allow(dead_code)]

pub mod data_fixtures;

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;

use pathsearch::WeightedGraph;

#[derive(Debug, PartialEq)]
struct DistanceNode<N> {
    distance: f64,
    node: N,
}

impl<N: PartialEq> Eq for DistanceNode<N> {}

impl<N: PartialEq> Ord for DistanceNode<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}

impl<N: PartialEq> PartialOrd for DistanceNode<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 参考实现：Dijkstra 单源最短距离（仅用于非负权图）
pub fn dijkstra_distances<N: Clone + Eq + Hash>(
    graph: &WeightedGraph<N>,
    start: &N,
) -> HashMap<N, f64> {
    let mut distances: HashMap<N, f64> = HashMap::new();
    let mut heap = BinaryHeap::new();

    distances.insert(start.clone(), 0.0);
    heap.push(DistanceNode {
        distance: 0.0,
        node: start.clone(),
    });

    while let Some(DistanceNode { distance, node }) = heap.pop() {
        if distance > distances.get(&node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        for neighbor in graph.neighbors(&node) {
            let candidate = distance + graph.edge_cost(&node, neighbor);
            if candidate < distances.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                distances.insert(neighbor.clone(), candidate);
                heap.push(DistanceNode {
                    distance: candidate,
                    node: neighbor.clone(),
                });
            }
        }
    }

    distances
}

/// 从 `start` 可达的节点集合
pub fn reachable_from<N: Clone + Eq + Hash>(graph: &WeightedGraph<N>, start: &N) -> HashSet<N> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(node) = queue.pop_front() {
        for neighbor in graph.neighbors(&node) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
            }
        }
    }

    visited
}

/// 邻居列表，供引擎回调使用
pub fn neighbor_vec<N: Clone + Eq + Hash>(graph: &WeightedGraph<N>, node: &N) -> Vec<N> {
    graph.neighbors(node).cloned().collect()
}
