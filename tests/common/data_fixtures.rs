//! 测试数据生成模块
//!
//! 提供各种测试图的生成函数

use pathsearch::WeightedGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A->B(1), A->C(4), B->C(1), C->D(1)
pub fn small_dag() -> WeightedGraph<char> {
    WeightedGraph::from_edges([
        ('A', 'B', 1.0),
        ('A', 'C', 4.0),
        ('B', 'C', 1.0),
        ('C', 'D', 1.0),
    ])
}

/// 含负权环的 5 节点邻接矩阵，环位于 {0,1,2,3} 之间，3->0 代价 -10
pub fn negative_cycle_matrix() -> Vec<Vec<Option<f64>>> {
    vec![
        vec![None, Some(5.0), Some(3.0), Some(5.0), None],
        vec![Some(5.0), None, Some(5.0), Some(-1.0), None],
        vec![Some(4.0), None, Some(5.0), Some(6.0), None],
        vec![Some(-10.0), Some(5.0), Some(2.0), None, Some(1.0)],
        vec![Some(7.0), None, Some(5.0), None, None],
    ]
}

/// width x height 网格，相邻格子双向连通，权重为 [1, max_weight] 的整数
pub fn random_grid(width: i64, height: i64, max_weight: u32, seed: u64) -> WeightedGraph<(i64, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedGraph::new();

    for x in 0..width {
        for y in 0..height {
            graph.add_node((x, y));
            if x + 1 < width {
                let weight = rng.gen_range(1..=max_weight) as f64;
                graph.add_undirected_edge((x, y), (x + 1, y), weight);
            }
            if y + 1 < height {
                let weight = rng.gen_range(1..=max_weight) as f64;
                graph.add_undirected_edge((x, y), (x, y + 1), weight);
            }
        }
    }

    graph
}

/// 随机有向无环图：仅存在 i->j (i < j) 的边，权重为正整数
pub fn random_dag(nodes: usize, edge_probability: f64, seed: u64) -> WeightedGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedGraph::new();

    for from in 0..nodes {
        graph.add_node(from);
        for to in (from + 1)..nodes {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(1..=20) as f64;
                graph.add_edge(from, to, weight);
            }
        }
    }

    graph
}
