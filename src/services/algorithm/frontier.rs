//! 搜索前沿（开放列表）
//!
//! 基于二叉堆的最小优先队列，优先级相同时按插入顺序出队。
//! 队列不支持原地更新优先级：更优的条目直接重复入队，
//! 过期条目在出队时由调用方对照权威 f 值丢弃（惰性删除）。

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

/// 前沿队列条目
#[derive(Debug, Clone)]
struct FrontierEntry<N> {
    priority: f64,
    /// 插入序号，用于同优先级时的先进先出
    seq: u64,
    node: N,
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // 最小堆：priority 小的优先，其次 seq 小的优先
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 带成员表的前沿队列
///
/// 成员表记录每个节点最近一次入队时的优先级
#[derive(Debug, Clone)]
pub struct Frontier<N> {
    heap: BinaryHeap<FrontierEntry<N>>,
    membership: HashMap<N, f64>,
    next_seq: u64,
}

impl<N: Clone + Eq + Hash> Frontier<N> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            membership: HashMap::new(),
            next_seq: 0,
        }
    }

    /// 入队并更新成员表
    pub fn push(&mut self, node: N, priority: f64) {
        self.membership.insert(node.clone(), priority);
        self.heap.push(FrontierEntry {
            priority,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    /// 节点从未入队，或上次入队的优先级比 `priority` 差
    pub fn should_push(&self, node: &N, priority: f64) -> bool {
        match self.recorded_priority(node) {
            Some(recorded) => recorded > priority,
            None => true,
        }
    }

    /// 仅当 [`should_push`](Self::should_push) 成立时入队，返回是否入队
    pub fn push_if_better(&mut self, node: N, priority: f64) -> bool {
        if self.should_push(&node, priority) {
            self.push(node, priority);
            true
        } else {
            false
        }
    }

    /// 弹出优先级最小的条目，返回 (节点, 入队时的优先级)
    pub fn pop(&mut self) -> Option<(N, f64)> {
        self.heap.pop().map(|entry| (entry.node, entry.priority))
    }

    /// 上次入队的优先级
    pub fn recorded_priority(&self, node: &N) -> Option<f64> {
        self.membership.get(node).copied()
    }

    /// 队列中的条目数（包含过期的重复条目）
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.membership.clear();
        self.next_seq = 0;
    }
}

impl<N: Clone + Eq + Hash> Default for Frontier<N> {
    fn default() -> Self {
        Self::new()
    }
}
