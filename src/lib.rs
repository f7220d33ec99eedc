//! pathsearch - A generic best-first (A*) path search engine
//!
//! The caller supplies the graph at search time through callbacks: goal
//! predicate, heuristic, edge cost and neighbor enumeration. The engine adds an
//! exhaustive mode that keeps searching for a strictly better goal, optional
//! cutoff rules for pruning, and a negative-cycle guard that aborts with a
//! `-inf` distance instead of relaxing forever.
//!
//! ```
//! use pathsearch::{Cutoff, PathSearch};
//!
//! let edges = [('A', 'B', 1.0), ('A', 'C', 4.0), ('B', 'C', 1.0), ('C', 'D', 1.0)];
//! let mut engine = PathSearch::new();
//! let result = engine.find_path(
//!     'A',
//!     |n| *n == 'D',
//!     |_| 0.0,
//!     |a, b| edges.iter().find(|e| e.0 == *a && e.1 == *b).map_or(f64::INFINITY, |e| e.2),
//!     |n| edges.iter().filter(|e| e.0 == *n).map(|e| e.1).collect::<Vec<_>>(),
//!     false,
//!     Cutoff::none(),
//! );
//! assert_eq!(result.path, vec!['A', 'B', 'C', 'D']);
//! assert_eq!(result.distance, 3.0);
//! ```

pub mod config;
pub mod core;
pub mod services;
pub mod utils;

pub use crate::core::{PathError, PathResult};
pub use services::algorithm::{
    Cutoff, PathSearch, SearchOutcome, SearchProgress, SearchResult, SearchState, SearchStats,
    WeightedGraph,
};
