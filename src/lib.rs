//! Frequent pattern mining over line-oriented transaction files.
//!
//! Two level-wise miners share one shape: count single tokens, drop those
//! below the minimum support, grow the survivors by one token, count again,
//! and stop once nothing can be grown.
//!
//! - [`apriori`] mines unordered itemsets from `;`-delimited lines.
//! - [`prefix`] mines contiguous word sequences from space-separated lines.

pub mod apriori;
pub mod config;
pub mod corpus;
pub mod error;
pub mod observer;
pub mod output;
pub mod prefix;
pub mod storage;
pub mod support;

pub use apriori::{apriori, mine_itemsets};
pub use config::{CountStrategy, MineConfig};
pub use corpus::{Corpus, WordRef};
pub use error::{MineError, Result};
pub use observer::{MiningObserver, MiningSummary, NoopObserver, TracingObserver};
pub use output::{LevelOneReport, LevelSink, ResultWriter};
pub use prefix::{mine_sequences, prefix_span};
pub use storage::FrequentLevel;
