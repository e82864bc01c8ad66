pub mod builder;
pub mod combinations;
pub mod frequency;
pub mod items;
pub mod mining;
pub mod storage;
pub mod tree;


pub use frequency::FrequencyTable;
pub use items::{ItemId, Itemizer, Transaction};
pub use mining::fp_growth_algorithm;
pub use storage::{FrequentItemsets, FrequentLevel, ItemsetStorage};
pub use tree::{FPNode, FPTree, PatternBase};
