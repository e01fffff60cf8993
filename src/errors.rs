use thiserror::Error;

use crate::item::Item;

pub type Result<T> = std::result::Result<T, MineError>;

/// Errors surfaced by the mining pipeline.
///
/// Threshold and input errors are rejected before any computation starts.
/// `MissingItemsetSupport` is an internal invariant violation: the rule
/// generator found a frequent itemset whose subset is absent from the
/// mined collection, which the apriori property rules out.
#[derive(Error, Debug)]
pub enum MineError {
    #[error("invalid {name} threshold {value}: must be in {domain}")]
    InvalidThreshold {
        name: &'static str,
        value: f64,
        domain: &'static str,
    },

    #[error("no transactions to mine")]
    EmptyInput,

    #[error("no support recorded for itemset {itemset:?}")]
    MissingItemsetSupport { itemset: Vec<u32> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MineError {
    pub fn missing_support(items: &[Item]) -> MineError {
        MineError::MissingItemsetSupport {
            itemset: items.iter().map(|i| i.as_id()).collect(),
        }
    }
}
