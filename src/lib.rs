//! Frequent itemset and association rule mining over transaction lists,
//! using a parallel FP-Growth implementation.
//!
//! The pipeline runs strictly downward: transactions are encoded into a
//! frequency-ordered form, compressed into an FP-tree, mined recursively for
//! frequent itemsets, and the itemsets expanded into ranked association
//! rules. [`mine`] drives the whole pipeline; the stage modules are public
//! for callers that want to run them separately.

pub mod command_line_args;
pub mod config;
pub mod encoder;
pub mod errors;
pub mod fptree;
pub mod generate_rules;
pub mod item;
pub mod item_counter;
pub mod itemizer;
pub mod output;
pub mod rule;
pub mod transaction_reader;
pub mod vec_sets;

use std::time::Instant;
use tracing::debug;

use crate::config::MiningConfig;
use crate::errors::Result;
use crate::fptree::{fp_growth, FPTree, ItemSet};
use crate::item::Item;
use crate::rule::Rule;

/// The result of one mining run. Itemsets are sorted by support descending,
/// then size ascending; rules are ranked by lift then confidence.
pub struct MiningOutput {
    pub itemsets: Vec<ItemSet>,
    pub rules: Vec<Rule>,
    pub num_transactions: u32,
}

/// Runs the full pipeline over a set of transactions. Transactions must be
/// deduplicated item sets (the transaction reader guarantees this).
///
/// Configuration errors are rejected before any computation. Zero
/// transactions legitimately mine to nothing and yield an empty output
/// rather than an error; callers that require data should use
/// [`encoder::encode`] directly, which treats empty input as a failure.
pub fn mine(transactions: &[Vec<Item>], config: &MiningConfig) -> Result<MiningOutput> {
    config.validate()?;
    if transactions.is_empty() {
        return Ok(MiningOutput {
            itemsets: vec![],
            rules: vec![],
            num_transactions: 0,
        });
    }

    let timer = Instant::now();
    let encoded = encoder::encode(transactions, config.min_support)?;
    debug!(
        "encoded {} of {} transactions in {:?}",
        encoded.transactions.len(),
        encoded.num_transactions,
        timer.elapsed()
    );

    let timer = Instant::now();
    let mut fptree = FPTree::new();
    for transaction in &encoded.transactions {
        fptree.insert(transaction, 1);
    }
    debug!("built FP-tree in {:?}", timer.elapsed());

    let timer = Instant::now();
    let mut itemsets = fp_growth(&fptree, encoded.min_count, &[], encoded.num_transactions);
    itemsets.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.len().cmp(&b.len()))
            .then_with(|| a.items.cmp(&b.items))
    });
    debug!(
        "mined {} frequent itemsets in {:?}",
        itemsets.len(),
        timer.elapsed()
    );

    let timer = Instant::now();
    let supports = generate_rules::support_map(&itemsets);
    let candidates = generate_rules::generate_rules(&itemsets, encoded.num_transactions, &supports)?;
    let rules = rule::filter_and_rank(candidates, config);
    debug!("kept {} rules in {:?}", rules.len(), timer.elapsed());

    Ok(MiningOutput {
        itemsets,
        rules,
        num_transactions: encoded.num_transactions,
    })
}
