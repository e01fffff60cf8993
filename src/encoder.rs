// Copyright 2018 Chris Pearce
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::errors::{MineError, Result};
use crate::item::Item;
use crate::item_counter::ItemCounter;
use std::cmp;

/// The canonical encoding of a transaction set for one mining run.
///
/// Every transaction is filtered down to items meeting the support threshold
/// and reordered by the single global item order (count descending, item id
/// ascending). The frequency table and order are fixed once built; the tree
/// builder and miner only read them.
#[derive(Debug)]
pub struct EncodedTransactions {
    /// Encoded transactions; transactions left empty by filtering are dropped.
    pub transactions: Vec<Vec<Item>>,
    /// Frequency table restricted to items meeting the threshold.
    pub item_count: ItemCounter,
    /// Total transaction count N, before any were dropped. Support fractions
    /// are relative to this.
    pub num_transactions: u32,
    /// The support threshold as an absolute transaction count.
    pub min_count: u32,
}

/// Converts a fractional support threshold to an absolute count over
/// `num_transactions`. An itemset with support exactly on the threshold
/// qualifies, so round up, never below one.
pub fn min_support_count(min_support: f64, num_transactions: u32) -> u32 {
    cmp::max(1, (min_support * f64::from(num_transactions)).ceil() as u32)
}

/// Encodes transactions for tree building. Input transactions must already be
/// deduplicated item sets.
///
/// Fails with `InvalidThreshold` if `min_support` is outside (0, 1], and with
/// `EmptyInput` if there are no transactions at all.
pub fn encode(transactions: &[Vec<Item>], min_support: f64) -> Result<EncodedTransactions> {
    if !(min_support > 0.0 && min_support <= 1.0) {
        return Err(MineError::InvalidThreshold {
            name: "support",
            value: min_support,
            domain: "(0, 1]",
        });
    }
    if transactions.is_empty() {
        return Err(MineError::EmptyInput);
    }
    let num_transactions = transactions.len() as u32;
    let min_count = min_support_count(min_support, num_transactions);

    // One pass to count per-item transaction frequencies.
    let mut counts = ItemCounter::new();
    for transaction in transactions {
        for item in transaction {
            counts.add(item, 1);
        }
    }

    // Restrict the table to qualifying items.
    let mut item_count = ItemCounter::new();
    for item in counts.items_with_count_at_least(min_count) {
        item_count.set(&item, counts.get(&item));
    }

    let mut encoded: Vec<Vec<Item>> = Vec::with_capacity(transactions.len());
    for transaction in transactions {
        let mut kept: Vec<Item> = transaction
            .iter()
            .copied()
            .filter(|item| counts.get(item) >= min_count)
            .collect();
        if kept.is_empty() {
            continue;
        }
        item_count.sort_descending(&mut kept);
        encoded.push(kept);
    }

    Ok(EncodedTransactions {
        transactions: encoded,
        item_count,
        num_transactions,
        min_count,
    })
}

#[cfg(test)]
mod tests {
    use super::{encode, min_support_count};
    use crate::errors::MineError;
    use crate::item::Item;
    use crate::itemizer::Itemizer;

    fn transactions(itemizer: &mut Itemizer, lines: &[&[&str]]) -> Vec<Vec<Item>> {
        lines
            .iter()
            .map(|line| {
                let mut t = itemizer.to_id_vec(line);
                t.sort();
                t
            })
            .collect()
    }

    #[test]
    fn test_min_support_count_rounds_up() {
        assert_eq!(min_support_count(0.5, 4), 2);
        assert_eq!(min_support_count(0.5, 5), 3);
        assert_eq!(min_support_count(0.01, 99), 1);
        assert_eq!(min_support_count(1.0, 7), 7);
        // Never below one transaction.
        assert_eq!(min_support_count(0.0001, 3), 1);
    }

    #[test]
    fn test_invalid_threshold() {
        let mut itemizer = Itemizer::new();
        let txns = transactions(&mut itemizer, &[&["a"]]);
        for bad in [0.0, -0.5, 1.01] {
            match encode(&txns, bad) {
                Err(MineError::InvalidThreshold { name, .. }) => assert_eq!(name, "support"),
                other => panic!("expected InvalidThreshold, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(encode(&[], 0.5), Err(MineError::EmptyInput)));
    }

    #[test]
    fn test_filtering_and_order() {
        let mut itemizer = Itemizer::new();
        // d appears once in 4 transactions and falls below min_support=0.5.
        let txns = transactions(
            &mut itemizer,
            &[
                &["a", "b", "d"],
                &["b", "a"],
                &["b", "c"],
                &["c", "a", "b"],
            ],
        );
        let encoded = encode(&txns, 0.5).unwrap();
        let a = itemizer.id_of("a");
        let b = itemizer.id_of("b");
        let c = itemizer.id_of("c");
        let d = itemizer.id_of("d");

        assert_eq!(encoded.num_transactions, 4);
        assert_eq!(encoded.min_count, 2);
        assert_eq!(encoded.item_count.get(&b), 4);
        assert_eq!(encoded.item_count.get(&a), 3);
        assert_eq!(encoded.item_count.get(&c), 2);
        // Below-threshold items are absent from the restricted table.
        assert_eq!(encoded.item_count.get(&d), 0);

        // Every transaction is ordered by count descending, id ascending.
        assert_eq!(
            encoded.transactions,
            vec![
                vec![b, a],
                vec![b, a],
                vec![b, c],
                vec![b, a, c],
            ]
        );
    }

    #[test]
    fn test_transactions_emptied_by_filtering_are_dropped() {
        let mut itemizer = Itemizer::new();
        let txns = transactions(&mut itemizer, &[&["a"], &["a"], &["x"], &["y"]]);
        let encoded = encode(&txns, 0.5).unwrap();
        let a = itemizer.id_of("a");
        assert_eq!(encoded.transactions, vec![vec![a], vec![a]]);
        // N still counts the dropped transactions.
        assert_eq!(encoded.num_transactions, 4);
    }

    #[test]
    fn test_threshold_boundary() {
        let mut itemizer = Itemizer::new();
        // a: 2 of 4 transactions (exactly min_support), b: 1 of 4 (below).
        let txns = transactions(&mut itemizer, &[&["a"], &["a", "b"], &["c"], &["c"]]);
        let encoded = encode(&txns, 0.5).unwrap();
        let a = itemizer.id_of("a");
        let b = itemizer.id_of("b");
        assert_eq!(encoded.item_count.get(&a), 2);
        assert_eq!(encoded.item_count.get(&b), 0);
    }
}
