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

use crate::errors::Result;
use crate::fptree::ItemSet;
use crate::item::Item;
use crate::rule::Rule;
use crate::vec_sets::difference;
use fnv::FnvHashMap;
use itertools::Itertools;

/// Support counts of every mined frequent itemset, keyed by the sorted item
/// vector. This is the only support source the rule generator consults.
pub type ItemsetSupport = FnvHashMap<Vec<Item>, u32>;

pub fn support_map(itemsets: &[ItemSet]) -> ItemsetSupport {
    itemsets
        .iter()
        .map(|itemset| (itemset.items.clone(), itemset.count))
        .collect()
}

/// Expands every frequent itemset of size >= 2 into all of its candidate
/// rules: each non-empty proper subset as antecedent, the complement as
/// consequent, 2^k - 2 splits per k-item set. Thresholding and ranking are
/// the caller's next stage; this emits every split with its metrics.
pub fn generate_rules(
    itemsets: &[ItemSet],
    num_transactions: u32,
    itemset_support: &ItemsetSupport,
) -> Result<Vec<Rule>> {
    let mut rules: Vec<Rule> = vec![];
    for itemset in itemsets.iter().filter(|i| i.len() > 1) {
        for antecedent in itemset.items.iter().cloned().powerset() {
            if antecedent.is_empty() || antecedent.len() == itemset.len() {
                continue;
            }
            let consequent = difference(&itemset.items, &antecedent);
            rules.push(Rule::make(
                antecedent,
                consequent,
                itemset_support,
                num_transactions,
            )?);
        }
    }
    Ok(rules)
}
