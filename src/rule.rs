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

use crate::config::MiningConfig;
use crate::errors::{MineError, Result};
use crate::generate_rules::ItemsetSupport;
use crate::item::Item;
use crate::itemizer::Itemizer;
use crate::vec_sets::union;
use ordered_float::OrderedFloat;
use std::hash::{Hash, Hasher};

/// An association rule. Antecedent and consequent are disjoint sorted
/// itemsets whose union is a mined frequent itemset; all metrics are derived
/// from the itemset supports at construction.
#[derive(Clone, Debug)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl Rule {
    /// Derives the rule antecedent => consequent from the mined supports.
    ///
    /// The union, the antecedent and the consequent are all frequent by the
    /// apriori property, so all three lookups must succeed; a miss means the
    /// frequent itemset collection is incomplete and the run is aborted.
    pub fn make(
        antecedent: Vec<Item>,
        consequent: Vec<Item>,
        itemset_support: &ItemsetSupport,
        num_transactions: u32,
    ) -> Result<Rule> {
        let ac_vec: Vec<Item> = union(&antecedent, &consequent);
        let ac_count = lookup(itemset_support, &ac_vec)?;
        let a_count = lookup(itemset_support, &antecedent)?;
        let c_count = lookup(itemset_support, &consequent)?;

        let n = f64::from(num_transactions);
        let support = ac_count / n;
        let confidence = ac_count / a_count;
        let lift = confidence / (c_count / n);
        let leverage = support - (a_count / n) * (c_count / n);

        Ok(Rule {
            antecedent,
            consequent,
            support,
            confidence,
            lift,
            leverage,
        })
    }

    pub fn to_string(&self, itemizer: &Itemizer) -> String {
        [
            Item::item_vec_to_string(&self.antecedent, itemizer),
            " => ".to_owned(),
            Item::item_vec_to_string(&self.consequent, itemizer),
        ]
        .join("")
    }
}

fn lookup(itemset_support: &ItemsetSupport, items: &[Item]) -> Result<f64> {
    match itemset_support.get(items) {
        Some(&count) => Ok(f64::from(count)),
        None => Err(MineError::missing_support(items)),
    }
}

/// Drops rules below the confidence or lift thresholds and sorts the rest:
/// lift descending, then confidence descending, then antecedent and
/// consequent ascending so the output order is fully reproducible.
pub fn filter_and_rank(mut rules: Vec<Rule>, config: &MiningConfig) -> Vec<Rule> {
    rules.retain(|rule| {
        rule.confidence >= config.min_confidence && rule.lift >= config.min_lift
    });
    rules.sort_by(|a, b| {
        OrderedFloat(b.lift)
            .cmp(&OrderedFloat(a.lift))
            .then_with(|| OrderedFloat(b.confidence).cmp(&OrderedFloat(a.confidence)))
            .then_with(|| a.antecedent.cmp(&b.antecedent))
            .then_with(|| a.consequent.cmp(&b.consequent))
    });
    rules
}
