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
use crate::item::Item;
use crate::itemizer::Itemizer;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::Path;

/// Reads a transaction list: one transaction per line, comma separated item
/// names. Items are interned via the itemizer; transactions come back sorted
/// and deduplicated, blank lines skipped. All cleaning beyond that is the
/// data-prep layer's problem, not ours.
pub fn read_transactions<P: AsRef<Path>>(
    path: P,
    itemizer: &mut Itemizer,
) -> Result<Vec<Vec<Item>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut transactions = vec![];
    for line in reader.lines() {
        let line = line?;
        let mut transaction = line
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| itemizer.id_of(s))
            .collect::<Vec<Item>>();

        // Some input files have transactions with duplicate items.
        // Remove any duplicates here.
        transaction.sort();
        dedupe_sorted(&mut transaction);

        if !transaction.is_empty() {
            transactions.push(transaction);
        }
    }
    Ok(transactions)
}

fn dedupe_sorted(v: &mut Vec<Item>) {
    let mut i = 0;
    let mut k = 0;
    while i < v.len() {
        v[k] = v[i];
        while i < v.len() && v[k] == v[i] {
            i += 1;
        }
        k += 1;
    }
    assert!(k <= v.len());
    v.resize(k, Item::null());
}
