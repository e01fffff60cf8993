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

use crate::item::Item;
use crate::item_counter::ItemCounter;
use itertools::Itertools;
use rayon::prelude::*;
use std::cmp;

#[derive(Debug)]
struct FPNode {
    id: usize,
    item: Item,
    count: u32,
    children: Vec<usize>,
    parent: usize,
}

/// Prefix tree over encoded transactions. Nodes live in an arena addressed
/// by index; the tree exclusively owns them, and conditional trees are fresh
/// arenas rather than views into the parent. `item_lists` is the header
/// table: for each item, the ids of every node carrying it.
pub struct FPTree {
    nodes: Vec<Vec<FPNode>>,
    item_count: ItemCounter,
    next_node_id: usize,
    item_lists: Vec<Vec<usize>>,
}

impl FPNode {
    fn new(id: usize, item: Item, parent: usize) -> FPNode {
        FPNode {
            id,
            item,
            count: 0,
            children: Vec::with_capacity(1),
            parent,
        }
    }

    fn is_root(&self) -> bool {
        self.item.is_null()
    }
}

static FPTREE_SPLAY: usize = 32;

impl FPTree {
    pub fn new() -> FPTree {
        let mut tree = FPTree {
            nodes: vec![],
            item_count: ItemCounter::new(),
            next_node_id: 0,
            item_lists: Vec::new(),
        };
        // Add root.
        tree.add_node(0, Item::null());
        tree
    }

    fn add_node(&mut self, parent: usize, item: Item) -> usize {
        let id = self.next_node_id;
        self.next_node_id += 1;
        let (cohort, element) = self.sub_indices_of(id);
        // Should only be at most 1 element too small.
        assert!(cohort <= self.nodes.len());
        if self.nodes.len() <= cohort {
            self.nodes.push(Vec::with_capacity(FPTREE_SPLAY));
        }
        assert!(element == self.nodes[cohort].len());
        self.nodes[cohort].push(FPNode::new(id, item, parent));
        if id != 0 {
            self.get_node_mut(parent).children.push(id);
        }
        self.add_to_item_list(item, id);
        id
    }

    fn add_to_item_list(&mut self, item: Item, id: usize) {
        if item.is_null() {
            return;
        }
        let index = item.as_index();
        if index >= self.item_lists.len() {
            self.item_lists.resize(index + 1, vec![]);
        }
        self.item_lists[index].push(id);
    }

    fn sub_indices_of(&self, id: usize) -> (usize, usize) {
        (id / FPTREE_SPLAY, id % FPTREE_SPLAY)
    }

    fn get_node_mut(&mut self, id: usize) -> &mut FPNode {
        let (cohort, index) = self.sub_indices_of(id);
        if cohort >= self.nodes.len() || index >= self.nodes[cohort].len() {
            panic!("Invalid node id")
        }
        &mut self.nodes[cohort][index]
    }

    fn get_node(&self, id: usize) -> &FPNode {
        let (cohort, index) = self.sub_indices_of(id);
        if cohort >= self.nodes.len() || index >= self.nodes[cohort].len() {
            panic!("Invalid node id")
        }
        &self.nodes[cohort][index]
    }

    fn child_of(&self, id: usize, item: Item) -> Option<usize> {
        for &node_id in &self.get_node(id).children {
            if self.get_node(node_id).item == item {
                return Some(node_id);
            }
        }
        None
    }

    fn insert_child(&mut self, id: usize, item: Item, count: u32) -> usize {
        let child_id = match self.child_of(id, item) {
            Some(child_id) => child_id,
            None => self.add_node(id, item),
        };
        self.get_node_mut(child_id).count += count;
        child_id
    }

    /// Inserts one encoded transaction with the given multiplicity. The
    /// transaction's items must already be in the global item order; the
    /// walk shares any existing prefix and only forks where it must.
    pub fn insert(&mut self, transaction: &[Item], count: u32) {
        // Start iterating at the root node.
        let mut id = 0;
        for &item in transaction {
            // Keep a count of item frequencies of what's in the
            // tree, the miner prunes against these.
            self.item_count.add(&item, count);
            // Add the item to the tree as a child of the previous node.
            id = self.insert_child(id, item, count);
        }
    }

    pub fn item_count(&self) -> &ItemCounter {
        &self.item_count
    }

    /// Builds the conditional tree for `item` from its conditional pattern
    /// base: for every node carrying `item`, the path of ancestor items
    /// weighted by that node's count, re-inserted into a fresh tree.
    pub fn construct_conditional_tree(&self, item: Item) -> FPTree {
        let item_list = &self.item_lists[item.as_index()];
        let mut conditional_tree = FPTree::new();
        for &node_id in item_list {
            conditional_tree.insert(
                &self.path_from_root_to_excluding(node_id),
                self.get_node(node_id).count,
            );
        }
        conditional_tree
    }

    fn path_from_root_to_excluding(&self, node_id: usize) -> Vec<Item> {
        let mut path = vec![];
        let mut id = self.get_node(node_id).parent;
        loop {
            let node = self.get_node(id);
            if node.is_root() {
                break;
            }
            path.push(node.item);
            id = node.parent;
        }
        path.reverse();
        path
    }

    /// If no node in the tree has more than one child, returns the chain of
    /// (item, count) pairs from the root down. An empty tree is a single
    /// (zero length) path.
    fn single_path(&self) -> Option<Vec<(Item, u32)>> {
        let mut path = vec![];
        let mut id = 0;
        loop {
            let node = self.get_node(id);
            match node.children.len() {
                0 => return Some(path),
                1 => {
                    let child = self.get_node(node.children[0]);
                    path.push((child.item, child.count));
                    id = child.id;
                }
                _ => return None,
            }
        }
    }
}

/// A frequent itemset: sorted items plus the number of transactions
/// containing all of them.
#[derive(Clone, Hash, PartialEq, Eq, Debug)]
pub struct ItemSet {
    pub items: Vec<Item>,
    pub count: u32,
}

impl Ord for ItemSet {
    fn cmp(&self, other: &ItemSet) -> cmp::Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.items.cmp(&other.items))
            .then_with(|| self.count.cmp(&other.count))
    }
}

impl PartialOrd for ItemSet {
    fn partial_cmp(&self, other: &ItemSet) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl ItemSet {
    pub fn new(items: Vec<Item>, count: u32) -> ItemSet {
        ItemSet {
            items: items.into_iter().sorted().collect(),
            count,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn support(&self, num_transactions: u32) -> f64 {
        f64::from(self.count) / f64::from(num_transactions)
    }
}

/// Recursive FP-Growth over a tree. `path` is the itemset prefix this tree is
/// conditioned on, `path_count` its support. Emits every frequent extension
/// of `path`; the prefix itself is the caller's to emit.
///
/// Each item's conditional tree is independent of its siblings', so the
/// per-item loop fans out across the rayon pool.
pub fn fp_growth(fptree: &FPTree, min_count: u32, path: &[Item], path_count: u32) -> Vec<ItemSet> {
    // A tree with no forks needs no recursion: every frequent itemset in it
    // is a combination of the items on the one path.
    if let Some(chain) = fptree.single_path() {
        return mine_single_path(&chain, min_count, path, path_count);
    }

    // Get list of items in the tree which are above the minimum support
    // threshold.
    let items: Vec<Item> = fptree.item_count().items_with_count_at_least(min_count);

    items
        .par_iter()
        .flat_map(|item| -> Vec<ItemSet> {
            // The path to here plus this item must be above the minimum
            // support threshold.
            let mut itemset: Vec<Item> = Vec::from(path);
            let new_path_count = cmp::min(path_count, fptree.item_count().get(item));
            itemset.push(*item);

            let conditional_tree = fptree.construct_conditional_tree(*item);
            let mut result = fp_growth(&conditional_tree, min_count, &itemset, new_path_count);

            result.push(ItemSet::new(itemset, new_path_count));
            result
        })
        .collect()
}

/// Short-circuit for a branchless tree: emit all 2^k - 1 non-empty
/// combinations of the qualifying path items joined with the prefix. The
/// support of a combination is the smallest count among its nodes.
fn mine_single_path(
    chain: &[(Item, u32)],
    min_count: u32,
    path: &[Item],
    path_count: u32,
) -> Vec<ItemSet> {
    // Counts only decrease down a single path, so the qualifying items are a
    // prefix of the chain, and every combination of them is frequent.
    let qualifying: Vec<(Item, u32)> = chain
        .iter()
        .take_while(|&&(_, count)| count >= min_count)
        .cloned()
        .collect();

    let mut itemsets = vec![];
    for combination in qualifying.iter().powerset() {
        if combination.is_empty() {
            continue;
        }
        let count = combination
            .iter()
            .map(|&&(_, count)| count)
            .min()
            .unwrap_or(path_count);
        let mut items: Vec<Item> = Vec::from(path);
        items.extend(combination.iter().map(|&&(item, _)| item));
        itemsets.push(ItemSet::new(items, cmp::min(count, path_count)));
    }
    itemsets
}
