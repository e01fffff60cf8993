use crate::itemizer::Itemizer;

#[derive(Copy, Clone, Hash, PartialOrd, PartialEq, Eq, Ord, Debug)]
pub struct Item {
    id: u32,
}

impl Item {
    pub fn null() -> Item {
        Item { id: 0 }
    }
    pub fn with_id(id: u32) -> Item {
        Item { id }
    }
    pub fn as_index(&self) -> usize {
        self.id as usize
    }
    pub fn as_id(&self) -> u32 {
        self.id
    }
    pub fn is_null(&self) -> bool {
        self.id == 0
    }
    /// Canonical display form of an itemset: item names sorted
    /// lexicographically, space separated.
    pub fn item_vec_to_string(items: &[Item], itemizer: &Itemizer) -> String {
        let mut names: Vec<&str> = items.iter().map(|&item| itemizer.str_of(item)).collect();
        names.sort_unstable();
        names.join(" ")
    }
}
