use crate::item::Item;
use fnv::FnvHashMap;

/// Interns item names, assigning each distinct name a dense id starting at 1.
/// Id 0 is reserved for the tree root's null item.
pub struct Itemizer {
    next_item_id: u32,
    item_str_to_id: FnvHashMap<String, Item>,
    item_id_to_str: Vec<String>,
}

impl Itemizer {
    pub fn new() -> Itemizer {
        Itemizer {
            next_item_id: 1,
            item_str_to_id: FnvHashMap::default(),
            item_id_to_str: vec![],
        }
    }
    pub fn id_of(&mut self, item: &str) -> Item {
        if let Some(id) = self.item_str_to_id.get(item) {
            return *id;
        }
        let id = self.next_item_id;
        self.next_item_id += 1;
        self.item_str_to_id
            .insert(String::from(item), Item::with_id(id));
        self.item_id_to_str.push(String::from(item));
        assert_eq!(self.item_id_to_str.len(), id as usize);
        Item::with_id(id)
    }
    pub fn str_of(&self, id: Item) -> &str {
        &self.item_id_to_str[id.as_index() - 1]
    }
    pub fn to_id_vec(&mut self, names: &[&str]) -> Vec<Item> {
        names.iter().map(|name| self.id_of(name)).collect()
    }
    pub fn num_items(&self) -> usize {
        self.item_id_to_str.len()
    }
}

#[cfg(test)]
mod tests {
    use super::Itemizer;

    #[test]
    fn test_roundtrip() {
        let mut itemizer = Itemizer::new();
        let bread = itemizer.id_of("bread");
        let milk = itemizer.id_of("milk");
        assert_ne!(bread, milk);
        assert_eq!(itemizer.id_of("bread"), bread);
        assert_eq!(itemizer.str_of(bread), "bread");
        assert_eq!(itemizer.str_of(milk), "milk");
        assert_eq!(itemizer.num_items(), 2);
    }
}
