use tracing::{debug, info, warn};

use super::error::DataStoreError;
use crate::model::{item::normalize_text, Filter, FilterCounts, Item, ItemId};

/// Ordered collection of items with single-item mutators.
///
/// Every mutator touches exactly one item; on error the collection is left
/// as it was. Unknown ids are always reported as [`DataStoreError::NotFound`].
pub trait ItemDataStore {
    fn add(&mut self, text: &str) -> Result<ItemId, DataStoreError>;
    fn toggle(&mut self, id: ItemId) -> Result<(), DataStoreError>;
    fn update(&mut self, id: ItemId, new_text: &str) -> Result<(), DataStoreError>;
    fn remove(&mut self, id: ItemId) -> Result<Item, DataStoreError>;
    fn get(&self, id: ItemId) -> Result<Item, DataStoreError>;
    fn view(&self, filter: Filter) -> Vec<Item>;
    fn counts(&self) -> FilterCounts;
}

#[derive(Debug, Default)]
pub struct ListStore {
    items: Vec<Item>,
    last_id: u64,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: ItemId) -> Result<usize, DataStoreError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(DataStoreError::NotFound(id))
    }

    fn next_id(&mut self) -> ItemId {
        self.last_id += 1;
        ItemId::new(self.last_id)
    }
}

impl ItemDataStore for ListStore {
    fn add(&mut self, text: &str) -> Result<ItemId, DataStoreError> {
        // validate before taking an id so rejected input does not consume one
        let text = normalize_text(text)?;
        let id = self.next_id();
        let item = Item::new(id, &text)?;
        self.items.push(item);
        info!(item_id = id.get(), "item added");
        Ok(id)
    }

    fn toggle(&mut self, id: ItemId) -> Result<(), DataStoreError> {
        let pos = self.position(id).map_err(|err| {
            warn!(item_id = id.get(), "toggle of unknown item");
            err
        })?;
        let item = &mut self.items[pos];
        item.toggle();
        debug!(item_id = id.get(), completed = item.completed, "item toggled");
        Ok(())
    }

    fn update(&mut self, id: ItemId, new_text: &str) -> Result<(), DataStoreError> {
        let text = normalize_text(new_text)?;
        let pos = self.position(id).map_err(|err| {
            warn!(item_id = id.get(), "update of unknown item");
            err
        })?;
        self.items[pos].set_text(&text)?;
        debug!(item_id = id.get(), "item updated");
        Ok(())
    }

    fn remove(&mut self, id: ItemId) -> Result<Item, DataStoreError> {
        let pos = self.position(id).map_err(|err| {
            warn!(item_id = id.get(), "removal of unknown item");
            err
        })?;
        let item = self.items.remove(pos);
        info!(item_id = id.get(), "item removed");
        Ok(item)
    }

    fn get(&self, id: ItemId) -> Result<Item, DataStoreError> {
        self.position(id).map(|pos| self.items[pos].clone())
    }

    fn view(&self, filter: Filter) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    fn counts(&self) -> FilterCounts {
        self.items.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::Rng;

    use super::*;
    use crate::model::error::ModelError;

    fn texts(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.text.as_str()).collect()
    }

    fn ids(items: &[Item]) -> Vec<ItemId> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_ids_are_distinct() {
        let mut rng = rand::thread_rng();
        for _round in 0..20 {
            let mut store = ListStore::new();
            let mut seen = HashSet::new();
            for n in 0..rng.gen_range(1..50) {
                let id = store.add(&format!("task {}", n)).unwrap();
                assert!(seen.insert(id), "id {} was issued twice", id);

                // removals must not free ids for reuse
                if rng.gen_bool(0.3) {
                    store.remove(id).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_add_rejects_blank_text() {
        // GIVEN
        let mut store = ListStore::new();
        store.add("Buy milk").unwrap();

        // WHEN
        let empty = store.add("");
        let blank = store.add("   ");

        // THEN
        assert_eq!(empty, Err(DataStoreError::Validation(ModelError::EmptyText)));
        assert_eq!(blank, Err(DataStoreError::Validation(ModelError::EmptyText)));
        assert_eq!(store.len(), 1, "rejected input does not change the store");

        // rejected input does not burn an id
        let next = store.add("Pay bills").unwrap();
        assert_eq!(next, ItemId::new(2));
    }

    #[test]
    fn test_add_stores_trimmed_text() {
        let mut store = ListStore::new();
        let id = store.add("  Walk the dog  ").unwrap();
        let item = store.get(id).unwrap();
        assert_eq!(item.text, "Walk the dog");
        assert!(!item.completed);
    }

    #[test]
    fn test_toggle() {
        // GIVEN
        let mut store = ListStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        let c = store.add("c").unwrap();
        let before_b = store.get(b).unwrap();
        let before_c = store.get(c).unwrap();

        // WHEN
        store.toggle(a).unwrap();

        // THEN
        assert!(store.get(a).unwrap().completed, "toggle once flips");
        assert_eq!(store.get(b).unwrap(), before_b, "other items are untouched");
        assert_eq!(store.get(c).unwrap(), before_c, "other items are untouched");
        assert_eq!(ids(&store.view(Filter::All)), vec![a, b, c]);

        // WHEN
        store.toggle(a).unwrap();

        // THEN
        assert!(!store.get(a).unwrap().completed, "toggle twice restores");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        // GIVEN
        let mut store = ListStore::new();
        let id = store.add("only").unwrap();
        let missing = ItemId::new(99);
        let snapshot = store.view(Filter::All);

        // THEN
        assert_eq!(store.toggle(missing), Err(DataStoreError::NotFound(missing)));
        assert_eq!(
            store.update(missing, "text"),
            Err(DataStoreError::NotFound(missing))
        );
        assert_eq!(store.remove(missing), Err(DataStoreError::NotFound(missing)));
        assert_eq!(store.get(missing), Err(DataStoreError::NotFound(missing)));
        assert_eq!(store.view(Filter::All), snapshot);
        assert!(store.get(id).is_ok());
    }

    #[test]
    fn test_update() {
        // GIVEN
        let mut store = ListStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        store.toggle(b).unwrap();

        // WHEN
        store.update(b, " bee ").unwrap();

        // THEN
        let item = store.get(b).unwrap();
        assert_eq!(item.text, "bee");
        assert!(item.completed, "update keeps the completed flag");
        assert_eq!(ids(&store.view(Filter::All)), vec![a, b], "update keeps position");

        // WHEN
        let res = store.update(b, "  ");

        // THEN
        assert_eq!(res, Err(DataStoreError::Validation(ModelError::EmptyText)));
        assert_eq!(store.get(b).unwrap().text, "bee");
    }

    #[test]
    fn test_blank_update_of_unknown_id_reports_validation() {
        let mut store = ListStore::new();
        let res = store.update(ItemId::new(5), "");
        assert_eq!(res, Err(DataStoreError::Validation(ModelError::EmptyText)));
    }

    #[test]
    fn test_remove() {
        // GIVEN
        let mut store = ListStore::new();
        let a = store.add("a").unwrap();
        let b = store.add("b").unwrap();
        let c = store.add("c").unwrap();
        store.toggle(b).unwrap();

        // WHEN
        let removed = store.remove(b).unwrap();

        // THEN
        assert_eq!(removed.id, b);
        assert_eq!(store.len(), 2);
        for filter in Filter::VARIANTS.iter() {
            assert!(
                !ids(&store.view(*filter)).contains(&b),
                "removed item still visible in {} view",
                filter
            );
        }
        assert_eq!(ids(&store.view(Filter::All)), vec![a, c]);
    }

    #[test]
    fn test_views_partition_all() {
        let mut rng = rand::thread_rng();
        let mut store = ListStore::new();
        let mut added = vec![];
        for n in 0..30 {
            added.push(store.add(&format!("item {}", n)).unwrap());
        }
        for id in added.iter() {
            if rng.gen_bool(0.5) {
                store.toggle(*id).unwrap();
            }
            if rng.gen_bool(0.2) {
                store.update(*id, &format!("edited {}", id)).unwrap();
            }
        }

        let all: HashSet<ItemId> = ids(&store.view(Filter::All)).into_iter().collect();
        let completed: HashSet<ItemId> =
            ids(&store.view(Filter::Completed)).into_iter().collect();
        let incomplete: HashSet<ItemId> =
            ids(&store.view(Filter::Incomplete)).into_iter().collect();

        assert!(completed.is_disjoint(&incomplete));
        assert_eq!(completed.union(&incomplete).cloned().collect::<HashSet<_>>(), all);

        // insertion order survives toggles and edits
        assert_eq!(ids(&store.view(Filter::All)), added);

        let counts = store.counts();
        assert_eq!(counts.all, all.len());
        assert_eq!(counts.completed, completed.len());
        assert_eq!(counts.incomplete, incomplete.len());
    }

    #[test]
    fn test_view_does_not_mutate() {
        let mut store = ListStore::new();
        let a = store.add("a").unwrap();
        store.toggle(a).unwrap();
        let first = store.view(Filter::Completed);
        let second = store.view(Filter::Completed);
        assert_eq!(first, second);
        assert_eq!(store.view(Filter::All).len(), 1);
    }

    #[test]
    fn test_shopping_scenario() {
        // GIVEN
        let mut store = ListStore::new();
        assert!(store.is_empty());

        // WHEN
        let milk = store.add("Buy milk").unwrap();
        store.add("Pay bills").unwrap();
        store.toggle(milk).unwrap();

        // THEN
        assert_eq!(texts(&store.view(Filter::Incomplete)), vec!["Pay bills"]);
        assert_eq!(texts(&store.view(Filter::Completed)), vec!["Buy milk"]);
        assert_eq!(
            texts(&store.view(Filter::All)),
            vec!["Buy milk", "Pay bills"]
        );
    }
}
