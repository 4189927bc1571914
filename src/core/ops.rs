//! Record operations: add-or-update by name, delete by name, swap with a neighbour.
//!
//! Each store-backed operation is one reload-modify-save cycle through [`Store::with_list`];
//! an operation that changes nothing writes nothing.

use crate::core::record::ModelRecord;
use crate::core::store::{Store, StoreError};

/// Where [`upsert`] put the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Replaced the record with the same name at this index.
    Replaced(usize),
    /// Appended at this index (the new end of the list).
    Appended(usize),
}

/// Replace the record whose name matches in place, or append it.
pub fn upsert(models: &mut Vec<ModelRecord>, record: ModelRecord) -> Placement {
    match models.iter().position(|m| m.name == record.name) {
        Some(idx) => {
            models[idx] = record;
            Placement::Replaced(idx)
        }
        None => {
            models.push(record);
            Placement::Appended(models.len() - 1)
        }
    }
}

/// Remove every record with this name. Returns how many were removed.
pub fn remove_by_name(models: &mut Vec<ModelRecord>, name: &str) -> usize {
    let before = models.len();
    models.retain(|m| m.name != name);
    before - models.len()
}

/// Swap `index` with the entry above it. False at the top or out of range.
pub fn swap_up(models: &mut [ModelRecord], index: usize) -> bool {
    if index == 0 || index >= models.len() {
        return false;
    }
    models.swap(index, index - 1);
    true
}

/// Swap `index` with the entry below it. False at the bottom or out of range.
pub fn swap_down(models: &mut [ModelRecord], index: usize) -> bool {
    if index + 1 >= models.len() {
        return false;
    }
    models.swap(index, index + 1);
    true
}

pub fn add_or_update(store: &Store, record: ModelRecord) -> Result<Placement, StoreError> {
    let name = record.name.clone();
    let placement = store.with_list(|models| upsert(models, record))?;
    log::info!("Saved model '{}' ({:?})", name, placement);
    Ok(placement)
}

/// Deleting a name that is not present is not an error.
pub fn delete(store: &Store, name: &str) -> Result<usize, StoreError> {
    let removed = store.with_list(|models| remove_by_name(models, name))?;
    log::info!("Deleted {} model(s) named '{}'", removed, name);
    Ok(removed)
}

pub fn move_up(store: &Store, index: usize) -> Result<bool, StoreError> {
    store.with_list(|models| swap_up(models, index))
}

pub fn move_down(store: &Store, index: usize) -> Result<bool, StoreError> {
    store.with_list(|models| swap_down(models, index))
}

/// Look up a record by name in the current document.
pub fn find(store: &Store, name: &str) -> Option<ModelRecord> {
    store.load().into_iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ModelRecord {
        ModelRecord {
            model: name.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn names(models: &[ModelRecord]) -> Vec<&str> {
        models.iter().map(|m| m.name.as_str()).collect()
    }

    fn scratch() -> (tempfile::TempDir, Store) {
        let dir = tempfile::TempDir::new().unwrap();
        let store = Store::new(dir.path().join("models.json"));
        (dir, store)
    }

    #[test]
    fn upsert_appends_new_name() {
        let mut models = vec![record("a")];
        assert_eq!(upsert(&mut models, record("b")), Placement::Appended(1));
        assert_eq!(names(&models), vec!["a", "b"]);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut models = vec![record("a"), record("b"), record("c")];
        let mut b = record("b");
        b.model = "other".to_string();
        assert_eq!(upsert(&mut models, b), Placement::Replaced(1));
        assert_eq!(names(&models), vec!["a", "b", "c"]);
        assert_eq!(models[1].model, "other");
    }

    #[test]
    fn remove_by_name_is_idempotent() {
        let mut models = vec![record("a"), record("b")];
        assert_eq!(remove_by_name(&mut models, "a"), 1);
        assert_eq!(remove_by_name(&mut models, "a"), 0);
        assert_eq!(names(&models), vec!["b"]);
    }

    #[test]
    fn swap_at_boundaries_is_noop() {
        let mut models = vec![record("a"), record("b")];
        assert!(!swap_up(&mut models, 0));
        assert!(!swap_down(&mut models, 1));
        assert!(!swap_down(&mut models, 7));
        assert!(!swap_up(&mut models, 7));
        assert_eq!(names(&models), vec!["a", "b"]);
        assert!(!swap_down(&mut [], 0));
    }

    #[test]
    fn move_up_then_down_restores_order() {
        let mut models = vec![record("a"), record("b"), record("c")];
        assert!(swap_up(&mut models, 2));
        assert_eq!(names(&models), vec!["a", "c", "b"]);
        assert!(swap_down(&mut models, 1));
        assert_eq!(names(&models), vec!["a", "b", "c"]);
    }

    #[test]
    fn add_or_update_then_load_contains_exactly_one() {
        let (_dir, store) = scratch();
        let mut r = record("gpt-3.5-turbo");
        r.max_context = 16000;
        add_or_update(&store, r.clone()).unwrap();
        add_or_update(&store, r.clone()).unwrap();
        let loaded = store.load();
        assert_eq!(loaded, vec![r]);
    }

    #[test]
    fn add_second_then_move_up_reorders() {
        let (_dir, store) = scratch();
        add_or_update(&store, record("gpt-3.5-turbo")).unwrap();
        assert_eq!(
            add_or_update(&store, record("gpt-4")).unwrap(),
            Placement::Appended(1)
        );
        assert!(move_up(&store, 1).unwrap());
        assert_eq!(names(&store.load()), vec!["gpt-4", "gpt-3.5-turbo"]);
        assert!(!move_up(&store, 0).unwrap());
        assert!(!move_down(&store, 1).unwrap());
        assert_eq!(names(&store.load()), vec!["gpt-4", "gpt-3.5-turbo"]);
    }

    #[test]
    fn boundary_moves_leave_document_untouched() {
        let (_dir, store) = scratch();
        let compact = r#"{"llmModels":[{"name":"a"},{"name":"b"}]}"#;
        std::fs::write(store.path(), compact).unwrap();
        assert!(!move_up(&store, 0).unwrap());
        assert!(!move_down(&store, 1).unwrap());
        assert_eq!(delete(&store, "missing").unwrap(), 0);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), compact);
    }

    #[test]
    fn unreadable_document_survives_a_move() {
        let (_dir, store) = scratch();
        let mut bytes = br#"{"llmModels":[{"name":"a"},{"name":"b"}]}"#.to_vec();
        bytes.push(0xFF);
        std::fs::write(store.path(), &bytes).unwrap();
        assert!(move_up(&store, 0).is_err());
        assert_eq!(std::fs::read(store.path()).unwrap(), bytes);
    }

    #[test]
    fn delete_removes_and_tolerates_absent_name() {
        let (_dir, store) = scratch();
        add_or_update(&store, record("a")).unwrap();
        add_or_update(&store, record("b")).unwrap();
        assert_eq!(delete(&store, "a").unwrap(), 1);
        assert_eq!(delete(&store, "missing").unwrap(), 0);
        assert_eq!(names(&store.load()), vec!["b"]);
    }

    #[test]
    fn find_returns_current_record() {
        let (_dir, store) = scratch();
        add_or_update(&store, record("a")).unwrap();
        assert_eq!(find(&store, "a").map(|m| m.name), Some("a".to_string()));
        assert!(find(&store, "b").is_none());
    }
}
