//! Tests for the list manager

use shoplist::{ListManager, Partition, PendingWrite, ShoppingList};

use crate::common::{self, MemoryStore, SequentialIdentity, bought, unbought};

fn item_id(list: &ShoppingList, text: &str) -> String {
    list.items.iter().find(|i| i.text == text).unwrap().id.clone()
}

// =============================================================================
// SCENARIO
// =============================================================================

#[test]
fn test_groceries_scenario() {
    let mut manager = common::manager();
    let list = manager.create_list(Some("Groceries")).unwrap();

    manager.add_item(&list.id, "Milk").unwrap();
    let after_eggs = manager.add_item(&list.id, "Eggs").unwrap();
    assert_eq!(unbought(&after_eggs), ["Eggs", "Milk"]);

    let milk = item_id(&after_eggs, "Milk");
    let after_toggle = manager.toggle_bought(&list.id, &milk).unwrap();
    assert_eq!(unbought(&after_toggle), ["Eggs"]);
    assert_eq!(bought(&after_toggle), ["Milk"]);

    let after_bread = manager.add_item(&list.id, "Bread").unwrap();
    assert_eq!(unbought(&after_bread), ["Bread", "Eggs"]);
    assert_eq!(bought(&after_bread), ["Milk"]);

    // Durable copy matches what the caller got back
    assert_eq!(manager.store().document(&list.id).unwrap(), after_bread);
}

// =============================================================================
// CREATE / RENAME / DELETE
// =============================================================================

#[test]
fn test_create_list_is_persisted_and_first() {
    let mut manager = common::manager();
    let older = manager.create_list(Some("Hardware")).unwrap();
    let newer = manager.create_list(None).unwrap();

    assert_eq!(manager.first().unwrap().id, newer.id);
    assert_eq!(manager.lists()[1].id, older.id);
    assert!(newer.items.is_empty());
    assert!(manager.store().document(&newer.id).is_some());
}

#[test]
fn test_default_name_uses_prefix() {
    let mut manager = common::manager().with_name_prefix("Ny liste");
    manager.create_list(None).unwrap();
    let second = manager.create_list(Some("")).unwrap();
    assert_eq!(second.name, "Ny liste 2");
}

#[test]
fn test_rename_trims_and_keeps_items() {
    let mut manager = common::manager();
    let list = manager.create_list(Some("Groceries")).unwrap();
    let with_item = manager.add_item(&list.id, "Milk").unwrap();

    let renamed = manager.rename_list(&list.id, "  Weekend  ").unwrap();
    assert_eq!(renamed.name, "Weekend");
    assert_eq!(renamed.items, with_item.items);
    assert_eq!(manager.store().document(&list.id).unwrap().name, "Weekend");
}

#[test]
fn test_blank_rename_is_silent_noop() {
    let mut manager = common::manager();
    let list = manager.create_list(Some("Groceries")).unwrap();
    let saves = manager.store().save_count();

    let same = manager.rename_list(&list.id, "   ").unwrap();
    assert_eq!(same.name, "Groceries");
    assert_eq!(manager.store().save_count(), saves);
}

#[test]
fn test_delete_removes_list_and_document() {
    let mut manager = common::manager();
    let keep = manager.create_list(Some("Keep")).unwrap();
    let gone = manager.create_list(Some("Gone")).unwrap();

    manager.delete_list(&gone.id).unwrap();

    assert!(manager.get(&gone.id).is_none());
    assert!(manager.store().document(&gone.id).is_none());
    // Remaining working set lets the caller pick a new active list
    assert_eq!(manager.first().unwrap().id, keep.id);
    assert!(manager.delete_list(&gone.id).unwrap_err().is_not_found());
}

// =============================================================================
// ITEMS
// =============================================================================

#[test]
fn test_add_item_fields() {
    let mut manager = common::manager();
    let list = manager.create_list(Some("Groceries")).unwrap();

    let updated = manager.add_item(&list.id, "  Milk \n").unwrap();
    let item = &updated.items[0];
    assert_eq!(item.text, "Milk");
    assert!(!item.bought);
    assert!(!item.id.is_empty());
    assert_ne!(item.id, list.id);
}

#[test]
fn test_add_goes_to_head_of_unbought_even_with_bought_items() {
    let mut manager = common::manager();
    let list = manager.create_list(None).unwrap();
    let l = manager.add_item(&list.id, "A").unwrap();
    manager.toggle_bought(&list.id, &item_id(&l, "A")).unwrap();

    let updated = manager.add_item(&list.id, "B").unwrap();
    assert_eq!(unbought(&updated), ["B"]);
    assert_eq!(bought(&updated), ["A"]);
    assert!(updated.is_partitioned());
}

#[test]
fn test_blank_add_is_silent_noop() {
    let mut manager = common::manager();
    let list = manager.create_list(None).unwrap();
    let saves = manager.store().save_count();

    let same = manager.add_item(&list.id, " \t").unwrap();
    assert!(same.items.is_empty());
    assert_eq!(manager.store().save_count(), saves);
}

#[test]
fn test_toggle_twice_returns_to_tail_of_unbought() {
    let mut manager = common::manager();
    let list = manager.create_list(None).unwrap();
    for text in ["C", "B", "A"] {
        manager.add_item(&list.id, text).unwrap();
    }
    let current = manager.get(&list.id).unwrap().clone();
    let a = item_id(&current, "A");

    manager.toggle_bought(&list.id, &a).unwrap();
    let back = manager.toggle_bought(&list.id, &a).unwrap();

    // A sits after every remaining unbought item once it comes back
    assert_eq!(unbought(&back), ["B", "C", "A"]);
}

#[test]
fn test_toggle_unknown_item_is_not_found() {
    let mut manager = common::manager();
    let list = manager.create_list(None).unwrap();
    let err = manager.toggle_bought(&list.id, "missing").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_reorder_unbought() {
    let mut manager = common::manager();
    let list = manager.create_list(None).unwrap();
    for text in ["C", "B", "A"] {
        manager.add_item(&list.id, text).unwrap();
    }
    let current = manager.get(&list.id).unwrap().clone();
    let order = [item_id(&current, "C"), item_id(&current, "A"), item_id(&current, "B")];

    let updated = manager.reorder_partition(&list.id, Partition::Unbought, &order).unwrap();
    assert_eq!(unbought(&updated), ["C", "A", "B"]);
    assert_eq!(manager.store().document(&list.id).unwrap(), updated);
}

#[test]
fn test_bad_reorder_leaves_state_unchanged() {
    let mut manager = common::manager();
    let list = manager.create_list(None).unwrap();
    for text in ["B", "A"] {
        manager.add_item(&list.id, text).unwrap();
    }
    let before = manager.get(&list.id).unwrap().clone();
    let saves = manager.store().save_count();

    let err = manager
        .reorder_partition(&list.id, Partition::Unbought, [item_id(&before, "A")])
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(manager.get(&list.id).unwrap(), &before);
    assert_eq!(manager.store().save_count(), saves);
}

// =============================================================================
// PERSISTENCE FAILURES
// =============================================================================

#[test]
fn test_failed_save_keeps_edit_and_retry_recovers() {
    let mut manager = common::manager();
    let list = manager.create_list(Some("Groceries")).unwrap();

    manager.store().set_failing(true);
    let err = manager.add_item(&list.id, "Milk").unwrap_err();
    assert!(err.is_persistence());

    // Edit kept in memory, durable copy is stale
    assert_eq!(unbought(manager.get(&list.id).unwrap()), ["Milk"]);
    assert!(manager.store().document(&list.id).unwrap().items.is_empty());
    assert_eq!(manager.pending_writes().get(&list.id), Some(&PendingWrite::Save));

    // Still failing: retry surfaces the error and keeps the entry
    assert!(manager.retry_pending().unwrap_err().is_persistence());
    assert!(manager.has_pending_writes());

    manager.store().set_failing(false);
    manager.retry_pending().unwrap();
    assert!(!manager.has_pending_writes());
    assert_eq!(unbought(&manager.store().document(&list.id).unwrap()), ["Milk"]);
}

#[test]
fn test_later_save_supersedes_pending_write() {
    let mut manager = common::manager();
    let list = manager.create_list(None).unwrap();

    manager.store().set_failing(true);
    assert!(manager.add_item(&list.id, "Milk").is_err());
    manager.store().set_failing(false);
    let updated = manager.add_item(&list.id, "Eggs").unwrap();

    assert!(!manager.has_pending_writes());
    assert_eq!(manager.store().document(&list.id).unwrap(), updated);
    assert_eq!(unbought(&updated), ["Eggs", "Milk"]);
}

#[test]
fn test_open_seeds_from_store() {
    let lists = vec![ShoppingList::new("a", "First"), ShoppingList::new("b", "Second")];
    let manager = ListManager::open(MemoryStore::with_lists(lists), SequentialIdentity::new()).unwrap();

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.get("b").unwrap().name, "Second");
}

#[test]
fn test_reopen_keeps_newest_list_first() {
    let store = MemoryStore::new();
    let mut manager = ListManager::new(&store, SequentialIdentity::new(), Vec::new());
    for name in ["First", "Second", "Third"] {
        manager.create_list(Some(name)).unwrap();
    }

    let reopened = ListManager::open(&store, SequentialIdentity::new()).unwrap();
    let names: Vec<&str> = reopened.lists().iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Third", "Second", "First"]);
}
