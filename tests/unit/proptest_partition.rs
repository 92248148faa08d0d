//! Property-based tests for list ordering
//!
//! Uses proptest to verify properties that should hold for all inputs.

use proptest::prelude::*;
use shoplist::{Item, Partition, ShoppingList};

use crate::common;

/// A list whose items are already partitioned, with ids `i0`, `i1`, ...
fn arb_list() -> impl Strategy<Value = ShoppingList> {
    prop::collection::vec(any::<bool>(), 0..12).prop_map(|flags| {
        let mut list = ShoppingList::new("L", "Prop");
        list.items = flags
            .iter()
            .enumerate()
            .map(|(n, bought)| Item {
                id: format!("i{n}"),
                text: format!("item {n}"),
                bought: *bought,
                created_at: i64::try_from(n).unwrap(),
            })
            .collect();
        list.repartitioned()
    })
}

fn ids_in(list: &ShoppingList, partition: Partition) -> Vec<String> {
    list.partition(partition).map(|i| i.id.clone()).collect()
}

proptest! {
    /// Adding items one by one lists them newest first
    #[test]
    fn adds_are_reverse_chronological(texts in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let mut manager = common::manager();
        let list = manager.create_list(None).unwrap();
        for text in &texts {
            manager.add_item(&list.id, text).unwrap();
        }

        let list = manager.get(&list.id).unwrap();
        let shown: Vec<&str> = list.unbought().map(|i| i.text.as_str()).collect();
        let expected: Vec<&str> = texts.iter().rev().map(String::as_str).collect();
        prop_assert_eq!(shown, expected);
        prop_assert!(list.items.windows(2).all(|w| w[0].created_at > w[1].created_at));
    }

    /// Toggling any item never puts a bought item ahead of an unbought one
    #[test]
    fn toggle_keeps_partition(list in arb_list(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!list.items.is_empty());
        let target = list.items[pick.index(list.items.len())].id.clone();

        let toggled = list.with_bought_toggled(&target).unwrap();
        prop_assert!(toggled.is_partitioned());
        prop_assert_eq!(toggled.items.len(), list.items.len());
        prop_assert_eq!(toggled.item(&target).unwrap().bought, !list.item(&target).unwrap().bought);
    }

    /// Toggling preserves relative order of the items that did not move
    #[test]
    fn toggle_preserves_relative_order(list in arb_list(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!list.items.is_empty());
        let target = list.items[pick.index(list.items.len())].id.clone();
        let toggled = list.with_bought_toggled(&target).unwrap();

        for partition in [Partition::Unbought, Partition::Bought] {
            let before: Vec<String> =
                ids_in(&list, partition).into_iter().filter(|id| *id != target).collect();
            let after: Vec<String> =
                ids_in(&toggled, partition).into_iter().filter(|id| *id != target).collect();
            prop_assert_eq!(before, after);
        }
    }

    /// Reordering one partition never disturbs the other
    #[test]
    fn reorder_leaves_other_partition(
        list in arb_list(),
        bought_side in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let partition = Partition::of(bought_side);
        let other = Partition::of(!bought_side);

        let mut order = ids_in(&list, partition);
        // Deterministic shuffle from the seed
        let len = order.len();
        for n in (1..len).rev() {
            let j = usize::try_from(seed.rotate_left(u32::try_from(n % 64).unwrap()) % (n as u64 + 1)).unwrap();
            order.swap(n, j);
        }

        let reordered = list.with_partition_reordered(partition, &order).unwrap();
        prop_assert_eq!(ids_in(&reordered, partition), order);
        prop_assert_eq!(ids_in(&reordered, other), ids_in(&list, other));
        prop_assert!(reordered.is_partitioned());
    }

    /// Dropping any id from the order is rejected
    #[test]
    fn reorder_rejects_missing_id(list in arb_list(), pick in any::<prop::sample::Index>()) {
        let mut order = ids_in(&list, Partition::Unbought);
        prop_assume!(!order.is_empty());
        order.remove(pick.index(order.len()));

        let err = list.with_partition_reordered(Partition::Unbought, &order).unwrap_err();
        prop_assert!(err.is_invalid_argument());
    }
}
