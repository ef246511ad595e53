use super::*;

#[test]
fn insert_and_get_roundtrip() {
    let mut arena = SlotArena::new();
    let a = arena.insert("a");
    let b = arena.insert("b");

    assert_eq!(arena.len(), 2);
    assert_eq!(arena.get(a), Some(&"a"));
    assert_eq!(arena.get(b), Some(&"b"));
    assert_ne!(a, b);
}

#[test]
fn removed_slot_is_reused_with_new_generation() {
    let mut arena = SlotArena::new();
    let first = arena.insert(1);
    assert_eq!(arena.remove(first), Some(1));
    assert!(arena.is_empty());

    let second = arena.insert(2);
    assert_eq!(second.index(), first.index());
    assert_ne!(second.generation(), first.generation());
    assert_eq!(arena.capacity(), 1);

    assert!(!arena.contains(first), "stale id must not alias the reused slot");
    assert_eq!(arena.get(first), None);
    assert_eq!(arena.remove(first), None);
    assert_eq!(arena.get(second), Some(&2));
}

#[test]
fn sweep_removes_from_the_middle_without_skipping_neighbours() {
    let mut arena = SlotArena::new();
    let ids: Vec<_> = (0..5).map(|value| arena.insert(value)).collect();

    let mut visited = Vec::new();
    let removed = arena.sweep(|_, value| {
        visited.push(*value);
        *value % 2 == 0
    });

    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    assert_eq!(removed, 2);
    assert_eq!(arena.len(), 3);
    assert!(arena.contains(ids[0]));
    assert!(!arena.contains(ids[1]));
    assert!(arena.contains(ids[2]));
    assert!(!arena.contains(ids[3]));
    assert!(arena.contains(ids[4]));
}

#[test]
fn sweep_skips_vacant_slots() {
    let mut arena = SlotArena::new();
    let a = arena.insert('a');
    let _b = arena.insert('b');
    arena.remove(a);

    let mut visited = Vec::new();
    arena.sweep(|_, value| {
        visited.push(*value);
        true
    });
    assert_eq!(visited, vec!['b']);
}

#[test]
fn sweep_can_mutate_entries() {
    let mut arena = SlotArena::new();
    let id = arena.insert(10);
    arena.sweep(|_, value| {
        *value += 1;
        true
    });
    assert_eq!(arena.get(id), Some(&11));
}

#[test]
fn iter_reports_live_entries_only() {
    let mut arena = SlotArena::new();
    let a = arena.insert(1);
    let b = arena.insert(2);
    arena.remove(a);

    let live: Vec<_> = arena.iter().collect();
    assert_eq!(live, vec![(b, &2)]);
}

#[test]
fn clear_invalidates_every_id() {
    let mut arena = SlotArena::with_capacity(4);
    let a = arena.insert(1);
    let b = arena.insert(2);
    arena.clear();

    assert!(arena.is_empty());
    assert!(!arena.contains(a));
    assert!(!arena.contains(b));

    let c = arena.insert(3);
    assert_eq!(arena.get(c), Some(&3));
    assert_eq!(arena.len(), 1);
}
