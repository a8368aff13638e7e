use std::collections::HashSet;

use proptest::prelude::*;
use tasks_lib::{
    FilterKind, ManualClock, MemoryBackend, RecordingReporter, Task, TaskStore, snapshot,
};

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Delete(usize),
    Toggle(usize),
    Tick(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-zA-Z ]{1,20}".prop_map(Op::Add),
        (0usize..16).prop_map(Op::Delete),
        (0usize..16).prop_map(Op::Toggle),
        (0u64..500).prop_map(Op::Tick),
    ]
}

fn store_with(backend: &MemoryBackend, clock: &ManualClock) -> TaskStore {
    let mut store =
        TaskStore::new(backend.clone(), RecordingReporter::new()).with_clock(clock.clone());
    store.load().unwrap();
    store
}

/// Apply `ops`, resolving index operands against the current list.
/// Indexes past the end address ids that do not exist.
fn apply(store: &mut TaskStore, clock: &ManualClock, ops: &[Op]) -> Vec<Task> {
    let mut created = Vec::new();
    for op in ops {
        match op {
            Op::Add(text) => {
                if let Ok(task) = store.add(text) {
                    created.push(task);
                }
            }
            Op::Delete(i) => {
                let id = store.tasks().get(*i).map_or(u64::MAX, |t| t.id);
                store.delete(id).unwrap();
            }
            Op::Toggle(i) => {
                let id = store.tasks().get(*i).map_or(u64::MAX, |t| t.id);
                store.toggle(id).unwrap();
            }
            Op::Tick(ms) => {
                clock.advance(*ms);
                store.poll_write();
            }
        }
    }
    created
}

proptest! {
    #[test]
    fn prop_roundtrip_after_flush(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let backend = MemoryBackend::new();
        let clock = ManualClock::new(10_000);
        let mut store = store_with(&backend, &clock);
        apply(&mut store, &clock, &ops);
        store.flush();

        let mut reopened = store_with(&backend, &clock);
        prop_assert_eq!(reopened.tasks(), store.tasks());
        prop_assert_eq!(reopened.load().unwrap(), store.tasks().to_vec());
    }

    #[test]
    fn prop_snapshot_roundtrip(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let backend = MemoryBackend::new();
        let clock = ManualClock::new(0);
        let mut store = store_with(&backend, &clock);
        apply(&mut store, &clock, &ops);

        let text = snapshot::encode(store.tasks()).unwrap();
        prop_assert_eq!(snapshot::decode(&text).unwrap(), store.tasks().to_vec());
    }

    #[test]
    fn prop_ids_unique(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let backend = MemoryBackend::new();
        let clock = ManualClock::new(5);
        let mut store = store_with(&backend, &clock);
        let created = apply(&mut store, &clock, &ops);

        let ids: HashSet<u64> = created.iter().map(|t| t.id).collect();
        prop_assert_eq!(ids.len(), created.len());
    }

    #[test]
    fn prop_filter_partition(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let backend = MemoryBackend::new();
        let clock = ManualClock::new(0);
        let mut store = store_with(&backend, &clock);
        apply(&mut store, &clock, &ops);

        let all: HashSet<u64> = store.filter(FilterKind::All).iter().map(|t| t.id).collect();
        let active: HashSet<u64> = store.filter(FilterKind::Active).iter().map(|t| t.id).collect();
        let done: HashSet<u64> = store.filter(FilterKind::Completed).iter().map(|t| t.id).collect();

        prop_assert!(active.is_disjoint(&done));
        let union: HashSet<u64> = active.union(&done).copied().collect();
        prop_assert_eq!(union, all);
    }

    #[test]
    fn prop_progress_bounds(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let backend = MemoryBackend::new();
        let clock = ManualClock::new(0);
        let mut store = store_with(&backend, &clock);
        apply(&mut store, &clock, &ops);

        let p = store.progress();
        prop_assert!(p.percentage <= 100);
        prop_assert_eq!(p.total, store.len());
        if store.is_empty() {
            prop_assert_eq!(p.percentage, 0);
        }
        let all_done = !store.is_empty() && store.tasks().iter().all(|t| t.completed);
        prop_assert_eq!(p.percentage == 100, all_done);
    }

    #[test]
    fn prop_toggle_twice_is_identity(ops in prop::collection::vec(op_strategy(), 1..30), pick in 0usize..16) {
        let backend = MemoryBackend::new();
        let clock = ManualClock::new(0);
        let mut store = store_with(&backend, &clock);
        apply(&mut store, &clock, &ops);

        let before = store.tasks().to_vec();
        if let Some(id) = before.get(pick).map(|t| t.id) {
            store.toggle(id).unwrap();
            store.toggle(id).unwrap();
        }
        prop_assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn prop_delete_missing_changes_nothing(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let backend = MemoryBackend::new();
        let clock = ManualClock::new(0);
        let mut store = store_with(&backend, &clock);
        apply(&mut store, &clock, &ops);
        store.flush();

        let before = store.tasks().to_vec();
        let persisted = backend.peek("tasks");
        prop_assert!(!store.delete(u64::MAX).unwrap());
        store.flush();
        prop_assert_eq!(store.tasks(), before.as_slice());
        prop_assert_eq!(backend.peek("tasks"), persisted);
    }
}
