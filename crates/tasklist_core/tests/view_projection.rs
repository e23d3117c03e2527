use tasklist_core::{TaskId, TaskStore, ViewProjection};

fn titles(groups: &[tasklist_core::TaskGroup<'_>]) -> Vec<String> {
    groups.iter().map(|group| group.task.title.clone()).collect()
}

/// Checks that both partition levels are exhaustive, exclusive and match
/// each task's current `completed` value.
fn assert_partition_consistent(store: &TaskStore) {
    let view = ViewProjection::project(store);

    let top_level: Vec<TaskId> = store.top_level().map(|task| task.id).collect();
    assert_eq!(
        view.incomplete_count() + view.completed_count(),
        top_level.len()
    );
    for id in top_level {
        let in_incomplete = view.incomplete_top_level.iter().any(|g| g.task.id == id);
        let in_completed = view.completed_top_level.iter().any(|g| g.task.id == id);
        assert_ne!(in_incomplete, in_completed, "task {id} must be in one group");
        assert_eq!(in_completed, store.get(id).unwrap().completed);
    }

    for group in view
        .incomplete_top_level
        .iter()
        .chain(view.completed_top_level.iter())
    {
        assert_eq!(group.child_count(), store.children_of(group.task.id).len());
        assert!(group.incomplete_children.iter().all(|task| !task.completed));
        assert!(group.completed_children.iter().all(|task| task.completed));
        assert_eq!(group.accepts_subtasks, !group.task.completed);
    }
}

#[test]
fn partition_stays_consistent_across_command_sequence() {
    let mut store = TaskStore::new();
    let mut parents = Vec::new();
    let mut all = Vec::new();

    for round in 0..12 {
        let (next, id) = store.try_add_task(&format!("task {round}")).unwrap();
        store = next;
        parents.push(id);
        all.push(id);
        assert_partition_consistent(&store);

        let parent = parents[round % parents.len()];
        let (next, child) = store
            .try_add_subtask(parent, &format!("sub {round}"))
            .unwrap();
        store = next;
        all.push(child);
        assert_partition_consistent(&store);

        let target = all[(round * 7) % all.len()];
        store = store.toggle_completion(target);
        assert_partition_consistent(&store);

        store = store.add_task("  ");
        assert_partition_consistent(&store);
    }
}

#[test]
fn groups_follow_insertion_order() {
    let (store, a) = TaskStore::new().try_add_task("A").unwrap();
    let (store, _b) = store.try_add_task("B").unwrap();
    let (store, c) = store.try_add_task("C").unwrap();
    let store = store.toggle_completion(a).toggle_completion(c);

    let view = ViewProjection::project(&store);
    assert_eq!(titles(&view.incomplete_top_level), ["B"]);
    assert_eq!(titles(&view.completed_top_level), ["A", "C"]);
}

#[test]
fn completed_subtask_moves_to_completed_children_only() {
    let (store, a) = TaskStore::new().try_add_task("A").unwrap();
    let (store, a1) = store.try_add_subtask(a, "A1").unwrap();
    let (store, _a2) = store.try_add_subtask(a, "A2").unwrap();
    let store = store.toggle_completion(a1);

    let view = ViewProjection::project(&store);
    assert_eq!(view.incomplete_count(), 1);
    let group = view.group(a).unwrap();
    assert_eq!(group.completed_children.len(), 1);
    assert_eq!(group.completed_children[0].title, "A1");
    assert_eq!(group.incomplete_children.len(), 1);
    assert_eq!(group.incomplete_children[0].title, "A2");
    assert!(!group.task.completed);
}

#[test]
fn subtasks_never_appear_as_top_level_groups() {
    let (store, a) = TaskStore::new().try_add_task("A").unwrap();
    let store = store.add_subtask(a, "A1");

    let view = ViewProjection::project(&store);
    assert!(!view.is_empty);
    assert_eq!(view.incomplete_count() + view.completed_count(), 1);
}

#[test]
fn projection_does_not_change_snapshot() {
    let (store, a) = TaskStore::new().try_add_task("A").unwrap();
    let store = store.add_subtask(a, "A1");
    let before = store.clone();

    let _ = ViewProjection::project(&store);
    assert_eq!(store, before);
}
