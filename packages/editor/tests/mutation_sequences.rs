//! Longer editing sessions: many mutations, snapshots and integrity

use pagecraft_editor::{EditorState, EditorStore, Mutation, MutationOutcome};
use pagecraft_model::{tree, ComponentKind, DragItem, IdGenerator};
use std::sync::Arc;

#[test]
fn test_snapshots_survive_later_mutations() {
    let mut store = EditorStore::with_starter_page(IdGenerator::from_seed("seq".to_string()));
    let snapshot: EditorState = store.state().clone();

    let text_id = store.components()[0].children()[0].children()[0].id.clone();
    store.move_component(text_id, None, None).unwrap();

    assert_eq!(tree::count(&snapshot.components), 3);
    assert_eq!(snapshot.components.len(), 1);
    assert_eq!(store.components().len(), 2);
    assert!(tree::check_integrity(&snapshot.components).is_empty());
}

#[test]
fn test_building_a_page_keeps_integrity() -> anyhow::Result<()> {
    let mut store = EditorStore::new(IdGenerator::from_seed("seq".to_string()));
    let mut containers = Vec::new();

    for round in 0..5 {
        let parent = containers.last().cloned();
        let result = store.add_component(
            DragItem::new_component(ComponentKind::Container),
            parent,
            Some(round),
        )?;
        if let MutationOutcome::Added(id) = result.outcome {
            containers.push(id);
        }

        store.add_component(
            DragItem::new_component(ComponentKind::TextBlock),
            containers.last().cloned(),
            None,
        )?;
    }

    assert_eq!(tree::count(store.components()), 10);
    assert!(tree::check_integrity(store.components()).is_empty());

    // Hoist the deepest container to the root
    let deepest = containers[4].clone();
    store.move_component(deepest.clone(), None, Some(0))?;
    assert_eq!(store.components()[0].id, deepest);
    assert_eq!(store.components()[0].children().len(), 1);
    assert!(tree::check_integrity(store.components()).is_empty());

    // Moving the outermost container into the hoisted one is fine
    let outer = containers[0].clone();
    store.move_component(outer.clone(), Some(deepest.clone()), None)?;
    assert_eq!(store.components().len(), 1);
    assert_eq!(tree::count(store.components()), 10);
    assert!(tree::check_integrity(store.components()).is_empty());

    // ...but the hoisted one cannot now go back under its new descendant
    assert!(store
        .move_component(deepest, Some(containers[2].clone()), None)
        .is_err());

    Ok(())
}

#[test]
fn test_replaying_serialized_mutations() {
    let script = r#"[
        { "type": "addComponent", "item": { "type": "SECTION", "isNew": true } },
        { "type": "addComponent", "item": { "type": "IMAGE", "isNew": true }, "index": 0 },
        { "type": "setPageTitle", "title": "Landing" },
        { "type": "setCurrentDevice", "device": "TABLET" },
        { "type": "selectComponent", "componentId": null }
    ]"#;
    let mutations: Vec<Mutation> = serde_json::from_str(script).unwrap();

    let mut store = EditorStore::new(IdGenerator::from_seed("seq".to_string()));
    for mutation in mutations {
        store.apply(mutation).unwrap();
    }

    let kinds: Vec<_> = store.components().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, vec![Some(ComponentKind::Image), Some(ComponentKind::Section)]);
    assert_eq!(store.state().page.title, "Landing");
    assert_eq!(store.version(), 5);
}

#[test]
fn test_unchanged_roots_are_shared_across_versions() {
    let mut store = EditorStore::new(IdGenerator::from_seed("seq".to_string()));
    for _ in 0..3 {
        store
            .add_component(DragItem::new_component(ComponentKind::Section), None, None)
            .unwrap();
    }
    let before = store.components().to_vec();
    let middle = before[1].id.clone();

    store
        .add_component(DragItem::new_component(ComponentKind::Image), Some(middle), None)
        .unwrap();

    let after = store.components();
    assert!(Arc::ptr_eq(&before[0], &after[0]));
    assert!(!Arc::ptr_eq(&before[1], &after[1]));
    assert!(Arc::ptr_eq(&before[2], &after[2]));
}
