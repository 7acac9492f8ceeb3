//! Store operations checked against the tree invariants

use pagecraft_editor::{EditorStore, MutationOutcome};
use pagecraft_model::{
    tree, ComponentId, ComponentKind, DeviceType, DragItem, IdGenerator, PropsPatch,
};
use serde_json::json;

fn store() -> EditorStore {
    EditorStore::new(IdGenerator::from_seed("test".to_string()))
}

fn added(outcome: MutationOutcome) -> ComponentId {
    match outcome {
        MutationOutcome::Added(id) => id,
        other => panic!("expected a created component, got {:?}", other),
    }
}

fn patch(value: serde_json::Value) -> PropsPatch {
    serde_json::from_value(value).unwrap()
}

fn ids(store: &EditorStore) -> Vec<String> {
    fn collect(components: &[std::sync::Arc<pagecraft_model::Component>], out: &mut Vec<String>) {
        for c in components {
            out.push(c.id.to_string());
            collect(c.children(), out);
        }
    }
    let mut out = Vec::new();
    collect(store.components(), &mut out);
    out
}

/// Section S containing an empty Container C, plus a root-level TextBlock T
fn section_container_text() -> (EditorStore, ComponentId, ComponentId, ComponentId) {
    let mut store = store();
    let s = added(
        store
            .add_component(DragItem::new_component(ComponentKind::Section), None, None)
            .unwrap()
            .outcome,
    );
    let c = added(
        store
            .add_component(DragItem::new_component(ComponentKind::Container), Some(s.clone()), None)
            .unwrap()
            .outcome,
    );
    let t = added(
        store
            .add_component(DragItem::new_component(ComponentKind::TextBlock), None, None)
            .unwrap()
            .outcome,
    );
    (store, s, c, t)
}

#[test]
fn test_add_text_block_to_empty_root() {
    let mut store = store();
    store
        .add_component(DragItem::new_component(ComponentKind::TextBlock), None, None)
        .unwrap();

    let roots = store.components();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].kind(), Some(ComponentKind::TextBlock));
    assert_eq!(
        serde_json::Value::Object(roots[0].props.to_map()),
        json!({
            "text": "New Text Block",
            "fontSize": "16px",
            "color": "#000000",
            "textAlign": "left"
        })
    );
    assert_eq!(store.state().selected_component_id, None);
}

#[test]
fn test_add_increases_count_by_one_under_existing_parent() {
    let (mut store, s, c, _) = section_container_text();

    for parent in [s, c] {
        let before = tree::count(store.components());
        let id = added(
            store
                .add_component(
                    DragItem::new_component(ComponentKind::Image),
                    Some(parent.clone()),
                    None,
                )
                .unwrap()
                .outcome,
        );

        assert_eq!(tree::count(store.components()), before + 1);
        let node = tree::find(store.components(), &id).unwrap();
        assert_eq!(node.parent_id, Some(parent));
    }
    assert!(tree::check_integrity(store.components()).is_empty());
}

#[test]
fn test_add_under_missing_parent_leaves_tree_identical() {
    let (mut store, ..) = section_container_text();
    let before = store.state().clone();

    let result = store
        .add_component(
            DragItem::new_component(ComponentKind::Grid),
            Some("does-not-exist".into()),
            Some(0),
        )
        .unwrap();

    assert_eq!(result.outcome, MutationOutcome::NoMatch);
    assert_eq!(store.state(), &before);
}

#[test]
fn test_move_text_into_container() {
    let (mut store, s, c, t) = section_container_text();

    store.move_component(t.clone(), Some(c.clone()), Some(0)).unwrap();

    let roots = store.components();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].id, s);

    let container = &roots[0].children()[0];
    assert_eq!(container.id, c);
    assert_eq!(container.children().len(), 1);
    assert_eq!(container.children()[0].id, t);
    assert_eq!(container.children()[0].parent_id, Some(c));
    assert!(tree::check_integrity(store.components()).is_empty());
}

#[test]
fn test_moved_node_appears_exactly_once() {
    let (mut store, s, _, t) = section_container_text();

    store.move_component(t.clone(), Some(s.clone()), None).unwrap();

    let all = ids(&store);
    assert_eq!(all.iter().filter(|id| **id == t.to_string()).count(), 1);

    // appended last when no index is given
    let section = tree::find(store.components(), &s).unwrap();
    assert_eq!(section.children().last().map(|c| c.id.clone()), Some(t.clone()));
    assert_eq!(tree::find(store.components(), &t).unwrap().parent_id, Some(s));
}

#[test]
fn test_move_back_to_root() {
    let (mut store, _, c, t) = section_container_text();
    store.move_component(t.clone(), Some(c), None).unwrap();

    store.move_component(t.clone(), None, Some(0)).unwrap();

    assert_eq!(store.components()[0].id, t);
    assert_eq!(store.components()[0].parent_id, None);
    assert!(tree::check_integrity(store.components()).is_empty());
}

#[test]
fn test_move_missing_node_is_no_match() {
    let (mut store, _, c, _) = section_container_text();
    let before = store.state().clone();

    let result = store.move_component("ghost".into(), Some(c), None).unwrap();

    assert_eq!(result.outcome, MutationOutcome::NoMatch);
    assert_eq!(store.state(), &before);
}

#[test]
fn test_update_props_merges() {
    let (mut store, _, _, t) = section_container_text();
    store
        .update_component_props(t.clone(), patch(json!({ "color": "blue", "fontSize": "12px" })))
        .unwrap();

    store
        .update_component_props(t.clone(), patch(json!({ "color": "red" })))
        .unwrap();

    let props = tree::find(store.components(), &t).unwrap().props.to_map();
    assert_eq!(props["color"], json!("red"));
    assert_eq!(props["fontSize"], json!("12px"));
}

#[test]
fn test_oversized_grid_columns_are_refused() {
    let mut store = store();
    let grid = added(
        store
            .add_component(DragItem::new_component(ComponentKind::Grid), None, None)
            .unwrap()
            .outcome,
    );
    let before = store.state().clone();

    let result = store.update_component_props(grid, patch(json!({ "columns": 4000000000u64 })));

    assert!(result.is_err());
    assert_eq!(store.state(), &before);
}

#[test]
fn test_update_props_on_missing_id_changes_nothing() {
    let (mut store, ..) = section_container_text();
    let before = store.state().clone();

    let result = store
        .update_component_props("ghost".into(), patch(json!({ "color": "red" })))
        .unwrap();

    assert_eq!(result.outcome, MutationOutcome::NoMatch);
    assert_eq!(store.state(), &before);
}

#[test]
fn test_select_null_is_idempotent() {
    let mut store = store();
    store.select_component(None).unwrap();
    let once = store.state().clone();
    store.select_component(None).unwrap();
    assert_eq!(store.state(), &once);
}

#[test]
fn test_device_switch_does_not_touch_tree() {
    let (mut store, ..) = section_container_text();
    let before = store.components().to_vec();

    store.set_current_device(DeviceType::Mobile).unwrap();

    assert_eq!(store.state().current_device.width().to_css(), "375px");
    assert!(before
        .iter()
        .zip(store.components())
        .all(|(a, b)| std::sync::Arc::ptr_eq(a, b)));
}

#[test]
fn test_page_metadata_has_no_length_limit() {
    let mut store = store();
    let long = "d".repeat(500);

    store.set_page_title("").unwrap();
    store.set_page_description(long.clone()).unwrap();

    assert_eq!(store.state().page.title, "");
    assert_eq!(store.state().page.description, long);
}
