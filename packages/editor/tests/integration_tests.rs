//! Integration tests for editor crate

use pagecraft_editor::{EditorStore, Mutation, MutationOutcome, Pipeline};
use pagecraft_model::{ComponentKind, DeviceType, DragItem, IdGenerator};
use pagecraft_renderer::{apply_patches, Renderer, VNode};

#[test]
fn test_store_lifecycle() {
    let store = EditorStore::with_starter_page(IdGenerator::from_seed("it".to_string()));

    assert_eq!(store.version(), 0);
    assert_eq!(store.components().len(), 1);
    assert_eq!(store.state().current_device, DeviceType::Desktop);
}

#[test]
fn test_pipeline_patches_track_full_render() {
    let store = EditorStore::with_starter_page(IdGenerator::from_seed("it".to_string()));
    let mut pipeline = Pipeline::new(store, Renderer::editor());
    let mut client: Vec<VNode> = pipeline.full_render();

    let container_id = pipeline.store().components()[0].children()[0].id.clone();
    let steps = vec![
        Mutation::AddComponent {
            item: DragItem::new_component(ComponentKind::Grid),
            parent_id: Some(container_id.clone()),
            index: Some(0),
        },
        Mutation::AddComponent {
            item: DragItem::new_component(ComponentKind::Image),
            parent_id: None,
            index: None,
        },
        Mutation::SetPageTitle {
            title: "Preview".to_string(),
        },
    ];

    for step in steps {
        let result = pipeline.apply_mutation(step).unwrap();
        apply_patches(&mut client, &result.patches).unwrap();
        assert_eq!(client, result.nodes);
    }
}

#[test]
fn test_unknown_component_renders_through_pipeline() {
    let state = pagecraft_editor::EditorState::from_components_json(
        r#"[{ "id": "w", "type": "WIDGET", "props": {}, "parentId": null }]"#,
    )
    .unwrap();
    let store = EditorStore::from_state(state, IdGenerator::default()).unwrap();
    let mut pipeline = Pipeline::new(store, Renderer::preview());

    let nodes = pipeline.full_render();
    assert!(nodes[0].text_content().contains("WIDGET"));

    // the unknown node still takes part in moves
    let result = pipeline
        .apply_mutation(Mutation::MoveComponent {
            dragged_id: "w".into(),
            target_parent_id: None,
            new_index: Some(0),
        })
        .unwrap();
    assert_eq!(result.outcome, MutationOutcome::Applied);
}
