use serde::{Deserialize, Serialize};

use crate::{ComponentId, ComponentKind};

/// Drag payload categories understood by drop targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemType {
    /// A component being dragged from the palette or within the canvas
    EditorComponent,
    /// An existing canvas element being moved
    CanvasElement,
}

/// Transient intent produced by a drag source and consumed by a drop target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragItem {
    /// Existing component being dragged (absent for palette items)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default)]
    pub is_new: bool,
}

impl DragItem {
    /// Intent to create a new component of `kind`
    pub fn new_component(kind: ComponentKind) -> Self {
        Self {
            id: None,
            kind,
            is_new: true,
        }
    }

    /// Intent to relocate an existing component
    pub fn existing(id: ComponentId, kind: ComponentKind) -> Self {
        Self {
            id: Some(id),
            kind,
            is_new: false,
        }
    }

    pub fn item_type(&self) -> ItemType {
        if self.is_new {
            ItemType::EditorComponent
        } else {
            ItemType::CanvasElement
        }
    }
}
