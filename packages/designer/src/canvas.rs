//! Root drop target of the editing surface.
//!
//! Nested components claim drops that land on them first. A drop reaching
//! the canvas after being claimed is ignored, so each gesture creates at
//! most one component.

use pagecraft_editor::Mutation;
use pagecraft_model::{DeviceType, DragItem, ItemType};
use pagecraft_renderer::VNode;

pub const EMPTY_CANVAS_MESSAGE: &str = "Drop components here to start building.";

/// Drag-and-drop state of the canvas
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    dragging: Option<DragItem>,
    is_over: bool,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_drag(&mut self, item: DragItem) {
        self.dragging = Some(item);
        self.is_over = false;
    }

    pub fn drag_over(&mut self, over: bool) {
        self.is_over = over;
    }

    /// Drag cancelled or finished outside any target
    pub fn end_drag(&mut self) {
        self.dragging = None;
        self.is_over = false;
    }

    pub fn dragging(&self) -> Option<&DragItem> {
        self.dragging.as_ref()
    }

    /// Whether the current drag payload is accepted here
    pub fn can_drop(&self) -> bool {
        self.dragging
            .as_ref()
            .map_or(false, |item| item.item_type() == ItemType::EditorComponent)
    }

    /// Highlight shown while an acceptable item hovers the canvas
    pub fn is_highlighted(&self) -> bool {
        self.is_over && self.can_drop()
    }

    /// Finish the drag on the canvas.
    ///
    /// Returns the mutation to commit, if any. `claimed` is true when a
    /// nested target already handled the drop.
    pub fn drop(&mut self, claimed: bool) -> Option<Mutation> {
        let item = self.dragging.take()?;
        self.is_over = false;

        if claimed || !self.accepts(&item) {
            return None;
        }

        Some(Mutation::AddComponent {
            item,
            parent_id: None,
            index: None,
        })
    }

    fn accepts(&self, item: &DragItem) -> bool {
        item.item_type() == ItemType::EditorComponent && item.is_new
    }

    /// Device frame wrapping the rendered forest
    pub fn render(&self, device: DeviceType, content: Vec<VNode>) -> VNode {
        let mut zone = VNode::element("div").with_class("canvas-drop-zone");
        if self.is_highlighted() {
            zone = zone.with_class("is-over");
        }
        if content.is_empty() {
            let message = VNode::element("p").with_child(VNode::text(EMPTY_CANVAS_MESSAGE));
            zone = zone.with_child(message);
        }

        VNode::element("main").with_class("canvas-area").with_child(
            VNode::element("div")
                .with_class("canvas-frame")
                .with_attr("data-device", device.to_string())
                .with_style("width", device.width().to_css())
                .with_style("max-width", "100%")
                .with_child(zone.with_children(content)),
        )
    }
}
