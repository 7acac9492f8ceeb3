use pagecraft_model::{ComponentKind, DragItem};
use pagecraft_renderer::VNode;

/// Draggable entry in the component sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    pub kind: ComponentKind,
    pub label: &'static str,
}

/// Sidebar entries in display order
pub const PALETTE: [PaletteItem; 5] = [
    PaletteItem {
        kind: ComponentKind::Section,
        label: "Section",
    },
    PaletteItem {
        kind: ComponentKind::Container,
        label: "Container",
    },
    PaletteItem {
        kind: ComponentKind::Grid,
        label: "Grid",
    },
    PaletteItem {
        kind: ComponentKind::TextBlock,
        label: "Text Block",
    },
    PaletteItem {
        kind: ComponentKind::Image,
        label: "Image",
    },
];

pub const PALETTE_HEADING: &str = "Components";

impl PaletteItem {
    pub fn for_kind(kind: ComponentKind) -> Option<&'static PaletteItem> {
        PALETTE.iter().find(|item| item.kind == kind)
    }

    /// Payload handed to drop targets when this item is picked up
    pub fn drag_start(&self) -> DragItem {
        DragItem::new_component(self.kind)
    }

    pub fn render(&self, is_dragging: bool) -> VNode {
        let mut node = VNode::element("div")
            .with_class("palette-item")
            .with_attr("draggable", "true")
            .with_attr("data-palette-type", self.kind.as_tag())
            .with_child(VNode::text(self.label));
        if is_dragging {
            node = node.with_class("is-dragging");
        }
        node
    }
}

/// Sidebar with the heading and every palette item
pub fn render_palette(dragging: Option<ComponentKind>) -> VNode {
    VNode::element("aside")
        .with_class("sidebar")
        .with_child(VNode::element("h4").with_child(VNode::text(PALETTE_HEADING)))
        .with_children(
            PALETTE
                .iter()
                .map(|item| item.render(dragging == Some(item.kind)))
                .collect(),
        )
}
