//! # Component Renderer
//!
//! Projects each component, by kind, onto a virtual element and recurses
//! into its children. The renderer owns no state; the same forest renders
//! identically every time.
//!
//! Unknown type tags never abort a render: they produce a visible marker
//! naming the tag, and a warning is logged.

use pagecraft_model::{
    Component, ContainerProps, GridProps, ImageProps, Props, SectionProps, TextBlockProps,
    MAX_GRID_COLUMNS,
};
use std::sync::Arc;
use tracing::warn;

use crate::VNode;

pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150?text=Placeholder+Image";
pub const COMPONENT_ID_ATTR: &str = "data-component-id";
pub const COMPONENT_TYPE_ATTR: &str = "data-component-type";

/// Where the rendered tree is going to be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Inside the editing canvas: layout outlines are drawn
    #[default]
    Editor,
    /// Read-only preview without editing chrome
    Preview,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    mode: RenderMode,
}

impl Renderer {
    pub fn new(mode: RenderMode) -> Self {
        Self { mode }
    }

    pub fn editor() -> Self {
        Self::new(RenderMode::Editor)
    }

    pub fn preview() -> Self {
        Self::new(RenderMode::Preview)
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    /// Render a root sequence in order
    pub fn render_forest(&self, components: &[Arc<Component>]) -> Vec<VNode> {
        components.iter().map(|c| self.render(c)).collect()
    }

    /// Render one component and its subtree
    pub fn render(&self, component: &Component) -> VNode {
        let node = match &component.props {
            Props::TextBlock(props) => self.text_block(props),
            Props::Image(props) => self.image(props),
            Props::Section(props) => self.section(props, self.render_children(component)),
            Props::Container(props) => self.container(props, self.render_children(component)),
            Props::Grid(props) => self.grid(props, self.render_children(component)),
            Props::Unknown { tag, .. } => {
                warn!(component_id = %component.id, type_tag = %tag, "Unknown component type");
                VNode::element("div")
                    .with_class("unknown-component")
                    .with_child(VNode::text(format!("Unknown component type: {}", tag)))
            }
        };

        node.with_key(component.id.as_str())
            .with_attr(COMPONENT_ID_ATTR, component.id.as_str())
            .with_attr(COMPONENT_TYPE_ATTR, component.type_tag())
    }

    fn render_children(&self, component: &Component) -> Vec<VNode> {
        self.render_forest(component.children())
    }

    fn outline(&self, node: VNode, border: &str) -> VNode {
        match self.mode {
            RenderMode::Editor => node.with_style("border", border),
            RenderMode::Preview => node,
        }
    }

    fn section(&self, props: &SectionProps, children: Vec<VNode>) -> VNode {
        let node = VNode::element("section")
            .with_style("width", "100%")
            .with_style("padding", or(&props.padding, "20px 0"))
            .with_style("background-color", or(&props.background_color, "transparent"))
            .with_style("min-height", "100px")
            .with_style("display", "flex")
            .with_style("flex-direction", "column")
            .with_style("align-items", "center");

        self.outline(node, "1px dashed #ccc")
            .with_children(or_placeholder(children, "Section: Drop content here"))
    }

    fn container(&self, props: &ContainerProps, children: Vec<VNode>) -> VNode {
        let node = VNode::element("div")
            .with_style("width", "100%")
            .with_style("max-width", or(&props.max_width, "1140px"))
            .with_style("margin", "0 auto")
            .with_style("padding", or(&props.padding, "15px"))
            .with_style("background-color", or(&props.background_color, "transparent"))
            .with_style("min-height", "80px")
            .with_style("display", "flex")
            .with_style("flex-direction", "column");

        self.outline(node, "1px dashed #ddd")
            .with_children(or_placeholder(children, "Container: Drop content here"))
    }

    fn grid(&self, props: &GridProps, children: Vec<VNode>) -> VNode {
        let columns = props.columns.filter(|c| *c > 0).unwrap_or(1).min(MAX_GRID_COLUMNS);
        let node = VNode::element("div")
            .with_style("display", "grid")
            .with_style(
                "grid-template-columns",
                format!("repeat({}, 1fr)", columns),
            )
            .with_style("gap", or(&props.gap, "15px"))
            .with_style("padding", or(&props.padding, "10px"))
            .with_style("background-color", or(&props.background_color, "transparent"))
            .with_style("min-height", "70px");
        let node = self.outline(node, "1px dashed #eee");

        let cells = if !children.is_empty() {
            children
        } else {
            match props.columns.map(|n| n.min(MAX_GRID_COLUMNS)) {
                Some(n) if n > 0 => (1..=n)
                    .map(|i| VNode::element("div").with_child(VNode::text(format!("Column {}", i))))
                    .collect(),
                _ => return node.with_child(VNode::text("Grid: Drop content or configure columns")),
            }
        };

        let cells = cells.into_iter().map(|cell| self.grid_cell(cell)).collect();
        node.with_children(cells)
    }

    /// Direct grid children act as cells
    fn grid_cell(&self, cell: VNode) -> VNode {
        let cell = cell
            .with_style("padding", "10px")
            .with_style("min-height", "50px")
            .with_style("display", "flex")
            .with_style("flex-direction", "column");
        self.outline(cell, "1px dotted #ccc")
    }

    fn text_block(&self, props: &TextBlockProps) -> VNode {
        VNode::element("p")
            .with_style("font-size", non_empty(&props.font_size, "16px"))
            .with_style("color", non_empty(&props.color, "#000000"))
            .with_style("text-align", props.text_align.as_css())
            .with_style("padding", "5px")
            .with_style("margin", "0")
            .with_style("white-space", "pre-wrap")
            .with_style("word-break", "break-word")
            .with_child(VNode::text(non_empty(&props.text, "Default Text Block")))
    }

    fn image(&self, props: &ImageProps) -> VNode {
        VNode::element("img")
            .with_attr("src", non_empty(&props.src, PLACEHOLDER_IMAGE))
            .with_attr("alt", non_empty(&props.alt, "Placeholder Image"))
            .with_style("width", or(&props.width, "100%"))
            .with_style("height", or(&props.height, "auto"))
            .with_style("display", "block")
            .with_style("object-fit", "cover")
            .with_style("padding", "5px")
    }
}

fn non_empty<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    non_empty(value.as_deref().unwrap_or(""), fallback)
}

fn or_placeholder(children: Vec<VNode>, placeholder: &str) -> Vec<VNode> {
    if children.is_empty() {
        vec![VNode::text(placeholder)]
    } else {
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{ComponentKind, PropsPatch};
    use serde_json::json;

    fn node(id: &str, kind: ComponentKind) -> Component {
        Component::new(id.into(), kind, None)
    }

    #[test]
    fn test_text_block_defaults() {
        let vnode = Renderer::editor().render(&node("t", ComponentKind::TextBlock));

        assert_eq!(vnode.tag(), Some("p"));
        assert_eq!(vnode.text_content(), "New Text Block");
        assert_eq!(vnode.style("font-size"), Some("16px"));
        assert_eq!(vnode.style("text-align"), Some("left"));
        assert_eq!(vnode.key(), Some("t"));
        assert_eq!(vnode.attr(COMPONENT_TYPE_ATTR), Some("TEXT_BLOCK"));
    }

    #[test]
    fn test_empty_text_falls_back() {
        let mut text = node("t", ComponentKind::TextBlock);
        let patch: PropsPatch = serde_json::from_value(json!({ "text": "" })).unwrap();
        text.props = text.props.merge(&patch).unwrap();

        let vnode = Renderer::editor().render(&text);
        assert_eq!(vnode.text_content(), "Default Text Block");
    }

    #[test]
    fn test_image_attributes() {
        let vnode = Renderer::editor().render(&node("i", ComponentKind::Image));
        assert_eq!(vnode.tag(), Some("img"));
        assert_eq!(vnode.attr("alt"), Some("New Image"));
        assert_eq!(vnode.style("width"), Some("150px"));
    }

    #[test]
    fn test_empty_containers_show_placeholders() {
        let renderer = Renderer::editor();
        assert_eq!(
            renderer.render(&node("s", ComponentKind::Section)).text_content(),
            "Section: Drop content here"
        );
        assert_eq!(
            renderer.render(&node("c", ComponentKind::Container)).text_content(),
            "Container: Drop content here"
        );
    }

    #[test]
    fn test_empty_grid_renders_column_cells() {
        let vnode = Renderer::editor().render(&node("g", ComponentKind::Grid));
        let cells = vnode.children();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text_content(), "Column 1");
        assert_eq!(cells[1].text_content(), "Column 2");
        assert_eq!(vnode.style("grid-template-columns"), Some("repeat(2, 1fr)"));
    }

    #[test]
    fn test_grid_without_columns() {
        let mut grid = node("g", ComponentKind::Grid);
        let patch: PropsPatch = serde_json::from_value(json!({ "columns": 0 })).unwrap();
        grid.props = grid.props.merge(&patch).unwrap();

        let vnode = Renderer::editor().render(&grid);
        assert_eq!(vnode.text_content(), "Grid: Drop content or configure columns");
        assert_eq!(vnode.style("grid-template-columns"), Some("repeat(1, 1fr)"));
    }

    #[test]
    fn test_oversized_grid_is_capped() {
        let grid = Component::with_props(
            "g".into(),
            Props::Grid(GridProps {
                columns: Some(u32::MAX),
                ..GridProps::default()
            }),
            None,
        );

        let vnode = Renderer::preview().render(&grid);
        assert_eq!(vnode.children().len(), MAX_GRID_COLUMNS as usize);
        assert_eq!(vnode.style("grid-template-columns"), Some("repeat(24, 1fr)"));
    }

    #[test]
    fn test_children_render_in_order() {
        let section = node("s", ComponentKind::Section)
            .adopt(node("a", ComponentKind::TextBlock))
            .adopt(node("b", ComponentKind::Image));

        let vnode = Renderer::editor().render(&section);
        let keys: Vec<_> = vnode.children().iter().filter_map(VNode::key).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_unknown_type_renders_marker() {
        let widget: Component = serde_json::from_value(json!({
            "id": "w", "type": "WIDGET", "props": {}
        }))
        .unwrap();

        let vnode = Renderer::editor().render(&widget);
        assert!(vnode.text_content().contains("WIDGET"));
        assert_eq!(vnode.attr(COMPONENT_TYPE_ATTR), Some("WIDGET"));
    }

    #[test]
    fn test_preview_mode_drops_outlines() {
        let section = node("s", ComponentKind::Section);
        assert!(Renderer::editor().render(&section).style("border").is_some());
        assert!(Renderer::preview().render(&section).style("border").is_none());
    }
}
