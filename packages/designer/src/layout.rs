use pagecraft_editor::EditorState;
use pagecraft_model::{ComponentKind, DeviceType};
use pagecraft_renderer::VNode;

use crate::canvas::Canvas;
use crate::palette::render_palette;
use crate::settings::render_settings;

pub const HEADER_TITLE: &str = "Website Builder";
pub const PREVIEW_PATH: &str = "/preview";
pub const PROPERTIES_HINT: &str = "Select a component to edit its properties.";

/// Everything the editor screen needs besides the state itself
pub struct LayoutInput<'a> {
    pub state: &'a EditorState,
    pub canvas: &'a Canvas,
    /// Already rendered component forest
    pub content: Vec<VNode>,
    pub dragging: Option<ComponentKind>,
}

/// Header, sidebar, canvas and properties panel
pub fn render_editor(input: LayoutInput<'_>) -> VNode {
    VNode::element("div")
        .with_class("editor")
        .with_child(render_header(input.state.current_device))
        .with_child(
            VNode::element("div")
                .with_class("main-content")
                .with_child(render_palette(input.dragging))
                .with_child(input.canvas.render(input.state.current_device, input.content))
                .with_child(render_properties(input.state)),
        )
}

pub fn render_header(active: DeviceType) -> VNode {
    VNode::element("header")
        .with_class("editor-header")
        .with_child(
            VNode::element("span")
                .with_class("header-title")
                .with_child(VNode::text(HEADER_TITLE)),
        )
        .with_child(
            VNode::element("div")
                .with_class("header-controls")
                .with_child(render_device_switcher(active))
                .with_child(
                    VNode::element("a")
                        .with_class("preview-button")
                        .with_attr("href", PREVIEW_PATH)
                        .with_attr("target", "_blank")
                        .with_attr("rel", "noopener noreferrer")
                        .with_child(VNode::text("Preview")),
                ),
        )
}

fn render_device_switcher(active: DeviceType) -> VNode {
    let buttons = DeviceType::ALL
        .iter()
        .map(|device| {
            let is_active = *device == active;
            let mut button = VNode::element("button")
                .with_class("device-button")
                .with_attr("data-device", device.to_string())
                .with_attr("title", format!("{} View", device.label()))
                .with_attr("aria-pressed", is_active.to_string())
                .with_child(VNode::text(device.label()));
            if is_active {
                button = button.with_class("active");
            }
            button
        })
        .collect();

    VNode::element("div")
        .with_class("device-switcher")
        .with_children(buttons)
}

fn render_properties(state: &EditorState) -> VNode {
    VNode::element("aside")
        .with_class("properties-panel")
        .with_child(render_settings(&state.page))
        .with_child(
            VNode::element("div")
                .with_class("properties-hint")
                .with_child(VNode::text(PROPERTIES_HINT)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_device_marked() {
        let header = render_header(DeviceType::Mobile);

        let mobile = header.find_by_attr("data-device", "Mobile").unwrap();
        assert_eq!(mobile.attr("class"), Some("device-button active"));
        assert_eq!(mobile.attr("aria-pressed"), Some("true"));

        let desktop = header.find_by_attr("data-device", "Desktop").unwrap();
        assert_eq!(desktop.attr("class"), Some("device-button"));
    }

    #[test]
    fn test_editor_screen_sections() {
        let state = EditorState::default();
        let canvas = Canvas::new();
        let screen = render_editor(LayoutInput {
            state: &state,
            canvas: &canvas,
            content: Vec::new(),
            dragging: None,
        });

        let text = screen.text_content();
        assert!(text.starts_with(HEADER_TITLE));
        assert!(text.contains("Components"));
        assert!(text.contains("Drop components here to start building."));
        assert!(text.contains("Page SEO Settings"));
        assert!(text.ends_with(PROPERTIES_HINT));
        assert!(screen.find_by_attr("href", PREVIEW_PATH).is_some());
    }
}
