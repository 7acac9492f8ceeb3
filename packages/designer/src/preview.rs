use std::sync::Arc;

use pagecraft_editor::EditorState;
use pagecraft_model::Component;
use pagecraft_renderer::{render_html_document, HtmlOptions, Renderer, VNode};

pub const EMPTY_PREVIEW_MESSAGE: &str =
    "The canvas is empty. Add components in the editor to see them here.";

/// Body of the preview page
pub fn render_preview(components: &[Arc<Component>]) -> Vec<VNode> {
    let mut body = Renderer::preview().render_forest(components);
    if body.is_empty() {
        body.push(
            VNode::element("div")
                .with_class("preview-empty")
                .with_style("text-align", "center")
                .with_style("padding", "50px")
                .with_style("font-size", "1.2em")
                .with_child(VNode::text(EMPTY_PREVIEW_MESSAGE)),
        );
    }

    vec![VNode::element("div")
        .with_class("preview")
        .with_style("width", "100%")
        .with_style("min-height", "100vh")
        .with_children(body)]
}

/// Standalone document for the preview route
pub fn preview_html(state: &EditorState, options: &HtmlOptions) -> String {
    render_html_document(
        &state.page.title,
        &state.page.description,
        &render_preview(&state.components),
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::IdGenerator;

    #[test]
    fn test_empty_preview_message() {
        let nodes = render_preview(&[]);
        assert_eq!(nodes[0].text_content(), EMPTY_PREVIEW_MESSAGE);
    }

    #[test]
    fn test_document_carries_page_meta() {
        let mut ids = IdGenerator::from_seed("p".to_string());
        let mut state = EditorState::starter(&mut ids);
        state.page.title = "Launch & Learn".to_string();

        let html = preview_html(&state, &HtmlOptions::default());
        assert!(html.contains("<title>Launch &amp; Learn</title>"));
        assert!(html.contains("This is a description of my awesome page."));
        assert!(html.contains("Welcome to the Editor!"));
        assert!(!html.contains(EMPTY_PREVIEW_MESSAGE));
    }
}
