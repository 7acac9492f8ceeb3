//! # Pagecraft Renderer
//!
//! Stateless projection of the component forest onto a virtual DOM, plus
//! diffing between renders and HTML serialization for previews.

pub mod diff;
pub mod html;
pub mod render;
pub mod vdom;

pub use diff::{apply_patches, diff_nodes, Patch, PatchError};
pub use html::{render_html_document, to_html, HtmlOptions};
pub use render::{RenderMode, Renderer, COMPONENT_ID_ATTR, COMPONENT_TYPE_ATTR};
pub use vdom::VNode;
