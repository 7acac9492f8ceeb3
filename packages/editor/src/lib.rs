//! # Pagecraft Editor
//!
//! Component tree store for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: component forest, props, intents     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: state value + mutations             │
//! │  - add / move / update props                │
//! │  - selection, device, page metadata         │
//! │  - no-match reported, never an error        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: forest → VDOM → patches / HTML    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{EditorStore, Mutation};
//! use pagecraft_model::{ComponentKind, DragItem, IdGenerator};
//!
//! let mut store = EditorStore::new(IdGenerator::fresh("session"));
//! store.add_component(DragItem::new_component(ComponentKind::TextBlock), None, None)?;
//! assert_eq!(store.components().len(), 1);
//! ```

mod errors;
mod mutations;
mod pipeline;
mod rebuild;
mod state;
mod store;

pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, MutationOutcome, MutationResult};
pub use pipeline::{Pipeline, PipelineResult};
pub use state::{EditorState, Transition};
pub use store::EditorStore;
