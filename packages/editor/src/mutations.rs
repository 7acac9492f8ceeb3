//! # Store Mutations
//!
//! Every change to the editor state is one of these operations.
//!
//! ## Mutation Semantics
//!
//! ### Lookups
//! - An id that names no component is a no-match: the state is returned
//!   unchanged and nothing is reported as an error
//!
//! ### AddComponent
//! - Generates a fresh id and type-specific default props
//! - Inserts at `index` (clamped) or appends; does not select the new node
//!
//! ### MoveComponent
//! - Detach then reattach, updating `parentId`
//! - Refused if the target is the node itself or one of its descendants
//! - A missing target leaves the node where it was
//!
//! ### UpdateComponentProps
//! - Shallow merge, keys in the patch overwrite

use pagecraft_model::{ComponentId, DeviceType, DragItem, IdGenerator, PropsError, PropsPatch};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::{EditorState, Transition};

/// Operations on the editor state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Create a component from a drag intent
    AddComponent {
        item: DragItem,
        parent_id: Option<ComponentId>,
        index: Option<usize>,
    },

    /// Relocate a component to a new parent (or the root sequence)
    MoveComponent {
        dragged_id: ComponentId,
        target_parent_id: Option<ComponentId>,
        new_index: Option<usize>,
    },

    /// Merge props into a component
    UpdateComponentProps {
        component_id: ComponentId,
        props: PropsPatch,
    },

    SelectComponent {
        component_id: Option<ComponentId>,
    },

    SetCurrentDevice {
        device: DeviceType,
    },

    SetPageTitle {
        title: String,
    },

    SetPageDescription {
        description: String,
    },
}

/// Requests that would break the tree invariant
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Cannot move {node_id} into its own subtree ({target_id})")]
    CycleDetected {
        node_id: ComponentId,
        target_id: ComponentId,
    },

    #[error("Component {0} cannot have children")]
    NotAContainer(ComponentId),

    #[error("Invalid props for {component_id}: {source}")]
    InvalidProps {
        component_id: ComponentId,
        source: PropsError,
    },
}

impl Mutation {
    /// Apply to `state`, producing the next state or a no-match
    pub fn apply(
        &self,
        state: &EditorState,
        ids: &mut IdGenerator,
    ) -> Result<Transition, MutationError> {
        match self {
            Mutation::AddComponent {
                item,
                parent_id,
                index,
            } => state.add_component(item, parent_id.as_ref(), *index, ids),

            Mutation::MoveComponent {
                dragged_id,
                target_parent_id,
                new_index,
            } => state.move_component(dragged_id, target_parent_id.as_ref(), *new_index),

            Mutation::UpdateComponentProps {
                component_id,
                props,
            } => state.update_component_props(component_id, props),

            Mutation::SelectComponent { component_id } => {
                Ok(state.select_component(component_id.clone()))
            }

            Mutation::SetCurrentDevice { device } => Ok(state.set_current_device(*device)),

            Mutation::SetPageTitle { title } => Ok(state.set_page_title(title.clone())),

            Mutation::SetPageDescription { description } => {
                Ok(state.set_page_description(description.clone()))
            }
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddComponent { .. } => "addComponent",
            Mutation::MoveComponent { .. } => "moveComponent",
            Mutation::UpdateComponentProps { .. } => "updateComponentProps",
            Mutation::SelectComponent { .. } => "selectComponent",
            Mutation::SetCurrentDevice { .. } => "setCurrentDevice",
            Mutation::SetPageTitle { .. } => "setPageTitle",
            Mutation::SetPageDescription { .. } => "setPageDescription",
        }
    }

    /// Whether this operation can change the component forest
    pub fn touches_tree(&self) -> bool {
        matches!(
            self,
            Mutation::AddComponent { .. }
                | Mutation::MoveComponent { .. }
                | Mutation::UpdateComponentProps { .. }
        )
    }
}

/// What applying a mutation did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "id", rename_all = "camelCase")]
pub enum MutationOutcome {
    /// A component was created with this id
    Added(ComponentId),
    Applied,
    /// Nothing matched the referenced id; state unchanged
    NoMatch,
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Version after the mutation
    pub version: u64,

    pub outcome: MutationOutcome,
}
