//! # Component Tree Store
//!
//! Sole owner of the editor state. All changes go through [`EditorStore::apply`],
//! which swaps in the state produced by the mutation; snapshots handed out
//! earlier stay valid because states are never modified in place.
//!
//! ## Lifecycle
//!
//! ```text
//! intent → Mutation → apply → new EditorState → render
//! ```

use pagecraft_model::{
    tree, Component, ComponentId, DeviceType, DragItem, IdGenerator, PropsPatch,
};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{EditorError, EditorState, Mutation, MutationOutcome, MutationResult, Transition};

#[derive(Debug)]
pub struct EditorStore {
    state: EditorState,

    ids: IdGenerator,

    /// Increments on each applied mutation
    version: u64,
}

impl EditorStore {
    /// Empty page
    pub fn new(ids: IdGenerator) -> Self {
        Self {
            state: EditorState::default(),
            ids,
            version: 0,
        }
    }

    /// Page seeded with the welcome content
    pub fn with_starter_page(mut ids: IdGenerator) -> Self {
        let state = EditorState::starter(&mut ids);
        Self {
            state,
            ids,
            version: 0,
        }
    }

    /// Store over an existing state; the forest must be well formed
    pub fn from_state(state: EditorState, ids: IdGenerator) -> Result<Self, EditorError> {
        let issues = tree::check_integrity(&state.components);
        if !issues.is_empty() {
            return Err(EditorError::Integrity(issues));
        }

        Ok(Self {
            state,
            ids,
            version: 0,
        })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn components(&self) -> &[Arc<Component>] {
        &self.state.components
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply a mutation
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let transition = match mutation.apply(&self.state, &mut self.ids) {
            Ok(transition) => transition,
            Err(e) => {
                warn!(mutation = mutation.name(), error = %e, "Mutation refused");
                return Err(e.into());
            }
        };

        let outcome = match transition {
            Transition::Applied { state, created } => {
                self.state = state;
                self.version += 1;
                match created {
                    Some(id) => MutationOutcome::Added(id),
                    None => MutationOutcome::Applied,
                }
            }
            Transition::NoMatch => MutationOutcome::NoMatch,
        };

        debug!(
            mutation = mutation.name(),
            version = self.version,
            outcome = ?outcome,
            "Applied mutation"
        );

        Ok(MutationResult {
            version: self.version,
            outcome,
        })
    }

    pub fn add_component(
        &mut self,
        item: DragItem,
        parent_id: Option<ComponentId>,
        index: Option<usize>,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::AddComponent {
            item,
            parent_id,
            index,
        })
    }

    pub fn move_component(
        &mut self,
        dragged_id: ComponentId,
        target_parent_id: Option<ComponentId>,
        new_index: Option<usize>,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::MoveComponent {
            dragged_id,
            target_parent_id,
            new_index,
        })
    }

    pub fn update_component_props(
        &mut self,
        component_id: ComponentId,
        props: PropsPatch,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::UpdateComponentProps {
            component_id,
            props,
        })
    }

    pub fn select_component(
        &mut self,
        component_id: Option<ComponentId>,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::SelectComponent { component_id })
    }

    pub fn set_current_device(
        &mut self,
        device: DeviceType,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::SetCurrentDevice { device })
    }

    pub fn set_page_title(
        &mut self,
        title: impl Into<String>,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::SetPageTitle {
            title: title.into(),
        })
    }

    pub fn set_page_description(
        &mut self,
        description: impl Into<String>,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::SetPageDescription {
            description: description.into(),
        })
    }
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new(IdGenerator::default())
    }
}
