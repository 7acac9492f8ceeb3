//! # Editor State
//!
//! The whole editing state as one value: the component forest, the current
//! selection, the active device preset and the page metadata.
//!
//! Operations never modify a state in place. Each returns a new state (or
//! reports that nothing matched), and the new forest shares every subtree
//! that the operation did not touch with the old one.

use pagecraft_model::{
    tree, Component, ComponentId, ComponentKind, DeviceType, DragItem, IdGenerator, PageMeta,
    Props, PropsPatch, TextAlign, TextBlockProps,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::mutations::MutationError;
use crate::rebuild::{insert_at, rebuild_sequence};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorState {
    pub components: Vec<Arc<Component>>,
    pub selected_component_id: Option<ComponentId>,
    pub current_device: DeviceType,
    pub page: PageMeta,
}

/// Result of an operation on the state
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The operation produced a new state
    Applied {
        state: EditorState,
        /// Id of the component the operation created, if any
        created: Option<ComponentId>,
    },
    /// The referenced component does not exist; the state is unchanged
    NoMatch,
}

impl Transition {
    fn applied(state: EditorState) -> Self {
        Transition::Applied {
            state,
            created: None,
        }
    }
}

impl EditorState {
    /// State seeded with a welcome section, container and text block
    pub fn starter(ids: &mut IdGenerator) -> Self {
        let section_id = ids.new_id();
        let container_id = ids.new_id();
        let text_id = ids.new_id();

        let welcome = Component::with_props(
            text_id,
            Props::TextBlock(TextBlockProps {
                text: "Welcome to the Editor!".to_string(),
                font_size: "24px".to_string(),
                color: "#333".to_string(),
                text_align: TextAlign::Center,
                ..Default::default()
            }),
            None,
        );

        let section = Component::new(section_id, ComponentKind::Section, None).adopt(
            Component::new(container_id, ComponentKind::Container, None).adopt(welcome),
        );

        Self {
            components: vec![Arc::new(section)],
            ..Self::default()
        }
    }

    /// Load a forest from its JSON wire shape
    pub fn from_components_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            components: serde_json::from_str(json)?,
            ..Self::default()
        })
    }

    pub fn find(&self, id: &ComponentId) -> Option<&Arc<Component>> {
        tree::find(&self.components, id)
    }

    pub fn selected(&self) -> Option<&Arc<Component>> {
        self.selected_component_id
            .as_ref()
            .and_then(|id| self.find(id))
    }

    pub fn component_count(&self) -> usize {
        tree::count(&self.components)
    }

    fn with_components(&self, components: Vec<Arc<Component>>) -> Self {
        Self {
            components,
            ..self.clone()
        }
    }

    /// Create a component from `item` and insert it under `parent_id` (the
    /// root sequence when `None`) at `index`, appending when absent.
    pub fn add_component(
        &self,
        item: &DragItem,
        parent_id: Option<&ComponentId>,
        index: Option<usize>,
        ids: &mut IdGenerator,
    ) -> Result<Transition, MutationError> {
        let parent_path = match parent_id {
            None => Vec::new(),
            Some(parent_id) => {
                let Some(path) = tree::path_to(&self.components, parent_id) else {
                    return Ok(Transition::NoMatch);
                };
                let accepts = tree::get(&self.components, &path)
                    .map_or(false, |parent| parent.accepts_children());
                if !accepts {
                    return Err(MutationError::NotAContainer(parent_id.clone()));
                }
                path
            }
        };

        // Loaded pages may already hold ids from this generator's sequence
        let id = loop {
            let id = ids.new_id();
            if tree::find(&self.components, &id).is_none() {
                break id;
            }
        };
        let node = Arc::new(Component::new(id.clone(), item.kind, parent_id.cloned()));
        let (components, ()) =
            rebuild_sequence(&self.components, &parent_path, |seq| insert_at(seq, index, node));

        Ok(Transition::Applied {
            state: self.with_components(components),
            created: Some(id),
        })
    }

    /// Detach `dragged_id` from wherever it sits and reattach it under
    /// `target_parent_id` (the root sequence when `None`) at `new_index`.
    ///
    /// A missing dragged node or target is a no-match and nothing is
    /// detached. Moving a node under itself or its own descendant is refused.
    pub fn move_component(
        &self,
        dragged_id: &ComponentId,
        target_parent_id: Option<&ComponentId>,
        new_index: Option<usize>,
    ) -> Result<Transition, MutationError> {
        let Some(source_path) = tree::path_to(&self.components, dragged_id) else {
            return Ok(Transition::NoMatch);
        };
        let Some(dragged) = tree::get(&self.components, &source_path) else {
            return Ok(Transition::NoMatch);
        };

        if let Some(target_id) = target_parent_id {
            if tree::contains_in_subtree(dragged, target_id) {
                return Err(MutationError::CycleDetected {
                    node_id: dragged_id.clone(),
                    target_id: target_id.clone(),
                });
            }
            match tree::find(&self.components, target_id) {
                None => return Ok(Transition::NoMatch),
                Some(target) if !target.accepts_children() => {
                    return Err(MutationError::NotAContainer(target_id.clone()))
                }
                Some(_) => {}
            }
        }

        let Some((&position, parent_path)) = source_path.split_last() else {
            return Ok(Transition::NoMatch);
        };
        let (detached, removed) =
            rebuild_sequence(&self.components, parent_path, |seq| seq.remove(position));
        let moved = Arc::new(removed.reparented(target_parent_id.cloned()));

        let target_path = match target_parent_id {
            None => Vec::new(),
            Some(target_id) => match tree::path_to(&detached, target_id) {
                Some(path) => path,
                None => return Ok(Transition::NoMatch),
            },
        };
        let (components, ()) =
            rebuild_sequence(&detached, &target_path, |seq| insert_at(seq, new_index, moved));

        Ok(Transition::applied(self.with_components(components)))
    }

    /// Shallow-merge `patch` into the props of `component_id`
    pub fn update_component_props(
        &self,
        component_id: &ComponentId,
        patch: &PropsPatch,
    ) -> Result<Transition, MutationError> {
        let Some(path) = tree::path_to(&self.components, component_id) else {
            return Ok(Transition::NoMatch);
        };
        let (Some(node), Some((&position, parent_path))) =
            (tree::get(&self.components, &path), path.split_last())
        else {
            return Ok(Transition::NoMatch);
        };

        let props = node
            .props
            .merge(patch)
            .map_err(|source| MutationError::InvalidProps {
                component_id: component_id.clone(),
                source,
            })?;
        let updated = Arc::new(node.with_replaced_props(props));

        let (components, ()) = rebuild_sequence(&self.components, parent_path, |seq| {
            seq[position] = updated;
        });

        Ok(Transition::applied(self.with_components(components)))
    }

    pub fn select_component(&self, component_id: Option<ComponentId>) -> Transition {
        Transition::applied(Self {
            selected_component_id: component_id,
            ..self.clone()
        })
    }

    pub fn set_current_device(&self, device: DeviceType) -> Transition {
        Transition::applied(Self {
            current_device: device,
            ..self.clone()
        })
    }

    pub fn set_page_title(&self, title: String) -> Transition {
        let mut page = self.page.clone();
        page.title = title;
        Transition::applied(Self {
            page,
            ..self.clone()
        })
    }

    pub fn set_page_description(&self, description: String) -> Transition {
        let mut page = self.page.clone();
        page.description = description;
        Transition::applied(Self {
            page,
            ..self.clone()
        })
    }
}
