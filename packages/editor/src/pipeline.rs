//! # Render Pipeline
//!
//! Coordinates store mutation and re-rendering: Mutate → Render → Diff
//!
//! The render is cached together with the root sequence it came from.
//! Selection, device and page metadata mutations never touch the tree and
//! reuse the cached render outright; tree mutations that leave every root
//! pointer-identical (a no-match) reuse it too.

use pagecraft_model::Component;
use pagecraft_renderer::{diff_nodes, Patch, Renderer, VNode};
use std::sync::Arc;
use tracing::info;

use crate::{EditorError, EditorStore, Mutation, MutationOutcome};

struct CachedRender {
    components: Vec<Arc<Component>>,
    nodes: Vec<VNode>,
}

/// Manages the full edit → render pipeline
pub struct Pipeline {
    store: EditorStore,
    renderer: Renderer,
    last_render: Option<CachedRender>,
}

impl Pipeline {
    pub fn new(store: EditorStore, renderer: Renderer) -> Self {
        Self {
            store,
            renderer,
            last_render: None,
        }
    }

    /// Apply mutation and get incremental update
    pub fn apply_mutation(&mut self, mutation: Mutation) -> Result<PipelineResult, EditorError> {
        let touches_tree = mutation.touches_tree();
        let result = self.store.apply(mutation)?;

        let previous = self.last_render.take();
        let rerendered = previous.as_ref().map_or(true, |cached| {
            touches_tree && !same_roots(&cached.components, self.store.components())
        });

        let (nodes, patches) = match previous {
            Some(cached) if !rerendered => (cached.nodes, Vec::new()),
            Some(cached) => {
                let nodes = self.renderer.render_forest(self.store.components());
                let patches = diff_nodes(&cached.nodes, &nodes);
                (nodes, patches)
            }
            None => (self.renderer.render_forest(self.store.components()), Vec::new()),
        };

        if rerendered {
            info!(
                version = result.version,
                roots = nodes.len(),
                patches = patches.len(),
                "Rendered page"
            );
        }

        self.last_render = Some(CachedRender {
            components: self.store.components().to_vec(),
            nodes: nodes.clone(),
        });

        Ok(PipelineResult {
            version: result.version,
            outcome: result.outcome,
            nodes,
            patches,
            rerendered,
        })
    }

    /// Full render, refreshing the cache
    pub fn full_render(&mut self) -> Vec<VNode> {
        let nodes = self.renderer.render_forest(self.store.components());
        self.last_render = Some(CachedRender {
            components: self.store.components().to_vec(),
            nodes: nodes.clone(),
        });
        nodes
    }

    pub fn store(&self) -> &EditorStore {
        &self.store
    }

    /// Last rendered nodes (if any)
    pub fn last_render(&self) -> Option<&[VNode]> {
        self.last_render.as_ref().map(|cached| cached.nodes.as_slice())
    }

    /// Force a full render on the next mutation
    pub fn clear_cache(&mut self) {
        self.last_render = None;
    }
}

fn same_roots(a: &[Arc<Component>], b: &[Arc<Component>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Arc::ptr_eq(x, y))
}

/// Result of pipeline execution
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub version: u64,

    pub outcome: MutationOutcome,

    /// Full render of the forest after the mutation
    pub nodes: Vec<VNode>,

    /// Changes against the previous render
    pub patches: Vec<Patch>,

    /// False when the cached render was reused
    pub rerendered: bool,
}
