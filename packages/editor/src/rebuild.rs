//! Path-copying primitives over the component forest.
//!
//! Every edit copies the sequences along the path from the root to the
//! edited sequence and reuses every other subtree by reference.

use pagecraft_model::Component;
use std::sync::Arc;

/// Copy the forest, applying `edit` to the children sequence of the node at
/// `path` (the root sequence when `path` is empty).
///
/// `path` must address an existing node; callers obtain it from
/// `tree::path_to` on the same forest.
pub(crate) fn rebuild_sequence<R>(
    seq: &[Arc<Component>],
    path: &[usize],
    edit: impl FnOnce(&mut Vec<Arc<Component>>) -> R,
) -> (Vec<Arc<Component>>, R) {
    let mut rebuilt = seq.to_vec();
    match path.split_first() {
        None => {
            let result = edit(&mut rebuilt);
            (rebuilt, result)
        }
        Some((&head, rest)) => {
            let node = &seq[head];
            let (children, result) = rebuild_sequence(node.children(), rest, edit);
            rebuilt[head] = Arc::new(node.with_children(children));
            (rebuilt, result)
        }
    }
}

/// Insert at `index`, clamped to the sequence length; append when absent
pub(crate) fn insert_at(seq: &mut Vec<Arc<Component>>, index: Option<usize>, node: Arc<Component>) {
    let at = index.map_or(seq.len(), |i| i.min(seq.len()));
    seq.insert(at, node);
}
