//! Index-path diffing between two renders of the same page.
//!
//! Paths address nodes from the root sequence: `[2]` is the third root,
//! `[2, 0]` its first child. Removals are emitted last-index first so the
//! patch list can be applied in order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::VNode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Patch {
    CreateNode { path: Vec<u32>, node: VNode },
    RemoveNode { path: Vec<u32> },
    ReplaceNode { path: Vec<u32>, node: VNode },
    UpdateAttributes {
        path: Vec<u32>,
        attributes: BTreeMap<String, String>,
    },
    UpdateStyles {
        path: Vec<u32>,
        styles: BTreeMap<String, String>,
    },
    UpdateText { path: Vec<u32>, content: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatchError {
    #[error("No node at path {0:?}")]
    InvalidPath(Vec<u32>),

    #[error("Node at path {0:?} cannot take this patch")]
    Mismatch(Vec<u32>),
}

/// Diff two root sequences
pub fn diff_nodes(old: &[VNode], new: &[VNode]) -> Vec<Patch> {
    let mut patches = Vec::new();
    diff_sequence(old, new, &[], &mut patches);
    patches
}

fn diff_sequence(old: &[VNode], new: &[VNode], parent: &[u32], patches: &mut Vec<Patch>) {
    let shared = old.len().min(new.len());

    for i in 0..shared {
        diff_vnode(&old[i], &new[i], child_path(parent, i), patches);
    }

    for (i, node) in new.iter().enumerate().skip(shared) {
        patches.push(Patch::CreateNode {
            path: child_path(parent, i),
            node: node.clone(),
        });
    }

    for i in (shared..old.len()).rev() {
        patches.push(Patch::RemoveNode {
            path: child_path(parent, i),
        });
    }
}

fn diff_vnode(old: &VNode, new: &VNode, path: Vec<u32>, patches: &mut Vec<Patch>) {
    match (old, new) {
        (
            VNode::Element {
                tag: old_tag,
                attributes: old_attrs,
                styles: old_styles,
                children: old_children,
                key: old_key,
            },
            VNode::Element {
                tag: new_tag,
                attributes: new_attrs,
                styles: new_styles,
                children: new_children,
                key: new_key,
            },
        ) => {
            // Different tag or different component identity: replace
            if old_tag != new_tag || old_key != new_key {
                patches.push(Patch::ReplaceNode {
                    path,
                    node: new.clone(),
                });
                return;
            }

            if old_attrs != new_attrs {
                patches.push(Patch::UpdateAttributes {
                    path: path.clone(),
                    attributes: new_attrs.clone(),
                });
            }

            if old_styles != new_styles {
                patches.push(Patch::UpdateStyles {
                    path: path.clone(),
                    styles: new_styles.clone(),
                });
            }

            diff_sequence(old_children, new_children, &path, patches);
        }
        (VNode::Text { content: a }, VNode::Text { content: b }) => {
            if a != b {
                patches.push(Patch::UpdateText {
                    path,
                    content: b.clone(),
                });
            }
        }
        _ => {
            if old != new {
                patches.push(Patch::ReplaceNode {
                    path,
                    node: new.clone(),
                });
            }
        }
    }
}

fn child_path(parent: &[u32], index: usize) -> Vec<u32> {
    let mut path = parent.to_vec();
    path.push(index as u32);
    path
}

/// Apply patches produced by [`diff_nodes`] to a root sequence
pub fn apply_patches(nodes: &mut Vec<VNode>, patches: &[Patch]) -> Result<(), PatchError> {
    for patch in patches {
        match patch {
            Patch::CreateNode { path, node } => {
                let (index, siblings) = sequence_at(nodes, path)?;
                if index > siblings.len() {
                    return Err(PatchError::InvalidPath(path.clone()));
                }
                siblings.insert(index, node.clone());
            }
            Patch::RemoveNode { path } => {
                let (index, siblings) = sequence_at(nodes, path)?;
                if index >= siblings.len() {
                    return Err(PatchError::InvalidPath(path.clone()));
                }
                siblings.remove(index);
            }
            Patch::ReplaceNode { path, node } => {
                *node_at(nodes, path)? = node.clone();
            }
            Patch::UpdateAttributes { path, attributes } => match node_at(nodes, path)? {
                VNode::Element {
                    attributes: target,
                    ..
                } => *target = attributes.clone(),
                _ => return Err(PatchError::Mismatch(path.clone())),
            },
            Patch::UpdateStyles { path, styles } => match node_at(nodes, path)? {
                VNode::Element { styles: target, .. } => *target = styles.clone(),
                _ => return Err(PatchError::Mismatch(path.clone())),
            },
            Patch::UpdateText { path, content } => match node_at(nodes, path)? {
                VNode::Text { content: target } => *target = content.clone(),
                _ => return Err(PatchError::Mismatch(path.clone())),
            },
        }
    }
    Ok(())
}

/// Sibling sequence containing the node at `path`, plus its index there
fn sequence_at<'a>(
    nodes: &'a mut Vec<VNode>,
    path: &[u32],
) -> Result<(usize, &'a mut Vec<VNode>), PatchError> {
    let (last, parents) = path
        .split_last()
        .ok_or_else(|| PatchError::InvalidPath(path.to_vec()))?;

    let mut siblings = nodes;
    for &index in parents {
        siblings = match siblings.get_mut(index as usize) {
            Some(VNode::Element { children, .. }) => children,
            _ => return Err(PatchError::InvalidPath(path.to_vec())),
        };
    }
    Ok((*last as usize, siblings))
}

fn node_at<'a>(nodes: &'a mut Vec<VNode>, path: &[u32]) -> Result<&'a mut VNode, PatchError> {
    let (index, siblings) = sequence_at(nodes, path)?;
    siblings
        .get_mut(index)
        .ok_or_else(|| PatchError::InvalidPath(path.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn para(key: &str, text: &str) -> VNode {
        VNode::element("p")
            .with_key(key)
            .with_child(VNode::text(text))
    }

    #[test]
    fn test_identical_trees_produce_no_patches() {
        let nodes = vec![para("a", "x"), para("b", "y")];
        assert!(diff_nodes(&nodes, &nodes.clone()).is_empty());
    }

    #[test]
    fn test_text_change() {
        let old = vec![para("a", "x")];
        let new = vec![para("a", "z")];
        assert_eq!(
            diff_nodes(&old, &new),
            vec![Patch::UpdateText {
                path: vec![0, 0],
                content: "z".to_string()
            }]
        );
    }

    #[test]
    fn test_key_change_replaces() {
        let old = vec![para("a", "x")];
        let new = vec![para("b", "x")];
        assert!(matches!(diff_nodes(&old, &new)[0], Patch::ReplaceNode { .. }));
    }

    #[test]
    fn test_patches_reproduce_new_tree() {
        let old = vec![
            VNode::element("section")
                .with_key("s")
                .with_style("padding", "1px")
                .with_child(para("a", "x"))
                .with_child(para("b", "y"))
                .with_child(para("c", "z")),
            para("d", "w"),
        ];
        let new = vec![
            VNode::element("section")
                .with_key("s")
                .with_style("padding", "2px")
                .with_child(para("a", "changed")),
            para("d", "w"),
            para("e", "new"),
        ];

        let patches = diff_nodes(&old, &new);
        let mut patched = old.clone();
        apply_patches(&mut patched, &patches).unwrap();
        assert_eq!(patched, new);
    }

    #[test]
    fn test_invalid_path() {
        let mut nodes = vec![para("a", "x")];
        let result = apply_patches(&mut nodes, &[Patch::RemoveNode { path: vec![4] }]);
        assert_eq!(result, Err(PatchError::InvalidPath(vec![4])));
    }
}
