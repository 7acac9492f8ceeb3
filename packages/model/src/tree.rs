//! Lookups over a component forest.
//!
//! All searches are depth-first in document order. Ids are unique, so the
//! first match is the only match.

use std::collections::HashSet;
use std::sync::Arc;

use crate::visitor::{walk_component, Visitor};
use crate::{Component, ComponentId};

/// Find a component anywhere in the forest
pub fn find<'a>(components: &'a [Arc<Component>], id: &ComponentId) -> Option<&'a Arc<Component>> {
    for component in components {
        if component.id == *id {
            return Some(component);
        }
        if let Some(found) = find(component.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Child-index path from the root sequence to the component
pub fn path_to(components: &[Arc<Component>], id: &ComponentId) -> Option<Vec<usize>> {
    for (index, component) in components.iter().enumerate() {
        if component.id == *id {
            return Some(vec![index]);
        }
        if let Some(mut path) = path_to(component.children(), id) {
            path.insert(0, index);
            return Some(path);
        }
    }
    None
}

/// Component at a child-index path produced by [`path_to`]
pub fn get<'a>(components: &'a [Arc<Component>], path: &[usize]) -> Option<&'a Arc<Component>> {
    let (first, rest) = path.split_first()?;
    let mut node = components.get(*first)?;
    for index in rest {
        node = node.children().get(*index)?;
    }
    Some(node)
}

/// True when `id` names `root` itself or one of its descendants
pub fn contains_in_subtree(root: &Component, id: &ComponentId) -> bool {
    root.id == *id || find(root.children(), id).is_some()
}

/// Total number of components in the forest
pub fn count(components: &[Arc<Component>]) -> usize {
    struct Counter(usize);

    impl Visitor for Counter {
        fn visit_component(&mut self, component: &Component, _parent: Option<&Component>) {
            self.0 += 1;
            walk_component(self, component);
        }
    }

    let mut counter = Counter(0);
    counter.visit_forest(components);
    counter.0
}

/// Structural problem found by [`check_integrity`]
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrityIssue {
    DuplicateId(ComponentId),
    ParentMismatch {
        id: ComponentId,
        expected: Option<ComponentId>,
        found: Option<ComponentId>,
    },
}

/// Verify ids are unique and every `parent_id` matches actual containment
pub fn check_integrity(components: &[Arc<Component>]) -> Vec<IntegrityIssue> {
    #[derive(Default)]
    struct Checker {
        seen: HashSet<ComponentId>,
        issues: Vec<IntegrityIssue>,
    }

    impl Visitor for Checker {
        fn visit_component(&mut self, component: &Component, parent: Option<&Component>) {
            if !self.seen.insert(component.id.clone()) {
                self.issues.push(IntegrityIssue::DuplicateId(component.id.clone()));
            }

            let expected = parent.map(|p| p.id.clone());
            if component.parent_id != expected {
                self.issues.push(IntegrityIssue::ParentMismatch {
                    id: component.id.clone(),
                    expected,
                    found: component.parent_id.clone(),
                });
            }

            walk_component(self, component);
        }
    }

    let mut checker = Checker::default();
    checker.visit_forest(components);
    checker.issues
}
