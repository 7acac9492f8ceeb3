use crate::Component;
use std::sync::Arc;

/// Visitor pattern for traversing a component forest immutably
///
/// The default implementation walks the whole tree depth-first in
/// document order. Override `visit_component` to act on nodes and call
/// `walk_component` to keep descending.
pub trait Visitor: Sized {
    fn visit_forest(&mut self, components: &[Arc<Component>]) {
        walk_forest(self, components);
    }

    fn visit_component(&mut self, component: &Component, parent: Option<&Component>) {
        let _ = parent;
        walk_component(self, component);
    }
}

pub fn walk_forest<V: Visitor>(visitor: &mut V, components: &[Arc<Component>]) {
    for component in components {
        visitor.visit_component(component, None);
    }
}

pub fn walk_component<V: Visitor>(visitor: &mut V, component: &Component) {
    for child in component.children() {
        visitor.visit_component(child, Some(component));
    }
}
