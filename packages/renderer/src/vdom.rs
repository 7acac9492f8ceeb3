use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Virtual DOM node
///
/// Attribute and style maps are ordered so that serialized markup is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
        /// Identity of the component this element projects, if any
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
    },

    /// Text node
    Text { content: String },

    /// Comment node
    Comment { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
            key: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        VNode::Comment {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    /// Append a class name to the `class` attribute
    pub fn with_class(mut self, class: &str) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            let classes = attributes.entry("class".to_string()).or_default();
            if !classes.is_empty() {
                classes.push(' ');
            }
            classes.push_str(class);
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        if let VNode::Element {
            key: ref mut node_key,
            ..
        } = self
        {
            *node_key = Some(key.into());
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn style(&self, name: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(name).map(String::as_str),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            VNode::Element { key, .. } => key.as_deref(),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Comment { .. } => String::new(),
            VNode::Element { children, .. } => {
                children.iter().map(VNode::text_content).collect()
            }
        }
    }

    /// First node (depth-first, self included) whose attribute `name` equals `value`
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&VNode> {
        if self.attr(name) == Some(value) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_attr(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_accessors() {
        let node = VNode::element("div")
            .with_attr("id", "root")
            .with_class("a")
            .with_class("b")
            .with_style("width", "100%")
            .with_key("k1")
            .with_child(VNode::text("hello "))
            .with_child(VNode::element("span").with_child(VNode::text("world")));

        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.attr("class"), Some("a b"));
        assert_eq!(node.style("width"), Some("100%"));
        assert_eq!(node.key(), Some("k1"));
        assert_eq!(node.text_content(), "hello world");
        assert_eq!(
            node.find_by_attr("id", "root").and_then(VNode::tag),
            Some("div")
        );
    }

    #[test]
    fn test_builders_ignore_non_elements() {
        let text = VNode::text("x").with_attr("a", "b").with_child(VNode::text("y"));
        assert_eq!(text, VNode::text("x"));
    }
}
