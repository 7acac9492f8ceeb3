//! # Component Nodes
//!
//! A page is an ordered forest of components. Children are held behind
//! `Arc` so a rebuilt forest shares every untouched subtree with the forest
//! it was derived from; `Arc::ptr_eq` on a subtree means "unchanged".

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

use crate::error::PropsError;
use crate::{ComponentKind, Props};

/// Unique component identifier, assigned at creation and never changed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ComponentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One node of the page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawComponent", into = "RawComponent")]
pub struct Component {
    pub id: ComponentId,
    pub props: Props,
    /// Present (possibly empty) for layout kinds, absent for leaves
    pub children: Option<Vec<Arc<Component>>>,
    /// Owning node, `None` for roots
    pub parent_id: Option<ComponentId>,
}

impl Component {
    /// New component of `kind` with default props
    pub fn new(id: ComponentId, kind: ComponentKind, parent_id: Option<ComponentId>) -> Self {
        Self::with_props(id, Props::defaults(kind), parent_id)
    }

    pub fn with_props(id: ComponentId, props: Props, parent_id: Option<ComponentId>) -> Self {
        let children = props
            .kind()
            .filter(ComponentKind::is_container)
            .map(|_| Vec::new());

        Self {
            id,
            props,
            children,
            parent_id,
        }
    }

    /// `None` when the type tag is not one of the known kinds
    pub fn kind(&self) -> Option<ComponentKind> {
        self.props.kind()
    }

    pub fn type_tag(&self) -> &str {
        self.props.type_tag()
    }

    pub fn accepts_children(&self) -> bool {
        self.children.is_some()
    }

    pub fn children(&self) -> &[Arc<Component>] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Copy of this node with a replaced children sequence
    pub fn with_children(&self, children: Vec<Arc<Component>>) -> Self {
        Self {
            id: self.id.clone(),
            props: self.props.clone(),
            children: Some(children),
            parent_id: self.parent_id.clone(),
        }
    }

    /// Copy of this node re-parented under `parent_id`
    pub fn reparented(&self, parent_id: Option<ComponentId>) -> Self {
        Self {
            parent_id,
            ..self.clone()
        }
    }

    /// Copy of this node with replaced props
    pub fn with_replaced_props(&self, props: Props) -> Self {
        Self {
            props,
            ..self.clone()
        }
    }

    /// Append `child` as the last child, pointing its `parent_id` here
    pub fn adopt(mut self, mut child: Component) -> Self {
        child.parent_id = Some(self.id.clone());
        self.children
            .get_or_insert_with(Vec::new)
            .push(Arc::new(child));
        self
    }
}

/// Wire shape: `{ id, type, props, children?, parentId }`
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComponent {
    id: ComponentId,
    #[serde(rename = "type")]
    type_tag: String,
    #[serde(default)]
    props: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Arc<Component>>>,
    #[serde(default)]
    parent_id: Option<ComponentId>,
}

impl TryFrom<RawComponent> for Component {
    type Error = PropsError;

    fn try_from(raw: RawComponent) -> Result<Self, Self::Error> {
        let props = Props::from_parts(&raw.type_tag, raw.props)?;

        // Layout kinds always hold a sequence; leaves never do
        let children = match props.kind() {
            Some(kind) if kind.is_container() => Some(raw.children.unwrap_or_default()),
            Some(_) => match raw.children {
                Some(children) if !children.is_empty() => {
                    return Err(PropsError::ChildrenOnLeaf {
                        tag: raw.type_tag,
                        id: raw.id.to_string(),
                    })
                }
                _ => None,
            },
            None => raw.children,
        };

        Ok(Self {
            id: raw.id,
            props,
            children,
            parent_id: raw.parent_id,
        })
    }
}

impl From<Component> for RawComponent {
    fn from(component: Component) -> Self {
        Self {
            type_tag: component.type_tag().to_string(),
            props: component.props.to_map(),
            id: component.id,
            children: component.children,
            parent_id: component.parent_id,
        }
    }
}
