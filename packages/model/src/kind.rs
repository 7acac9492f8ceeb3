use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of component kinds the builder knows how to create and render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    #[serde(rename = "SECTION")]
    Section,
    #[serde(rename = "CONTAINER")]
    Container,
    #[serde(rename = "GRID")]
    Grid,
    #[serde(rename = "TEXT_BLOCK")]
    TextBlock,
    #[serde(rename = "IMAGE")]
    Image,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Section,
        ComponentKind::Container,
        ComponentKind::Grid,
        ComponentKind::TextBlock,
        ComponentKind::Image,
    ];

    /// Wire tag used in serialized trees
    pub fn as_tag(&self) -> &'static str {
        match self {
            ComponentKind::Section => "SECTION",
            ComponentKind::Container => "CONTAINER",
            ComponentKind::Grid => "GRID",
            ComponentKind::TextBlock => "TEXT_BLOCK",
            ComponentKind::Image => "IMAGE",
        }
    }

    /// Human readable name shown in the palette
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Section => "Section",
            ComponentKind::Container => "Container",
            ComponentKind::Grid => "Grid",
            ComponentKind::TextBlock => "Text Block",
            ComponentKind::Image => "Image",
        }
    }

    /// Layout kinds own an ordered children sequence; content kinds are leaves.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ComponentKind::Section | ComponentKind::Container | ComponentKind::Grid
        )
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown component type: {}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for ComponentKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_tag() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
