//! Typed props records, one per component kind.
//!
//! Each record keeps keys it does not recognise in `extra`, so a props
//! mapping coming from the outside survives a round trip unchanged.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::PropsError;
use crate::ComponentKind;

/// Partial props update: keys present here overwrite, the rest are kept.
pub type PropsPatch = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextBlockProps {
    pub text: String,
    pub font_size: String,
    pub color: String,
    pub text_align: TextAlign,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Upper bound on grid columns accepted from loaded pages and props patches
pub const MAX_GRID_COLUMNS: u32 = 24;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Props of a component, tagged by kind
#[derive(Debug, Clone, PartialEq)]
pub enum Props {
    Section(SectionProps),
    Container(ContainerProps),
    Grid(GridProps),
    TextBlock(TextBlockProps),
    Image(ImageProps),
    /// Type tag outside the known set, kept verbatim for forward compatibility
    Unknown {
        tag: String,
        values: Map<String, Value>,
    },
}

impl Props {
    /// Props given to a freshly created component of `kind`
    pub fn defaults(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::TextBlock => Props::TextBlock(TextBlockProps {
                text: "New Text Block".to_string(),
                font_size: "16px".to_string(),
                color: "#000000".to_string(),
                text_align: TextAlign::Left,
                extra: Map::new(),
            }),
            ComponentKind::Image => Props::Image(ImageProps {
                src: "https://via.placeholder.com/150?text=New+Image".to_string(),
                alt: "New Image".to_string(),
                width: Some("150px".to_string()),
                height: Some("auto".to_string()),
                extra: Map::new(),
            }),
            ComponentKind::Section => Props::Section(SectionProps {
                background_color: Some("transparent".to_string()),
                padding: Some("20px 0".to_string()),
                extra: Map::new(),
            }),
            ComponentKind::Container => Props::Container(ContainerProps {
                max_width: Some("1140px".to_string()),
                background_color: Some("transparent".to_string()),
                padding: Some("15px".to_string()),
                extra: Map::new(),
            }),
            ComponentKind::Grid => Props::Grid(GridProps {
                columns: Some(2),
                gap: Some("15px".to_string()),
                background_color: Some("transparent".to_string()),
                padding: Some("10px".to_string()),
                extra: Map::new(),
            }),
        }
    }

    /// Build typed props from a type tag and an open mapping
    pub fn from_parts(tag: &str, values: Map<String, Value>) -> Result<Self, PropsError> {
        let kind = match tag.parse::<ComponentKind>() {
            Ok(kind) => kind,
            Err(_) => {
                return Ok(Props::Unknown {
                    tag: tag.to_string(),
                    values,
                })
            }
        };

        Ok(match kind {
            ComponentKind::Section => Props::Section(decode(tag, values)?),
            ComponentKind::Container => Props::Container(decode(tag, values)?),
            ComponentKind::Grid => Props::Grid(decode::<GridProps>(tag, values)?.validated(tag)?),
            ComponentKind::TextBlock => Props::TextBlock(decode(tag, values)?),
            ComponentKind::Image => Props::Image(decode(tag, values)?),
        })
    }

    pub fn kind(&self) -> Option<ComponentKind> {
        match self {
            Props::Section(_) => Some(ComponentKind::Section),
            Props::Container(_) => Some(ComponentKind::Container),
            Props::Grid(_) => Some(ComponentKind::Grid),
            Props::TextBlock(_) => Some(ComponentKind::TextBlock),
            Props::Image(_) => Some(ComponentKind::Image),
            Props::Unknown { .. } => None,
        }
    }

    pub fn type_tag(&self) -> &str {
        match self {
            Props::Unknown { tag, .. } => tag,
            _ => self.kind().map_or("", |kind| kind.as_tag()),
        }
    }

    /// Props as an open mapping (the serialized shape)
    pub fn to_map(&self) -> Map<String, Value> {
        match self {
            Props::Section(p) => encode(p),
            Props::Container(p) => encode(p),
            Props::Grid(p) => encode(p),
            Props::TextBlock(p) => encode(p),
            Props::Image(p) => encode(p),
            Props::Unknown { values, .. } => values.clone(),
        }
    }

    /// Shallow merge: keys in `patch` overwrite, others are preserved.
    pub fn merge(&self, patch: &PropsPatch) -> Result<Self, PropsError> {
        let mut values = self.to_map();
        for (key, value) in patch {
            values.insert(key.clone(), value.clone());
        }
        Props::from_parts(self.type_tag(), values)
    }
}

impl GridProps {
    fn validated(self, tag: &str) -> Result<Self, PropsError> {
        match self.columns {
            Some(n) if n > MAX_GRID_COLUMNS => Err(PropsError::Invalid {
                tag: tag.to_string(),
                reason: format!("columns must be at most {}, got {}", MAX_GRID_COLUMNS, n),
            }),
            _ => Ok(self),
        }
    }
}

fn decode<T: DeserializeOwned>(tag: &str, values: Map<String, Value>) -> Result<T, PropsError> {
    serde_json::from_value(Value::Object(values)).map_err(|e| PropsError::Invalid {
        tag: tag.to_string(),
        reason: e.to_string(),
    })
}

fn encode<T: Serialize>(props: &T) -> Map<String, Value> {
    match serde_json::to_value(props) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
