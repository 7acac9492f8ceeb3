//! # Pagecraft Model
//!
//! Data model of the page builder: the component forest, typed props per
//! component kind, drag intents, device presets and page metadata.

mod component;
mod device;
mod error;
mod id_generator;
mod intent;
mod kind;
mod page;
mod props;
pub mod tree;
pub mod visitor;

pub use component::{Component, ComponentId};
pub use device::{DeviceType, DeviceWidth};
pub use error::PropsError;
pub use id_generator::{get_session_id, IdGenerator};
pub use intent::{DragItem, ItemType};
pub use kind::{ComponentKind, UnknownKind};
pub use page::{PageMeta, RECOMMENDED_DESCRIPTION_LENGTH};
pub use props::{
    ContainerProps, GridProps, ImageProps, Props, PropsPatch, SectionProps, TextAlign,
    TextBlockProps, MAX_GRID_COLUMNS,
};
pub use visitor::Visitor;
