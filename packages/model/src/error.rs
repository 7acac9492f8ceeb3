use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    #[error("Invalid props for {tag}: {reason}")]
    Invalid { tag: String, reason: String },

    #[error("{tag} component {id} cannot have children")]
    ChildrenOnLeaf { tag: String, id: String },
}
