use serde::{Deserialize, Serialize};

/// Advisory meta description length; shown to the user, never enforced
pub const RECOMMENDED_DESCRIPTION_LENGTH: usize = 160;

/// Page-level SEO metadata, independent of the component tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

impl PageMeta {
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    pub fn description_exceeds_recommendation(&self) -> bool {
        self.description_len() > RECOMMENDED_DESCRIPTION_LENGTH
    }
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "My Awesome Page".to_string(),
            description: "This is a description of my awesome page.".to_string(),
        }
    }
}
