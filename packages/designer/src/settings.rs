use pagecraft_editor::Mutation;
use pagecraft_model::{PageMeta, RECOMMENDED_DESCRIPTION_LENGTH};
use pagecraft_renderer::VNode;

pub const SETTINGS_HEADING: &str = "Page SEO Settings";
pub const TITLE_PLACEHOLDER: &str = "Enter page title";
pub const DESCRIPTION_PLACEHOLDER: &str = "Enter meta description (max 160 characters recommended)";

/// Form field of the page settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Title,
    Description,
}

impl SettingsField {
    pub fn input_id(&self) -> &'static str {
        match self {
            SettingsField::Title => "pageTitle",
            SettingsField::Description => "pageDescription",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::Title => "Page Title",
            SettingsField::Description => "Meta Description",
        }
    }

    /// Every keystroke is committed as-is
    pub fn edit(&self, value: impl Into<String>) -> Mutation {
        match self {
            SettingsField::Title => Mutation::SetPageTitle {
                title: value.into(),
            },
            SettingsField::Description => Mutation::SetPageDescription {
                description: value.into(),
            },
        }
    }
}

/// "42 / 160" style counter under the description
pub fn character_count(page: &PageMeta) -> String {
    format!("{} / {}", page.description_len(), RECOMMENDED_DESCRIPTION_LENGTH)
}

pub fn render_settings(page: &PageMeta) -> VNode {
    let title_field = SettingsField::Title;
    let description_field = SettingsField::Description;

    let mut counter = VNode::element("small")
        .with_class("char-count")
        .with_child(VNode::text(character_count(page)));
    if page.description_exceeds_recommendation() {
        counter = counter.with_class("over-limit");
    }

    VNode::element("div")
        .with_class("page-settings")
        .with_child(VNode::element("h4").with_child(VNode::text(SETTINGS_HEADING)))
        .with_child(
            VNode::element("div")
                .with_class("form-group")
                .with_child(label(title_field))
                .with_child(
                    VNode::element("input")
                        .with_attr("id", title_field.input_id())
                        .with_attr("type", "text")
                        .with_attr("value", page.title.as_str())
                        .with_attr("placeholder", TITLE_PLACEHOLDER),
                ),
        )
        .with_child(
            VNode::element("div")
                .with_class("form-group")
                .with_child(label(description_field))
                .with_child(
                    VNode::element("textarea")
                        .with_attr("id", description_field.input_id())
                        .with_attr("rows", "4")
                        .with_attr("placeholder", DESCRIPTION_PLACEHOLDER)
                        .with_child(VNode::text(page.description.as_str())),
                )
                .with_child(counter),
        )
}

fn label(field: SettingsField) -> VNode {
    VNode::element("label")
        .with_attr("for", field.input_id())
        .with_child(VNode::text(field.label()))
}
