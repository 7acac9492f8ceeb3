use pagecraft_designer::{EditorShell, ShellEvent, ShellUpdate};
use pagecraft_editor::{EditorStore, Mutation, MutationOutcome};
use pagecraft_model::{ComponentKind, DeviceType, DragItem, IdGenerator, PropsPatch};
use pagecraft_renderer::HtmlOptions;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

/// Editing session exposed to the browser
#[wasm_bindgen]
pub struct Editor {
    shell: EditorShell,
}

#[wasm_bindgen]
impl Editor {
    /// New session; `starter` seeds the welcome section
    #[wasm_bindgen(constructor)]
    pub fn new(starter: bool) -> Editor {
        let ids = IdGenerator::fresh("pagecraft-wasm");
        let store = if starter {
            EditorStore::with_starter_page(ids)
        } else {
            EditorStore::new(ids)
        };
        Editor {
            shell: EditorShell::new(store),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> u64 {
        self.shell.store().version()
    }

    /// Returns the new component id, or `undefined` when the parent is missing
    #[wasm_bindgen(js_name = addComponent)]
    pub fn add_component(
        &mut self,
        kind: &str,
        parent_id: Option<String>,
        index: Option<u32>,
    ) -> Result<Option<String>, JsValue> {
        let kind: ComponentKind = kind.parse().map_err(|e| js_error("Add error", e))?;
        let outcome = self.apply(Mutation::AddComponent {
            item: DragItem::new_component(kind),
            parent_id: parent_id.map(Into::into),
            index: index.map(|i| i as usize),
        })?;

        Ok(match outcome {
            MutationOutcome::Added(id) => Some(id.to_string()),
            _ => None,
        })
    }

    /// Returns false when either id does not resolve
    #[wasm_bindgen(js_name = moveComponent)]
    pub fn move_component(
        &mut self,
        dragged_id: String,
        target_parent_id: Option<String>,
        new_index: Option<u32>,
    ) -> Result<bool, JsValue> {
        let outcome = self.apply(Mutation::MoveComponent {
            dragged_id: dragged_id.into(),
            target_parent_id: target_parent_id.map(Into::into),
            new_index: new_index.map(|i| i as usize),
        })?;
        Ok(outcome != MutationOutcome::NoMatch)
    }

    /// Merge a JSON object of props into a component
    #[wasm_bindgen(js_name = updateProps)]
    pub fn update_props(
        &mut self,
        component_id: String,
        props_json: &str,
    ) -> Result<bool, JsValue> {
        let props: PropsPatch =
            serde_json::from_str(props_json).map_err(|e| js_error("Props error", e))?;
        let outcome = self.apply(Mutation::UpdateComponentProps {
            component_id: component_id.into(),
            props,
        })?;
        Ok(outcome != MutationOutcome::NoMatch)
    }

    pub fn select(&mut self, component_id: Option<String>) -> Result<(), JsValue> {
        self.apply(Mutation::SelectComponent {
            component_id: component_id.map(Into::into),
        })
        .map(|_| ())
    }

    #[wasm_bindgen(js_name = setDevice)]
    pub fn set_device(&mut self, device: &str) -> Result<(), JsValue> {
        let device: DeviceType = device.parse().map_err(|e: String| js_error("Device error", e))?;
        self.apply(Mutation::SetCurrentDevice { device }).map(|_| ())
    }

    #[wasm_bindgen(js_name = setPageTitle)]
    pub fn set_page_title(&mut self, title: String) -> Result<(), JsValue> {
        self.apply(Mutation::SetPageTitle { title }).map(|_| ())
    }

    #[wasm_bindgen(js_name = setPageDescription)]
    pub fn set_page_description(&mut self, description: String) -> Result<(), JsValue> {
        self.apply(Mutation::SetPageDescription { description })
            .map(|_| ())
    }

    /// Handle a JSON event; returns the VDOM patches as JSON (empty when idle)
    #[wasm_bindgen(js_name = handleEvent)]
    pub fn handle_event(&mut self, event_json: &str) -> Result<String, JsValue> {
        let event: ShellEvent =
            serde_json::from_str(event_json).map_err(|e| js_error("Event error", e))?;
        let update = self
            .shell
            .handle(event)
            .map_err(|e| js_error("Event error", e))?;

        let patches = match update {
            ShellUpdate::Committed(result) => result.patches,
            ShellUpdate::Idle => Vec::new(),
        };
        serde_json::to_string(&patches).map_err(|e| js_error("Serialization error", e))
    }

    /// Root components as JSON
    pub fn components(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.shell.state().components)
            .map_err(|e| js_error("Serialization error", e))
    }

    /// Full editor state as JSON
    pub fn state(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.shell.state()).map_err(|e| js_error("Serialization error", e))
    }

    #[wasm_bindgen(js_name = renderEditorHtml)]
    pub fn render_editor_html(&mut self) -> String {
        self.shell.editor_html(&HtmlOptions::compact())
    }

    #[wasm_bindgen(js_name = renderPreviewHtml)]
    pub fn render_preview_html(&self) -> String {
        self.shell.preview_html(&HtmlOptions::compact())
    }
}

impl Editor {
    fn apply(&mut self, mutation: Mutation) -> Result<MutationOutcome, JsValue> {
        match self.shell.handle(ShellEvent::Apply { mutation }) {
            Ok(ShellUpdate::Committed(result)) => Ok(result.outcome),
            Ok(ShellUpdate::Idle) => Ok(MutationOutcome::NoMatch),
            Err(e) => Err(js_error("Mutation error", e)),
        }
    }
}
