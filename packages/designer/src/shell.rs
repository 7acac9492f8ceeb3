//! # Editor Shell
//!
//! Drives the editor screen from discrete user events. Events are handled
//! one at a time; each either updates transient drag state or commits a
//! single mutation through the render pipeline.

use pagecraft_editor::{EditorError, EditorState, EditorStore, Mutation, Pipeline, PipelineResult};
use pagecraft_model::{ComponentId, ComponentKind, DeviceType, DragItem};
use pagecraft_renderer::{render_html_document, HtmlOptions, Renderer, VNode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::canvas::Canvas;
use crate::layout::{render_editor, LayoutInput};
use crate::palette::PaletteItem;
use crate::preview::preview_html;
use crate::settings::SettingsField;

/// User interaction on the editor screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ShellEvent {
    /// Palette item picked up
    DragStart { kind: ComponentKind },

    /// Pointer entered or left the canvas while dragging
    DragOver { over: bool },

    /// Item released over the canvas
    Drop {
        #[serde(default)]
        claimed: bool,
    },

    /// Drag abandoned
    DragEnd,

    SwitchDevice { device: DeviceType },

    EditTitle { value: String },

    EditDescription { value: String },

    Select { component_id: Option<ComponentId> },

    /// Any store mutation, e.g. from a nested drop target
    Apply { mutation: Mutation },
}

#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("Invalid event: {0}")]
    Event(#[from] serde_json::Error),
}

/// What an event did
#[derive(Debug, Clone)]
pub enum ShellUpdate {
    /// Only transient drag state changed
    Idle,
    Committed(PipelineResult),
}

impl ShellUpdate {
    pub fn committed(&self) -> Option<&PipelineResult> {
        match self {
            ShellUpdate::Committed(result) => Some(result),
            ShellUpdate::Idle => None,
        }
    }
}

pub struct EditorShell {
    pipeline: Pipeline,
    canvas: Canvas,
}

impl EditorShell {
    pub fn new(store: EditorStore) -> Self {
        let mut pipeline = Pipeline::new(store, Renderer::editor());
        pipeline.full_render();
        Self {
            pipeline,
            canvas: Canvas::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        self.pipeline.store().state()
    }

    pub fn store(&self) -> &EditorStore {
        self.pipeline.store()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn handle(&mut self, event: ShellEvent) -> Result<ShellUpdate, ShellError> {
        debug!(event = ?event, "Shell event");

        let mutation = match event {
            ShellEvent::DragStart { kind } => {
                let item = PaletteItem::for_kind(kind)
                    .map(PaletteItem::drag_start)
                    .unwrap_or_else(|| DragItem::new_component(kind));
                self.canvas.begin_drag(item);
                return Ok(ShellUpdate::Idle);
            }
            ShellEvent::DragOver { over } => {
                self.canvas.drag_over(over);
                return Ok(ShellUpdate::Idle);
            }
            ShellEvent::DragEnd => {
                self.canvas.end_drag();
                return Ok(ShellUpdate::Idle);
            }
            ShellEvent::Drop { claimed } => match self.canvas.drop(claimed) {
                Some(mutation) => mutation,
                None => return Ok(ShellUpdate::Idle),
            },
            ShellEvent::SwitchDevice { device } => Mutation::SetCurrentDevice { device },
            ShellEvent::EditTitle { value } => SettingsField::Title.edit(value),
            ShellEvent::EditDescription { value } => SettingsField::Description.edit(value),
            ShellEvent::Select { component_id } => Mutation::SelectComponent { component_id },
            ShellEvent::Apply { mutation } => mutation,
        };

        let result = self.pipeline.apply_mutation(mutation)?;
        Ok(ShellUpdate::Committed(result))
    }

    /// Handle one JSON-encoded event
    pub fn handle_json(&mut self, json: &str) -> Result<ShellUpdate, ShellError> {
        let event: ShellEvent = serde_json::from_str(json)?;
        self.handle(event)
    }

    /// Handle events in order, stopping at the first failure
    pub fn replay(&mut self, events: Vec<ShellEvent>) -> Result<usize, ShellError> {
        let mut committed = 0;
        for event in events {
            if let ShellUpdate::Committed(_) = self.handle(event)? {
                committed += 1;
            }
        }
        Ok(committed)
    }

    /// The whole editor screen
    pub fn editor_view(&mut self) -> VNode {
        let content = match self.pipeline.last_render() {
            Some(nodes) => nodes.to_vec(),
            None => self.pipeline.full_render(),
        };

        render_editor(LayoutInput {
            state: self.pipeline.store().state(),
            canvas: &self.canvas,
            content,
            dragging: self.canvas.dragging().map(|item| item.kind),
        })
    }

    pub fn editor_html(&mut self, options: &HtmlOptions) -> String {
        let view = self.editor_view();
        let page = &self.state().page;
        render_html_document(&page.title, &page.description, &[view], options)
    }

    pub fn preview_html(&self, options: &HtmlOptions) -> String {
        preview_html(self.state(), options)
    }
}
