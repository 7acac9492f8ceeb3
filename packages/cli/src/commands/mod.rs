pub mod init;
pub mod inspect;
pub mod render;

pub use init::{init, InitArgs};
pub use inspect::{inspect, InspectArgs};
pub use render::{render, RenderArgs};

use crate::config::Config;
use anyhow::{anyhow, Result};
use pagecraft_designer::{EditorShell, ShellEvent};
use pagecraft_editor::{EditorState, EditorStore};
use pagecraft_model::{DeviceType, IdGenerator};
use std::fs;
use std::path::Path;
use tracing::info;

/// Where the editing session starts from
pub struct SessionSource<'a> {
    /// JSON array of root components replacing the starter page
    pub page: Option<&'a Path>,
    /// JSON array of shell events replayed in order
    pub events: Option<&'a Path>,
    pub device: Option<&'a str>,
}

/// Build an editor shell from config and replay any scripted events
pub fn open_session(config: &Config, source: SessionSource<'_>) -> Result<EditorShell> {
    let mut ids = IdGenerator::fresh(&config.session_label);

    let mut state = match source.page {
        Some(path) => EditorState::from_components_json(&fs::read_to_string(path)?)?,
        None if config.starter_page => EditorState::starter(&mut ids),
        None => EditorState::default(),
    };
    state.page = config.page_meta();
    state.current_device = match source.device {
        Some(device) => device.parse::<DeviceType>().map_err(|e| anyhow!(e))?,
        None => config.device,
    };

    let mut shell = EditorShell::new(EditorStore::from_state(state, ids)?);

    if let Some(path) = source.events {
        let events: Vec<ShellEvent> = serde_json::from_str(&fs::read_to_string(path)?)?;
        let total = events.len();
        let committed = shell.replay(events)?;
        info!(events = total, committed, "Replayed event script");
    }

    Ok(shell)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str, contents: &str) -> std::path::PathBuf {
        let file = format!("pagecraft-cli-{}-{}", std::process::id(), name);
        let path = std::env::temp_dir().join(file);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_starter_session_with_device_override() {
        let shell = open_session(
            &Config::default(),
            SessionSource {
                page: None,
                events: None,
                device: Some("mobile"),
            },
        )
        .unwrap();

        assert_eq!(shell.state().current_device, DeviceType::Mobile);
        assert_eq!(shell.state().components.len(), 1);
    }

    #[test]
    fn test_invalid_device_is_rejected() {
        let err = open_session(
            &Config::default(),
            SessionSource {
                page: None,
                events: None,
                device: Some("watch"),
            },
        )
        .err()
        .unwrap();
        assert!(err.to_string().contains("Invalid device: watch"));
    }

    #[test]
    fn test_page_and_events_files() {
        let page = scratch(
            "page.json",
            r#"[{ "id": "s", "type": "SECTION", "props": {}, "children": [], "parentId": null }]"#,
        );
        let events = scratch(
            "events.json",
            r#"[
                { "event": "dragStart", "kind": "TEXT_BLOCK" },
                { "event": "drop" },
                { "event": "editTitle", "value": "Scripted" }
            ]"#,
        );

        let config = Config {
            starter_page: false,
            ..Config::default()
        };
        let shell = open_session(
            &config,
            SessionSource {
                page: Some(&page),
                events: Some(&events),
                device: None,
            },
        )
        .unwrap();

        assert_eq!(shell.state().components.len(), 2);
        assert_eq!(shell.state().page.title, "Scripted");
        assert_eq!(shell.store().version(), 2);

        fs::remove_file(page).ok();
        fs::remove_file(events).ok();
    }

    #[test]
    fn test_loaded_page_ids_never_collide() {
        let seed = pagecraft_model::get_session_id("pagecraft");
        let page = scratch(
            "reused-ids.json",
            &format!(
                r#"[{{ "id": "{}-1", "type": "SECTION", "props": {{}}, "parentId": null }}]"#,
                seed
            ),
        );
        let events = scratch(
            "reused-events.json",
            r#"[{ "event": "dragStart", "kind": "TEXT_BLOCK" }, { "event": "drop" }]"#,
        );

        let shell = open_session(
            &Config::default(),
            SessionSource {
                page: Some(&page),
                events: Some(&events),
                device: None,
            },
        )
        .unwrap();

        assert_eq!(shell.state().components.len(), 2);
        assert!(pagecraft_model::tree::check_integrity(&shell.state().components).is_empty());

        fs::remove_file(page).ok();
        fs::remove_file(events).ok();
    }
}
