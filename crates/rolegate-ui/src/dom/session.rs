//! Page session: mounts every behaviour once and owns its listeners and timers.

use crate::config::{PageConfig, defaults};
use crate::dom::alert::AlertAutoHide;
use crate::dom::theme::ThemeToggle;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use std::cell::{OnceCell, RefCell};

thread_local! {
    static CONFIG: OnceCell<PageConfig> = const { OnceCell::new() };
    static SESSION: RefCell<Option<PageSession>> = const { RefCell::new(None) };
    static PENDING_MOUNT: RefCell<Option<EventListener>> = const { RefCell::new(None) };
}

pub(crate) struct PageSession {
    _theme: Option<ThemeToggle>,
    _alert: AlertAutoHide,
}

impl PageSession {
    fn mount(config: &PageConfig) -> Self {
        let theme = match ThemeToggle::mount(config) {
            Ok(toggle) => Some(toggle),
            Err(err) => {
                console::warn!("theme toggle unavailable", err.to_string());
                None
            }
        };
        let alert = AlertAutoHide::arm(&config.alert_selector, config.alert_timing());
        console::debug!("page session mounted");
        Self {
            _theme: theme,
            _alert: alert,
        }
    }
}

/// Configuration for this page, read from the inline block on first use.
pub(crate) fn active_config() -> PageConfig {
    CONFIG.with(|cell| cell.get_or_init(load_config).clone())
}

fn load_config() -> PageConfig {
    let Some(raw) = document()
        .get_element_by_id(defaults::INLINE_CONFIG_ID)
        .and_then(|element| element.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            console::error!("ignoring inline page config", err.to_string());
            PageConfig::default()
        }
    }
}

/// Mount now, or once the document has finished parsing.
pub(crate) fn start() {
    if document().ready_state() == "loading" {
        let listener = EventListener::once(&document(), "DOMContentLoaded", |_| mount_now());
        PENDING_MOUNT.with(|slot| *slot.borrow_mut() = Some(listener));
    } else {
        mount_now();
    }
}

fn mount_now() {
    let session = PageSession::mount(&active_config());
    // Replacing an earlier session drops it, cancelling its timers.
    SESSION.with(|slot| *slot.borrow_mut() = Some(session));
}

/// Drop the live session: detach listeners and cancel pending timers.
pub(crate) fn teardown() {
    let pending = PENDING_MOUNT.with(|slot| slot.borrow_mut().take());
    let session = SESSION.with(|slot| slot.borrow_mut().take());
    drop(pending);
    drop(session);
    console::debug!("page session torn down");
}
