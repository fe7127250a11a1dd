//! Theme toggle wired to `<body>`, the glyph element, and the toggle button.

use crate::config::PageConfig;
use crate::dom::storage::BrowserStorage;
use crate::dom::{dom_error, element_by_id};
use crate::error::UiError;
use crate::logic::page::ThemeSurface;
use crate::logic::theme::{ThemeController, ThemeMode};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::body;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, HtmlElement};

pub(crate) struct BodyTheme {
    body: HtmlElement,
    icon: Element,
    dark_class: String,
}

impl ThemeSurface for BodyTheme {
    fn set_dark_marker(&self, present: bool) -> Result<(), UiError> {
        let classes = self.body.class_list();
        if present {
            classes
                .add_1(&self.dark_class)
                .map_err(|err| dom_error("classList.add", &err))
        } else {
            classes
                .remove_1(&self.dark_class)
                .map_err(|err| dom_error("classList.remove", &err))
        }
    }

    fn set_glyph(&self, glyph: &str) -> Result<(), UiError> {
        self.icon.set_text_content(Some(glyph));
        Ok(())
    }
}

/// Mounted theme toggle; dropping it detaches the click listener.
pub(crate) struct ThemeToggle {
    _listener: EventListener,
}

impl ThemeToggle {
    pub(crate) fn mount(config: &PageConfig) -> Result<Self, UiError> {
        let button = element_by_id(&config.toggle_id)?;
        let surface = BodyTheme {
            body: body(),
            icon: element_by_id(&config.icon_id)?,
            dark_class: config.dark_class.clone(),
        };
        let mut controller =
            ThemeController::new(surface, BrowserStorage, config.theme_key.clone());
        let mode = controller.load()?;
        console::debug!("theme loaded", mode.as_str());

        let controller = Rc::new(RefCell::new(controller));
        let listener = EventListener::new(&button, "click", move |_| {
            let outcome = controller.borrow_mut().toggle();
            report_toggle(outcome);
        });
        Ok(Self {
            _listener: listener,
        })
    }
}

fn report_toggle(outcome: Result<ThemeMode, UiError>) {
    match outcome {
        Ok(mode) => {
            console::debug!("theme toggled", mode.as_str());
        }
        Err(err) => {
            console::error!("theme toggle failed", err.to_string());
        }
    }
}
