//! Timers driving the flash banner dismissal.

use crate::dom::dom_error;
use crate::error::UiError;
use crate::logic::alert::{AlertDismissal, AlertPhase, AlertTiming};
use crate::logic::page::AlertSurface;
use gloo::console;
use gloo::timers::callback::Timeout;
use gloo::utils::document;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

pub(crate) struct DocumentAlerts {
    selector: String,
}

impl AlertSurface for DocumentAlerts {
    type Element = HtmlElement;

    fn find_alert(&self) -> Option<HtmlElement> {
        document()
            .query_selector(&self.selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    }

    fn set_opacity(&self, element: &HtmlElement, opacity: &str) -> Result<(), UiError> {
        element
            .style()
            .set_property("opacity", opacity)
            .map_err(|err| dom_error("style.opacity", &err))
    }

    fn remove(&self, element: &HtmlElement) {
        element.remove();
    }
}

/// Armed dismissal. Dropping it cancels whichever step has not fired yet.
pub(crate) struct AlertAutoHide {
    _fade: Timeout,
    _remove: Rc<RefCell<Option<Timeout>>>,
}

impl AlertAutoHide {
    pub(crate) fn arm(selector: &str, timing: AlertTiming) -> Self {
        let remove_slot = Rc::new(RefCell::new(None));
        let mut dismissal = AlertDismissal::new(DocumentAlerts {
            selector: selector.to_string(),
        });
        let slot = Rc::downgrade(&remove_slot);
        let fade = Timeout::new(timing.fade_after_ms, move || match dismissal.fade() {
            Ok(AlertPhase::Faded) => schedule_removal(&slot, dismissal, timing.remove_after_ms),
            Ok(_) => {}
            Err(err) => {
                console::error!("alert fade failed", err.to_string());
            }
        });
        Self {
            _fade: fade,
            _remove: remove_slot,
        }
    }
}

fn schedule_removal(
    slot: &Weak<RefCell<Option<Timeout>>>,
    mut dismissal: AlertDismissal<DocumentAlerts>,
    delay_ms: u32,
) {
    // Owner already dropped: the page session was torn down mid-fade.
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let removal = Timeout::new(delay_ms, move || {
        dismissal.remove();
    });
    *slot.borrow_mut() = Some(removal);
}
