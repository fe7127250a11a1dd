//! Fade-then-remove dismissal of the flash banner.
//!
//! # Design
//! - The two delayed steps are plain methods; the caller owns the timers.
//! - A missing banner is not an error: the dismissal just ends as `Absent`.

use crate::error::UiError;
use crate::logic::page::AlertSurface;

/// Progress of a single banner dismissal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertPhase {
    /// Waiting for the fade delay.
    Pending,
    /// Opacity cleared; waiting for removal.
    Faded,
    /// Banner detached from the document.
    Removed,
    /// No banner was present when the fade fired.
    Absent,
}

/// Delays driving the dismissal, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlertTiming {
    /// Delay from start until the fade.
    pub fade_after_ms: u32,
    /// Delay from the fade until removal.
    pub remove_after_ms: u32,
}

/// One-shot dismissal of the first banner found when the fade fires.
#[derive(Debug)]
pub struct AlertDismissal<S: AlertSurface> {
    surface: S,
    target: Option<S::Element>,
    phase: AlertPhase,
}

impl<S: AlertSurface> AlertDismissal<S> {
    /// Build a pending dismissal.
    #[must_use]
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            target: None,
            phase: AlertPhase::Pending,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> AlertPhase {
        self.phase
    }

    /// First step: locate the banner and make it fully transparent.
    ///
    /// Runs once; later calls return the current phase unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Dom`] when the opacity cannot be written.
    pub fn fade(&mut self) -> Result<AlertPhase, UiError> {
        if self.phase != AlertPhase::Pending {
            return Ok(self.phase);
        }
        let Some(element) = self.surface.find_alert() else {
            self.phase = AlertPhase::Absent;
            return Ok(self.phase);
        };
        self.surface.set_opacity(&element, "0")?;
        self.target = Some(element);
        self.phase = AlertPhase::Faded;
        Ok(self.phase)
    }

    /// Second step: remove the banner faded by [`Self::fade`].
    pub fn remove(&mut self) -> AlertPhase {
        if let Some(element) = self.target.take() {
            self.surface.remove(&element);
            self.phase = AlertPhase::Removed;
        }
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::page::testing::{MemoryAlert, MemoryPage};

    #[test]
    fn present_banner_fades_then_disappears() {
        let page = MemoryPage::new().with_alert(1);
        let mut dismissal = AlertDismissal::new(&page);
        assert_eq!(dismissal.phase(), AlertPhase::Pending);

        assert_eq!(dismissal.fade().unwrap(), AlertPhase::Faded);
        assert_eq!(page.alert(1).unwrap().opacity.as_deref(), Some("0"));

        assert_eq!(dismissal.remove(), AlertPhase::Removed);
        assert!(page.alert(1).is_none());
    }

    #[test]
    fn absent_banner_is_a_quiet_no_op() {
        let page = MemoryPage::new();
        let mut dismissal = AlertDismissal::new(&page);
        assert_eq!(dismissal.fade().unwrap(), AlertPhase::Absent);
        assert_eq!(dismissal.remove(), AlertPhase::Absent);
    }

    #[test]
    fn only_the_first_banner_is_dismissed() {
        let page = MemoryPage::new().with_alert(1).with_alert(2);
        let mut dismissal = AlertDismissal::new(&page);
        dismissal.fade().unwrap();
        dismissal.remove();
        assert!(page.alert(1).is_none());
        let second = page.alert(2).unwrap();
        assert_eq!(second.opacity, None);
    }

    #[test]
    fn fade_runs_once() {
        let page = MemoryPage::new().with_alert(1);
        let mut dismissal = AlertDismissal::new(&page);
        dismissal.fade().unwrap();
        dismissal.remove();
        page.alerts.borrow_mut().push(MemoryAlert {
            id: 9,
            opacity: None,
        });
        assert_eq!(dismissal.fade().unwrap(), AlertPhase::Removed);
        assert_eq!(page.alert(9).unwrap().opacity, None);
    }

    #[test]
    fn remove_before_fade_does_nothing() {
        let page = MemoryPage::new().with_alert(4);
        let mut dismissal = AlertDismissal::new(&page);
        assert_eq!(dismissal.remove(), AlertPhase::Pending);
        assert!(page.alert(4).is_some());
    }
}
