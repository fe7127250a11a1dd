//! DOM-free page behaviours, testable without a browser.
pub mod alert;
pub mod modal;
pub mod page;
pub mod theme;
