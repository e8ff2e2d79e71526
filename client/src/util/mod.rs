//! Browser-facing helpers used by the header.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component and
//! state logic so the state machine stays testable off the browser.

pub mod scroll;
pub mod theme;
