//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `header` is the only stateful component; `subjects_section` is a static
//! rendering of `content::subjects`.

pub mod header;
pub mod subjects_section;
