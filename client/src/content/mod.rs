//! Static page content shared by the header and the page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Section ids are the contract between header navigation and the rendered
//! sections: each nav entry targets an element whose `id` is a `SectionId`.

pub mod sections;
pub mod subjects;
