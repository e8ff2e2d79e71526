//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Only the navigation header carries state; everything else on the page is a
//! static rendering of `content`.

pub mod nav;
