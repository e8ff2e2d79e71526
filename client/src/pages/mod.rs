//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes `components`; the site has a single landing page.

pub mod home;
