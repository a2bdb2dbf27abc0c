//! Shared UI crate for Roastery. Cross-platform components and views live here.

pub mod core;
pub mod roaster;
pub mod views;

pub mod components {
    // Session-aware application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
