//! Status bar widgets

mod sections_menu;
mod status_bar;
mod utility_cluster;

pub use status_bar::StatusBar;
