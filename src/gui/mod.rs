//! GUI module for the graphical user interface

mod app;
mod feed;
mod layout;
mod theme;
mod title;
mod widgets;

pub use app::StatusbarApp;
pub use feed::Feed;
