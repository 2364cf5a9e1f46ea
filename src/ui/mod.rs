//! Terminal front end: event loop, key routing and widgets.

pub mod app;
pub mod dialogs;
pub mod events;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod users_view;
