pub mod auth;
pub mod cli;
pub mod clipboard;
pub mod document;
pub mod editor;
pub mod error;
pub mod feedback;
pub mod hash;
pub mod model;
pub mod route;
pub mod session;
pub mod source;
pub mod state;
pub mod tui;
pub mod ui;
