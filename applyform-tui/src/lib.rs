//! Terminal front-end for the job application form.

pub mod app;
pub mod error;
pub mod event;
pub mod focus;
pub mod paths;
pub mod render;
pub mod settings;
pub mod terminal;
pub mod text;
pub mod widgets;

pub use app::{Flow, FormApp, Screen};
pub use error::TuiError;
pub use terminal::Terminal;
