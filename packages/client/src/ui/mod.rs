//! Terminal front end: router, shell and views.

pub mod app;
pub mod command;
pub mod info;
pub mod join;
pub mod landing;
pub mod player;
pub mod room_view;
pub mod router;
pub mod settings_form;

pub use app::{App, Flow, View};
pub use router::{Navigator, Route};
