//! The Alcove web application: session guard, page handlers, templates, and
//! the local document store backing the upload flow.

pub mod auth;
pub mod db;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod templates;
