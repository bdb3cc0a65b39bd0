//! Typed schemas for the Alfresco v1 REST API responses, plus the local
//! `Document` record used by the upload flow.
//!
//! Decoding goes through these structs instead of dynamic key traversal, so
//! an unexpected payload shape fails with a decode error rather than a
//! missing-key lookup at render time.

mod document;
mod group;
mod list;
mod node;
mod person;
mod site;
mod tag;
mod ticket;

pub use document::Document;
pub use group::Group;
pub use list::{Entry, EntryList, ListBody, Pagination};
pub use node::{Node, NodeContent};
pub use person::Person;
pub use site::Site;
pub use tag::Tag;
pub use ticket::Ticket;
