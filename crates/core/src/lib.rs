//! Cinema catalog domain layer.
//!
//! Entities, validation, the movie listing engine, persistence traits and
//! the actor/movie services. Nothing in this crate performs I/O directly;
//! storage is reached through the traits in [`store`].

pub mod actor;
pub mod error;
pub mod listing;
pub mod movie;
pub mod roles;
pub mod services;
pub mod store;
pub mod types;
pub mod user;
