//! Domain services.
//!
//! - [`ActorService`] -- actor CRUD with existence checks and validation.
//! - [`MovieService`] -- movie CRUD, cast management and listing.

pub mod actor;
pub mod movie;

pub use actor::ActorService;
pub use movie::MovieService;
