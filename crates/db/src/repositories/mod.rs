pub mod actor_repo;
pub mod movie_repo;
pub mod user_repo;

pub use actor_repo::ActorRepo;
pub use movie_repo::MovieRepo;
pub use user_repo::UserRepo;
