// Repository ports (interfaces) for the domain
// Implementations live in infrastructure::repositories

pub mod bookmark_repository;
pub mod errors;
pub mod user_repository;

pub use bookmark_repository::BookmarkRepository;
pub use errors::RepositoryError;
pub use user_repository::UserRepository;
