// Request extractors shared by handlers

pub mod auth;
pub mod validation;

pub use auth::JwtAuth;
pub use validation::ValidatedJson;
