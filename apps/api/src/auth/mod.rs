// Authentication primitives: password hashing and JWT handling

pub mod errors;
pub mod jwt;
pub mod password;

pub use errors::AuthError;
