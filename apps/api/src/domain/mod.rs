// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod bookmark;
pub mod errors;
pub mod repositories;
pub mod user;
