// HTTP handlers grouped by resource

pub mod auth;
pub mod bookmarks;
pub mod users;
