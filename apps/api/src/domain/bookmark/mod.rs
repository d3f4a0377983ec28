// Bookmark domain module

#![allow(clippy::module_inception)]

pub mod bookmark;

pub use bookmark::{Bookmark, BookmarkChanges};
