//! SPDX value types
//!
//! Plain data carried out of a scan. Nothing in here validates SPDX
//! semantics; a tag is whatever key/value pair a matching line held.

pub mod tag;

pub use tag::Tag;
