//! Types handed to the caller by transfer operations.
//!
//! Listings come back as a plain iterator over the normalized entries,
//! downloads as the raw data connection wrapped into an async reader.

mod dir;
mod download;

pub use dir::ReadDir;
pub use download::Download;
