#[macro_use]
extern crate log;
#[macro_use]
extern crate async_trait;

pub mod client;
pub mod error;
/// Protocol implementation
pub mod protocol;
mod utils;

pub use client::{FileTransferSession, Query};
pub use utils::generate_transfer_id;
