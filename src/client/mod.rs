pub mod error;
pub mod fs;
mod query;
mod session;

pub use query::Query;
pub use session::{
    DownloadOptions, FileTransferSession, FtResult, RenameOptions, UploadOptions,
};
