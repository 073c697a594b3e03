mod command;
mod file;
mod response;

pub use self::{
    command::Command,
    file::{FileEntry, FileType},
    response::{Response, Status, Value},
};

pub const FT_INIT_UPLOAD: &str = "ftinitupload";
pub const FT_INIT_DOWNLOAD: &str = "ftinitdownload";
pub const FT_LIST: &str = "ftlist";
pub const FT_GET_FILE_LIST: &str = "ftgetfilelist";
pub const FT_GET_FILE_INFO: &str = "ftgetfileinfo";
pub const FT_DELETE_FILE: &str = "ftdeletefile";
pub const FT_CREATE_DIR: &str = "ftcreatedir";
pub const FT_RENAME_FILE: &str = "ftrenamefile";
