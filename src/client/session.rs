use bytes::Bytes;
use tokio::{io::AsyncWriteExt, net::TcpStream};

use super::{
    error::Error,
    fs::{Download, ReadDir},
    Query,
};
use crate::{
    error,
    protocol::{
        Command, FileEntry, Response, FT_CREATE_DIR, FT_DELETE_FILE, FT_GET_FILE_INFO,
        FT_GET_FILE_LIST, FT_INIT_DOWNLOAD, FT_INIT_UPLOAD, FT_LIST, FT_RENAME_FILE,
    },
    utils::generate_transfer_id,
};

pub type FtResult<T> = Result<T, Error>;

/// Options accepted by [`FileTransferSession::upload`].
///
/// Set fields override the command defaults. `extra` carries raw
/// protocol fields not otherwise modeled and is applied last, so its
/// pairs win over everything else.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    pub channel_password: Option<String>,
    pub overwrite: Option<bool>,
    pub resume: Option<bool>,
    pub extra: Vec<(String, String)>,
}

/// Options accepted by [`FileTransferSession::download`].
#[derive(Debug, Clone, Default)]
pub struct DownloadOptions {
    pub channel_password: Option<String>,
    pub seek_position: Option<u64>,
    pub extra: Vec<(String, String)>,
}

/// Options accepted by [`FileTransferSession::rename`].
///
/// `target_channel` and `target_channel_password` move the file into
/// another channel while renaming it.
#[derive(Debug, Clone, Default)]
pub struct RenameOptions {
    pub channel_password: Option<String>,
    pub target_channel: Option<u64>,
    pub target_channel_password: Option<String>,
    pub extra: Vec<(String, String)>,
}

/// High-level wrapper around the file management commands of an
/// established ServerQuery connection.
///
/// Every operation issues one command through the wrapped [`Query`];
/// upload and download additionally open their own data connection to
/// the port the server advertises. A reply with a non-zero status code
/// fails the whole operation with [`Error::Status`].
pub struct FileTransferSession<Q> {
    query: Q,
}

impl<Q: Query> FileTransferSession<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    /// Returns the wrapped control connection.
    pub fn query(&self) -> &Q {
        &self.query
    }

    pub fn into_inner(self) -> Q {
        self.query
    }

    /// Uploads `data` as `name` into a channel.
    ///
    /// Resolves once the payload has been handed to the data connection;
    /// the server acknowledges storage only by closing it without error.
    /// The declared `size` is not cross-checked against the bytes
    /// actually written.
    pub async fn upload(
        &self,
        cid: u64,
        name: &str,
        data: impl Into<Bytes> + Send,
        options: UploadOptions,
    ) -> FtResult<()> {
        let data = data.into();

        let mut command = Command::new(FT_INIT_UPLOAD)
            .arg("clientftfid", generate_transfer_id())
            .arg("name", name)
            .arg("cid", cid)
            .arg("cpw", "")
            .arg("size", data.len())
            .arg("overwrite", 0)
            .arg("resume", 0);

        if let Some(cpw) = options.channel_password {
            command.set("cpw", cpw);
        }
        if let Some(overwrite) = options.overwrite {
            command.set("overwrite", u8::from(overwrite));
        }
        if let Some(resume) = options.resume {
            command.set("resume", u8::from(resume));
        }
        for (key, value) in options.extra {
            command.set(key, value);
        }

        let response = self.send(command).await?;
        let mut stream = self.open_data_connection(&response).await?;

        stream.write_all(&data).await?;
        stream.flush().await?;

        Ok(())
    }

    /// Starts a download and returns the data connection to read the
    /// file from.
    ///
    /// The stream is handed over right after the key handshake; this
    /// session never reads from it. The caller owns it from here on and
    /// reads until the server closes its side.
    pub async fn download(
        &self,
        cid: u64,
        name: &str,
        options: DownloadOptions,
    ) -> FtResult<Download> {
        let mut command = Command::new(FT_INIT_DOWNLOAD)
            .arg("clientftfid", generate_transfer_id())
            .arg("name", name)
            .arg("cid", cid)
            .arg("cpw", "")
            .arg("seekpos", 0);

        if let Some(cpw) = options.channel_password {
            command.set("cpw", cpw);
        }
        if let Some(seekpos) = options.seek_position {
            command.set("seekpos", seekpos);
        }
        for (key, value) in options.extra {
            command.set(key, value);
        }

        let response = self.send(command).await?;
        let stream = self.open_data_connection(&response).await?;

        Ok(Download::new(stream))
    }

    /// List of currently running file transfers, as reported by the
    /// server. The reply is returned unmodified.
    pub async fn current_transfers(&self) -> FtResult<Response> {
        self.send(Command::new(FT_LIST)).await
    }

    /// Returns the entries of a channel directory, in server order.
    pub async fn read_dir(
        &self,
        cid: u64,
        path: &str,
        channel_password: Option<&str>,
    ) -> FtResult<ReadDir> {
        let response = self
            .send(
                Command::new(FT_GET_FILE_LIST)
                    .arg("cid", cid)
                    .arg("cpw", channel_password.unwrap_or(""))
                    .arg("path", path),
            )
            .await?;

        let entries = FileEntry::entries_from(&response)?;

        Ok(ReadDir {
            entries: entries.into(),
        })
    }

    /// Queries metadata of a single file. The reply is returned
    /// unmodified.
    pub async fn file_info(
        &self,
        cid: u64,
        name: &str,
        channel_password: Option<&str>,
    ) -> FtResult<Response> {
        self.send(
            Command::new(FT_GET_FILE_INFO)
                .arg("cid", cid)
                .arg("name", name)
                .arg("cpw", channel_password.unwrap_or("")),
        )
        .await
    }

    /// Removes a file or directory from a channel.
    pub async fn remove_file(
        &self,
        cid: u64,
        name: &str,
        channel_password: Option<&str>,
    ) -> FtResult<Response> {
        self.send(
            Command::new(FT_DELETE_FILE)
                .arg("cid", cid)
                .arg("name", name)
                .arg("cpw", channel_password.unwrap_or("")),
        )
        .await
    }

    /// Creates a new directory in a channel.
    pub async fn create_dir(
        &self,
        cid: u64,
        dirname: &str,
        channel_password: Option<&str>,
    ) -> FtResult<Response> {
        self.send(
            Command::new(FT_CREATE_DIR)
                .arg("cid", cid)
                .arg("dirname", dirname)
                .arg("cpw", channel_password.unwrap_or("")),
        )
        .await
    }

    /// Renames a file, or moves it into another channel when the
    /// options name a target channel.
    pub async fn rename(
        &self,
        cid: u64,
        oldname: &str,
        newname: &str,
        options: RenameOptions,
    ) -> FtResult<Response> {
        let mut command = Command::new(FT_RENAME_FILE)
            .arg("cid", cid)
            .arg("oldname", oldname)
            .arg("newname", newname)
            .arg("cpw", "");

        if let Some(cpw) = options.channel_password {
            command.set("cpw", cpw);
        }
        if let Some(tcid) = options.target_channel {
            command.set("tcid", tcid);
        }
        if let Some(tcpw) = options.target_channel_password {
            command.set("tcpw", tcpw);
        }
        for (key, value) in options.extra {
            command.set(key, value);
        }

        self.send(command).await
    }

    async fn send(&self, command: Command) -> FtResult<Response> {
        let response = self.query.send(command).await.map_err(Into::into)?;

        if response.status.is_ok() {
            Ok(response)
        } else {
            Err(Error::Status(response.status))
        }
    }

    /// Opens the raw data connection advertised by an init reply and
    /// authorizes it by writing the transfer key first.
    async fn open_data_connection(&self, response: &Response) -> FtResult<TcpStream> {
        let port: u16 = response.get_parsed("port")?;
        let key = response
            .get_str("ftkey")
            .ok_or(error::Error::MissingField("ftkey"))?;

        debug!(
            "opening data connection to {}:{}",
            self.query.host(),
            port
        );

        let mut stream = TcpStream::connect((self.query.host(), port)).await?;
        stream.write_all(key.as_bytes()).await?;

        Ok(stream)
    }
}
