use std::{
    io,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::{
    io::{AsyncRead, ReadBuf},
    net::TcpStream,
};

/// An authorized data connection streaming the requested file.
///
/// The session hands it over right after writing the transfer key and
/// never reads from it. The server signals the end of the file by
/// closing its side; dropping the stream closes ours.
#[derive(Debug)]
pub struct Download {
    stream: TcpStream,
}

impl Download {
    pub(crate) fn new(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Returns the underlying connection.
    pub fn into_inner(self) -> TcpStream {
        self.stream
    }
}

impl AsyncRead for Download {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.stream).poll_read(cx, buf)
    }
}
