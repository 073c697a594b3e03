use std::sync::Arc;

use super::error::Error;
use crate::protocol::{Command, Response};

/// Handle to an established ServerQuery control connection. This is `async_trait`
///
/// The connection is owned by the caller; this crate only issues
/// commands through it. Command/response pairing, escaping and
/// pipelining discipline are the implementation's concern.
#[async_trait]
pub trait Query: Send + Sync {
    type Error: Into<Error> + Send;

    /// Sends one command and resolves with the parsed reply.
    async fn send(&self, command: Command) -> Result<Response, Self::Error>;

    /// Host the control connection reached the server at, reused for
    /// data connections.
    fn host(&self) -> &str;
}

#[async_trait]
impl<Q: Query + ?Sized> Query for Arc<Q> {
    type Error = Q::Error;

    async fn send(&self, command: Command) -> Result<Response, Self::Error> {
        (**self).send(command).await
    }

    fn host(&self) -> &str {
        (**self).host()
    }
}
