use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::Response;
use crate::error::Error;

/// Entry type reported by a file listing. The listing reports type
/// code 1 for regular files, every other code is a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Dir,
}

impl FileType {
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            1 => Self::File,
            _ => Self::Dir,
        }
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }

    #[must_use]
    pub const fn is_dir(&self) -> bool {
        matches!(self, Self::Dir)
    }
}

/// One normalized entry of a channel file listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    pub path: String,
    pub size: u64,
    /// Modification time as unix seconds, as reported by the server.
    pub datetime: u64,
    #[serde(rename = "type")]
    pub kind: FileType,
}

impl FileEntry {
    /// Modification time of the entry.
    pub fn modified(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.datetime as i64, 0)
    }

    /// Normalizes a listing reply into its entries.
    ///
    /// A single entry arrives as plain scalar fields, several entries as
    /// parallel lists sharing one index. The shape is decided once from
    /// the `name` field; fields the server sent only once (usually
    /// `path`) apply to every entry.
    pub(crate) fn entries_from(response: &Response) -> Result<Vec<Self>, Error> {
        let names = response.get("name").ok_or(Error::MissingField("name"))?;

        (0..names.len())
            .map(|i| {
                Ok(Self {
                    name: indexed(response, "name", i)?.to_owned(),
                    path: indexed(response, "path", i)?.to_owned(),
                    size: parse(indexed(response, "size", i)?, "size")?,
                    datetime: parse(indexed(response, "datetime", i)?, "datetime")?,
                    kind: FileType::from_code(parse(indexed(response, "type", i)?, "type")?),
                })
            })
            .collect()
    }
}

fn indexed<'a>(response: &'a Response, key: &'static str, index: usize) -> Result<&'a str, Error> {
    response
        .get(key)
        .ok_or(Error::MissingField(key))?
        .index(index)
        .ok_or(Error::MissingEntry(key, index))
}

fn parse<T>(raw: &str, key: &'static str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.parse()
        .map_err(|err| Error::MalformedField(key, format!("{err}")))
}
