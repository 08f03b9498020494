//! Location of the sample patient records document.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use url::Url;

/// Errors parsing a records location.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordSourceError {
    /// The location looked like a URL but did not parse.
    #[error("invalid records URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A `file://` URL that does not name a local path.
    #[error("not a local file URL: {0}")]
    NotAFilePath(String),
}

/// Where patient records are read from.
///
/// `http://` and `https://` locations are fetched; `file://` URLs and bare
/// paths are read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// Remote JSON document.
    Http(Url),
    /// Local JSON file.
    File(PathBuf),
}

impl FromStr for RecordSource {
    type Err = RecordSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            return Ok(Self::Http(Url::parse(s)?));
        }
        if s.starts_with("file://") {
            let url = Url::parse(s)?;
            return url
                .to_file_path()
                .map(Self::File)
                .map_err(|()| RecordSourceError::NotAFilePath(s.to_string()));
        }
        Ok(Self::File(PathBuf::from(s)))
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
