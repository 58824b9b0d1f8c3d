// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// The record kind named in a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Person,
    Family,
    Event,
    Citation,
    Media,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Person => "person",
            RecordKind::Family => "family",
            RecordKind::Event => "event",
            RecordKind::Citation => "citation",
            RecordKind::Media => "media",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The tree file could not be parsed.
    TreeFile(String),
    /// A handle did not resolve to a record.
    ///
    /// For references inside a tree this indicates an inconsistent database
    /// and is surfaced as-is rather than skipped, so a broken tree fails the
    /// same way every run.
    NotFound {
        kind: RecordKind,
        handle: String,
    },
}

impl Error {
    /// Builds a `NotFound` for the given kind and handle string.
    pub fn not_found(kind: RecordKind, handle: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            handle: handle.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::TreeFile(e) => write!(f, "Tree File Error: {}", e),
            Error::NotFound { kind, handle } => {
                write!(f, "No {} record for handle '{}'", kind, handle)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::TreeFile(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn not_found_names_kind_and_handle() {
        let err = Error::not_found(RecordKind::Media, "M7");
        assert_eq!(format!("{}", err), "No media record for handle 'M7'");
    }

    #[test]
    fn from_toml_error_produces_tree_file_variant() {
        let parse_err = toml::from_str::<toml::Value>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::TreeFile(_)));
    }
}
