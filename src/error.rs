//! Error enum
use std::path::PathBuf;
use std::string::FromUtf8Error;

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Io(std::io::Error),
    /// input path does not point to a file.
    NotFound(PathBuf),
    /// malformed JSON.
    Json(serde_json::Error),
    /// malformed CSV.
    Csv(csv::Error),
    /// file content is not valid UTF-8.
    Decode(FromUtf8Error),
    /// unexpected JSON shape (root rule or missing basket field).
    Schema(String),
    /// value shape does not match the declared save format.
    TypeMismatch(String),
    Custom(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<FromUtf8Error> for Error {
    fn from(e: FromUtf8Error) -> Error {
        Error::Decode(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
