use std::{io, path::PathBuf};

use thiserror::Error;

use crate::command::OperationKind;

pub type Result<T> = std::result::Result<T, FileManipError>;

#[derive(Debug, Error)]
pub enum FileManipError {
    #[error("Please specify command type")]
    MissingCommand,
    #[error("Please specify one of the commands [{}]", OperationKind::names())]
    UnknownCommand(String),
    #[error("Missing argument")]
    MissingArgument,
    #[error("Invalid file path: {}", .0.display())]
    InvalidFilePath(PathBuf),
    #[error("{name} must be a positive number")]
    InvalidNumericArgument { name: String },
    #[error("{name} is too large for the file contents")]
    ContentTooLarge { name: String },
    #[error("{name} must be valid UTF-8 text")]
    NonUtf8Argument { name: String },
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileManipError {
    pub fn unknown_command<T: Into<String>>(token: T) -> Self {
        FileManipError::UnknownCommand(token.into())
    }

    pub fn invalid_file_path<T: Into<PathBuf>>(path: T) -> Self {
        FileManipError::InvalidFilePath(path.into())
    }

    pub fn invalid_number<T: Into<String>>(name: T) -> Self {
        FileManipError::InvalidNumericArgument { name: name.into() }
    }

    pub fn too_large<T: Into<String>>(name: T) -> Self {
        FileManipError::ContentTooLarge { name: name.into() }
    }

    pub fn non_utf8_argument<T: Into<String>>(name: T) -> Self {
        FileManipError::NonUtf8Argument { name: name.into() }
    }

    pub fn read<T: Into<PathBuf>>(path: T, source: io::Error) -> Self {
        FileManipError::Io {
            action: "read",
            path: path.into(),
            source,
        }
    }

    pub fn write<T: Into<PathBuf>>(path: T, source: io::Error) -> Self {
        FileManipError::Io {
            action: "write",
            path: path.into(),
            source,
        }
    }
}
