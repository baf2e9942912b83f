use std::{
    ffi::{OsStr, OsString},
    fmt,
    str::FromStr,
};

use crate::errors::{FileManipError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Reverse,
    Copy,
    DuplicateContents,
    ReplaceString,
}

impl OperationKind {
    /// Every operation, in declaration order.
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Reverse,
        OperationKind::Copy,
        OperationKind::DuplicateContents,
        OperationKind::ReplaceString,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Reverse => "reverse",
            OperationKind::Copy => "copy",
            OperationKind::DuplicateContents => "duplicate_contents",
            OperationKind::ReplaceString => "replace_string",
        }
    }

    /// Command names joined with `", "`, as shown in the unknown-command diagnostic.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = FileManipError;

    fn from_str(token: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == token)
            .ok_or_else(|| FileManipError::unknown_command(token))
    }
}

const HELP: &str = "Usage: filemanip <command> [args...]

Commands:
  reverse <input_path> <output_path>
  copy <input_path> <output_path>
  duplicate_contents <input_path> <n>
  replace_string <input_path> <needle> <new_string>
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub command: OperationKind,
    pub command_args: Vec<OsString>,
}

impl CommandLineConfig {
    /// Resolves the full argument vector, program name first. Only the command
    /// token has to be UTF-8; arity of the remaining arguments is left to the
    /// executor.
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Result<Self> {
        let mut iter = args.iter().map(|arg| arg.as_ref()).skip(1);
        let token = iter.next().ok_or(FileManipError::MissingCommand)?;
        let command = token
            .to_str()
            .ok_or_else(|| FileManipError::unknown_command(token.to_string_lossy()))?
            .parse::<OperationKind>()?;
        let command_args = iter.map(OsStr::to_os_string).collect();
        tracing::debug!(%command, "resolved command");
        Ok(Self {
            command,
            command_args,
        })
    }

    pub fn is_help_request<S: AsRef<OsStr>>(args: &[S]) -> bool {
        args.get(1)
            .is_some_and(|arg| arg.as_ref() == "-h" || arg.as_ref() == "--help")
    }

    pub fn help() -> &'static str {
        HELP
    }
}
