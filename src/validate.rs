use std::{
    ffi::OsStr,
    num::{IntErrorKind, NonZeroUsize},
    path::Path,
};

use crate::errors::{FileManipError, Result};

pub fn check_args_count<T>(args: &[T], expected: usize) -> Result<()> {
    if args.len() < expected {
        return Err(FileManipError::MissingArgument);
    }
    Ok(())
}

/// Every path must name an existing regular file; the first one that does not
/// is reported.
pub fn check_files_exist<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(FileManipError::invalid_file_path(path));
        }
        tracing::debug!(path = %path.display(), "input file exists");
    }
    Ok(())
}

pub fn parse_positive_number(value: &OsStr, name: &str) -> Result<NonZeroUsize> {
    let value = value
        .to_str()
        .ok_or_else(|| FileManipError::invalid_number(name))?;
    value.parse::<NonZeroUsize>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => FileManipError::too_large(name),
        _ => FileManipError::invalid_number(name),
    })
}

/// Text arguments such as the needle must be valid UTF-8 to be searched for.
pub fn text_argument<'a>(value: &'a OsStr, name: &str) -> Result<&'a str> {
    value
        .to_str()
        .ok_or_else(|| FileManipError::non_utf8_argument(name))
}
