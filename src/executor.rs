use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    command::OperationKind,
    errors::{FileManipError, Result},
    transform,
    validate::{check_args_count, check_files_exist, parse_positive_number, text_argument},
};

/// The file an operation wrote and how many bytes went into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OperationKind,
    pub written: PathBuf,
    pub bytes: usize,
}

pub fn execute<S: AsRef<OsStr>>(kind: OperationKind, args: &[S]) -> Result<Outcome> {
    let span = tracing::debug_span!("execute", command = %kind);
    let _guard = span.enter();
    match kind {
        OperationKind::Reverse => reverse(args),
        OperationKind::Copy => copy(args),
        OperationKind::DuplicateContents => duplicate_contents(args),
        OperationKind::ReplaceString => replace_string(args),
    }
}

pub fn reverse<S: AsRef<OsStr>>(args: &[S]) -> Result<Outcome> {
    check_args_count(args, 2)?;
    let (input_path, output_path) = (Path::new(&args[0]), Path::new(&args[1]));
    check_files_exist(&[input_path])?;
    let contents = read_contents(input_path)?;
    write_contents(
        OperationKind::Reverse,
        output_path,
        &transform::reverse_contents(&contents),
    )
}

pub fn copy<S: AsRef<OsStr>>(args: &[S]) -> Result<Outcome> {
    check_args_count(args, 2)?;
    let (input_path, output_path) = (Path::new(&args[0]), Path::new(&args[1]));
    check_files_exist(&[input_path])?;
    let contents = read_contents(input_path)?;
    write_contents(OperationKind::Copy, output_path, &contents)
}

pub fn duplicate_contents<S: AsRef<OsStr>>(args: &[S]) -> Result<Outcome> {
    check_args_count(args, 2)?;
    let input_path = Path::new(&args[0]);
    check_files_exist(&[input_path])?;
    let n = parse_positive_number(args[1].as_ref(), "n")?;
    let contents = read_contents(input_path)?;
    let duplicated =
        transform::duplicate_contents(&contents, n).ok_or_else(|| FileManipError::too_large("n"))?;
    write_contents(OperationKind::DuplicateContents, input_path, &duplicated)
}

pub fn replace_string<S: AsRef<OsStr>>(args: &[S]) -> Result<Outcome> {
    check_args_count(args, 3)?;
    let input_path = Path::new(&args[0]);
    check_files_exist(&[input_path])?;
    let needle = text_argument(args[1].as_ref(), "needle")?;
    let new_string = text_argument(args[2].as_ref(), "new_string")?;
    let contents = read_contents(input_path)?;
    write_contents(
        OperationKind::ReplaceString,
        input_path,
        &transform::replace_string(&contents, needle, new_string),
    )
}

fn read_contents(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|err| FileManipError::read(path, err))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read input");
    Ok(contents)
}

fn write_contents(kind: OperationKind, path: &Path, contents: &str) -> Result<Outcome> {
    fs::write(path, contents).map_err(|err| FileManipError::write(path, err))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(Outcome {
        kind,
        written: path.to_path_buf(),
        bytes: contents.len(),
    })
}
