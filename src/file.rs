/*
    Annosent Library (multi-layer sentence annotation)

        Licensed under the GNU General Public License v3
*/

//! This module contains some common helper functions for dealing with file I/O

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{AnnotationError, AnnotationResult};
use crate::types::debug;

/// Get a file for reading or writing, this resolves relative files more intelligently
pub(crate) fn get_filepath(
    filename: &str,
    workdir: Option<&Path>,
) -> AnnotationResult<PathBuf> {
    let path = if let Some(stripped) = filename.strip_prefix("file://") {
        PathBuf::from(stripped)
    } else {
        PathBuf::from(filename)
    };
    if path.is_absolute() {
        Ok(path)
    } else {
        //check whether we can find one in our workdir first
        if let Some(workdir) = workdir {
            let path = workdir.join(&path);
            if path.is_file() {
                //should also work with symlinks
                return Ok(path);
            }
        }

        //final fallback is simply relative to the current working directory
        // we don't test for existence here
        Ok(path)
    }
}

/// Auxiliary function to help open files
pub(crate) fn open_file(filename: &str, config: &Config) -> AnnotationResult<File> {
    let found_filename = get_filepath(filename, config.workdir())?;
    debug(config, || format!("open_file: {:?}", found_filename));
    File::open(found_filename.as_path()).map_err(|e| {
        AnnotationError::IOError(
            e,
            found_filename.to_string_lossy().into_owned(),
            "Opening file for reading failed",
        )
    })
}

/// Auxiliary function to help open files
pub(crate) fn open_file_reader(
    filename: &str,
    config: &Config,
) -> AnnotationResult<BufReader<File>> {
    Ok(BufReader::new(open_file(filename, config)?))
}

/// Auxiliary function to help create files
pub(crate) fn create_file(filename: &str, config: &Config) -> AnnotationResult<File> {
    let found_filename = get_filepath(filename, config.workdir())?;
    debug(config, || format!("create_file: {:?}", found_filename));
    File::create(found_filename.as_path()).map_err(|e| {
        AnnotationError::IOError(
            e,
            found_filename.to_string_lossy().into_owned(),
            "Opening file for writing failed",
        )
    })
}

/// Auxiliary function to help write files
pub(crate) fn open_file_writer(
    filename: &str,
    config: &Config,
) -> AnnotationResult<BufWriter<File>> {
    Ok(BufWriter::new(create_file(filename, config)?))
}
