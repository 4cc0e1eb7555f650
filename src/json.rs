/*
    Annosent Library (multi-layer sentence annotation)

        Licensed under the GNU General Public License v3
*/

//! This module contains the [`ToJson`] trait used to export annotated structures as
//! JSON. The canonical interchange format for annotation content remains the bracketed
//! token codec; the JSON view is a one-way export for downstream tooling.

use crate::config::Config;
use crate::error::{AnnotationError, AnnotationResult};
use crate::file::open_file_writer;
use crate::types::*;

pub trait ToJson
where
    Self: TypeInfo + serde::Serialize,
{
    /// Writes a JSON serialisation to any writer
    /// Lower-level function
    fn to_json_writer<W>(&self, writer: W, compact: bool) -> AnnotationResult<()>
    where
        W: std::io::Write,
    {
        match compact {
            false => serde_json::to_writer_pretty(writer, &self).map_err(|e| {
                AnnotationError::SerializationError(format!(
                    "Writing {} to writer: {}",
                    Self::typeinfo(),
                    e
                ))
            }),
            true => serde_json::to_writer(writer, &self).map_err(|e| {
                AnnotationError::SerializationError(format!(
                    "Writing {} to writer: {}",
                    Self::typeinfo(),
                    e
                ))
            }),
        }
    }

    /// Serializes this structure to one JSON string.
    fn to_json_string(&self, compact: bool) -> AnnotationResult<String> {
        match compact {
            false => serde_json::to_string_pretty(&self).map_err(|e| {
                AnnotationError::SerializationError(format!(
                    "Writing {} to string: {}",
                    Self::typeinfo(),
                    e
                ))
            }),
            true => serde_json::to_string(&self).map_err(|e| {
                AnnotationError::SerializationError(format!(
                    "Writing {} to string: {}",
                    Self::typeinfo(),
                    e
                ))
            }),
        }
    }

    /// Writes this structure to a JSON file
    fn to_json_file(&self, filename: &str, config: &Config) -> AnnotationResult<()> {
        debug(config, || {
            format!("{}.to_json_file: filename={:?}", Self::typeinfo(), filename)
        });
        let writer = open_file_writer(filename, config)?;
        self.to_json_writer(writer, false)
    }
}
