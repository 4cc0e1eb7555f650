use std::error::Error;
use std::fmt;

/// Alias for `Result` with the crate-wide error type preselected.
pub type AnnotationResult<T> = Result<T, AnnotationError>;

// ------------------------------ ERROR DEFINITIONS & IMPLEMENTATIONS -------------------------------------------------------------

#[derive(Debug)]
pub enum AnnotationError {
    /// A recognized layer key carried a value its grammar could not parse. Fatal to decoding that
    /// token. Unrecognized layer keys, in contrast, are silently discarded and never raise this.
    /// Holds the layer key, the offending value and a contextual message.
    MalformedLayerValue(&'static str, String, &'static str),
    /// An operation required a layer that is not present on the word at the given index.
    /// Holds the layer key, the word index and a contextual message.
    AbsentLayer(&'static str, usize, &'static str),
    /// An index beyond the number of available items was passed to a mutating operation.
    /// Holds the index, the item count and a contextual message.
    IndexOutOfRange(usize, usize, &'static str),
    /// Two corpora with different sentence counts were paired for comparison. Holds both counts.
    CorpusMismatch(usize, usize),
    /// Wraps an I/O error, the filename involved and a contextual message.
    IOError(std::io::Error, String, &'static str),
    /// Wraps a JSON (de)serialization error, the filename involved and a contextual message.
    JsonError(
        serde_path_to_error::Error<serde_json::Error>,
        String,
        &'static str,
    ),
    SerializationError(String),
    OtherError(&'static str),
}

impl From<&AnnotationError> for String {
    /// Returns the error message as a String
    fn from(error: &AnnotationError) -> String {
        match error {
            AnnotationError::MalformedLayerValue(layer, value, msg) => format!(
                "MalformedLayerValue: Value \"{}\" is invalid for layer {} ({})",
                value, layer, msg
            ),
            AnnotationError::AbsentLayer(layer, index, msg) => format!(
                "AbsentLayer: Word {} carries no {} layer ({})",
                index, layer, msg
            ),
            AnnotationError::IndexOutOfRange(index, count, msg) => format!(
                "IndexOutOfRange: Index {} is out of range for {} items ({})",
                index, count, msg
            ),
            AnnotationError::CorpusMismatch(count, othercount) => format!(
                "CorpusMismatch: Corpora have {} and {} sentences, positional pairing needs equal counts",
                count, othercount
            ),
            AnnotationError::IOError(err, filename, msg) => {
                format!("IOError: {} -> {} ({})", filename, err, msg)
            }
            AnnotationError::JsonError(err, filename, msg) => {
                format!("JsonError: {} -> {} ({})", filename, err, msg)
            }
            AnnotationError::SerializationError(msg) => format!("SerializationError: {}", msg),
            AnnotationError::OtherError(msg) => format!("OtherError: {}", msg),
        }
    }
}

impl fmt::Display for AnnotationError {
    /// Formats the error message for printing
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let errmsg: String = String::from(self);
        write!(f, "[AnnotationError] {}", errmsg)
    }
}

impl Error for AnnotationError {}
