use sealed::sealed;
use std::fmt;

use crate::config::Config;

/// The different types of structures this crate models. Used for introspection
/// in (de)serialization messages and the debug channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    AnnotatedCorpus,
    AnnotatedSentence,
    AnnotatedPhrase,
    AnnotatedWord,
    Config,
}

impl Type {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AnnotatedCorpus => "AnnotatedCorpus",
            Self::AnnotatedSentence => "AnnotatedSentence",
            Self::AnnotatedPhrase => "AnnotatedPhrase",
            Self::AnnotatedWord => "AnnotatedWord",
            Self::Config => "Config",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps a structure to its [`Type`].
/// This is a sealed trait, not implementable outside this crate.
#[sealed(pub(crate))]
pub trait TypeInfo {
    fn typeinfo() -> Type;
}

/// Prints a verbose message to standard error output, but only when debug mode is enabled in the
/// configuration. The message is constructed lazily so the closure costs nothing when disabled.
pub(crate) fn debug<F>(config: &Config, message_func: F)
where
    F: FnOnce() -> String,
{
    if config.debug() {
        eprintln!("[annosent debug] {}", message_func());
    }
}
