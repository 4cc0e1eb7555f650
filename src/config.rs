use sealed::sealed;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AnnotationError, AnnotationResult};
use crate::file::open_file_reader;
use crate::json::ToJson;
use crate::types::*;

pub trait Configurable: Sized {
    //// Obtain the configuration
    fn config(&self) -> &Config;

    //// Obtain the configuration mutably
    fn config_mut(&mut self) -> &mut Config;

    ///Builder pattern to associate a configuration
    fn with_config(mut self, config: Config) -> Self {
        self.set_config(config);
        self
    }

    ///Setter to associate a configuration
    fn set_config(&mut self, config: Config) -> &mut Self;
}

/// This holds the configuration for loading and serializing annotated sentences and corpora.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Debug mode
    pub(crate) debug: bool,

    /// The working directory, used to resolve relative filenames
    pub(crate) workdir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            workdir: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable debug mode. In debug mode, verbose output will be printed to standard error output
    pub fn with_debug(mut self, value: bool) -> Self {
        self.debug = value;
        self
    }

    /// Is debug mode enabled or not?
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Sets the working directory against which relative filenames are resolved
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }

    ///  Return the working directory, if set
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_ref().map(|x| x.as_path())
    }

    /// Loads configuration from a JSON file
    pub fn from_file(filename: &str) -> AnnotationResult<Self> {
        let reader = open_file_reader(filename, &Config::default())?;
        let deserializer = &mut serde_json::Deserializer::from_reader(reader);
        let result: Result<Self, _> = serde_path_to_error::deserialize(deserializer);
        result.map_err(|e| {
            AnnotationError::JsonError(e, filename.to_string(), "Reading config from file")
        })
    }
}

#[sealed]
impl TypeInfo for Config {
    fn typeinfo() -> Type {
        Type::Config
    }
}

impl ToJson for Config {}
