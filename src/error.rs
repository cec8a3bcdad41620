use std::io;
use std::path::PathBuf;

use strum_macros::{Display, IntoStaticStr};
use thiserror::Error;

/// Process exit codes reported by the command-line tool.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, IntoStaticStr)]
pub enum ExitCode {
    /// The run completed.
    Success = 0,
    /// The directory of the input or output file does not exist.
    DirectoryNotFound = 1,
    /// The input file does not exist.
    FileNotFound = 2,
    /// No installed voice matches the requested language and gender.
    CannotSetLanguage = 3,
    /// The engine rejected the SSML document, or the document is not valid UTF-8.
    SsmlFormatError = 4,
    /// The command line is invalid or lacks a required argument.
    CommandLineError = 5,
    /// Help or version information was requested.
    VersionOrHelpRequired = 6,
    /// The speech engine is unavailable or failed.
    EngineError = 7,
}

impl ExitCode {
    /// Returns the numeric code passed to the operating system.
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// The error type returned by this crate's functions and methods.
#[derive(Error, Debug)]
pub enum Error {
    /// No input file was given, and the tool cannot read SSML from standard input.
    #[error("missing input file; SSML cannot be read from standard input")]
    MissingInputFile,

    /// Recording was requested without an output file, and the tool cannot write audio to
    /// standard output.
    #[error("missing output file; audio cannot be written to standard output")]
    MissingOutputFile,

    /// The language code is not a two-letter code.
    #[error("invalid language code '{0}'; expected a two-letter code such as 'en'")]
    InvalidLanguage(String),

    /// The directory containing the given path does not exist.
    #[error("could not find a part of the path '{}'", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The given file does not exist.
    #[error("could not find file '{}'", .0.display())]
    FileNotFound(PathBuf),

    /// The file could not be read or inspected.
    #[error("I/O error on '{}': {source}", path.display())]
    File {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The SSML document is not valid UTF-8.
    #[error("'{}' is not valid UTF-8: {source}", path.display())]
    InvalidEncoding {
        /// The offending file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The engine rejected the SSML document.
    #[error("invalid SSML: {0}")]
    SsmlFormat(String),

    /// No installed voice speaks the requested language with the requested gender.
    #[error("cannot set language of voice to {0}")]
    CannotSetLanguage(String),

    /// No speech engine is available on this platform.
    #[error("no speech engine is available on this platform")]
    EngineUnavailable,

    /// The speech engine failed.
    #[error("speech engine error: {0}")]
    Engine(String),

    /// Any other I/O failure, such as writing to the console.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns the exit code the tool reports for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingInputFile | Self::MissingOutputFile | Self::InvalidLanguage(_) => {
                ExitCode::CommandLineError
            }
            Self::DirectoryNotFound(_) => ExitCode::DirectoryNotFound,
            Self::FileNotFound(_) => ExitCode::FileNotFound,
            Self::InvalidEncoding { .. } | Self::SsmlFormat(_) => ExitCode::SsmlFormatError,
            Self::CannotSetLanguage(_) => ExitCode::CannotSetLanguage,
            Self::File { .. } | Self::EngineUnavailable | Self::Engine(_) | Self::Io(_) => {
                ExitCode::EngineError
            }
        }
    }
}

#[cfg(windows)]
impl From<windows::core::Error> for Error {
    fn from(source: windows::core::Error) -> Self {
        Self::Engine(source.to_string())
    }
}

/// The type returned by this crate's functions and methods.
pub type Result<T> = std::result::Result<T, Error>;
