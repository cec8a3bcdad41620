#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Speak or record SSML documents using the speech engine supplied by the operating system.
//!
//! # Overview
//!
//! The crate backs the `ssml-speak` command-line tool. It does not synthesize speech itself, nor
//! does it parse or validate SSML. Both are the responsibility of the platform engine, which on
//! Windows is Microsoft's Speech API (SAPI).
//!
//! The pieces fit together like this:
//!
//! * [config] turns command-line flags into a [`Config`](config::Config) and checks that the
//!   required file arguments are present.
//! * [app] drives a [`SpeechEngine`](engine::SpeechEngine): it sets the output (default audio
//!   device or a WAV file), optionally restricts the voices to a language and gender, reads the
//!   SSML document and speaks it.
//! * [voice] models the installed voices and implements the language/gender filter.
//! * [display] prints the metadata of the installed voices.
//!
//! # Engines
//!
//! The engine is hidden behind the [`SpeechEngine`](engine::SpeechEngine) trait. On Windows, the
//! [`SapiEngine`](engine::sapi::SapiEngine) implements it on top of SAPI. On other platforms there
//! is no engine, and the tool reports an engine error.

pub mod app;
pub mod audio;
pub mod config;
pub mod console;
pub mod display;
pub mod engine;
mod error;
pub mod ssml;
pub mod voice;

pub use error::{Error, ExitCode, Result};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
