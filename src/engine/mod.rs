//! The boundary between this crate and the platform speech engine.

use std::path::PathBuf;

use crate::audio::AudioFormat;
use crate::voice::{InstalledVoice, VoiceInfo};
use crate::Result;

#[cfg(windows)]
#[cfg_attr(docsrs, doc(cfg(windows)))]
pub mod sapi;

/// Specifies where the output of speech synthesis should go.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SpeechOutput {
    /// Output to the default audio device on the system
    DefaultDevice,
    /// Write a WAV file with the given format, replacing it if it exists
    WaveFile {
        /// Path of the file
        path: PathBuf,
        /// Format of the audio data
        format: AudioFormat,
    },
}

/// A speech synthesis engine.
///
/// All calls block until the engine is done.
pub trait SpeechEngine {
    /// Returns the installed voices, in the order the engine enumerates them. Every returned voice
    /// is enabled.
    fn installed_voices(&mut self) -> Result<Vec<InstalledVoice>>;

    /// Configures where subsequent speech is rendered.
    fn set_output(&mut self, output: SpeechOutput) -> Result<()>;

    /// Makes the given voice the default voice for subsequent speech.
    fn select_voice(&mut self, voice: &VoiceInfo) -> Result<()>;

    /// Renders the given SSML document, returning once the whole document has been spoken. When
    /// rendering to a WAV file, the file is complete and closed when this returns.
    ///
    /// An engine that rejects the document reports [`Error::SsmlFormat`](crate::Error::SsmlFormat).
    fn speak_ssml(&mut self, ssml: &str) -> Result<()>;
}
