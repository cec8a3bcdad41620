//! Command-line options and the configuration derived from them.

use std::path::PathBuf;

use clap::Parser;
use log::warn;

use crate::audio::{AudioFormat, SampleRate};
use crate::voice::VoiceGender;
use crate::{Error, Result};

/// Command-line options, exactly as given by the user.
#[derive(Parser, Debug, Clone)]
#[command(name = "ssml-speak")]
#[command(version = crate::VERSION)]
#[command(about = "Speak or record an SSML document using the system's speech engine")]
pub struct Options {
    /// Input SSML file to be processed
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Output audio file
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Recording mode: write the speech to the output file instead of the audio device
    #[arg(short = 'r', long = "recording")]
    pub recording: bool,

    /// Display information on available voices
    #[arg(short = 'd', long = "display_voices", visible_alias = "display-voices")]
    pub display_voices: bool,

    /// Set console output to verbose messages
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Only use voices speaking this two-letter language code, e.g. "en"
    #[arg(short = 'l', long = "language", value_name = "CODE", value_parser = parse_language)]
    pub language: Option<String>,

    /// Voice gender to use together with --language
    #[arg(short = 'g', long = "gender", value_name = "GENDER", default_value = "female")]
    pub gender: VoiceGender,

    /// Sample rate of the recorded WAV file, in Hz
    #[arg(
        long = "sample-rate",
        value_name = "HZ",
        default_value = "16000",
        value_parser = parse_sample_rate
    )]
    pub sample_rate: SampleRate,

    /// Exit without waiting for the ESC key
    #[arg(long = "no-wait")]
    pub no_wait: bool,
}

/// Accepts two ASCII letters and normalizes them to lowercase.
pub fn parse_language(code: &str) -> Result<String> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_lowercase())
    } else {
        Err(Error::InvalidLanguage(code.to_owned()))
    }
}

fn parse_sample_rate(hz: &str) -> std::result::Result<SampleRate, String> {
    let hz: u32 = hz.parse().map_err(|_| format!("'{}' is not a number", hz))?;
    SampleRate::try_from(hz).map_err(|err| err.to_string())
}

/// The configuration of a single run.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Config {
    /// SSML document to speak
    pub input_file: Option<PathBuf>,
    /// WAV file to record to
    pub output_file: Option<PathBuf>,
    /// Whether to record to `output_file` instead of playing on the default audio device
    pub recording: bool,
    /// Whether to list the installed voices instead of speaking
    pub display_voices: bool,
    /// Whether to print voice selection details
    pub verbose: bool,
    /// Two-letter code of the language the voice must speak
    pub language: Option<String>,
    /// Gender the voice must have when `language` is set
    pub gender: VoiceGender,
    /// Sample rate of the recording
    pub sample_rate: SampleRate,
    /// Whether to wait for the ESC key before exiting
    pub wait_for_key: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: None,
            output_file: None,
            recording: false,
            display_voices: false,
            verbose: false,
            language: None,
            gender: VoiceGender::Female,
            sample_rate: SampleRate::default(),
            wait_for_key: true,
        }
    }
}

impl From<Options> for Config {
    fn from(options: Options) -> Self {
        Self {
            input_file: options.input_file,
            output_file: options.output_file,
            recording: options.recording,
            display_voices: options.display_voices,
            verbose: options.verbose,
            language: options.language,
            gender: options.gender,
            sample_rate: options.sample_rate,
            wait_for_key: !options.no_wait,
        }
    }
}

impl Config {
    /// Checks that the arguments required by the selected mode are present.
    ///
    /// Listing voices needs no files. Otherwise an input file is required, and recording also
    /// requires an output file.
    pub fn validate(&self) -> Result<()> {
        if self.display_voices {
            return Ok(());
        }
        if self.input_file.is_none() {
            return Err(Error::MissingInputFile);
        }
        if self.recording && self.output_file.is_none() {
            return Err(Error::MissingOutputFile);
        }
        if !self.recording && self.output_file.is_some() {
            warn!("output file given without --recording; speaking to the default audio device");
        }
        Ok(())
    }

    /// Format of the recorded audio: mono, 16 bits per sample.
    pub fn audio_format(&self) -> AudioFormat {
        AudioFormat::mono16(self.sample_rate)
    }
}
