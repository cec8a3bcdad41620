//! The controller that carries out a run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::Config;
use crate::display::write_voices;
use crate::engine::{SpeechEngine, SpeechOutput};
use crate::ssml::{parent_dir_exists, read_ssml_file};
use crate::voice::{restrict_voices, Verdict};
use crate::{Error, Result};

/// What a successful run did.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Outcome {
    /// The installed voices were listed.
    VoicesDisplayed,
    /// The document was spoken on the default audio device.
    Spoken,
    /// The document was recorded into a file of the given size.
    Recorded {
        /// Path of the WAV file
        path: PathBuf,
        /// Size of the file in bytes
        size: u64,
    },
}

/// A validated configuration, ready to run against an engine.
#[derive(Debug)]
pub struct App {
    config: Config,
}

impl App {
    /// Validates the configuration. No engine is involved yet, so argument errors surface before
    /// any engine call.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
        })
    }

    /// Returns the configuration of this run.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs against `engine`, writing user-facing messages to `out`.
    pub fn run<E: SpeechEngine + ?Sized, W: Write>(
        &self,
        engine: &mut E,
        out: &mut W,
    ) -> Result<Outcome> {
        if self.config.display_voices {
            let voices = engine.installed_voices()?;
            write_voices(out, &voices)?;
            return Ok(Outcome::VoicesDisplayed);
        }

        let input = self.config.input_file.as_ref().ok_or(Error::MissingInputFile)?;
        let output = self.output()?;
        let ssml = read_ssml_file(input)?;

        let recording = match &output {
            SpeechOutput::WaveFile { path, .. } => Some(path.clone()),
            SpeechOutput::DefaultDevice => None,
        };

        if let Some(language) = &self.config.language {
            self.select_voice(engine, language, out)?;
        }

        engine.set_output(output)?;

        info!("speaking {} characters of SSML from {}", ssml.len(), input.display());
        engine.speak_ssml(&ssml)?;

        match recording {
            Some(path) => {
                let size = file_size(&path)?;
                writeln!(
                    out,
                    "Generated audio file <{}>, {} bytes written.",
                    display_name(&path),
                    size
                )?;
                Ok(Outcome::Recorded {
                    path,
                    size,
                })
            }
            None => Ok(Outcome::Spoken),
        }
    }

    fn output(&self) -> Result<SpeechOutput> {
        if !self.config.recording {
            return Ok(SpeechOutput::DefaultDevice);
        }
        let path = self.config.output_file.clone().ok_or(Error::MissingOutputFile)?;
        if !parent_dir_exists(&path) {
            return Err(Error::DirectoryNotFound(path));
        }
        Ok(SpeechOutput::WaveFile {
            path,
            format: self.config.audio_format(),
        })
    }

    fn select_voice<E: SpeechEngine + ?Sized, W: Write>(
        &self,
        engine: &mut E,
        language: &str,
        out: &mut W,
    ) -> Result<()> {
        let gender = self.config.gender;
        let mut voices = engine.installed_voices()?;
        let restriction = restrict_voices(&mut voices, language, gender);

        for (voice, verdict) in voices.iter().zip(&restriction.verdicts) {
            let name = &voice.info.name;
            let message = match verdict {
                Verdict::Match => format!("Found voice {}", name),
                Verdict::GenderMismatch(found) => format!(
                    "Disabled voice {}, due to gender {}",
                    name,
                    found.map(|g| g.to_string()).unwrap_or_else(|| "NotSet".into())
                ),
                Verdict::LanguageMismatch(found) => format!(
                    "Disabled voice {}, due to language {}",
                    name,
                    found.as_deref().unwrap_or("unknown")
                ),
            };
            if self.config.verbose {
                writeln!(out, "{}", message)?;
            } else {
                debug!("{}", message);
            }
        }

        let selected = restriction
            .selected
            .map(|idx| &voices[idx])
            .ok_or_else(|| Error::CannotSetLanguage(language.to_owned()))?;
        info!("using voice {} for language {} ({})", selected.info.name, language, gender);
        engine.select_voice(&selected.info)
    }
}

fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path).map(|meta| meta.len()).map_err(|source| Error::File {
        path: path.to_owned(),
        source,
    })
}

fn display_name(path: &Path) -> String {
    path.file_name().unwrap_or(path.as_os_str()).to_string_lossy().into_owned()
}
