//! The Microsoft Speech API (SAPI) engine.

use std::marker::PhantomData;
use std::ptr::null;

use log::{debug, warn};
use windows::Win32::System::Com::{CoInitialize, CoUninitialize};

use crate::engine::{SpeechEngine, SpeechOutput};
use crate::voice::{parse_audio_formats, InstalledVoice, VoiceInfo};
use crate::{Error, Result};

mod com_util;
mod stream;
mod synthesizer;
mod token;

use self::com_util::{locale_name, parse_lcid};
use self::stream::AudioStream;
use self::synthesizer::Synthesizer;
use self::token::{Category, Token};

const VOICES_CATEGORY: &str = r"HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\Speech\Voices";

/// SAPI initialized on the current thread. SAPI is deinitialized when this is dropped.
pub struct Session(());

impl Session {
    /// Initializes SAPI on the current thread.
    pub fn initialize() -> Result<Self> {
        unsafe { CoInitialize(null()) }?;
        Ok(Session(()))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        unsafe { CoUninitialize() }
    }
}

/// A [`SpeechEngine`] backed by SAPI voices. It cannot outlive the [`Session`] it was created in.
pub struct SapiEngine<'s> {
    synth: Synthesizer,
    stream: Option<AudioStream>,
    _session: PhantomData<&'s Session>,
}

impl<'s> SapiEngine<'s> {
    /// Creates a synthesizer that speaks to the default audio device.
    pub fn new(_session: &'s Session) -> Result<Self> {
        Ok(Self {
            synth: Synthesizer::new()?,
            stream: None,
            _session: PhantomData,
        })
    }

    fn close_stream(&mut self) -> Result<()> {
        if let Some(stream) = self.stream.take() {
            self.synth.set_output(None)?;
            stream.close()?;
        }
        Ok(())
    }
}

fn voice_info(token: &Token) -> Result<VoiceInfo> {
    let attrs = token.attrs()?;
    Ok(VoiceInfo {
        name: attrs.get("Name").unwrap_or_default(),
        culture: attrs.get("Language").as_deref().and_then(parse_lcid).and_then(locale_name),
        age: attrs.get("Age").and_then(|s| s.parse().ok()),
        gender: attrs.get("Gender").and_then(|s| s.parse().ok()),
        description: token.description().unwrap_or_default(),
        id: token.id()?,
        audio_formats: attrs
            .get("AudioFormats")
            .map(|s| parse_audio_formats(&s))
            .unwrap_or_default(),
        additional_info: attrs.all(),
    })
}

impl<'s> Drop for SapiEngine<'s> {
    fn drop(&mut self) {
        if let Err(err) = self.close_stream() {
            warn!("could not finish the recording: {}", err);
        }
    }
}

impl<'s> SpeechEngine for SapiEngine<'s> {
    fn installed_voices(&mut self) -> Result<Vec<InstalledVoice>> {
        let category = Category::new(VOICES_CATEGORY)?;
        category
            .enum_tokens("", None)?
            .map(|token| voice_info(&token).map(InstalledVoice::new))
            .collect()
    }

    fn set_output(&mut self, output: SpeechOutput) -> Result<()> {
        self.close_stream()?;
        if let SpeechOutput::WaveFile { path, format } = output {
            debug!("recording to {} at {}", path.display(), format.sample_rate);
            let stream = AudioStream::create_file(&path, &format)?;
            self.synth.set_output(Some(&stream))?;
            self.stream = Some(stream);
        }
        Ok(())
    }

    fn select_voice(&mut self, voice: &VoiceInfo) -> Result<()> {
        debug!("selecting voice {} ({})", voice.name, voice.id);
        self.synth.set_voice(Token::new(voice.id.as_str())?)
    }

    fn speak_ssml(&mut self, ssml: &str) -> Result<()> {
        let spoken = self.synth.speak_ssml(ssml).map_err(|err| {
            warn!("SAPI rejected the document: {}", err);
            Error::SsmlFormat(err.to_string())
        });
        self.close_stream()?;
        spoken
    }
}
