use windows as Windows;
use Windows::core::{IUnknown, Interface};
use Windows::Win32::Media::Speech::{ISpVoice, SpVoice, SPF_ASYNC, SPF_IS_XML};
use Windows::Win32::System::Com::{CoCreateInstance, CLSCTX_ALL};
use Windows::Win32::System::WindowsProgramming::INFINITE;

use super::stream::AudioStream;
use super::token::Token;
use crate::Result;

const SPF_PARSE_SSML: u32 = 0x80;

/// A speech synthesizer that blocks the current thread while rendering speech.
pub(crate) struct Synthesizer {
    intf: ISpVoice,
}

impl Synthesizer {
    /// Creates a new synthesizer, configured to output its speech to the default audio device.
    pub fn new() -> Result<Self> {
        let intf = unsafe { CoCreateInstance(&SpVoice, None, CLSCTX_ALL) }?;
        Ok(Self {
            intf,
        })
    }

    /// Renders subsequent speech into `stream`, or to the default audio device if `None`.
    pub fn set_output(&self, stream: Option<&AudioStream>) -> Result<()> {
        let output = match stream {
            Some(stream) => Some(stream.intf.cast::<IUnknown>()?),
            None => None,
        };
        unsafe { self.intf.SetOutput(output, false) }?;
        Ok(())
    }

    pub fn set_voice(&self, voice: Token) -> Result<()> {
        unsafe { self.intf.SetVoice(voice.intf) }?;
        Ok(())
    }

    /// Renders the given SSML, blocking the thread until done.
    pub fn speak_ssml(&self, ssml: &str) -> windows::core::Result<()> {
        let flags = SPF_ASYNC.0 as u32 | SPF_IS_XML.0 as u32 | SPF_PARSE_SSML;
        unsafe { self.intf.Speak(ssml, flags) }?;
        unsafe { self.intf.WaitUntilDone(INFINITE) }
    }
}
