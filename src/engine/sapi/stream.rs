use std::path::Path;

use windows as Windows;
use Windows::core::GUID;
use Windows::Win32::Media::Audio::{WAVEFORMATEX, WAVE_FORMAT_PCM};
use Windows::Win32::Media::Speech::{ISpStream, SpStream, SPFM_CREATE_ALWAYS};
use Windows::Win32::System::Com::{CoCreateInstance, CLSCTX_ALL};

use crate::audio::AudioFormat;
use crate::Result;

#[allow(non_upper_case_globals)]
const SPDFID_WaveFormatEx: GUID = GUID::from_u128(0xc31adbae_527f_4ff5_a230_f62bb61ff70c);

/// A WAV file the synthesizer renders into.
pub(crate) struct AudioStream {
    pub(crate) intf: ISpStream,
}

impl AudioStream {
    /// Creates the file, replacing any existing one.
    pub fn create_file<P: AsRef<Path>>(path: P, format: &AudioFormat) -> Result<Self> {
        let intf: ISpStream = unsafe { CoCreateInstance(&SpStream, None, CLSCTX_ALL) }?;
        unsafe {
            intf.BindToFile(
                path.as_ref().as_os_str(),
                SPFM_CREATE_ALWAYS,
                &SPDFID_WaveFormatEx,
                &to_sapi(format),
                0,
            )
        }?;
        Ok(AudioStream {
            intf,
        })
    }

    /// Writes the WAV header and releases the file.
    pub fn close(self) -> Result<()> {
        unsafe { self.intf.Close() }?;
        Ok(())
    }
}

fn to_sapi(format: &AudioFormat) -> WAVEFORMATEX {
    WAVEFORMATEX {
        wFormatTag: WAVE_FORMAT_PCM as _,
        nChannels: format.channels as u16,
        nSamplesPerSec: format.sample_rate.hz(),
        nAvgBytesPerSec: format.avg_bytes_per_sec(),
        nBlockAlign: format.block_align() as u16,
        wBitsPerSample: format.bit_rate as u16,
        cbSize: 0,
    }
}
