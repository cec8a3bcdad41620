//! Format of the audio written when recording to a file.

use std::fmt;

/// Sample rate, in samples per second, at which to record.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[allow(missing_docs)]
pub enum SampleRate {
    Hz8000 = 8000,
    Hz11025 = 11025,
    Hz12000 = 12000,
    Hz16000 = 16000,
    Hz22050 = 22050,
    Hz24000 = 24000,
    Hz32000 = 32000,
    Hz44100 = 44100,
    Hz48000 = 48000,
}

impl SampleRate {
    const ALL: [SampleRate; 9] = [
        Self::Hz8000,
        Self::Hz11025,
        Self::Hz12000,
        Self::Hz16000,
        Self::Hz22050,
        Self::Hz24000,
        Self::Hz32000,
        Self::Hz44100,
        Self::Hz48000,
    ];

    /// Returns the number of samples per second.
    pub fn hz(self) -> u32 {
        self as u32
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::Hz16000
    }
}

impl TryFrom<u32> for SampleRate {
    type Error = UnsupportedSampleRate;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        Self::ALL.into_iter().find(|rate| rate.hz() == hz).ok_or(UnsupportedSampleRate(hz))
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.hz())
    }
}

/// The error returned when converting a number that is not a standard sample rate.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct UnsupportedSampleRate(pub u32);

impl fmt::Display for UnsupportedSampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported sample rate {} Hz", self.0)
    }
}

impl std::error::Error for UnsupportedSampleRate {}

/// How many bits each sample should have.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[allow(missing_docs)]
pub enum BitRate {
    Bits8 = 8,
    Bits16 = 16,
}

/// Number of audio channels.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[allow(missing_docs)]
pub enum Channels {
    Mono = 1,
    Stereo = 2,
}

/// Specifies the format of the PCM audio data in a file.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct AudioFormat {
    /// Sample rate at which to record.
    pub sample_rate: SampleRate,
    /// How many bits each sample should have.
    pub bit_rate: BitRate,
    /// Number of channels.
    pub channels: Channels,
}

impl AudioFormat {
    /// Mono, 16-bit PCM at the given sample rate.
    pub fn mono16(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            bit_rate: BitRate::Bits16,
            channels: Channels::Mono,
        }
    }

    /// Number of bytes in one sample frame across all channels.
    pub fn block_align(&self) -> u32 {
        (self.channels as u32) * (self.bit_rate as u32) / 8
    }

    /// Number of bytes per second of audio.
    pub fn avg_bytes_per_sec(&self) -> u32 {
        self.sample_rate.hz() * self.block_align()
    }
}
