//! Installed voices, their metadata, and the language/gender filter.

use std::fmt;

use strum_macros::{EnumString, IntoStaticStr};

/// Age of a voice, as reported by the engine.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum VoiceAge {
    Adult,
    Child,
    Senior,
    Teen,
}

/// Gender of a voice, as reported by the engine.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, EnumString, IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(missing_docs)]
pub enum VoiceGender {
    Female,
    Male,
    Neutral,
}

impl fmt::Display for VoiceAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = (*self).into();
        f.write_str(name)
    }
}

impl fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = (*self).into();
        f.write_str(name)
    }
}

/// Encoding of an audio format a voice can render natively.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum AudioEncoding {
    /// Linear PCM
    Pcm,
    /// A-law companded
    ALaw,
    /// μ-law companded
    ULaw,
    /// Any other `WAVE_FORMAT_*` tag
    Other(u16),
}

impl AudioEncoding {
    /// Maps a `WAVE_FORMAT_*` tag to an encoding.
    pub fn from_format_tag(tag: u16) -> Self {
        match tag {
            1 => Self::Pcm,
            6 => Self::ALaw,
            7 => Self::ULaw,
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pcm => f.write_str("Pcm"),
            Self::ALaw => f.write_str("ALaw"),
            Self::ULaw => f.write_str("ULaw"),
            Self::Other(tag) => write!(f, "0x{:04x}", tag),
        }
    }
}

/// Decodes the `AudioFormats` attribute of a voice.
///
/// The attribute holds one or more hex-encoded `WAVEFORMATEX` headers separated by semicolons.
/// Only the leading format tag (a little-endian `u16`) of each header is used. Entries that are
/// not valid hex are skipped.
pub fn parse_audio_formats(attr: &str) -> Vec<AudioEncoding> {
    attr.split(';')
        .map(str::trim)
        .filter(|entry| entry.len() >= 4)
        .filter_map(|entry| {
            let lo = u8::from_str_radix(entry.get(0..2)?, 16).ok()?;
            let hi = u8::from_str_radix(entry.get(2..4)?, 16).ok()?;
            Some(AudioEncoding::from_format_tag(u16::from_le_bytes([lo, hi])))
        })
        .collect()
}

/// Metadata of an installed voice.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct VoiceInfo {
    /// Display name
    pub name: String,
    /// Locale name of the voice's language, e.g. `en-US`
    pub culture: Option<String>,
    /// Age, if the engine reports a known one
    pub age: Option<VoiceAge>,
    /// Gender, if the engine reports a known one
    pub gender: Option<VoiceGender>,
    /// Human-readable description
    pub description: String,
    /// Engine-specific identifier, used to select the voice
    pub id: String,
    /// Audio encodings the voice renders natively
    pub audio_formats: Vec<AudioEncoding>,
    /// Remaining voice attributes, in the order the engine reports them
    pub additional_info: Vec<(String, String)>,
}

impl VoiceInfo {
    /// Returns the two-letter code of the voice's language, if known.
    pub fn two_letter_language(&self) -> Option<&str> {
        self.culture.as_deref().map(two_letter_language)
    }
}

/// A voice together with a flag that tells whether this run may use it.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InstalledVoice {
    /// Voice metadata
    pub info: VoiceInfo,
    /// Whether the voice may be selected
    pub enabled: bool,
}

impl InstalledVoice {
    /// Wraps the given metadata in an enabled voice.
    pub fn new(info: VoiceInfo) -> Self {
        Self {
            info,
            enabled: true,
        }
    }
}

/// Returns the primary language subtag of a locale name, e.g. `en` for `en-US`.
pub fn two_letter_language(culture: &str) -> &str {
    culture.split(|c| c == '-' || c == '_').next().unwrap_or(culture)
}

/// What [`restrict_voices`] decided about a single voice.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Verdict {
    /// The voice matches both the language and the gender.
    Match,
    /// The voice was disabled because it speaks another (or an unknown) language.
    LanguageMismatch(Option<String>),
    /// The voice speaks the language, but was disabled because of its gender.
    GenderMismatch(Option<VoiceGender>),
}

/// The outcome of [`restrict_voices`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Restriction {
    /// One verdict per voice, in enumeration order.
    pub verdicts: Vec<Verdict>,
    /// Index of the voice to select: the last enabled voice matching both criteria.
    pub selected: Option<usize>,
}

/// Disables every voice that does not speak `language` with the given `gender`, and picks the
/// voice to use.
///
/// Languages are compared case-insensitively by their two-letter code. A voice is never enabled
/// by this function; voices that match keep their current flag.
pub fn restrict_voices(
    voices: &mut [InstalledVoice],
    language: &str,
    gender: VoiceGender,
) -> Restriction {
    let mut selected = None;
    let verdicts = voices
        .iter_mut()
        .enumerate()
        .map(|(idx, voice)| {
            let verdict = match voice.info.two_letter_language() {
                Some(lang) if lang.eq_ignore_ascii_case(language) => {
                    if voice.info.gender == Some(gender) {
                        Verdict::Match
                    } else {
                        Verdict::GenderMismatch(voice.info.gender)
                    }
                }
                other => Verdict::LanguageMismatch(other.map(str::to_owned)),
            };
            match verdict {
                Verdict::Match => {
                    if voice.enabled {
                        selected = Some(idx);
                    }
                }
                _ => voice.enabled = false,
            }
            verdict
        })
        .collect();

    Restriction {
        verdicts,
        selected,
    }
}
