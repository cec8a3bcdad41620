use std::fs;
use std::path::{Path, PathBuf};

use ssml_speak::app::{App, Outcome};
use ssml_speak::audio::{AudioFormat, SampleRate};
use ssml_speak::config::Config;
use ssml_speak::engine::{SpeechEngine, SpeechOutput};
use ssml_speak::voice::{InstalledVoice, VoiceGender, VoiceInfo};
use ssml_speak::{Error, ExitCode, Result};

const SSML: &str = r#"<speak version="1.0" xml:lang="en-US">Hello <break time="200ms"/> world</speak>"#;

#[derive(Debug, PartialEq, Eq, Clone)]
enum Call {
    InstalledVoices,
    SetOutput(SpeechOutput),
    SelectVoice(String),
    Speak(String),
}

/// An engine that records every call. Like SAPI, it creates the WAV file as soon as the output is
/// set, and fills it when speaking.
#[derive(Default)]
struct FakeEngine {
    voices: Vec<VoiceInfo>,
    reject_ssml: bool,
    output: Option<PathBuf>,
    calls: Vec<Call>,
}

impl SpeechEngine for FakeEngine {
    fn installed_voices(&mut self) -> Result<Vec<InstalledVoice>> {
        self.calls.push(Call::InstalledVoices);
        Ok(self.voices.iter().cloned().map(InstalledVoice::new).collect())
    }

    fn set_output(&mut self, output: SpeechOutput) -> Result<()> {
        self.output = match &output {
            SpeechOutput::WaveFile { path, .. } => {
                fs::File::create(path)?;
                Some(path.clone())
            }
            SpeechOutput::DefaultDevice => None,
        };
        self.calls.push(Call::SetOutput(output));
        Ok(())
    }

    fn select_voice(&mut self, voice: &VoiceInfo) -> Result<()> {
        self.calls.push(Call::SelectVoice(voice.id.clone()));
        Ok(())
    }

    fn speak_ssml(&mut self, ssml: &str) -> Result<()> {
        self.calls.push(Call::Speak(ssml.to_owned()));
        if self.reject_ssml {
            return Err(Error::SsmlFormat("unexpected end of document".into()));
        }
        if let Some(path) = &self.output {
            fs::write(path, vec![0u8; 44 + ssml.len()])?;
        }
        Ok(())
    }
}

fn voice(id: &str, culture: &str, gender: VoiceGender) -> VoiceInfo {
    VoiceInfo {
        name: format!("Voice {}", id),
        culture: Some(culture.into()),
        gender: Some(gender),
        id: id.into(),
        ..Default::default()
    }
}

fn engine() -> FakeEngine {
    FakeEngine {
        voices: vec![
            voice("david", "en-US", VoiceGender::Male),
            voice("hedda", "de-DE", VoiceGender::Female),
            voice("zira", "en-US", VoiceGender::Female),
            voice("hazel", "en-GB", VoiceGender::Female),
            voice("katja", "de-DE", VoiceGender::Female),
        ],
        ..Default::default()
    }
}

fn input_file(dir: &Path) -> PathBuf {
    let path = dir.join("input.ssml");
    fs::write(&path, SSML).unwrap();
    path
}

fn run(config: Config, engine: &mut FakeEngine) -> (Result<Outcome>, String) {
    let mut out = Vec::new();
    let result = App::new(config).and_then(|app| app.run(engine, &mut out));
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn missing_input_is_reported_before_engine_calls() {
    let mut engine = engine();
    let config = Config {
        recording: true,
        output_file: Some("out.wav".into()),
        ..Default::default()
    };
    let (result, _) = run(config, &mut engine);

    assert!(matches!(result, Err(Error::MissingInputFile)));
    assert!(engine.calls.is_empty());
}

#[test]
fn missing_output_is_reported_before_engine_calls() {
    let mut engine = engine();
    let config = Config {
        input_file: Some("in.ssml".into()),
        recording: true,
        ..Default::default()
    };
    let (result, _) = run(config, &mut engine);

    assert!(matches!(result, Err(Error::MissingOutputFile)));
    assert!(engine.calls.is_empty());
}

#[test]
fn speaks_to_default_device() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = engine();
    let config = Config {
        input_file: Some(input_file(dir.path())),
        ..Default::default()
    };
    let (result, out) = run(config, &mut engine);

    assert_eq!(result.unwrap(), Outcome::Spoken);
    assert_eq!(
        engine.calls,
        vec![Call::SetOutput(SpeechOutput::DefaultDevice), Call::Speak(SSML.into())]
    );
    assert!(out.is_empty());
}

#[test]
fn records_to_wave_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("speech.wav");
    let mut engine = engine();
    let config = Config {
        input_file: Some(input_file(dir.path())),
        output_file: Some(output.clone()),
        recording: true,
        sample_rate: SampleRate::Hz32000,
        ..Default::default()
    };
    let (result, out) = run(config, &mut engine);

    let size = (44 + SSML.len()) as u64;
    assert_eq!(
        result.unwrap(),
        Outcome::Recorded {
            path: output.clone(),
            size,
        }
    );
    assert_eq!(
        engine.calls[0],
        Call::SetOutput(SpeechOutput::WaveFile {
            path: output,
            format: AudioFormat::mono16(SampleRate::Hz32000),
        })
    );
    assert_eq!(out, format!("Generated audio file <speech.wav>, {} bytes written.\n", size));
}

#[test]
fn recording_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = engine();
    let config = Config {
        input_file: Some(input_file(dir.path())),
        output_file: Some(dir.path().join("nowhere").join("speech.wav")),
        recording: true,
        ..Default::default()
    };
    let (result, _) = run(config, &mut engine);

    let err = result.unwrap_err();
    assert!(matches!(err, Error::DirectoryNotFound(_)));
    assert_eq!(err.exit_code(), ExitCode::DirectoryNotFound);
    assert!(engine.calls.is_empty());
}

#[test]
fn missing_input_file_creates_no_recording() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("speech.wav");
    let mut engine = engine();
    let config = Config {
        input_file: Some(dir.path().join("absent.ssml")),
        output_file: Some(output.clone()),
        recording: true,
        ..Default::default()
    };
    let (result, _) = run(config, &mut engine);

    assert_eq!(result.unwrap_err().exit_code(), ExitCode::FileNotFound);
    assert!(engine.calls.is_empty());
    assert!(!output.exists());
}

#[test]
fn selects_last_matching_voice() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = engine();
    let config = Config {
        input_file: Some(input_file(dir.path())),
        language: Some("en".into()),
        verbose: true,
        ..Default::default()
    };
    let (result, out) = run(config, &mut engine);

    assert_eq!(result.unwrap(), Outcome::Spoken);
    assert_eq!(
        engine.calls,
        vec![
            Call::InstalledVoices,
            Call::SelectVoice("hazel".into()),
            Call::SetOutput(SpeechOutput::DefaultDevice),
            Call::Speak(SSML.into()),
        ]
    );
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "Disabled voice Voice david, due to gender Male",
            "Disabled voice Voice hedda, due to language de",
            "Found voice Voice zira",
            "Found voice Voice hazel",
            "Disabled voice Voice katja, due to language de",
        ]
    );
}

#[test]
fn selects_by_requested_gender() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = engine();
    let config = Config {
        input_file: Some(input_file(dir.path())),
        language: Some("en".into()),
        gender: VoiceGender::Male,
        ..Default::default()
    };
    let (result, out) = run(config, &mut engine);

    assert!(result.is_ok());
    assert!(engine.calls.contains(&Call::SelectVoice("david".into())));
    assert!(out.is_empty());
}

#[test]
fn unavailable_language() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = engine();
    let config = Config {
        input_file: Some(input_file(dir.path())),
        language: Some("fr".into()),
        ..Default::default()
    };
    let (result, _) = run(config, &mut engine);

    let err = result.unwrap_err();
    assert!(matches!(&err, Error::CannotSetLanguage(lang) if lang == "fr"));
    assert_eq!(err.exit_code(), ExitCode::CannotSetLanguage);
    assert!(!engine.calls.iter().any(|call| matches!(call, Call::Speak(_))));
}

#[test]
fn unavailable_language_while_recording_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("speech.wav");
    let mut engine = engine();
    let config = Config {
        input_file: Some(input_file(dir.path())),
        output_file: Some(output.clone()),
        recording: true,
        language: Some("fr".into()),
        ..Default::default()
    };
    let (result, _) = run(config, &mut engine);

    assert_eq!(result.unwrap_err().exit_code(), ExitCode::CannotSetLanguage);
    assert_eq!(engine.calls, vec![Call::InstalledVoices]);
    assert!(!output.exists());
}

#[test]
fn records_with_selected_voice() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("speech.wav");
    let mut engine = engine();
    let config = Config {
        input_file: Some(input_file(dir.path())),
        output_file: Some(output.clone()),
        recording: true,
        language: Some("de".into()),
        ..Default::default()
    };
    let (result, _) = run(config, &mut engine);

    assert!(matches!(result.unwrap(), Outcome::Recorded { .. }));
    assert_eq!(engine.calls[1], Call::SelectVoice("katja".into()));
    assert!(matches!(engine.calls[2], Call::SetOutput(SpeechOutput::WaveFile { .. })));
    assert!(output.exists());
}

#[test]
fn engine_io_failure_is_reported_as_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = engine();
    engine.output = Some(dir.path().join("gone").join("speech.wav"));
    let err = engine.speak_ssml(SSML).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().starts_with("I/O error: "));
}

#[test]
fn rejected_ssml() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = FakeEngine {
        reject_ssml: true,
        ..engine()
    };
    let config = Config {
        input_file: Some(input_file(dir.path())),
        ..Default::default()
    };
    let (result, _) = run(config, &mut engine);

    assert_eq!(result.unwrap_err().exit_code(), ExitCode::SsmlFormatError);
}

#[test]
fn displays_voices_without_speaking() {
    let mut engine = engine();
    let config = Config {
        display_voices: true,
        ..Default::default()
    };
    let (result, out) = run(config, &mut engine);

    assert_eq!(result.unwrap(), Outcome::VoicesDisplayed);
    assert_eq!(engine.calls, vec![Call::InstalledVoices]);
    assert!(out.starts_with("Installed voices -\n"));
    assert_eq!(out.matches(" -------------").count(), 5);
    assert!(out.contains(" ID:            katja\n"));
}
