//! Console listing of the installed voices.

use std::io::{self, Write};

use crate::voice::InstalledVoice;

const NOT_SET: &str = "NotSet";

/// Writes a numbered description of every voice to `out`.
pub fn write_voices<W: Write>(out: &mut W, voices: &[InstalledVoice]) -> io::Result<()> {
    writeln!(out, "Installed voices -")?;
    writeln!(out)?;
    for (idx, voice) in voices.iter().enumerate() {
        write_voice(out, idx + 1, voice)?;
    }
    Ok(())
}

fn write_voice<W: Write>(out: &mut W, number: usize, voice: &InstalledVoice) -> io::Result<()> {
    let info = &voice.info;

    writeln!(out, " -------------")?;
    writeln!(out)?;
    writeln!(out, " No.:           {}", number)?;
    writeln!(out, " Name:          {}", info.name)?;
    writeln!(out, " Culture:       {}", info.culture.as_deref().unwrap_or(""))?;
    match info.age {
        Some(age) => writeln!(out, " Age:           {}", age)?,
        None => writeln!(out, " Age:           {}", NOT_SET)?,
    }
    match info.gender {
        Some(gender) => writeln!(out, " Gender:        {}", gender)?,
        None => writeln!(out, " Gender:        {}", NOT_SET)?,
    }
    writeln!(out, " Description:   {}", info.description)?;
    writeln!(out, " ID:            {}", info.id)?;
    writeln!(out, " Enabled:       {}", voice.enabled)?;

    write!(out, " Audio formats: ")?;
    if info.audio_formats.is_empty() {
        writeln!(out, "No supported audio formats found!")?;
    } else {
        for format in &info.audio_formats {
            writeln!(out, "{}", format)?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, " Additional information about the voice - ")?;
    for (key, value) in &info.additional_info {
        writeln!(out, " {}: {}", key, value)?;
    }
    writeln!(out)?;
    writeln!(out)
}
