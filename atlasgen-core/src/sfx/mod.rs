//! Tiny sound-effect synthesizer: sine tones and note chimes written as
//! mono 16-bit PCM WAV.

use crate::error::{AtlasError, Result};
use crate::persist;
use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

pub const SAMPLE_RATE: u32 = 22050;

/// Number of samples covering `seconds` at [`SAMPLE_RATE`].
pub fn sample_count(seconds: f64) -> usize {
    (SAMPLE_RATE as f64 * seconds) as usize
}

fn quantize(v: f64) -> i16 {
    (v * 32767.0).trunc().clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f64,
    pub duration: f64,
    pub volume: f64,
    /// Linear fade to silence over the tone's length.
    pub fade_out: bool,
}

impl Tone {
    pub fn new(freq: f64, duration: f64, volume: f64) -> Self {
        Self { freq, duration, volume, fade_out: true }
    }

    pub fn samples(&self) -> Vec<i16> {
        let n = sample_count(self.duration);
        (0..n)
            .map(|i| {
                let t = i as f64 / SAMPLE_RATE as f64;
                let mut v = (TAU * self.freq * t).sin() * self.volume;
                if self.fade_out {
                    v *= (1.0 - i as f64 / n as f64).max(0.0);
                }
                quantize(v)
            })
            .collect()
    }
}

/// Notes played back to back, each decaying to half volume.
#[derive(Debug, Clone, PartialEq)]
pub struct Chime {
    pub freqs: Vec<f64>,
    pub note_duration: f64,
    pub volume: f64,
}

impl Chime {
    pub fn new(freqs: &[f64], note_duration: f64, volume: f64) -> Self {
        Self { freqs: freqs.to_vec(), note_duration, volume }
    }

    pub fn samples(&self) -> Vec<i16> {
        let n = sample_count(self.note_duration);
        let mut out = Vec::with_capacity(n * self.freqs.len());
        for &freq in &self.freqs {
            out.extend((0..n).map(|i| {
                let t = i as f64 / SAMPLE_RATE as f64;
                let env = (1.0 - 0.5 * i as f64 / n as f64).max(0.0);
                quantize((TAU * freq * t).sin() * self.volume * env)
            }));
        }
        out
    }
}

/// The game's sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    Shoot,
    Hit,
    Collect,
    LevelUp,
    Death,
}

impl Effect {
    pub const ALL: [Effect; 5] = [Effect::Shoot, Effect::Hit, Effect::Collect, Effect::LevelUp, Effect::Death];

    pub fn name(self) -> &'static str {
        match self {
            Effect::Shoot => "shoot",
            Effect::Hit => "hit",
            Effect::Collect => "collect",
            Effect::LevelUp => "levelup",
            Effect::Death => "death",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.wav", self.name())
    }

    pub fn samples(self) -> Vec<i16> {
        match self {
            Effect::Shoot => Tone::new(880.0, 0.08, 0.3).samples(),
            Effect::Hit => Tone::new(200.0, 0.12, 0.4).samples(),
            Effect::Collect => Chime::new(&[523.0, 659.0, 784.0], 0.08, 0.3).samples(),
            Effect::LevelUp => Chime::new(&[523.0, 659.0, 784.0, 1047.0], 0.15, 0.5).samples(),
            Effect::Death => Chime::new(&[784.0, 523.0, 330.0, 220.0], 0.2, 0.5).samples(),
        }
    }
}

/// Write mono 16-bit samples to `path`; the file only appears once complete.
pub fn write_wav(path: impl AsRef<Path>, samples: &[i16]) -> Result<()> {
    let path = path.as_ref();
    persist::ensure_parent(path)?;
    let staging = persist::staging_path(path);
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&staging, spec)?;
    for &s in samples {
        writer.write_sample(s)?;
    }
    writer.finalize()?;
    persist::commit(&staging, path)?;
    log::info!("wrote {} ({} samples)", path.display(), samples.len());
    Ok(())
}

/// Render every effect into `out_dir`, returning the written paths.
pub fn generate_all(out_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir).map_err(|e| AtlasError::io(out_dir, e))?;
    Effect::ALL
        .iter()
        .map(|effect| -> Result<PathBuf> {
            let path = out_dir.join(effect.file_name());
            write_wav(&path, &effect.samples())?;
            Ok(path)
        })
        .collect()
}
