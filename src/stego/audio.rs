//! LSB steganography for audio.
//!
//! Samples are held as normalized floats in [-1.0, 1.0]. To carry a bit a
//! sample is quantized to a signed 16-bit value (`round(s * 32767)`), its LSB
//! is replaced and the result is scaled back by `1 / 32767`.
//! Supports WAV files (16-bit PCM or 32-bit float). Only the first channel of
//! multi-channel audio is used.

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use crate::codec::BitSequence;
use crate::error::StegoError;
use crate::medium::Cover;
use crate::DEFAULT_AUDIO_SCAN_LIMIT;

/// Scale between a normalized sample and its 16-bit quantization.
pub const QUANTIZATION_SCALE: f32 = 32767.0;

/// Quantizes a normalized sample to 16 bits.
pub fn quantize(sample: f32) -> i16 {
    (sample * QUANTIZATION_SCALE)
        .round()
        .clamp(i16::MIN as f32, i16::MAX as f32) as i16
}

/// Scales a 16-bit sample back to the normalized range.
pub fn dequantize(value: i16) -> f32 {
    value as f32 / QUANTIZATION_SCALE
}

fn wav_error(e: hound::Error) -> StegoError {
    match e {
        hound::Error::IoError(io) => StegoError::Io(io),
        other => StegoError::UnsupportedMediumFormat(other.to_string()),
    }
}

/// An audio cover.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleCover {
    /// Normalized samples of the first channel.
    samples: Vec<f32>,
    sample_rate: u32,
}

impl SampleCover {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Loads a WAV file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StegoError> {
        let reader = WavReader::open(path).map_err(wav_error)?;
        Self::from_reader(reader)
    }

    /// Decodes WAV data from memory.
    pub fn from_wav_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        let reader = WavReader::new(Cursor::new(bytes)).map_err(wav_error)?;
        Self::from_reader(reader)
    }

    fn from_reader<R: Read>(reader: WavReader<R>) -> Result<Self, StegoError> {
        let spec = reader.spec();
        let channels = spec.channels.max(1) as usize;

        let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Int, 16) => reader
                .into_samples::<i16>()
                .map(|s| s.map(dequantize))
                .collect::<Result<_, _>>()
                .map_err(wav_error)?,
            (SampleFormat::Float, 32) => reader
                .into_samples::<f32>()
                .collect::<Result<_, _>>()
                .map_err(wav_error)?,
            (format, bits) => {
                return Err(StegoError::UnsupportedMediumFormat(format!(
                    "only 16-bit PCM or 32-bit float WAV is supported, got {} bits {:?}",
                    bits, format
                )))
            }
        };

        let samples = interleaved.into_iter().step_by(channels).collect();
        Ok(Self::new(samples, spec.sample_rate))
    }

    fn wav_spec(&self) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }

    fn write_wav<W: Write + Seek>(&self, writer: W) -> Result<(), StegoError> {
        let mut writer = WavWriter::new(writer, self.wav_spec()).map_err(wav_error)?;
        for sample in &self.samples {
            writer.write_sample(quantize(*sample)).map_err(wav_error)?;
        }
        writer.finalize().map_err(wav_error)
    }

    /// Saves as mono 16-bit PCM WAV.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StegoError> {
        let file = std::io::BufWriter::new(std::fs::File::create(path)?);
        self.write_wav(file)
    }

    /// Returns the audio as mono 16-bit PCM WAV bytes.
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>, StegoError> {
        let mut bytes = Vec::new();
        self.write_wav(Cursor::new(&mut bytes))?;
        Ok(bytes)
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

impl Cover for SampleCover {
    fn available_units(&self) -> usize {
        self.samples.len()
    }

    fn write_bits(&self, bits: &BitSequence) -> Self {
        let mut samples = self.samples.clone();

        for (sample, bit) in samples.iter_mut().zip(bits.iter()) {
            let value = (quantize(*sample) & !1) | bit as i16;
            *sample = dequantize(value);
        }

        Self {
            samples,
            sample_rate: self.sample_rate,
        }
    }

    fn read_bits(&self, max_units: usize) -> BitSequence {
        self.samples
            .iter()
            .take(max_units)
            .map(|sample| (quantize(*sample) & 1) as u8)
            .collect()
    }

    fn default_scan_limit(&self) -> usize {
        DEFAULT_AUDIO_SCAN_LIMIT
    }
}

#[cfg(test)]
fn create_test_audio(sample_count: usize) -> SampleCover {
    // 440 Hz sine at half amplitude
    let samples = (0..sample_count)
        .map(|i| {
            let t = i as f32 / 44100.0;
            (2.0 * std::f32::consts::PI * 440.0 * t).sin() * 0.5
        })
        .collect();

    SampleCover::new(samples, 44100)
}
