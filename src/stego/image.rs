//! LSB (Least Significant Bit) steganography for images.
//!
//! Hides one bit per pixel in the least significant bit of the red channel.
//! Pixels are visited in row-major order. Green, blue and alpha are never
//! modified. Only lossless formats (PNG, BMP) keep the bits intact.

use image::{ColorType, DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

use crate::codec::BitSequence;
use crate::error::StegoError;
use crate::medium::Cover;

/// Channel that carries the hidden bits.
pub const CARRIER_CHANNEL: usize = 0;

/// An image cover.
///
/// Pixels are held as 8-bit RGBA. Grayscale and RGB covers are widened on
/// load (gray copied to red, green and blue, alpha set opaque), so a stego
/// file is always written as RGBA. Covers with more than 8 bits per channel
/// are rejected by the file and byte loaders.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCover {
    image: RgbaImage,
}

impl PixelCover {
    /// Loads an image file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StegoError> {
        let image =
            image::open(path).map_err(|e| StegoError::UnsupportedMediumFormat(e.to_string()))?;
        Self::from_decoded(image)
    }

    /// Decodes an image from memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StegoError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| StegoError::UnsupportedMediumFormat(e.to_string()))?;
        Self::from_decoded(image)
    }

    fn from_decoded(image: DynamicImage) -> Result<Self, StegoError> {
        match image.color() {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => {
                Ok(Self::from_image(image))
            }
            other => Err(StegoError::UnsupportedMediumFormat(format!(
                "only 8-bit images are supported, got {:?}",
                other
            ))),
        }
    }

    /// Wraps a decoded image, converting it to 8-bit RGBA.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgba8(),
        }
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Saves the image. The format follows the extension and must be lossless.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StegoError> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)
            .map_err(|e| StegoError::UnsupportedMediumFormat(e.to_string()))?;
        if !matches!(format, ImageFormat::Png | ImageFormat::Bmp) {
            return Err(StegoError::UnsupportedMediumFormat(format!(
                "{:?} is lossy or unsupported, save as PNG or BMP",
                format
            )));
        }

        self.image
            .save_with_format(path, format)
            .map_err(|e| StegoError::UnsupportedMediumFormat(e.to_string()))
    }

    /// Returns the image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, StegoError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| StegoError::UnsupportedMediumFormat(e.to_string()))?;
        Ok(bytes)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        DynamicImage::ImageRgba8(self.image)
    }
}

impl Cover for PixelCover {
    fn available_units(&self) -> usize {
        let (width, height) = self.image.dimensions();
        (width as usize) * (height as usize)
    }

    fn write_bits(&self, bits: &BitSequence) -> Self {
        let mut output = self.image.clone();

        for (pixel, bit) in output.pixels_mut().zip(bits.iter()) {
            let value = &mut pixel.0[CARRIER_CHANNEL];
            *value = (*value & 0xFE) | bit;
        }

        Self { image: output }
    }

    fn read_bits(&self, max_units: usize) -> BitSequence {
        self.image
            .pixels()
            .take(max_units)
            .map(|pixel| pixel.0[CARRIER_CHANNEL] & 1)
            .collect()
    }
}
