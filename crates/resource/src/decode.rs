use crate::error::ResourceError;
use image::{ColorType, DynamicImage, ImageFormat};

/// Pixel data in a form the PDF writer can embed directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageData {
    /// Baseline JPEG passed through untouched (DCT encoded).
    Jpeg { bytes: Vec<u8>, components: u8 },
    /// 8-bit RGB samples with an optional 8-bit alpha plane.
    Raw { rgb: Vec<u8>, alpha: Option<Vec<u8>> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub data: ImageData,
}

impl DecodedImage {
    /// Natural size in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Decodes PNG, JPEG or GIF bytes.
///
/// Gray and RGB JPEGs keep their original encoding; everything else is
/// expanded to RGB, with an alpha plane only when some pixel is not opaque.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ResourceError> {
    let format = image::guess_format(bytes)?;
    let decoded = image::load_from_memory_with_format(bytes, format)?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(ResourceError::Decode("image has no pixels".into()));
    }

    let data = match (format, decoded.color()) {
        (ImageFormat::Jpeg, ColorType::L8) => ImageData::Jpeg { bytes: bytes.to_vec(), components: 1 },
        (ImageFormat::Jpeg, ColorType::Rgb8) => ImageData::Jpeg { bytes: bytes.to_vec(), components: 3 },
        _ => split_alpha(decoded),
    };
    Ok(DecodedImage { width, height, data })
}

fn split_alpha(image: DynamicImage) -> ImageData {
    let rgba = image.into_rgba8();
    let pixels = rgba.as_raw();
    let mut rgb = Vec::with_capacity(pixels.len() / 4 * 3);
    let mut alpha = Vec::with_capacity(pixels.len() / 4);
    for px in pixels.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
        alpha.push(px[3]);
    }
    let alpha = alpha.iter().any(|&a| a != u8::MAX).then_some(alpha);
    ImageData::Raw { rgb, alpha }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use std::io::Cursor;

    pub(crate) fn png_bytes(width: u32, height: u32, alpha: u8) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, alpha]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 100, 50]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Jpeg).unwrap();
        out.into_inner()
    }

    #[test]
    fn opaque_png_has_no_alpha_plane() {
        let decoded = decode_image(&png_bytes(4, 2, 255)).unwrap();
        assert_eq!(decoded.dimensions(), (4, 2));
        match decoded.data {
            ImageData::Raw { rgb, alpha } => {
                assert_eq!(rgb.len(), 4 * 2 * 3);
                assert!(alpha.is_none());
            }
            other => panic!("unexpected data {other:?}"),
        }
    }

    #[test]
    fn translucent_png_keeps_alpha() {
        let decoded = decode_image(&png_bytes(3, 3, 128)).unwrap();
        assert!(matches!(decoded.data, ImageData::Raw { alpha: Some(ref a), .. } if a.len() == 9));
    }

    #[test]
    fn jpeg_is_passed_through() {
        let bytes = jpeg_bytes(8, 6);
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (8, 6));
        assert_eq!(decoded.data, ImageData::Jpeg { bytes, components: 3 });
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(decode_image(b"definitely not an image"), Err(ResourceError::Decode(_))));
    }
}
