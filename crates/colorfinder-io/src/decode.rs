//! Image decoding via the `image` crate

use std::path::Path;

use crate::error::IoResult;
use crate::rgba::RgbaImage;

/// Read and decode an image file into RGBA8
///
/// The format is guessed from the file contents.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let decoded = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    from_dynamic(decoded)
}

/// Decode an in-memory encoded image into RGBA8
pub fn decode_image(bytes: &[u8]) -> IoResult<RgbaImage> {
    let decoded = image::load_from_memory(bytes)?;
    from_dynamic(decoded)
}

fn from_dynamic(decoded: image::DynamicImage) -> IoResult<RgbaImage> {
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    RgbaImage::new(width, height, rgba.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoError;

    fn encode_png(width: u32, height: u32, data: Vec<u8>) -> Vec<u8> {
        let buffer = image::RgbaImage::from_raw(width, height, data).unwrap();
        let mut out = std::io::Cursor::new(Vec::new());
        buffer.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_png() {
        let data = vec![255, 0, 0, 255, 0, 255, 0, 128];
        let png = encode_png(2, 1, data.clone());
        let img = decode_image(&png).unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 1);
        assert_eq!(img.as_bytes(), &data[..]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode_image(b"not an image"),
            Err(IoError::Decode(_))
        ));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(matches!(
            read_image("/nonexistent/colorfinder/image.png"),
            Err(IoError::Io(_))
        ));
    }
}
