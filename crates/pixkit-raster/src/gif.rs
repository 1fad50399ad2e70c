//! Animated GIF decoding.
//!
//! Decodes raw GIF bytes into an ordered frame sequence with per-frame
//! display durations, plus the total loop duration (the sum of the frame
//! delays). Frame compositing and disposal are handled by the underlying
//! decoder; each returned frame is a fully realized RGBA image.

use std::io::Cursor;
use std::time::Duration;

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use thiserror::Error;

use crate::RasterImage;

/// Errors that can occur during GIF decoding.
#[derive(Debug, Error)]
pub enum GifError {
    /// The data is not a valid GIF stream.
    #[error("Invalid or unsupported GIF data: {0}")]
    InvalidData(String),

    /// The stream decoded to zero frames.
    #[error("GIF contains no frames")]
    NoFrames,
}

/// A single frame of an animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Frame pixels.
    pub image: RasterImage,
    /// How long the frame stays on screen.
    pub delay: Duration,
}

/// A decoded, looping animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedImage {
    /// Frames in display order.
    pub frames: Vec<AnimationFrame>,
    /// Sum of all frame delays.
    pub total_duration: Duration,
}

impl AnimatedImage {
    /// Number of frames in the animation.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// Decode GIF bytes into an [`AnimatedImage`].
///
/// # Errors
///
/// Returns [`GifError::InvalidData`] when the bytes are not a decodable
/// GIF stream and [`GifError::NoFrames`] when the stream holds no frames.
pub fn decode_gif(bytes: &[u8]) -> Result<AnimatedImage, GifError> {
    let decoder =
        GifDecoder::new(Cursor::new(bytes)).map_err(|e| GifError::InvalidData(e.to_string()))?;

    let raw_frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(|e| GifError::InvalidData(e.to_string()))?;

    if raw_frames.is_empty() {
        return Err(GifError::NoFrames);
    }

    let mut total_duration = Duration::ZERO;
    let mut frames = Vec::with_capacity(raw_frames.len());
    for frame in raw_frames {
        let delay = Duration::from(frame.delay());
        total_duration += delay;
        frames.push(AnimationFrame {
            image: RasterImage::from_rgba_image(frame.into_buffer()),
            delay,
        });
    }

    Ok(AnimatedImage {
        frames,
        total_duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Delay, Frame, RgbaImage};

    /// Encode a small animation so the decoder has real bytes to chew on.
    fn sample_gif(frame_colors: &[[u8; 4]], delay_ms: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            let frames = frame_colors.iter().map(|&color| {
                let buffer = RgbaImage::from_pixel(8, 8, image::Rgba(color));
                Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
            });
            encoder.encode_frames(frames).unwrap();
        }
        bytes
    }

    #[test]
    fn test_decode_frame_count_and_dimensions() {
        let bytes = sample_gif(&[[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 255]], 100);

        let animation = decode_gif(&bytes).unwrap();

        assert_eq!(animation.frame_count(), 3);
        for frame in &animation.frames {
            assert_eq!((frame.image.width, frame.image.height), (8, 8));
        }
    }

    #[test]
    fn test_decode_total_duration_is_sum_of_delays() {
        let bytes = sample_gif(&[[255, 0, 0, 255], [0, 255, 0, 255]], 100);

        let animation = decode_gif(&bytes).unwrap();

        assert_eq!(animation.frames[0].delay, Duration::from_millis(100));
        assert_eq!(animation.frames[1].delay, Duration::from_millis(100));
        assert_eq!(animation.total_duration, Duration::from_millis(200));
    }

    #[test]
    fn test_decode_single_frame() {
        let bytes = sample_gif(&[[128, 64, 32, 255]], 50);

        let animation = decode_gif(&bytes).unwrap();

        assert_eq!(animation.frame_count(), 1);
        assert_eq!(animation.total_duration, Duration::from_millis(50));
    }

    #[test]
    fn test_decode_invalid_data() {
        let result = decode_gif(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(GifError::InvalidData(_))));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(decode_gif(&[]).is_err());
    }

    #[test]
    fn test_decode_truncated_gif() {
        let bytes = sample_gif(&[[255, 0, 0, 255], [0, 255, 0, 255]], 100);

        // Cut the stream mid-frame.
        let result = decode_gif(&bytes[0..bytes.len() / 2]);
        assert!(result.is_err() || result.unwrap().frame_count() < 2);
    }
}
