//! Writing paintings to disk.

use {
  anyhow::{Context, Result},
  humansize::{FileSize, file_size_opts},
  image::{
    codecs::gif::{GifEncoder, Repeat},
    Delay, Frame, ImageFormat, RgbaImage,
  },
  std::{fs::File, io::BufWriter, path::Path},
};

/// Delay of intermediate animation frames.
const FRAME_DELAY_MS: u32 = 20;
/// How long the finished painting stays on screen before the animation loops.
const FINAL_DELAY_MS: u32 = 1000;

pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  image.save_with_format(path, ImageFormat::Png)
    .with_context(|| format!("writing {}", path.display()))?;
  log::info!("saved {} ({})", path.display(), file_size(path));
  Ok(())
}

fn file_size(path: &Path) -> String {
  std::fs::metadata(path).ok()
    .and_then(|meta| meta.len().file_size(file_size_opts::CONVENTIONAL).ok())
    .unwrap_or_else(|| "?".into())
}

/// Collects every `every`-th frame of a run into an animated GIF.
pub struct GifRecorder {
  frames: Vec<Frame>,
  every: usize
}

impl GifRecorder {
  pub fn new(every: usize) -> Self {
    Self { frames: vec![], every: every.max(1) }
  }

  pub fn observe(&mut self, iteration: usize, image: &RgbaImage) {
    if iteration % self.every == 0 {
      self.push(image, FRAME_DELAY_MS);
    }
  }

  pub fn len(&self) -> usize { self.frames.len() }
  pub fn is_empty(&self) -> bool { self.frames.is_empty() }

  fn push(&mut self, image: &RgbaImage, delay_ms: u32) {
    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    self.frames.push(Frame::from_parts(image.clone(), 0, 0, delay));
  }

  /// Append the final painting and encode everything.
  pub fn finish(mut self, image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    self.push(image, FINAL_DELAY_MS);
    let frames = self.frames.len();

    let file = File::create(path)
      .with_context(|| format!("creating {}", path.display()))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;
    encoder.encode_frames(self.frames)
      .with_context(|| format!("encoding {}", path.display()))?;
    drop(encoder);
    log::info!("saved {} frames to {} ({})", frames, path.display(), file_size(path));
    Ok(())
  }
}
