//! System font lookup and glyph rasterization for guide labels.

use fontdue::{Font, FontSettings};
use tracing::{debug, warn};

/// Candidate font locations checked in order.
const FONT_CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/google-noto/NotoSans-Regular.ttf",
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// A label font loaded from the host system.
pub struct LabelFont {
    font: Font,
}

impl LabelFont {
    /// Load the first usable font from the candidate list. Returns `None`
    /// (after a warning) when none exists or parses; callers then skip
    /// label drawing.
    pub fn locate() -> Option<Self> {
        for path in FONT_CANDIDATES {
            let Ok(bytes) = std::fs::read(path) else {
                continue;
            };
            match Font::from_bytes(bytes, FontSettings::default()) {
                Ok(font) => {
                    debug!("using label font {path}");
                    return Some(Self { font });
                }
                Err(err) => warn!("failed to parse font {path}: {err}"),
            }
        }
        warn!("no usable system font found; guide labels will be omitted");
        None
    }

    /// Width of `text` in pixels at size `px`.
    pub fn measure(&self, text: &str, px: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, px).advance_width)
            .sum()
    }

    /// Rasterize `text` at size `px` and invoke `put(dx, dy, coverage)` for
    /// every covered pixel. Offsets are relative to the left end of the
    /// baseline; `dy` is negative above it.
    pub fn for_each_pixel(&self, text: &str, px: f32, mut put: impl FnMut(i32, i32, u8)) {
        let mut cursor = 0.0f32;
        for ch in text.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, px);
            let origin_x = (cursor + metrics.xmin as f32).round() as i32;
            let origin_y = -(metrics.ymin + metrics.height as i32);
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let coverage = bitmap[row * metrics.width + col];
                    if coverage > 0 {
                        put(origin_x + col as i32, origin_y + row as i32, coverage);
                    }
                }
            }
            cursor += metrics.advance_width;
        }
    }
}
