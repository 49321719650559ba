//! Raster guide rendering over a computed layout.
//!
//! Draws face outlines, dashed safe areas, corner ticks, color-coded seam
//! markers and labels into an RGBA buffer. Only reads the immutable
//! [`Layout`]; nothing feeds back into geometry.

use image::{Rgba, RgbaImage};
use thiserror::Error;
use tracing::warn;

use crate::face::{FaceId, Side};
use crate::font::LabelFont;
use crate::layout::{Layout, PxRect};

/// RGBA color, straight alpha.
pub type Color = [u8; 4];

/// Reference atlas side all style lengths are specified against; they scale
/// linearly with the actual atlas size.
const REFERENCE_ATLAS: u32 = 2048;

/// One distinct color per box edge, indexed by seam table position.
const SEAM_PALETTE: [Color; 12] = [
    [230, 60, 60, 255],
    [240, 140, 40, 255],
    [230, 210, 50, 255],
    [120, 210, 60, 255],
    [40, 200, 150, 255],
    [60, 190, 230, 255],
    [70, 110, 240, 255],
    [150, 80, 235, 255],
    [220, 80, 210, 255],
    [160, 110, 60, 255],
    [110, 160, 160, 255],
    [240, 150, 170, 255],
];

/// Errors from rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The pixel buffer for the requested atlas size cannot be represented.
    #[error("cannot allocate a {size}x{size} RGBA buffer")]
    Target {
        /// Requested atlas side length.
        size: u32,
    },
}

/// Visual styling for the raster guide. Lengths are in pixels at a 2048
/// atlas and scale with the actual atlas size.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Canvas fill. Transparent by default so the guide can overlay
    /// existing texture content.
    pub background: Color,
    /// Face outline and corner tick color.
    pub outline: Color,
    /// Outline stroke width in pixels; 0 derives `max(1, atlas/512)`.
    pub outline_width: u32,
    /// Dashed safe-area stroke color.
    pub safe_color: Color,
    /// Dash length of the safe-area stroke.
    pub dash_len: u32,
    /// Gap length of the safe-area stroke.
    pub gap_len: u32,
    /// Corner tick length.
    pub tick_len: u32,
    /// Label font size in pixels.
    pub label_size: f32,
    /// Whether to draw face labels and the header (requires a system font).
    pub draw_labels: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: [0, 0, 0, 0],
            outline: [255, 255, 255, 255],
            outline_width: 0,
            safe_color: [180, 180, 180, 255],
            dash_len: 25,
            gap_len: 15,
            tick_len: 30,
            label_size: 24.0,
            draw_labels: true,
        }
    }
}

/// Render the guide image for a layout. The buffer is exactly
/// `atlas_size` x `atlas_size`.
pub fn render_layout(layout: &Layout, style: &RenderStyle) -> Result<RgbaImage, RenderError> {
    let size = layout.atlas_size;
    let bytes = u64::from(size) * u64::from(size) * 4;
    if usize::try_from(bytes).is_err() {
        return Err(RenderError::Target { size });
    }
    let mut img = RgbaImage::from_pixel(size, size, Rgba(style.background));

    let stroke = if style.outline_width == 0 {
        (size / 512).max(1)
    } else {
        style.outline_width
    };
    let dash = scaled(style.dash_len, size);
    let gap = scaled(style.gap_len, size);
    let tick = scaled(style.tick_len, size);

    for placement in &layout.faces {
        outline_rect(&mut img, placement.rect, stroke, style.outline);
        dashed_rect(
            &mut img,
            placement.safe,
            dash,
            gap,
            (stroke / 2).max(1),
            style.safe_color,
        );
        corner_ticks(&mut img, placement.rect, tick, stroke, style.outline);
    }

    for (i, seam) in layout.seams.iter().enumerate() {
        let color = SEAM_PALETTE[i % SEAM_PALETTE.len()];
        for (face, side) in [(seam.face_a, seam.side_a), (seam.face_b, seam.side_b)] {
            seam_tick(&mut img, layout.placement(face).rect, side, tick, stroke, color);
        }
    }

    if style.draw_labels {
        match LabelFont::locate() {
            Some(font) => draw_labels(&mut img, layout, style, &font),
            None => warn!("rendering guide without labels"),
        }
    }

    Ok(img)
}

/// Scale a reference-atlas length to the actual atlas, at least one pixel.
fn scaled(len: u32, atlas_size: u32) -> u32 {
    let scaled = u64::from(len) * u64::from(atlas_size) / u64::from(REFERENCE_ATLAS);
    (scaled as u32).max(1)
}

/// Fill an axis-aligned bar, clipped to the image bounds.
fn fill_rect(img: &mut RgbaImage, x: i64, y: i64, w: i64, h: i64, color: Color) {
    let (iw, ih) = (i64::from(img.width()), i64::from(img.height()));
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + w).min(iw);
    let y1 = (y + h).min(ih);
    for py in y0..y1 {
        for px in x0..x1 {
            img.put_pixel(px as u32, py as u32, Rgba(color));
        }
    }
}

/// Stroke a rectangle outline, drawn inward from the rect bounds.
fn outline_rect(img: &mut RgbaImage, rect: PxRect, stroke: u32, color: Color) {
    let (x, y) = (i64::from(rect.x), i64::from(rect.y));
    let (w, h) = (i64::from(rect.w), i64::from(rect.h));
    let s = i64::from(stroke);
    fill_rect(img, x, y, w, s, color);
    fill_rect(img, x, y + h - s, w, s, color);
    fill_rect(img, x, y, s, h, color);
    fill_rect(img, x + w - s, y, s, h, color);
}

/// Stroke a dashed rectangle outline, drawn inward.
fn dashed_rect(img: &mut RgbaImage, rect: PxRect, dash: u32, gap: u32, stroke: u32, color: Color) {
    let (x, y) = (i64::from(rect.x), i64::from(rect.y));
    let (w, h) = (i64::from(rect.w), i64::from(rect.h));
    let s = i64::from(stroke);
    let step = i64::from(dash + gap);
    let dash = i64::from(dash);

    let mut dist = 0;
    while dist < w {
        let seg = dash.min(w - dist);
        fill_rect(img, x + dist, y, seg, s, color);
        fill_rect(img, x + dist, y + h - s, seg, s, color);
        dist += step;
    }
    let mut dist = 0;
    while dist < h {
        let seg = dash.min(h - dist);
        fill_rect(img, x, y + dist, s, seg, color);
        fill_rect(img, x + w - s, y + dist, s, seg, color);
        dist += step;
    }
}

/// L-shaped registration ticks inside every corner of a face rect.
fn corner_ticks(img: &mut RgbaImage, rect: PxRect, tick: u32, stroke: u32, color: Color) {
    let (x, y) = (i64::from(rect.x), i64::from(rect.y));
    let (w, h) = (i64::from(rect.w), i64::from(rect.h));
    let t = i64::from(tick).min(w).min(h);
    let s = i64::from(stroke);
    // Top-left.
    fill_rect(img, x, y, t, s, color);
    fill_rect(img, x, y, s, t, color);
    // Top-right.
    fill_rect(img, x + w - t, y, t, s, color);
    fill_rect(img, x + w - s, y, s, t, color);
    // Bottom-left.
    fill_rect(img, x, y + h - s, t, s, color);
    fill_rect(img, x, y + h - t, s, t, color);
    // Bottom-right.
    fill_rect(img, x + w - t, y + h - s, t, s, color);
    fill_rect(img, x + w - s, y + h - t, s, t, color);
}

/// A short color-coded bar centered on one edge, flush inside the face, so
/// the matching bar on the paired face identifies the shared box edge.
fn seam_tick(img: &mut RgbaImage, rect: PxRect, side: Side, tick: u32, stroke: u32, color: Color) {
    let edge = i64::from(rect.edge_len(side));
    let len = i64::from(tick * 2).min(edge / 3).max(1);
    let thickness = i64::from(stroke * 3);
    let (x, y) = (i64::from(rect.x), i64::from(rect.y));
    let (w, h) = (i64::from(rect.w), i64::from(rect.h));
    match side {
        Side::Top => fill_rect(img, x + (w - len) / 2, y, len, thickness, color),
        Side::Bottom => fill_rect(img, x + (w - len) / 2, y + h - thickness, len, thickness, color),
        Side::Left => fill_rect(img, x, y + (h - len) / 2, thickness, len, color),
        Side::Right => fill_rect(img, x + w - thickness, y + (h - len) / 2, thickness, len, color),
    }
}

/// Blend text onto the image at a baseline position.
fn draw_text(img: &mut RgbaImage, font: &LabelFont, text: &str, x: i64, y: i64, px: f32, color: Color) {
    let (iw, ih) = (i64::from(img.width()), i64::from(img.height()));
    font.for_each_pixel(text, px, |dx, dy, coverage| {
        let (tx, ty) = (x + i64::from(dx), y + i64::from(dy));
        if tx < 0 || ty < 0 || tx >= iw || ty >= ih {
            return;
        }
        let dst = img.get_pixel_mut(tx as u32, ty as u32);
        let alpha = u32::from(coverage) * u32::from(color[3]) / 255;
        for ch in 0..3 {
            let src = u32::from(color[ch]);
            let bg = u32::from(dst[ch]);
            dst[ch] = ((src * alpha + bg * (255 - alpha)) / 255) as u8;
        }
        dst[3] = dst[3].max(alpha as u8);
    });
}

/// Face labels inside each safe area, plus a one-line header above the grid.
fn draw_labels(img: &mut RgbaImage, layout: &Layout, style: &RenderStyle, font: &LabelFont) {
    let px = style.label_size * (layout.atlas_size as f32 / REFERENCE_ATLAS as f32);
    for placement in &layout.faces {
        let (w, h) = placement.extent;
        let text = format!("{} {}x{}", placement.face.label(), w, h);
        let x = i64::from(placement.safe.x) + i64::from((style.outline_width).max(2));
        let y = i64::from(placement.safe.y) + px.ceil() as i64;
        draw_text(img, font, &text, x, y, px, style.safe_color);
    }

    let grid_x = layout.faces.iter().map(|p| p.rect.x).min().unwrap_or(0);
    let grid_y = layout.faces.iter().map(|p| p.rect.y).min().unwrap_or(0);
    let header = format!(
        "UV unfold guide {}x{}x{}",
        layout.placement(FaceId::Front).extent.0,
        layout.placement(FaceId::Front).extent.1,
        layout.placement(FaceId::Top).extent.1,
    );
    draw_text(
        img,
        font,
        &header,
        i64::from(grid_x),
        i64::from(grid_y) - (px * 0.5).ceil() as i64,
        px,
        style.outline,
    );
}
