//! Face layout engine: places the six box faces into a square atlas.
//!
//! The unfold arrangement is a fixed template; only the uniform scale and
//! the offsets vary with the box proportions. The whole computation is a
//! pure function of its inputs and produces bit-identical results for
//! identical inputs.

use serde::Serialize;
use thiserror::Error;

use crate::dimensions::BoxDimensions;
use crate::face::{FaceId, Seam, Side, SEAMS};

/// Default atlas side length in pixels.
pub const DEFAULT_ATLAS_SIZE: u32 = 2048;
/// Default margin between faces and around the border, as a fraction of the
/// atlas side.
pub const DEFAULT_MARGIN: f64 = 0.02;
/// Default safe-area inset as a fraction of each face's shorter side.
pub const DEFAULT_SAFE_INSET: f64 = 0.05;

const MIN_ATLAS_SIZE: u32 = 64;
const MAX_MARGIN: f64 = 0.2;
const MAX_SAFE_INSET: f64 = 0.45;

/// Fixed unfold template: grid rows of faces, mirroring a box cut along its
/// vertical edges and flattened. The arrangement never changes per input.
const TEMPLATE: [[FaceId; 2]; 3] = [
    [FaceId::Front, FaceId::Right],
    [FaceId::Top, FaceId::Bottom],
    [FaceId::Back, FaceId::Left],
];

const TEMPLATE_COLS: usize = 2;
const TEMPLATE_ROWS: usize = 3;

/// Errors from layout computation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// A configuration value is outside its documented range.
    #[error("invalid layout config: {0}")]
    Config(String),
    /// The requested atlas size and margins leave no room for a usable face
    /// or safe area.
    #[error("layout overflow: {0}")]
    Overflow(String),
}

/// Tunable layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Side length of the square atlas in pixels. Minimum 64.
    pub atlas_size: u32,
    /// Margin separating adjacent faces and the outer faces from the atlas
    /// border, as a fraction of the atlas side. Range [0, 0.2].
    pub margin: f64,
    /// Safe-area inset as a fraction of each face's shorter side, range
    /// [0, 0.45]. The applied inset is never less than one pixel.
    pub safe_inset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            atlas_size: DEFAULT_ATLAS_SIZE,
            margin: DEFAULT_MARGIN,
            safe_inset: DEFAULT_SAFE_INSET,
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> Result<(), LayoutError> {
        if self.atlas_size < MIN_ATLAS_SIZE {
            return Err(LayoutError::Config(format!(
                "atlas_size {} is below the minimum of {MIN_ATLAS_SIZE}",
                self.atlas_size
            )));
        }
        if !self.margin.is_finite() || !(0.0..=MAX_MARGIN).contains(&self.margin) {
            return Err(LayoutError::Config(format!(
                "margin {} is outside [0, {MAX_MARGIN}]",
                self.margin
            )));
        }
        if !self.safe_inset.is_finite() || !(0.0..=MAX_SAFE_INSET).contains(&self.safe_inset) {
            return Err(LayoutError::Config(format!(
                "safe_inset {} is outside [0, {MAX_SAFE_INSET}]",
                self.safe_inset
            )));
        }
        Ok(())
    }
}

/// Axis-aligned rectangle in atlas pixel space (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PxRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl PxRect {
    /// Exclusive right edge.
    pub const fn x1(&self) -> u32 {
        self.x + self.w
    }

    /// Exclusive bottom edge.
    pub const fn y1(&self) -> u32 {
        self.y + self.h
    }

    /// Pixel length of the given edge.
    pub const fn edge_len(&self, side: Side) -> u32 {
        match side {
            Side::Top | Side::Bottom => self.w,
            Side::Left | Side::Right => self.h,
        }
    }

    /// Whether two rectangles share any pixel. Touching edges do not count.
    pub const fn intersects(&self, other: &PxRect) -> bool {
        self.x < other.x1() && other.x < self.x1() && self.y < other.y1() && other.y < self.y1()
    }

    /// Shrink by `inset` pixels on all four sides, or `None` when nothing
    /// positive would remain.
    pub const fn inset(&self, inset: u32) -> Option<PxRect> {
        if self.w <= inset * 2 || self.h <= inset * 2 {
            return None;
        }
        Some(PxRect {
            x: self.x + inset,
            y: self.y + inset,
            w: self.w - inset * 2,
            h: self.h - inset * 2,
        })
    }

    /// Normalize to [0,1] texture space over a square atlas of side
    /// `atlas_size`. Top-left origin, v increasing downward.
    pub fn to_uv(&self, atlas_size: u32) -> UvRect {
        let s = f64::from(atlas_size);
        UvRect {
            x0: f64::from(self.x) / s,
            y0: f64::from(self.y) / s,
            x1: f64::from(self.x1()) / s,
            y1: f64::from(self.y1()) / s,
        }
    }
}

/// Normalized texture-space rectangle. Top-left origin, v increasing
/// downward, matching the raster output exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UvRect {
    /// Left edge, normalized.
    pub x0: f64,
    /// Top edge, normalized.
    pub y0: f64,
    /// Right edge, normalized.
    pub x1: f64,
    /// Bottom edge, normalized.
    pub y1: f64,
}

/// Where one face landed in the atlas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePlacement {
    /// Which face this is.
    pub face: FaceId,
    /// Real extents of the face in the caller's unit, for labeling.
    pub extent: (f64, f64),
    /// Face rectangle in atlas pixels.
    pub rect: PxRect,
    /// Safe area, strictly inside `rect`.
    pub safe: PxRect,
    /// `rect` in normalized texture space.
    pub uv: UvRect,
    /// `safe` in normalized texture space.
    pub safe_uv: UvRect,
}

/// Complete immutable layout result, consumed by the renderer and the
/// exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Side length of the square atlas in pixels.
    pub atlas_size: u32,
    /// Pixels per input unit.
    pub scale: f64,
    /// One placement per face, in [`FaceId::ALL`] order.
    pub faces: [FacePlacement; 6],
    /// The static seam table.
    pub seams: &'static [Seam],
}

impl Layout {
    /// Placement for a specific face.
    pub fn placement(&self, face: FaceId) -> &FacePlacement {
        &self.faces[face.index()]
    }
}

/// Place all six faces into a square atlas.
///
/// A single scale factor (pixels per unit) is chosen so the template grid
/// fills as much of the atlas as the margins allow while every face keeps
/// its true aspect ratio. Fails rather than clamping when any face or safe
/// area would collapse.
pub fn compute_layout(dims: &BoxDimensions, config: &LayoutConfig) -> Result<Layout, LayoutError> {
    config.validate()?;
    let aspect = dims.normalized();
    let size = f64::from(config.atlas_size);
    let margin = (size * config.margin).round() as u32;

    // Per-column / per-row maxima of the faces' unitless extents.
    let mut col_units = [0.0f64; TEMPLATE_COLS];
    let mut row_units = [0.0f64; TEMPLATE_ROWS];
    for (r, row) in TEMPLATE.iter().enumerate() {
        for (c, face) in row.iter().enumerate() {
            let (w, h) = face.extent(&aspect);
            col_units[c] = col_units[c].max(w);
            row_units[r] = row_units[r].max(h);
        }
    }

    let avail_w = size - f64::from(margin) * (TEMPLATE_COLS as f64 + 1.0);
    let avail_h = size - f64::from(margin) * (TEMPLATE_ROWS as f64 + 1.0);
    if avail_w <= 0.0 || avail_h <= 0.0 {
        return Err(LayoutError::Overflow(format!(
            "margin {} leaves no drawing area in a {} px atlas",
            config.margin, config.atlas_size
        )));
    }

    let sum_cols: f64 = col_units.iter().sum();
    let sum_rows: f64 = row_units.iter().sum();
    let scale = (avail_w / sum_cols).min(avail_h / sum_rows);

    // Flooring keeps every row and column provably inside the available
    // span; paired seam edges share an unscaled extent, so they floor to
    // identical pixel lengths.
    let to_px = |units: f64| (units * scale).floor() as u32;
    let col_px = col_units.map(to_px);
    let row_px = row_units.map(to_px);

    let grid_w: u32 = col_px.iter().sum::<u32>() + margin * (TEMPLATE_COLS as u32 - 1);
    let grid_h: u32 = row_px.iter().sum::<u32>() + margin * (TEMPLATE_ROWS as u32 - 1);
    let grid_x0 = (config.atlas_size - grid_w) / 2;
    let grid_y0 = (config.atlas_size - grid_h) / 2;

    let mut faces: [Option<FacePlacement>; 6] = [None; 6];
    let mut cell_y = grid_y0;
    for (r, row) in TEMPLATE.iter().enumerate() {
        let mut cell_x = grid_x0;
        for (c, &face) in row.iter().enumerate() {
            let (unit_w, unit_h) = face.extent(&aspect);
            let fw = to_px(unit_w);
            let fh = to_px(unit_h);
            if fw == 0 || fh == 0 {
                return Err(LayoutError::Overflow(format!(
                    "face {} collapses to {fw}x{fh} px at {scale:.3} px/unit",
                    face.as_str()
                )));
            }

            // Centered in its grid cell; cell extents bound the face by
            // construction (column/row maxima).
            let rect = PxRect {
                x: cell_x + (col_px[c] - fw) / 2,
                y: cell_y + (row_px[r] - fh) / 2,
                w: fw,
                h: fh,
            };

            let inset = ((config.safe_inset * f64::from(fw.min(fh))).round() as u32).max(1);
            let safe = rect.inset(inset).ok_or_else(|| {
                LayoutError::Overflow(format!(
                    "safe area of face {} degenerates at inset {inset} px (face is {fw}x{fh})",
                    face.as_str()
                ))
            })?;

            faces[face.index()] = Some(FacePlacement {
                face,
                extent: face.extent(dims),
                rect,
                safe,
                uv: rect.to_uv(config.atlas_size),
                safe_uv: safe.to_uv(config.atlas_size),
            });
            cell_x += col_px[c] + margin;
        }
        cell_y += row_px[r] + margin;
    }

    let faces = faces.map(|p| p.expect("template names every face exactly once"));

    Ok(Layout {
        atlas_size: config.atlas_size,
        scale,
        faces,
        seams: &SEAMS,
    })
}
