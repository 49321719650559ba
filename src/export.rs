//! Structured coordinate record emission.
//!
//! Builds a serde-serializable description of a computed layout: per-face
//! pixel and UV rectangles plus the seam list. UV coordinates use the same
//! convention as the raster output (top-left origin, v increasing
//! downward), so downstream tools can mix both artifacts freely.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::face::Seam;
use crate::layout::{Layout, PxRect, UvRect};

/// Errors from record serialization.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Wrap JSON serialization issues.
    #[error("failed to serialize layout record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Per-face entry of the coordinate record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FaceRecord {
    /// Face rectangle in atlas pixels (top-left origin).
    pub px_rect: PxRect,
    /// Face rectangle in normalized texture space.
    pub uv_rect: UvRect,
    /// Safe area in atlas pixels.
    pub safe_px_rect: PxRect,
    /// Safe area in normalized texture space.
    pub safe_area: UvRect,
}

/// Complete machine-readable description of a computed layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutRecord {
    /// Side length of the square atlas in pixels.
    pub atlas_size: u32,
    /// Pixels per input unit.
    pub scale_px_per_unit: f64,
    /// One entry per face, keyed by the face's stable name.
    pub faces: BTreeMap<&'static str, FaceRecord>,
    /// Every physical box edge with the aligned rectangle sides.
    pub seams: Vec<Seam>,
}

impl LayoutRecord {
    /// Pretty-printed JSON. `f64` serialization preserves full precision,
    /// comfortably beyond six decimal digits.
    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the exportable record from a layout. Pure; the layout is unchanged.
pub fn layout_record(layout: &Layout) -> LayoutRecord {
    let faces = layout
        .faces
        .iter()
        .map(|p| {
            (
                p.face.as_str(),
                FaceRecord {
                    px_rect: p.rect,
                    uv_rect: p.uv,
                    safe_px_rect: p.safe,
                    safe_area: p.safe_uv,
                },
            )
        })
        .collect();
    LayoutRecord {
        atlas_size: layout.atlas_size,
        scale_px_per_unit: layout.scale,
        faces,
        seams: layout.seams.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::BoxDimensions;
    use crate::layout::{compute_layout, LayoutConfig};

    fn sample_record() -> LayoutRecord {
        let dims = BoxDimensions::new(4.0, 2.0, 3.0).unwrap();
        let layout = compute_layout(&dims, &LayoutConfig::default()).unwrap();
        layout_record(&layout)
    }

    #[test]
    fn record_carries_all_faces_and_seams() {
        let record = sample_record();
        assert_eq!(record.faces.len(), 6);
        assert_eq!(record.seams.len(), 12);
        assert!(record.faces.contains_key("front"));
        assert!(record.faces.contains_key("bottom"));
    }

    #[test]
    fn json_shape_matches_contract() {
        let json = sample_record().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let front = &value["faces"]["front"];
        assert!(front["uv_rect"]["x0"].is_number());
        assert!(front["safe_area"]["y1"].is_number());
        assert!(front["px_rect"]["w"].is_number());
        let seam = &value["seams"][0];
        assert_eq!(seam["face_a"], "front");
        assert_eq!(seam["side_a"], "right");
        assert_eq!(seam["face_b"], "right");
        assert_eq!(seam["side_b"], "left");
    }

    #[test]
    fn uv_rects_round_trip_to_pixels() {
        let record = sample_record();
        let s = f64::from(record.atlas_size);
        for face in record.faces.values() {
            assert_eq!((face.uv_rect.x0 * s).round() as u32, face.px_rect.x);
            assert_eq!((face.uv_rect.y0 * s).round() as u32, face.px_rect.y);
            assert_eq!(
                (face.uv_rect.x1 * s).round() as u32,
                face.px_rect.x + face.px_rect.w
            );
            assert_eq!(
                (face.uv_rect.y1 * s).round() as u32,
                face.px_rect.y + face.px_rect.h
            );
        }
    }

    #[test]
    fn identical_layouts_serialize_identically() {
        let a = sample_record().to_json_pretty().unwrap();
        let b = sample_record().to_json_pretty().unwrap();
        assert_eq!(a, b);
    }
}
