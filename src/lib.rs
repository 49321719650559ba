#![warn(missing_docs)]
//! UV unfold guide generation for rectangular boxes.
//!
//! Given real-world width/height/depth, computes a deterministic packing of
//! the six box faces into a square texture atlas, then renders a raster
//! guide (outlines, safe areas, seam markers, labels) and exports the exact
//! pixel and UV rectangles for downstream 3D tools.
//!
//! The pipeline is: validate dimensions, compute the [`Layout`], then feed
//! that single immutable value to [`render_layout`] and [`layout_record`]
//! independently.

mod artifacts;
mod dimensions;
mod export;
mod face;
mod font;
mod layout;
mod render;

pub use artifacts::{write_artifacts, ArtifactWriteError};
pub use dimensions::{BoxDimensions, InvalidDimension};
pub use export::{layout_record, ExportError, FaceRecord, LayoutRecord};
pub use face::{FaceId, Seam, Side, SEAMS};
pub use font::LabelFont;
pub use layout::{
    compute_layout, FacePlacement, Layout, LayoutConfig, LayoutError, PxRect, UvRect,
    DEFAULT_ATLAS_SIZE, DEFAULT_MARGIN, DEFAULT_SAFE_INSET,
};
pub use render::{render_layout, Color, RenderError, RenderStyle};
