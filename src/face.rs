//! Static box topology: faces, rectangle sides, and the seam table.
//!
//! A box always has exactly six faces and twelve edges; everything in this
//! module is a fixed property of that topology, not derived per input.

use serde::Serialize;

use crate::dimensions::BoxDimensions;

/// Identifier for one of the six box faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceId {
    /// The face bounded by width and height, toward the viewer.
    Front,
    /// The opposite width-by-height face.
    Back,
    /// The depth-by-height face on the -X side.
    Left,
    /// The depth-by-height face on the +X side.
    Right,
    /// The width-by-depth face on the +Y side.
    Top,
    /// The width-by-depth face on the -Y side.
    Bottom,
}

impl FaceId {
    /// Canonical ordering used wherever a face list is produced.
    pub const ALL: [FaceId; 6] = [
        FaceId::Front,
        FaceId::Back,
        FaceId::Left,
        FaceId::Right,
        FaceId::Top,
        FaceId::Bottom,
    ];

    /// Stable lowercase key used in records and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            FaceId::Front => "front",
            FaceId::Back => "back",
            FaceId::Left => "left",
            FaceId::Right => "right",
            FaceId::Top => "top",
            FaceId::Bottom => "bottom",
        }
    }

    /// Uppercase label drawn on the raster guide.
    pub const fn label(self) -> &'static str {
        match self {
            FaceId::Front => "FRONT",
            FaceId::Back => "BACK",
            FaceId::Left => "LEFT",
            FaceId::Right => "RIGHT",
            FaceId::Top => "TOP",
            FaceId::Bottom => "BOTTOM",
        }
    }

    /// Position in [`FaceId::ALL`].
    pub const fn index(self) -> usize {
        match self {
            FaceId::Front => 0,
            FaceId::Back => 1,
            FaceId::Left => 2,
            FaceId::Right => 3,
            FaceId::Top => 4,
            FaceId::Bottom => 5,
        }
    }

    /// The two box extents bounding this face, as the (width, height) of its
    /// unfolded rectangle.
    pub fn extent(self, dims: &BoxDimensions) -> (f64, f64) {
        match self {
            FaceId::Front | FaceId::Back => (dims.width, dims.height),
            FaceId::Left | FaceId::Right => (dims.depth, dims.height),
            FaceId::Top | FaceId::Bottom => (dims.width, dims.depth),
        }
    }
}

/// One side of a placed face rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The edge at minimum Y.
    Top,
    /// The edge at maximum Y.
    Bottom,
    /// The edge at minimum X.
    Left,
    /// The edge at maximum X.
    Right,
}

impl Side {
    /// Stable lowercase key used in records and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// One physical box edge shared by two faces, with the rectangle side that
/// edge occupies on each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Seam {
    /// First participating face.
    pub face_a: FaceId,
    /// The rectangle side of `face_a` lying on the shared edge.
    pub side_a: Side,
    /// Second participating face.
    pub face_b: FaceId,
    /// The rectangle side of `face_b` lying on the shared edge.
    pub side_b: Side,
}

const fn seam(face_a: FaceId, side_a: Side, face_b: FaceId, side_b: Side) -> Seam {
    Seam {
        face_a,
        side_a,
        face_b,
        side_b,
    }
}

/// All twelve box edges. Faces around the vertical axis form the ring
/// front -> right -> back -> left; the top and bottom faces close the rims.
/// Every (face, side) combination appears exactly once.
pub const SEAMS: [Seam; 12] = [
    // Vertical ring.
    seam(FaceId::Front, Side::Right, FaceId::Right, Side::Left),
    seam(FaceId::Right, Side::Right, FaceId::Back, Side::Left),
    seam(FaceId::Back, Side::Right, FaceId::Left, Side::Left),
    seam(FaceId::Left, Side::Right, FaceId::Front, Side::Left),
    // Top rim.
    seam(FaceId::Top, Side::Bottom, FaceId::Front, Side::Top),
    seam(FaceId::Top, Side::Right, FaceId::Right, Side::Top),
    seam(FaceId::Top, Side::Top, FaceId::Back, Side::Top),
    seam(FaceId::Top, Side::Left, FaceId::Left, Side::Top),
    // Bottom rim.
    seam(FaceId::Bottom, Side::Top, FaceId::Front, Side::Bottom),
    seam(FaceId::Bottom, Side::Right, FaceId::Right, Side::Bottom),
    seam(FaceId::Bottom, Side::Bottom, FaceId::Back, Side::Bottom),
    seam(FaceId::Bottom, Side::Left, FaceId::Left, Side::Bottom),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn six_faces_in_canonical_order() {
        assert_eq!(FaceId::ALL.len(), 6);
        for (i, face) in FaceId::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn opposite_faces_share_extents() {
        let dims = BoxDimensions::new(4.0, 2.0, 3.0).unwrap();
        assert_eq!(FaceId::Front.extent(&dims), FaceId::Back.extent(&dims));
        assert_eq!(FaceId::Left.extent(&dims), FaceId::Right.extent(&dims));
        assert_eq!(FaceId::Top.extent(&dims), FaceId::Bottom.extent(&dims));
        assert_eq!(FaceId::Front.extent(&dims), (4.0, 2.0));
        assert_eq!(FaceId::Right.extent(&dims), (3.0, 2.0));
        assert_eq!(FaceId::Top.extent(&dims), (4.0, 3.0));
    }

    #[test]
    fn seam_table_covers_every_face_side_once() {
        let mut seen = HashSet::new();
        for seam in SEAMS {
            assert_ne!(seam.face_a, seam.face_b, "a face cannot seam to itself");
            assert!(seen.insert((seam.face_a, seam.side_a)));
            assert!(seen.insert((seam.face_b, seam.side_b)));
        }
        // 12 edges touching 2 faces each: all 24 (face, side) slots used.
        assert_eq!(seen.len(), 24);
    }

    #[test]
    fn seams_pair_edges_of_equal_physical_length() {
        let dims = BoxDimensions::new(4.0, 2.0, 3.0).unwrap();
        for seam in SEAMS {
            let len = |face: FaceId, side: Side| {
                let (w, h) = face.extent(&dims);
                match side {
                    Side::Top | Side::Bottom => w,
                    Side::Left | Side::Right => h,
                }
            };
            assert_eq!(
                len(seam.face_a, seam.side_a),
                len(seam.face_b, seam.side_b),
                "seam {seam:?} pairs edges of different length"
            );
        }
    }
}
