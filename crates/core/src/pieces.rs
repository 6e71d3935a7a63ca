//! Shape catalog - immutable tetromino geometry.
//!
//! Every `(kind, rotation index)` pair maps to four cell offsets measured
//! from the top-left corner of the piece's bounding box (the anchor). Shapes
//! are tight: each one has at least one cell in column 0 and one in row 0.
//!
//! Rotation counts follow piece symmetry: the O piece has 1 orientation,
//! S/Z/I have 2, and L/J/T have the full 4. There is no kick table; rotation
//! legality is decided by the caller at the unchanged anchor.

use gridfall_types::PieceKind;

/// Offset of a single cell relative to the piece anchor (col, row).
pub type CellOffset = (i8, i8);

/// Shape of a piece: 4 cell offsets from the anchor.
pub type PieceShape = [CellOffset; 4];

/// Widest/tallest extent any shape can have.
pub const MAX_PIECE_SPAN: i8 = 4;

/// Number of valid rotation indices for a piece kind.
pub fn rotation_count(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::O => 1,
        PieceKind::I | PieceKind::S | PieceKind::Z => 2,
        PieceKind::T | PieceKind::J | PieceKind::L => 4,
    }
}

/// Get the shape for a piece kind and rotation index.
///
/// The rotation index is taken modulo the kind's rotation count, so cyclic
/// callers never index out of the catalog.
pub fn shape(kind: PieceKind, rotation: u8) -> PieceShape {
    let rotation = rotation % rotation_count(kind);
    match kind {
        PieceKind::I => i_shape(rotation),
        PieceKind::O => o_shape(),
        PieceKind::T => t_shape(rotation),
        PieceKind::S => s_shape(rotation),
        PieceKind::Z => z_shape(rotation),
        PieceKind::J => j_shape(rotation),
        PieceKind::L => l_shape(rotation),
    }
}

/// Width of the bounding box for a kind/rotation, used for spawn centering.
pub fn shape_width(kind: PieceKind, rotation: u8) -> i8 {
    shape(kind, rotation)
        .iter()
        .map(|&(dx, _)| dx + 1)
        .max()
        .unwrap_or(0)
}

/// I piece: horizontal bar, then vertical.
fn i_shape(rotation: u8) -> PieceShape {
    match rotation {
        0 => [(0, 0), (1, 0), (2, 0), (3, 0)],
        _ => [(0, 0), (0, 1), (0, 2), (0, 3)],
    }
}

/// O piece: 2x2 square, rotation invariant.
fn o_shape() -> PieceShape {
    [(0, 0), (1, 0), (0, 1), (1, 1)]
}

fn t_shape(rotation: u8) -> PieceShape {
    match rotation {
        0 => [(0, 0), (1, 0), (2, 0), (1, 1)],
        1 => [(1, 0), (0, 1), (1, 1), (1, 2)],
        2 => [(1, 0), (0, 1), (1, 1), (2, 1)],
        _ => [(0, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn s_shape(rotation: u8) -> PieceShape {
    match rotation {
        0 => [(1, 0), (2, 0), (0, 1), (1, 1)],
        _ => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_shape(rotation: u8) -> PieceShape {
    match rotation {
        0 => [(0, 0), (1, 0), (1, 1), (2, 1)],
        _ => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_shape(rotation: u8) -> PieceShape {
    match rotation {
        0 => [(1, 0), (1, 1), (0, 2), (1, 2)],
        1 => [(0, 0), (0, 1), (1, 1), (2, 1)],
        2 => [(0, 0), (1, 0), (0, 1), (0, 2)],
        _ => [(0, 0), (1, 0), (2, 0), (2, 1)],
    }
}

fn l_shape(rotation: u8) -> PieceShape {
    match rotation {
        0 => [(0, 0), (0, 1), (0, 2), (1, 2)],
        1 => [(0, 0), (1, 0), (2, 0), (0, 1)],
        2 => [(0, 0), (1, 0), (1, 1), (1, 2)],
        _ => [(2, 0), (0, 1), (1, 1), (2, 1)],
    }
}
