//! Shared data types and default playfield dimensions.
//!
//! Pure data with no dependencies, usable from the engine core, external
//! renderers, and test harnesses alike.
//!
//! # Playfield dimensions
//!
//! The default grid is the standard falling-block layout:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Visible rows**: 20 (indexed top to bottom in render space)
//! - **Hidden rows**: 4 buffer rows above the visible area, used for piece
//!   spawning and overflow (game over) detection
//!
//! Internally rows run `0..hidden_rows + visible_rows` top to bottom, so the
//! visible playfield starts at row `hidden_rows`.

/// Default number of columns.
pub const BOARD_COLS: u8 = 10;

/// Default number of visible rows.
pub const VISIBLE_ROWS: u8 = 20;

/// Default number of hidden buffer rows above the visible area.
pub const HIDDEN_ROWS: u8 = 4;

/// Default minimum number of queued upcoming pieces.
pub const QUEUE_MIN: usize = 3;

/// The seven tetromino piece kinds.
///
/// S/Z and L/J are mirror pairs; I is the line piece, O the square, T the tee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in draw-index order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Horizontal move direction for the active piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDir {
    Left,
    Right,
}

/// An RGB color assigned to a piece at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single grid cell.
///
/// `filled` marks the cell as occupied for rendering and line scans; `locked`
/// marks it as permanently resting and therefore collidable. The falling
/// piece's own footprint is `filled` but never `locked`, so a piece does not
/// collide with its previous position when a move is re-evaluated.
/// Invariant: `locked` implies `filled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub filled: bool,
    pub locked: bool,
    pub color: Rgb,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        filled: false,
        locked: false,
        color: Rgb::BLACK,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Cell::EMPTY
    }
}

/// An upcoming piece as held in the queue: everything but the anchor,
/// which is assigned at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceTemplate {
    pub kind: PieceKind,
    /// Rotation index into the kind's valid rotation set.
    pub rotation: u8,
    pub color: Rgb,
}

/// One occupied cell in render space, as consumed by an external renderer.
///
/// `row` is already translated out of the hidden buffer: row 0 is the top
/// visible row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub col: u8,
    pub row: u8,
    pub color: Rgb,
}

/// Construction-time grid dimensions and queue sizing.
///
/// These are fixed for the lifetime of an engine; they are not runtime
/// reconfigurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub cols: u8,
    pub visible_rows: u8,
    pub hidden_rows: u8,
    pub queue_min: usize,
}

impl GridConfig {
    /// Total row count including the hidden buffer.
    pub fn total_rows(&self) -> u8 {
        self.hidden_rows + self.visible_rows
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: BOARD_COLS,
            visible_rows: VISIBLE_ROWS,
            hidden_rows: HIDDEN_ROWS,
            queue_min: QUEUE_MIN,
        }
    }
}
