//! Grid engine - piece lifecycle and grid transitions.
//!
//! Owns the playfield grid, the optional active piece, and the upcoming
//! queue. External drivers call the mutators (`move_horizontal`, `rotate`,
//! `gravity_tick`, `reset`); an external renderer reads back `visible_cells`
//! and `queue_preview`. Everything is single-threaded and synchronous; each
//! call runs to completion, so no partial footprint is ever observable.
//!
//! Illegal moves and rotations are policy rejections, not errors: they leave
//! the state untouched and return nothing. The one terminal condition, stack
//! overflow into the hidden buffer, is absorbed internally by `reset` - the
//! caller only sees the board go empty.

use arrayvec::ArrayVec;

use gridfall_types::{CellView, GridConfig, MoveDir, PieceKind, PieceTemplate, Rgb};

use crate::grid::Grid;
use crate::pieces::{self, MAX_PIECE_SPAN};
use crate::rng::PieceQueue;

/// The falling piece: a catalog template plus its anchor, the top-left
/// corner of the shape's bounding box in grid coordinates.
///
/// Exists only between spawn and lock; the engine holds at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: u8,
    pub color: Rgb,
    pub col: i8,
    pub row: i8,
}

impl ActivePiece {
    /// Absolute grid coordinates of the four occupied cells.
    pub fn cells(&self) -> [(i8, i8); 4] {
        pieces::shape(self.kind, self.rotation).map(|(dx, dy)| (self.col + dx, self.row + dy))
    }
}

/// The grid engine. See the module docs for the call surface.
#[derive(Debug, Clone)]
pub struct GridEngine {
    config: GridConfig,
    grid: Grid,
    active: Option<ActivePiece>,
    queue: PieceQueue,
}

impl GridEngine {
    /// Create an engine with an empty grid and a prefilled queue.
    ///
    /// Panics on misconfiguration (grid too small to hold a piece, empty
    /// queue minimum) - that is a programmer error, caught at construction
    /// rather than mid-game.
    pub fn new(config: GridConfig, seed: u32) -> Self {
        assert!(
            config.cols as i8 >= MAX_PIECE_SPAN,
            "grid must be at least {MAX_PIECE_SPAN} columns wide"
        );
        assert!(
            config.visible_rows as i8 >= MAX_PIECE_SPAN,
            "grid must have at least {MAX_PIECE_SPAN} visible rows"
        );
        assert!(config.hidden_rows >= 1, "at least one hidden row is required");
        assert!(config.queue_min >= 1, "queue minimum must be at least 1");

        Self {
            config,
            grid: Grid::new(config.cols, config.total_rows()),
            active: None,
            queue: PieceQueue::new(seed, config.queue_min),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Clear every cell and discard the active piece. The queue survives:
    /// upcoming pieces carry over into the next game.
    pub fn reset(&mut self) {
        self.grid.clear_all();
        self.active = None;
        log::debug!("board reset");
    }

    /// Push templates onto the front of the queue, to be spawned next in the
    /// given order. Useful for scripted or fully deterministic sequences.
    pub fn preload(&mut self, templates: impl IntoIterator<Item = PieceTemplate>) {
        let staged: Vec<PieceTemplate> = templates.into_iter().collect();
        for template in staged.into_iter().rev() {
            self.queue.push_front(template);
        }
    }

    /// Take the queue front and start it falling, horizontally centered in
    /// the top row of the hidden buffer. No collision test happens here; the
    /// fresh piece is first evaluated on the following gravity tick.
    fn spawn_next(&mut self) {
        let template = self.queue.pop();
        let width = pieces::shape_width(template.kind, template.rotation);
        let piece = ActivePiece {
            kind: template.kind,
            rotation: template.rotation,
            color: template.color,
            col: self.config.cols as i8 / 2 - width / 2,
            row: 0,
        };
        for (col, row) in piece.cells() {
            self.grid.fill_cell(col, row, piece.color);
        }
        log::trace!(
            "spawned {:?} rot={} at col {}",
            piece.kind,
            piece.rotation,
            piece.col
        );
        self.active = Some(piece);
    }

    /// Shift the active piece one column left or right.
    ///
    /// Legal iff every shifted cell stays within the columns and lands on no
    /// locked cell. Illegal moves (or no active piece) are silent no-ops.
    pub fn move_horizontal(&mut self, dir: MoveDir) {
        let Some(piece) = self.active else {
            return;
        };
        let dx: i8 = match dir {
            MoveDir::Left => -1,
            MoveDir::Right => 1,
        };

        let cells = piece.cells();
        let legal = cells.iter().all(|&(col, row)| {
            let shifted = col + dx;
            shifted >= 0 && shifted < self.config.cols as i8 && !self.grid.is_locked(shifted, row)
        });
        if !legal {
            return;
        }

        self.reposition(
            &cells,
            ActivePiece {
                col: piece.col + dx,
                ..piece
            },
        );
    }

    /// Advance the active piece to its next rotation index (cyclic) at the
    /// same anchor. No kick search: if the rotated footprint leaves the grid
    /// or overlaps a locked cell, the rotation is rejected unchanged.
    pub fn rotate(&mut self) {
        let Some(piece) = self.active else {
            return;
        };
        let rotated = ActivePiece {
            rotation: (piece.rotation + 1) % pieces::rotation_count(piece.kind),
            ..piece
        };

        let legal = rotated
            .cells()
            .iter()
            .all(|&(col, row)| self.grid.in_bounds(col, row) && !self.grid.is_locked(col, row));
        if !legal {
            return;
        }

        self.reposition(&piece.cells(), rotated);
    }

    /// The per-frame transition.
    ///
    /// With no active piece, spawning consumes the tick. Otherwise the piece
    /// either falls one row, or - when the floor or a locked cell blocks the
    /// row below - locks in place, after which the touched rows are scanned
    /// for line clears. Locking into the hidden buffer means the stack has
    /// overflowed: the board resets (queue preserved).
    pub fn gravity_tick(&mut self) {
        let Some(piece) = self.active else {
            self.spawn_next();
            return;
        };

        let cells = piece.cells();
        let blocked = cells.iter().any(|&(col, row)| {
            row + 1 >= self.grid.rows() as i8 || self.grid.is_locked(col, row + 1)
        });

        if blocked {
            self.lock_active(&piece);
            return;
        }

        self.reposition(
            &cells,
            ActivePiece {
                row: piece.row + 1,
                ..piece
            },
        );
    }

    /// Move the active piece footprint from `old_cells` to `next`'s cells.
    fn reposition(&mut self, old_cells: &[(i8, i8); 4], next: ActivePiece) {
        for &(col, row) in old_cells {
            self.grid.clear_cell(col, row);
        }
        for (col, row) in next.cells() {
            self.grid.fill_cell(col, row, next.color);
        }
        self.active = Some(next);
    }

    /// Commit the active piece to the grid, then handle overflow and clears.
    fn lock_active(&mut self, piece: &ActivePiece) {
        let cells = piece.cells();
        let mut touched: ArrayVec<u8, 4> = ArrayVec::new();
        for &(col, row) in &cells {
            self.grid.lock_cell(col, row);
            let row = row as u8;
            if !touched.contains(&row) {
                touched.push(row);
            }
        }
        log::debug!("piece locked: kind={:?} rows={:?}", piece.kind, touched);

        // Any locked cell still inside the hidden buffer means the stack has
        // reached the top: game over, all progress lost.
        if cells
            .iter()
            .any(|&(_, row)| (row as u8) < self.config.hidden_rows)
        {
            log::debug!("stack overflow into hidden rows");
            self.reset();
            return;
        }

        let cleared = self.grid.clear_lines(&touched);
        if !cleared.is_empty() {
            log::debug!("lines cleared: {:?}", cleared.as_slice());
        }
        self.active = None;
    }

    /// Read-only view of every filled cell in the visible area, with rows
    /// translated into render space (hidden buffer subtracted).
    pub fn visible_cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let hidden = self.config.hidden_rows;
        let cols = self.grid.cols();
        let rows = self.grid.rows();
        (hidden..rows).flat_map(move |row| {
            (0..cols).filter_map(move |col| {
                let cell = self.grid.cell(col as i8, row as i8)?;
                cell.filled.then_some(CellView {
                    col,
                    row: row - hidden,
                    color: cell.color,
                })
            })
        })
    }

    /// Ordered view of the upcoming queue, front (next to spawn) first.
    pub fn queue_preview(&self) -> impl Iterator<Item = &PieceTemplate> {
        self.queue.iter()
    }

    /// Current queue length. Never drops below the configured minimum.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}
