//! Headless engine driver (default binary).
//!
//! Stands in for the real renderer and input layers, which live outside this
//! repository: it feeds the engine a scripted command stream, ticks gravity,
//! and prints the final visible board as ASCII. Set `RUST_LOG=debug` to see
//! the engine's transition events (locks, line clears, resets).
//!
//! Usage: `gridfall [seed] [pieces]` where `pieces` is a string of kinds to
//! spawn first, e.g. `iozt`.

use anyhow::{Context, Result};
use gridfall::core::GridEngine;
use gridfall::types::{GridConfig, MoveDir, PieceKind, PieceTemplate, Rgb};

const TICKS: u32 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u32 = match args.next() {
        Some(raw) => raw.parse().context("seed must be an unsigned integer")?,
        None => 1,
    };

    let mut engine = GridEngine::new(GridConfig::default(), seed);

    if let Some(script) = args.next() {
        let mut pieces = Vec::with_capacity(script.len());
        for ch in script.chars() {
            let kind = PieceKind::from_str(&ch.to_string())
                .with_context(|| format!("unknown piece kind '{ch}'"))?;
            pieces.push(PieceTemplate {
                kind,
                rotation: 0,
                color: Rgb::new(200, 200, 200),
            });
        }
        engine.preload(pieces);
    }

    // A crude left/right/rotate pattern; inputs land before the tick, the
    // way a real frame loop delivers them.
    for tick in 0..TICKS {
        match tick % 7 {
            1 => engine.move_horizontal(MoveDir::Left),
            3 => engine.move_horizontal(MoveDir::Right),
            5 => engine.rotate(),
            _ => {}
        }
        engine.gravity_tick();
    }

    print_board(&engine);

    let preview: Vec<&str> = engine.queue_preview().map(|t| t.kind.as_str()).collect();
    println!("next: {}", preview.join(" "));

    Ok(())
}

fn print_board(engine: &GridEngine) {
    let config = engine.config();
    let mut rows =
        vec![vec!['.'; config.cols as usize]; config.visible_rows as usize];
    for cell in engine.visible_cells() {
        rows[cell.row as usize][cell.col as usize] = '#';
    }
    for row in rows {
        println!("{}", row.into_iter().collect::<String>());
    }
}
