use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use minegrid_core::{Board, BoardRecord};

pub(crate) fn load(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read board from {}", path.display()))?;
    let record: BoardRecord = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a board record", path.display()))?;
    let board = Board::from_record(&record)
        .with_context(|| format!("Could not restore board from {}", path.display()))?;

    log::info!(
        "Loaded {}x{} board with {} mines from {}",
        board.width(),
        board.height(),
        board.mine_count(),
        path.display()
    );
    Ok(board)
}

pub(crate) fn save(path: &Path, board: &Board) -> Result<()> {
    let json = serde_json::to_string_pretty(&board.to_record())?;
    fs::write(path, json).with_context(|| format!("Could not write board to {}", path.display()))?;

    log::info!("Saved board to {}", path.display());
    Ok(())
}
