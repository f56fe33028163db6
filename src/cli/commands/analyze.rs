//! Analyze command - exhaustive-search analysis of a single position

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::cli::output;
use crate::error::Error;
use crate::game::{Board, Player, Square};
use crate::search;

#[derive(Parser, Debug)]
#[command(about = "Analyze a position with exhaustive search")]
pub struct AnalyzeArgs {
    /// Board state: nine cells in row-major order ('-' or '.' for empty),
    /// e.g. 'XOX-X---O', with an optional '_X'/'_O' turn suffix
    pub state: String,

    /// Export the analysis as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// One scored candidate move
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMove {
    pub square: Square,
    pub score: i32,
}

/// Full analysis of a position
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub state: String,
    pub to_move: Player,
    pub moves: Vec<ScoredMove>,
    pub best: Option<ScoredMove>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.state)?;
    if !board.is_valid() {
        return Err(Error::UnreachableState {
            state: board.encode(),
        }
        .into());
    }

    let report = analyze_position(&board);

    output::print_section("Position analysis");
    println!("{board}");
    println!();
    output::print_kv("To move", &report.to_move.to_string());

    if report.moves.is_empty() {
        println!("  (state is terminal)");
    }
    for scored in &report.moves {
        output::print_kv(&scored.square.to_string(), &format_score(scored.score));
    }
    match &report.best {
        Some(best) => output::print_kv("Best move", &best.square.to_string()),
        None => output::print_kv("Best move", "none"),
    }

    if let Some(path) = &args.export {
        export_report(&report, path)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

/// Score every legal move of the position and pick the best one with the
/// same strict greater-than tie-break the game uses.
pub fn analyze_position(board: &Board) -> AnalysisReport {
    let mut scratch = *board;
    let moves: Vec<ScoredMove> = if scratch.is_terminal() {
        Vec::new()
    } else {
        search::score_moves(&mut scratch)
            .into_iter()
            .map(|(square, score)| ScoredMove { square, score })
            .collect()
    };

    let mut best: Option<ScoredMove> = None;
    let mut best_score = i32::MIN;
    for scored in &moves {
        if scored.score > best_score {
            best_score = scored.score;
            best = Some(scored.clone());
        }
    }

    AnalysisReport {
        state: board.encode(),
        to_move: board.to_move(),
        moves,
        best,
    }
}

fn format_score(score: i32) -> String {
    match score {
        1 => "+1".to_string(),
        -1 => "-1".to_string(),
        other => other.to_string(),
    }
}

fn export_report(report: &AnalysisReport, path: &Path) -> crate::Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create {}", path.display()),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    Ok(())
}
