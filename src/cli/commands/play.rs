//! Play command - the interactive game loop

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::cli::output;
use crate::error::Error;
use crate::session::{Controller, GameOutcome, Mode, Session};

const RETRY_MESSAGE: &str = "This cell is already taken or invalid. Please choose another one.";

/// Who takes the second seat
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OpponentKind {
    /// Another human sharing the terminal
    Human,
    /// The minimax computer player (always plays O)
    Computer,
}

#[derive(Parser, Debug, Default)]
#[command(about = "Play an interactive game")]
pub struct PlayArgs {
    /// Opponent for the second seat; prompts interactively when omitted
    #[arg(long, short = 'o', value_enum)]
    pub opponent: Option<OpponentKind>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "Welcome to Tic Tac Toe!")?;
    let mode = match args.opponent {
        Some(OpponentKind::Human) => Mode::HumanVsHuman,
        Some(OpponentKind::Computer) => Mode::HumanVsComputer,
        None => prompt_mode(&mut input, &mut out)?,
    };

    run_game(mode, &mut input, &mut out)?;
    Ok(())
}

/// Ask whether the second seat is another human.
fn prompt_mode<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> crate::Result<Mode> {
    write!(out, "Do you want to play against another player? (y/n): ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }

    Ok(mode_for_answer(line.trim()))
}

/// `n`/`N` selects the computer opponent; any other answer selects two
/// humans.
pub fn mode_for_answer(answer: &str) -> Mode {
    match answer {
        "n" | "N" => Mode::HumanVsComputer,
        _ => Mode::HumanVsHuman,
    }
}

/// Drive a full game over the given streams and return its outcome.
pub fn run_game<R: BufRead, W: Write>(
    mode: Mode,
    input: &mut R,
    out: &mut W,
) -> crate::Result<GameOutcome> {
    let mut session = Session::new(mode);

    while !session.is_over() {
        output::write_board(out, session.board())?;

        match session.to_act() {
            Controller::Computer => {
                writeln!(out, "Computer's turn:")?;
                session.computer_move()?;
            }
            Controller::Human => human_turn(&mut session, input, out)?,
        }
    }

    output::write_board(out, session.board())?;
    let outcome = session
        .outcome()
        .expect("loop exits only on a terminal state");
    writeln!(out, "{}", output::outcome_message(outcome, mode))?;

    Ok(outcome)
}

/// Prompt until a legal move is read and applied. Out-of-range, occupied,
/// and unparseable input all re-prompt without advancing the turn.
fn human_turn<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> crate::Result<()> {
    loop {
        write!(
            out,
            "Player {}, enter your move (row column): ",
            session.board().to_move()
        )?;
        out.flush()?;

        let Some((row, col)) = read_move(input)? else {
            writeln!(out, "{RETRY_MESSAGE}")?;
            continue;
        };

        match session.apply(row, col) {
            Ok(_) => return Ok(()),
            Err(Error::OutOfBounds { .. } | Error::Occupied { .. }) => {
                writeln!(out, "{RETRY_MESSAGE}")?;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Read one line and parse two integers; `None` means the line did not
/// parse.
fn read_move<R: BufRead>(input: &mut R) -> crate::Result<Option<(i64, i64)>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }

    let mut tokens = line.split_whitespace().map(str::parse::<i64>);
    match (tokens.next(), tokens.next()) {
        (Some(Ok(row)), Some(Ok(col))) => Ok(Some((row, col))),
        _ => Ok(None),
    }
}
