#![cfg(feature = "std")]

//! Console front end: the blocking input loop and the game announcements.

use std::io::{self, BufRead, Write};

use log::debug;
use rand::Rng;

use crate::{
    board::Board,
    common::GameError,
    game::{Game, Outcome, Phase},
    guess::check_line,
};

/// Line-based console reading guesses from `R` and writing to `W`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompt until the user enters an acceptable target on `board`.
    ///
    /// There is no retry limit. Running out of input is reported as
    /// `UnexpectedEof` since no further answer can arrive.
    pub fn read_guess(&mut self, board: &Board) -> io::Result<(usize, usize)> {
        write!(self.output, "Enter your move (row column): ")?;
        self.output.flush()?;
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for a move",
                ));
            }
            match check_line(board, &line) {
                Ok(coord) => return Ok(coord),
                Err(e) => {
                    debug!("rejected guess {:?}: {}", line.trim_end(), e);
                    write!(self.output, "Invalid move. Try again: ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn show(&mut self, title: &str, board: &Board, reveal_ships: bool) -> io::Result<()> {
        writeln!(self.output, "{}", title)?;
        write!(self.output, "{}", board.render(reveal_ships))
    }
}

fn to_io(err: GameError) -> io::Error {
    io::Error::other(err)
}

/// Run `game` to completion against a human at `console`.
pub fn run_session<R, W, G>(
    game: &mut Game,
    rng: &mut G,
    console: &mut Console<R, W>,
) -> io::Result<Outcome>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    console.say("Welcome to Battleship!")?;
    console.show("Your board:", game.player_board(), true)?;
    console.show("Computer's board:", game.computer_board(), false)?;

    loop {
        match game.phase() {
            Phase::AwaitingPlayerGuess => {
                console.say(format_args!("===== Turn {} =====", game.turn()))?;
                let (row, col) = console.read_guess(game.computer_board())?;
                let shot = game.player_move(row as i64, col as i64).map_err(to_io)?;
                if shot.result.is_hit() {
                    console.say("You hit a ship!")?;
                } else {
                    console.say("You missed.")?;
                }
                console.show("Your board after your move:", game.player_board(), true)?;
            }
            Phase::AwaitingComputerGuess => {
                console.say("===== Computer's Turn =====")?;
                let shot = game.computer_move(rng).map_err(to_io)?;
                console.say(format_args!("Computer's move: {} {}", shot.row, shot.col))?;
                if shot.result.is_hit() {
                    console.say("Computer hit your ship!")?;
                } else {
                    console.say("Computer missed.")?;
                }
                console.show(
                    "Computer's board after its move:",
                    game.computer_board(),
                    false,
                )?;
            }
            Phase::Over(Outcome::Won) => {
                console.say(format_args!(
                    "Congratulations! You've sunk all the computer's ships in {} turns!",
                    game.turns_taken()
                ))?;
                return Ok(Outcome::Won);
            }
            Phase::Over(Outcome::Lost) => {
                console.say("Oh no! The computer has sunk all your ships.")?;
                return Ok(Outcome::Lost);
            }
        }
    }
}
