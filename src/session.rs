use std::io::{self, Write};
use tracing::{debug, info};

use crate::error::InputError;
use crate::shape::Operands;
use crate::Game;

/// Names of the numbers, used in the prompts.
const ORDINALS: [&str; 4] = ["first", "second", "third", "fourth"];

/// Message printed when a game has no solutions.
pub const NO_SOLUTIONS: &str = "No solutions exist.";

/// A source of user input.
pub trait Prompt
{
    /// Show `prompt` and read a single line.
    ///
    /// Returns `None` when no more input is available, and an error when
    /// reading the input fails.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Parse a single number as entered by the user.
pub fn parse_number(input: &str) -> Result<i64, InputError>
{
    let input = input.trim();
    input.parse().map_err(|_| InputError::NotAnInteger(input.to_string()))
}

/// Ask the user for the four numbers of a game.
///
/// Stops at the first answer that is not an integer.
pub fn read_numbers<P: Prompt>(prompt: &mut P) -> Result<Operands, InputError>
{
    let mut nrs = Operands::default();
    for (nr, ordinal) in nrs.iter_mut().zip(ORDINALS.iter())
    {
        let line = prompt.ask(&format!("what is the {} number? ", ordinal))?
            .ok_or(InputError::Closed)?;
        *nr = parse_number(&line)?;
    }

    Ok(nrs)
}

/// Write `solutions` one per line, or a notice if there are none.
pub fn report<W: Write>(out: &mut W, solutions: &[String]) -> io::Result<()>
{
    if solutions.is_empty()
    {
        writeln!(out, "{}", NO_SOLUTIONS)?;
    }
    for solution in solutions
    {
        writeln!(out, "{}", solution)?;
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State
{
    Prompting,
    Exiting
}

/// Run an interactive session.
///
/// The user is asked for four numbers at a time, and the solutions for each
/// set of numbers are written to `out`. The session ends on the first input
/// that is not an integer, or when the input is closed. Returns the number
/// of games played, or the error if reading the input fails.
pub fn run<P, W>(game: &Game, prompt: &mut P, out: &mut W) -> io::Result<usize>
where P: Prompt, W: Write
{
    writeln!(out, "you have entered interactive mode")?;
    writeln!(out, "enter a non-numerical value at any time to stop running")?;

    let mut games = 0;
    let mut state = State::Prompting;
    while state == State::Prompting
    {
        state = match read_numbers(prompt)
            {
                Ok(nrs) => {
                    debug!("solving {:?}", nrs);
                    report(out, &game.solve(&nrs))?;
                    games += 1;
                    State::Prompting
                },
                Err(InputError::Io(err)) => return Err(err),
                Err(err) => {
                    info!("ending session: {}", err);
                    State::Exiting
                }
            };
    }

    writeln!(out, "leaving 24 game")?;
    Ok(games)
}
