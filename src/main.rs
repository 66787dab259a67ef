use clap::{ArgAction, Parser};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

use make24::session::{self, Prompt};
use make24::{Game, Operands, DEFAULT_MAX_SOLUTIONS, TARGET};

/// Solve the 24 game.
#[derive(Parser, Debug)]
#[command(name = "make24", version)]
struct Args
{
    /// The four card numbers. Without them, numbers are asked for
    /// interactively
    #[arg(long, num_args = 4, action = ArgAction::Set, value_names = ["N1", "N2", "N3", "N4"],
        allow_negative_numbers = true)]
    nums: Option<Vec<i64>>,

    /// Number of solutions to display
    #[arg(long = "max-sols", alias = "max_sols", value_name = "S", default_value_t = DEFAULT_MAX_SOLUTIONS)]
    max_sols: usize,

    /// Show all solutions
    #[arg(long = "no-max-sols", alias = "no_max_sols")]
    no_max_sols: bool,

    /// Value the expressions should evaluate to
    #[arg(short, long, default_value_t = TARGET, allow_negative_numbers = true)]
    target: i64,

    /// Log progress to stderr (-v for debug, -vv for trace output)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8
}

/// Prompts on the terminal, with line editing and history.
struct Terminal
{
    editor: DefaultEditor
}

impl Prompt for Terminal
{
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>
    {
        match self.editor.readline(prompt)
        {
            Ok(line) => {
                if let Err(err) = self.editor.add_history_entry(line.as_str())
                {
                    warn!("unable to add history entry: {}", err);
                }
                Ok(Some(line))
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Io(err)) => Err(err),
            Err(err) => Err(io::Error::other(err.to_string()))
        }
    }
}

fn init_logging(verbose: u8)
{
    let level = match verbose
        {
            0 => return,
            1 => Level::DEBUG,
            _ => Level::TRACE
        };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber)
    {
        eprintln!("Failed to set tracing subscriber: {}", err);
    }
}

fn main() -> rustyline::Result<()>
{
    let args = Args::parse();
    init_logging(args.verbose);

    let max_solutions = if args.no_max_sols { None } else { Some(args.max_sols) };
    let game = Game::new(max_solutions).with_target(args.target);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.nums
    {
        Some(nums) => {
            let nrs: Operands = [nums[0], nums[1], nums[2], nums[3]];
            session::report(&mut out, &game.solve(&nrs))?;
        },
        None => {
            let mut terminal = Terminal { editor: DefaultEditor::new()? };
            session::run(&game, &mut terminal, &mut out)?;
        }
    }

    Ok(())
}
