//! The play module ties the scoring engine to the terminal. It contains the `init()` function that
//! parses the command line, sets up logging and runs the game loop, as well as the welcome message.

use anyhow::Result;
use clap::Parser;
use console::{style, Term};
use tracing_subscriber::EnvFilter;

use crate::game::Game;
use crate::input::{parse_sheet, play_again, take_game, FrameSheet};
use crate::messages::{scorecard, total_line};

/// This struct holds information about the application when it comes to the command-line argument
/// parser of choice, which is clap. Every option can also be given through the environment.
#[derive(Parser)]
#[command(name = "bowlscore", version, about)]
#[command(next_line_help = true)]
struct Cli {
    /// Score a whole game written out as a frame sheet instead of prompting for it.
    ///
    /// A sheet is ten frames separated by spaces. Each frame is one to three comma-separated rolls,
    /// written as a number of pins or as X for a strike, such as "X 7,3 9,0 X X 8,1 0,10 X 6,2
    /// X,7,3". A strike in frames one to nine may be written on its own.
    #[arg(long, value_parser = parse_sheet)]
    #[arg(env = "BOWLSCORE_FRAMES", value_name = "SHEET")]
    frames: Option<FrameSheet>,
    /// Score a single game and exit without asking to play another one.
    #[arg(long, env = "BOWLSCORE_ONCE")]
    once: bool,
    /// Log what the scorer does to the standard error.
    ///
    /// The BOWLSCORE_LOG environment variable takes precedence over this flag, and accepts any
    /// tracing filter directive.
    #[arg(short, long, env = "BOWLSCORE_VERBOSE")]
    verbose: bool,
}

/// Initializes the program and handles the whole session. This is a `main()` function of sorts
/// though it is still called from main.rs.
///
/// With a frame sheet on the command line, the game is scored and printed right away. Otherwise the
/// player is prompted for every roll, and asked to score another game at the end of each one.
///
/// # Errors
///
/// The function may return any one of the following errors:
///
/// - io::Error
/// - dialoguer::Error
/// - bowlscore::ScoreError
pub fn init() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let term = Term::stdout();

    if let Some(sheet) = cli.frames {
        let game = sheet.into_game()?;
        return show_game(&term, &game);
    }

    // show the init message
    init_message(&term)?;

    // game loop
    loop {
        let game = take_game(&term)?;
        show_game(&term, &game)?;

        if cli.once || !play_again(&term)? {
            break Ok(());
        }

        term.clear_screen()?;
    }
}

/// This function sets up the global tracing subscriber. Events go to the standard error so they
/// never get mixed up with the prompts.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "bowlscore=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("BOWLSCORE_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

/// This function initializes the message to be used at the start of the program. The screen is
/// cleared, and the title of the console window is set to the name of the program.
fn init_message(term: &Term) -> Result<()> {
    const MSG: &str = "Enter the rolls of your game, frame by frame";

    term.clear_screen()?;
    term.set_title("bowlscore");

    term.write_line(&format!("{}", style(MSG).bold()))?;
    term.write_line(&format!(
        "{}",
        style("Each roll knocks down between 0 and 10 pins").dim()
    ))?;
    Ok(())
}

/// This function prints the scorecard of a complete game followed by its final score.
fn show_game(term: &Term, game: &Game) -> Result<()> {
    let total = game.calculate_score()?;

    term.write_line("")?;
    for row in scorecard(game)? {
        term.write_line(&row)?;
    }
    term.write_line(&total_line(total))?;

    Ok(())
}
