#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictactoe::{init_logging, CliInput, RandomCoin, RenderStyle, Session, TerminalView};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Two-player tic-tac-toe on the console.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible starting players (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Draw the board without ANSI colors")]
    plain: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    // One generator for the whole process; every game's coin flip draws from it.
    let rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let style = if cli.plain {
        RenderStyle::Plain
    } else {
        RenderStyle::Color
    };

    let mut session = Session::new(
        CliInput::stdin(),
        TerminalView::stdout(style),
        RandomCoin::new(rng),
    );
    let score = session.run()?;
    log::info!("final score X={} O={}", score.x_wins(), score.o_wins());
    Ok(())
}
