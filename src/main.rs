use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use gridgames::battleship::BattleshipGame;
use gridgames::tictactoe::{Mark, TicTacToeGame};
use gridgames::ui::{render_board, render_boards, render_field, render_move_log, tictactoe_result};
use gridgames::{
    init_logging, AiPlayer, BattleshipConfig, CliPlayer, Fleet, GameState, MarkPlayer, Player,
    DEFAULT_BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FirstPlayer {
    Human,
    Ai,
}

#[derive(Subcommand)]
enum Commands {
    /// Play tic-tac-toe against the computer.
    Tictactoe {
        #[arg(long, value_enum, help = "Who moves first (asked when omitted)")]
        first: Option<FirstPlayer>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play battleship against the computer.
    Battleship {
        #[arg(long, value_enum, help = "Who shoots first (asked when omitted)")]
        first: Option<FirstPlayer>,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value = "3:1,2:2,1:4", help = "Ship length:count pairs")]
        fleet: Fleet,
        #[arg(long, help = "Place your ships one by one instead of at random")]
        manual: bool,
        #[arg(long, help = "Show the computer's board after placement")]
        reveal: bool,
    },
    /// Let two computer players fight a battleship game.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value = "3:1,2:2,1:4", help = "Ship length:count pairs")]
        fleet: Fleet,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

/// Ask whether the human starts when the command line did not say.
fn choose_first(first: Option<FirstPlayer>) -> anyhow::Result<FirstPlayer> {
    if let Some(first) = first {
        return Ok(first);
    }
    let stdin = io::stdin();
    loop {
        print!("Would you like to start? [Y/n] ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(FirstPlayer::Human);
        }
        match line.trim().to_ascii_uppercase().as_str() {
            "" | "Y" | "YES" => return Ok(FirstPlayer::Human),
            "N" | "NO" => return Ok(FirstPlayer::Ai),
            other => println!("Wrong input '{}'! Options available are: Y, N", other),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let level = init_logging();
    log::debug!("logging at {}", level);
    let cli = Cli::parse();

    match cli.command {
        Commands::Tictactoe { first, seed } => {
            let first = choose_first(first)?;
            run_tictactoe(first, make_rng(seed))
        }
        Commands::Battleship {
            first,
            seed,
            size,
            fleet,
            manual,
            reveal,
        } => {
            let config = BattleshipConfig::new(size, fleet).map_err(|e| anyhow::anyhow!(e))?;
            let first = choose_first(first)?;
            run_battleship(config, first, make_rng(seed), manual, reveal)
        }
        Commands::Simulate { seed, size, fleet } => {
            let config = BattleshipConfig::new(size, fleet).map_err(|e| anyhow::anyhow!(e))?;
            run_simulation(config, make_rng(seed))
        }
    }
}

fn run_tictactoe(first: FirstPlayer, rng: SmallRng) -> anyhow::Result<()> {
    let human: Box<dyn MarkPlayer> = Box::new(CliPlayer::stdio());
    let ai: Box<dyn MarkPlayer> = Box::new(AiPlayer::new());
    let (human_mark, mut game) = match first {
        FirstPlayer::Human => (Mark::X, TicTacToeGame::new(human, ai, rng)),
        FirstPlayer::Ai => (Mark::O, TicTacToeGame::new(ai, human, rng)),
    };
    println!("You play {}. Cells are a row letter and a column number, e.g. B2.", human_mark);
    print!("{}", render_field(game.field()));

    game.run().map_err(|e| anyhow::anyhow!(e))?;

    println!("Results: {}", tictactoe_result(game.outcome()));
    println!("Protocol: you={} {}", human_mark, render_move_log(game.move_log()));
    Ok(())
}

fn run_battleship(
    config: BattleshipConfig,
    first: FirstPlayer,
    rng: SmallRng,
    manual: bool,
    reveal: bool,
) -> anyhow::Result<()> {
    let human: Box<dyn Player> = Box::new(CliPlayer::stdio().with_auto_place(!manual));
    let ai: Box<dyn Player> = Box::new(AiPlayer::new());
    let (human_idx, game) = match first {
        FirstPlayer::Human => (0, BattleshipGame::new(config, human, ai, rng)),
        FirstPlayer::Ai => (1, BattleshipGame::new(config, ai, human, rng)),
    };
    let mut game = game.map_err(|e| anyhow::anyhow!(e))?;
    let ai_idx = 1 - human_idx;
    let fleet_size = game.config().fleet.ship_count();

    if game.setup().map_err(|e| anyhow::anyhow!(e))? == GameState::Cancelled {
        println!("The game is cancelled!");
        return Ok(());
    }
    if reveal {
        println!("This is the AI board. For test purposes only!");
        print!("{}", render_board(game.side(ai_idx).board()));
    }

    loop {
        if game.turn() == human_idx {
            let side = game.side(human_idx);
            print!("{}", render_boards(side.board(), side.view(), fleet_size));
        }
        match game.step().map_err(|e| anyhow::anyhow!(e))? {
            GameState::Finished | GameState::Cancelled => break,
            _ => {}
        }
    }

    let side = game.side(human_idx);
    print!("{}", render_boards(side.board(), side.view(), fleet_size));
    match game.winner() {
        Some(idx) if idx == human_idx => println!("You won!!!"),
        Some(_) => println!("AI won!!!"),
        None => println!("The game is cancelled!"),
    }
    Ok(())
}

fn run_simulation(config: BattleshipConfig, rng: SmallRng) -> anyhow::Result<()> {
    let mut game = BattleshipGame::new(
        config,
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        rng,
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    game.run().map_err(|e| anyhow::anyhow!(e))?;
    match game.winner() {
        Some(idx) => println!(
            "winner: player{} after {} shots",
            idx + 1,
            game.shots().len()
        ),
        None => println!("no winner"),
    }
    Ok(())
}
