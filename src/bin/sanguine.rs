use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use sanguine::cards::load_deck;
use sanguine::core::{GameConfig, PlacementError, Player};
use sanguine::play::{Agent, MachineAgent, MatchRunner};
use sanguine::rules::{ReadOnlyModel, SanguineModel};
use sanguine::strategy::{FillFirst, MaximizeRowScore, Move};
use sanguine::view::TextView;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerKind {
    /// Moves typed at the console
    Human,
    /// First legal placement
    Strategy1,
    /// Win the topmost contested row
    Strategy2,
}

#[derive(Debug, Parser)]
#[command(name = "sanguine", about = "Play a game of Sanguine in the terminal")]
struct Args {
    /// Board rows
    rows: usize,

    /// Board columns (odd)
    cols: usize,

    /// Red's deck file
    red_deck: PathBuf,

    /// Blue's deck file (columns are mirrored for Blue)
    blue_deck: PathBuf,

    /// Who plays Red
    #[arg(value_enum)]
    red_player: PlayerKind,

    /// Who plays Blue
    #[arg(value_enum)]
    blue_player: PlayerKind,

    /// Cards dealt to each hand (overrides the config file)
    #[arg(long)]
    hand_size: Option<usize>,

    /// Shuffle both decks before dealing
    #[arg(long)]
    shuffle: bool,

    /// Shuffle seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with default settings
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Reads `<hand> <row> <col>` or `pass` from stdin.
struct ConsoleAgent;

impl ConsoleAgent {
    fn parse(line: &str) -> Option<Option<Move>> {
        let line = line.trim();
        if line.eq_ignore_ascii_case("pass") {
            return Some(None);
        }
        let nums: Vec<usize> = line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;
        match nums.as_slice() {
            [hand_index, row, col] => Some(Some(Move::new(*hand_index, *row, *col))),
            _ => None,
        }
    }
}

impl Agent for ConsoleAgent {
    fn choose_move(&mut self, model: &dyn ReadOnlyModel, player: Player) -> Option<Move> {
        println!("{}'s hand:\n{}", player, TextView::render_hand(model, player));
        loop {
            print!("{}> ", player);
            let _ = io::stdout().flush();

            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }
            match Self::parse(&line) {
                Some(choice) => return choice,
                None => println!("expected `<hand> <row> <col>` or `pass`"),
            }
        }
    }

    fn on_rejected(&mut self, mv: Move, err: &PlacementError) {
        println!("cannot play {}: {}", mv, err);
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

fn agent_for(kind: PlayerKind) -> Box<dyn Agent> {
    match kind {
        PlayerKind::Human => Box::new(ConsoleAgent),
        PlayerKind::Strategy1 => Box::new(MachineAgent::new(FillFirst)),
        PlayerKind::Strategy2 => Box::new(MachineAgent::new(MaximizeRowScore)),
    }
}

fn build_config(args: &Args) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_toml_file(path)?,
        None => GameConfig::default(),
    };
    config = config.with_board(args.rows, args.cols);
    if let Some(hand_size) = args.hand_size {
        config = config.with_hand_size(hand_size);
    }
    if args.shuffle {
        config = config.with_shuffle(true);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;
    Ok(config)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(&args)?;
    log::info!("starting with {:?}", config);

    let red_deck = load_deck(&args.red_deck, Player::Red)?;
    let blue_deck = load_deck(&args.blue_deck, Player::Blue)?;

    let mut model = SanguineModel::from_config(&config)?;
    model.configure(config.hand_size, red_deck, blue_deck, config.shuffle)?;

    let mut red = agent_for(args.red_player);
    let mut blue = agent_for(args.blue_player);

    println!("{}\n", TextView::render(&model));
    let summary = MatchRunner::new().run_with(&mut model, &mut red, &mut blue, |model| {
        println!("{}\n", TextView::render(model));
    });

    println!(
        "Red {} - Blue {} after {} turns: {}",
        summary.scores[Player::Red],
        summary.scores[Player::Blue],
        summary.turns,
        summary.result
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
