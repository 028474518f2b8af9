//! word-duel - word construction game on the command line

#![allow(missing_docs)]

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::collections::HashSet;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use word_duel::utils::logging::init_logging;
use word_duel::{Config, GameSession, GuessRejection, WordDuel, can_construct, is_profane};

#[derive(Parser, Debug)]
#[command(name = "word-duel", version, about, long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "WORD_DUEL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a word
    Check { word: String },
    /// Whether CANDIDATE can be spelled with the letters of SOURCE
    Construct { candidate: String, source: String },
    /// Run the safety filter on a word
    Profane { word: String },
    /// Suggest a word built from SOURCE
    Hint {
        source: String,
        /// Words already played
        #[arg(long = "used", value_name = "WORD")]
        used: Vec<String>,
    },
    /// Fetch fresh source word presets
    Presets,
    /// Play an interactive game on stdin
    Play {
        source: String,
        #[arg(short, long)]
        players: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())
        .await
        .context("Failed to load configuration")?;
    init_logging(&config.logging);

    match cli.command {
        Command::Construct { candidate, source } => {
            let ok = can_construct(&candidate.to_uppercase(), &source.to_uppercase());
            println!("{}", ok);
        }
        Command::Profane { word } => println!("{}", is_profane(&word)),
        Command::Check { word } => {
            let duel = WordDuel::new(config)?;
            let result = duel.check_word_definition(&word).await;
            if result.is_valid() {
                println!("{}: valid {}", word.trim().to_uppercase(), result.gloss());
            } else {
                println!("{}: {}", word.trim().to_uppercase(), result.error_kind());
            }
        }
        Command::Hint { source, used } => {
            let duel = WordDuel::new(config)?;
            let used: HashSet<String> = used.iter().map(|w| w.trim().to_uppercase()).collect();
            match duel.find_valid_hint(&source, &used).await {
                Some(hint) => println!("{}", hint),
                None => println!("No hint available"),
            }
        }
        Command::Presets => {
            let duel = WordDuel::new(config)?;
            let mut presets = duel.fetch_new_presets().await;
            if presets.is_empty() {
                presets = word_duel::core::presets::default_presets();
            }
            for word in presets {
                println!("{}", word);
            }
        }
        Command::Play { source, players } => {
            let players = players.unwrap_or(config.game.default_players);
            let duel = WordDuel::new(config)?;
            play(&duel, &source, players).await?;
        }
    }

    Ok(())
}

async fn play(duel: &WordDuel, source: &str, players: usize) -> anyhow::Result<()> {
    let mut game =
        GameSession::start(source, players, duel.resolver(), &duel.config().game).await?;
    println!(
        "Source word: {}  ({} players; /hint, /surrender, /quit)",
        game.source_word(),
        players
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        println!("Player {} > ", game.current_player() + 1);
        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "/quit" => break,
            "/hint" => match game.request_hint(duel.hints()).await? {
                Some(hint) => println!("Hint: {}", hint),
                None => println!("No hint available"),
            },
            "/surrender" => {
                if let Some(winner) = game.surrender()? {
                    println!("Player {} wins!", winner + 1);
                    print_scores(&game);
                    return Ok(());
                }
            }
            guess => match game.submit_guess(guess, duel.resolver()).await {
                Ok(accepted) => println!(
                    "{} +{}  {}",
                    accepted.word, accepted.points, accepted.gloss
                ),
                Err(GuessRejection::GameOver) => bail!("The game is over"),
                Err(rejection) => println!("{}", rejection),
            },
        }
    }

    print_scores(&game);
    Ok(())
}

fn print_scores(game: &GameSession) {
    for (player, score) in game.scores().iter().enumerate() {
        println!("Player {}: {}", player + 1, score);
    }
}
