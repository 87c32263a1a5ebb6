use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use cookpot_core::{
    find_best_hand, parse_cards, Board, BoardOptions, Card, CascadeReport, PayTables,
    PaylineResolutionData, RngState, SlotConfig, TumbleResolutionData,
};
use cookpot_data::load_pay_tables;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cookpot", about = "Recipe cascade slot engine runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Directory holding multipliers.json and recipes.json
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
    /// Ignore --assets and use the built-in table
    #[arg(long)]
    builtin: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Populate a board and play its cascade out
    Spin {
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Number of consecutive seeds to play
        #[arg(long, default_value_t = 1)]
        spins: u64,
        /// Resolve/tumble round limit per spin
        #[arg(long)]
        steps: Option<u32>,
        /// Print buffer rows too
        #[arg(long)]
        full: bool,
        /// Print cascade reports as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Compare the best hands of two seven-card pools, e.g. "AS KS QS JS 10S 2D 3C"
    Poker { left: String, right: String },
}

#[derive(Serialize)]
struct PokerOutcome {
    left: String,
    right: String,
    winner: &'static str,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Spin {
            seed,
            spins,
            steps,
            full,
            json,
        } => {
            let tables = if cli.builtin {
                PayTables::from_config(&SlotConfig::standard()).context("built-in table")?
            } else {
                load_pay_tables(&cli.assets)?
            };
            let mut options = BoardOptions::default();
            if let Some(steps) = steps {
                options.max_cascade_steps = steps;
            }
            let mut board =
                Board::with_rng(Arc::new(tables), RngState::from_seed(seed)).with_options(options);
            let mut grand_total = 0.0;
            for seed in seed..seed.saturating_add(spins) {
                board.populate_for_spin(seed);
                if !json {
                    println!("seed {seed}");
                    print!("{}", board.render(full));
                }
                let report = board.cascade_until_stable();
                grand_total += report.total_multiplier;
                if json {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    print_report(&report);
                    print!("{}", board.render(full));
                    println!();
                }
            }
            info!(spins, total = grand_total, "spins finished");
        }
        Commands::Poker { left, right } => {
            let left = best_of(&left)?;
            let right = best_of(&right)?;
            let winner = match left.cmp(&right) {
                Ordering::Greater => "left",
                Ordering::Less => "right",
                Ordering::Equal => "tie",
            };
            let outcome = PokerOutcome {
                left: describe_hand(left.kind.id(), &left.cards),
                right: describe_hand(right.kind.id(), &right.cards),
                winner,
            };
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }
    Ok(())
}

fn best_of(pool: &str) -> anyhow::Result<cookpot_core::Hand> {
    let cards = parse_cards(pool).with_context(|| format!("parse cards {pool:?}"))?;
    let Ok(cards) = <[Card; 7]>::try_from(cards) else {
        bail!("expected seven cards in {pool:?}");
    };
    Ok(find_best_hand(&cards))
}

fn describe_hand(kind: &str, cards: &[Card]) -> String {
    let cards: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("{kind} [{}]", cards.join(" "))
}

fn print_report(report: &CascadeReport) {
    for (idx, pass) in report.passes.iter().enumerate() {
        println!(
            "pass {}: x{} from {} win(s)",
            idx + 1,
            pass.resolution.total_multiplier,
            pass.resolution.winning_paylines.len()
        );
        for line in &pass.resolution.winning_paylines {
            println!("  {}", describe_line(line));
        }
        if let Some(tumble) = &pass.tumble {
            println!("  {}", describe_tumble(tumble));
        }
    }
    let status = if report.truncated {
        " (step limit)"
    } else {
        ""
    };
    println!("total x{}{status}", report.total_multiplier);
}

fn describe_line(line: &PaylineResolutionData) -> String {
    let source = match line.payline {
        Some(payline) => format!("line {:>2}", payline.ordinal() + 1),
        None => "board  ".to_string(),
    };
    let cells: Vec<String> = line
        .symbols
        .iter()
        .map(|entry| format!("{}@{},{}", entry.symbol, entry.row, entry.col))
        .collect();
    let product = line
        .combo_symbol
        .map(|symbol| format!(" -> {symbol}"))
        .unwrap_or_default();
    format!(
        "{source} {:<9} x{}{product}  {}",
        line.win_source.id(),
        line.multiplier,
        cells.join(" ")
    )
}

fn describe_tumble(tumble: &TumbleResolutionData) -> String {
    let placed: Vec<String> = tumble
        .placed_entries()
        .map(|entry| format!("{}@{},{}", entry.symbol, entry.row, entry.col))
        .collect();
    format!(
        "tumble: placed [{}], destroyed {}, refilled {}",
        placed.join(" "),
        tumble.destroyed.len(),
        tumble.newly_created.len()
    )
}
