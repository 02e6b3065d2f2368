use piggy::bot::Bot;
use piggy::config::AppConfig;
use piggy::{parse_contribution, Accent, JsonStore, ProgressCard};

use std::path::PathBuf;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// Path to the configuration file to run against
    #[clap(value_parser)]
    config: PathBuf,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Show current progress toward the goal
    Balance,
    /// Record a contribution
    Add(Add),
    /// Empty the ledger back to zero
    Reset,
}

#[derive(Args, Debug)]
struct Add {
    /// Amount to add; both `.` and `,` work as the decimal separator
    #[clap(value_parser)]
    amount: String,
}

fn print_card(card: &ProgressCard) {
    let title = match card.accent {
        Accent::Reached => card.title.bold().green(),
        Accent::InProgress => card.title.bold().blue(),
    };
    println!("{}", title);
    println!("{}", card.description);
    for field in &card.fields {
        println!();
        println!("{}", field.name.bold());
        println!("{}", field.value);
    }
    println!();
    println!("{}", card.footer.dimmed());
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let config = AppConfig::read(&args.config)?;
    let bot = Bot::new(JsonStore::new(&config.storage.ledger), config.goal);

    match args.action {
        Subcommands::Balance => {
            print_card(&bot.balance()?);
        }
        Subcommands::Add(add) => {
            let amount = match parse_contribution(&add.amount) {
                Some(amount) => amount,
                None => bail!("'{}' is not a contribution amount", add.amount),
            };
            let card = bot.contribute(amount)?;
            println!("{}", bot.goal().confirmation(amount).green());
            println!();
            print_card(&card);
        }
        Subcommands::Reset => {
            let card = bot.reset()?;
            println!("{}", "🔄 Ledger reset to 0.".yellow());
            println!();
            print_card(&card);
        }
    }

    return Ok(());
}
