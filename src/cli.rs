//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use shoplist::Partition;
use shoplist::output::OutputMode;

/// shoplist - Shopping lists with bought items kept at the bottom
#[derive(Parser, Debug)]
#[command(
    name = "shoplist",
    version,
    about = "Shopping lists with bought items kept at the bottom",
    long_about = "Keep several named shopping lists on disk.\n\n\
                  New items go to the top of the list. Bought items sink below\n\
                  everything still to buy, and each half keeps its own order."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding list documents (overrides config)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show all lists (the first one is the active list)
    Lists,

    /// Create a new list
    New {
        /// List name (defaults to "List N")
        name: Option<String>,
    },

    /// Rename a list
    Rename {
        /// List id or name
        list: String,

        /// New name
        name: String,
    },

    /// Delete a list and all of its items
    Delete {
        /// List id or name
        list: String,
    },

    /// Show the items of a list
    Show {
        /// List id or name (defaults to the active list)
        list: Option<String>,
    },

    /// Add an item to the top of a list
    Add {
        /// List id or name (defaults to the active list)
        #[arg(short, long)]
        list: Option<String>,

        /// Item text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Mark an item bought, or not bought again
    Toggle {
        /// List id or name (defaults to the active list)
        #[arg(short, long)]
        list: Option<String>,

        /// Item id or text
        item: String,
    },

    /// Put the items of one partition into a new order
    Reorder {
        /// List id or name (defaults to the active list)
        #[arg(short, long)]
        list: Option<String>,

        /// Partition to reorder: unbought, bought
        partition: Partition,

        /// Every item of the partition (id or text), in the new order
        items: Vec<String>,
    },

    /// Dump the raw documents in the lists directory
    Saved,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let dir = cli.dir;
    match cli.command {
        Some(Command::Lists) => commands::lists(dir, output_mode),
        Some(Command::New { name }) => commands::new_list(dir, name.as_deref(), output_mode),
        Some(Command::Rename { list, name }) => commands::rename(dir, &list, &name, output_mode),
        Some(Command::Delete { list }) => commands::delete(dir, &list, output_mode),
        Some(Command::Show { list }) => commands::show(dir, list.as_deref(), output_mode),
        Some(Command::Add { list, text }) => {
            commands::add(dir, list.as_deref(), &text.join(" "), output_mode)
        },
        Some(Command::Toggle { list, item }) => {
            commands::toggle(dir, list.as_deref(), &item, output_mode)
        },
        Some(Command::Reorder {
            list,
            partition,
            items,
        }) => commands::reorder(dir, list.as_deref(), partition, &items, output_mode),
        Some(Command::Saved) => commands::saved(dir, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("shoplist v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("shoplist v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'shoplist --help' for usage");
                println!("Run 'shoplist new \"Groceries\"' to get started");
            }
            Ok(())
        },
    }
}
