use crate::confirm::Confirm;
use crate::domain::{Category, TaskId};
use crate::persistence::KeyValueStore;
use crate::store::{StoreError, Tracker};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "twofold")]
#[command(about = "Keep work tasks and travel plans in two separate lists", long_about = None)]
pub struct Cli {
    /// Use this data directory instead of the nearest .twofold or ~/.twofold
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Initialize a local .twofold directory in the current directory
    Init,
    /// Add a task to the active list
    Add {
        /// Task text (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List tasks, by default those of the active list
    List {
        #[arg(short, long)]
        category: Option<Category>,
    },
    /// Delete a task by id
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show or switch the active list
    Mode { category: Option<Category> },
    /// Remove every task and reset the active list
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Run a non-interactive command against an opened tracker.
///
/// `Init` is handled before a tracker exists and is rejected here.
pub fn run_command<G, C, W>(
    command: Commands,
    tracker: &mut Tracker<G>,
    confirm: &mut C,
    out: &mut W,
) -> Result<()>
where
    G: KeyValueStore,
    C: Confirm + ?Sized,
    W: Write,
{
    match command {
        Commands::Init => anyhow::bail!("init must run before the data directory is opened"),
        Commands::Add { text } => {
            let text = text.join(" ");
            let task = tracker.add_task(&text).map_err(|err| match err {
                StoreError::EmptyText => anyhow::anyhow!("Nothing to add: task text is empty"),
                other => anyhow::Error::new(other).context("Failed to add task"),
            })?;
            writeln!(out, "{}", task.id)?;
        }
        Commands::List { category } => {
            let category = category.unwrap_or_else(|| tracker.mode());
            for task in tracker.list_category(category) {
                writeln!(out, "{}\t{}", task.id, task.text)?;
            }
        }
        Commands::Delete { id, yes } => {
            let id = TaskId::from(id);
            let task = tracker
                .get_task(&id)
                .ok_or_else(|| anyhow::anyhow!("Task not found: {}", id))?;
            let question = format!("Delete \"{}\"?", task.text);
            if !yes && !confirm.confirm(&question) {
                writeln!(out, "Cancelled")?;
                return Ok(());
            }
            let removed = tracker
                .delete_task(&id)
                .with_context(|| format!("Failed to delete task {}", id))?;
            writeln!(out, "Deleted: {}", removed.text)?;
        }
        Commands::Mode { category } => match category {
            Some(category) => {
                tracker
                    .set_mode(category)
                    .context("Failed to switch list")?;
                writeln!(out, "{}", category)?;
            }
            None => writeln!(out, "{}", tracker.mode())?,
        },
        Commands::Clear { yes } => {
            if !yes && !confirm.confirm("Delete every task in both lists?") {
                writeln!(out, "Cancelled")?;
                return Ok(());
            }
            tracker.clear_all().context("Failed to clear tasks")?;
            writeln!(out, "Cleared")?;
        }
    }
    Ok(())
}
