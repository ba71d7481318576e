use clap::Parser;
use std::path::PathBuf;

use crate::store::StorePaths;

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "tidytask",
    version = VERSION,
    about = "Menu-driven personal to-do list",
    after_help = "\
NOTE:
  All operations run through the interactive menu; there are no
  subcommands. Tasks live in two JSON files (tasks.json and trash.json)
  in the current directory unless overridden.

EXIT CODES:
  0  Normal exit (menu option or end of input)
  1  Unrecoverable I/O error while saving"
)]
pub struct Cli {
    /// Directory holding the data files
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Tasks file path (overrides --dir)
    #[arg(long)]
    pub tasks_file: Option<PathBuf>,

    /// Trash file path (overrides --dir)
    #[arg(long)]
    pub trash_file: Option<PathBuf>,
}

impl Cli {
    /// Resolve the two data file locations from the flags.
    pub fn store_paths(&self) -> StorePaths {
        let mut paths = StorePaths::in_dir(&self.dir);
        if let Some(ref p) = self.tasks_file {
            paths.tasks = p.clone();
        }
        if let Some(ref p) = self.trash_file {
            paths.trash = p.clone();
        }
        paths
    }
}
