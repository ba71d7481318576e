use clap::Parser;
use std::process;

use tidytask::cli::commands::Cli;
use tidytask::cli::menu;
use tidytask::store::Store;

fn main() {
    let cli = Cli::parse();
    let mut store = Store::open(cli.store_paths());
    process::exit(menu::run(&mut store));
}
