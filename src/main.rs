use std::env;

use anyhow::Result;
use tracing::info;

use gambit_cli::{DEFAULT_HUMAN_NAME, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("gambit starting");

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        print_usage();
        return Ok(());
    };

    match command.to_ascii_lowercase().as_str() {
        "play" => {
            let name = args
                .get(1)
                .cloned()
                .unwrap_or_else(|| DEFAULT_HUMAN_NAME.to_string());
            let mut session = Session::human_vs_computer(name)?;
            session.run()?;
        }
        "duel" => {
            let white = args.get(1).cloned().unwrap_or_else(|| "White".to_string());
            let black = args.get(2).cloned().unwrap_or_else(|| "Black".to_string());
            let mut session = Session::human_vs_human(white, black)?;
            session.run()?;
        }
        other => {
            eprintln!("unknown command: {other}");
            print_usage();
        }
    }

    Ok(())
}

fn print_usage() {
    println!("gambit version {}", env!("CARGO_PKG_VERSION"));
    println!("Usage:");
    println!("  gambit play [name]            Play against the computer");
    println!("  gambit duel <white> <black>   Play a two-player game");
}
