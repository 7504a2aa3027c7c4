//! REPL Module
//!
//! Reads commands line by line, dispatches them to the [`Explorer`] and
//! prints the results.

mod commands;
mod explorer;
mod input;
mod session;

use std::io::{self, Write};

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub use commands::Command;
pub use explorer::{Caches, Explorer, Flow};
pub use input::{Input, LineSource, Readline, Script};
pub use session::{CaughtPokemon, PageCursor, Session};

use crate::client::Fetcher;
use crate::error::CommandError;
use crate::tasks::ReclaimHandle;

/// Shell prompt
pub const PROMPT: &str = "Pokedex > ";

/// Lower-cases `input` and splits it into words.
pub fn clean_input(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_lowercase).collect()
}

/// Runs the read-eval-print loop until `exit`, Ctrl+C or end of input.
///
/// Command failures are printed and the loop continues; only a failure to
/// read input or write output ends it with an error.
pub async fn run<F, L, W>(explorer: &mut Explorer<F>, mut input: L, out: &mut W) -> io::Result<()>
where
    F: Fetcher,
    L: LineSource,
    W: Write,
{
    loop {
        let line = match input.read_line(PROMPT, &mut *out)? {
            Input::Line(line) => line,
            Input::Interrupted => {
                info!("Interrupted at the prompt");
                writeln!(out)?;
                break;
            }
            Input::Eof => {
                writeln!(out)?;
                break;
            }
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };
        let Some(command) = Command::parse(name) else {
            writeln!(out, "Unknown command {}", name)?;
            continue;
        };

        match explorer.execute(command, args, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(CommandError::Io(e)) => return Err(e),
            Err(e) => {
                warn!(command = command.name(), "command failed: {}", e);
                writeln!(out, "{}", e)?;
            }
        }
    }

    Ok(())
}

/// Runs the REPL, then stops the reclaim tasks however the loop ended.
///
/// Cancels `shutdown` and joins every reclaimer before returning the loop's
/// result.
pub async fn run_with_shutdown<F, L, W>(
    explorer: &mut Explorer<F>,
    input: L,
    out: &mut W,
    shutdown: CancellationToken,
    reclaimers: Vec<ReclaimHandle>,
) -> io::Result<()>
where
    F: Fetcher,
    L: LineSource,
    W: Write,
{
    let result = run(explorer, input, out).await;
    if let Err(e) = &result {
        warn!("REPL ended with an error: {}", e);
    }

    info!("Shutting down reclaim tasks...");
    shutdown.cancel();
    for reclaimer in reclaimers {
        reclaimer.shutdown().await;
    }

    result
}
