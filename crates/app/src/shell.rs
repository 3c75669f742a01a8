//! Interactive shell
//!
//! Reads one line at a time and runs it to completion before reading the
//! next. The display ticker is the only concurrent task; it is started and
//! cancelled here to follow the draw state.

use std::io::Write;
use std::time::Duration;

use rollcall_core::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::command::{is_yes, Command};
use crate::state::AppState;
use crate::ticker::Ticker;
use crate::viewmodel::{self, Flow};

type InputLines = Lines<BufReader<Stdin>>;

pub async fn run(mut state: AppState) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker: Option<Ticker> = None;
    let interval = state.settings().draw.tick_interval();

    println!("Rollcall - roster, lucky draw and groups. Type `help` for commands.");

    loop {
        prompt(&state)?;
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let command = match command {
            Command::Add(text) if text.is_empty() => {
                println!("Paste names, one per line or comma separated. End with an empty line.");
                Command::Add(read_block(&mut lines).await?)
            }
            command if command.needs_confirmation() => {
                if !viewmodel::on_screen(&state, &command, &mut std::io::stdout().lock())? {
                    continue;
                }
                let question = match command {
                    Command::Clear => "Remove everyone from the list?",
                    _ => "Clear the winner history?",
                };
                if !confirm(&mut lines, question).await? {
                    println!("Cancelled.");
                    continue;
                }
                command
            }
            command => command,
        };

        let flow = {
            let mut out = std::io::stdout().lock();
            match viewmodel::dispatch(&mut state, command, &mut out) {
                Ok(flow) => flow,
                Err(e) => {
                    tracing::warn!(error = %e, "Command failed");
                    writeln!(out, "! {}", viewmodel::notice(&e))?;
                    Flow::Continue
                }
            }
        };

        sync_ticker(&state, &mut ticker, interval);
        if flow == Flow::Quit {
            break;
        }
    }

    if let Some(ticker) = ticker.take() {
        ticker.stop();
    }
    tracing::info!("Shell closed");
    Ok(())
}

/// Start or cancel the ticker so it runs exactly while a draw runs
fn sync_ticker(state: &AppState, ticker: &mut Option<Ticker>, interval: Duration) {
    let running = state.draw_state().is_running();
    if running && ticker.is_none() {
        *ticker = Some(Ticker::spawn(state.subscribe_pool(), interval, print_tick));
    } else if !running {
        if let Some(ticker) = ticker.take() {
            ticker.stop();
        }
    }
}

fn print_tick(name: &str) {
    let mut out = std::io::stdout().lock();
    let _ = write!(out, "\r\x1b[2K  >> {name}");
    let _ = out.flush();
}

fn prompt(state: &AppState) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if state.draw_state().is_running() {
        return Ok(());
    }
    write!(out, "{}> ", state.mode().as_str())?;
    out.flush()?;
    Ok(())
}

async fn read_block(lines: &mut InputLines) -> Result<String> {
    let mut block = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            break;
        }
        block.push(line);
    }
    Ok(block.join("\n"))
}

async fn confirm(lines: &mut InputLines, question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;
    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(is_yes(&answer))
}
