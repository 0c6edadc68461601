//! Interactive dial-lock console.
//!
//! Drives a [`DialLock`] session from stdin commands, renders the
//! feedback overlay and audio cues as text, and reports completed
//! submissions through a [`SolveReporter`].

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use picklock_core::{Combination, Cue, Direction};
use picklock_engine::{DialLock, FeedbackPanel};
use picklock_puzzles::{
    LogReporter, PuzzleKind, SessionClock, SolveReport, SolveReporter, demo_catalog, demo_puzzle,
};

#[derive(Parser, Debug)]
#[command(name = "picklock", version, about = "Interactive dial-lock puzzle console")]
struct Cli {
    /// Demo puzzle id to play.
    #[arg(long)]
    puzzle: Option<u32>,

    /// Override the combination, e.g. "3,1,4". Skips the catalog.
    #[arg(long)]
    combination: Option<String>,

    /// List the demo catalog and exit.
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `PICKLOCK_LOG` takes precedence over `-v` when set.
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env("PICKLOCK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(io::stderr)
        .try_init();
}

fn parse_combination(raw: &str) -> anyhow::Result<Combination> {
    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid combination override: {raw}"))?;
    Ok(Combination::from_raw(&values))
}

fn cue_label(cue: Cue) -> &'static str {
    match cue {
        Cue::PrimaryClick => "*click*",
        Cue::SecondaryClick => "*faint click*",
        Cue::LockOpen => "*clunk*",
    }
}

fn print_help() {
    println!("commands:");
    println!("  cw [n]    turn the dial clockwise n times (default 1)");
    println!("  ccw [n]   turn the dial counter-clockwise n times (default 1)");
    println!("  pick      try to set the current number");
    println!("  unlock    submit the attempt");
    println!("  reset     restart the attempt from scratch");
    println!("  state     show the dial state");
    println!("  help      show this list");
    println!("  quit      leave the session");
}

fn print_state(lock: &DialLock) {
    let snapshot = lock.snapshot();
    println!(
        "position {:>2}  angle {:>7.1}  step {}  attempt {:?}",
        snapshot.position, snapshot.angle, snapshot.step, snapshot.attempt
    );
}

fn show_overlay(panel: &mut FeedbackPanel) {
    panel.update();
    if let Some(event) = panel.current() {
        println!("[{}] {}", event.kind, event.text);
    }
}

struct Session<R: SolveReporter> {
    lock: DialLock,
    panel: FeedbackPanel,
    clock: SessionClock,
    reporter: R,
    session_id: Uuid,
    puzzle_id: u32,
}

impl<R: SolveReporter> Session<R> {
    fn new(combination: Combination, puzzle_id: u32, reporter: R) -> Self {
        let mut lock = DialLock::new(combination);
        let mut panel = FeedbackPanel::new();
        if let Some(intro) = lock.intro_assist() {
            panel.show(intro);
        }
        Self {
            lock,
            panel,
            clock: SessionClock::start(),
            reporter,
            session_id: Uuid::new_v4(),
            puzzle_id,
        }
    }

    fn turn(&mut self, direction: Direction, count: u32) {
        for _ in 0..count {
            let outcome = self.lock.turn(direction);
            if let Some(cue) = outcome.cue {
                println!("{}", cue_label(cue));
            }
            if let Some(message) = outcome.message {
                self.panel.show(message);
            }
            if !outcome.moved {
                debug!(position = self.lock.position(), %direction, "dial held");
            }
        }
        print_state(&self.lock);
    }

    fn pick(&mut self) {
        let outcome = self.lock.confirm();
        for cue in &outcome.cues {
            println!("{}", cue_label(*cue));
        }
        self.panel.show_all(outcome.messages);
        if outcome.advanced {
            println!("number set: {:?}", self.lock.attempt());
        }
    }

    /// Returns true when the lock opened.
    async fn unlock(&mut self) -> bool {
        let outcome = self.lock.submit();
        if let Some(cue) = outcome.cue() {
            println!("{}", cue_label(cue));
        }
        self.panel.show(outcome.message());

        if let Some(solved) = outcome.judged() {
            let elapsed = if solved {
                self.clock.stop()
            } else {
                self.clock.elapsed_secs()
            };
            let report = SolveReport::new(
                self.session_id,
                self.puzzle_id,
                self.lock.attempt().to_vec(),
                solved,
                elapsed,
            );
            if let Err(e) = self.reporter.report(&report).await {
                warn!(error = %e, "solve report not delivered");
            }
            if solved {
                println!("open in {elapsed}s");
                return true;
            }
        }
        false
    }

    fn reset(&mut self) {
        self.lock.reset();
        self.clock.restart();
        self.panel.dismiss();
        if let Some(intro) = self.lock.intro_assist() {
            self.panel.show(intro);
        }
        print_state(&self.lock);
    }
}

fn parse_count(arg: Option<&str>) -> u32 {
    arg.and_then(|a| a.parse().ok()).unwrap_or(1)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list {
        for puzzle in demo_catalog() {
            println!("{:>3}  {:<12}  {}", puzzle.id, puzzle.kind, puzzle.name);
        }
        return Ok(());
    }

    let (combination, puzzle_id) = match &cli.combination {
        Some(raw) => (parse_combination(raw)?, 0),
        None => {
            let puzzle = demo_puzzle(cli.puzzle, Some(PuzzleKind::Dial))
                .context("no demo puzzle available")?;
            println!("{}", puzzle.name);
            println!("{}", puzzle.prompt);
            (puzzle.combination()?, puzzle.id)
        }
    };

    let mut session = Session::new(combination, puzzle_id, LogReporter::new());
    show_overlay(&mut session.panel);
    println!("type 'help' for commands");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(c) => c,
            None => {
                show_overlay(&mut session.panel);
                continue;
            }
        };
        let arg = parts.next();

        match command {
            "cw" => session.turn(Direction::Clockwise, parse_count(arg)),
            "ccw" => session.turn(Direction::CounterClockwise, parse_count(arg)),
            "pick" => session.pick(),
            "unlock" => {
                if session.unlock().await {
                    show_overlay(&mut session.panel);
                    break;
                }
            }
            "reset" => session.reset(),
            "state" => print_state(&session.lock),
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command: {other} (try 'help')"),
        }
        show_overlay(&mut session.panel);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combination_override_parses_digit_list() {
        let combo = parse_combination("3, 1, 4").unwrap();
        assert_eq!(combo.digits(), [3, 1, 4]);
    }

    #[test]
    fn test_combination_override_rejects_garbage() {
        assert!(parse_combination("3;1;4").is_err());
        assert!(parse_combination("a,b,c").is_err());
    }

    #[test]
    fn test_combination_override_sanitizes_range() {
        let combo = parse_combination("99,-3,4").unwrap();
        assert_eq!(combo.digits(), [0, 0, 4]);
    }

    #[test]
    fn test_count_defaults_to_one() {
        assert_eq!(parse_count(None), 1);
        assert_eq!(parse_count(Some("nope")), 1);
        assert_eq!(parse_count(Some("12")), 12);
    }

    #[test]
    fn test_verbosity_directive_saturates_at_trace() {
        assert_eq!(verbosity_to_directive(0), "warn");
        assert_eq!(verbosity_to_directive(2), "debug");
        assert_eq!(verbosity_to_directive(9), "trace");
    }

    #[tokio::test]
    async fn test_unlock_reports_through_the_reporter() {
        use picklock_puzzles::MockReporter;

        let combo = Combination::new([3, 1, 4]).unwrap();
        let mut session = Session::new(combo, 2, MockReporter::new());

        // Record three wrong digits by confirming without searching.
        session.turn(Direction::Clockwise, 1);
        session.pick();
        session.turn(Direction::CounterClockwise, 1);
        session.pick();
        session.turn(Direction::Clockwise, 1);
        session.pick();

        assert!(!session.unlock().await);
        let received = session.reporter.received();
        assert_eq!(received.len(), 1);
        assert!(!received[0].solved);
        assert_eq!(received[0].puzzle_id, 2);
    }
}
