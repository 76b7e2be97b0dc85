//! round-runner: headless session runner for the policy simulation.
//!
//! Usage:
//!   round-runner --seed 12345 --difficulty advanced --rounds 8
//!   round-runner --seed 12345 --data-dir ./data --ipc-mode

mod autoplay;

use anyhow::Result;
use policy_core::{
    command::{PlayerCommand, RoundReport},
    config::GameConfig,
    rng::{RngStream, SessionRng},
    session::Session,
    state::Difficulty,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Command { command: PlayerCommand },
    Snapshot,
    Events,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let rounds = parse_arg(&args, "--rounds", 8u32);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let difficulty: Difficulty = args
        .windows(2)
        .find(|w| w[0] == "--difficulty")
        .map(|w| w[1].parse::<Difficulty>())
        .transpose()?
        .unwrap_or(Difficulty::Beginner);
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str());

    let config = match data_dir {
        Some(dir) => GameConfig::load(dir)?,
        None => GameConfig::builtin()?,
    };

    let started_at = chrono::Utc::now();
    let session_id = format!("session-{}", uuid::Uuid::new_v4());

    if !ipc_mode {
        println!("Policy Council: round-runner");
        println!("  session:    {session_id}");
        println!("  seed:       {seed}");
        println!("  difficulty: {difficulty}");
        println!("  rounds:     {rounds}");
        println!("  data_dir:   {}", data_dir.unwrap_or("(builtin)"));
        println!("  started:    {}", started_at.to_rfc3339());
        println!();
    }

    let mut session = Session::new(session_id, seed, difficulty, config)?;

    if ipc_mode {
        run_ipc_loop(&mut session)?;
    } else {
        let reports = run_autoplay(&mut session, rounds)?;
        print_summary(&session, &reports);
    }

    Ok(())
}

fn run_autoplay(session: &mut Session, rounds: u32) -> Result<Vec<RoundReport>> {
    let mut player_rng = SessionRng::new(session.seed(), RngStream::AutoPlayer);
    let mut reports = Vec::new();

    for _ in 0..rounds {
        if session.is_over() {
            break;
        }
        let decision = autoplay::choose(session.state(), &session.config().arguments, &mut player_rng);
        let report = session.play_round(decision)?;
        println!(
            "  R{:<2} votes {}/5 {} | infl {:>5.2} growth {:>5.2} unemp {:>5.2} | {:+} -> {}",
            report.round,
            report.vote.total_agree,
            if report.vote.passed { "passed  " } else { "rejected" },
            report.indicators.inflation,
            report.indicators.gdp_growth,
            report.indicators.unemployment,
            report.score_delta,
            report.score,
        );
        let game_over = report.game_over.is_some();
        reports.push(report);
        if game_over {
            break;
        }
        session.advance_scenario()?;
    }
    Ok(reports)
}

fn run_ipc_loop(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Unknown command: {}", buffer.trim());
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Command { command } => match session.apply(command) {
                Ok(response) => writeln!(stdout, "{}", serde_json::to_string(&response)?)?,
                Err(e) => {
                    let err_json = serde_json::json!({ "error": e.to_string() });
                    writeln!(stdout, "{}", err_json)?;
                }
            },
            IpcCommand::Snapshot => {
                writeln!(stdout, "{}", session.snapshot().to_json()?)?;
            }
            IpcCommand::Events => {
                writeln!(stdout, "{}", serde_json::to_string(session.events())?)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(session: &Session, reports: &[RoundReport]) {
    let state = session.state();
    let passed = reports.iter().filter(|r| r.vote.passed).count();

    println!();
    println!("=== SESSION SUMMARY ===");
    println!("  session_id:     {}", session.session_id);
    println!("  rounds played:  {}", state.rounds_played());
    println!("  votes passed:   {passed}/{}", reports.len());
    println!("  final score:    {}", state.score);
    println!("  game over:      {}", state.is_game_over);
    if let Some(feedback) = state.feedback {
        println!("  last feedback:  {}", feedback.message());
    }

    println!();
    println!("=== INDICATORS ===");
    for indicator in state.indicators.iter() {
        let target = indicator
            .target
            .map(|t| format!(" (target {t:.1})"))
            .unwrap_or_default();
        println!(
            "  {:<18} {:>6.2}{}{target}",
            indicator.kind.label(),
            indicator.value,
            indicator.kind.unit(),
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
