pub mod assignment;
pub mod battle;
pub mod battle_logger;
pub mod cli;
pub mod matrix;
pub mod model;
pub mod parser;
pub mod planner;
pub mod types;

use crate::battle_logger::PlanLogger;
use crate::model::BattlesFile;
use crate::parser::{format_line, parse_line};
use crate::planner::{BattlePlanner, Plan};
use anyhow::Context;
use std::io::BufRead;
use std::path::{Path, PathBuf};

pub use crate::battle::{score, strength_against, Outcome};
pub use crate::model::Platoon;
pub use crate::planner::{plan, MIN_WINS};
pub use crate::types::{beats, UnitClass};

pub const NO_CHANCE_MESSAGE: &str = "There is no chance of winning";

#[derive(Debug, Clone)]
pub enum Mode {
    /// Two roster lines read from stdin.
    Interactive {
        matrix_path: Option<PathBuf>,
        log_path: Option<PathBuf>,
    },
    Batch {
        battles_path: PathBuf,
        output_path: PathBuf,
    },
    Survey {
        trials: usize,
        seed: u64,
    },
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub mode: Mode,
}

pub fn load_battles(path: &Path) -> anyhow::Result<BattlesFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read battles file at {}", path.display()))?;
    let parsed: BattlesFile = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    Ok(parsed)
}

/// Reads own and opposing rosters (one line each) and renders the answer line.
pub fn plan_from_reader<R: BufRead>(
    reader: R,
    matrix_path: Option<&Path>,
    log_path: Option<&Path>,
) -> anyhow::Result<String> {
    let mut lines = reader.lines();
    let first = lines.next().transpose()?.unwrap_or_default();
    let second = lines.next().transpose()?.unwrap_or_default();
    let ours = parse_line(&first, "First line")?;
    let theirs = parse_line(&second, "Second line")?;

    let report = BattlePlanner::new(&ours, &theirs).solve();
    if let Some(path) = matrix_path {
        matrix::write_csv(&report.matrix, path)
            .with_context(|| format!("Failed to write matrix to {}", path.display()))?;
    }
    if let Some(path) = log_path {
        let mut logger = PlanLogger::new();
        logger.log_report(&ours, &theirs, &report);
        let json = serde_json::to_string_pretty(&logger.to_json())?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write plan log to {}", path.display()))?;
    }

    Ok(match &report.plan {
        Plan::Order(order) => format_line(order),
        Plan::NoChance => NO_CHANCE_MESSAGE.to_string(),
    })
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    match opts.mode {
        Mode::Interactive {
            matrix_path,
            log_path,
        } => {
            let stdin = std::io::stdin();
            let line = plan_from_reader(stdin.lock(), matrix_path.as_deref(), log_path.as_deref())?;
            println!("{line}");
        }
        Mode::Batch {
            battles_path,
            output_path,
        } => {
            let battles = load_battles(&battles_path)?;
            let outcomes = matrix::plan_batch(&battles)?;
            let viable = outcomes.iter().filter(|o| o.plan.is_some()).count();
            std::fs::write(&output_path, serde_json::to_string_pretty(&outcomes)?)
                .with_context(|| format!("Failed to write plans to {}", output_path.display()))?;
            println!(
                "Planned {} battles ({viable} viable) to {}",
                outcomes.len(),
                output_path.display()
            );
        }
        Mode::Survey { trials, seed } => {
            if trials == 0 {
                anyhow::bail!("--survey must be > 0");
            }
            let report = matrix::survey(trials, seed);
            println!(
                "{} of {} random battles have a plan with at least {MIN_WINS} wins",
                report.viable, report.trials
            );
            for (wins, count) in report.histogram.iter().enumerate() {
                println!("wins={wins}: {count}");
            }
        }
    }
    Ok(())
}
