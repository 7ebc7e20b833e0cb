use crate::battle::Outcome;
use crate::model::{BattleOutcome, BattlesFile, Platoon};
use crate::parser::{format_line, parse_tokens, ROSTER_SIZE};
use crate::planner::BattlePlanner;
use crate::types::UnitClass;
use anyhow::Context;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

pub const MAX_RANDOM_COUNT: u64 = 1000;

pub fn write_csv(matrix: &[Vec<Outcome>], path: &std::path::Path) -> anyhow::Result<()> {
    let mut out = String::new();
    for (row_idx, row) in matrix.iter().enumerate() {
        for (col_idx, outcome) in row.iter().enumerate() {
            if col_idx > 0 {
                out.push(',');
            }
            out.push_str(&outcome.value().to_string());
        }
        if row_idx + 1 < matrix.len() {
            out.push('\n');
        }
    }
    std::fs::write(path, out)?;
    Ok(())
}

/// Validates every roster up front, then plans the battles in parallel.
pub fn plan_batch(file: &BattlesFile) -> anyhow::Result<Vec<BattleOutcome>> {
    let rosters: Vec<(Vec<Platoon>, Vec<Platoon>)> = file
        .battles
        .iter()
        .enumerate()
        .map(|(idx, battle)| {
            let ours = parse_tokens(&battle.ours, "ours")
                .with_context(|| format!("Invalid battle {idx}"))?;
            let theirs = parse_tokens(&battle.theirs, "theirs")
                .with_context(|| format!("Invalid battle {idx}"))?;
            Ok::<_, anyhow::Error>((ours, theirs))
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(rosters
        .par_iter()
        .enumerate()
        .map(|(index, (ours, theirs))| {
            let report = BattlePlanner::new(ours, theirs).solve();
            BattleOutcome {
                index,
                wins: report.wins(),
                plan: report.plan.order().map(format_line),
            }
        })
        .collect())
}

pub fn random_roster<R: Rng>(rng: &mut R, size: usize) -> Vec<Platoon> {
    assert!(
        size as u64 <= UnitClass::ALL.len() as u64 * MAX_RANDOM_COUNT,
        "cannot draw {size} distinct platoons"
    );
    let mut roster: Vec<Platoon> = Vec::with_capacity(size);
    while roster.len() < size {
        let class = UnitClass::ALL[rng.gen_range(0..UnitClass::ALL.len())];
        let candidate = Platoon::new(class, rng.gen_range(1..=MAX_RANDOM_COUNT));
        if !roster.contains(&candidate) {
            roster.push(candidate);
        }
    }
    roster
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SurveyReport {
    pub trials: usize,
    pub viable: usize,
    /// `histogram[w]` counts battles whose best order wins `w` engagements.
    pub histogram: Vec<usize>,
}

pub fn survey(trials: usize, seed: u64) -> SurveyReport {
    let wins: Vec<(usize, bool)> = (0..trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = SmallRng::seed_from_u64(seed ^ ((trial as u64) << 16));
            let ours = random_roster(&mut rng, ROSTER_SIZE);
            let theirs = random_roster(&mut rng, ROSTER_SIZE);
            let report = BattlePlanner::new(&ours, &theirs).solve();
            (report.wins(), report.plan.is_viable())
        })
        .collect();

    let mut histogram = vec![0usize; ROSTER_SIZE + 1];
    let mut viable = 0usize;
    for (w, ok) in wins {
        histogram[w] += 1;
        if ok {
            viable += 1;
        }
    }
    SurveyReport {
        trials,
        viable,
        histogram,
    }
}
