use crate::model::Platoon;
use anyhow::{anyhow, bail, Result};
use std::collections::HashSet;

/// Platoons per side accepted on an input line.
pub const ROSTER_SIZE: usize = 5;

pub fn parse_line(line: &str, side: &str) -> Result<Vec<Platoon>> {
    let tokens: Vec<&str> = line.trim().split(';').map(str::trim).collect();
    parse_tokens(&tokens, side)
}

pub fn parse_tokens<S: AsRef<str>>(tokens: &[S], side: &str) -> Result<Vec<Platoon>> {
    if tokens.len() != ROSTER_SIZE {
        bail!("{side}: expected {ROSTER_SIZE} platoons, got {}", tokens.len());
    }
    let mut platoons = Vec::with_capacity(ROSTER_SIZE);
    let mut seen = HashSet::new();
    for token in tokens {
        let token = token.as_ref();
        let platoon: Platoon = token.parse().map_err(|e| anyhow!("{side}: {e}"))?;
        if !seen.insert(token) {
            bail!("{side}: duplicate platoon `{token}`");
        }
        platoons.push(platoon);
    }
    Ok(platoons)
}

pub fn format_line(platoons: &[Platoon]) -> String {
    platoons
        .iter()
        .map(Platoon::to_string)
        .collect::<Vec<_>>()
        .join(";")
}
