use crate::model::Platoon;
use crate::types::beats;
use std::cmp::Ordering;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub fn value(self) -> i64 {
        match self {
            Outcome::Win => 1,
            Outcome::Draw => 0,
            Outcome::Loss => -1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Draw => "draw",
            Outcome::Loss => "loss",
        }
    }
}

impl Platoon {
    /// Soldiers fielded after the class bonus: doubled against a class this one beats.
    pub fn effective_count(&self, other: &Platoon) -> u128 {
        let multiplier = if beats(self.class, other.class) { 2 } else { 1 };
        u128::from(self.count) * multiplier
    }

    pub fn strength_against(&self, other: &Platoon) -> f64 {
        assert!(other.count > 0, "opposing platoon {other} has no soldiers");
        self.effective_count(other) as f64 / other.count as f64
    }

    pub fn outcome_against(&self, other: &Platoon) -> Outcome {
        assert!(other.count > 0, "opposing platoon {other} has no soldiers");
        // ratio vs 1 compared without dividing
        match self.effective_count(other).cmp(&u128::from(other.count)) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Loss,
        }
    }
}

pub fn strength_against(own: &Platoon, opp: &Platoon) -> f64 {
    own.strength_against(opp)
}

pub fn score(own: &Platoon, opp: &Platoon) -> Outcome {
    own.outcome_against(opp)
}

/// Row `i` holds the outcomes of `ours[i]` against every opposing platoon.
pub fn outcome_matrix(ours: &[Platoon], theirs: &[Platoon]) -> Vec<Vec<Outcome>> {
    ours.iter()
        .map(|own| theirs.iter().map(|opp| score(own, opp)).collect())
        .collect()
}
