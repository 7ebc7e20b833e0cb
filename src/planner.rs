use crate::assignment::{solve_outcomes, Assignment};
use crate::battle::{outcome_matrix, Outcome};
use crate::model::Platoon;

/// Fewest won engagements a battle order must reach to be worth fielding.
/// Fixed regardless of roster size.
pub const MIN_WINS: usize = 3;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Plan {
    /// Own platoons in the opponent's order: position `k` faces opposing platoon `k`.
    Order(Vec<Platoon>),
    NoChance,
}

impl Plan {
    pub fn order(&self) -> Option<&[Platoon]> {
        match self {
            Plan::Order(order) => Some(order),
            Plan::NoChance => None,
        }
    }

    pub fn is_viable(&self) -> bool {
        matches!(self, Plan::Order(_))
    }
}

#[derive(Clone, Debug)]
pub struct PlanReport {
    pub matrix: Vec<Vec<Outcome>>,
    pub assignment: Assignment,
    pub plan: Plan,
}

impl PlanReport {
    pub fn wins(&self) -> usize {
        self.assignment.wins
    }
}

pub struct BattlePlanner<'a> {
    ours: &'a [Platoon],
    theirs: &'a [Platoon],
}

impl<'a> BattlePlanner<'a> {
    pub fn new(ours: &'a [Platoon], theirs: &'a [Platoon]) -> Self {
        assert!(!ours.is_empty(), "cannot plan an empty battle");
        assert_eq!(
            ours.len(),
            theirs.len(),
            "both sides must field the same number of platoons"
        );
        assert!(
            ours.iter().chain(theirs).all(|p| p.count > 0),
            "every platoon must have a positive count"
        );
        BattlePlanner { ours, theirs }
    }

    pub fn solve(&self) -> PlanReport {
        let matrix = outcome_matrix(self.ours, self.theirs);
        let assignment = solve_outcomes(&matrix);
        let plan = if assignment.wins < MIN_WINS {
            Plan::NoChance
        } else {
            Plan::Order(
                assignment
                    .rows()
                    .into_iter()
                    .map(|row| self.ours[row])
                    .collect(),
            )
        };
        PlanReport {
            matrix,
            assignment,
            plan,
        }
    }

    pub fn find_optimal_order(&self) -> Plan {
        self.solve().plan
    }
}

pub fn plan(ours: &[Platoon], theirs: &[Platoon]) -> Plan {
    BattlePlanner::new(ours, theirs).find_optimal_order()
}
