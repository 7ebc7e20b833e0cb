use crate::model::Platoon;
use crate::parser::format_line;
use crate::planner::{Plan, PlanReport};
use serde_json::json;

#[derive(Clone, Debug, Default)]
pub struct PlanLogger {
    format: String,
    log: Vec<String>,
}

impl PlanLogger {
    pub fn new() -> Self {
        Self {
            format: "platoon-plan-v1".to_string(),
            log: Vec::new(),
        }
    }

    pub fn log_rosters(&mut self, ours: &[Platoon], theirs: &[Platoon]) {
        self.log
            .push(format!("|plan|{}|{}", format_line(ours), format_line(theirs)));
    }

    pub fn log_matchup(&mut self, own: &Platoon, opp: &Platoon, outcome: &str) {
        self.log.push(format!("|matchup|{own}|{opp}|{outcome}"));
    }

    pub fn log_wins(&mut self, wins: usize) {
        self.log.push(format!("|wins|{wins}"));
    }

    pub fn log_order(&mut self, order: &[Platoon]) {
        self.log.push(format!("|order|{}", format_line(order)));
    }

    pub fn log_no_chance(&mut self) {
        self.log.push("|nochance|".to_string());
    }

    /// Records a solved battle, matchups listed in the opponent's order.
    pub fn log_report(&mut self, ours: &[Platoon], theirs: &[Platoon], report: &PlanReport) {
        self.log_rosters(ours, theirs);
        for (col, row) in report.assignment.rows().into_iter().enumerate() {
            let outcome = report.matrix[row][col];
            self.log_matchup(&ours[row], &theirs[col], outcome.label());
        }
        self.log_wins(report.wins());
        match &report.plan {
            Plan::Order(order) => self.log_order(order),
            Plan::NoChance => self.log_no_chance(),
        }
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "format": self.format,
            "log": self.log,
        })
    }
}
