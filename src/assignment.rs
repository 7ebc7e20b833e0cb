//! Maximum-weight perfect matching on a square outcome matrix.

use crate::battle::Outcome;
use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assignment {
    /// `columns[i]` is the opposing index faced by own index `i`.
    pub columns: Vec<usize>,
    pub total: i64,
    pub wins: usize,
}

impl Assignment {
    /// Inverse permutation: `rows[j]` is the own index facing opposing index `j`.
    pub fn rows(&self) -> Vec<usize> {
        let mut rows = vec![0usize; self.columns.len()];
        for (row, &col) in self.columns.iter().enumerate() {
            rows[col] = row;
        }
        rows
    }
}

/// Maximises the outcome total; among assignments with equal totals, the one
/// winning the most engagements is chosen.
pub fn solve_outcomes(matrix: &[Vec<Outcome>]) -> Assignment {
    let n = matrix.len();
    if n == 0 {
        return Assignment {
            columns: Vec::new(),
            total: 0,
            wins: 0,
        };
    }
    assert!(
        matrix.iter().all(|row| row.len() == n),
        "outcome matrix must be square ({n} rows)"
    );

    // A unit of total outweighs any difference in win count (at most n).
    let scale = n as i64 + 1;
    let weights = Matrix::from_fn(n, n, |(i, j)| {
        let outcome = matrix[i][j];
        outcome.value() * scale + i64::from(outcome == Outcome::Win)
    });
    let (_, columns) = kuhn_munkres(&weights);

    let total = columns
        .iter()
        .enumerate()
        .map(|(i, &j)| matrix[i][j].value())
        .sum();
    let wins = columns
        .iter()
        .enumerate()
        .filter(|&(i, &j)| matrix[i][j] == Outcome::Win)
        .count();
    Assignment {
        columns,
        total,
        wins,
    }
}
