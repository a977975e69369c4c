//! Runs every strategy on one instance and cross-checks the answers.

use std::time::Duration;

use log::{debug, error};

use crate::board::Board;
use crate::error::CompareError;
use crate::search::{SearchResult, Strategy};

/// Metrics for one strategy on one instance.
#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub move_count: usize,
    pub nodes_expanded: usize,
    pub elapsed: Duration,
    pub result: SearchResult,
}

impl StrategyReport {
    pub fn from_result(result: SearchResult) -> Self {
        Self {
            strategy: result.strategy,
            move_count: result.move_count(),
            nodes_expanded: result.nodes_expanded,
            elapsed: result.elapsed,
            result,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Reports in BFS, IDDFS, A* order, all agreeing on the move count.
#[derive(Debug, Clone)]
pub struct Comparison {
    reports: Vec<StrategyReport>,
}

impl Comparison {
    pub fn reports(&self) -> &[StrategyReport] {
        &self.reports
    }

    pub fn report(&self, strategy: Strategy) -> Option<&StrategyReport> {
        self.reports.iter().find(|r| r.strategy == strategy)
    }

    /// The shared optimal move count.
    pub fn move_count(&self) -> usize {
        self.reports.first().map_or(0, |r| r.move_count)
    }

    /// Lowest wall-clock time; earlier report wins a tie.
    pub fn fastest(&self) -> Option<&StrategyReport> {
        self.reports.iter().min_by_key(|r| r.elapsed)
    }

    /// Fewest expansions; earlier report wins a tie.
    pub fn fewest_nodes(&self) -> Option<&StrategyReport> {
        self.reports.iter().min_by_key(|r| r.nodes_expanded)
    }
}

/// Solves `(initial, goal)` with BFS, IDDFS (bounded by `max_depth`) and A*.
///
/// Any strategy failing aborts the comparison. Disagreement on the move count
/// is reported as [`CompareError::MoveCountMismatch`] with every report attached.
pub fn compare(initial: &Board, goal: &Board, max_depth: usize) -> Result<Comparison, CompareError> {
    let mut reports = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let result = strategy.solve(initial, goal, max_depth)?;
        debug!(
            "compare: {} took {:?} for {} moves",
            strategy,
            result.elapsed,
            result.move_count()
        );
        reports.push(StrategyReport::from_result(result));
    }

    let expected = reports[0].move_count;
    if reports.iter().any(|r| r.move_count != expected) {
        error!("compare: strategies disagree on optimal move count");
        return Err(CompareError::MoveCountMismatch { reports });
    }

    Ok(Comparison { reports })
}
