//! Heuristic evaluator - offline accusation scoring.

use async_trait::async_trait;

use crate::domain::case::Case;
use crate::domain::foundation::Percentage;
use crate::domain::session::Verdict;
use crate::ports::{ServiceError, SolutionEvaluator};

const MATCH_SCORE: Percentage = Percentage::new(90);
const MISS_SCORE: Percentage = Percentage::new(30);

const MATCH_FEEDBACK: &str = "（离线模式判定）根据现有证据，你的指认似乎是正确的。真相确实如此。";
const MISS_FEEDBACK: &str = "（离线模式判定）证据不足，或指认错误。真凶另有其人。";

/// Offline accusation scorer.
///
/// A crude substring containment check against the stored solution
/// text, kept deliberately loose: it is a fallback, not the primary
/// evaluation path. Total and deterministic; never fails.
///
/// The accusation matches when any of the following holds:
/// 1. the statement contains the solution text;
/// 2. the solution contains the statement's first `。`-delimited
///    segment;
/// 3. the solution names the culprit as `凶手是…` and the statement
///    contains the first two characters after that marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl HeuristicEvaluator {
    /// Creates an evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Scores the accusation statement against the case solution.
    pub fn judge(&self, case: &Case, statement: &str) -> Verdict {
        let solution = case.solution();
        let matched = statement.contains(solution)
            || self.solution_contains_first_segment(solution, statement)
            || self.statement_names_culprit(solution, statement);

        if matched {
            Verdict::new(true, MATCH_SCORE, MATCH_FEEDBACK)
        } else {
            Verdict::new(false, MISS_SCORE, MISS_FEEDBACK)
        }
    }

    fn solution_contains_first_segment(&self, solution: &str, statement: &str) -> bool {
        let first_segment = statement.split('。').next().unwrap_or(statement);
        !first_segment.is_empty() && solution.contains(first_segment)
    }

    fn statement_names_culprit(&self, solution: &str, statement: &str) -> bool {
        match solution.split_once("凶手是") {
            Some((_, rest)) => {
                let name_head: String = rest.chars().take(2).collect();
                !name_head.is_empty() && statement.contains(&name_head)
            }
            None => false,
        }
    }
}

#[async_trait]
impl SolutionEvaluator for HeuristicEvaluator {
    async fn evaluate(&self, case: &Case, statement: &str) -> Result<Verdict, ServiceError> {
        Ok(self.judge(case, statement))
    }
}
