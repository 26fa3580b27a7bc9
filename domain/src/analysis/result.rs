//! Analysis result - the complete output of one run.

use crate::analysis::cause_tree::CauseNode;
use crate::analysis::solution::Solution;
use serde::{Deserialize, Serialize};

/// Result of a complete analysis run
///
/// `solutions` is ranked by `scores.overall`, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub problem: String,
    pub domains: Vec<String>,
    pub cause_trees: Vec<CauseNode>,
    pub solutions: Vec<Solution>,
}

impl AnalysisResult {
    pub fn new(
        problem: impl Into<String>,
        domains: Vec<String>,
        cause_trees: Vec<CauseNode>,
        solutions: Vec<Solution>,
    ) -> Self {
        Self {
            problem: problem.into(),
            domains,
            cause_trees,
            solutions,
        }
    }

    /// Number of leaf causes across all trees (before truncation)
    pub fn leaf_count(&self) -> usize {
        self.cause_trees
            .iter()
            .map(|tree| tree.extract_leaves().len())
            .sum()
    }

    /// The highest-ranked solution, if any were produced
    pub fn top_solution(&self) -> Option<&Solution> {
        self.solutions.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_count_and_top_solution() {
        let trees = vec![
            CauseNode::with_children("a", vec![CauseNode::leaf("a1"), CauseNode::leaf("a2")]),
            CauseNode::leaf("b"),
        ];
        let solutions = vec![
            Solution::new("a1", "Biology", 1, "m", "first"),
            Solution::new("a2", "Biology", 1, "m", "second"),
        ];
        let result = AnalysisResult::new("p", vec!["Biology".to_string()], trees, solutions);

        assert_eq!(result.leaf_count(), 3);
        assert_eq!(result.top_solution().unwrap().content_text, "first");
    }

    #[test]
    fn test_empty_result() {
        let result = AnalysisResult::new("p", vec![], vec![], vec![]);
        assert_eq!(result.leaf_count(), 0);
        assert!(result.top_solution().is_none());
    }
}
