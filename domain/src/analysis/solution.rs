//! Solution value objects - candidate solutions and their scores.
//!
//! - [`ScoreSet`] - four evaluation dimensions plus an overall score
//! - [`Solution`] - a metaphor-inspired solution for one leaf cause
//! - [`SolutionSections`] - the titled parts of a solution's text

use crate::analysis::parsing::parse_solution_content;
use serde::{Deserialize, Serialize};

/// Overall score carried by a solution that has not been evaluated yet.
pub const UNSCORED_OVERALL: f64 = 5.0;

/// Evaluation scores for a solution, each in `0.0..=10.0`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub novelty: f64,
    pub feasibility: f64,
    pub impact: f64,
    pub relevance: f64,
    pub overall: f64,
}

impl ScoreSet {
    /// Sentinel scores for a solution that was never evaluated.
    ///
    /// Only `overall` is set, to [`UNSCORED_OVERALL`].
    pub fn unscored() -> Self {
        Self {
            overall: UNSCORED_OVERALL,
            ..Default::default()
        }
    }

    /// Build a score set from the four dimensions, deriving `overall`.
    pub fn from_dimensions(novelty: f64, feasibility: f64, impact: f64, relevance: f64) -> Self {
        let mut scores = Self {
            novelty,
            feasibility,
            impact,
            relevance,
            overall: 0.0,
        };
        scores.fill_overall();
        scores
    }

    /// Arithmetic mean of the four dimensions
    pub fn dimension_mean(&self) -> f64 {
        (self.novelty + self.feasibility + self.impact + self.relevance) / 4.0
    }

    /// Set `overall` to the dimension mean when it was not supplied.
    ///
    /// Leaves an all-zero set untouched.
    pub fn fill_overall(&mut self) {
        let any_dimension =
            self.novelty != 0.0 || self.feasibility != 0.0 || self.impact != 0.0 || self.relevance != 0.0;
        if self.overall == 0.0 && any_dimension {
            self.overall = self.dimension_mean();
        }
    }
}

/// Titled sections parsed out of a solution's text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSections {
    pub title: String,
    pub insight: String,
    pub solution: String,
    pub implementation: String,
    /// Text that precedes every recognized marker
    pub other: String,
}

impl SolutionSections {
    /// Returns `true` if no titled section was recognized.
    pub fn is_unstructured(&self) -> bool {
        self.title.is_empty()
            && self.insight.is_empty()
            && self.solution.is_empty()
            && self.implementation.is_empty()
    }
}

/// A candidate solution for one (leaf cause, domain, slot) combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// The leaf cause this solution addresses
    pub root_cause: String,
    /// Knowledge domain the metaphor was drawn from
    pub domain: String,
    /// 1-based slot within the (cause, domain) pair
    pub solution_index: usize,
    /// Raw output of the metaphor stage
    pub metaphor_text: String,
    /// Raw output of the solution stage
    pub content_text: String,
    pub scores: ScoreSet,
}

impl Solution {
    /// Creates an unscored solution.
    pub fn new(
        root_cause: impl Into<String>,
        domain: impl Into<String>,
        solution_index: usize,
        metaphor_text: impl Into<String>,
        content_text: impl Into<String>,
    ) -> Self {
        Self {
            root_cause: root_cause.into(),
            domain: domain.into(),
            solution_index,
            metaphor_text: metaphor_text.into(),
            content_text: content_text.into(),
            scores: ScoreSet::unscored(),
        }
    }

    /// Replaces the scores (builder style).
    pub fn with_scores(mut self, scores: ScoreSet) -> Self {
        self.scores = scores;
        self
    }

    /// Parse the solution text into its sections.
    pub fn sections(&self) -> SolutionSections {
        parse_solution_content(&self.content_text)
    }

    /// Display title: the parsed title, or `"<domain> #<index>"` if none.
    pub fn title(&self) -> String {
        let title = self.sections().title;
        if title.is_empty() {
            format!("{} #{}", self.domain, self.solution_index)
        } else {
            title
        }
    }
}
