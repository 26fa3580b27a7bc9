//! Prompt templates for the analysis pipeline

use crate::analysis::cause_tree::CAUSE_FAN_OUT;
use crate::analysis::parsing::{
    FEASIBILITY_PREFIX, IMPACT_PREFIX, IMPLEMENTATION_MARKER, INSIGHT_MARKER, NOVELTY_PREFIX,
    OVERALL_PREFIX, RELEVANCE_PREFIX, SOLUTION_MARKER, TITLE_MARKER,
};

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Ask for `count` knowledge domains, one per line
    pub fn domains(count: usize, excluded: &[String]) -> String {
        let mut prompt = format!(
            r#"Generate {} specific knowledge domains or fields.

These should be diverse across different areas of human knowledge."#,
            count
        );

        if !excluded.is_empty() {
            prompt.push_str(&format!("\nDO NOT INCLUDE: {}.", excluded.join(", ")));
        }

        prompt.push_str(
            "\nFormat each as a concise domain name (1-4 words) on its own line with NO numbering or bullets.",
        );
        prompt
    }

    /// Ask for exactly `count` root causes of the problem
    pub fn initial_causes(problem: &str, count: usize) -> String {
        format!(
            r#"For the problem: '{problem}'

Identify EXACTLY {count} potential root cause(s) that might be contributing to the problem.
Do NOT provide more than {count} cause(s).
Write each cause as a clear, concise statement on its own line, without numbering."#
        )
    }

    /// Ask why `cause` holds, expecting one deeper cause per line
    pub fn why(problem: &str, cause: &str) -> String {
        format!(
            r#"For the problem: '{problem}'
Given the potential cause: '{cause}'

Ask why this cause exists. Identify {CAUSE_FAN_OUT} deeper underlying causes that might explain why '{cause}' is happening.
Write each deeper cause on its own line, without numbering or commentary."#
        )
    }

    /// Ask for an unexpected conceptual model drawn from `domain`
    pub fn metaphor(domain: &str) -> String {
        format!(
            r#"From the domain of '{domain}', generate a powerful, unexpected metaphor or conceptual model.

Choose something non-obvious that could provide a fresh perspective on other problems.
Explain the key dynamics, patterns, or principles that make this metaphor interesting.

Format as:
METAPHOR: [The metaphor/model from {domain}]
DYNAMICS: [How this system/pattern works]"#
        )
    }

    /// Ask for a solution to `cause` that applies the metaphor
    pub fn solution(problem: &str, cause: &str, metaphor: &str, solution_index: usize) -> String {
        format!(
            r#"For the problem: '{problem}'
Addressing this root cause: '{cause}'

Consider this metaphor:
{metaphor}

For solution #{solution_index}, create an innovative solution by applying this metaphor to the problem.
Think of how the dynamics in this metaphor could inspire a completely new approach to addressing the root cause.
Be bold, imaginative, and avoid conventional thinking.

ONLY format your response as:
{TITLE_MARKER} [A concise, marketable title for your solution - max 5 words]
{INSIGHT_MARKER} [How the metaphor reveals a new perspective]
{SOLUTION_MARKER} [Detailed explanation of an idea inspired by the metaphor]
{IMPLEMENTATION_MARKER} [A practical business model and service design including the reason to invest]"#
        )
    }

    /// Ask for 1-10 scores on each evaluation dimension
    pub fn evaluation(problem: &str, root_cause: &str, solution: &str) -> String {
        format!(
            r#"For the problem: '{problem}'
And root cause: '{root_cause}'
Evaluate this solution:

{solution}

Score the solution on a scale of 1-10 for:
1. Novelty - how innovative and unique
2. Feasibility - how practical to implement
3. Impact - potential effectiveness
4. Relevance - how well it addresses the root cause

Format your response as:
{NOVELTY_PREFIX} [score]
{FEASIBILITY_PREFIX} [score]
{IMPACT_PREFIX} [score]
{RELEVANCE_PREFIX} [score]
{OVERALL_PREFIX} [average score]"#
        )
    }
}
