//! Response parsing for the analysis pipeline.
//!
//! These functions turn loosely formatted LLM output into typed values. They
//! are pure and total: any input yields a best-effort result, never an error.
//!
//! | Function | Used for | Format |
//! |----------|----------|--------|
//! | [`parse_lines`] | domains, causes, sub-causes | one item per line |
//! | [`parse_scores`] | solution evaluation | `NOVELTY: 7` style prefixes |
//! | [`parse_solution_content`] | solution sections | `SOLUTION TITLE:` style markers |

use crate::analysis::solution::{ScoreSet, SolutionSections};

pub const NOVELTY_PREFIX: &str = "NOVELTY:";
pub const FEASIBILITY_PREFIX: &str = "FEASIBILITY:";
pub const IMPACT_PREFIX: &str = "IMPACT:";
pub const RELEVANCE_PREFIX: &str = "RELEVANCE:";
pub const OVERALL_PREFIX: &str = "OVERALL:";

pub const TITLE_MARKER: &str = "SOLUTION TITLE:";
pub const INSIGHT_MARKER: &str = "METAPHORICAL INSIGHT:";
pub const SOLUTION_MARKER: &str = "CREATIVE SOLUTION:";
pub const IMPLEMENTATION_MARKER: &str = "IMPLEMENTATION:";

/// Split a response into non-empty, trimmed lines.
///
/// Leading list decorations (`1.`, `2)`, `-`, `*`, `•`) are removed so that
/// numbered answers produce clean labels. Lines that are nothing but a
/// decoration are dropped.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| strip_list_marker(line.trim()))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    for bullet in ["- ", "* ", "• "] {
        if let Some(rest) = line.strip_prefix(bullet) {
            return rest.trim_start();
        }
    }
    if matches!(line, "-" | "*" | "•") {
        return "";
    }

    // "12. text" or "3) text"; a bare "3.5 million" must survive
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(after) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))
            && (after.is_empty() || after.starts_with(char::is_whitespace))
        {
            return after.trim_start();
        }
    }
    line
}

/// Parse an evaluation response into a [`ScoreSet`].
///
/// Scans each line for the case-sensitive prefixes `NOVELTY:`,
/// `FEASIBILITY:`, `IMPACT:`, `RELEVANCE:` and `OVERALL:`. Values that do not
/// parse as a finite number are ignored, leaving the field at zero. Parsed
/// values are clamped to `0.0..=10.0`.
///
/// When no usable `OVERALL:` line is present and any dimension is non-zero,
/// `overall` becomes the mean of the four dimensions.
///
/// # Examples
///
/// ```
/// use lateral_domain::analysis::parsing::parse_scores;
///
/// let scores = parse_scores("NOVELTY: 7\nFEASIBILITY: 8\nIMPACT: 6\nRELEVANCE: 9\n");
/// assert_eq!(scores.overall, 7.5);
/// assert_eq!(parse_scores("no scores here").overall, 0.0);
/// ```
pub fn parse_scores(text: &str) -> ScoreSet {
    let mut scores = ScoreSet::default();

    for line in text.lines().map(str::trim) {
        let (slot, rest) = if let Some(rest) = line.strip_prefix(NOVELTY_PREFIX) {
            (&mut scores.novelty, rest)
        } else if let Some(rest) = line.strip_prefix(FEASIBILITY_PREFIX) {
            (&mut scores.feasibility, rest)
        } else if let Some(rest) = line.strip_prefix(IMPACT_PREFIX) {
            (&mut scores.impact, rest)
        } else if let Some(rest) = line.strip_prefix(RELEVANCE_PREFIX) {
            (&mut scores.relevance, rest)
        } else if let Some(rest) = line.strip_prefix(OVERALL_PREFIX) {
            (&mut scores.overall, rest)
        } else {
            continue;
        };

        if let Ok(value) = rest.trim().parse::<f64>()
            && value.is_finite()
        {
            *slot = value.clamp(0.0, 10.0);
        }
    }

    scores.fill_overall();
    scores
}

/// Split a generated solution into its titled sections.
///
/// Markers are searched in fixed order (title, insight, solution,
/// implementation), each one only after the previous match. A missing marker
/// is skipped and the search continues with the next one. Text before the
/// first recognized marker lands in `other`; each section holds the trimmed
/// text up to the next recognized marker or the end of the input.
pub fn parse_solution_content(content: &str) -> SolutionSections {
    let text = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut sections = SolutionSections::default();

    let markers = [
        TITLE_MARKER,
        INSIGHT_MARKER,
        SOLUTION_MARKER,
        IMPLEMENTATION_MARKER,
    ];

    // Index of the section whose body is currently being read
    let mut open: Option<usize> = None;
    let mut cursor = 0;

    for (index, marker) in markers.iter().enumerate() {
        let Some(found) = text[cursor..].find(marker) else {
            continue;
        };
        let marker_start = cursor + found;

        let preceding = text[cursor..marker_start].trim();
        match open {
            Some(section) => set_section(&mut sections, section, preceding),
            None => sections.other = preceding.to_string(),
        }

        cursor = marker_start + marker.len();
        open = Some(index);
    }

    let tail = text[cursor..].trim();
    match open {
        Some(section) => set_section(&mut sections, section, tail),
        None => sections.other = tail.to_string(),
    }

    sections
}

fn set_section(sections: &mut SolutionSections, index: usize, body: &str) {
    let body = body.to_string();
    match index {
        0 => sections.title = body,
        1 => sections.insight = body,
        2 => sections.solution = body,
        _ => sections.implementation = body,
    }
}
