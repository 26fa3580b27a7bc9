//! Build Cause Tree use case
//!
//! Expands one cause into a tree by repeatedly asking why it holds.

use crate::ports::text_generator::TextGenerator;
use crate::use_cases::shared::GenerationClient;
use futures::future::{BoxFuture, FutureExt};
use lateral_domain::{
    CAUSE_FAN_OUT, CauseNode, GenerationRole, PromptTemplate, parse_lines, truncate,
};
use tracing::{debug, warn};

/// Use case for expanding a cause into a bounded "why" tree
///
/// Every node gets at most [`CAUSE_FAN_OUT`] children and the tree is never
/// deeper than the requested depth. A failed expansion turns that node into
/// a leaf; the rest of the tree is still built.
pub struct BuildCauseTreeUseCase<G: TextGenerator + 'static> {
    client: GenerationClient<G>,
}

impl<G: TextGenerator + 'static> BuildCauseTreeUseCase<G> {
    pub fn new(client: GenerationClient<G>) -> Self {
        Self { client }
    }

    /// Expand `cause` to at most `depth` levels below it
    pub async fn execute(&self, problem: &str, cause: &str, depth: usize) -> CauseNode {
        self.dig_deeper(problem, cause, depth).await
    }

    fn dig_deeper<'a>(
        &'a self,
        problem: &'a str,
        cause: &'a str,
        depth: usize,
    ) -> BoxFuture<'a, CauseNode> {
        async move {
            if depth == 0 {
                return CauseNode::leaf(cause);
            }

            let prompt = PromptTemplate::why(problem, cause);
            let response = match self
                .client
                .generate("why", GenerationRole::Analyst, &prompt)
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    warn!("Could not expand cause '{}': {}", truncate(cause, 60), e);
                    return CauseNode::leaf(cause);
                }
            };

            let sub_causes: Vec<String> = parse_lines(&response)
                .into_iter()
                .take(CAUSE_FAN_OUT)
                .collect();
            debug!(
                depth,
                sub_causes = sub_causes.len(),
                "Expanded cause '{}'",
                truncate(cause, 60)
            );

            let mut children = Vec::with_capacity(sub_causes.len());
            for sub_cause in &sub_causes {
                children.push(self.dig_deeper(problem, sub_cause, depth - 1).await);
            }

            CauseNode::with_children(cause, children)
        }
        .boxed()
    }
}
