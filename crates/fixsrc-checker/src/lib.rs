//! Fixture source checker.
//!
//! Runs the "fixtures must have a source" rule over a bound `SymbolGraph`
//! and turns unsatisfied constructor parameters into diagnostics.

pub mod context;
pub use context::{CancellationToken, CheckerOptions};

pub mod finding;
pub use finding::Finding;

pub mod fixture_source_checker;
pub use fixture_source_checker::{CheckResult, FixtureSourceChecker};

pub mod error_reporter;

use fixsrc_binder::SymbolGraph;
use fixsrc_common::Diagnostic;
use fixsrc_solver::{Edition, EditionContext};
use tracing::debug;

/// Outcome of checking one graph end to end.
#[derive(Clone, Debug, Default)]
pub struct GraphCheck {
    /// `None` when the graph references no framework edition and was skipped.
    pub edition: Option<Edition>,
    pub result: CheckResult,
    pub diagnostics: Vec<Diagnostic>,
}

/// Check `graph` under `edition`, or under the detected edition when
/// `edition` is `None`.
pub fn check_graph(
    graph: &SymbolGraph,
    edition: Option<Edition>,
    options: &CheckerOptions,
    cancel: &CancellationToken,
) -> GraphCheck {
    let context = match edition {
        Some(edition) => EditionContext::for_edition(edition, graph),
        None => match EditionContext::detect(graph) {
            Some(context) => context,
            None => {
                debug!(file = graph.file(), "no framework edition referenced; skipping");
                return GraphCheck::default();
            }
        },
    };

    let checker = FixtureSourceChecker::new(graph, context);
    let result = checker.check_all(options, cancel);
    let diagnostics = error_reporter::report_findings(graph.file(), &result.findings);
    GraphCheck {
        edition: Some(checker.edition().edition),
        result,
        diagnostics,
    }
}
