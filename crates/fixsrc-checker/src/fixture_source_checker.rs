//! The "fixtures must have a source" rule.
//!
//! Every constructor parameter of every test class must be satisfiable by
//! the host: through a default value, a built-in injectable, or a fixture
//! declared on the class chain, its collection definition, or the assembly.

use crate::context::{CancellationToken, CheckerOptions};
use crate::finding::Finding;
use fixsrc_binder::{SymbolGraph, TypeDescriptor};
use fixsrc_solver::{AvailabilityCalculator, EditionContext, HierarchyWalker, ParameterMatcher};
use rayon::prelude::*;
use tracing::{debug, debug_span, trace};

/// Result of checking one graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckResult {
    /// Sorted by declaration order of class, then parameter.
    pub findings: Vec<Finding>,
    /// Test classes that were checked (excluded and cancelled ones are not).
    pub classes_checked: usize,
    pub cancelled: bool,
}

pub struct FixtureSourceChecker<'g> {
    graph: &'g SymbolGraph,
    calculator: AvailabilityCalculator<'g>,
    matcher: ParameterMatcher<'g>,
    edition: EditionContext,
}

impl<'g> FixtureSourceChecker<'g> {
    pub fn new(graph: &'g SymbolGraph, edition: EditionContext) -> Self {
        Self {
            graph,
            calculator: AvailabilityCalculator::new(graph),
            matcher: ParameterMatcher::new(graph),
            edition,
        }
    }

    pub fn edition(&self) -> &EditionContext {
        &self.edition
    }

    /// Findings for one test class. The class is not re-validated as a test
    /// class here; callers select classes through `HierarchyWalker`.
    pub fn check_class(&self, class: &TypeDescriptor) -> Vec<Finding> {
        let Some(ctor) = class.primary_constructor() else {
            return Vec::new();
        };
        if ctor.parameters.is_empty() {
            return Vec::new();
        }
        if class.constructors.len() > 1 {
            trace!(
                class = self.graph.name(class.name),
                constructors = class.constructors.len(),
                "checking first constructor only"
            );
        }

        let available = self.calculator.available_capabilities(class.id, &self.edition);
        ctor.parameters
            .iter()
            .enumerate()
            .filter(|(_, param)| !self.matcher.is_satisfied(param, &available, &self.edition))
            .map(|(index, param)| Finding {
                class: class.id,
                class_name: self.graph.name(class.name).to_string(),
                constructor: 0,
                parameter_index: index,
                parameter_name: self.graph.name(param.name).to_string(),
                parameter_type: self.graph.format_type(&param.declared_type),
                range: param.range,
            })
            .collect()
    }

    pub fn check_all(&self, options: &CheckerOptions, cancel: &CancellationToken) -> CheckResult {
        let _span = debug_span!(
            "check_graph",
            file = self.graph.file(),
            edition = %self.edition.edition
        )
        .entered();

        let classes: Vec<&TypeDescriptor> = HierarchyWalker::new(self.graph)
            .test_classes()
            .filter(|class| {
                let excluded = options.is_excluded(self.graph.name(class.name));
                if excluded {
                    debug!(class = self.graph.name(class.name), "excluded");
                }
                !excluded
            })
            .collect();

        let check_one = |class: &&TypeDescriptor| -> Option<Vec<Finding>> {
            if cancel.is_cancelled() {
                return None;
            }
            Some(self.check_class(class))
        };

        let per_class: Vec<Option<Vec<Finding>>> = if options.parallel {
            classes.par_iter().map(check_one).collect()
        } else {
            classes.iter().map(check_one).collect()
        };

        let mut result = CheckResult::default();
        for outcome in per_class {
            match outcome {
                Some(findings) => {
                    result.classes_checked += 1;
                    result.findings.extend(findings);
                }
                None => result.cancelled = true,
            }
        }
        result.findings.sort_by_key(Finding::sort_key);

        debug!(
            classes = result.classes_checked,
            findings = result.findings.len(),
            cancelled = result.cancelled,
            "checked graph"
        );
        result
    }
}

#[cfg(test)]
#[path = "../tests/fixture_source_checker_tests.rs"]
mod tests;
