use anyhow::{Context, Result, anyhow};
use fixsrc_binder::{GraphSource, bind_source};
use fixsrc_checker::{CancellationToken, check_graph};
use fixsrc_common::Diagnostic;
use fixsrc_solver::Edition;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

use crate::args::CliArgs;
use crate::config::{FixsrcConfig, ResolvedOptions, find_config, load_config, resolve_options};
use crate::fs::discover_graph_files;

/// Per-graph summary kept for `--debug-graph` and the final report.
#[derive(Debug, Clone)]
pub struct GraphReport {
    pub path: PathBuf,
    /// `None` when the graph references no framework and was skipped.
    pub edition: Option<Edition>,
    pub classes_checked: usize,
    /// Graph dump, when `--debug-graph` is set.
    pub dump: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RunResult {
    pub options: ResolvedOptions,
    pub graphs: Vec<GraphReport>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Load configuration, then bind and check every input graph.
pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunResult> {
    let config = match find_config(args, cwd) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config(&path)?
        }
        None => FixsrcConfig::default(),
    };
    let options = resolve_options(args, &config)?;
    let files = discover_graph_files(&args.inputs, cwd)?;
    if files.is_empty() {
        return Err(anyhow!("no {} files found", crate::fs::GRAPH_FILE_SUFFIX));
    }

    let cancel = CancellationToken::new();
    let mut graphs = Vec::with_capacity(files.len());
    let mut diagnostics = Vec::new();
    for path in files {
        let (report, graph_diagnostics) = check_file(&path, &options, &cancel)?;
        graphs.push(report);
        diagnostics.extend(graph_diagnostics);
    }

    Ok(RunResult {
        options,
        graphs,
        diagnostics,
    })
}

fn check_file(
    path: &Path,
    options: &ResolvedOptions,
    cancel: &CancellationToken,
) -> Result<(GraphReport, Vec<Diagnostic>)> {
    let _span = info_span!("check_file", path = %path.display()).entered();

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut source = GraphSource::from_json(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    if source.file.is_empty() {
        source.file = path.display().to_string();
    }
    let graph = bind_source(&source).with_context(|| format!("failed to bind {}", path.display()))?;

    let dump = options.debug_graph.then(|| graph.dump());
    let check = check_graph(&graph, options.edition, &options.checker, cancel);
    let report = GraphReport {
        path: path.to_path_buf(),
        edition: check.edition,
        classes_checked: check.result.classes_checked,
        dump,
    };
    Ok((report, check.diagnostics))
}
