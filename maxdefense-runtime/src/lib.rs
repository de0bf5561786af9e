mod settings;
pub use settings::*;

use anyhow::{anyhow, Context, Result};
use maxdefense_algorithms::{exhaustive, Solver};
use maxdefense_challenges::{Catalog, Challenge, Selection, Totals};
use maxdefense_utils::{decompress_obj, dejsonify};
use std::{
    fs,
    io::Read,
    path::Path,
    time::{Duration, Instant},
};
use tracing::{info, warn};

pub fn load_catalog(settings: &RunSettings) -> Result<Catalog> {
    let loaded = Catalog::load_with_report(&settings.catalog, settings.format())
        .context("Failed to load catalog")?;
    if !loaded.skipped.is_empty() {
        warn!(
            skipped = loaded.skipped.len(),
            loaded = loaded.catalog.len(),
            "dropped malformed catalog rows"
        );
    }
    Ok(loaded.catalog)
}

/// Loads the catalog and keeps the first `max_items` items inside the
/// settings' value window.
pub fn load_challenge(settings: &RunSettings, max_items: usize) -> Result<Challenge> {
    let candidates = load_catalog(settings)?.filter_window(&settings.window(), max_items);
    info!(candidates = candidates.len(), budget = settings.budget, "built challenge");
    Ok(Challenge::new(candidates, settings.budget))
}

pub fn compute_selection(challenge: &Challenge, solver: Solver) -> Result<Selection> {
    if solver == Solver::Exhaustive && challenge.catalog.len() > exhaustive::RECOMMENDED_MAX_ITEMS
    {
        warn!(
            candidates = challenge.catalog.len(),
            "exhaustive search over this many items may take a long time"
        );
    }
    let selection = solver.solve(challenge)?;
    info!(%solver, selected = selection.len(), "computed selection");
    Ok(selection)
}

/// Checks a stored selection against the full, unfiltered catalog.
pub fn verify_selection(settings: &RunSettings, selection: &Selection) -> Result<Totals> {
    let challenge = Challenge::new(load_catalog(settings)?, settings.budget);
    challenge
        .verify_selection(selection)
        .map_err(|e| anyhow!("Invalid selection: {}", e))
}

/// First byte of a zlib stream at the default compression level. No json
/// document can start with it.
const ZLIB_HEADER: u8 = 0x78;

/// Accepts a json string, a path to an existing file, or `-` for stdin. File
/// and stdin input may also be the zlib output of `compute_selection --compress`.
pub fn load_selection(selection: &str) -> Result<Selection> {
    let bytes = if selection == "-" {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read selection from stdin")?;
        buffer
    } else if selection.ends_with(".json") || Path::new(selection).is_file() {
        fs::read(selection)
            .with_context(|| format!("Failed to read selection file: {}", selection))?
    } else {
        selection.as_bytes().to_vec()
    };

    if bytes.first() == Some(&ZLIB_HEADER) {
        return decompress_obj::<Selection>(&bytes).context("Failed to decompress selection");
    }
    let text = std::str::from_utf8(&bytes).context("Selection is not valid UTF-8")?;
    dejsonify::<Selection>(text).context("Failed to parse selection")
}

#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub num_candidates: usize,
    pub solver: Solver,
    pub elapsed: Duration,
    pub totals: Totals,
}

/// Times every solver on the first `n` filtered items for each `n` in
/// `settings.sizes`.
pub fn run_benchmark(settings: &RunSettings) -> Result<Vec<BenchmarkRun>> {
    let catalog = load_catalog(settings)?;
    let window = settings.window();

    let mut runs = Vec::new();
    for &size in &settings.sizes {
        let challenge = Challenge::new(catalog.filter_window(&window, size), settings.budget);
        for solver in Solver::ALL {
            let start = Instant::now();
            let selection = compute_selection(&challenge, solver)?;
            runs.push(BenchmarkRun {
                num_candidates: challenge.catalog.len(),
                solver,
                elapsed: start.elapsed(),
                totals: selection.totals(),
            });
        }
    }
    Ok(runs)
}
