use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use maxdefense_algorithms::Solver;
use maxdefense_challenges::print_selection;
use maxdefense_runtime::*;
use maxdefense_utils::{compress_obj, init_tracing, jsonify};
use std::{fs, path::PathBuf};

fn cli() -> Command {
    Command::new("maxdefense-runtime")
        .about("Selects the most valuable items that fit within a budget")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compute_selection")
                .about("Computes a selection")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--algorithm [ALGORITHM] "Selection algorithm")
                        .default_value("greedy")
                        .value_parser(["greedy", "exhaustive"]),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the selection will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "If output file is set, the selection will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_selection")
                .about("Verifies a selection against the catalog and budget")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SELECTION> "Selection json string, path to a json or compressed file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("benchmark")
                .about("Times greedy and exhaustive search on growing candidate counts")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    init_tracing();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("compute_selection", sub_m)) => compute(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("algorithm").unwrap().clone(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
        ),
        Some(("verify_selection", sub_m)) => verify(
            sub_m.get_one::<String>("SETTINGS").unwrap().clone(),
            sub_m.get_one::<String>("SELECTION").unwrap().clone(),
        ),
        Some(("benchmark", sub_m)) => benchmark(sub_m.get_one::<String>("SETTINGS").unwrap().clone()),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn compute(
    settings: String,
    algorithm: String,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let settings = load_settings(&settings)?;
    let solver: Solver = algorithm.parse()?;
    let challenge = load_challenge(&settings, settings.max_items)?;

    let selection = compute_selection(&challenge, solver)?;
    println!(
        "{} selection from {} candidates with budget {}",
        solver,
        challenge.catalog.len(),
        challenge.budget
    );
    print_selection(&selection);

    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&selection)?)?;
        } else {
            fs::write(&path, jsonify(&selection)?)?;
        }
    }
    Ok(())
}

fn verify(settings: String, selection: String) -> Result<()> {
    let settings = load_settings(&settings)?;
    let selection = load_selection(&selection)?;
    let totals = verify_selection(&settings, &selection)?;
    println!(
        "Selection is valid: total cost {}, total value {}",
        totals.cost, totals.value
    );
    Ok(())
}

fn benchmark(settings: String) -> Result<()> {
    let settings = load_settings(&settings)?;
    for run in run_benchmark(&settings)? {
        println!(
            "time elapsed for {} solution with {} candidates: {:?} (cost {}, value {})",
            run.solver, run.num_candidates, run.elapsed, run.totals.cost, run.totals.value
        );
    }
    Ok(())
}
