//! Compares graph coloring algorithms (and MSTs) on DIMACS-like instances

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

use std::fs;
use std::path::Path;

use clap::{load_yaml, App, ArgMatches};
use serde_json::json;

use color_mst::color::is_valid;
use color_mst::dimacs::read_from_file;
use color_mst::error::ColorMstError;
use color_mst::graph::GraphModel;
use color_mst::util::{
    coloring_runs_to_csv, coloring_to_csv, export_stats, mst_runs_to_csv,
    run_coloring, run_mst, ColoringRun, COLORING_ALGORITHMS,
};

pub fn main() {
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    if let Err(e) = run(&main_args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(main_args: &ArgMatches) -> Result<(), ColorMstError> {
    let limit: usize = main_args.value_of("limit").unwrap().parse()
        .map_err(|_| ColorMstError::InvalidGraph("unable to parse the limit given".to_string()))?;
    let output = main_args.value_of("output");
    if let Some(dir) = main_args.value_of("batch") {
        return run_batch(dir, limit, output);
    }
    let inst_filename = match main_args.value_of("instance") {
        Some(f) => f,
        None => {
            eprintln!("use --batch for batch mode or -i/--instance for a single graph");
            std::process::exit(2);
        }
    };
    println!("reading instance: {}...", inst_filename);
    let inst = read_from_file(inst_filename)?;
    inst.display_statistics();
    println!("=======================");

    if main_args.is_present("mst") {
        return run_mst_mode(&inst, output);
    }
    if main_args.is_present("compare") {
        let runs = run_comparison(&inst, limit);
        print_summary_table(&runs);
        if let Some(filename) = output {
            write_file(filename, &coloring_runs_to_csv(&runs))?;
            println!("results saved in: {}", filename);
        }
        if let Some(perf_filename) = main_args.value_of("perf") {
            let stats = json!({
                "inst_name": inst_filename,
                "nb_vertices": inst.nb_vertices(),
                "runs": runs,
            });
            export_stats(perf_filename, &stats)
                .unwrap_or_else(|e| panic!("couldn't write {}: {}", perf_filename, e));
        }
        return Ok(());
    }
    let algo = main_args.value_of("algo").unwrap_or("dsatur");
    let (colors, run_record) = run_coloring(algo, &inst, limit)?;
    println!("algorithm: {}", run_record.algorithm);
    println!("vertices: {}", inst.nb_vertices());
    println!("colors: {}", run_record.nb_colors);
    println!("time: {:.6}s", run_record.time);
    if main_args.is_present("verify") {
        println!("valid coloring: {}", is_valid(&inst, &colors));
    }
    if let Some(filename) = output {
        write_file(filename, &coloring_to_csv(&inst, &colors))?;
        println!("coloring saved in: {}", filename);
    }
    Ok(())
}

/// runs the four algorithms, skipping the exact search when the instance
/// exceeds the vertex limit
fn run_comparison(inst: &GraphModel, limit: usize) -> Vec<ColoringRun> {
    let mut runs = Vec::new();
    for name in COLORING_ALGORITHMS.iter() {
        match run_coloring(name, inst, limit) {
            Ok((_, run_record)) => {
                println!(
                    "{}: colors={}, time={:.6}s, valid={}",
                    run_record.algorithm, run_record.nb_colors, run_record.time, run_record.valid
                );
                runs.push(run_record);
            }
            Err(e) => println!("skipping {}: {}", name, e),
        }
    }
    runs
}

fn print_summary_table(runs: &[ColoringRun]) {
    println!("\n{:<12} {:>6} {:>12} {:>8}", "algorithm", "colors", "time(s)", "valid");
    println!("{}", "-".repeat(42));
    for r in runs {
        println!("{:<12} {:>6} {:>12.6} {:>8}", r.algorithm, r.nb_colors, r.time, r.valid);
    }
}

fn run_mst_mode(inst: &GraphModel, output: Option<&str>) -> Result<(), ColorMstError> {
    let results = run_mst(inst);
    for (tree, run_record) in &results {
        println!(
            "{}: total weight = {}, {} edges, time = {:.6}s",
            run_record.algorithm, run_record.total_weight, run_record.nb_edges, run_record.time
        );
        if !tree.spans(inst.nb_vertices()) {
            println!("\t(disconnected graph: spanning forest only)");
        }
    }
    if let Some(filename) = output {
        let runs: Vec<_> = results.into_iter().map(|(_, r)| r).collect();
        write_file(filename, &mst_runs_to_csv(&runs))?;
        println!("results saved in: {}", filename);
    }
    Ok(())
}

/// runs the coloring comparison on every instance of a directory and
/// writes a single CSV (one row per instance x algorithm)
fn run_batch(dir: &str, limit: usize, output: Option<&str>) -> Result<(), ColorMstError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| ColorMstError::InvalidGraph(format!("{}: {}", dir, e)))?;
    let mut filenames: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| matches!(
            p.extension().and_then(|e| e.to_str()),
            Some("txt") | Some("col")
        ))
        .collect();
    filenames.sort();
    let mut csv = String::from("instance,vertices,algorithm,colors,time,valid\n");
    for path in &filenames {
        let inst = match read_from_file(&path.to_string_lossy()) {
            Ok(inst) => inst,
            Err(e) => {
                println!("skipping {}: {}", path.display(), e);
                continue;
            }
        };
        println!("\n--- {} ({} vertices) ---", path.display(), inst.nb_vertices());
        for run_record in run_comparison(&inst, limit) {
            csv += format!(
                "{},{},{},{},{:.6},{}\n",
                path.display(), inst.nb_vertices(), run_record.algorithm,
                run_record.nb_colors, run_record.time, run_record.valid
            ).as_str();
        }
    }
    let out = output.unwrap_or("batch_results.csv");
    write_file(out, &csv)?;
    println!("\nbatch results saved in: {}", out);
    Ok(())
}

fn write_file(filename: &str, content: &str) -> Result<(), ColorMstError> {
    fs::write(Path::new(filename), content)
        .map_err(|e| ColorMstError::InvalidGraph(format!("{}: {}", filename, e)))
}
