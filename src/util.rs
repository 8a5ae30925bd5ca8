use std::fs;
use std::time::Instant;

use serde::Serialize;
use serde_json::Value;

use crate::color::{color_count, is_valid, Coloring};
use crate::error::ColorMstError;
use crate::graph::GraphModel;
use crate::mst::{kruskal::kruskal, prim::prim, SpanningTree};
use crate::search::{dsatur::dsatur, exact::exact, greedy::greedy, welsh_powell::welsh_powell};

/// coloring algorithm names accepted by [`coloring_by_name`], in the
/// order the comparison mode runs them
pub const COLORING_ALGORITHMS: [&str; 4] = ["greedy", "welsh", "dsatur", "exact"];

/** dispatches a coloring algorithm by name.
`limit` only constrains the exact search. */
pub fn coloring_by_name(
    name: &str, inst: &GraphModel, limit: usize,
) -> Result<Coloring, ColorMstError> {
    match name {
        "greedy" => Ok(greedy(inst)),
        "welsh" => Ok(welsh_powell(inst)),
        "dsatur" => Ok(dsatur(inst)),
        "exact" => exact(inst, limit),
        _ => Err(ColorMstError::UnknownAlgorithm(name.to_string())),
    }
}

/** measured outcome of one coloring run (one CSV row). */
#[derive(Debug, Serialize)]
pub struct ColoringRun {
    /// algorithm name
    pub algorithm: String,
    /// number of colors of the produced assignment
    pub nb_colors: usize,
    /// wall-clock seconds spent inside the algorithm
    pub time: f32,
    /// verdict of the checker on the produced assignment
    pub valid: bool,
}

/** runs one coloring algorithm, times it, and checks the result. */
pub fn run_coloring(
    name: &str, inst: &GraphModel, limit: usize,
) -> Result<(Coloring, ColoringRun), ColorMstError> {
    let t_start = Instant::now();
    let colors = coloring_by_name(name, inst, limit)?;
    let time = t_start.elapsed().as_secs_f32();
    let run = ColoringRun {
        algorithm: name.to_string(),
        nb_colors: color_count(&colors),
        time,
        valid: is_valid(inst, &colors),
    };
    Ok((colors, run))
}

/** measured outcome of one MST run. */
#[derive(Debug, Serialize)]
pub struct MstRun {
    /// algorithm name
    pub algorithm: String,
    /// sum of the selected edge weights
    pub total_weight: f64,
    /// number of selected edges (n-1 when the graph is connected)
    pub nb_edges: usize,
    /// wall-clock seconds spent inside the algorithm
    pub time: f32,
}

/** runs Prim then Kruskal on the instance. */
pub fn run_mst(inst: &GraphModel) -> Vec<(SpanningTree, MstRun)> {
    [("prim", prim as fn(&GraphModel) -> SpanningTree), ("kruskal", kruskal)]
        .iter()
        .map(|(name, algorithm)| {
            let t_start = Instant::now();
            let tree = algorithm(inst);
            let time = t_start.elapsed().as_secs_f32();
            let run = MstRun {
                algorithm: name.to_string(),
                total_weight: tree.total_weight,
                nb_edges: tree.edges.len(),
                time,
            };
            (tree, run)
        })
        .collect()
}

/// CSV summary of coloring runs
pub fn coloring_runs_to_csv(runs: &[ColoringRun]) -> String {
    let mut res = String::from("algorithm,colors,time,valid\n");
    for r in runs {
        res += format!("{},{},{:.6},{}\n", r.algorithm, r.nb_colors, r.time, r.valid).as_str();
    }
    res
}

/// CSV summary of MST runs
pub fn mst_runs_to_csv(runs: &[MstRun]) -> String {
    let mut res = String::from("algorithm,total_weight,nb_edges,time\n");
    for r in runs {
        res += format!("{},{},{},{:.6}\n", r.algorithm, r.total_weight, r.nb_edges, r.time).as_str();
    }
    res
}

/** per-vertex CSV of a coloring, reported with the original labels
(uncolored vertices, if any, are written as -1). */
pub fn coloring_to_csv(inst: &GraphModel, colors: &Coloring) -> String {
    let mut res = String::from("vertex,color\n");
    for (v, c) in colors.iter().enumerate() {
        match c {
            Some(color) => res += format!("{},{}\n", inst.label(v), color).as_str(),
            None => res += format!("{},-1\n", inst.label(v)).as_str(),
        }
    }
    res
}

/// writes performance stats to a JSON file
pub fn export_stats(filename: &str, stats: &Value) -> std::io::Result<()> {
    fs::write(filename, serde_json::to_string(stats)?)
}
