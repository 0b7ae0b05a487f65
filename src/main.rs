//! command-line entry point: reads an instance, colors it, prints the result
//! line, and optionally exports the solution and performance statistics.

use std::process::exit;
use std::time::Instant;

use clap::{App, load_yaml};
use serde_json::json;

use restart_color::color::{checker, CheckerResult, ColoringError};
use restart_color::graph::Graph;
use restart_color::parser::read_from_file;
use restart_color::report::ColoringResult;
use restart_color::search::restart::{solve, SearchConfig};

fn fail(e: ColoringError) -> ! {
    eprintln!("{}", e);
    exit(1);
}

/**
reads an instance, the search parameters, and solves the coloring problem.

# Panics
 - if a numeric command-line parameter cannot be parsed
*/
pub fn main() {
    env_logger::init();
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let inst_filename = main_args.value_of("instance").unwrap();
    let mut config = SearchConfig::default();
    if let Some(v) = main_args.value_of("trials") {
        config.trial_count = v.parse().expect("unable to parse the number of trials");
    }
    if let Some(v) = main_args.value_of("threshold") {
        config.small_graph_vertex_threshold =
            v.parse().expect("unable to parse the threshold");
    }
    if let Some(v) = main_args.value_of("seed") {
        config.random_seed = Some(v.parse().expect("unable to parse the seed"));
    }
    if let Some(v) = main_args.value_of("time") {
        config.time_limit = Some(v.parse().expect("unable to parse the time given"));
    }
    let sol_file: Option<String> = main_args.value_of("solution").map(|e| e.to_string());
    let perf_file: Option<String> = main_args.value_of("perf").map(|e| e.to_string());

    // read instance file
    println!("reading instance: {}...", inst_filename);
    let (vertices, edges) = read_from_file(inst_filename).unwrap_or_else(|e| fail(e));
    let graph = Graph::build(&vertices, &edges).unwrap_or_else(|e| fail(e));
    graph.display_statistics();
    println!("=======================");

    // solve it
    let t_start = Instant::now();
    let state = solve(&graph, &config).unwrap_or_else(|e| fail(e));
    let duration = t_start.elapsed().as_secs_f32();
    let result = ColoringResult::from_state(&graph, &state);
    println!("search took {:.3} seconds. Nb colors: {}", duration, result.nb_colors);
    println!("{}", result.to_output_string());

    // export statistics
    if let Some(filename) = perf_file {
        let stats = json!({
            "nb_colors": result.nb_colors,
            "time_searched": duration,
            "inst_name": inst_filename
        });
        if let Err(why) = std::fs::write(&filename, serde_json::to_string(&stats).unwrap()) {
            panic!("couldn't write {}: {}", filename, why);
        }
    }
    // export solution (checked before being written)
    if let Some(filename) = sol_file {
        match checker(&graph, &result) {
            CheckerResult::Ok(_) => {},
            other => { println!("invalid solution (reason: {:?})", other); }
        }
        if let Err(why) = std::fs::write(&filename, result.to_output_string()) {
            panic!("couldn't write {}: {}", filename, why);
        }
    }
}
