//! End-to-end runs from raw argument vectors to files on disk.

use std::fs;

use clap::Parser;
use flowgen_cli::cli::{Cli, render_summary, run_cli};
use flowgen_test_support::edge_list::{VertexId, out_degrees, parse_edge_list};
use rstest::rstest;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn run(args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let summary = run_cli(Cli::try_parse_from(args)?)?;
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[rstest]
#[case::fixed_degree(&["fixed-degree", "--vertices", "8", "--out-degree", "2", "--min-capacity", "1", "--max-capacity", "4"], "fixed-degree", 20)]
#[case::mesh_defaults(&["mesh", "--defaults"], "mesh", 31)]
#[case::mesh_grid(&["mesh", "--rows", "4", "--cols", "1", "--capacity", "6"], "mesh", 14)]
#[case::random(&["random", "--vertices", "3", "--density", "100", "--min-capacity", "2", "--max-capacity", "2"], "random-density", 4)]
#[case::bipartite(&["bipartite", "--left", "2", "--right", "3", "--max-probability", "1", "--min-capacity", "1", "--max-capacity", "9"], "bipartite", 11)]
fn subcommands_write_parseable_edge_lists(
    #[case] options: &[&str],
    #[case] strategy: &str,
    #[case] edges: usize,
) -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("nested").join("graph.txt");
    let path_arg = path.to_string_lossy().into_owned();

    let mut args = vec!["flowgen"];
    args.extend_from_slice(options);
    args.extend_from_slice(&["--output", path_arg.as_str(), "--seed", "17"]);

    let summary = run(&args)?;
    assert_eq!(
        summary,
        format!("strategy: {strategy}\noutput: {path_arg}\nseed: 17\nedges: {edges}\n")
    );

    let parsed = parse_edge_list(&fs::read_to_string(&path)?)?;
    assert_eq!(parsed.len(), edges);
    assert!(!dir.path().join("nested").join("graph.txt.part").exists());
    Ok(())
}

#[rstest]
fn constant_mesh_flag_pins_every_capacity() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("mesh.txt");
    let path_arg = path.to_string_lossy().into_owned();
    run(&[
        "flowgen",
        "mesh",
        "--rows",
        "3",
        "--cols",
        "3",
        "--capacity",
        "12",
        "--constant-capacity",
        "--output",
        path_arg.as_str(),
    ])?;

    let parsed = parse_edge_list(&fs::read_to_string(&path)?)?;
    assert!(parsed.iter().all(|edge| edge.capacity == 12));
    assert_eq!(out_degrees(&parsed).get(&VertexId::Source), Some(&3));
    Ok(())
}

#[rstest]
fn rerunning_with_the_reported_seed_reproduces_the_file() -> TestResult {
    let dir = TempDir::new()?;
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    let first_arg = first.to_string_lossy().into_owned();
    let second_arg = second.to_string_lossy().into_owned();
    let options = ["random", "--vertices", "20", "--density", "40"];

    let mut args = vec!["flowgen"];
    args.extend_from_slice(&options);
    args.extend_from_slice(&["--output", first_arg.as_str()]);
    let summary = run(&args)?;
    let seed = summary
        .lines()
        .find_map(|line| line.strip_prefix("seed: "))
        .ok_or("summary must report the seed")?
        .to_owned();

    let mut replay = vec!["flowgen"];
    replay.extend_from_slice(&options);
    replay.extend_from_slice(&["--output", second_arg.as_str(), "--seed", seed.as_str()]);
    run(&replay)?;

    assert_eq!(fs::read(&first)?, fs::read(&second)?);
    Ok(())
}

#[rstest]
fn out_of_range_density_is_rejected_before_writing() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("graph.txt");
    let path_arg = path.to_string_lossy().into_owned();
    let cli = Cli::try_parse_from([
        "flowgen",
        "random",
        "--density",
        "101",
        "--output",
        path_arg.as_str(),
    ])?;
    let err = run_cli(cli).expect_err("density above 100 must fail");
    assert_eq!(err.code(), "TOPOLOGY_DENSITY_OUT_OF_RANGE");
    assert!(!path.exists());
    Ok(())
}
