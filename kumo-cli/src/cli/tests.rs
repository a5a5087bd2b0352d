//! Unit tests for the CLI commands and summary rendering.

use super::{
    Cli, CliError, Command, CommunityArgs, CycleArgs, ExecutionSummary, render_summary, run_cli,
};

use std::io::Cursor;
use std::path::PathBuf;

use clap::Parser;
use kumo_core::{DocumentError, GenerateError, GraphDocument};
use rstest::rstest;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn temp_dir() -> TempDir {
    TempDir::new().expect("temporary directory must be created")
}

fn cycle_cli(vertex_count: usize, seed: Option<u64>, output: PathBuf) -> Cli {
    Cli {
        command: Command::Cycle(CycleArgs {
            vertex_count,
            seed,
            output,
        }),
    }
}

fn community_cli(args: CommunityArgs) -> Cli {
    Cli {
        command: Command::Community(args),
    }
}

#[rstest]
fn cycle_arguments_default_to_original_constants() -> TestResult {
    let cli = Cli::try_parse_from(["kumo", "cycle"])?;
    match cli.command {
        Command::Cycle(args) => {
            assert_eq!(args.vertex_count, 1000);
            assert_eq!(args.seed, None);
            assert_eq!(args.output, PathBuf::from("cycle.json"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
    Ok(())
}

#[rstest]
fn community_arguments_default_to_original_constants() -> TestResult {
    let cli = Cli::try_parse_from(["kumo", "community"])?;
    match cli.command {
        Command::Community(args) => {
            assert_eq!(args.vertex_count, 1000);
            assert_eq!(args.intra_probability_a, 0.01);
            assert_eq!(args.intra_probability_b, 0.01);
            assert_eq!(args.inter_probability, 0.001);
            assert_eq!(args.seed, None);
            assert_eq!(args.output, PathBuf::from("community.json"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
    Ok(())
}

#[rstest]
fn community_arguments_parse_explicit_values() -> TestResult {
    let cli = Cli::try_parse_from([
        "kumo",
        "community",
        "--vertex-count",
        "25",
        "--p-intra-a",
        "0.2",
        "--p-intra-b",
        "0.3",
        "--p-inter",
        "0.05",
        "--seed",
        "9",
        "--output",
        "blocks.json",
    ])?;
    match cli.command {
        Command::Community(args) => {
            assert_eq!(args.vertex_count, 25);
            assert_eq!(args.intra_probability_a, 0.2);
            assert_eq!(args.intra_probability_b, 0.3);
            assert_eq!(args.inter_probability, 0.05);
            assert_eq!(args.seed, Some(9));
            assert_eq!(args.output, PathBuf::from("blocks.json"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
    Ok(())
}

#[rstest]
fn run_cycle_writes_document_and_reports_counts() -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("cycle.json");
    let summary = run_cli(cycle_cli(12, Some(42), output.clone()))?;

    assert_eq!(summary.generator, "cycle");
    assert_eq!(summary.vertex_count, 12);
    assert_eq!(summary.edge_count, 12);
    assert_eq!(summary.output, output);

    let document: GraphDocument = serde_json::from_slice(&std::fs::read(&output)?)?;
    assert_eq!(document.vertices.len(), 12);
    assert_eq!(document.edges.len(), 12);
    Ok(())
}

#[rstest]
fn run_community_with_unit_probabilities_writes_complete_graph() -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("community.json");
    let cli = community_cli(CommunityArgs {
        vertex_count: 10,
        intra_probability_a: 1.0,
        intra_probability_b: 1.0,
        inter_probability: 1.0,
        seed: Some(42),
        output: output.clone(),
    });
    let summary = run_cli(cli)?;

    assert_eq!(summary.generator, "community");
    assert_eq!(summary.vertex_count, 10);
    assert_eq!(summary.edge_count, 45);

    let document: GraphDocument = serde_json::from_slice(&std::fs::read(&output)?)?;
    assert_eq!(document.edges.len(), 45);
    Ok(())
}

#[rstest]
fn repeated_runs_with_fixed_seed_are_byte_identical() -> TestResult {
    let dir = temp_dir();
    let first_path = dir.path().join("first.json");
    let second_path = dir.path().join("second.json");

    run_cli(cycle_cli(100, Some(7), first_path.clone()))?;
    run_cli(cycle_cli(100, Some(7), second_path.clone()))?;

    assert_eq!(std::fs::read(&first_path)?, std::fs::read(&second_path)?);
    Ok(())
}

#[rstest]
fn run_community_rejects_invalid_probability_before_writing() -> TestResult {
    let dir = temp_dir();
    let output = dir.path().join("community.json");
    let cli = community_cli(CommunityArgs {
        vertex_count: 10,
        intra_probability_a: 1.5,
        intra_probability_b: 0.5,
        inter_probability: 0.5,
        seed: Some(42),
        output: output.clone(),
    });

    let err = run_cli(cli).expect_err("out-of-range probability must fail");
    assert!(matches!(
        err,
        CliError::Generate(GenerateError::InvalidProbability {
            parameter: "intra_probability_a",
            ..
        })
    ));
    assert!(!output.exists(), "no file may be written on invalid config");
    Ok(())
}

#[rstest]
fn run_cycle_propagates_write_failures() {
    let dir = temp_dir();
    let output = dir.path().join("missing").join("cycle.json");
    let err = run_cli(cycle_cli(4, Some(1), output)).expect_err("unwritable path must fail");
    assert!(matches!(
        err,
        CliError::Document(DocumentError::Io { .. })
    ));
}

#[rstest]
fn render_summary_lists_generator_counts_and_output() -> TestResult {
    let summary = ExecutionSummary {
        generator: "community",
        vertex_count: 42,
        edge_count: 17,
        output: PathBuf::from("community.json"),
    };
    let mut buffer = Cursor::new(Vec::new());
    render_summary(&summary, &mut buffer)?;
    let text = String::from_utf8(buffer.into_inner())?;
    assert_eq!(
        text,
        "generator: community\nvertices: 42\nedges: 17\noutput: community.json\n"
    );
    Ok(())
}
