//! Command-line surface: one subcommand per topology strategy.

mod commands;

pub use commands::{
    BipartiteArgs, Cli, CliError, Command, FixedDegreeArgs, GenerationSummary, MeshArgs,
    OutputArgs, RandomArgs, render_summary, run_cli,
};
