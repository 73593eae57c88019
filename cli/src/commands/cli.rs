use std::path::PathBuf;

use clap::{Parser, Subcommand};
use primer_core::api::Exercise;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Small stdin/stdout programming exercises")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./primer.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Read exercise input from a file instead of stdin.
    #[arg(long, global = true)]
    pub input_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the available exercises.
    List {
        #[arg(long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },

    /// Show the input lines an exercise expects, in order.
    Describe {
        /// Exercise slug, short name or number.
        #[arg(value_parser = parse_exercise)]
        exercise: Exercise,
    },

    /// 01: declare, print, reassign and late-initialize variables.
    #[command(visible_alias = "variable-declaration", alias = "01", alias = "1")]
    Variables,

    /// 02: convert between strings, integers, floats and booleans.
    #[command(visible_alias = "data-types-conversion", alias = "02", alias = "2")]
    Conversion,

    /// 03: read a profile and print derived values.
    #[command(visible_alias = "basic-input-output", alias = "03", alias = "3")]
    Io,

    /// 07: concatenate, measure, case-convert and slice strings.
    #[command(visible_alias = "string-operations", alias = "07", alias = "7")]
    Strings,

    /// 08: circle measurements from a fixed five-digit pi.
    #[command(visible_alias = "constants-immutable", alias = "08", alias = "8")]
    Constants,

    /// 09: classify a number by sign and parity.
    #[command(visible_alias = "if-else-statements", alias = "09", alias = "9")]
    IfElse,

    /// 10: grade a score.
    #[command(visible_alias = "nested-conditionals", alias = "10")]
    Grades,
}

/// What a parsed subcommand asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List(ListFormat),
    Describe(Exercise),
    Solve(Exercise),
}

impl Commands {
    pub fn action(&self) -> Action {
        match self {
            Commands::List { format } => Action::List(*format),
            Commands::Describe { exercise } => Action::Describe(*exercise),
            Commands::Variables => Action::Solve(Exercise::VariableDeclaration),
            Commands::Conversion => Action::Solve(Exercise::DataTypesConversion),
            Commands::Io => Action::Solve(Exercise::BasicInputOutput),
            Commands::Strings => Action::Solve(Exercise::StringOperations),
            Commands::Constants => Action::Solve(Exercise::ConstantsImmutable),
            Commands::IfElse => Action::Solve(Exercise::IfElseStatements),
            Commands::Grades => Action::Solve(Exercise::NestedConditionals),
        }
    }
}

fn parse_exercise(s: &str) -> Result<Exercise, String> {
    Exercise::from_name(s).ok_or_else(|| {
        let known: Vec<&str> = Exercise::catalog().iter().map(|i| i.short).collect();
        format!("unknown exercise {s:?} (expected one of: {})", known.join(", "))
    })
}
