//! Diagnostic reporting for static-analysis results.
//!
//! The analysis engine hands this crate a finalized [`AnalysisResult`]; the
//! formatters render it onto a caller-owned writer as a bordered terminal
//! table or a CI-native annotation stream, and return the process exit code.

pub mod env;
pub mod model;
pub mod output;
pub mod paths;
pub mod text;

pub use env::{Environment, SystemEnv};
pub use model::{AnalysisResult, Diagnostic, ModelError};
pub use output::{
    CiFormatter, ErrorFormatter, GithubFormatter, JsonFormatter, TableFormatter, TeamcityFormatter,
};
pub use paths::FuzzyPathResolver;
