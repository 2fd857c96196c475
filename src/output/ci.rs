//! CI detection and dispatch to the matching annotation formatter.

use crate::env::{Environment, SystemEnv};
use crate::model::AnalysisResult;
use crate::output::{ErrorFormatter, GithubFormatter, TableFormatter, TeamcityFormatter};
use std::io::Write;

/// Variable GitHub Actions sets on every runner.
const GITHUB_INDICATOR: &str = "GITHUB_ACTIONS";
/// Variable TeamCity sets for every build step.
const TEAMCITY_INDICATOR: &str = "TEAMCITY_VERSION";

/// Picks the output surface for the hosting CI system.
///
/// Detection runs on every call — the environment may change between calls
/// (test harnesses rely on this). Exactly one indicator present delegates
/// the whole call, exit code included, to that system's formatter; both or
/// neither fall back to the table.
pub struct CiFormatter<E = SystemEnv> {
    github: GithubFormatter,
    teamcity: TeamcityFormatter,
    fallback: TableFormatter<E>,
    env: E,
}

impl CiFormatter<SystemEnv> {
    pub fn new(
        github: GithubFormatter,
        teamcity: TeamcityFormatter,
        fallback: TableFormatter<SystemEnv>,
    ) -> Self {
        Self::with_env(github, teamcity, fallback, SystemEnv)
    }
}

impl<E: Environment> CiFormatter<E> {
    /// Builds a dispatcher consulting `env` instead of the process
    /// environment.
    pub fn with_env(
        github: GithubFormatter,
        teamcity: TeamcityFormatter,
        fallback: TableFormatter<E>,
        env: E,
    ) -> Self {
        Self {
            github,
            teamcity,
            fallback,
            env,
        }
    }
}

impl<E: Environment> ErrorFormatter for CiFormatter<E> {
    fn format_errors<W: Write>(
        &self,
        result: &AnalysisResult,
        writer: &mut W,
    ) -> std::io::Result<i32> {
        let on_github = self.env.var(GITHUB_INDICATOR).is_some();
        let on_teamcity = self.env.var(TEAMCITY_INDICATOR).is_some();
        match (on_github, on_teamcity) {
            (true, false) => self.github.format_errors(result, writer),
            (false, true) => self.teamcity.format_errors(result, writer),
            _ => self.fallback.format_errors(result, writer),
        }
    }
}
