use crate::cli;
use crate::config::Config;
use crate::github::issues::{IssueCreator, IssueResult};
use crate::github::transport::ReqwestTransport;
use crate::output;
use anyhow::Context;

/// Parses `args`, creates one issue and prints the outcome.
///
/// The result line goes to stdout and, when given, to `stdout_additional`.
/// Any HTTP status counts as a completed run.
pub async fn run(
    args: Vec<String>,
    mut stdout_additional: Option<&mut dyn std::io::Write>,
    config: &Config,
) -> anyhow::Result<IssueResult> {
    let options = cli::parser::parse_args(&args)?;

    let transport = ReqwestTransport::new().context("Failed to create HTTP client")?;
    let creator = IssueCreator::new(config, transport);

    let result = creator
        .create_issue(&options.title, &options.body)
        .await
        .context("Failed to create issue")?;
    if !result.is_success() {
        tracing::debug!(status = result.status, "issue was not created");
    }

    output::println(&result.to_string(), &mut stdout_additional)?;
    Ok(result)
}
