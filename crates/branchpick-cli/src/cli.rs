use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use branchpick::{
    run_self_tests, run_session, BranchpickError, GitCli, SelfTestReport,
    CHECKOUT_FAILED_MESSAGE,
};
use clap::Parser;

const TEST_ARG: &str = "test";

#[derive(Parser)]
#[command(
    name = "branchpick",
    version,
    about = "Pick a local git branch by number and check it out",
    after_help = "Pass `test` to run the bundled parser and menu checks."
)]
pub(crate) struct Cli {
    /// Run git in this directory instead of the current one
    #[arg(short = 'C', long = "repo", value_name = "DIR")]
    pub(crate) repo: Option<PathBuf>,
    /// Log each git invocation to stderr
    #[arg(short, long)]
    pub(crate) verbose: bool,
    /// Extra arguments; `test` anywhere runs the checks, anything else is ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub(crate) rest: Vec<String>,
}

impl Cli {
    pub(crate) fn wants_checks(&self) -> bool {
        self.rest.iter().any(|arg| arg == TEST_ARG)
    }
}

pub(crate) fn run(cli: Cli) -> ExitCode {
    if cli.wants_checks() {
        return run_checks();
    }
    run_checkout(cli.repo)
}

fn run_checkout(repo: Option<PathBuf>) -> ExitCode {
    let git = match repo {
        Some(path) => GitCli::in_dir(path),
        None => GitCli::new(),
    };

    let result = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut input = stdin.lock();
        let mut output = stdout.lock();
        run_session(&git, &mut input, &mut output)
    };

    match result {
        Ok(checkout_output) => {
            println!("{checkout_output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "checkout aborted");
            if let Some(detail) = git_detail(&err) {
                eprintln!("{detail}");
            }
            println!("{CHECKOUT_FAILED_MESSAGE}");
            ExitCode::FAILURE
        }
    }
}

/// What git itself said about a failed command, if anything.
fn git_detail(err: &BranchpickError) -> Option<&str> {
    match err {
        BranchpickError::GitCommand { stderr, .. } if !stderr.is_empty() => Some(stderr.as_str()),
        _ => None,
    }
}

fn run_checks() -> ExitCode {
    let report = run_self_tests();
    let mut stdout = io::stdout().lock();
    if write_report(&mut stdout, &report).is_err() {
        return ExitCode::FAILURE;
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn write_report(out: &mut impl Write, report: &SelfTestReport) -> io::Result<()> {
    for outcome in &report.outcomes {
        match &outcome.failure {
            None => writeln!(out, "{} ... ok", outcome.name)?,
            Some(reason) => {
                writeln!(out, "{} ... FAIL", outcome.name)?;
                writeln!(out, "    {reason}")?;
            }
        }
    }
    writeln!(out)?;
    writeln!(out, "Ran {} checks", report.outcomes.len())?;
    let failures = report.failures();
    if failures == 0 {
        writeln!(out, "OK")
    } else {
        writeln!(out, "FAILED (failures={failures})")
    }
}
