use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, Pipeline};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;
use crate::util::path::absolutize;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completion {
        print_completions(shell);
        return Ok(());
    }

    let file = cli
        .file()
        .ok_or_else(|| CliError::Usage("no document file given".to_string()))?;

    // reject malformed chains before touching the file
    let pipeline = Pipeline::parse(cli.steps())?;

    let path = absolutize(file).map_err(|e| InfraError::io("resolve document path", e))?;
    let settings = Settings::load(path.parent(), cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    _navigate(&ServiceContainer::new(settings), &path, &pipeline)
}

#[instrument(skip(container, pipeline))]
fn _navigate(
    container: &ServiceContainer,
    path: &Path,
    pipeline: &Pipeline,
) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = container.navigator().run(path, pipeline, &mut out)?;
    debug!(
        "finished at /{} (saved: {})",
        report.selection.join("/"),
        report.saved
    );
    Ok(())
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

/// Print a failed invocation the way scripts expect it.
///
/// Failing to write the report changes nothing: the caller still exits with
/// the error's exit code.
pub fn report_error(err: &CliError) {
    let stdout = io::stdout();
    if let Err(e) = write_report(err, &mut stdout.lock()) {
        debug!("could not report error on stdout: {}", e);
    }
}

/// Write the report for `err`.
///
/// Usage problems go to `out` followed by the step reference; navigation
/// failures were already printed by the failing step; everything else is a
/// single `error:` line on stderr.
pub fn write_report(err: &CliError, out: &mut dyn Write) -> io::Result<()> {
    match err {
        CliError::Usage(msg) => {
            output::error(msg);
            output::help(out)?;
        }
        _ => match err.application() {
            Some(e @ ApplicationError::Usage { .. }) => {
                output::info(out, e)?;
                output::help(out)?;
            }
            Some(e) if e.is_reported() => debug!("reported by step: {}", e),
            _ => output::error(err),
        },
    }
    out.flush()
}
