//! Failure presentation
//!
//! Library crates return typed errors; this is the only place that decides
//! how each kind looks on the terminal.

use devx_scaffold::guard::CONFLICT_HINT;
use devx_scaffold::ScaffoldError;
use tracing::debug;

use crate::output;

const PROGRAM: &str = "create-devx";

pub fn is_cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ScaffoldError>(),
        Some(ScaffoldError::Cancelled)
    )
}

/// Restore the terminal and leave with status 1.
///
/// Exits directly: a prompt may still be blocking a worker thread, which
/// would keep the runtime from shutting down.
pub fn exit_cancelled() -> ! {
    output::restore_cursor();
    println!();
    std::process::exit(1)
}

/// Print `err` the way its kind calls for
pub fn failure(err: &anyhow::Error) {
    match err.downcast_ref::<ScaffoldError>() {
        Some(e) if e.is_user_error() => rejected(e),
        Some(ScaffoldError::Download(e)) => {
            debug!("Template download failed: {}", e);
            aborting();
        }
        Some(install @ ScaffoldError::InstallFailed { .. }) => {
            aborting();
            output::error(&format!("  {}.", install));
            output::error("");
        }
        _ => {
            aborting();
            output::error_red("Unexpected error. Please report it as a bug:");
            output::error(&format!("{:?}", err));
            output::error("");
        }
    }
}

/// Problems with the request itself: no trace, just what to change
fn rejected(err: &ScaffoldError) {
    debug!("Rejected: {}", err);
    match err {
        ScaffoldError::MissingProjectDirectory => usage_hint(),
        ScaffoldError::InvalidName { name, problems } => {
            output::error(&format!(
                "Could not create a project called {} because of npm naming restrictions:",
                output::highlight(&format!("\"{}\"", name))
            ));
            for problem in problems {
                output::problem(problem);
            }
        }
        ScaffoldError::NotWritable { path } => {
            output::error_red(&format!(
                "The application path {} is not writable, please check folder permissions and try again.",
                path
            ));
            output::error("It is likely you do not have write permissions for this folder.");
        }
        ScaffoldError::ParentMissing { path } => {
            output::error_red(&format!("The parent directory {} does not exist.", path));
        }
        ScaffoldError::DirectoryNotEmpty { name, conflicts } => {
            output::error(&format!(
                "The directory {} contains files that could conflict:",
                output::highlight(name)
            ));
            output::error("");
            for conflict in conflicts {
                output::error(&format!("  {}", conflict));
            }
            output::error("");
            output::error(CONFLICT_HINT);
        }
        other => output::error_red(&other.to_string()),
    }
}

fn aborting() {
    output::error("");
    output::error("Aborting installation.");
}

fn usage_hint() {
    output::error("");
    output::error("Please specify the project directory:");
    output::error(&format!(
        "  {} {}",
        output::cyan(PROGRAM),
        output::highlight("<project-directory>")
    ));
    output::error("For example:");
    output::error(&format!(
        "  {} {}",
        output::cyan(PROGRAM),
        output::highlight("backend")
    ));
    output::error("");
    output::error(&format!(
        "Run {} to see all options.",
        output::cyan(&format!("{} --help", PROGRAM))
    ));
}
