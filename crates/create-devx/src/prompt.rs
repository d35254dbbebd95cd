//! Interactive project name prompt

use camino::Utf8PathBuf;
use console::Term;
use dialoguer::Input;
use tracing::debug;

use devx_scaffold::{
    cancellable, validate_project_name, CancellationToken, ProjectPath, Result, ScaffoldError,
};

pub const DEFAULT_PROJECT_NAME: &str = "backend";

/// Whether a prompt can be shown at all
pub fn is_interactive() -> bool {
    Term::stdout().is_term() && Term::stderr().is_term()
}

/// Ask for the project directory, validating the final path segment on
/// every submission. Any prompt failure counts as cancellation.
pub async fn ask_project_directory(
    cwd: Utf8PathBuf,
    token: &CancellationToken,
) -> Result<String> {
    let prompt = tokio::task::spawn_blocking(move || {
        Input::<String>::new()
            .with_prompt("What is your project named?")
            .default(DEFAULT_PROJECT_NAME.to_string())
            .validate_with(move |input: &String| -> std::result::Result<(), String> {
                let project = ProjectPath::resolve(&cwd, input);
                match validate_project_name(&project.name).first_problem() {
                    None => Ok(()),
                    Some(problem) => Err(format!("Invalid project name: {}", problem)),
                }
            })
            .interact_text()
    });

    match cancellable(token, prompt).await? {
        Ok(Ok(answer)) => Ok(answer),
        Ok(Err(e)) => {
            debug!("Prompt ended: {}", e);
            Err(ScaffoldError::Cancelled)
        }
        Err(e) => {
            debug!("Prompt task failed: {}", e);
            Err(ScaffoldError::Cancelled)
        }
    }
}
