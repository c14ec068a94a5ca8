//! Shell completions generation command.
//!
//! ```bash
//! metacsv completions bash > ~/.local/share/bash-completion/completions/metacsv
//! metacsv completions zsh -o ~/.zsh/completions/_metacsv
//! ```

use std::fs::File;
use std::io;

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use tracing::info;

use crate::cli::{Cli, CompletionsArgs, ShellType};
use crate::error::Result;

const BIN_NAME: &str = "metacsv";

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the output file cannot be written.
pub fn execute(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = convert_shell_type(args.shell);

    if let Some(path) = &args.output {
        let mut file = File::create(path)?;
        generate(shell, &mut cmd, BIN_NAME, &mut file);
        info!(path = %path.display(), shell = %shell, "wrote completion script");
    } else {
        generate(shell, &mut cmd, BIN_NAME, &mut io::stdout());
    }
    Ok(())
}

const fn convert_shell_type(shell: ShellType) -> Shell {
    match shell {
        ShellType::Bash => Shell::Bash,
        ShellType::Zsh => Shell::Zsh,
        ShellType::Fish => Shell::Fish,
        ShellType::PowerShell => Shell::PowerShell,
        ShellType::Elvish => Shell::Elvish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_completion_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metacsv.bash");
        execute(&CompletionsArgs {
            shell: ShellType::Bash,
            output: Some(path.clone()),
        })
        .unwrap();
        let script = std::fs::read_to_string(path).unwrap();
        assert!(script.contains("metacsv"));
    }
}
