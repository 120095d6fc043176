use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Split a configured command line on whitespace into program + arguments.
///
/// No shell quoting is honoured: `"echo 'a b'"` yields three words.
pub fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_owned).collect()
}

/// Start `argv[0]` with the remaining arguments and return immediately.
///
/// The child is not waited on and its output is not captured.  Returns the
/// child's pid, or `None` when `argv` is empty or the spawn failed (logged).
pub fn launch(argv: &[String]) -> Option<u32> {
    let (program, args) = argv.split_first()?;

    match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .spawn()
    {
        Ok(child) => {
            debug!("Launched '{}' (pid {})", argv.join(" "), child.id());
            Some(child.id())
        }
        Err(e) => {
            warn!("Failed to run command '{}': {e}", argv.join(" "));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(
            split_command("  firefox \t --new-window   https://example.org "),
            vec!["firefox", "--new-window", "https://example.org"]
        );
    }

    #[test]
    fn blank_command_is_empty() {
        assert!(split_command("").is_empty());
        assert!(split_command("   ").is_empty());
    }

    #[test]
    fn launch_spawns_existing_program() {
        assert!(launch(&split_command("true --ignored-arg")).is_some());
    }

    #[test]
    fn launch_skips_empty_and_missing_programs() {
        assert_eq!(launch(&[]), None);
        assert_eq!(launch(&["/definitely/not/a/real/program".to_string()]), None);
    }
}
