/* # Why is the CLI minimal and hardcoded?

The CLI is intentionally kept minimal with no argument-parsing dependency.
Every positional argument is a name to greet; there is nothing to configure.

The workflow is straightforward:
1. Run `greetly` to greet the default name
2. Run `greetly NAME...` to greet each name, one per line
3. Run `greetly --version` to print the version string

Exit codes:
- 0: Success (greetings printed, or version printed)
- 1: Error (unrecognized flag argument)
*/

use std::env;
use std::process;

use greetly::tracing::init_tracing;
use greetly::{GreetlyError, GreetlyResult, VERSION, greet};
use tracing::debug;

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Greet each name, or the default name when empty.
    Greet(Vec<String>),
    /// Print the version string.
    Version,
}

/// Interprets the arguments after the program name.
///
/// `--version`/`-V` wins over any names; any other argument starting with
/// `-` is an error.
fn parse_args(args: impl Iterator<Item = String>) -> GreetlyResult<Command> {
    let mut names = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--version" | "-V" => return Ok(Command::Version),
            flag if flag.starts_with('-') => {
                return Err(Box::new(GreetlyError::argument(flag)));
            }
            _ => names.push(arg),
        }
    }
    Ok(Command::Greet(names))
}

/// Produces one greeting per name, or the default greeting for no names.
fn greetings(names: &[String]) -> Vec<String> {
    if names.is_empty() {
        vec![greet(None)]
    } else {
        names.iter().map(|name| greet(Some(name))).collect()
    }
}

fn main() {
    init_tracing().unwrap();

    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Usage: greetly [NAME]...");
            process::exit(1);
        }
    };

    match command {
        Command::Version => {
            println!("{}", VERSION);
        }
        Command::Greet(names) => {
            let lines = greetings(&names);
            for line in &lines {
                println!("{}", line);
            }
            debug!(count = lines.len(), "emitted greetings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greetly::error::ErrorKind;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_parse_args_empty() {
        let command = parse_args(args(&[])).unwrap();
        assert_eq!(command, Command::Greet(vec![]));
    }

    #[test]
    fn test_parse_args_names_in_order() {
        let command = parse_args(args(&["Ada", "Grace"])).unwrap();
        assert_eq!(
            command,
            Command::Greet(vec!["Ada".to_string(), "Grace".to_string()])
        );
    }

    #[test]
    fn test_parse_args_version_flag() {
        assert_eq!(parse_args(args(&["--version"])).unwrap(), Command::Version);
        assert_eq!(parse_args(args(&["-V"])).unwrap(), Command::Version);
        // The version flag wins regardless of position
        assert_eq!(
            parse_args(args(&["Ada", "--version"])).unwrap(),
            Command::Version
        );
    }

    #[test]
    fn test_parse_args_rejects_unknown_flag() {
        let error = parse_args(args(&["-x"])).unwrap_err();
        match error.kind() {
            ErrorKind::Argument { argument } => assert_eq!(argument, "-x"),
            _ => panic!("Expected Argument variant"),
        }
    }

    #[test]
    fn test_greetings_default() {
        assert_eq!(greetings(&[]), vec!["Hello, World!".to_string()]);
    }

    #[test]
    fn test_greetings_one_per_name() {
        let names = vec!["Ada".to_string(), "".to_string()];
        assert_eq!(
            greetings(&names),
            vec!["Hello, Ada!".to_string(), "Hello, !".to_string()]
        );
    }
}
