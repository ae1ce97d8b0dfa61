//! Command language of the demo host
//!
//! Parsing is a pure function over one input line, so it tests without a
//! terminal. Bare commands take no arguments; `set` takes a parameter name
//! and then the rest of the line as the value, so text values may contain
//! spaces.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    BadArity {
        command: &'static str,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// List every registered shard descriptor
    Shards,
    /// Describe one shard by name
    Meta(String),
    /// Open a session on the named shard, closing any current one
    Use(String),
    /// Set a parameter on the current session
    Set { param: String, value: String },
    /// Read a parameter back from the current session
    Get(String),
    /// Run the warmup hook now
    Warmup,
    /// Activate the current session with one input value
    Feed(String),
    /// Close the current session
    Close,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "shards" => bare("shards", rest, Command::Shards),
        "meta" => one("meta", rest).map(Command::Meta),
        "use" => one("use", rest).map(Command::Use),
        "set" => {
            let (param, value) = rest
                .split_once(char::is_whitespace)
                .ok_or(CommandError::BadArity {
                    command: "set",
                    expected: "a parameter name and a value",
                })?;
            Ok(Command::Set {
                param: param.to_string(),
                value: value.trim().to_string(),
            })
        }
        "get" => one("get", rest).map(Command::Get),
        "warmup" => bare("warmup", rest, Command::Warmup),
        "feed" => one("feed", rest).map(Command::Feed),
        "close" => bare("close", rest, Command::Close),
        "help" => bare("help", rest, Command::Help),
        "quit" | "exit" => bare("quit", rest, Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

fn bare(command: &'static str, rest: &str, parsed: Command) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::BadArity {
            command,
            expected: "no arguments",
        })
    }
}

fn one(command: &'static str, rest: &str) -> Result<String, CommandError> {
    if rest.is_empty() || rest.contains(char::is_whitespace) {
        Err(CommandError::BadArity {
            command,
            expected: "exactly one argument",
        })
    } else {
        Ok(rest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_commands() {
        assert_eq!(parse("shards").unwrap(), Command::Shards);
        assert_eq!(parse("warmup").unwrap(), Command::Warmup);
        assert_eq!(parse("close").unwrap(), Command::Close);
        assert_eq!(parse("help").unwrap(), Command::Help);
        assert_eq!(parse("quit").unwrap(), Command::Quit);
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_one_argument_commands() {
        assert_eq!(
            parse("use Calculator.Add").unwrap(),
            Command::Use("Calculator.Add".into())
        );
        assert_eq!(
            parse("meta Calculator.Memory").unwrap(),
            Command::Meta("Calculator.Memory".into())
        );
        assert_eq!(parse("get Operation").unwrap(), Command::Get("Operation".into()));
        assert_eq!(parse("feed 2.5").unwrap(), Command::Feed("2.5".into()));
    }

    #[test]
    fn test_set_takes_rest_of_line_as_value() {
        assert_eq!(
            parse("set Operation store").unwrap(),
            Command::Set {
                param: "Operation".into(),
                value: "store".into(),
            }
        );
        assert_eq!(
            parse("set Description running total of all inputs").unwrap(),
            Command::Set {
                param: "Description".into(),
                value: "running total of all inputs".into(),
            }
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse("  feed   1.5  ").unwrap(), Command::Feed("1.5".into()));
        assert_eq!(parse("\tshards\t").unwrap(), Command::Shards);
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(parse("launch"), Err(CommandError::Unknown(_))));
        assert!(matches!(parse(""), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn test_arity_errors() {
        assert!(parse("use").is_err());
        assert!(parse("use a b").is_err());
        assert!(parse("meta").is_err());
        assert!(parse("set Operation").is_err());
        assert!(parse("feed").is_err());
        assert!(parse("feed 1 2").is_err());
        assert!(parse("shards now").is_err());
    }

    #[test]
    fn test_arity_error_names_the_command() {
        let err = parse("use one two").unwrap_err();
        assert_eq!(err.to_string(), "'use' expects exactly one argument");
    }
}
