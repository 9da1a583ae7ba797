//! Command line of the inspector binary.

use mu_protocol::{ClientVersion, Direction};

use crate::error::{InspectorError, Result};

pub const USAGE: &str = "\
usage: packet-inspector <command> [options]

commands:
  docs [--direction server|client] [--latest]
  decode <hex> [--version 0.75|0.95|0.97|season6] [--direction server|client]
  check";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Docs {
        direction: Option<Direction>,
        latest_only: bool,
    },
    Decode {
        hex: String,
        version: Option<ClientVersion>,
        direction: Option<Direction>,
    },
    Check,
}

/// Parses the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let command = args
        .next()
        .ok_or_else(|| InspectorError::Usage("missing command".to_string()))?;

    match command.as_str() {
        "docs" => {
            let mut direction = None;
            let mut latest_only = false;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--direction" => direction = Some(parse_direction(&mut args, &arg)?),
                    "--latest" => latest_only = true,
                    other => return Err(unexpected(other)),
                }
            }
            Ok(Command::Docs {
                direction,
                latest_only,
            })
        }
        "decode" => {
            let mut hex = Vec::new();
            let mut version = None;
            let mut direction = None;
            while let Some(arg) = args.next() {
                match arg.as_str() {
                    "--version" => {
                        let value = next_arg_value(&mut args, &arg)?;
                        version = Some(value.parse::<ClientVersion>().map_err(|e| {
                            InspectorError::Usage(e.to_string())
                        })?);
                    }
                    "--direction" => direction = Some(parse_direction(&mut args, &arg)?),
                    other if other.starts_with("--") => return Err(unexpected(other)),
                    other => hex.push(other.to_string()),
                }
            }
            if hex.is_empty() {
                return Err(InspectorError::Usage("decode needs the packet bytes as hex".to_string()));
            }
            Ok(Command::Decode {
                hex: hex.join(" "),
                version,
                direction,
            })
        }
        "check" => match args.next() {
            Some(arg) => Err(unexpected(&arg)),
            None => Ok(Command::Check),
        },
        other => Err(InspectorError::Usage(format!("unknown command {}", other))),
    }
}

fn next_arg_value<I>(args: &mut std::iter::Peekable<I>, flag: &str) -> Result<String>
where
    I: Iterator<Item = String>,
{
    args.next()
        .ok_or_else(|| InspectorError::Usage(format!("missing value for {}", flag)))
}

fn parse_direction<I>(args: &mut std::iter::Peekable<I>, flag: &str) -> Result<Direction>
where
    I: Iterator<Item = String>,
{
    next_arg_value(args, flag)?
        .parse::<Direction>()
        .map_err(|e| InspectorError::Usage(e.to_string()))
}

fn unexpected(arg: &str) -> InspectorError {
    InspectorError::Usage(format!("unexpected argument {}", arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_decode_joins_hex_words() {
        let command = parse_args(args(&["decode", "C1", "05", "F1", "01", "01", "--version", "0.97"]))
            .unwrap();
        assert_eq!(
            command,
            Command::Decode {
                hex: "C1 05 F1 01 01".to_string(),
                version: Some(ClientVersion::V097),
                direction: None,
            }
        );
    }

    #[test]
    fn test_parse_docs_options() {
        let command = parse_args(args(&["docs", "--direction", "client", "--latest"])).unwrap();
        assert_eq!(
            command,
            Command::Docs {
                direction: Some(Direction::ClientToServer),
                latest_only: true,
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["explode"])).is_err());
        assert!(parse_args(args(&["decode"])).is_err());
        assert!(parse_args(args(&["decode", "C1", "--version"])).is_err());
        assert!(parse_args(args(&["decode", "C1", "--version", "1.02"])).is_err());
        assert!(parse_args(args(&["check", "--now"])).is_err());
        assert_eq!(parse_args(args(&["check"])).unwrap(), Command::Check);
    }
}
