// src/cli.rs
// Command line front end - argument handling and rendering, kept out of main.rs

use std::num::ParseIntError;
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::algorithms::{evaluate, Operation, OperationError, Outcome};
use crate::config::{IntmathConfig, OutputFormat};

pub const USAGE: &str = "usage: intmath <operation> <integer>...   (intmath list shows all operations)";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no operation given\n{}", USAGE)]
    MissingOperation,

    #[error("`{value}` is not a 64-bit integer: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error("could not render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

/// JSON shape of one evaluated operation.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub operation: &'static str,
    pub arguments: &'a [i64],
    pub result: &'a Outcome,
}

/// Runs the command described by `args` (program name already stripped) and
/// returns the text to print.
pub fn run(args: &[String], config: &IntmathConfig) -> Result<String, CliError> {
    let (name, rest) = args.split_first().ok_or(CliError::MissingOperation)?;

    if name == "list" {
        return Ok(operation_table());
    }

    let operation: Operation = name.parse()?;
    let numbers = rest
        .iter()
        .map(|value| {
            value.trim().parse::<i64>().map_err(|source| CliError::InvalidInteger {
                value: value.clone(),
                source,
            })
        })
        .collect::<Result<Vec<i64>, CliError>>()?;

    debug!("Parsed {} with arguments {:?}", operation, numbers);
    let outcome = evaluate(operation, &numbers, config)?;

    render(operation, &numbers, &outcome, config.output.format)
}

fn render(operation: Operation, numbers: &[i64], outcome: &Outcome, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Plain => Ok(outcome.to_string()),
        OutputFormat::Json => {
            let report = Report {
                operation: operation.name(),
                arguments: numbers,
                result: outcome,
            };
            Ok(serde_json::to_string(&report)?)
        }
    }
}

/// One line per operation: name, arity, complexity, description.
pub fn operation_table() -> String {
    Operation::ALL
        .iter()
        .map(|op| format!("{:<16}{:<4}{:<20}{}", op.name(), op.arity(), op.complexity(), op.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn json_config() -> IntmathConfig {
        let mut config = IntmathConfig::default();
        config.output.format = OutputFormat::Json;
        config
    }

    #[test]
    fn test_plain_output() {
        let config = IntmathConfig::default();
        assert_eq!(run(&args(&["gcd", "270", "192"]), &config).unwrap(), "6");
        assert_eq!(run(&args(&["divisors", "12"]), &config).unwrap(), "1 2 3 4 6 12");
        assert_eq!(run(&args(&["is-palindrome", "-121"]), &config).unwrap(), "false");
        assert_eq!(run(&args(&["primes", "1"]), &config).unwrap(), "");
    }

    #[test]
    fn test_json_output() {
        let out = run(&args(&["prime-factors", "360"]), &json_config()).unwrap();
        assert_eq!(out, r#"{"operation":"prime-factors","arguments":[360],"result":[2,2,2,3,3,5]}"#);

        let out = run(&args(&["is-prime", "91"]), &json_config()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["result"], serde_json::Value::Bool(false));
    }

    #[test]
    fn test_list() {
        let table = run(&args(&["list"]), &IntmathConfig::default()).unwrap();
        assert_eq!(table.lines().count(), Operation::ALL.len());
        assert!(table.lines().any(|line| line.starts_with("trailing-zeros")));
    }

    #[test]
    fn test_errors() {
        let config = IntmathConfig::default();
        assert!(matches!(run(&[], &config), Err(CliError::MissingOperation)));
        assert!(matches!(
            run(&args(&["gcd", "12", "x"]), &config),
            Err(CliError::InvalidInteger { ref value, .. }) if value == "x"
        ));
        assert!(matches!(
            run(&args(&["factorial", "-3"]), &config),
            Err(CliError::Operation(OperationError::Domain(_)))
        ));
        assert!(matches!(
            run(&args(&["sqrt", "4"]), &config),
            Err(CliError::Operation(OperationError::Unknown(_)))
        ));
    }

    #[test]
    fn test_integer_out_of_range() {
        let err = run(&args(&["is-prime", "9223372036854775808"]), &IntmathConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("`9223372036854775808` is not a 64-bit integer"));
    }
}
