//! Command-line configuration
//!
//! Arguments are parsed by hand into a [`Config`]. Parsing is kept free of
//! I/O so it can be tested directly; expressions listed in a file are read
//! later by [`Config::load_expressions`].

use crate::eval::Bindings;
use std::fmt;
use std::fs;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: rpntty [OPTIONS] <EXPRESSION>...
       rpntty [OPTIONS] --file <PATH>

Options:
  -p, --print          Print each conversion and exit instead of opening the TUI
  -e, --eval           Also evaluate the infix and postfix forms
  -b, --bind <LIST>    Operand values for --eval, e.g. a=1,b=-2
  -f, --file <PATH>    Read expressions from a file, one per line
  -c, --capacity <N>   Limit the operator stack to N entries
  -h, --help           Show this message

Examples:
  rpntty 'a*(b-c)='
  rpntty --print --eval --bind a=6,b=4,c=1 'a*(b-c)=' '(a+b)/2='";

/// What the binary should do with the expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Step through the first expression in the TUI
    Interactive,
    /// Print every conversion to stdout
    Print,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    MissingExpression,
    MissingValue(String),
    UnknownFlag(String),
    InvalidBinding(String),
    InvalidCapacity(String),
    Io { path: PathBuf, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingExpression => write!(f, "No expression provided"),
            ConfigError::MissingValue(flag) => write!(f, "Option '{}' expects a value", flag),
            ConfigError::UnknownFlag(flag) => write!(f, "Unknown option '{}'", flag),
            ConfigError::InvalidBinding(binding) => {
                write!(
                    f,
                    "Invalid binding '{}': expected <operand>=<integer>",
                    binding
                )
            }
            ConfigError::InvalidCapacity(value) => {
                write!(f, "Invalid stack capacity '{}'", value)
            }
            ConfigError::Io { path, message } => {
                write!(f, "Failed to read '{}': {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parsed command-line options
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub evaluate: bool,
    pub bindings: Bindings,
    pub stack_capacity: Option<usize>,
    pub expressions: Vec<String>,
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::Interactive,
            evaluate: false,
            bindings: Bindings::default(),
            stack_capacity: None,
            expressions: Vec::new(),
            file: None,
        }
    }
}

impl Config {
    /// Parse arguments, excluding the program name
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.mode = Mode::Help;
                    return Ok(config);
                }
                "-p" | "--print" => config.mode = Mode::Print,
                "-e" | "--eval" => config.evaluate = true,
                "-b" | "--bind" => {
                    let list = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    parse_bindings(&list, &mut config.bindings)?;
                }
                "-f" | "--file" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.file = Some(PathBuf::from(path));
                }
                "-c" | "--capacity" => {
                    let value = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    let capacity = value
                        .parse::<usize>()
                        .ok()
                        .filter(|n| *n > 0)
                        .ok_or(ConfigError::InvalidCapacity(value))?;
                    config.stack_capacity = Some(capacity);
                }
                // A lone '-' could be an expression, anything longer is a flag
                flag if flag.starts_with("--") || (flag.starts_with('-') && flag.len() == 2) => {
                    return Err(ConfigError::UnknownFlag(flag.to_string()));
                }
                _ => config.expressions.push(arg),
            }
        }

        if config.expressions.is_empty() && config.file.is_none() {
            return Err(ConfigError::MissingExpression);
        }

        Ok(config)
    }

    /// Command-line expressions followed by those read from `--file`
    pub fn load_expressions(&self) -> Result<Vec<String>, ConfigError> {
        let mut expressions = self.expressions.clone();

        if let Some(path) = &self.file {
            let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                message: e.to_string(),
            })?;
            expressions.extend(parse_expression_lines(&contents));
        }

        if expressions.is_empty() {
            return Err(ConfigError::MissingExpression);
        }
        Ok(expressions)
    }
}

/// Non-blank lines that are not `#` comments
pub fn parse_expression_lines(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
}

/// Parse `a=1,b=-2` into `bindings`
fn parse_bindings(list: &str, bindings: &mut Bindings) -> Result<(), ConfigError> {
    for binding in list.split(',').map(str::trim).filter(|b| !b.is_empty()) {
        let invalid = || ConfigError::InvalidBinding(binding.to_string());

        let (name, value) = binding.split_once('=').ok_or_else(invalid)?;
        let mut chars = name.trim().chars();
        let operand = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphanumeric() => c,
            _ => return Err(invalid()),
        };
        let value = value.trim().parse::<i64>().map_err(|_| invalid())?;

        bindings.insert(operand, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_expression_is_interactive() {
        let config = Config::from_args(args(&["a+b="])).unwrap();
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.expressions, vec!["a+b=".to_string()]);
        assert!(!config.evaluate);
        assert_eq!(config.stack_capacity, None);
    }

    #[test]
    fn test_print_eval_and_bindings() {
        let config =
            Config::from_args(args(&["-p", "--eval", "-b", "a=6, b=-4", "a-b=", "1+2="]))
                .unwrap();
        assert_eq!(config.mode, Mode::Print);
        assert!(config.evaluate);
        assert_eq!(config.bindings.get(&'a'), Some(&6));
        assert_eq!(config.bindings.get(&'b'), Some(&-4));
        assert_eq!(config.expressions.len(), 2);
    }

    #[test]
    fn test_capacity() {
        let config = Config::from_args(args(&["--capacity", "3", "a="])).unwrap();
        assert_eq!(config.stack_capacity, Some(3));

        let err = Config::from_args(args(&["-c", "0", "a="])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidCapacity("0".to_string()));
    }

    #[test]
    fn test_help_short_circuits() {
        let config = Config::from_args(args(&["--help", "--bogus"])).unwrap();
        assert_eq!(config.mode, Mode::Help);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Config::from_args(args(&[])).unwrap_err(),
            ConfigError::MissingExpression
        );
        assert_eq!(
            Config::from_args(args(&["-b"])).unwrap_err(),
            ConfigError::MissingValue("-b".to_string())
        );
        assert_eq!(
            Config::from_args(args(&["--verbose", "a="])).unwrap_err(),
            ConfigError::UnknownFlag("--verbose".to_string())
        );
        assert_eq!(
            Config::from_args(args(&["-b", "ab=1", "a="])).unwrap_err(),
            ConfigError::InvalidBinding("ab=1".to_string())
        );
        assert_eq!(
            Config::from_args(args(&["-b", "a=x", "a="])).unwrap_err(),
            ConfigError::InvalidBinding("a=x".to_string())
        );
    }

    #[test]
    fn test_file_only_is_accepted() {
        let config = Config::from_args(args(&["-f", "exprs.txt"])).unwrap();
        assert_eq!(config.file, Some(PathBuf::from("exprs.txt")));
        assert!(config.expressions.is_empty());
    }

    #[test]
    fn test_expression_lines() {
        let lines: Vec<String> =
            parse_expression_lines("# header\na+b=\n\n  (a)=  \n#c=\n").collect();
        assert_eq!(lines, vec!["a+b=".to_string(), "(a)=".to_string()]);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let config = Config::from_args(args(&["-f", "/nonexistent/rpntty/exprs.txt"])).unwrap();
        assert!(matches!(
            config.load_expressions(),
            Err(ConfigError::Io { .. })
        ));
    }
}
