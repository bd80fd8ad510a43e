//! Runtime-built command-line parser facade.
//!
//! The benchmark harness drives an argument parser through the small
//! capability surface defined here: declare options and positionals,
//! register mutually exclusive groups, parse a token list, render help
//! text. [`ClapBackend`] implements the surface on clap's runtime builder
//! API; tests substitute lightweight stubs for failure injection.
//!
//! ## Usage
//!
//! ```rust
//! use argshim::{ArgSpec, ArgumentParser, ClapBackend, ParserBackend, ParserOptions, ValueKind};
//!
//! let mut parser = ClapBackend.new_parser(ParserOptions::new().description("demo"));
//! parser.add_argument(ArgSpec::option("--count", ValueKind::Int).help("how many"));
//! parser.add_argument(ArgSpec::positional("input", ValueKind::Str));
//! parser.parse_args(&["--count", "3", "data.txt"]).unwrap();
//! ```

pub mod backend;

pub use backend::{ClapBackend, ClapParser};

use thiserror::Error;

/// How values supplied for an argument are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Presence switch taking no value.
    Flag,
    /// Free-form string value.
    Str,
    /// Signed integer value; negative tokens are recognized as values.
    Int,
    /// Floating-point value; negative tokens are recognized as values.
    Float,
}

/// Arity of an argument's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nargs {
    /// Exactly `n` values.
    Fixed(usize),
    /// One or more values.
    AtLeastOne,
    /// Zero or more values.
    Any,
}

/// Declaration of a single option or positional argument.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    /// Flag spelling (`--alpha`) or bare positional name.
    pub name: String,
    pub kind: ValueKind,
    pub help: Option<String>,
    pub metavar: Option<String>,
    pub default: Option<String>,
    pub nargs: Option<Nargs>,
    pub positional: bool,
}

impl ArgSpec {
    /// Declare an option that takes a value, e.g. `--alpha`.
    pub fn option(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
            help: None,
            metavar: None,
            default: None,
            nargs: None,
            positional: false,
        }
    }

    /// Declare a presence switch taking no value.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::option(name, ValueKind::Flag)
    }

    /// Declare a positional argument.
    pub fn positional(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            positional: true,
            ..Self::option(name, kind)
        }
    }

    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    pub fn metavar(mut self, name: impl Into<String>) -> Self {
        self.metavar = Some(name.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn nargs(mut self, nargs: Nargs) -> Self {
        self.nargs = Some(nargs);
        self
    }
}

/// Construction-time settings for a parser instance.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Description shown at the top of the help text.
    pub description: Option<String>,
    /// Program name used in usage lines.
    pub prog: Option<String>,
    /// Whether the parser registers an automatic `--help` flag.
    pub add_help: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            description: None,
            prog: None,
            add_help: true,
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn prog(mut self, name: impl Into<String>) -> Self {
        self.prog = Some(name.into());
        self
    }

    pub fn add_help(mut self, enabled: bool) -> Self {
        self.add_help = enabled;
        self
    }
}

/// Failure surfaced by [`ArgumentParser::parse_args`].
#[derive(Debug, Error)]
pub enum ParseError {
    /// Two or more members of a mutually exclusive group were supplied.
    #[error("conflicting arguments: {message}")]
    Conflict { message: String },
    /// Help or version output was requested instead of a normal parse.
    #[error("help requested")]
    HelpRequested,
    /// Any other rejection of the token list.
    #[error("invalid arguments: {message}")]
    Invalid { message: String },
}

/// Capability surface a parser exposes to the benchmark harness.
pub trait ArgumentParser {
    /// Register an option or positional argument.
    fn add_argument(&mut self, spec: ArgSpec);

    /// Register a set of arguments validated as mutually exclusive at
    /// parse time.
    fn add_exclusive_group(&mut self, members: Vec<ArgSpec>);

    /// Parse a bare token list (no leading binary name). Parsed values
    /// are discarded by callers that only care about completion.
    fn parse_args(&mut self, tokens: &[&str]) -> Result<(), ParseError>;

    /// Render the parser's help text.
    fn format_help(&mut self) -> String;
}

/// Factory producing parser instances.
pub trait ParserBackend {
    type Parser: ArgumentParser;

    fn new_parser(&self, options: ParserOptions) -> Self::Parser;
}
