//! clap-backed implementation of the parser facade.
//!
//! Maps [`ArgSpec`] declarations onto clap's runtime builder API. Numeric
//! kinds enable negative-number tokenization so bare tokens like `-3` are
//! read as values rather than flags.

use clap::error::ErrorKind;
use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

use crate::{ArgSpec, ArgumentParser, Nargs, ParseError, ParserBackend, ParserOptions, ValueKind};

/// Production backend building [`ClapParser`] instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClapBackend;

impl ParserBackend for ClapBackend {
    type Parser = ClapParser;

    fn new_parser(&self, options: ParserOptions) -> ClapParser {
        ClapParser::new(options)
    }
}

/// Argument parser assembled at runtime on [`clap::Command`].
pub struct ClapParser {
    command: Command,
    groups: usize,
}

impl ClapParser {
    fn new(options: ParserOptions) -> Self {
        let mut command = Command::new(options.prog.unwrap_or_else(|| "prog".to_string()))
            .no_binary_name(true);
        if let Some(description) = options.description {
            command = command.about(description);
        }
        if !options.add_help {
            command = command.disable_help_flag(true);
        }
        Self { command, groups: 0 }
    }

    // Command's builder methods consume self; swap in a placeholder while
    // the argument is attached.
    fn push_arg(&mut self, arg: Arg) {
        let command = std::mem::replace(&mut self.command, Command::new(""));
        self.command = command.arg(arg);
    }

    fn push_group(&mut self, group: ArgGroup) {
        let command = std::mem::replace(&mut self.command, Command::new(""));
        self.command = command.group(group);
    }
}

impl ArgumentParser for ClapParser {
    fn add_argument(&mut self, spec: ArgSpec) {
        self.push_arg(build_arg(spec));
    }

    fn add_exclusive_group(&mut self, members: Vec<ArgSpec>) {
        let ids: Vec<String> = members.iter().map(|m| arg_id(&m.name)).collect();
        for member in members {
            self.push_arg(build_arg(member));
        }
        self.groups += 1;
        let group = ArgGroup::new(format!("exclusive{}", self.groups))
            .args(ids)
            .multiple(false);
        self.push_group(group);
    }

    fn parse_args(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        match self.command.try_get_matches_from_mut(tokens.iter().copied()) {
            Ok(_) => Ok(()),
            Err(err) => Err(map_error(err)),
        }
    }

    fn format_help(&mut self) -> String {
        self.command.render_help().to_string()
    }
}

fn arg_id(name: &str) -> String {
    name.trim_start_matches('-').to_string()
}

fn build_arg(spec: ArgSpec) -> Arg {
    let ArgSpec {
        name,
        kind,
        help,
        metavar,
        default,
        nargs,
        positional,
    } = spec;

    let id = arg_id(&name);
    let mut arg = Arg::new(id.clone());
    if !positional {
        arg = arg.long(id);
    }
    arg = match kind {
        ValueKind::Flag => arg.action(ArgAction::SetTrue),
        ValueKind::Str => arg,
        ValueKind::Int => arg
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true),
        ValueKind::Float => arg
            .value_parser(value_parser!(f64))
            .allow_negative_numbers(true),
    };
    if let Some(text) = help {
        arg = arg.help(text);
    }
    if let Some(name) = metavar {
        arg = arg.value_name(name);
    }
    if let Some(value) = default {
        arg = arg.default_value(value);
    }
    if let Some(nargs) = nargs {
        arg = match nargs {
            Nargs::Fixed(n) => arg.num_args(n),
            Nargs::AtLeastOne => arg.num_args(1..),
            Nargs::Any => arg.num_args(0..),
        };
    }
    arg
}

fn map_error(err: clap::Error) -> ParseError {
    match err.kind() {
        ErrorKind::ArgumentConflict => ParseError::Conflict {
            message: err.to_string(),
        },
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ParseError::HelpRequested,
        _ => ParseError::Invalid {
            message: err.to_string(),
        },
    }
}
