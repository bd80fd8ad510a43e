//! Scenario catalogue
//!
//! Five fixed scenarios, each pairing a label, an iteration count, and an
//! operation driving the parser backend in one specific way. Scenarios
//! that measure steady-state behavior build their parser here, outside the
//! timed loop, so setup cost is amortized out of the measurement.

use anyhow::Result;
use argshim::{ArgSpec, ArgumentParser, Nargs, ParserBackend, ParserOptions, ValueKind};

pub const CONSTRUCTION: &str = "parser construction";
pub const SIMPLE_PARSE: &str = "simple parse";
pub const EXCLUSIVE_GROUPS: &str = "mutually exclusive groups";
pub const NEGATIVE_NUMBERS: &str = "negative numbers";
pub const HELP_RENDER: &str = "help rendering";

/// Per-scenario iteration counts.
///
/// The defaults are tuned starting points, not correctness requirements:
/// cheap steady-state operations get more repetitions than expensive
/// construction or rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IterationPlan {
    pub construction: u64,
    pub simple_parse: u64,
    pub exclusive_groups: u64,
    pub negative_numbers: u64,
    pub help_render: u64,
}

impl Default for IterationPlan {
    fn default() -> Self {
        Self {
            construction: 5_000,
            simple_parse: 10_000,
            exclusive_groups: 5_000,
            negative_numbers: 10_000,
            help_render: 1_000,
        }
    }
}

impl IterationPlan {
    /// Scale every count by `factor`, keeping at least one iteration per
    /// scenario. Callers validate that `factor` is positive.
    pub fn scaled(&self, factor: f64) -> Self {
        let scale = |count: u64| ((count as f64 * factor).round() as u64).max(1);
        Self {
            construction: scale(self.construction),
            simple_parse: scale(self.simple_parse),
            exclusive_groups: scale(self.exclusive_groups),
            negative_numbers: scale(self.negative_numbers),
            help_render: scale(self.help_render),
        }
    }
}

/// A named, parameterized unit of repeated measurement.
pub struct Scenario {
    pub name: &'static str,
    pub iterations: u64,
    pub(crate) op: Box<dyn FnMut() -> Result<()>>,
}

impl Scenario {
    pub fn new(
        name: &'static str,
        iterations: u64,
        op: impl FnMut() -> Result<()> + 'static,
    ) -> Self {
        Self {
            name,
            iterations,
            op: Box::new(op),
        }
    }
}

/// Build the five scenarios in fixed definition order.
pub fn catalogue<B>(backend: B, plan: &IterationPlan) -> Vec<Scenario>
where
    B: ParserBackend + Clone + 'static,
    B::Parser: 'static,
{
    vec![
        construction(backend.clone(), plan.construction),
        simple_parse(backend.clone(), plan.simple_parse),
        exclusive_groups(backend.clone(), plan.exclusive_groups),
        negative_numbers(backend.clone(), plan.negative_numbers),
        help_render(backend, plan.help_render),
    ]
}

/// Builds a fresh parser on every iteration, measuring setup cost alone.
fn construction<B>(backend: B, iterations: u64) -> Scenario
where
    B: ParserBackend + 'static,
{
    Scenario::new(CONSTRUCTION, iterations, move || {
        let mut parser = backend.new_parser(ParserOptions::new().description("benchmark parser"));
        parser.add_argument(ArgSpec::option("--alpha", ValueKind::Int).help("first option"));
        parser.add_argument(ArgSpec::option("--beta", ValueKind::Str).help("second option"));
        parser.add_argument(ArgSpec::positional("input", ValueKind::Str).help("input file"));
        std::hint::black_box(&parser);
        Ok(())
    })
}

/// Steady-state parse cost against a prebuilt parser.
fn simple_parse<B>(backend: B, iterations: u64) -> Scenario
where
    B: ParserBackend + 'static,
    B::Parser: 'static,
{
    let mut parser = backend.new_parser(ParserOptions::new().description("simple parser"));
    parser.add_argument(ArgSpec::option("--alpha", ValueKind::Int).help("first option"));
    parser.add_argument(ArgSpec::option("--beta", ValueKind::Str).help("second option"));
    parser.add_argument(ArgSpec::positional("input", ValueKind::Str).help("input file"));

    Scenario::new(SIMPLE_PARSE, iterations, move || {
        parser.parse_args(&["--alpha", "42", "--beta", "fast", "input.txt"])?;
        Ok(())
    })
}

/// Conflict-group bookkeeping cost during parsing.
fn exclusive_groups<B>(backend: B, iterations: u64) -> Scenario
where
    B: ParserBackend + 'static,
    B::Parser: 'static,
{
    let mut parser =
        backend.new_parser(ParserOptions::new().description("exclusive group parser"));
    parser.add_exclusive_group(vec![ArgSpec::flag("--json"), ArgSpec::flag("--text")]);
    parser.add_exclusive_group(vec![ArgSpec::flag("--quiet"), ArgSpec::flag("--loud")]);
    for i in 0..10 {
        parser.add_argument(ArgSpec::option(format!("--opt{i}"), ValueKind::Str));
    }

    Scenario::new(EXCLUSIVE_GROUPS, iterations, move || {
        parser.parse_args(&["--json", "--opt3", "payload"])?;
        Ok(())
    })
}

/// Distinguishing negative numeric tokens from option-like tokens.
fn negative_numbers<B>(backend: B, iterations: u64) -> Scenario
where
    B: ParserBackend + 'static,
    B::Parser: 'static,
{
    let mut parser =
        backend.new_parser(ParserOptions::new().description("negative number parser"));
    parser.add_argument(
        ArgSpec::option("--delta", ValueKind::Float)
            .help("float offset")
            .metavar("X"),
    );
    parser.add_argument(
        ArgSpec::positional("values", ValueKind::Int)
            .nargs(Nargs::AtLeastOne)
            .help("integer samples"),
    );

    Scenario::new(NEGATIVE_NUMBERS, iterations, move || {
        parser.parse_args(&["--delta", "-0.75", "-3", "-11", "-42"])?;
        Ok(())
    })
}

/// String-formatting cost of rendering a wide help screen.
fn help_render<B>(backend: B, iterations: u64) -> Scenario
where
    B: ParserBackend + 'static,
    B::Parser: 'static,
{
    let mut parser = backend.new_parser(ParserOptions::new().description("help-heavy parser"));
    for i in 0..20 {
        parser.add_argument(
            ArgSpec::option(format!("--option-{i:02}"), ValueKind::Str)
                .help(format!("tunes setting number {i:02}"))
                .metavar("VALUE")
                .default_value("none"),
        );
    }

    Scenario::new(HELP_RENDER, iterations, move || {
        let text = parser.format_help();
        std::hint::black_box(text.len());
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argshim::ParseError;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct StubBackend {
        builds: Arc<AtomicU64>,
        parses: Arc<AtomicU64>,
        fail_parses: bool,
    }

    struct StubParser {
        parses: Arc<AtomicU64>,
        fail_parses: bool,
    }

    impl ParserBackend for StubBackend {
        type Parser = StubParser;

        fn new_parser(&self, _options: ParserOptions) -> StubParser {
            self.builds.fetch_add(1, Ordering::Relaxed);
            StubParser {
                parses: Arc::clone(&self.parses),
                fail_parses: self.fail_parses,
            }
        }
    }

    impl ArgumentParser for StubParser {
        fn add_argument(&mut self, _spec: ArgSpec) {}

        fn add_exclusive_group(&mut self, _members: Vec<ArgSpec>) {}

        fn parse_args(&mut self, _tokens: &[&str]) -> Result<(), ParseError> {
            self.parses.fetch_add(1, Ordering::Relaxed);
            if self.fail_parses {
                Err(ParseError::Invalid {
                    message: "injected".to_string(),
                })
            } else {
                Ok(())
            }
        }

        fn format_help(&mut self) -> String {
            String::new()
        }
    }

    fn tiny_plan() -> IterationPlan {
        IterationPlan {
            construction: 2,
            simple_parse: 2,
            exclusive_groups: 2,
            negative_numbers: 2,
            help_render: 2,
        }
    }

    #[test]
    fn catalogue_is_five_scenarios_in_definition_order() {
        let scenarios = catalogue(StubBackend::default(), &tiny_plan());

        let names: Vec<_> = scenarios.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                CONSTRUCTION,
                SIMPLE_PARSE,
                EXCLUSIVE_GROUPS,
                NEGATIVE_NUMBERS,
                HELP_RENDER
            ]
        );
    }

    #[test]
    fn plan_counts_flow_into_scenarios() {
        let scenarios = catalogue(StubBackend::default(), &IterationPlan::default());

        let counts: Vec<_> = scenarios.iter().map(|s| s.iterations).collect();
        assert_eq!(counts, vec![5_000, 10_000, 5_000, 10_000, 1_000]);
    }

    #[test]
    fn scaling_keeps_at_least_one_iteration() {
        let shrunk = IterationPlan::default().scaled(0.0001);
        assert_eq!(shrunk.construction, 1);
        assert_eq!(shrunk.help_render, 1);

        let doubled = IterationPlan::default().scaled(2.0);
        assert_eq!(doubled.simple_parse, 20_000);
        assert_eq!(doubled.help_render, 2_000);
    }

    #[test]
    fn operations_drive_the_backend() {
        let backend = StubBackend::default();
        let mut scenarios = catalogue(backend.clone(), &tiny_plan());

        for scenario in &mut scenarios {
            (scenario.op)().unwrap();
        }

        // one parser per amortized scenario plus one from the construction op
        assert_eq!(backend.builds.load(Ordering::Relaxed), 5);
        // simple parse, exclusive groups, and negative numbers each parse once
        assert_eq!(backend.parses.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn injected_parse_failure_surfaces_from_operations() {
        let backend = StubBackend {
            fail_parses: true,
            ..Default::default()
        };
        let mut scenarios = catalogue(backend, &tiny_plan());

        let err = (scenarios[1].op)().unwrap_err();
        assert!(err.to_string().contains("invalid arguments"));
    }
}
