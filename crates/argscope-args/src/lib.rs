//! Application argument parsing and lookup.
//!
//! This crate is intentionally small so it can be reused by:
//! - the `argscope` CLI (to inspect how a token stream parses)
//! - applications that want startup-argument access without a full CLI framework
//!
//! Tokens of the form `--name=value` and `--name` are options; everything
//! else is a non-option (positional) argument.

pub mod args {
    use indexmap::IndexMap;

    /// Accumulated result of one pass over a raw token stream.
    ///
    /// Option names keep first-seen order; values keep input order.
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct CommandLineArgs {
        option_args: IndexMap<String, Vec<String>>,
        non_option_args: Vec<String>,
    }

    impl CommandLineArgs {
        /// Unique option names, in order of first appearance.
        pub fn option_names(&self) -> impl Iterator<Item = &str> {
            self.option_args.keys().map(String::as_str)
        }

        /// Whether `name` was seen as an option at least once.
        pub fn contains_option(&self, name: &str) -> bool {
            self.option_args.contains_key(name)
        }

        /// All values recorded for option `name`, in input order.
        ///
        /// `Some(&[])` means the option was only ever seen as a bare flag;
        /// `None` means the name was never seen as an option.
        pub fn option_values(&self, name: &str) -> Option<&[String]> {
            self.option_args.get(name).map(Vec::as_slice)
        }

        /// Tokens that did not match the option form, in input order.
        pub fn non_option_args(&self) -> &[String] {
            &self.non_option_args
        }

        fn add_option_arg(&mut self, name: &str, value: Option<&str>) {
            let values = self.option_args.entry(name.to_string()).or_default();
            if let Some(value) = value {
                values.push(value.to_string());
            }
        }

        fn add_non_option_arg(&mut self, value: &str) {
            self.non_option_args.push(value.to_string());
        }
    }

    /// Parse raw tokens into option and non-option arguments.
    ///
    /// A token starting with `--` is an option token: its body is split at
    /// the *first* `=` into name and value, and a body without `=` records
    /// the name with no value. Every other token is kept verbatim as a
    /// non-option argument. No validation beyond the `--` prefix is
    /// performed, so `--`, `--=value` and `--a=b=c` all parse by the same
    /// literal split.
    pub fn parse<I, S>(tokens: I) -> CommandLineArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = CommandLineArgs::default();
        for token in tokens {
            let token = token.as_ref();
            match token.strip_prefix("--") {
                Some(body) => match body.split_once('=') {
                    Some((name, value)) => parsed.add_option_arg(name, Some(value)),
                    None => parsed.add_option_arg(body, None),
                },
                None => parsed.add_non_option_arg(token),
            }
        }
        parsed
    }
}

pub mod application {
    use crate::args::{self, CommandLineArgs};
    use thiserror::Error;

    /// Failure constructing [`DefaultApplicationArguments`].
    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum ArgsError {
        /// The argv source was absent entirely (as opposed to empty).
        #[error("Args must not be null")]
        MissingArgs,
    }

    /// Read-only view of the arguments an application was started with.
    ///
    /// Callers should depend on this trait rather than the concrete parser
    /// so the argument source can be swapped in tests.
    pub trait ApplicationArguments {
        /// The raw tokens exactly as supplied.
        fn source_args(&self) -> &[String];

        /// Unique option names, in order of first appearance.
        fn option_names(&self) -> Vec<&str>;

        /// Whether `name` was supplied as an option.
        fn contains_option(&self, name: &str) -> bool;

        /// Values collected for option `name`, in input order.
        ///
        /// `Some(&[])` means the option was present as a bare flag; `None`
        /// means it was never supplied.
        fn option_values(&self, name: &str) -> Option<&[String]>;

        /// Positional arguments, in input order.
        fn non_option_args(&self) -> &[String];
    }

    /// Arguments parsed once at construction and immutable afterwards.
    ///
    /// Holds no interior mutability, so shared references can be read
    /// concurrently without locking.
    #[derive(Debug, Clone)]
    pub struct DefaultApplicationArguments {
        source_args: Vec<String>,
        parsed: CommandLineArgs,
    }

    impl DefaultApplicationArguments {
        /// Parse `source` into application arguments.
        ///
        /// `None` models an absent argv array and is rejected. An empty
        /// vector is valid and yields a result with no options and no
        /// non-option arguments.
        pub fn new(source: Option<Vec<String>>) -> Result<Self, ArgsError> {
            let source_args = source.ok_or(ArgsError::MissingArgs)?;
            let parsed = args::parse(&source_args);
            Ok(Self {
                source_args,
                parsed,
            })
        }

        /// Capture the current process argv, skipping the program name.
        pub fn from_env() -> Self {
            let source_args: Vec<String> = std::env::args().skip(1).collect();
            let parsed = args::parse(&source_args);
            Self {
                source_args,
                parsed,
            }
        }
    }

    impl ApplicationArguments for DefaultApplicationArguments {
        fn source_args(&self) -> &[String] {
            &self.source_args
        }

        fn option_names(&self) -> Vec<&str> {
            self.parsed.option_names().collect()
        }

        fn contains_option(&self, name: &str) -> bool {
            self.parsed.contains_option(name)
        }

        fn option_values(&self, name: &str) -> Option<&[String]> {
            self.parsed.option_values(name)
        }

        fn non_option_args(&self) -> &[String] {
            self.parsed.non_option_args()
        }
    }
}
