use std::ffi::OsString;

pub use clap::Parser;

use crate::config;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Descriptor input
    /// Optional. Path of the JSON request descriptor. '-' reads stdin.
    /// Defaults to $RAWLINE_INPUT, then '-'.
    #[clap(short = 'i', long, help = "request descriptor file ('-' for stdin)")]
    input: Option<String>,

    /// Output file
    /// Optional. Where to write the raw request. Defaults to stdout.
    #[clap(short = 'o', long, help = "output file ('-' for stdout)")]
    output: Option<String>,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    input: String,
    output: String,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            input: args.input.unwrap_or_else(config::get_default_input_path),
            output: args
                .output
                .unwrap_or_else(|| config::STDIO_PATH.to_string()),
            verbose: args.verbose,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
