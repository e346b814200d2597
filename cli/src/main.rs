use std::io::{self, Write};

use subcmd_cli::{Cli, CliError, Command, Result};
use subcmd_core::{ArgumentSpec, CommandSchema, Invocation, OptionSpec, OptionValue, OrderError};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SUBCMD_LOG=debug`.
const LOG_ENV: &str = "SUBCMD_LOG";

/// Greets someone, optionally loudly and repeatedly.
#[derive(Debug, Default)]
struct Greet;

impl Command for Greet {
    fn description(&self) -> String {
        "Print a greeting".to_string()
    }

    fn configure(&self, schema: &mut CommandSchema) -> std::result::Result<(), OrderError> {
        schema.declare_option(OptionSpec::flag("loud", 'l', "Shout the greeting"))?;
        schema.declare_option(OptionSpec::required_value(
            "greeting",
            'g',
            "Hello",
            "Greeting word",
        ))?;
        schema.declare_option(OptionSpec::optional_value(
            "times",
            't',
            "1",
            "How many times to greet",
        ))?;
        schema.declare_argument(ArgumentSpec::required("name", "Who to greet"))?;
        schema.declare_argument(ArgumentSpec::optional("punctuation", "Closing mark"))
    }

    fn execute(&self, input: &mut Invocation, out: &mut dyn Write) -> Result<i32> {
        let values = input.parsed()?;
        let greeting = values
            .option("greeting")
            .map(OptionValue::to_string)
            .unwrap_or_default();
        let times = values
            .option("times")
            .map(OptionValue::to_string)
            .unwrap_or_default();
        let times: usize = times
            .parse()
            .map_err(|_| CliError::Failed(format!("invalid --times value '{times}'")))?;
        let name = values.argument("name").unwrap_or_default();
        let punctuation = values.argument("punctuation").unwrap_or("!");

        let mut line = format!("{greeting}, {name}{punctuation}");
        if values.flag("loud") {
            line = line.to_uppercase();
        }
        for _ in 0..times {
            writeln!(out, "{line}")?;
        }
        Ok(0)
    }
}

/// Prints the parsed command line as JSON.
#[derive(Debug, Default)]
struct Inspect;

impl Command for Inspect {
    fn description(&self) -> String {
        "Show how the command line was parsed".to_string()
    }

    fn help(&self, usage: &str) -> String {
        format!(
            "Parses its own command line and prints the resulting options and arguments as JSON.\n\n{usage}"
        )
    }

    fn configure(&self, schema: &mut CommandSchema) -> std::result::Result<(), OrderError> {
        schema.declare_option(OptionSpec::flag("pretty", 'p', "Pretty-print the JSON"))?;
        schema.declare_option(OptionSpec::optional_value(
            "label",
            'l',
            "inspect",
            "Label to include",
        ))?;
        schema.declare_option(OptionSpec::required_value("out", 'o', "", "Output name"))?;
        schema.declare_argument(ArgumentSpec::optional("first", "First positional value"))?;
        schema.declare_argument(ArgumentSpec::optional("second", "Second positional value"))
    }

    fn execute(&self, input: &mut Invocation, out: &mut dyn Write) -> Result<i32> {
        let values = input.parsed()?;
        let raw = if values.flag("pretty") {
            serde_json::to_string_pretty(values)
        } else {
            serde_json::to_string(values)
        }
        .map_err(|err| CliError::Failed(format!("failed to serialize parsed values: {err}")))?;
        writeln!(out, "{raw}")?;
        Ok(0)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    init_tracing();

    let mut cli = Cli::new();
    cli.register::<Greet>("greet");
    cli.register::<Inspect>("inspect");

    let result = {
        let mut stdout = io::stdout().lock();
        let result = cli.run(std::env::args(), &mut stdout);
        let _ = stdout.flush();
        result
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
