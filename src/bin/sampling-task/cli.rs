use std::io::{self, BufRead, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use sampling_task::{Answer, Distribution, DistributionKind, Field, SnippetOptions, Task, Task61};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, Result};

#[derive(Debug, Parser)]
#[command(
    name = "sampling-task",
    about = "Generate the NumPy program for the sampling exercise",
    version
)]
pub(crate) struct Cli {
    /// Log edits and answers to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Validate the parameters and print the answer.
    Generate(GenerateArgs),

    /// Ask for each parameter on stdin until all are valid, then print the answer.
    Interactive(SnippetArgs),

    /// List the available distributions and their parameters.
    Distributions,
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    /// Sample size, n.
    #[arg(short = 'n', long)]
    pub(crate) sample_size: String,

    /// Distribution in `name(args)` notation, e.g. `uniform(0, 1)`.
    #[arg(short, long)]
    pub(crate) distribution: Distribution,

    /// Random seed.
    #[arg(short, long)]
    pub(crate) seed: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub(crate) format: Format,

    #[command(flatten)]
    pub(crate) snippet: SnippetArgs,
}

#[derive(Debug, Args)]
pub(crate) struct SnippetArgs {
    /// Values to print from each end of the sample.
    #[arg(long, default_value_t = 5)]
    pub(crate) preview_len: usize,

    /// Decimal places of the printed values.
    #[arg(long, default_value_t = 2)]
    pub(crate) decimals: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
}

pub(crate) fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(cli, &mut stdin.lock(), &mut stdout.lock())
}

pub(crate) fn run(cli: Cli, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate(args, out),
        Commands::Interactive(args) => run_interactive(&args, input, out),
        Commands::Distributions => print_distributions(out),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn build_task(args: &SnippetArgs) -> Result<Task61> {
    let options = SnippetOptions::builder()
        .preview_len(args.preview_len)
        .decimals(args.decimals)
        .build()?;
    Ok(Task61::builder().options(options).build()?)
}

fn run_generate(args: GenerateArgs, out: &mut impl Write) -> Result<()> {
    let mut task = build_task(&args.snippet)?;
    task.set_sample_size(&args.sample_size);
    task.set_distribution(Some(args.distribution));
    task.set_seed(&args.seed);

    task.form().validated()?;
    let answer = task.request_answer().ok_or(sampling_task::Error::MissingDistribution)?;
    write_answer(&answer, args.format, out)
}

fn write_answer(answer: &Answer, format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Text => writeln!(out, "{answer}")?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, answer)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_interactive(args: &SnippetArgs, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut task = build_task(args)?;

    loop {
        let text = prompt(input, out, "Sample size (n =): ")?;
        task.set_sample_size(&text);
        if report(&task, Field::SampleSize, out)? {
            break;
        }
    }

    loop {
        let text = prompt(input, out, "Distribution, e.g. uniform(0, 1): ")?;
        match text.parse::<Distribution>() {
            Ok(distribution) => {
                task.set_distribution(Some(distribution));
                report(&task, Field::Distribution, out)?;
                break;
            }
            Err(error) => writeln!(out, "  invalid: {error}")?,
        }
    }

    loop {
        let text = prompt(input, out, "Random seed: ")?;
        task.set_seed(&text);
        if report(&task, Field::Seed, out)? {
            break;
        }
    }

    let answer = task.request_answer().ok_or(CliError::UnexpectedEof)?;
    writeln!(out)?;
    writeln!(out, "{answer}")?;
    Ok(())
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<String> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::UnexpectedEof);
    }
    Ok(line)
}

fn report(task: &Task61, field: Field, out: &mut impl Write) -> Result<bool> {
    let valid = task.validity().get(field);
    writeln!(out, "  {}", if valid { "ok" } else { "invalid" })?;
    Ok(valid)
}

fn print_distributions(out: &mut impl Write) -> Result<()> {
    for kind in DistributionKind::ALL {
        writeln!(
            out,
            "{:<12} {}({})",
            kind.to_string(),
            kind.name(),
            kind.parameter_names().join(", ")
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_with(args: &[&str], stdin: &str) -> (Result<()>, String) {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run(cli, &mut input, &mut out);
        (result, String::from_utf8(out).expect("output is UTF-8"))
    }

    #[test]
    fn generate_prints_answer() {
        let (result, out) = run_with(
            &["sampling-task", "generate", "-n", "5", "-d", "uniform(0, 1)", "-s", "42"],
            "",
        );
        assert!(result.is_ok());
        assert!(out.contains("np.random.seed(42)"));
        assert!(out.contains("sample = np.random.uniform(0, 1, 5)"));
        assert!(out.contains("copy the printed lines"));
    }

    #[test]
    fn generate_rejects_non_numeric_seed() {
        let (result, out) = run_with(
            &["sampling-task", "generate", "-n", "5", "-d", "poisson(2)", "-s", "abc"],
            "",
        );
        let error = result.unwrap_err();
        assert_eq!(error.exit_code(), 2);
        assert!(error.to_string().contains("random seed"));
        assert!(out.is_empty());
    }

    #[test]
    fn generate_json_output() {
        let (result, out) = run_with(
            &[
                "sampling-task",
                "generate",
                "-n",
                "10",
                "-d",
                "exponential(4)",
                "-s",
                "1",
                "--format",
                "json",
            ],
            "",
        );
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let code = value["snippet"]["code"].as_str().unwrap();
        assert!(code.contains("np.random.exponential(1 / 4, 10)"));
    }

    #[test]
    fn bad_distribution_is_a_parse_error() {
        let parsed = Cli::try_parse_from([
            "sampling-task",
            "generate",
            "-n",
            "5",
            "-d",
            "cauchy(0, 1)",
            "-s",
            "1",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn interactive_retries_invalid_fields() {
        let (result, out) = run_with(
            &["sampling-task", "interactive"],
            "abc\n5\nnormal(0)\nnormal(0, 2)\n\n42\n",
        );
        assert!(result.is_ok());
        assert_eq!(out.matches("  invalid").count(), 3);
        assert!(out.contains("sample = np.random.normal(0, 2, 5)"));
    }

    #[test]
    fn interactive_stops_at_end_of_input() {
        let (result, _) = run_with(&["sampling-task", "interactive"], "5\n");
        assert!(matches!(result, Err(CliError::UnexpectedEof)));
    }

    #[test]
    fn distributions_lists_every_kind() {
        let (result, out) = run_with(&["sampling-task", "distributions"], "");
        assert!(result.is_ok());
        assert_eq!(out.lines().count(), DistributionKind::ALL.len());
        assert!(out.contains("normal(mean, std_dev)"));
    }
}
