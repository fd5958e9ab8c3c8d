use clap::Parser;
use eyre::WrapErr;
use runglob_config::{options_from_env, Manifest, PartialOptions, PlanOptions};
use runglob_core::Error;
use runglob_shell::SearchPath;
use runglob_task::TaskGraphBuilder;
use runglob_utils::normalize_lexically;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

mod formats;

use formats::{PlanFormat, PlanFormatter};

#[derive(Parser, Debug)]
#[command(name = "runglob")]
#[command(about = "Compile package.json script patterns into an execution plan", long_about = None)]
#[command(version)]
struct Cli {
    /// Script patterns; a trailing or leading comma joins neighbours into one sequential group
    #[arg(required = true, value_name = "PATTERNS")]
    patterns: Vec<String>,

    /// Arguments appended to every command
    #[arg(last = true, value_name = "ARGS")]
    args: Vec<String>,

    /// Manifest to read scripts from (default: nearest package.json)
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Give every matched script its own phase
    #[arg(short, long)]
    serial: bool,

    /// Run patterns that match no script as shell commands
    #[arg(short, long)]
    raw: bool,

    /// Module to preload when a command runs a local executable
    #[arg(long, value_name = "MODULE")]
    require: Option<String>,

    /// Interpreter used for preloaded commands
    #[arg(long, value_name = "NAME")]
    interpreter: Option<String>,

    /// Output format for the compiled plan
    #[arg(long, value_enum, default_value_t = PlanFormat::Tree)]
    format: PlanFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Options set on the command line; flags that are absent defer to
    /// the environment and the manifest
    fn options(&self) -> PartialOptions {
        PartialOptions {
            serial: self.serial.then_some(true),
            raw: self.raw.then_some(true),
            suffixes: (!self.args.is_empty()).then(|| self.args.clone()),
            require: self.require.clone(),
            interpreter: self.interpreter.clone(),
        }
    }
}

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    runglob_utils::tracing::init(cli.verbose)
        .map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;

    run(cli)
}

fn run(cli: Cli) -> eyre::Result<ExitCode> {
    let cwd = env::current_dir().wrap_err("cannot read the current directory")?;

    let manifest_path = match &cli.manifest {
        Some(path) => path.clone(),
        None => Manifest::discover(&cwd)?,
    };
    let manifest = Manifest::load(&manifest_path)
        .wrap_err_with(|| format!("failed to load {}", manifest_path.display()))?;

    let root = normalize_lexically(&cwd.join(manifest.dir()));
    let search_path = SearchPath::for_project(&root, cwd);

    let options = PlanOptions::with_search_path(search_path).layered([
        manifest.options().clone(),
        options_from_env(env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))?,
        cli.options(),
    ]);
    tracing::debug!(?options, "resolved plan options");

    let builder = TaskGraphBuilder::new(manifest.scripts(), &options);
    let graph = match builder.build_argv(cli.patterns.as_slice()) {
        Ok(graph) => graph,
        Err(Error::NoMatch { pattern }) => {
            eprintln!("no scripts found: {pattern}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    print!("{}", cli.format.formatter().format_plan(&graph)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_trailing_args_become_suffixes() {
        let cli = Cli::parse_from(["runglob", "-s", "test*", "lint", "--", "--watch", "me"]);
        assert_eq!(cli.patterns, ["test*", "lint"]);
        let options = cli.options();
        assert_eq!(options.serial, Some(true));
        assert_eq!(options.raw, None);
        assert_eq!(
            options.suffixes,
            Some(vec!["--watch".to_string(), "me".to_string()])
        );
    }

    #[test]
    fn test_absent_flags_defer() {
        let cli = Cli::parse_from(["runglob", "build"]);
        assert!(cli.options().is_empty());
        assert_eq!(cli.format, PlanFormat::Tree);
    }

    #[test]
    fn test_patterns_are_required() {
        assert!(Cli::try_parse_from(["runglob"]).is_err());
    }
}
