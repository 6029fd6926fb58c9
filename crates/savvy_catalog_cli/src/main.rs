//! `catalog` command-line entry point.
//!
//! # Responsibility
//! - Parse arguments, configure logging and resolve the catalog path.
//! - Print one-line errors and map failures to non-zero exit codes.
//!
//! # Exit codes
//! - `0`: success, help, version, or bare invocation.
//! - `1`: command failure, or an unknown command/argument.
//! - `2`: other argument errors (clap's convention).

mod args;
mod commands;

use args::Cli;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::{error, warn};
use savvy_catalog_core::{
    default_log_level, init_logging, resolve_catalog_path, CatalogService, JsonFileCatalogStore,
};
use std::process::ExitCode;

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let code = match Cli::try_parse() {
        Ok(cli) => run(cli),
        Err(err) => report_parse_error(&err),
    };
    ExitCode::from(code)
}

fn run(cli: Cli) -> u8 {
    let Some(command) = cli.command else {
        if let Err(err) = Cli::command().print_help() {
            warn!("event=cli_help module=cli status=error error_code=write_failed error={err}");
        }
        return EXIT_SUCCESS;
    };

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("Error: {err}");
            return EXIT_FAILURE;
        }
    }

    let path = match resolve_catalog_path(cli.file) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("Error: cannot resolve catalog path: {err}");
            return EXIT_FAILURE;
        }
    };

    let service = CatalogService::new(JsonFileCatalogStore::new(path));
    let mut stdout = std::io::stdout().lock();
    match commands::execute(command, &service, &mut stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            error!(
                "event=cli_command module=cli status=error error_code={}",
                err.code()
            );
            eprintln!("Error: {err}");
            EXIT_FAILURE
        }
    }
}

fn report_parse_error(err: &clap::Error) -> u8 {
    let code = parse_exit_code(err.kind());
    if err.print().is_err() {
        return code;
    }
    if matches!(
        err.kind(),
        ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument
    ) {
        eprintln!("{}", Cli::command().render_help());
    }
    code
}

fn parse_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument => EXIT_FAILURE,
        _ => EXIT_USAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_exit_code, run, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
    use crate::args::Cli;
    use clap::error::ErrorKind;
    use clap::Parser;

    fn parse_error_code(args: &[&str]) -> u8 {
        let err = Cli::try_parse_from(std::iter::once("catalog").chain(args.iter().copied()))
            .expect_err("arguments should be rejected");
        parse_exit_code(err.kind())
    }

    fn run_with_file(file: &std::path::Path, args: &[&str]) -> u8 {
        let file = file.to_str().expect("temp path is UTF-8");
        let cli = Cli::try_parse_from(
            ["catalog", "--file", file]
                .into_iter()
                .chain(args.iter().copied()),
        )
        .expect("arguments should parse");
        run(cli)
    }

    #[test]
    fn help_and_version_exit_successfully() {
        assert_eq!(parse_exit_code(ErrorKind::DisplayHelp), EXIT_SUCCESS);
        assert_eq!(parse_exit_code(ErrorKind::DisplayVersion), EXIT_SUCCESS);
        assert_eq!(parse_error_code(&["help"]), EXIT_SUCCESS);
        assert_eq!(parse_error_code(&["-h"]), EXIT_SUCCESS);
        assert_eq!(parse_error_code(&["--help"]), EXIT_SUCCESS);
    }

    #[test]
    fn unknown_command_and_argument_exit_with_failure() {
        assert_eq!(parse_exit_code(ErrorKind::InvalidSubcommand), EXIT_FAILURE);
        assert_eq!(parse_exit_code(ErrorKind::UnknownArgument), EXIT_FAILURE);
        assert_eq!(parse_error_code(&["remove", "Claude"]), EXIT_FAILURE);
        assert_eq!(parse_error_code(&["add", "GPT", "costs", "-5%"]), EXIT_FAILURE);
    }

    #[test]
    fn other_argument_errors_use_usage_exit_code() {
        assert_eq!(
            parse_exit_code(ErrorKind::MissingRequiredArgument),
            EXIT_USAGE
        );
        assert_eq!(parse_error_code(&["add", "OnlyName"]), EXIT_USAGE);
    }

    #[test]
    fn bare_invocation_prints_help_and_succeeds() {
        let cli = Cli::try_parse_from(["catalog"]).expect("bare invocation should parse");
        assert_eq!(run(cli), EXIT_SUCCESS);
    }

    #[test]
    fn commands_map_outcomes_to_exit_codes() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data").join("catalog.json");

        assert_eq!(run_with_file(&file, &["list"]), EXIT_SUCCESS);
        assert_eq!(run_with_file(&file, &["add", "Claude", "assistant"]), EXIT_SUCCESS);
        assert_eq!(run_with_file(&file, &["add", "claude", "dup"]), EXIT_FAILURE);
        assert_eq!(run_with_file(&file, &["what", "CLAUDE"]), EXIT_SUCCESS);
        assert_eq!(run_with_file(&file, &["what", "Ghost"]), EXIT_FAILURE);
        assert_eq!(run_with_file(&file, &["update", "Claude"]), EXIT_FAILURE);
        assert_eq!(
            run_with_file(&file, &["update", "Ghost", "--in-stack"]),
            EXIT_FAILURE
        );
        assert_eq!(
            run_with_file(&file, &["update", "Claude", "--in-stack"]),
            EXIT_SUCCESS
        );
    }
}
