//! Command execution and output formatting.
//!
//! # Responsibility
//! - Translate parsed commands into catalog service calls.
//! - Render entries for terminal output.
//!
//! # Invariants
//! - Commands never exit the process; failures surface as `CommandError`.

use crate::args::{Command, LinkArgs};
use log::info;
use savvy_catalog_core::{
    CatalogEntry, CatalogService, CatalogServiceError, CatalogStore, EntryUpdate,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};

/// Failure of a single CLI command.
#[derive(Debug)]
pub enum CommandError {
    /// Arguments parsed but are not usable together.
    Usage(&'static str),
    /// `what` found no entry for the given name.
    EntryNotFound(String),
    /// Catalog service failure.
    Service(CatalogServiceError),
    /// Writing to the output stream failed.
    Output(io::Error),
}

impl CommandError {
    /// Stable metadata-only code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::EntryNotFound(_) => "entry_not_found",
            Self::Service(CatalogServiceError::Validation(_)) => "validation",
            Self::Service(CatalogServiceError::Duplicate(_)) => "duplicate",
            Self::Service(CatalogServiceError::NotFound(_)) => "not_found",
            Self::Service(CatalogServiceError::Store(_)) => "store_failed",
            Self::Output(_) => "output_failed",
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(message) => write!(f, "{message}"),
            Self::EntryNotFound(name) => write!(f, "\"{name}\" not found in the catalog"),
            Self::Service(err) => write!(f, "{err}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::Output(err) => Some(err),
            Self::Usage(_) | Self::EntryNotFound(_) => None,
        }
    }
}

impl From<CatalogServiceError> for CommandError {
    fn from(value: CatalogServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<io::Error> for CommandError {
    fn from(value: io::Error) -> Self {
        Self::Output(value)
    }
}

/// Runs one command against `service`, writing user-facing output to `out`.
pub fn execute<S: CatalogStore>(
    command: Command,
    service: &CatalogService<S>,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    match command {
        Command::List => {
            info!("event=cli_command module=cli status=start command=list");
            list_entries(service, out)
        }
        Command::Add {
            name,
            description,
            in_stack,
            pressure_tested,
            links,
        } => {
            info!("event=cli_command module=cli status=start command=add");
            let mut entry = CatalogEntry::new(name, description.join(" "));
            entry.in_current_stack = in_stack;
            entry.pressure_tested = pressure_tested;
            entry.website_url = links.website;
            entry.pricing_url = links.pricing;
            entry.affiliate_url = links.affiliate;
            entry.api_url = links.api;

            service.add(&entry)?;
            writeln!(out, "Added: {}", entry.name.trim())?;
            Ok(())
        }
        Command::Update {
            name,
            description,
            in_stack,
            not_in_stack,
            pressure_tested,
            not_pressure_tested,
            links,
        } => {
            info!("event=cli_command module=cli status=start command=update");
            let updates = EntryUpdate {
                description,
                in_current_stack: flag_update(in_stack, not_in_stack),
                pressure_tested: flag_update(pressure_tested, not_pressure_tested),
                ..link_update(links)
            };
            if updates.is_empty() {
                return Err(CommandError::Usage("'update' requires at least one option"));
            }

            service.update(&name, &updates)?;
            writeln!(out, "Updated: {}", name.trim())?;
            Ok(())
        }
        Command::What { name } => {
            info!("event=cli_command module=cli status=start command=what");
            match service.find_by_name(&name)? {
                Some(entry) => {
                    writeln!(out)?;
                    writeln!(out, "{}", format_entry(&entry))?;
                    writeln!(out)?;
                    Ok(())
                }
                None => Err(CommandError::EntryNotFound(name)),
            }
        }
    }
}

fn list_entries<S: CatalogStore>(
    service: &CatalogService<S>,
    out: &mut dyn Write,
) -> Result<(), CommandError> {
    let entries = service.list()?;
    if entries.is_empty() {
        writeln!(out, "No entries in the catalog yet.")?;
        writeln!(out, "Use 'catalog add <name> <description>' to add one.")?;
        return Ok(());
    }

    writeln!(out, "Catalog ({} entries):", entries.len())?;
    writeln!(out)?;
    for entry in &entries {
        writeln!(out, "{}", format_entry(entry))?;
        writeln!(out)?;
    }
    Ok(())
}

fn flag_update(set: bool, clear: bool) -> Option<bool> {
    match (set, clear) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

fn link_update(links: LinkArgs) -> EntryUpdate {
    EntryUpdate {
        website_url: links.website,
        pricing_url: links.pricing,
        affiliate_url: links.affiliate,
        api_url: links.api,
        ..EntryUpdate::default()
    }
}

/// Renders one entry as a header line plus indented detail lines.
pub fn format_entry(entry: &CatalogEntry) -> String {
    let mut flags = Vec::new();
    if entry.in_current_stack {
        flags.push("in-stack");
    }
    if entry.pressure_tested {
        flags.push("pressure-tested");
    }

    let mut text = entry.name.clone();
    if !flags.is_empty() {
        text.push_str(&format!(" [{}]", flags.join(", ")));
    }
    text.push_str(&format!("\n  {}", entry.description));

    let details = [
        ("website", &entry.website_url),
        ("pricing", &entry.pricing_url),
        ("affiliate", &entry.affiliate_url),
        ("api", &entry.api_url),
        ("replaced by", &entry.replaced_by),
        ("reason", &entry.replacement_reason),
    ];
    for (label, value) in details {
        if let Some(value) = value {
            text.push_str(&format!("\n  {label}: {value}"));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::{execute, format_entry, CommandError};
    use crate::args::Cli;
    use clap::Parser;
    use savvy_catalog_core::{
        CatalogEntry, CatalogService, CatalogServiceError, JsonFileCatalogStore,
    };
    use tempfile::TempDir;

    fn service_in(dir: &TempDir) -> CatalogService<JsonFileCatalogStore> {
        CatalogService::new(JsonFileCatalogStore::new(
            dir.path().join("data").join("catalog.json"),
        ))
    }

    fn run(
        service: &CatalogService<JsonFileCatalogStore>,
        args: &[&str],
    ) -> (Result<(), CommandError>, String) {
        let cli = Cli::try_parse_from(std::iter::once("catalog").chain(args.iter().copied()))
            .expect("arguments should parse");
        let command = cli.command.expect("a command is required");
        let mut out = Vec::new();
        let result = execute(command, service, &mut out);
        (result, String::from_utf8(out).expect("output is UTF-8"))
    }

    #[test]
    fn list_on_empty_catalog_prints_friendly_message() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);

        let (result, output) = run(&service, &["list"]);
        result.unwrap();
        assert!(output.starts_with("No entries in the catalog yet."));
    }

    #[test]
    fn add_then_list_and_what_render_entry() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);

        let (result, output) = run(
            &service,
            &[
                "add",
                "Claude",
                "An",
                "AI",
                "assistant",
                "--in-stack",
                "--website",
                "https://claude.ai",
            ],
        );
        result.unwrap();
        assert_eq!(output, "Added: Claude\n");

        let (result, output) = run(&service, &["list"]);
        result.unwrap();
        assert!(output.starts_with("Catalog (1 entries):\n\n"));
        assert!(output
            .contains("Claude [in-stack]\n  An AI assistant\n  website: https://claude.ai"));

        let (result, output) = run(&service, &["what", "claude"]);
        result.unwrap();
        assert!(output.contains("Claude [in-stack]"));
    }

    #[test]
    fn add_duplicate_reports_service_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        run(&service, &["add", "Claude", "first"]).0.unwrap();

        let (result, _) = run(&service, &["add", "CLAUDE", "second"]);
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CommandError::Service(CatalogServiceError::Duplicate(_))
        ));
        assert_eq!(err.code(), "duplicate");
    }

    #[test]
    fn update_requires_at_least_one_option() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        run(&service, &["add", "Claude", "assistant"]).0.unwrap();

        let (result, _) = run(&service, &["update", "Claude"]);
        let err = result.unwrap_err();
        assert!(matches!(err, CommandError::Usage(_)));
        assert_eq!(err.code(), "usage");
    }

    #[test]
    fn update_applies_flags_description_and_links() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);
        run(&service, &["add", "Cursor", "editor", "--pressure-tested"]).0.unwrap();

        let (result, output) = run(
            &service,
            &[
                "update",
                "cursor",
                "--not-pressure-tested",
                "--in-stack",
                "--description",
                "An AI code editor",
                "--api",
                "https://cursor.com/api",
            ],
        );
        result.unwrap();
        assert_eq!(output, "Updated: cursor\n");

        let entry = service.find_by_name("Cursor").unwrap().unwrap();
        assert_eq!(entry.name, "Cursor");
        assert_eq!(entry.description, "An AI code editor");
        assert!(entry.in_current_stack);
        assert!(!entry.pressure_tested);
        assert_eq!(entry.api_url.as_deref(), Some("https://cursor.com/api"));
    }

    #[test]
    fn update_missing_entry_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);

        let (result, _) = run(&service, &["update", "Ghost", "--description", "x"]);
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            CommandError::Service(CatalogServiceError::NotFound(_))
        ));
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn what_missing_entry_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);

        let (result, output) = run(&service, &["what", "Ghost"]);
        assert!(matches!(
            result.unwrap_err(),
            CommandError::EntryNotFound(ref name) if name == "Ghost"
        ));
        assert!(output.is_empty());
    }

    #[test]
    fn add_accepts_dash_prefixed_words_after_separator() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(&dir);

        let (result, _) = run(&service, &["add", "GPT", "costs", "--in-stack", "--", "-5%"]);
        result.unwrap();

        let entry = service.find_by_name("gpt").unwrap().unwrap();
        assert_eq!(entry.description, "costs -5%");
        assert!(entry.in_current_stack);
    }

    #[test]
    fn format_entry_omits_flag_suffix_when_unset() {
        let entry = CatalogEntry::new("RAG", "Retrieval-augmented generation");
        assert_eq!(format_entry(&entry), "RAG\n  Retrieval-augmented generation");
    }
}
