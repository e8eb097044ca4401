//! CLI commands for browsing stored records

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::report::open_repository;
use crate::config::{FinboardPaths, Settings};
use crate::display::records::{
    format_client_list, format_ledger_list, format_payable_list, format_receivable_list,
};
use crate::display::{Labels, Locale};
use crate::error::FinboardResult;
use crate::storage::Repository;

/// Which collection to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    /// Every client
    Clients,
    /// Every payable
    Payables,
    /// Every receivable
    Receivables,
    /// Every ledger entry
    Ledger,
}

/// Arguments of `finboard list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Collection to list
    #[arg(value_enum)]
    pub kind: ListKind,

    /// SQLite database (defaults to the configured data directory)
    #[arg(long, conflicts_with = "data")]
    pub db: Option<PathBuf>,

    /// JSON dataset file to read instead of a database
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Label language (en, pt-br)
    #[arg(long)]
    pub locale: Option<String>,
}

/// Handle `finboard list`
pub fn handle_list_command(
    paths: &FinboardPaths,
    settings: &Settings,
    args: ListArgs,
) -> FinboardResult<()> {
    let mut labels = settings.labels();
    if let Some(locale) = &args.locale {
        labels.locale = locale.parse::<Locale>()?;
    }

    let repo = open_repository(paths, args.db.as_ref(), args.data.as_ref())?;
    print!("{}", render_list(&*repo, args.kind, &labels)?);
    Ok(())
}

/// Read one collection and format it as a table
pub fn render_list<R: Repository + ?Sized>(
    repo: &R,
    kind: ListKind,
    labels: &Labels,
) -> FinboardResult<String> {
    let output = match kind {
        ListKind::Clients => format_client_list(&repo.list_clients()?, labels),
        ListKind::Payables => format_payable_list(&repo.list_payables()?, labels),
        ListKind::Receivables => {
            format_receivable_list(&repo.list_receivables()?, &repo.list_clients()?, labels)
        }
        ListKind::Ledger => format_ledger_list(&repo.list_ledger_entries()?, labels),
    };
    tracing::debug!(?kind, "records listed");
    Ok(output)
}
