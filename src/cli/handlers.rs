//! One handler per subcommand. Handlers own no state beyond the [`CliContext`].

use std::io::Write;

use cashflow_core::{Clock, TransactionService};
use cashflow_domain::{NewTransaction, RecurrenceKind};

use super::{AddArgs, CliContext, ConfigCommand, ListArgs, SummaryArgs};
use crate::errors::Result;

pub fn add(context: &CliContext, args: AddArgs, out: &mut dyn Write) -> Result<()> {
    let recurrence = if args.recurring {
        RecurrenceKind::Recurring
    } else {
        RecurrenceKind::OneTime
    };
    let draft = NewTransaction {
        id: None,
        description: args.description,
        amount: args.amount,
        kind: args.kind,
        recurrence,
        category: args.category,
        month: args.month,
        start_month: args.start_month,
        end_month: args.end_month,
    };
    let txn = TransactionService::add(&context.store, draft)?;
    writeln!(
        out,
        "Added {} '{}' with id {}",
        txn.kind(),
        txn.description(),
        txn.id()
    )?;
    Ok(())
}

pub fn list(context: &CliContext, args: ListArgs, out: &mut dyn Write) -> Result<()> {
    let transactions = TransactionService::list(&context.store, args.month)?;
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&transactions)?)?;
        return Ok(());
    }
    context.renderer.write_listing(out, &transactions)?;
    Ok(())
}

pub fn summary(
    context: &CliContext,
    args: SummaryArgs,
    clock: &dyn Clock,
    out: &mut dyn Write,
) -> Result<()> {
    let month = args.month.unwrap_or_else(|| clock.current_month());
    let summary = TransactionService::summarize(&context.store, month, args.opening_balance)?;
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }
    context.renderer.write_summary(out, &summary)?;
    Ok(())
}

pub fn reset(context: &CliContext, out: &mut dyn Write) -> Result<()> {
    if TransactionService::reset(&context.store)? {
        writeln!(out, "Cleared saved cash flow data.")?;
    } else {
        writeln!(out, "No data file to clear.")?;
    }
    Ok(())
}

pub fn config(context: &mut CliContext, command: ConfigCommand, out: &mut dyn Write) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            writeln!(
                out,
                "Config file: {}",
                context.config_manager.config_path().display()
            )?;
            writeln!(out, "Data file:   {}", context.store.path().display())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&context.config)?)?;
        }
        ConfigCommand::Set { key, value } => {
            context.config.set(key, &value)?;
            context.config_manager.save(&context.config)?;
            tracing::info!(%key, "config updated");
            writeln!(out, "Set {} to '{}'", key, value.trim())?;
        }
    }
    Ok(())
}
