//! Console rendering for transaction listings and monthly summaries.

use std::io::{self, Write};

use colored::Colorize;

use cashflow_config::Config;
use cashflow_core::{
    format::{CurrencyFormatter, SymbolFormatter},
    MonthlySummary,
};
use cashflow_domain::{FlowKind, Schedule, Transaction};

/// Turns domain values into human-readable lines.
pub struct Renderer {
    formatter: SymbolFormatter,
    color: bool,
}

impl Renderer {
    pub fn new(currency_symbol: &str, color: bool) -> Self {
        Self {
            formatter: SymbolFormatter::new(currency_symbol),
            color,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.currency_symbol, config.color)
    }

    pub fn money(&self, amount: f64) -> String {
        self.formatter.format_amount(amount)
    }

    /// `[id] description | type | amount | recurrence (scope) | category`
    pub fn transaction_line(&self, txn: &Transaction) -> String {
        let scope = match *txn.schedule() {
            Schedule::OneTime { month } => month.to_string(),
            Schedule::Recurring { start, end: None } => format!("{start}+"),
            Schedule::Recurring {
                start,
                end: Some(end),
            } => format!("{start}+ to {end}"),
        };
        format!(
            "[{}] {} | {} | {} | {} ({}) | {}",
            txn.id(),
            txn.description(),
            self.kind_label(txn.kind()),
            self.money(txn.amount()),
            txn.recurrence(),
            scope,
            txn.category()
        )
    }

    pub fn write_listing(&self, out: &mut dyn Write, transactions: &[Transaction]) -> io::Result<()> {
        if transactions.is_empty() {
            return writeln!(out, "No transactions found.");
        }
        for txn in transactions {
            writeln!(out, "{}", self.transaction_line(txn))?;
        }
        Ok(())
    }

    pub fn write_summary(&self, out: &mut dyn Write, summary: &MonthlySummary) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            self.bold(&format!("Cash flow summary for {}", summary.month))
        )?;
        writeln!(out, "Opening balance: {}", self.money(summary.opening_balance))?;
        writeln!(out, "Total inflows:   {}", self.money(summary.inflows))?;
        writeln!(out, "Total outflows:  {}", self.money(summary.outflows))?;
        writeln!(out, "Net income:      {}", self.signed(summary.net))?;
        writeln!(out, "Closing balance: {}", self.signed(summary.closing_balance))?;

        if summary.transactions.is_empty() {
            return Ok(());
        }
        writeln!(out)?;
        writeln!(out, "Transactions contributing to this month:")?;
        for txn in &summary.transactions {
            let source = txn
                .month()
                .or_else(|| txn.start_month())
                .map(|month| month.to_string())
                .unwrap_or_default();
            writeln!(
                out,
                "- {} ({}, {}, {}, from {})",
                txn.description(),
                self.money(txn.amount()),
                self.kind_label(txn.kind()),
                txn.recurrence(),
                source
            )?;
        }
        Ok(())
    }

    fn kind_label(&self, kind: FlowKind) -> String {
        if !self.color {
            return kind.to_string();
        }
        match kind {
            FlowKind::Inflow => kind.as_str().green().to_string(),
            FlowKind::Outflow => kind.as_str().red().to_string(),
        }
    }

    fn signed(&self, amount: f64) -> String {
        let text = self.money(amount);
        if self.color && amount < 0.0 {
            text.bright_red().to_string()
        } else {
            text
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}
