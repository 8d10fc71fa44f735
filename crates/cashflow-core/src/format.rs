/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Renders amounts as `<symbol><value>` with two decimals, sign first.
#[derive(Debug, Clone)]
pub struct SymbolFormatter {
    symbol: String,
}

impl SymbolFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

impl Default for SymbolFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl CurrencyFormatter for SymbolFormatter {
    fn format_amount(&self, amount: f64) -> String {
        // Display only; stored values keep full precision.
        let amount = if amount == 0.0 { 0.0 } else { amount };
        if amount < 0.0 {
            format!("-{}{:.2}", self.symbol, amount.abs())
        } else {
            format!("{}{:.2}", self.symbol, amount)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals_with_symbol() {
        let fmt = SymbolFormatter::default();
        assert_eq!(fmt.format_amount(1500.0), "$1500.00");
        assert_eq!(fmt.format_amount(3.456), "$3.46");
        assert_eq!(fmt.format_amount(-12.5), "-$12.50");
        assert_eq!(SymbolFormatter::new("€").format_amount(0.0), "€0.00");
    }
}
