use crate::analyzer::chains::types::Transaction;
use std::fmt;

const SEPARATOR: &str = "--------------------------------------------------";

/// Human-readable transaction history, one numbered section per transaction.
pub fn format_history(transactions: &[Transaction]) -> String {
    History(transactions).to_string()
}

struct History<'a>(&'a [Transaction]);

impl fmt::Display for History<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transaction history:")?;
        writeln!(f, "{}", SEPARATOR)?;

        for (i, tx) in self.0.iter().enumerate() {
            writeln!(f, "Transaction #{} ({}):", i + 1, tx.direction)?;
            writeln!(f, "  Hash: {}", tx.hash)?;
            writeln!(f, "  Block: {}", tx.block_number)?;
            writeln!(f, "  Date: {}", tx.timestamp.format("%d.%m.%Y %H:%M:%S"))?;
            writeln!(f, "  From: {}", tx.from)?;
            writeln!(f, "  To: {}", tx.to.as_deref().unwrap_or("(contract creation)"))?;
            writeln!(f, "  Value (wei): {}", tx.value)?;
            writeln!(f, "  Gas: {}, Gas price: {} wei", tx.gas, tx.gas_price)?;
            // input is ascii hex, so byte slicing is safe
            if tx.input.len() > 10 && tx.input.is_ascii() {
                writeln!(f, "  Data: 0x{}...", &tx.input[..10])?;
            } else {
                writeln!(f, "  Data: 0x{}", tx.input)?;
            }
            writeln!(f, "{}", SEPARATOR)?;
        }

        Ok(())
    }
}
