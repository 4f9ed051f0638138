mod categorization;
mod message;
mod record;
mod transaction;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use categorization::{Categorization, CategorySource};
pub use message::InboundMessage;
pub use record::TransactionRecord;
pub use transaction::ParsedTransaction;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Debit,
    Credit,
    Transfer,
    Investment,
    Unknown
}

impl Direction {
    /// Applies the storage sign convention to a positive magnitude.
    ///
    /// Credits and investments are stored positive, debits and transfers
    /// negative. `Unknown` never reaches the store and is returned unsigned.
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Direction::Credit | Direction::Investment | Direction::Unknown => amount.abs(),
            Direction::Debit | Direction::Transfer => -amount.abs()
        }
    }
}
