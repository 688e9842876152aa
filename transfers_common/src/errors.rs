/// **An application-specific error type**
///
/// Covers the entity construction invariants:
/// account numbers are capped, amounts are strictly positive,
/// execution dates come at least 24 hours after request dates,
/// and a transfer never moves money onto the same account.
#[derive(Debug, PartialEq)]
pub enum TransferError {
    AccountNumberTooLong(String),
    AmountNotPositive(f64),
    ExecutionDateTooEarly,
    SameAccounts,
}

pub const CANNOT_SEED_TRANSFERS_MSG: &str = "Could not build the seed transfers";
