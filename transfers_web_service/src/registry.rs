//! The in-memory transfer registry.

use chrono::{Duration, Local};
use transfers_common::errors::TransferError;
use transfers_common::iban::{Bban, Iban};
use transfers_common::transfer::BankTransfer;

/// Holds the bank transfers the service exposes.
///
/// Transfers are never mutated once registered; the accessors hand out
/// owned snapshots so the handlers can serialize them without holding
/// the registry lock.
pub struct TransferRegistry {
    transfers: Vec<BankTransfer>,
}

impl TransferRegistry {
    /// **Creates a new instance without any data.**
    pub fn new() -> Self {
        TransferRegistry { transfers: vec![] }
    }

    /// **Creates an instance pre-filled with two demonstration transfers.**
    ///
    /// One transfer was requested just now, the other two days ago;
    /// each executes two days after its request date.
    ///
    /// # Errors
    /// - `TransferError`, if the seed data violates an entity invariant.
    pub fn seeded() -> Result<Self, TransferError> {
        let first_request_date = Local::now().naive_local();
        let second_request_date = first_request_date - Duration::days(2);
        let first_execution_date = first_request_date + Duration::days(2);
        let second_execution_date = second_request_date + Duration::days(2);

        let first_bban = Bban::new("30002", "00550", "21345678936", "25")?;
        let second_bban = Bban::new("30001", "00551", "11345678936", "45")?;
        let origin = Iban::new("FR", "33", first_bban);
        let destination = Iban::new("GB", "44", second_bban);

        let transfers = vec![
            BankTransfer::new(
                1000.50,
                first_request_date,
                first_execution_date,
                origin.clone(),
                destination.clone(),
            )?,
            BankTransfer::new(
                2500.80,
                second_request_date,
                second_execution_date,
                origin,
                destination,
            )?,
        ];

        Ok(TransferRegistry { transfers })
    }

    /// **Registers a transfer.**
    pub fn register(&mut self, transfer: BankTransfer) {
        self.transfers.push(transfer);
    }

    /// **Returns a singleton list containing the last bank transfer
    /// based on its request date.**
    ///
    /// Never fails; the list is empty if the registry is empty.
    pub fn last(&self) -> Vec<BankTransfer> {
        self.transfers
            .iter()
            .max_by_key(|transfer| transfer.request_date)
            .cloned()
            .into_iter()
            .collect()
    }

    /// **Returns a list of all the bank transfers.**
    ///
    /// Never fails; may be empty.
    pub fn all(&self) -> Vec<BankTransfer> {
        self.transfers.clone()
    }
}

impl Default for TransferRegistry {
    fn default() -> Self {
        Self::new()
    }
}
