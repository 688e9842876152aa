//! The bank transfer entity.

use crate::errors::TransferError;
use crate::iban::Iban;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// **A bank transfer**
///
/// The transfer of an amount of money from one account to another,
/// with a request date and an execution date.
///
/// Invariants, checked at construction:
/// - the amount is strictly positive;
/// - the execution date is at least 24 hours after the request date;
/// - the origin and destination accounts are not equal
///   (see `impl PartialEq for Iban`).
///
/// A transfer is never mutated after construction; on the client side
/// it is a read-only view model deserialized from the backend response.
///
/// The wire shape is camelCase JSON (`requestDate`, `executionDate`, ...).
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransfer {
    pub request_date: NaiveDateTime,
    pub amount: f64,
    pub execution_date: NaiveDateTime,
    pub origin: Iban,
    pub destination: Iban,
}

impl BankTransfer {
    /// **Creates a new `BankTransfer` with given amount, request and
    /// execution dates, and origin and destination accounts.**
    ///
    /// # Errors
    /// - Amount not strictly positive, `TransferError::AmountNotPositive`;
    /// - Execution date less than 24 hours after the request date,
    ///   `TransferError::ExecutionDateTooEarly`;
    /// - Equal origin and destination accounts, `TransferError::SameAccounts`.
    pub fn new(
        amount: f64,
        request_date: NaiveDateTime,
        execution_date: NaiveDateTime,
        origin: Iban,
        destination: Iban,
    ) -> Result<Self, TransferError> {
        if amount <= 0.0 {
            return Err(TransferError::AmountNotPositive(amount));
        }
        if execution_date < request_date + Duration::hours(24) {
            return Err(TransferError::ExecutionDateTooEarly);
        }
        if origin == destination {
            return Err(TransferError::SameAccounts);
        }
        Ok(BankTransfer {
            request_date,
            amount,
            execution_date,
            origin,
            destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BankTransfer;
    use crate::errors::TransferError;
    use crate::iban::{Bban, Iban};
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn origin() -> Iban {
        let bban = Bban::new("30002", "00550", "21345678936", "25").unwrap();
        Iban::new("FR", "33", bban)
    }

    fn destination() -> Iban {
        let bban = Bban::new("30001", "00551", "11345678936", "45").unwrap();
        Iban::new("GB", "44", bban)
    }

    #[test]
    fn test_valid_transfer_is_built() {
        let transfer = BankTransfer::new(
            1000.50,
            date(2024, 1, 1),
            date(2024, 1, 3),
            origin(),
            destination(),
        )
        .unwrap();
        assert_eq!(transfer.amount, 1000.50);
        assert_eq!(transfer.origin, origin());
    }

    #[test]
    fn test_execution_exactly_24_hours_later_is_accepted() {
        let request = date(2024, 1, 1);
        let execution = request + Duration::hours(24);
        assert!(BankTransfer::new(100.0, request, execution, origin(), destination()).is_ok());
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let result = BankTransfer::new(
            0.0,
            date(2024, 1, 1),
            date(2024, 1, 3),
            origin(),
            destination(),
        );
        assert_eq!(result, Err(TransferError::AmountNotPositive(0.0)));
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let result = BankTransfer::new(
            -5.0,
            date(2024, 1, 1),
            date(2024, 1, 3),
            origin(),
            destination(),
        );
        assert_eq!(result, Err(TransferError::AmountNotPositive(-5.0)));
    }

    #[test]
    fn test_execution_less_than_24_hours_later_is_rejected() {
        let request = date(2024, 1, 1);
        let execution = request + Duration::hours(23);
        let result = BankTransfer::new(100.0, request, execution, origin(), destination());
        assert_eq!(result, Err(TransferError::ExecutionDateTooEarly));
    }

    #[test]
    fn test_equal_accounts_are_rejected() {
        let result = BankTransfer::new(
            100.0,
            date(2024, 1, 1),
            date(2024, 1, 3),
            origin(),
            origin(),
        );
        assert_eq!(result, Err(TransferError::SameAccounts));
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let transfer = BankTransfer::new(
            1000.50,
            date(2024, 1, 1),
            date(2024, 1, 3),
            origin(),
            destination(),
        )
        .unwrap();
        let json = serde_json::to_value(&transfer).unwrap();
        assert!(json.get("requestDate").is_some());
        assert!(json.get("executionDate").is_some());
        assert_eq!(json["amount"], 1000.50);
        assert_eq!(json["origin"]["bban"]["bank"], "30002");
    }

    #[test]
    fn test_deserializes_from_backend_response() {
        let json = r#"
        {
            "requestDate": "2024-01-01T10:00:00",
            "amount": 100,
            "executionDate": "2024-01-02T10:00:00",
            "origin": {
                "country": "FR",
                "key": "33",
                "bban": {"bank": "30002", "counter": "00550",
                         "account": "21345678936", "key": "25"}
            },
            "destination": {
                "country": "GB",
                "key": "44",
                "bban": {"bank": "30001", "counter": "00551",
                         "account": "11345678936", "key": "45"}
            }
        }"#;
        let transfer: BankTransfer = serde_json::from_str(json).unwrap();
        assert_eq!(transfer.amount, 100.0);
        assert_eq!(
            transfer.origin.to_electronic_format(),
            "FR3330002005502134567893625"
        );
    }
}
