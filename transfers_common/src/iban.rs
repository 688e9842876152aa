//! The account number types: BBAN and IBAN.

use crate::errors::TransferError;
use serde::{Deserialize, Serialize};

/// The maximum length of a BBAN account number, in characters.
pub const MAX_ACCOUNT_LEN: usize = 11;

/// **A Basic Bank Account Number**
///
/// The country-specific part of an IBAN: bank code, counter code,
/// account number and BBAN key, concatenated in that fixed order
/// for display.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Bban {
    pub bank: String,
    pub counter: String,
    pub account: String,
    pub key: String,
}

impl Bban {
    /// **Creates a new `Bban` with given bank code, counter code,
    /// account number and BBAN key.**
    ///
    /// # Errors
    /// - Account number longer than [`MAX_ACCOUNT_LEN`] characters,
    ///   `TransferError::AccountNumberTooLong`.
    pub fn new(
        bank: impl Into<String>,
        counter: impl Into<String>,
        account: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<Self, TransferError> {
        let account = account.into();
        if account.chars().count() > MAX_ACCOUNT_LEN {
            return Err(TransferError::AccountNumberTooLong(account));
        }
        Ok(Bban {
            bank: bank.into(),
            counter: counter.into(),
            account,
            key: key.into(),
        })
    }
}

/// Two BBANs are considered equal if their bank code and
/// account number are equal.
impl PartialEq for Bban {
    fn eq(&self, other: &Self) -> bool {
        self.bank == other.bank && self.account == other.account
    }
}

/// **An International Bank Account Number**
///
/// Country code, IBAN check key, and the national BBAN.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Iban {
    pub country: String,
    pub key: String,
    pub bban: Bban,
}

impl Iban {
    /// **Creates a new `Iban` with given country code, IBAN key and BBAN.**
    pub fn new(country: impl Into<String>, key: impl Into<String>, bban: Bban) -> Self {
        Iban {
            country: country.into(),
            key: key.into(),
            bban,
        }
    }

    /// **Formats this IBAN for display.**
    ///
    /// The six display segments - country code, IBAN key, bank code,
    /// counter code, account number and BBAN key - are joined by
    /// `separator`, with no leading or trailing separator.
    ///
    /// Pure string construction: no validation, no failure mode.
    pub fn format(&self, separator: &str) -> String {
        [
            self.country.as_str(),
            self.key.as_str(),
            self.bban.bank.as_str(),
            self.bban.counter.as_str(),
            self.bban.account.as_str(),
            self.bban.key.as_str(),
        ]
        .join(separator)
    }

    /// **Formats this IBAN in the electronic layout: no separators.**
    pub fn to_electronic_format(&self) -> String {
        self.format("")
    }

    /// **Formats this IBAN in the paper layout: segments separated
    /// by single spaces.**
    pub fn to_paper_format(&self) -> String {
        self.format(" ")
    }
}

/// Two IBANs are considered equal if their BBANs are equal.
impl PartialEq for Iban {
    fn eq(&self, other: &Self) -> bool {
        self.bban == other.bban
    }
}
