pub mod cli;
pub mod errors;
pub mod iban;
pub mod transfer;

pub use iban::{Bban, Iban};
pub use transfer::BankTransfer;
