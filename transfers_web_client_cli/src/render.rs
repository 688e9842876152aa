//! Turns transfers into the text list the client prints.

use transfers_common::iban::Iban;
use transfers_common::transfer::BankTransfer;

/// Dates render the way the backend serializes them.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn line(transfer: &BankTransfer, iban_format: fn(&Iban) -> String) -> String {
    format!(
        "Request date: {}, Amount: {}, Execution date: {}, Origin IBAN: {}, Destination IBAN: {}",
        transfer.request_date.format(DATE_FORMAT),
        transfer.amount,
        transfer.execution_date.format(DATE_FORMAT),
        iban_format(&transfer.origin),
        iban_format(&transfer.destination),
    )
}

/// **Formats a single transfer as one list line.**
///
/// Fixed label order: request date, amount, execution date,
/// origin IBAN, destination IBAN; both IBANs in electronic format.
pub fn format_transfer_line(transfer: &BankTransfer) -> String {
    line(transfer, Iban::to_electronic_format)
}

/// **Formats a single transfer as one list line, IBANs in paper format.**
pub fn format_transfer_line_paper(transfer: &BankTransfer) -> String {
    line(transfer, Iban::to_paper_format)
}

fn render_list(transfers: &[BankTransfer], format: fn(&BankTransfer) -> String) -> String {
    transfers
        .iter()
        .map(|transfer| format!("- {}", format(transfer)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// **Renders a list of transfers, one line per transfer.**
///
/// Empty input renders as the empty string.
pub fn render_transfer_list(transfers: &[BankTransfer]) -> String {
    render_list(transfers, format_transfer_line)
}

/// **Renders a list of transfers with IBANs in paper format.**
pub fn render_transfer_list_paper(transfers: &[BankTransfer]) -> String {
    render_list(transfers, format_transfer_line_paper)
}
