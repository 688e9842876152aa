use crate::render;
use crate::DEFAULT_BASE_URL;
use reqwest::{Client, Url};
use std::error::Error;
use transfers_common::cli::constants::*;
use transfers_common::cli::helpers::*;
use transfers_common::transfer::BankTransfer;

/// Which layout the fetched IBANs are rendered in.
enum IbanLayout {
    Electronic,
    Paper,
}

pub async fn main_loop(base_url: Url) -> Result<(), Box<dyn Error>> {
    let client = Client::new();

    loop {
        if let Some(line) = read_from_stdin(PROMPT) {
            let words = line.split_whitespace().collect::<Vec<_>>();
            let cmd = words[0].to_lowercase();

            match cmd.as_str() {
                HELP | "h" => help(),
                LAST | "l" => {
                    list_transfers(
                        &client,
                        &base_url,
                        "bankTransfer/last",
                        IbanLayout::Electronic,
                    )
                    .await?
                }
                ALL | "a" => {
                    list_transfers(
                        &client,
                        &base_url,
                        "bankTransfer/all",
                        IbanLayout::Electronic,
                    )
                    .await?
                }
                PAPER | "p" => {
                    list_transfers(&client, &base_url, "bankTransfer/all", IbanLayout::Paper)
                        .await?
                }
                QUIT | "q" => break,
                _ => println!("Unrecognized command; try `help`."),
            }
        }
    }

    Ok(())
}

/// **Get base URL**
///
/// Tries to create a URL from the provided argument.
///
/// If that is not possible, falls back to a default.
///
/// It returns a URL in any case.
///
/// This is meant to be a base URL for all operations.
///
/// - If the provided argument is the `None` variant,
///   returns a default value as the base URL.
/// - If it's a `String`, tries to parse it into URL.
///   - If it's a valid URL string, returns it as URL.
///   - If it's a malformed URL string, returns the default.
///
/// The default value is [`DEFAULT_BASE_URL`].
pub fn get_base_url(base_url: Option<String>) -> Url {
    let base_url = base_url.unwrap_or_else(|| {
        println!(
            "No CLI base URL provided; using default: {}",
            DEFAULT_BASE_URL
        );
        DEFAULT_BASE_URL.into()
    });

    let base_url = Url::parse(base_url.as_str()).unwrap_or_else(|_| {
        println!(
            "Provided base URL could not be parsed; using default: {}",
            DEFAULT_BASE_URL
        );
        Url::parse(DEFAULT_BASE_URL).unwrap()
    });

    base_url
}

/// **Fetches transfers from `path` and prints them as a list.**
///
/// One line per transfer, in fixed label order: request date, amount,
/// execution date, origin IBAN, destination IBAN.
///
/// A non-2xx response is printed to stderr and the loop carries on;
/// there is no retry.
async fn list_transfers(
    client: &Client,
    base_url: &Url,
    path: &str,
    layout: IbanLayout,
) -> Result<(), Box<dyn Error>> {
    let url = base_url.join(path)?;
    let response = client.get(url).send().await?;

    if response.status().is_success() {
        let transfers: Vec<BankTransfer> = response.json().await?;
        if transfers.is_empty() {
            println!("No transfers.");
        } else {
            let rendered = match layout {
                IbanLayout::Electronic => render::render_transfer_list(&transfers),
                IbanLayout::Paper => render::render_transfer_list_paper(&transfers),
            };
            println!("Bank transfers:\n{}", rendered);
        }
    } else {
        eprintln!(
            "[ERROR] {} \"{}\"",
            response.status(),
            response.text().await?
        );
    }

    Ok(())
}
