//! Ticket data model, demo factory, and JSON data provider
//!
//! The ticket is the full receipt record rendered to the printer: who rang it
//! up, when, how it was paid, and the line items. It is built once, rendered
//! once, and discarded.

use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset, Local};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

/// Full receipt record rendered to the printer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// User logged into the terminal
    pub login_user: String,

    /// Terminal name
    pub terminal: String,

    /// Transaction date, pre-formatted (YYYY-MM-DD)
    pub date: String,

    /// Transaction time, pre-formatted (HH:MM:SS)
    pub time: String,

    /// Payment date, pre-formatted (YYYY-MM-DD)
    pub payment_date: String,

    /// Payment time, pre-formatted (HH:MM:SS)
    pub payment_time: String,

    /// Payment type (e.g. "credit_card")
    pub payment_type: String,

    /// Secondary metadata (pax count + timestamp)
    pub tag: Tag,

    /// Payments in display order
    pub payments: Vec<Payment>,

    /// Line items in display order
    pub orders: Vec<Order>,
}

/// Secondary metadata pair attached to a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Passenger/party count
    pub pax: u32,

    /// Timestamp associated with the count
    pub pax_time: DateTime<FixedOffset>,
}

/// Reference details embedded in a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInformation {
    /// Reference number
    pub ref_no: u32,

    /// Reference timestamp
    pub ref_time: DateTime<FixedOffset>,
}

/// One payment line on the receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Display name
    pub name: String,

    /// Tendered-amount description
    pub tendered: String,

    /// Reference details
    pub payment_information: PaymentInformation,
}

/// One line item on the receipt
///
/// Quantity and price are free text, preserved as-is for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

impl Ticket {
    /// Build the fixed demo ticket
    ///
    /// Every field except `time` (current wall clock) is a constant.
    pub fn sample() -> Self {
        let paid_at = DateTime::parse_from_rfc3339("2024-10-31T17:35:24+02:00")
            .expect("static demo timestamp");

        Self {
            login_user: "betasve".to_string(),
            terminal: "pos terminal".to_string(),
            date: paid_at.format("%Y-%m-%d").to_string(),
            time: Local::now().format("%H:%M:%S").to_string(),
            payment_date: paid_at.format("%Y-%m-%d").to_string(),
            payment_time: paid_at.format("%H:%M:%S").to_string(),
            payment_type: "credit_card".to_string(),
            tag: Tag {
                pax: 100,
                pax_time: paid_at,
            },
            payments: vec![Payment {
                name: "Payment 1".to_string(),
                tendered: "is tendered".to_string(),
                payment_information: PaymentInformation {
                    ref_no: 101,
                    ref_time: paid_at,
                },
            }],
            orders: vec![Order {
                name: "Fried beans".to_string(),
                quantity: "3".to_string(),
                price: "1.99".to_string(),
            }],
        }
    }

    /// Load a ticket from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .context(format!("Failed to read ticket data from {}", path.display()))?;

        let ticket: Self = serde_json::from_str(&content)
            .context(format!("Failed to parse ticket data from {}", path.display()))?;

        tracing::debug!("Loaded ticket data from: {}", path.display());
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ticket_values() {
        let ticket = Ticket::sample();

        assert_eq!(ticket.login_user, "betasve");
        assert_eq!(ticket.terminal, "pos terminal");
        assert_eq!(ticket.date, "2024-10-31");
        assert_eq!(ticket.payment_date, "2024-10-31");
        assert_eq!(ticket.payment_time, "17:35:24");
        assert_eq!(ticket.payment_type, "credit_card");
        assert_eq!(ticket.tag.pax, 100);
    }

    #[test]
    fn test_sample_ticket_sequences() {
        let ticket = Ticket::sample();

        assert_eq!(ticket.payments.len(), 1);
        assert_eq!(ticket.payments[0].name, "Payment 1");
        assert_eq!(ticket.payments[0].tendered, "is tendered");
        assert_eq!(ticket.payments[0].payment_information.ref_no, 101);

        assert_eq!(ticket.orders.len(), 1);
        assert_eq!(ticket.orders[0].name, "Fried beans");
        assert_eq!(ticket.orders[0].quantity, "3");
        assert_eq!(ticket.orders[0].price, "1.99");
    }

    #[test]
    fn test_sample_ticket_time_is_formatted() {
        let ticket = Ticket::sample();

        // HH:MM:SS
        assert_eq!(ticket.time.len(), 8);
        assert_eq!(ticket.time.matches(':').count(), 2);
    }

    #[test]
    fn test_serialized_field_names() {
        let ticket = Ticket::sample();
        let value = serde_json::to_value(&ticket).unwrap();

        assert!(value.get("login_user").is_some());
        assert!(value.get("payment_type").is_some());
        assert!(value["tag"].get("pax").is_some());
        assert!(value["orders"][0].get("quantity").is_some());
        assert!(value["payments"][0]["payment_information"].get("ref_no").is_some());
    }

    #[test]
    fn test_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticket.json");

        let ticket = Ticket::sample();
        fs::write(&path, serde_json::to_string_pretty(&ticket).unwrap()).unwrap();

        let loaded = Ticket::from_file(&path).unwrap();
        assert_eq!(loaded.login_user, ticket.login_user);
        assert_eq!(loaded.orders.len(), ticket.orders.len());
        assert_eq!(loaded.tag.pax_time, ticket.tag.pax_time);
    }

    #[test]
    fn test_from_file_missing() {
        let result = Ticket::from_file("/nonexistent/ticket.json");
        assert!(result.is_err());
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("Failed to read ticket data"));
    }

    #[test]
    fn test_from_file_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ticket.json");
        fs::write(&path, "not json").unwrap();

        let result = Ticket::from_file(&path);
        assert!(result.is_err());
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("Failed to parse ticket data"));
    }
}
