//! EventPay Actor Terminals
//!
//! Role-scoped front ends over the shared ledger: organizers register
//! attendees and manage cards, payment terminals charge them at merchant
//! stands, inquiry terminals answer balance and history questions.
//!
//! Each terminal holds an [`Arc<Ledger>`](eventpay_ledger::Ledger) and
//! delegates every state change to it, so any number of terminals can run
//! concurrently against one event.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod organizer;
pub mod payment;
pub mod inquiry;

pub use inquiry::{BalanceInfo, InquiryTerminal, TransactionHistory};
pub use organizer::Organizer;
pub use payment::PaymentTerminal;
