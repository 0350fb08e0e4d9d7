//! Value objects

pub mod delivery;

pub use delivery::{BulkItemOutcome, BulkSendReport, LinkSendOutcome, SendOutcome, ShortenOutcome};
