// src/output/mod.rs
//! Everything that leaves the process: the poster file, the delivered
//! photo and failure alerts.

mod alert;
mod publisher;
mod writer;

pub use alert::ChannelAlertNotifier;
pub use publisher::ChannelPublisher;
pub use writer::write_poster;
