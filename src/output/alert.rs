// src/output/alert.rs
//! Failure notices sent from the top-level boundary.

use crate::api::parser::parse_delivery;
use crate::api::MessagingChannel;
use crate::error::AppError;
use crate::formatting::render_alert;
use crate::pipeline::AlertNotifier;
use crate::types::AlertStatus;

/// Sends a plain-text alert to the same chat the posters go to.
pub struct ChannelAlertNotifier<M> {
    channel: M,
}

impl<M: MessagingChannel> ChannelAlertNotifier<M> {
    pub fn new(channel: M) -> Self {
        Self { channel }
    }
}

impl<M: MessagingChannel> AlertNotifier for ChannelAlertNotifier<M> {
    fn alert(&self, error: &AppError) -> AlertStatus {
        let text = render_alert(error);
        match self.channel.send_message(&text).and_then(parse_delivery) {
            Ok(message_id) => {
                log::info!("Alert sent as message {}", message_id);
                AlertStatus::Sent(message_id)
            }
            Err(e) => {
                log::error!("Could not send failure alert: {}", e);
                AlertStatus::Undelivered
            }
        }
    }
}
