// src/output/publisher.rs
//! Delivers the finished poster to the chat.

use crate::api::parser::parse_delivery;
use crate::api::{MessagingChannel, PhotoUpload};
use crate::constants::CAPTION_MAX_CHARS;
use crate::error::AppError;
use crate::formatting::truncate_for_platform;
use crate::pipeline::Publisher;
use crate::types::{MessageId, PosterArtifact, RenderedCaption};

pub struct ChannelPublisher<M> {
    channel: M,
}

impl<M: MessagingChannel> ChannelPublisher<M> {
    pub fn new(channel: M) -> Self {
        Self { channel }
    }
}

/// Local posters are uploaded as bytes; remote ones are sent by reference.
fn upload_for(poster: &PosterArtifact) -> PhotoUpload {
    match poster {
        PosterArtifact::Local(local) => PhotoUpload::Bytes {
            file_name: local.file_name(),
            bytes: local.bytes().as_bytes().to_vec(),
        },
        PosterArtifact::Remote(url) => PhotoUpload::Url(url.clone()),
    }
}

impl<M: MessagingChannel> Publisher for ChannelPublisher<M> {
    fn publish(
        &self,
        poster: &PosterArtifact,
        caption: &RenderedCaption,
    ) -> Result<MessageId, AppError> {
        let caption = truncate_for_platform(caption.as_str(), CAPTION_MAX_CHARS);
        let response = self
            .channel
            .send_photo(&upload_for(poster), &caption)
            .map_err(AppError::in_delivery_stage)?;
        let message_id = parse_delivery(response)?;
        log::info!("Poster delivered as message {}", message_id);
        Ok(message_id)
    }
}
