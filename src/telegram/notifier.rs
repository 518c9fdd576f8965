use crate::{
    prelude::*,
    telegram::{
        methods::SendMessage,
        objects::{ChatId, Message},
        Telegram,
    },
};

/// Delivers notifications to the configured chat.
#[must_use]
pub struct Notifier {
    telegram: Telegram,
    chat_id: ChatId,
}

impl Notifier {
    pub const fn new(telegram: Telegram, chat_id: ChatId) -> Self {
        Self { telegram, chat_id }
    }

    /// Send one text message. No internal retry: a failed delivery surfaces
    /// to the caller.
    #[instrument(skip_all)]
    pub async fn notify(&self, text: &str) -> Result<Message> {
        let message = self
            .telegram
            .call(&SendMessage::builder().chat_id(&self.chat_id).text(text).build())
            .await?;
        info!(message.id, "✉️ Delivered");
        Ok(message)
    }
}
