use std::time::Duration;

use bon::Builder;
use serde::Serialize;

use crate::{
    client::DEFAULT_TIMEOUT,
    telegram::objects::{ChatId, Message},
};

/// Telegram bot API method.
pub trait Method: Serialize {
    /// Method name.
    const NAME: &'static str;

    type Response;

    fn timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }
}

/// [Send a text message][1].
///
/// [1]: https://core.telegram.org/bots/api#sendmessage
#[derive(Builder, Serialize)]
#[must_use]
pub struct SendMessage<'a> {
    pub chat_id: &'a ChatId,
    pub text: &'a str,
}

impl Method for SendMessage<'_> {
    const NAME: &'static str = "sendMessage";

    type Response = Message;
}
