use serde::{Deserialize, Serialize};

/// Either a numeric chat identifier or a `@channelusername`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
#[must_use]
pub enum ChatId {
    Integer(i64),
    Username(String),
}

impl From<String> for ChatId {
    fn from(value: String) -> Self {
        match value.parse::<i64>() {
            Ok(id) => Self::Integer(id),
            Err(_) => Self::Username(value),
        }
    }
}

/// This object represents a [message][1].
///
/// [1]: https://core.telegram.org/bots/api#message
#[derive(Debug, Deserialize)]
#[must_use]
pub struct Message {
    #[serde(rename = "message_id")]
    pub id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn chat_id_from_string_ok() -> Result {
        assert_eq!(serde_json::to_string(&ChatId::from("42".to_string()))?, "42");
        assert_eq!(
            serde_json::to_string(&ChatId::from("@channel".to_string()))?,
            r#""@channel""#,
        );
        Ok(())
    }
}
