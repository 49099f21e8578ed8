use contracts::domain::a001_client::ClientId;
use contracts::usecases::u103_order_chat::{ChatRequest, ChatResponse};
use leptos::prelude::*;
use uuid::Uuid;

use crate::shared::api_utils::ApiError;

pub const REPLY_ERROR: &str = "Lo siento, hubo un error al procesar tu mensaje.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    fn new(sender: Sender, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text,
        }
    }
}

/// Reply the log is waiting for; stale once the log is rescoped
#[derive(Clone, Debug, PartialEq)]
pub struct PendingReply {
    seq: u64,
    pub request: ChatRequest,
}

/// Conversation about the active client's orders
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    pub scope: Option<ClientId>,
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    seq: u64,
}

impl ChatLog {
    /// Switch to another client's orders. The log starts over for a new client.
    pub fn rescope(&mut self, scope: Option<ClientId>) -> bool {
        if self.scope == scope {
            return false;
        }
        self.scope = scope;
        self.messages.clear();
        self.pending = false;
        self.seq += 1;
        true
    }

    /// Append the user's message and return the request to send.
    ///
    /// Blank text, or text sent while a reply is pending, is ignored.
    pub fn begin_send(&mut self, text: &str, order_ids: Vec<i64>) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage::new(Sender::User, text.to_string()));
        self.pending = true;
        Some(PendingReply {
            seq: self.seq,
            request: ChatRequest {
                order_ids,
                message: text.to_string(),
            },
        })
    }

    /// Append the reply, or the fallback text on failure. Returns false for a stale reply.
    pub fn finish_reply(&mut self, pending: &PendingReply, result: Result<ChatResponse, ApiError>) -> bool {
        if pending.seq != self.seq {
            return false;
        }
        let text = match result {
            Ok(response) => response.reply,
            Err(_) => REPLY_ERROR.to_string(),
        };
        self.messages.push(ChatMessage::new(Sender::Ai, text));
        self.pending = false;
        true
    }
}

pub fn create_state() -> RwSignal<ChatLog> {
    RwSignal::new(ChatLog::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str) -> Result<ChatResponse, ApiError> {
        Ok(ChatResponse {
            reply: text.to_string(),
        })
    }

    #[test]
    fn test_send_and_reply() {
        let mut log = ChatLog::default();
        log.rescope(Some(1));

        let pending = log.begin_send("  ¿Cuándo compra?  ", vec![1001, 1002]).unwrap();
        assert_eq!(pending.request.message, "¿Cuándo compra?");
        assert_eq!(pending.request.order_ids, vec![1001, 1002]);
        assert_eq!(log.messages.len(), 1);
        assert_eq!(log.messages[0].sender, Sender::User);
        assert!(log.pending);

        assert!(log.finish_reply(&pending, reply("A principios de mes")));
        assert_eq!(log.messages.len(), 2);
        assert_eq!(log.messages[1].sender, Sender::Ai);
        assert_eq!(log.messages[1].text, "A principios de mes");
        assert!(!log.pending);
        assert_ne!(log.messages[0].id, log.messages[1].id);
    }

    #[test]
    fn test_blank_and_busy_input_ignored() {
        let mut log = ChatLog::default();
        assert!(log.begin_send("   ", vec![1]).is_none());
        assert!(log.messages.is_empty());

        let _pending = log.begin_send("hola", vec![1]).unwrap();
        assert!(log.begin_send("otra", vec![1]).is_none());
        assert_eq!(log.messages.len(), 1);
    }

    #[test]
    fn test_failed_reply_appends_fallback() {
        let mut log = ChatLog::default();
        let pending = log.begin_send("hola", vec![1]).unwrap();
        assert!(log.finish_reply(&pending, Err(ApiError::Network("offline".into()))));
        assert_eq!(log.messages[1].text, REPLY_ERROR);
        assert!(!log.pending);
    }

    #[test]
    fn test_rescope_clears_and_drops_stale_reply() {
        let mut log = ChatLog::default();
        log.rescope(Some(1));
        let pending = log.begin_send("hola", vec![1]).unwrap();

        assert!(log.rescope(Some(2)));
        assert!(log.messages.is_empty());
        assert!(!log.pending);

        assert!(!log.finish_reply(&pending, reply("tarde")));
        assert!(log.messages.is_empty());

        assert!(!log.rescope(Some(2)));
    }
}
