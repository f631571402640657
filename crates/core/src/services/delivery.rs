use tracing::info;

use crate::errors::CoreError;
use crate::providers::traits::ChatApi;

/// Telegram's hard limit on `sendMessage` text length, in characters.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Sends arbitrary-length text through a [`ChatApi`], splitting it into
/// protocol-sized parts on line boundaries when needed.
///
/// Delivery is all-or-nothing from the caller's point of view: the first
/// rejected part fails the operation. Parts already accepted by the API
/// stay sent — there is no recall.
pub struct DeliveryService {
    api: Box<dyn ChatApi>,
}

impl DeliveryService {
    pub fn new(api: Box<dyn ChatApi>) -> Self {
        Self { api }
    }

    pub async fn deliver(&self, chat_id: &str, text: &str) -> Result<(), CoreError> {
        let parts = split_message(text);
        if parts.len() > 1 {
            info!(parts = parts.len(), "report exceeds message limit, sending in parts");
        }

        for part in &parts {
            let reply = self.api.send_message(chat_id, part).await?;
            if !reply.is_success() {
                return Err(CoreError::Delivery {
                    status: reply.status,
                    body: reply.body,
                });
            }
        }

        Ok(())
    }
}

/// Split `text` into messages that fit [`MAX_MESSAGE_LEN`].
///
/// Short input passes through untouched. Long input is split on newline
/// boundaries: lines accumulate greedily into a buffer which is flushed
/// (trimmed, skipped when empty) before it would overflow. A single line
/// longer than the limit flushes the buffer and is sent as fixed-size
/// character chunks of its own.
pub fn split_message(text: &str) -> Vec<String> {
    if text.chars().count() <= MAX_MESSAGE_LEN {
        return vec![text.to_string()];
    }

    let mut parts = Vec::new();
    let mut buffer = String::new();
    let mut buffer_chars = 0usize;

    for line in text.split('\n') {
        let line_chars = line.chars().count();

        if buffer_chars + line_chars + 1 > MAX_MESSAGE_LEN {
            flush_buffer(&mut buffer, &mut parts);
            buffer_chars = 0;

            if line_chars > MAX_MESSAGE_LEN {
                parts.extend(chunk_chars(line, MAX_MESSAGE_LEN));
                continue;
            }
        }

        if !buffer.is_empty() {
            buffer.push('\n');
            buffer_chars += 1;
        }
        buffer.push_str(line);
        buffer_chars += line_chars;
    }

    flush_buffer(&mut buffer, &mut parts);
    parts
}

/// Push the trimmed buffer as a part, unless it trims to nothing.
fn flush_buffer(buffer: &mut String, parts: &mut Vec<String>) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
    buffer.clear();
}

fn chunk_chars(line: &str, size: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for ch in line.chars() {
        current.push(ch);
        count += 1;
        if count == size {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
