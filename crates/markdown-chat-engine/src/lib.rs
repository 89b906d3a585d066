pub mod conversation;
pub mod parsing;
pub mod streaming;

// Re-export key types for easier usage
pub use conversation::{
    CardData, CardKind, Conversation, ConversationError, Message, MessageId, MessageStatus, Role,
};
pub use parsing::{
    ParsedDoc, blocks::Block, blocks::BlockNode, inline::InlineSpan, parse_document,
    parse_inline_for_block, segment, tokenize,
};
pub use streaming::{StartOutcome, StreamEngine, StreamError, StreamSettings};
