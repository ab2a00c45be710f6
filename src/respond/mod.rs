//! Answers to questions asked in a node's detail overlay.
//!
//! [`ResponseProvider`] is the seam: the demo plugs in [`ScriptedResponder`],
//! which picks from canned answers per node category. A real backend, or a
//! deterministic test double, implements the same trait.

mod chat;
mod scripted;

pub use chat::{ChatMessage, ChatSession, Role, ERROR_REPLY, GREETING};
pub use scripted::{ScriptedResponder, FALLBACK_RESPONSE};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("response provider unavailable: {0}")]
    Unavailable(String),
}

pub trait ResponseProvider {
    /// Answer `query` asked about a node of category `category`.
    fn respond(&mut self, category: &str, query: &str) -> Result<String, ResponseError>;
}

impl<P: ResponseProvider + ?Sized> ResponseProvider for &mut P {
    fn respond(&mut self, category: &str, query: &str) -> Result<String, ResponseError> {
        (**self).respond(category, query)
    }
}

impl<P: ResponseProvider + ?Sized> ResponseProvider for Box<P> {
    fn respond(&mut self, category: &str, query: &str) -> Result<String, ResponseError> {
        (**self).respond(category, query)
    }
}
