//! Clinical note summarization: upstream client, mock fallback, and the
//! policy that arbitrates between them.

pub mod assist;
pub mod client;
pub mod mock;
pub mod types;

pub use assist::{assist, resolve_text, DEFAULT_NOTE};
pub use client::{Summarize, SummarizerClient};
pub use mock::MockSummarizer;
pub use types::AssistOutcome;
