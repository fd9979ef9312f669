//! Loqui — a line-oriented conversational agent with a teachable,
//! file-backed knowledge base.
//!
//! Each utterance is tokenized by the chat harness and classified into one of
//! a fixed set of intents (exit, smalltalk, load, save, reset, question); the
//! matching handler consults or mutates the in-memory knowledge store and
//! produces a reply. Facts are keyed by (entity, question kind) and can be
//! bulk-loaded from and saved to a section-based text format:
//!
//! ```text
//! [what]
//! sun=a star
//!
//! [where]
//! sun=at the center of the solar system
//! ```
//!
//! When asked a question it cannot answer, the agent asks the user for the
//! answer and remembers it for the rest of the session (or until `reset`).
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`knowledge`] — The knowledge core: question kinds, the fact store, and the file codec
//! - [`session`] — Intent classification and the per-intent handlers

pub mod config;
pub mod knowledge;
pub mod session;
