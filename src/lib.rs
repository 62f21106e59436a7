//! A term dictionary for RDF stores.
//!
//! [`Coder`] maps every RDF [`Term`] to a 64-bit [`TermId`] and back.
//! Well-known vocabulary IRIs resolve to statically reserved ids without any
//! I/O; all other terms get ids minted from persisted counters and recorded
//! in two inverse tables of a [`Backend`](backend::Backend).

pub mod allocator;
pub mod backend;
pub mod cache;
pub mod coder;
pub mod config;
pub mod error;
pub mod term;
pub mod vocabulary;

pub use crate::coder::{Coder, CoderStats};
pub use crate::config::Config;
pub use crate::error::{BackendError, CoderError};
pub use crate::term::{EncodedQuad, Literal, Quad, Term, TermId};
pub use crate::vocabulary::VocabularyRegistry;
