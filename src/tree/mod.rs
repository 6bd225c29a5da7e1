//! Directory tree walking
//!
//! `TreeWalker` turns a subtree into a flat, pre-order list of `Entry`
//! descriptors that the prune classifier consumes in order.

mod entry;
mod walker;

pub use entry::{Entry, EntryKind};
pub use walker::TreeWalker;
