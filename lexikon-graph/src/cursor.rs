//! Read-only contracts between the graph backend and the indexing core.

use std::sync::Arc;

use crate::concept::Concept;
use crate::error::Result;

/// A forward-only pull cursor over concepts.
///
/// The rebuild coordinator drives the cursor strictly sequentially and owns
/// it for the duration of one rebuild; dropping the cursor releases whatever
/// backend resources it holds, so release happens on every exit path,
/// including error paths.
pub trait ConceptCursor {
    /// Pull the next concept. `Ok(None)` signals exhaustion.
    ///
    /// An `Err` means the stream itself is broken (backend fault, lost
    /// connection); the caller treats it as fatal for the current rebuild.
    fn next_concept(&mut self) -> Result<Option<Concept>>;
}

/// Lazy per-concept resolution of transitive collection membership.
///
/// A collection can be nested inside other collections; the transitive set of
/// a concept is its direct memberships plus every collection reachable
/// through nesting. Resolution is infallible by contract: a backend that has
/// to fetch remotely resolves ahead of time or caches, so the document
/// builder itself can never fail.
pub trait CollectionResolver {
    /// Direct memberships plus every collection reachable via nesting,
    /// deduplicated, direct memberships first.
    fn transitive_collections(&self, concept: &Concept) -> Vec<Arc<str>>;
}
