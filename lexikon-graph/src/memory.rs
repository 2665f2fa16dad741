//! In-memory graph backend.
//!
//! [`MemoryGraph`] holds a whole thesaurus in memory and implements both
//! sides of the indexing contract: a concept cursor and a collection
//! resolver. It is the backend the test suites run against and is also
//! suitable for embedders that load a vocabulary once and index it.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::Arc;

use crate::concept::Concept;
use crate::cursor::{CollectionResolver, ConceptCursor};
use crate::error::Result;

/// An in-memory thesaurus.
///
/// Concepts are keyed by URI in a `BTreeMap`, so cursors yield them in a
/// stable URI order — rebuilds over the same graph see the same stream.
#[derive(Debug, Default, Clone)]
pub struct MemoryGraph {
    concepts: BTreeMap<Arc<str>, Concept>,
    collection_parents: BTreeMap<Arc<str>, BTreeSet<Arc<str>>>,
}

impl MemoryGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        MemoryGraph::default()
    }

    /// Insert a concept, replacing any previous concept with the same URI.
    pub fn insert_concept(&mut self, concept: Concept) {
        self.concepts.insert(Arc::clone(concept.uri()), concept);
    }

    /// Record that `child` collection is a member of `parent` collection.
    pub fn nest_collection(&mut self, child: impl Into<Arc<str>>, parent: impl Into<Arc<str>>) {
        self.collection_parents
            .entry(child.into())
            .or_default()
            .insert(parent.into());
    }

    /// Number of concepts held.
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Whether the graph holds no concepts.
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// A cursor over a snapshot of all concepts, in URI order.
    pub fn concepts(&self) -> MemoryCursor {
        MemoryCursor {
            remaining: self.concepts.values().cloned().collect(),
        }
    }
}

impl CollectionResolver for MemoryGraph {
    /// Breadth-first walk over parent links, starting from the concept's
    /// direct memberships. A visited set makes membership cycles terminate.
    fn transitive_collections(&self, concept: &Concept) -> Vec<Arc<str>> {
        let mut seen: BTreeSet<Arc<str>> = BTreeSet::new();
        let mut ordered: Vec<Arc<str>> = Vec::new();
        let mut queue: VecDeque<Arc<str>> = VecDeque::new();

        for collection in concept.collections() {
            if seen.insert(Arc::clone(collection)) {
                ordered.push(Arc::clone(collection));
                queue.push_back(Arc::clone(collection));
            }
        }

        while let Some(current) = queue.pop_front() {
            if let Some(parents) = self.collection_parents.get(&current) {
                for parent in parents {
                    if seen.insert(Arc::clone(parent)) {
                        ordered.push(Arc::clone(parent));
                        queue.push_back(Arc::clone(parent));
                    }
                }
            }
        }

        ordered
    }
}

/// Cursor over a snapshot of a [`MemoryGraph`]. Never fails.
#[derive(Debug)]
pub struct MemoryCursor {
    remaining: VecDeque<Concept>,
}

impl ConceptCursor for MemoryCursor {
    fn next_concept(&mut self) -> Result<Option<Concept>> {
        Ok(self.remaining.pop_front())
    }
}
