//! Index rebuild coordination.
//!
//! One rebuild invocation owns the target directory from precondition check
//! to writer close: prepare the directory, build the analysis routing, open a
//! writer, stream the cursor to exhaustion building and submitting one record
//! at a time, then finalize the generation. Per-document submit failures are
//! counted and logged, never fatal; configuration and directory precondition
//! violations fail fast before anything is written.

use std::path::Path;

use lexikon_analysis::FieldRouting;
use lexikon_graph::{CollectionResolver, ConceptCursor};

use crate::builder::RecordBuilder;
use crate::config::RebuildConfig;
use crate::error::{IndexError, Result};
use crate::manifest::IndexManifest;
use crate::writer::{IndexWriter, RecordSink};

/// Streaming progress is logged every this many indexed concepts.
const PROGRESS_EVERY: u64 = 10_000;

/// Phases of one rebuild invocation, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildPhase {
    PreparingDirectory,
    AnalyzingLanguages,
    WriterOpen,
    Streaming,
    Closing,
    Done,
    Failed,
}

impl RebuildPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            RebuildPhase::PreparingDirectory => "preparing_directory",
            RebuildPhase::AnalyzingLanguages => "analyzing_languages",
            RebuildPhase::WriterOpen => "writer_open",
            RebuildPhase::Streaming => "streaming",
            RebuildPhase::Closing => "closing",
            RebuildPhase::Done => "done",
            RebuildPhase::Failed => "failed",
        }
    }
}

/// Summary of one completed rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildSummary {
    /// Concepts whose records landed in the generation.
    pub indexed: u64,
    /// Concepts skipped because their record could not be submitted.
    pub errors: u64,
    /// Generation number the rebuild produced.
    pub generation: u64,
}

/// Drives full rebuilds of an index directory.
///
/// Rebuilds are destructive of prior directory state and idempotent: the
/// produced generation is a function of the concept stream and the
/// configuration, so a failed run can simply be re-invoked.
#[derive(Debug, Clone)]
pub struct IndexRebuilder {
    config: RebuildConfig,
}

impl IndexRebuilder {
    pub fn new(config: RebuildConfig) -> Self {
        IndexRebuilder { config }
    }

    pub fn config(&self) -> &RebuildConfig {
        &self.config
    }

    /// Rebuild the index at `target` from `cursor`, writing on-disk segments.
    pub fn rebuild<C, R>(
        &self,
        cursor: C,
        resolver: &R,
        target: impl AsRef<Path>,
    ) -> Result<RebuildSummary>
    where
        C: ConceptCursor,
        R: CollectionResolver + ?Sized,
    {
        self.rebuild_with(cursor, resolver, target, IndexWriter::create)
    }

    /// Rebuild with a caller-supplied record sink.
    ///
    /// The factory receives the prepared directory, the generation number and
    /// the analysis routing, and returns the sink the streaming loop submits
    /// records to. [`rebuild`](Self::rebuild) passes [`IndexWriter::create`];
    /// tests and embedders can substitute their own storage.
    pub fn rebuild_with<C, R, W, F>(
        &self,
        cursor: C,
        resolver: &R,
        target: impl AsRef<Path>,
        factory: F,
    ) -> Result<RebuildSummary>
    where
        C: ConceptCursor,
        R: CollectionResolver + ?Sized,
        W: RecordSink,
        F: FnOnce(&Path, u64, FieldRouting) -> Result<W>,
    {
        let target = target.as_ref();
        let span = tracing::info_span!("index_rebuild", target = %target.display());
        let _guard = span.enter();

        let result = self.run(cursor, resolver, target, factory);
        match &result {
            Ok(summary) => {
                if self.config.verbose {
                    tracing::info!(
                        phase = RebuildPhase::Done.as_str(),
                        indexed = summary.indexed,
                        errors = summary.errors,
                        generation = summary.generation,
                        "index rebuild complete"
                    );
                }
            }
            Err(e) => {
                tracing::error!(
                    phase = RebuildPhase::Failed.as_str(),
                    %e,
                    "index rebuild failed"
                );
            }
        }
        result
    }

    fn run<C, R, W, F>(
        &self,
        mut cursor: C,
        resolver: &R,
        target: &Path,
        factory: F,
    ) -> Result<RebuildSummary>
    where
        C: ConceptCursor,
        R: CollectionResolver + ?Sized,
        W: RecordSink,
        F: FnOnce(&Path, u64, FieldRouting) -> Result<W>,
    {
        // ---- Phase 1: prepare the target directory ----
        self.log_phase(RebuildPhase::PreparingDirectory);
        if target.as_os_str().is_empty() {
            return Err(IndexError::InvalidConfig(
                "index target path is empty".to_string(),
            ));
        }
        let generation = prepare_directory(target)?;

        // ---- Phase 2: build the analysis routing ----
        self.log_phase(RebuildPhase::AnalyzingLanguages);
        let routing = FieldRouting::for_languages(&self.config.languages);
        if self.config.verbose {
            tracing::info!(languages = ?routing.covered_languages(), "analysis routing ready");
        }

        // ---- Phase 3: open the writer for a fresh generation ----
        self.log_phase(RebuildPhase::WriterOpen);
        let mut sink = factory(target, generation, routing)?;

        // ---- Phase 4: stream the cursor to exhaustion ----
        self.log_phase(RebuildPhase::Streaming);
        let builder = RecordBuilder::new(self.config.transitive_collections);
        let mut indexed: u64 = 0;
        let mut errors: u64 = 0;
        while let Some(concept) = cursor.next_concept()? {
            let record = builder.build(&concept, resolver);
            match sink.submit(&record) {
                Ok(()) => {
                    indexed += 1;
                    tracing::debug!(uri = %concept.uri(), "indexed concept");
                    if self.config.verbose && indexed % PROGRESS_EVERY == 0 {
                        tracing::info!(indexed, errors, "rebuild progress");
                    }
                }
                Err(e) => {
                    errors += 1;
                    tracing::warn!(uri = %concept.uri(), %e, "failed to index concept");
                }
            }
        }
        drop(cursor);

        // ---- Phase 5: finalize the generation ----
        self.log_phase(RebuildPhase::Closing);
        sink.close()?;

        Ok(RebuildSummary {
            indexed,
            errors,
            generation,
        })
    }

    fn log_phase(&self, phase: RebuildPhase) {
        if self.config.verbose {
            tracing::info!(phase = phase.as_str(), "rebuild phase");
        }
    }
}

/// Resolve the target directory for a fresh generation.
///
/// A missing directory is created recursively. An existing directory has its
/// contents removed entry by entry, with undeletable entries logged and
/// skipped. A target that exists as a non-directory is rejected before any
/// deletion is attempted. Returns the generation number the new build carries.
fn prepare_directory(target: &Path) -> Result<u64> {
    if !target.exists() {
        std::fs::create_dir_all(target).map_err(|source| IndexError::CreateDir {
            path: target.to_path_buf(),
            source,
        })?;
        return Ok(1);
    }
    if !target.is_dir() {
        return Err(IndexError::NotADirectory {
            path: target.to_path_buf(),
        });
    }

    // The previous generation number has to survive the wipe.
    let generation = IndexManifest::load(target)
        .map(|manifest| manifest.generation + 1)
        .unwrap_or(1);

    let entries = std::fs::read_dir(target).map_err(|e| IndexError::StorageRead(e.to_string()))?;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(%e, "failed to read stale index entry");
                continue;
            }
        };
        let path = entry.path();
        let removed = if path.is_dir() {
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };
        if let Err(e) = removed {
            tracing::warn!(path = %path.display(), %e, "failed to remove stale index entry");
        }
    }
    Ok(generation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexikon_graph::{Concept, MemoryGraph};

    fn graph_with(concepts: &[Concept]) -> MemoryGraph {
        let mut graph = MemoryGraph::new();
        for concept in concepts {
            graph.insert_concept(concept.clone());
        }
        graph
    }

    #[test]
    fn test_empty_target_path_is_invalid_config() {
        let graph = MemoryGraph::new();
        let rebuilder = IndexRebuilder::new(RebuildConfig::default().with_verbose(false));
        let err = rebuilder
            .rebuild(graph.concepts(), &graph, "")
            .unwrap_err();
        assert!(matches!(err, IndexError::InvalidConfig(_)));
    }

    #[test]
    fn test_file_target_rejected_without_deletion() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("occupied");
        std::fs::write(&file_path, b"keep me").unwrap();

        let graph = graph_with(&[Concept::new("http://example.org/c1")]);
        let rebuilder = IndexRebuilder::new(RebuildConfig::default().with_verbose(false));
        let err = rebuilder
            .rebuild(graph.concepts(), &graph, &file_path)
            .unwrap_err();

        assert!(matches!(err, IndexError::NotADirectory { .. }));
        // The occupant is untouched.
        assert_eq!(std::fs::read(&file_path).unwrap(), b"keep me");
    }

    #[test]
    fn test_missing_target_created_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("index");

        let graph = graph_with(&[Concept::new("http://example.org/c1")]);
        let rebuilder = IndexRebuilder::new(RebuildConfig::default().with_verbose(false));
        let summary = rebuilder.rebuild(graph.concepts(), &graph, &target).unwrap();

        assert_eq!(summary.indexed, 1);
        assert_eq!(summary.errors, 0);
        assert_eq!(summary.generation, 1);
        assert!(target.join("manifest.json").exists());
    }

    #[test]
    fn test_generation_number_advances_across_rebuilds() {
        let dir = tempfile::tempdir().unwrap();
        let graph = graph_with(&[Concept::new("http://example.org/c1")]);
        let rebuilder = IndexRebuilder::new(RebuildConfig::default().with_verbose(false));

        let first = rebuilder.rebuild(graph.concepts(), &graph, dir.path()).unwrap();
        let second = rebuilder.rebuild(graph.concepts(), &graph, dir.path()).unwrap();
        assert_eq!(first.generation, 1);
        assert_eq!(second.generation, 2);
    }

    #[test]
    fn test_stale_directory_contents_are_cleared() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stale.txt"), b"old").unwrap();
        std::fs::create_dir(dir.path().join("stale_dir")).unwrap();
        std::fs::write(dir.path().join("stale_dir").join("junk"), b"old").unwrap();

        let graph = graph_with(&[Concept::new("http://example.org/c1")]);
        let rebuilder = IndexRebuilder::new(RebuildConfig::default().with_verbose(false));
        rebuilder.rebuild(graph.concepts(), &graph, dir.path()).unwrap();

        assert!(!dir.path().join("stale.txt").exists());
        assert!(!dir.path().join("stale_dir").exists());
        assert!(dir.path().join("manifest.json").exists());
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(RebuildPhase::PreparingDirectory.as_str(), "preparing_directory");
        assert_eq!(RebuildPhase::Done.as_str(), "done");
    }
}
