//! Sprite-sheet indexing and the shared animation registry.
//!
//! A sprite sheet is a dense grid: one row per animation phase, stacked in the
//! order the phases are declared, and one column per frame. [`AnimationTable`]
//! precomputes every source rectangle of such a sheet in a single pass so that
//! draw-time lookups are plain slice indexing.
//!
//! [`AnimationStore`] keeps one immutable table per [`CreatureKind`]. Every
//! entity of the same kind holds a clone of the same `Arc`.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::warn;
use rustc_hash::FxHashMap;

use crate::components::creature::CreatureKind;

/// Static descriptor of one named animation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationPhase {
    pub name: &'static str,
    pub frame_count: usize,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl AnimationPhase {
    pub const fn new(
        name: &'static str,
        frame_count: usize,
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        Self {
            name,
            frame_count,
            frame_width,
            frame_height,
        }
    }
}

/// Rectangle in pixel space. Used both for source regions of a bitmap and
/// destination regions of the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpriteRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl SpriteRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Phase name -> ordered frame rectangles, built once and read-only after.
#[derive(Debug, Clone, Default)]
pub struct AnimationTable {
    sequences: FxHashMap<String, Vec<SpriteRect>>,
}

impl AnimationTable {
    /// Build the complete table for a sheet whose rows follow `phases` order.
    ///
    /// Phases with zero frames or zero-sized frames are skipped (with a
    /// warning) but still occupy their row, so later rows keep their offsets.
    pub fn from_phases(phases: &[AnimationPhase]) -> Self {
        let mut sequences = FxHashMap::default();
        for (row, phase) in phases.iter().enumerate() {
            if phase.frame_count == 0 || phase.frame_width == 0 || phase.frame_height == 0 {
                warn!(
                    "Skipping degenerate animation phase '{}' ({} frames, {}x{})",
                    phase.name, phase.frame_count, phase.frame_width, phase.frame_height
                );
                continue;
            }
            let y = row as f32 * phase.frame_height as f32;
            let frames: Vec<SpriteRect> = (0..phase.frame_count)
                .map(|frame| {
                    SpriteRect::new(
                        frame as f32 * phase.frame_width as f32,
                        y,
                        phase.frame_width as f32,
                        phase.frame_height as f32,
                    )
                })
                .collect();
            if sequences.insert(phase.name.to_string(), frames).is_some() {
                warn!("Duplicate animation phase '{}', last row wins", phase.name);
            }
        }
        Self { sequences }
    }

    /// All frames of a phase, or `None` when the phase is unknown.
    pub fn frames(&self, phase: &str) -> Option<&[SpriteRect]> {
        self.sequences.get(phase).map(Vec::as_slice)
    }

    pub fn frame_count(&self, phase: &str) -> Option<usize> {
        self.sequences.get(phase).map(Vec::len)
    }

    /// Source rectangle for `frame_index` of `phase`.
    ///
    /// `None` means "no animation data": the phase is unknown or the index is
    /// past the end of the sequence. Callers skip the draw.
    pub fn rect_for(&self, phase: &str, frame_index: usize) -> Option<SpriteRect> {
        self.frames(phase)?.get(frame_index).copied()
    }

    pub fn contains(&self, phase: &str) -> bool {
        self.sequences.contains_key(phase)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// Central registry of animation tables keyed by creature kind.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub tables: FxHashMap<CreatureKind, Arc<AnimationTable>>,
}

impl AnimationStore {
    /// Precompute the table of every known creature kind.
    pub fn with_all_kinds() -> Self {
        let tables = CreatureKind::ALL
            .iter()
            .map(|kind| (*kind, Arc::new(AnimationTable::from_phases(kind.phases()))))
            .collect();
        Self { tables }
    }

    /// Shared table for `kind`, built on first request if missing.
    pub fn table(&mut self, kind: CreatureKind) -> Arc<AnimationTable> {
        self.tables
            .entry(kind)
            .or_insert_with(|| Arc::new(AnimationTable::from_phases(kind.phases())))
            .clone()
    }
}
