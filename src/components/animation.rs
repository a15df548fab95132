use bevy_ecs::prelude::Component;

/// Result of one [`AnimationCursor::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStep {
    /// The active state has no frames; skip drawing this entity.
    NoData,
    /// Throttled tick; the previous frame stays current.
    Waiting,
    /// A new frame became current.
    Due(usize),
}

/// Frame ordinal advanced under a "frozen frames" throttle.
///
/// Every call to [`advance`](Self::advance) counts one tick; only every
/// `frozen_frames`-th tick moves to the next frame, wrapping at the end of the
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCursor {
    frame_counter: u32,
    frame_index: usize,
    frozen_frames: u32,
}

impl AnimationCursor {
    pub fn new(frozen_frames: u32) -> Self {
        Self {
            frame_counter: 0,
            frame_index: 0,
            frozen_frames: frozen_frames.max(1),
        }
    }

    /// Count one tick against a sequence of `sequence_len` frames.
    ///
    /// `None` (or an empty sequence) leaves the cursor untouched and reports
    /// [`CursorStep::NoData`].
    pub fn advance(&mut self, sequence_len: Option<usize>) -> CursorStep {
        let Some(len) = sequence_len.filter(|len| *len > 0) else {
            return CursorStep::NoData;
        };
        if self.frame_index >= len {
            self.frame_index = 0;
        }

        self.frame_counter = (self.frame_counter + 1) % self.frozen_frames;
        if self.frame_counter == 0 {
            self.frame_index = (self.frame_index + 1) % len;
            CursorStep::Due(self.frame_index)
        } else {
            CursorStep::Waiting
        }
    }

    pub fn current_frame(&self) -> usize {
        self.frame_index
    }

    pub fn frozen_frames(&self) -> u32 {
        self.frozen_frames
    }

    pub fn reset(&mut self) {
        self.frame_counter = 0;
        self.frame_index = 0;
    }
}

/// Active animation state of an entity plus its playback cursor.
#[derive(Debug, Clone, Component)]
pub struct Animation {
    state: String,
    pub cursor: AnimationCursor,
}

impl Animation {
    pub fn new(state: impl Into<String>, frozen_frames: u32) -> Self {
        Self {
            state: state.into(),
            cursor: AnimationCursor::new(frozen_frames),
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Switch to `state`. A different name always restarts at frame 0.
    ///
    /// Returns whether the state actually changed.
    pub fn set_state(&mut self, state: &str) -> bool {
        if self.state == state {
            return false;
        }
        self.state = state.to_string();
        self.cursor.reset();
        true
    }
}
