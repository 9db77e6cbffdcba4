//! Live preview — overriding the host's style tokens with a palette.
//!
//! The host exposes its tokens as a [`TokenSink`]; the controller is the
//! only writer. It is either idle (no override, base tokens apply) or
//! previewing exactly one palette. Dropping the controller reverts any
//! override still active, so a preview can never outlive the session
//! that opened it.

use crate::palette::Palette;

/// The surface a preview writes through.
///
/// `apply` must overwrite all four role tokens; `clear` must remove the
/// override entirely rather than restore some remembered value, since the
/// controller never stacks overrides.
pub trait TokenSink {
    /// Overwrite every role token with the palette's colors.
    fn apply(&mut self, palette: &Palette);

    /// Drop any override, letting the host's base tokens show through.
    fn clear(&mut self);
}

/// Drives previews through a sink and guarantees the revert.
#[derive(Debug)]
pub struct PreviewController<S: TokenSink> {
    sink: S,
    active: Option<Palette>,
}

impl<S: TokenSink> PreviewController<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink, active: None }
    }

    /// Push `palette` into the sink, replacing any current override.
    ///
    /// Applying the same palette again is harmless; the sink sees the
    /// same four tokens written again.
    pub fn apply(&mut self, palette: &Palette) {
        self.sink.apply(palette);
        self.active = Some(palette.clone());
    }

    /// Remove the active override. Does nothing when idle, so an explicit
    /// revert followed by drop clears the sink exactly once.
    pub fn revert(&mut self) {
        if self.active.take().is_some() {
            self.sink.clear();
        }
    }

    #[must_use]
    pub fn is_previewing(&self) -> bool {
        self.active.is_some()
    }

    /// The palette currently overriding the sink, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Palette> {
        self.active.as_ref()
    }

    /// The sink behind the controller.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: TokenSink> Drop for PreviewController<S> {
    fn drop(&mut self) {
        self.revert();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
