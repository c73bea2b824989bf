//! Entry/visibility animation contracts and in-memory adapters.

use std::{cell::RefCell, marker::PhantomData};

use serde::{Deserialize, Serialize};

/// Timing and start pose for a window entry transition.
///
/// Windows interpolate from this pose to their resting pose (scale 1, opacity 1, no offset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnterTransition {
    /// Scale factor at the first keyframe.
    pub from_scale: f64,
    /// Opacity at the first keyframe.
    pub from_opacity: f64,
    /// Vertical offset in CSS pixels at the first keyframe.
    pub from_offset_y_px: f64,
    /// Total transition duration in milliseconds.
    pub duration_ms: f64,
    /// CSS easing function applied to the whole transition.
    pub easing: String,
}

impl Default for EnterTransition {
    fn default() -> Self {
        Self {
            from_scale: 0.8,
            from_opacity: 0.0,
            from_offset_y_px: 40.0,
            duration_ms: 400.0,
            // cubic ease-out
            easing: "cubic-bezier(0.215, 0.61, 0.355, 1)".to_string(),
        }
    }
}

/// Host service that plays window transitions for an element handle.
///
/// Failures are reported to the caller but must never be treated as a change of window state.
pub trait AnimationEngine {
    /// Element handle type the engine operates on.
    type Element;

    /// Plays the entry transition on `element`. Fire-and-forget.
    fn play_enter(&self, element: &Self::Element) -> Result<(), String>;

    /// Shows or hides `element` immediately.
    fn set_visibility(&self, element: &Self::Element, visible: bool) -> Result<(), String>;

    /// Cancels any in-flight transition on `element`.
    fn cancel(&self, element: &Self::Element);
}

/// No-op animation engine for unsupported targets and headless tests.
pub struct NoopAnimationEngine<E> {
    _element: PhantomData<fn(&E)>,
}

impl<E> Default for NoopAnimationEngine<E> {
    fn default() -> Self {
        Self {
            _element: PhantomData,
        }
    }
}

impl<E> std::fmt::Debug for NoopAnimationEngine<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("NoopAnimationEngine")
    }
}

impl<E> AnimationEngine for NoopAnimationEngine<E> {
    type Element = E;

    fn play_enter(&self, _element: &E) -> Result<(), String> {
        Ok(())
    }

    fn set_visibility(&self, _element: &E, _visible: bool) -> Result<(), String> {
        Ok(())
    }

    fn cancel(&self, _element: &E) {}
}

/// One call observed by [`MemoryAnimationEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationCall<E> {
    /// `play_enter` was invoked.
    Enter(E),
    /// `set_visibility` was invoked.
    Visibility(E, bool),
    /// `cancel` was invoked.
    Cancel(E),
}

/// In-memory animation engine that records every call, optionally failing on request.
#[derive(Debug)]
pub struct MemoryAnimationEngine<E> {
    calls: RefCell<Vec<AnimationCall<E>>>,
    fail_with: Option<String>,
}

impl<E> Default for MemoryAnimationEngine<E> {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_with: None,
        }
    }
}

impl<E: Clone> MemoryAnimationEngine<E> {
    /// Creates an engine whose `play_enter` and `set_visibility` always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// Returns every recorded call in order.
    pub fn calls(&self) -> Vec<AnimationCall<E>> {
        self.calls.borrow().clone()
    }

    /// Forgets every recorded call.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn outcome(&self) -> Result<(), String> {
        match &self.fail_with {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

impl<E: Clone> AnimationEngine for MemoryAnimationEngine<E> {
    type Element = E;

    fn play_enter(&self, element: &E) -> Result<(), String> {
        self.calls
            .borrow_mut()
            .push(AnimationCall::Enter(element.clone()));
        self.outcome()
    }

    fn set_visibility(&self, element: &E, visible: bool) -> Result<(), String> {
        self.calls
            .borrow_mut()
            .push(AnimationCall::Visibility(element.clone(), visible));
        self.outcome()
    }

    fn cancel(&self, element: &E) {
        self.calls
            .borrow_mut()
            .push(AnimationCall::Cancel(element.clone()));
    }
}
