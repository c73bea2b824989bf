//! Typed collaborator contracts consumed by the desktop window runtime.
//!
//! The window core never talks to an animation library or a gesture library directly. It is
//! handed an [`AnimationEngine`] and a [`DragProvider`] and stays correct with the no-op
//! implementations exported here. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod animation;
pub mod drag;

pub use animation::{
    AnimationCall, AnimationEngine, EnterTransition, MemoryAnimationEngine, NoopAnimationEngine,
};
pub use drag::{DragHandle, DragProvider, MemoryDragProvider, NoopDragHandle, NoopDragProvider};
