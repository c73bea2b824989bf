//! Browser (`wasm32`) implementations of [`platform_host`] collaborator contracts.
//!
//! - [`animation`]: Web Animations API entry transitions and `display` toggling.
//! - [`drag`]: pointer-event drag repositioning with pointer capture.
//! - [`adapters`]: compile-time host-strategy selection and adapter factories.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod animation;
pub mod drag;

pub use adapters::{
    animation_engine, drag_provider, host_strategy_name, selected_host_strategy,
    AnimationEngineAdapter, DragProviderAdapter, HostStrategy,
};
pub use animation::WebAnimationEngine;
pub use drag::PointerDragProvider;
