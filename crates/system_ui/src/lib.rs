//! Shared UI primitive library for the desktop shell and its windows.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the desktop stylesheet. Window bodies compose these primitives instead of emitting ad hoc
//! header/control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    dock_icon_src, DockButton, EmptyState, WindowControls, WindowHeader, WindowTitle,
    DOCK_TOOLTIP_DELAY_MS, DOCK_TOOLTIP_ID,
};

