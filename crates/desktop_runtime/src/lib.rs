//! Window manager core for the portfolio desktop.
//!
//! The store ([`WindowStore`]) owns one descriptor per [`WindowId`]; triggers mutate it through
//! [`reduce_desktop`], and [`ManagedWindow`] derives each window's visibility, stacking, entry
//! transition and drag from its descriptor.

pub mod adapter;
pub mod components;
pub mod content;
pub mod host;
pub mod model;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod window_manager;
pub mod windows;

pub use adapter::{stacking_value, WindowAdapter};
pub use components::{make_window_adapter, DesktopShell, ManagedWindow, WindowedComponent};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError};
pub use registry::{DockItem, NavLink, RegistryEntry, RegistryError, WindowRegistry};
pub use runtime_context::{use_window_store, DesktopProvider, WindowStore};
