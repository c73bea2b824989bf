//! Host collaborators injected into window adapters.
//!
//! The desktop runtime never calls animation or gesture APIs directly. It receives them through
//! [`DesktopHostContext`], which defaults to the strategy selected by `platform_host_web`.

use std::rc::Rc;

use platform_host::{AnimationEngine, DragProvider};
use platform_host_web::{animation_engine, drag_provider, host_strategy_name};
use web_sys::HtmlElement;

use crate::{adapter::WindowAdapter, model::WindowId};

/// Animation collaborator operating on window elements.
pub type SharedAnimationEngine = Rc<dyn AnimationEngine<Element = HtmlElement>>;
/// Drag collaborator operating on window elements.
pub type SharedDragProvider = Rc<dyn DragProvider<Element = HtmlElement>>;

#[derive(Clone)]
/// Collaborator bundle shared by every managed window.
pub struct DesktopHostContext {
    animation: SharedAnimationEngine,
    drag: SharedDragProvider,
    host_strategy_name: &'static str,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self {
            animation: Rc::new(animation_engine()),
            drag: Rc::new(drag_provider()),
            host_strategy_name: host_strategy_name(),
        }
    }
}

impl DesktopHostContext {
    /// Builds a context from explicit collaborators.
    pub fn new(animation: SharedAnimationEngine, drag: SharedDragProvider) -> Self {
        Self {
            animation,
            drag,
            host_strategy_name: "custom",
        }
    }

    /// Returns the configured animation engine.
    pub fn animation_engine(&self) -> SharedAnimationEngine {
        self.animation.clone()
    }

    /// Returns the configured drag provider.
    pub fn drag_provider(&self) -> SharedDragProvider {
        self.drag.clone()
    }

    /// Returns the strategy token the collaborators were selected with.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Creates an unmounted adapter for `window_id` using this context's collaborators.
    pub fn window_adapter(&self, window_id: WindowId) -> WindowAdapter<HtmlElement> {
        WindowAdapter::new(window_id, self.animation_engine(), self.drag_provider())
    }
}
