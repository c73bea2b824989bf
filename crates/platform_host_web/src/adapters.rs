use std::rc::Rc;

use platform_host::{
    AnimationEngine, DragHandle, DragProvider, EnterTransition, NoopAnimationEngine, NoopDragProvider,
};

use crate::{PointerDragProvider, WebAnimationEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from `platform_host_web`.
    Browser,
    /// No-op adapters for native builds and the `headless-host` feature.
    Headless,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(all(target_arch = "wasm32", not(feature = "headless-host")))]
    {
        HostStrategy::Browser
    }

    #[cfg(not(all(target_arch = "wasm32", not(feature = "headless-host"))))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Headless => "headless",
    }
}

/// Adapter enum that erases the concrete animation backend behind [`AnimationEngine`].
#[derive(Debug)]
pub enum AnimationEngineAdapter {
    /// Web Animations API transitions.
    Browser(WebAnimationEngine),
    /// No-op fallback.
    Headless(NoopAnimationEngine<web_sys::HtmlElement>),
}

impl AnimationEngine for AnimationEngineAdapter {
    type Element = web_sys::HtmlElement;

    fn play_enter(&self, element: &web_sys::HtmlElement) -> Result<(), String> {
        match self {
            Self::Browser(engine) => engine.play_enter(element),
            Self::Headless(engine) => engine.play_enter(element),
        }
    }

    fn set_visibility(&self, element: &web_sys::HtmlElement, visible: bool) -> Result<(), String> {
        match self {
            Self::Browser(engine) => engine.set_visibility(element, visible),
            Self::Headless(engine) => engine.set_visibility(element, visible),
        }
    }

    fn cancel(&self, element: &web_sys::HtmlElement) {
        match self {
            Self::Browser(engine) => engine.cancel(element),
            Self::Headless(engine) => engine.cancel(element),
        }
    }
}

/// Adapter enum that erases the concrete gesture backend behind [`DragProvider`].
#[derive(Debug)]
pub enum DragProviderAdapter {
    /// Pointer-event drag.
    Browser(PointerDragProvider),
    /// No-op fallback.
    Headless(NoopDragProvider<web_sys::HtmlElement>),
}

impl DragProvider for DragProviderAdapter {
    type Element = web_sys::HtmlElement;

    fn create_draggable(
        &self,
        element: &web_sys::HtmlElement,
        on_press: Rc<dyn Fn()>,
    ) -> Result<Box<dyn DragHandle>, String> {
        match self {
            Self::Browser(provider) => provider.create_draggable(element, on_press),
            Self::Headless(provider) => provider.create_draggable(element, on_press),
        }
    }
}

/// Builds the animation engine for the selected host strategy.
pub fn animation_engine() -> AnimationEngineAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            AnimationEngineAdapter::Browser(WebAnimationEngine::new(EnterTransition::default()))
        },
        HostStrategy::Headless => AnimationEngineAdapter::Headless(NoopAnimationEngine::default()),
    }
}

/// Builds the drag provider for the selected host strategy.
pub fn drag_provider() -> DragProviderAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => DragProviderAdapter::Browser(PointerDragProvider),
        HostStrategy::Headless => DragProviderAdapter::Headless(NoopDragProvider::default()),
    }
}
