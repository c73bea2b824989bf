//! Web Animations API adapter for window entry transitions.

use std::cell::RefCell;

use platform_host::{AnimationEngine, EnterTransition};
use wasm_bindgen::{JsCast, JsValue};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Browser animation engine backed by `Element.animate`.
///
/// Entry transitions are skipped entirely when the user prefers reduced motion.
#[derive(Debug, Default)]
pub struct WebAnimationEngine {
    transition: EnterTransition,
    running: RefCell<Vec<(web_sys::HtmlElement, web_sys::Animation)>>,
}

impl WebAnimationEngine {
    /// Creates an engine that plays `transition` on every entry.
    pub fn new(transition: EnterTransition) -> Self {
        Self {
            transition,
            running: RefCell::new(Vec::new()),
        }
    }

    fn forget_finished(&self) {
        self.running
            .borrow_mut()
            .retain(|(_, animation)| animation.play_state() == web_sys::AnimationPlayState::Running);
    }
}

impl AnimationEngine for WebAnimationEngine {
    type Element = web_sys::HtmlElement;

    fn play_enter(&self, element: &web_sys::HtmlElement) -> Result<(), String> {
        if prefers_reduced_motion() {
            return Ok(());
        }
        self.cancel(element);

        let keyframes = enter_keyframes(&self.transition)?;
        let options = js_sys::Object::new();
        set_field(&options, "duration", &JsValue::from_f64(self.transition.duration_ms))?;
        set_field(&options, "easing", &JsValue::from_str(&self.transition.easing))?;

        let target: &JsValue = element.as_ref();
        let animate = js_sys::Reflect::get(target, &JsValue::from_str("animate"))
            .map_err(|err| format!("failed to read Element.animate: {err:?}"))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| "Element.animate is not available".to_string())?;
        let animation = animate
            .call2(target, &keyframes, &options)
            .map_err(|err| format!("failed to start entry animation: {err:?}"))?
            .dyn_into::<web_sys::Animation>()
            .map_err(|_| "Element.animate did not return an Animation".to_string())?;
        self.forget_finished();
        self.running
            .borrow_mut()
            .push((element.clone(), animation));
        Ok(())
    }

    fn set_visibility(&self, element: &web_sys::HtmlElement, visible: bool) -> Result<(), String> {
        element
            .style()
            .set_property("display", display_value(visible))
            .map_err(|err| format!("failed to set window display: {err:?}"))
    }

    fn cancel(&self, element: &web_sys::HtmlElement) {
        self.running.borrow_mut().retain(|(target, animation)| {
            if target == element {
                animation.cancel();
                false
            } else {
                true
            }
        });
    }
}

fn display_value(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Returns the `transform` value for the first entry keyframe.
pub fn enter_start_transform(transition: &EnterTransition) -> String {
    format!(
        "translateY({}px) scale({})",
        transition.from_offset_y_px, transition.from_scale
    )
}

/// Returns the `(transform, opacity)` pairs of the entry keyframes, first to last.
pub fn enter_frames(transition: &EnterTransition) -> [(String, f64); 2] {
    [
        (enter_start_transform(transition), transition.from_opacity),
        ("translateY(0px) scale(1)".to_string(), 1.0),
    ]
}

fn enter_keyframes(transition: &EnterTransition) -> Result<js_sys::Array, String> {
    let frames = js_sys::Array::new();
    for (transform, opacity) in enter_frames(transition) {
        let frame = keyframe(&transform, opacity)?;
        frames.push(&frame);
    }
    Ok(frames)
}

fn keyframe(transform: &str, opacity: f64) -> Result<js_sys::Object, String> {
    let frame = js_sys::Object::new();
    set_field(&frame, "transform", &JsValue::from_str(transform))?;
    set_field(&frame, "opacity", &JsValue::from_f64(opacity))?;
    Ok(frame)
}

fn set_field(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), String> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| format!("failed to set `{key}`: {err:?}"))
}

#[cfg(target_arch = "wasm32")]
fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn prefers_reduced_motion() -> bool {
    let _ = REDUCED_MOTION_QUERY;
    true
}
