//! Pointer-proximity effects for the welcome text and the dock.

use leptos::logging;

const FALLOFF: f64 = 20_000.0;

/// Font weight range for one line of welcome text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FontWeights {
    /// Weight far from the pointer.
    pub main: f64,
    /// Weight directly under the pointer.
    pub max: f64,
    /// Weight restored when the pointer leaves.
    pub base: f64,
}

pub(super) const SUBTITLE_WEIGHTS: FontWeights = FontWeights {
    main: 100.0,
    max: 400.0,
    base: 100.0,
};

pub(super) const TITLE_WEIGHTS: FontWeights = FontWeights {
    main: 400.0,
    max: 900.0,
    base: 400.0,
};

pub(super) fn letter_weight(weights: FontWeights, distance: f64) -> f64 {
    let intensity = (-distance.powi(2) / FALLOFF).exp();
    weights.main + (weights.max - weights.main) * intensity
}

pub(super) fn font_variation(weight: f64) -> String {
    format!("'wght' {weight:.0}")
}

/// Spaces become non-breaking so per-letter spans keep their width.
pub(super) fn display_char(c: char) -> char {
    if c == ' ' {
        '\u{00A0}'
    } else {
        c
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Magnification {
    pub scale: f64,
    pub lift_px: f64,
}

impl Magnification {
    pub const REST: Self = Self {
        scale: 1.0,
        lift_px: 0.0,
    };

    pub fn transform(&self) -> String {
        format!("translateY({:.2}px) scale({:.3})", self.lift_px, self.scale)
    }
}

pub(super) fn dock_magnification(distance: f64) -> Magnification {
    let intensity = (-distance.abs().powf(2.5) / FALLOFF).exp();
    Magnification {
        scale: 1.0 + 0.25 * intensity,
        lift_px: -15.0 * intensity,
    }
}

/// Horizontal distance from `pointer_x` to the center of `element`, in viewport pixels.
pub(super) fn distance_to_center(element: &web_sys::Element, pointer_x: f64) -> f64 {
    let rect = element.get_bounding_client_rect();
    (pointer_x - (rect.left() + rect.width() / 2.0)).abs()
}

pub(super) fn set_style(element: &web_sys::HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        logging::warn!("failed to set `{property}`: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn letter_under_the_pointer_gets_the_max_weight() {
        assert_eq!(letter_weight(TITLE_WEIGHTS, 0.0), 900.0);
        assert_eq!(letter_weight(SUBTITLE_WEIGHTS, 0.0), 400.0);
    }

    #[test]
    fn letter_weight_falls_off_with_distance() {
        let near = letter_weight(TITLE_WEIGHTS, 50.0);
        let far = letter_weight(TITLE_WEIGHTS, 300.0);
        assert!(near > far);
        assert!(far > TITLE_WEIGHTS.main);
        assert!(letter_weight(TITLE_WEIGHTS, 2_000.0) - TITLE_WEIGHTS.main < 1e-9);
    }

    #[test]
    fn font_variation_rounds_to_whole_weights() {
        assert_eq!(font_variation(412.6), "'wght' 413");
        assert_eq!(font_variation(SUBTITLE_WEIGHTS.base), "'wght' 100");
    }

    #[test]
    fn spaces_render_as_non_breaking() {
        assert_eq!(display_char(' '), '\u{00A0}');
        assert_eq!(display_char('P'), 'P');
    }

    #[test]
    fn dock_icon_under_the_pointer_is_fully_magnified() {
        let magnified = dock_magnification(0.0);
        assert_eq!(magnified.scale, 1.25);
        assert_eq!(magnified.lift_px, -15.0);
        assert_eq!(magnified.transform(), "translateY(-15.00px) scale(1.250)");
    }

    #[test]
    fn distant_dock_icons_stay_at_rest() {
        let far = dock_magnification(-400.0);
        assert!((far.scale - 1.0).abs() < 1e-6);
        assert!(far.lift_px.abs() < 1e-4);
        assert_eq!(
            Magnification::REST.transform(),
            "translateY(0.00px) scale(1.000)"
        );
        assert!(dock_magnification(20.0).scale > dock_magnification(60.0).scale);
    }
}
