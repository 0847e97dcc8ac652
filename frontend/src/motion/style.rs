use crate::motion::error::MotionError;
use crate::motion::interpolate::{format_number, Output, RangeInterpolator};

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: &'static str,
}

impl Transition {
    pub fn new(duration_s: f64) -> Self {
        Self {
            duration_s,
            delay_s: 0.0,
            easing: "cubic-bezier(0.25, 0.1, 0.25, 1)",
        }
    }

    pub fn delayed(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    pub fn spring(mut self) -> Self {
        self.easing = "cubic-bezier(0.34, 1.56, 0.64, 1)";
        self
    }

    fn to_css(&self) -> String {
        format!(
            "transition: transform {d}s {e} {w}s, opacity {d}s {e} {w}s, max-height {d}s {e} {w}s;",
            d = format_number(self.duration_s),
            e = self.easing,
            w = format_number(self.delay_s),
        )
    }
}

/// Visual properties applied to one element as an inline style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionStyle {
    pub x: Option<Output>,
    pub y: Option<Output>,
    pub scale: Option<f64>,
    pub opacity: Option<f64>,
    pub max_height: Option<Output>,
    pub transition: Option<Transition>,
}

impl MotionStyle {
    pub fn to_css(&self) -> String {
        let mut transforms = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            let zero = Output::Number(0.0);
            transforms.push(format!(
                "translate({}, {})",
                self.x.as_ref().unwrap_or(&zero).css_length(),
                self.y.as_ref().unwrap_or(&zero).css_length(),
            ));
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({})", format_number(scale)));
        }

        let mut css = String::new();
        if !transforms.is_empty() {
            css.push_str(&format!("transform: {};", transforms.join(" ")));
        }
        if let Some(opacity) = self.opacity {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(&format!("opacity: {};", format_number(opacity.clamp(0.0, 1.0))));
        }
        if let Some(max_height) = &self.max_height {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(&format!("max-height: {};", max_height.css_length()));
        }
        if let Some(transition) = &self.transition {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(&transition.to_css());
        }
        css
    }
}

/// One-shot entrance: a hidden pose and a shown pose, switched by a reveal gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    hidden: MotionStyle,
    shown: MotionStyle,
    duration_s: f64,
    base_delay_s: f64,
    stagger_s: f64,
    spring: bool,
}

impl Reveal {
    fn between(hidden: MotionStyle, shown: MotionStyle) -> Self {
        Self {
            hidden,
            shown,
            duration_s: 0.6,
            base_delay_s: 0.0,
            stagger_s: 0.0,
            spring: false,
        }
    }

    /// Fade in while rising `distance_px`.
    pub fn fade_up(distance_px: f64) -> Self {
        Self::between(
            MotionStyle {
                y: Some(Output::Number(distance_px)),
                opacity: Some(0.0),
                ..Default::default()
            },
            MotionStyle {
                y: Some(Output::Number(0.0)),
                opacity: Some(1.0),
                ..Default::default()
            },
        )
    }

    /// Fade in while sliding horizontally from `offset_px`.
    pub fn slide_x(offset_px: f64) -> Self {
        Self::between(
            MotionStyle {
                x: Some(Output::Number(offset_px)),
                opacity: Some(0.0),
                ..Default::default()
            },
            MotionStyle {
                x: Some(Output::Number(0.0)),
                opacity: Some(1.0),
                ..Default::default()
            },
        )
    }

    /// Grow from `from` to full size.
    pub fn pop(from: f64) -> Self {
        Self::between(
            MotionStyle {
                scale: Some(from),
                ..Default::default()
            },
            MotionStyle {
                scale: Some(1.0),
                ..Default::default()
            },
        )
        .springy()
    }

    /// Fade in while opening to `max_height_px`; the closed pose takes no space.
    pub fn expand(max_height_px: f64) -> Self {
        Self::between(
            MotionStyle {
                opacity: Some(0.0),
                max_height: Some(Output::Number(0.0)),
                ..Default::default()
            },
            MotionStyle {
                opacity: Some(1.0),
                max_height: Some(Output::Number(max_height_px)),
                ..Default::default()
            },
        )
        .duration(0.3)
    }

    pub fn duration(mut self, duration_s: f64) -> Self {
        self.duration_s = duration_s;
        self
    }

    pub fn delay(mut self, delay_s: f64) -> Self {
        self.base_delay_s = delay_s;
        self
    }

    pub fn stagger(mut self, stagger_s: f64) -> Self {
        self.stagger_s = stagger_s;
        self
    }

    pub fn springy(mut self) -> Self {
        self.spring = true;
        self
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.base_delay_s + index as f64 * self.stagger_s
    }

    /// Inline style for the `index`-th staggered child.
    pub fn style(&self, shown: bool, index: usize) -> String {
        let mut pose = if shown {
            self.shown.clone()
        } else {
            self.hidden.clone()
        };
        let transition = Transition::new(self.duration_s).delayed(self.delay_for(index));
        pose.transition = Some(if self.spring { transition.spring() } else { transition });
        pose.to_css()
    }
}

/// Scroll-linked y / opacity / scale for a section root.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTransform {
    pub y: RangeInterpolator,
    pub opacity: RangeInterpolator,
    pub scale: RangeInterpolator,
}

impl ScrollTransform {
    /// Drifts down and shrinks away during the first half of the range.
    pub fn fade_away(y_to: &str) -> Result<Self, MotionError> {
        Ok(Self {
            y: RangeInterpolator::units(&[0.0, 1.0], &["0%", y_to])?,
            opacity: RangeInterpolator::numbers(&[0.0, 0.5], &[1.0, 0.0])?,
            scale: RangeInterpolator::numbers(&[0.0, 0.5], &[1.0, 0.8])?,
        })
    }

    /// Parallax drift with a fade/scale in at the start and out at the end.
    pub fn pass_through(y_from: &str, y_to: &str) -> Result<Self, MotionError> {
        let edges = [0.0, 0.2, 0.8, 1.0];
        Ok(Self {
            y: RangeInterpolator::units(&[0.0, 1.0], &[y_from, y_to])?,
            opacity: RangeInterpolator::numbers(&edges, &[0.0, 1.0, 1.0, 0.0])?,
            scale: RangeInterpolator::numbers(&edges, &[0.8, 1.0, 1.0, 0.8])?,
        })
    }

    pub fn apply(&self, progress: f64) -> MotionStyle {
        MotionStyle {
            y: Some(self.y.interpolate(progress)),
            opacity: Some(self.opacity.value(progress)),
            scale: Some(self.scale.value(progress)),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scroll::{ElementLayout, ScrollRange};

    #[test]
    fn renders_transform_and_opacity() {
        let style = MotionStyle {
            y: Some(Output::unit(25.0, "%")),
            scale: Some(0.9),
            opacity: Some(0.5),
            ..Default::default()
        };
        assert_eq!(
            style.to_css(),
            "transform: translate(0px, 25%) scale(0.9); opacity: 0.5;"
        );
        assert_eq!(MotionStyle::default().to_css(), "");
    }

    #[test]
    fn staggers_reveal_delays() {
        let reveal = Reveal::slide_x(-50.0).delay(0.1).stagger(0.2);
        assert!((reveal.delay_for(2) - 0.5).abs() < 1e-9);
        let hidden = reveal.style(false, 0);
        assert!(hidden.starts_with("transform: translate(-50px, 0px); opacity: 0;"));
        assert!(hidden.contains(" 0.1s"));
        let shown = reveal.style(true, 1);
        assert!(shown.starts_with("transform: translate(0px, 0px); opacity: 1;"));
        assert!(shown.contains(" 0.3s"));
    }

    #[test]
    fn pop_uses_spring_easing() {
        let pop = Reveal::pop(0.0);
        assert!(pop.style(false, 0).starts_with("transform: scale(0);"));
        assert!(pop.style(true, 0).contains("cubic-bezier(0.34, 1.56, 0.64, 1)"));
    }

    #[test]
    fn expand_collapses_to_zero_height() {
        let menu = Reveal::expand(400.0);
        let closed = menu.style(false, 0);
        assert!(closed.starts_with("opacity: 0; max-height: 0px;"));
        assert!(closed.contains("max-height 0.3s"));
        assert!(menu.style(true, 0).starts_with("opacity: 1; max-height: 400px;"));
    }

    #[test]
    fn hero_fades_away_by_half_progress() {
        let hero = ScrollTransform::fade_away("50%").unwrap();
        assert_eq!(hero.apply(0.0).to_css(), "transform: translate(0px, 0%) scale(1); opacity: 1;");
        let halfway = hero.apply(0.5);
        assert_eq!(halfway.opacity, Some(0.0));
        assert_eq!(halfway.scale, Some(0.8));
        assert_eq!(halfway.y, Some(Output::unit(25.0, "%")));
    }

    #[test]
    fn section_passes_through() {
        let section = ScrollTransform::pass_through("20%", "-20%").unwrap();
        let middle = section.apply(0.5);
        assert_eq!(middle.opacity, Some(1.0));
        assert_eq!(middle.scale, Some(1.0));
        assert_eq!(middle.y.map(|y| y.to_string()), Some("0%".to_string()));
        assert_eq!(section.apply(1.0).opacity, Some(0.0));
        assert!(ScrollTransform::pass_through("20%", "-20px").is_err());
    }

    #[test]
    fn section_progress_ignores_its_own_transform() {
        const VIEWPORT: f64 = 800.0;
        const HEIGHT: f64 = 1000.0;
        const DOCUMENT_TOP: f64 = 2000.0;
        let section = ScrollTransform::pass_through("20%", "-20%").unwrap();
        let range = ScrollRange::passing();

        for (scroll_y, expected_progress, expected_opacity) in [(1380.0, 0.1, 0.5), (1560.0, 0.2, 1.0)] {
            let layout = ElementLayout::in_document(DOCUMENT_TOP, HEIGHT, scroll_y);
            let progress = range.progress(layout, VIEWPORT);
            assert!((progress - expected_progress).abs() < 1e-9);
            let style = section.apply(progress);
            assert!((style.opacity.unwrap() - expected_opacity).abs() < 1e-9);

            // The painted box is shifted by the y offset; measuring it would
            // give a different progress on the next frame.
            let shift = style.y.as_ref().map_or(0.0, |y| y.value() / 100.0 * HEIGHT);
            let painted = ElementLayout::attached(layout.top + shift, HEIGHT);
            assert!((range.progress(painted, VIEWPORT) - progress).abs() > 0.01);

            let next_frame = ElementLayout::in_document(DOCUMENT_TOP, HEIGHT, scroll_y);
            assert_eq!(range.progress(next_frame, VIEWPORT), progress);
        }
    }
}
