use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Wireframe ring with a `</>` glyph.
    CodeRing,
    Orb,
    Knot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneParams {
    pub kind: ShapeKind,
    pub count: usize,
    pub seed: u64,
    pub color: &'static str,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeLayout {
    /// Percent of the scene box.
    pub left: f64,
    pub top: f64,
    pub size_px: f64,
    pub float_s: f64,
    pub delay_s: f64,
    pub rotation_deg: f64,
}

/// Stable pseudo-random placement so shapes do not jump between renders.
pub fn layout_shapes(params: &SceneParams) -> Vec<ShapeLayout> {
    let mut rng = SmallRng::seed_from_u64(params.seed);
    let base = match params.kind {
        ShapeKind::CodeRing => 140.0,
        ShapeKind::Orb => 60.0,
        ShapeKind::Knot => 80.0,
    };
    (0..params.count)
        .map(|_| ShapeLayout {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size_px: base * rng.gen_range(0.5..1.0),
            float_s: rng.gen_range(4.0..9.0),
            delay_s: rng.gen_range(0.0..3.0),
            rotation_deg: rng.gen_range(0.0..180.0),
        })
        .collect()
}

/// Decorative background behind a section. Kept apart from the motion code
/// so another backend (canvas, WebGL) can replace it.
pub trait SceneRenderer {
    fn render_scene(&self, params: &SceneParams) -> Html;
}

/// Absolutely positioned elements animated with CSS keyframes.
pub struct CssScene;

impl SceneRenderer for CssScene {
    fn render_scene(&self, params: &SceneParams) -> Html {
        let class = match params.kind {
            ShapeKind::CodeRing => "shape shape-ring",
            ShapeKind::Orb => "shape shape-orb",
            ShapeKind::Knot => "shape shape-knot",
        };
        html! {
            <div class="scene" aria-hidden="true">
                { for layout_shapes(params).into_iter().map(|shape| {
                    let style = format!(
                        "left: {:.1}%; top: {:.1}%; width: {size:.0}px; height: {size:.0}px; \
                         --shape-color: {}; --shape-rotation: {:.0}deg; opacity: {}; \
                         animation-duration: {:.1}s; animation-delay: {:.1}s;",
                        shape.left,
                        shape.top,
                        params.color,
                        shape.rotation_deg,
                        params.opacity,
                        shape.float_s,
                        shape.delay_s,
                        size = shape.size_px,
                    );
                    html! {
                        <div class={class} style={style}>
                            if params.kind == ShapeKind::CodeRing {
                                <span class="shape-glyph">{"</>"}</span>
                            }
                        </div>
                    }
                }) }
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SceneProps {
    pub params: SceneParams,
}

#[function_component(Scene)]
pub fn scene(props: &SceneProps) -> Html {
    CssScene.render_scene(&props.params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orbs(seed: u64) -> SceneParams {
        SceneParams {
            kind: ShapeKind::Orb,
            count: 15,
            seed,
            color: "#4f46e5",
            opacity: 0.2,
        }
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(layout_shapes(&orbs(7)), layout_shapes(&orbs(7)));
        assert_ne!(layout_shapes(&orbs(7)), layout_shapes(&orbs(8)));
    }

    #[test]
    fn shapes_stay_inside_the_scene() {
        let shapes = layout_shapes(&orbs(42));
        assert_eq!(shapes.len(), 15);
        for shape in shapes {
            assert!((0.0..100.0).contains(&shape.left));
            assert!((0.0..100.0).contains(&shape.top));
            assert!((30.0..60.0).contains(&shape.size_px));
        }
    }
}
