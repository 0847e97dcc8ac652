use log::error;
use yew::prelude::*;

use crate::components::reveal::RevealOnView;
use crate::config::MOTION;
use crate::content::COMMUNITY_FEATURES;
use crate::hooks::{use_in_view, use_scroll_progress};
use crate::motion::scroll::ScrollRange;
use crate::motion::style::{Reveal, ScrollTransform};
use crate::scene::{Scene, SceneParams, ShapeKind};

#[function_component(Community)]
pub fn community() -> Html {
    let container = use_node_ref();
    let features_ref = use_node_ref();

    let progress = use_scroll_progress(container.clone(), ScrollRange::passing());
    let transform = use_memo(
        |_| {
            ScrollTransform::pass_through("20%", "-20%")
                .map_err(|err| error!("Community scroll transform disabled: {}", err))
                .ok()
        },
        (),
    );
    let style = (*transform)
        .as_ref()
        .map(|transform| transform.apply(progress).to_css())
        .unwrap_or_default();

    let features_visible = use_in_view(features_ref.clone(), MOTION.reveal_threshold, true);
    let cards = Reveal::slide_x(-50.0).stagger(MOTION.stagger_s);

    html! {
        <section ref={container} id="community" class="community gradient-bg">
            <Scene params={SceneParams {
                kind: ShapeKind::Orb,
                count: 15,
                seed: 23,
                color: "#4f46e5",
                opacity: 0.2,
            }} />
            <div class="community-shade"></div>

            <div class="section-inner" style={style}>
                <RevealOnView class="section-header light" reveal={Reveal::fade_up(20.0)}>
                    <RevealOnView class="pill light" reveal={Reveal::pop(0.0).delay(0.2)}>
                        <span class="pill-icon">{"⚡"}</span>
                        <span>{"Join 10,000+ Student Developers"}</span>
                    </RevealOnView>
                    <h2>{"More Than Just a Community"}</h2>
                    <p>
                        {"Connect with fellow student developers, share your journey, and grow together in our supportive community"}
                    </p>
                </RevealOnView>

                <div ref={features_ref} class="feature-grid">
                    { for COMMUNITY_FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <div class="feature-card" style={cards.style(features_visible, index)}>
                            <div class="feature-icon spin-slow">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>

                <RevealOnView class="callout glass" reveal={Reveal::fade_up(50.0).duration(0.8)}>
                    <RevealOnView class="callout-body" reveal={Reveal::pop(0.9)}>
                        <h3>{"Ready to Start Your Journey?"}</h3>
                        <p>
                            {"Join our Discord community where thousands of student developers are learning, sharing, and building together."}
                        </p>
                        <button class="callout-cta">
                            {"Join Discord Community"}
                            <span class="arrow">{"→"}</span>
                        </button>
                    </RevealOnView>
                </RevealOnView>
            </div>
        </section>
    }
}
