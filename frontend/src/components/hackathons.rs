use log::error;
use yew::prelude::*;

use crate::components::reveal::RevealOnView;
use crate::config::MOTION;
use crate::content::HACKATHONS;
use crate::hooks::{use_entered, use_in_view, use_scroll_progress};
use crate::motion::scroll::ScrollRange;
use crate::motion::style::{Reveal, ScrollTransform};
use crate::scene::{Scene, SceneParams, ShapeKind};

#[function_component(Hackathons)]
pub fn hackathons() -> Html {
    let container = use_node_ref();
    let list_ref = use_node_ref();

    let progress = use_scroll_progress(container.clone(), ScrollRange::passing());
    let transform = use_memo(
        |_| {
            ScrollTransform::pass_through("10%", "-10%")
                .map_err(|err| error!("Hackathon scroll transform disabled: {}", err))
                .ok()
        },
        (),
    );
    let style = (*transform)
        .as_ref()
        .map(|transform| transform.apply(progress).to_css())
        .unwrap_or_default();

    let list_visible = use_in_view(list_ref.clone(), MOTION.reveal_threshold, true);
    let tags_entered = use_entered();
    let tags = Reveal::pop(0.0).stagger(0.1);

    html! {
        <section ref={container} id="hackathons" class="hackathons">
            <Scene params={SceneParams {
                kind: ShapeKind::Knot,
                count: 6,
                seed: 37,
                color: "#ffd700",
                opacity: 0.5,
            }} />
            <div class="hackathons-shade"></div>

            <div class="section-inner" style={style}>
                <RevealOnView class="section-header" reveal={Reveal::fade_up(20.0)}>
                    <RevealOnView class="pill" reveal={Reveal::pop(0.0).delay(0.2)}>
                        <span class="pill-icon">{"🏆"}</span>
                        <span>{"Win Prizes & Get Recognized"}</span>
                    </RevealOnView>
                    <h2>{"Upcoming Hackathons"}</h2>
                    <p>
                        {"Put your skills to the test, build amazing projects, and compete with fellow students in our exciting hackathons"}
                    </p>
                </RevealOnView>

                <div ref={list_ref} class="hackathon-grid">
                    { for HACKATHONS.iter().enumerate().map(|(index, hackathon)| {
                        // Alternate sides so the pair slides in towards each other.
                        let offset = if index % 2 == 0 { -50.0 } else { 50.0 };
                        let card = Reveal::slide_x(offset).delay(index as f64 * 0.3);
                        html! {
                            <div class="hackathon-card" style={card.style(list_visible, 0)}>
                                <div class="hackathon-image">
                                    <img src={hackathon.image} alt={hackathon.title} loading="lazy" />
                                    <div class="hackathon-image-shade"></div>
                                    <div class="hackathon-heading">
                                        <h3>{hackathon.title}</h3>
                                        <div class="tag-list">
                                            { for hackathon.tags.iter().enumerate().map(|(i, tag)| html! {
                                                <span class="tag" style={tags.style(tags_entered, i)}>{*tag}</span>
                                            }) }
                                        </div>
                                    </div>
                                </div>

                                <div class="hackathon-body">
                                    <div class="hackathon-facts">
                                        <div class="fact">{"📅 "}{hackathon.date}</div>
                                        <div class="fact">{"🏆 Prize Pool: "}{hackathon.prize}</div>
                                        <div class="fact">{"👥 "}{hackathon.participants}{" Participants"}</div>
                                        <div class="fact">{"✨ All Skills Welcome"}</div>
                                    </div>
                                    <button class="register-cta">
                                        {"Register Now"}
                                        <span class="arrow">{"→"}</span>
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>

                <RevealOnView class="newsletter" reveal={Reveal::fade_up(50.0).duration(0.8)}>
                    <RevealOnView class="newsletter-body" reveal={Reveal::pop(0.9)}>
                        <div class="newsletter-icon float">{"🎁"}</div>
                        <h3>{"Never Miss a Hackathon"}</h3>
                        <p>
                            {"Subscribe to our newsletter to stay updated about future hackathons and events. We'll send you early access registration links!"}
                        </p>
                        <div class="newsletter-form">
                            <input type="email" placeholder="Enter your email" />
                            <button class="subscribe-cta">{"Subscribe"}</button>
                        </div>
                    </RevealOnView>
                </RevealOnView>
            </div>
        </section>
    }
}
