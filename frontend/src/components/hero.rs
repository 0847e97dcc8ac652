use log::error;
use yew::prelude::*;

use crate::config::MOTION;
use crate::content::{Stat, HERO_WORDS, STATS};
use crate::hooks::{use_count_up, use_entered, use_in_view, use_scroll_progress, use_typewriter};
use crate::motion::count_up::CountUp;
use crate::motion::scroll::ScrollRange;
use crate::motion::style::{Reveal, ScrollTransform};
use crate::scene::{Scene, SceneParams, ShapeKind};

#[derive(Properties, PartialEq)]
struct StatCardProps {
    stat: &'static Stat,
    index: usize,
    visible: bool,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let stat = props.stat;
    let counter = CountUp::new(stat.number, MOTION.count_up_ms).with_suffix(stat.suffix);
    let value = use_count_up(counter, props.visible);
    let reveal = Reveal::fade_up(20.0).stagger(0.1);

    html! {
        <div class="stat-card" style={reveal.style(props.visible, props.index)}>
            <div class="stat-icon">{stat.icon}</div>
            <div class="stat-number">{value.unwrap_or_default()}</div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let container = use_node_ref();
    let stats_ref = use_node_ref();

    let progress = use_scroll_progress(container.clone(), ScrollRange::leaving());
    let transform = use_memo(
        |_| {
            ScrollTransform::fade_away("50%")
                .map_err(|err| error!("Hero scroll transform disabled: {}", err))
                .ok()
        },
        (),
    );
    let content_style = (*transform)
        .as_ref()
        .map(|transform| transform.apply(progress).to_css())
        .unwrap_or_default();

    let headline = use_typewriter(HERO_WORDS, MOTION.typewriter);
    let entered = use_entered();
    let stats_visible = use_in_view(stats_ref.clone(), MOTION.reveal_threshold, true);

    let intro = Reveal::fade_up(20.0);
    let badge = Reveal::fade_up(-20.0).delay(0.5);
    let tagline = Reveal::fade_up(0.0).delay(0.3);
    let buttons = Reveal::fade_up(20.0).delay(0.5);

    html! {
        <div ref={container} class="hero gradient-bg">
            <Scene params={SceneParams {
                kind: ShapeKind::CodeRing,
                count: 4,
                seed: 11,
                color: "#4f46e5",
                opacity: 0.6,
            }} />
            <div class="hero-shade"></div>

            <div class="hero-content" style={content_style}>
                <div class="hero-intro" style={intro.style(entered, 0)}>
                    <div class="hero-badge" style={badge.style(entered, 0)}>
                        <span class="sparkle">{"✨"}</span>
                        <span>{"Student-Run Non-Profit Organization"}</span>
                        <span class="sparkle delayed">{"✨"}</span>
                    </div>

                    <h1 class="hero-title">
                        <span class="typewriter">
                            {headline}
                            <span class="cursor">{"_"}</span>
                        </span>
                    </h1>

                    <p class="hero-subtitle" style={tagline.style(entered, 0)}>
                        {"Join our passionate community of student developers. All our resources, workshops, and mentorship are "}
                        <span class="highlight">{"completely free"}</span>
                        {"."}
                    </p>

                    <div class="hero-cta-group" style={buttons.style(entered, 0)}>
                        <button class="hero-cta primary">
                            {"Start Learning Free"}
                            <span class="arrow">{"→"}</span>
                        </button>
                        <button class="hero-cta secondary">
                            <span class="icon">{"👥"}</span>
                            {"Join Our Discord"}
                        </button>
                    </div>

                    <div ref={stats_ref} class="stats-grid">
                        { for STATS.iter().enumerate().map(|(index, stat)| html! {
                            <StatCard stat={stat} index={index} visible={stats_visible} />
                        }) }
                    </div>
                </div>

                <div class="hero-fade"></div>
            </div>
        </div>
    }
}
