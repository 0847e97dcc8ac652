use yew::prelude::*;

use crate::config::MOTION;
use crate::content::COURSES;
use crate::hooks::use_in_view;
use crate::motion::style::Reveal;

#[function_component(Courses)]
pub fn courses() -> Html {
    let container = use_node_ref();
    let visible = use_in_view(container.clone(), 0.1, true);
    // Header is child 0, cards follow.
    let items = Reveal::fade_up(50.0).stagger(MOTION.stagger_s);

    html! {
        <section id="courses" class="courses">
            <div class="courses-backdrop"></div>

            <div ref={container} class="section-inner">
                <div class="section-header" style={items.style(visible, 0)}>
                    <h2>{"Free Courses"}</h2>
                    <p>
                        {"Quality education shouldn't come with a price tag. Our courses are crafted by students, for students, and will always be free."}
                    </p>
                </div>

                <div class="course-grid">
                    { for COURSES.iter().enumerate().map(|(index, course)| html! {
                        <div class="course-card" style={items.style(visible, index + 1)}>
                            <div class="course-image">
                                <img src={course.image} alt={course.title} loading="lazy" />
                                <div class="course-image-shade"></div>
                            </div>

                            <div class="course-body">
                                <h3>{course.title}</h3>
                                <p>{course.description}</p>

                                <div class="topic-list">
                                    { for course.topics.iter().map(|topic| html! {
                                        <span class="topic">{*topic}</span>
                                    }) }
                                </div>

                                <div class="course-meta">
                                    <span class="duration">{"🕒 "}{course.duration}</span>
                                    <span class="level">{course.level}</span>
                                    <span class="free-badge">{"100% Free"}</span>
                                </div>

                                <button class="course-cta">
                                    {"Start Learning"}
                                    <span class="arrow">{"→"}</span>
                                </button>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
