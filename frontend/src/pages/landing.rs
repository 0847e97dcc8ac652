use yew::prelude::*;

use crate::components::community::Community;
use crate::components::courses::Courses;
use crate::components::hackathons::Hackathons;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Navbar />
            <Hero />
            <Courses />
            <Community />
            <Hackathons />
            <footer id="about" class="footer">
                <p>
                    {"DASH is a student-run non-profit. Every course, workshop and hackathon is free, forever."}
                </p>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    * { box-sizing: border-box; }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #111827;
        background: #fff;
    }
    .landing-page { min-height: 100vh; overflow-x: hidden; }
    .gradient-bg { background: linear-gradient(135deg, #4f46e5 0%, #7c3aed 50%, #db2777 100%); }
    .arrow { margin-left: 0.5rem; transition: transform 0.3s; display: inline-block; }
    button:hover .arrow { transform: translateX(4px); }
    button { cursor: pointer; font: inherit; border: none; }

    /* Navigation */
    .top-nav {
        position: fixed;
        width: 100%;
        top: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(4px);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 4rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo { display: flex; align-items: center; gap: 0.5rem; text-decoration: none; font-weight: 700; font-size: 1.25rem; color: #111827; }
    .nav-logo-icon { color: #4f46e5; }
    .nav-logo:hover .nav-logo-text { color: #4f46e5; }
    .nav-links { display: flex; align-items: center; gap: 2rem; }
    .nav-link, .mobile-link { color: #374151; text-decoration: none; transition: color 0.3s; }
    .nav-link:hover, .mobile-link:hover { color: #4f46e5; }
    .nav-join-button { background: #4f46e5; color: #fff; padding: 0.5rem 1rem; border-radius: 0.5rem; transition: background 0.3s; }
    .nav-join-button:hover { background: #4338ca; }
    .burger-menu { display: none; background: none; font-size: 1.5rem; color: #374151; }
    .mobile-menu { display: none; overflow: hidden; background: #fff; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
    .mobile-menu-inner { display: flex; flex-direction: column; gap: 0.25rem; padding: 0.5rem 1rem 1rem; }
    .mobile-link { display: block; padding: 0.5rem 0.75rem; }
    .nav-join-button.mobile { text-align: left; }

    /* Decorative scenes */
    .scene { position: absolute; inset: 0; pointer-events: none; overflow: hidden; }
    .shape {
        position: absolute;
        transform: rotate(var(--shape-rotation));
        animation-name: float;
        animation-iteration-count: infinite;
        animation-timing-function: ease-in-out;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .shape-ring { border: 2px dashed var(--shape-color); border-radius: 50%; }
    .shape-orb { background: radial-gradient(circle at 30% 30%, #fff, var(--shape-color)); border-radius: 50%; }
    .shape-knot { border: 6px solid var(--shape-color); border-radius: 40% 60% 55% 45%; }
    .shape-glyph { color: var(--shape-color); font-weight: 700; font-size: 1.5rem; }
    @keyframes float {
        0%, 100% { translate: 0 0; }
        50% { translate: 0 -20px; }
    }
    .float { animation: float 3s ease-in-out infinite; }
    @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
    .spin-slow { display: inline-block; animation: spin 20s linear infinite; }

    /* Hero */
    .hero { position: relative; min-height: 100vh; color: #fff; padding-top: 5rem; overflow: hidden; }
    .hero-shade { position: absolute; inset: 0; background: linear-gradient(to bottom, rgba(0, 0, 0, 0.3), transparent); }
    .hero-content { position: relative; max-width: 80rem; margin: 0 auto; padding: 5rem 1.5rem 8rem; }
    .hero-intro { text-align: center; }
    .hero-badge { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.1); backdrop-filter: blur(4px); font-size: 0.875rem; margin-bottom: 2rem; }
    .sparkle { animation: float 3s ease-in-out infinite; }
    .sparkle.delayed { animation-delay: 0.2s; }
    .hero-title { font-size: 4.5rem; font-weight: 700; line-height: 1.1; margin: 0 0 1.5rem; }
    .typewriter { display: block; height: 5rem; }
    .cursor { animation: blink 1s step-end infinite; }
    @keyframes blink { 50% { opacity: 0; } }
    .hero-subtitle { font-size: 1.5rem; color: #e5e7eb; max-width: 48rem; margin: 0 auto 2rem; line-height: 1.6; }
    .highlight { font-weight: 700; color: #fde047; animation: pulse 3s ease-in-out infinite; }
    @keyframes pulse { 50% { opacity: 0.6; } }
    .hero-cta-group { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; margin-bottom: 4rem; }
    .hero-cta { display: inline-flex; align-items: center; padding: 1rem 2rem; border-radius: 0.75rem; font-size: 1rem; transition: transform 0.2s, background 0.3s; }
    .hero-cta:hover { transform: scale(1.05); }
    .hero-cta:active { transform: scale(0.95); }
    .hero-cta.primary { background: #fff; color: #4f46e5; }
    .hero-cta.secondary { background: transparent; color: #fff; border: 2px solid rgba(255, 255, 255, 0.8); }
    .hero-cta .icon { margin-right: 0.5rem; }
    .stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; max-width: 56rem; margin: 0 auto; }
    .stat-card { padding: 1.5rem; border-radius: 0.75rem; background: rgba(255, 255, 255, 0.1); backdrop-filter: blur(4px); text-align: center; }
    .stat-card:hover { background: rgba(255, 255, 255, 0.2); }
    .stat-icon { font-size: 2rem; margin-bottom: 1rem; }
    .stat-number { font-size: 2.25rem; font-weight: 700; margin-bottom: 0.5rem; min-height: 2.5rem; }
    .stat-label { color: #d1d5db; font-size: 0.875rem; }
    .hero-fade { position: absolute; bottom: 0; left: 0; right: 0; height: 8rem; background: linear-gradient(to top, #fff, transparent); }

    /* Shared section layout */
    .section-inner { position: relative; max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
    .section-header { text-align: center; margin-bottom: 5rem; }
    .section-header h2 { font-size: 3rem; font-weight: 700; margin: 0 0 1.5rem; }
    .section-header p { font-size: 1.25rem; color: #4b5563; max-width: 48rem; margin: 0 auto; }
    .section-header.light h2 { color: #fff; }
    .section-header.light p { color: #e5e7eb; }
    .pill { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; border-radius: 9999px; background: #eef2ff; color: #4f46e5; font-size: 0.875rem; margin-bottom: 1.5rem; }
    .pill.light { background: rgba(255, 255, 255, 0.1); color: #fff; }

    /* Courses */
    .courses { position: relative; padding: 8rem 0; overflow: hidden; }
    .courses-backdrop { position: absolute; inset: 0; background: linear-gradient(to bottom, rgba(238, 242, 255, 0.5), rgba(255, 255, 255, 0.5)); pointer-events: none; }
    .course-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2.5rem; }
    .course-card { background: #fff; border-radius: 1rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); overflow: hidden; }
    .course-card:hover { box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15); }
    .course-image { position: relative; overflow: hidden; }
    .course-image img { width: 100%; height: 12rem; object-fit: cover; display: block; transition: transform 0.5s; }
    .course-card:hover .course-image img { transform: scale(1.05); }
    .course-image-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent); opacity: 0; transition: opacity 0.3s; }
    .course-card:hover .course-image-shade { opacity: 1; }
    .course-body { padding: 2rem; }
    .course-body h3 { font-size: 1.5rem; margin: 0 0 0.75rem; transition: color 0.3s; }
    .course-card:hover h3 { color: #4f46e5; }
    .course-body p { color: #4b5563; margin: 0 0 1.5rem; }
    .topic-list, .tag-list { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }
    .topic { padding: 0.25rem 0.75rem; background: #eef2ff; color: #4f46e5; border-radius: 9999px; font-size: 0.875rem; }
    .course-meta { display: flex; justify-content: space-between; align-items: center; font-size: 0.875rem; color: #6b7280; margin-bottom: 1.5rem; }
    .free-badge { background: #dcfce7; color: #16a34a; padding: 0.25rem 0.75rem; border-radius: 9999px; }
    .course-cta { width: 100%; background: #f9fafb; color: #4f46e5; padding: 0.75rem; border-radius: 0.75rem; transition: all 0.3s; }
    .course-card:hover .course-cta { background: #4f46e5; color: #fff; }

    /* Community */
    .community { position: relative; padding: 8rem 0; overflow: hidden; }
    .community-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.2); }
    .feature-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-bottom: 5rem; }
    .feature-card { background: rgba(255, 255, 255, 0.1); backdrop-filter: blur(4px); padding: 2rem; border-radius: 1rem; color: #fff; }
    .feature-card:hover { background: rgba(255, 255, 255, 0.2); }
    .feature-icon { font-size: 3rem; margin-bottom: 1.5rem; }
    .feature-card h3 { font-size: 1.5rem; margin: 0 0 1rem; }
    .feature-card p { color: #d1d5db; margin: 0; }
    .callout { position: relative; border-radius: 1rem; padding: 3rem; text-align: center; overflow: hidden; }
    .callout.glass { background: rgba(255, 255, 255, 0.1); backdrop-filter: blur(4px); color: #fff; }
    .callout h3 { font-size: 1.875rem; margin: 0 0 1.5rem; }
    .callout p { color: #e5e7eb; max-width: 42rem; margin: 0 auto 2rem; }
    .callout-cta { display: inline-flex; align-items: center; padding: 1rem 2rem; background: #fff; color: #4f46e5; border-radius: 0.75rem; }

    /* Hackathons */
    .hackathons { position: relative; padding: 8rem 0; background: #f9fafb; overflow: hidden; }
    .hackathons-shade { position: absolute; inset: 0; background: linear-gradient(to bottom, #fff, transparent); }
    .hackathon-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2.5rem; margin-bottom: 5rem; }
    .hackathon-card { background: #fff; border-radius: 1rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); overflow: hidden; }
    .hackathon-image { position: relative; overflow: hidden; }
    .hackathon-image img { width: 100%; height: 16rem; object-fit: cover; display: block; transition: transform 0.5s; }
    .hackathon-image:hover img { transform: scale(1.1); }
    .hackathon-image-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent); }
    .hackathon-heading { position: absolute; bottom: 1.5rem; left: 1.5rem; right: 1.5rem; color: #fff; }
    .hackathon-heading h3 { font-size: 1.875rem; margin: 0 0 0.5rem; }
    .hackathon-heading .tag-list { margin-bottom: 0; }
    .tag { padding: 0.25rem 0.75rem; background: rgba(255, 255, 255, 0.2); backdrop-filter: blur(4px); border-radius: 9999px; font-size: 0.875rem; }
    .hackathon-body { padding: 2rem; }
    .hackathon-facts { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.5rem 1.5rem; margin-bottom: 2rem; color: #4b5563; }
    .fact { transition: transform 0.2s; }
    .fact:hover { transform: translateX(5px); }
    .register-cta { width: 100%; background: #4f46e5; color: #fff; padding: 0.75rem; border-radius: 0.75rem; }
    .register-cta:hover { background: #4338ca; }
    .newsletter { position: relative; background: #fff; border-radius: 1rem; padding: 3rem; text-align: center; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
    .newsletter-icon { font-size: 4rem; margin-bottom: 1.5rem; }
    .newsletter h3 { font-size: 1.875rem; margin: 0 0 1.5rem; }
    .newsletter p { color: #4b5563; max-width: 42rem; margin: 0 auto 2rem; }
    .newsletter-form { display: flex; gap: 1rem; max-width: 28rem; margin: 0 auto; }
    .newsletter-form input { flex: 1; padding: 0.75rem 1.5rem; border-radius: 0.75rem; border: 1px solid #d1d5db; font: inherit; }
    .subscribe-cta { padding: 0.75rem 2rem; background: #4f46e5; color: #fff; border-radius: 0.75rem; }

    .footer { padding: 3rem 1.5rem; text-align: center; color: #6b7280; background: #fff; }

    @media (max-width: 768px) {
        .nav-links { display: none; }
        .burger-menu { display: block; }
        .mobile-menu { display: block; }
        .hero-title { font-size: 3rem; }
        .stats-grid { grid-template-columns: repeat(2, 1fr); }
        .course-grid, .feature-grid, .hackathon-grid { grid-template-columns: 1fr; }
        .newsletter-form { flex-direction: column; }
    }
"#;
