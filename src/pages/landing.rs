use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::faq::{Faq, FaqItem};
use crate::components::glow::GlowingCircle;
use crate::components::header::{Header, NavLink};
use crate::components::preloader::Preloader;
use crate::components::slider::Slider;

struct Project {
    title: &'static str,
    tag: &'static str,
    image: &'static str,
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Harbour Coffee rebrand",
        tag: "Branding",
        image: "/assets/project-1.jpg",
    },
    Project {
        title: "Atlas field app",
        tag: "Product design",
        image: "/assets/project-2.jpg",
    },
    Project {
        title: "Northwind storefront",
        tag: "Web development",
        image: "/assets/project-3.jpg",
    },
    Project {
        title: "Lumen annual report",
        tag: "Editorial",
        image: "/assets/project-4.jpg",
    },
    Project {
        title: "Fjord Outdoor campaign",
        tag: "Marketing",
        image: "/assets/project-5.jpg",
    },
    Project {
        title: "Kite analytics dashboard",
        tag: "Product design",
        image: "/assets/project-6.jpg",
    },
];

const TESTIMONIALS: &[(&str, &str)] = &[
    (
        "Maria Lind, Harbour Coffee",
        "They turned a vague idea into a brand our customers recognise across the street.",
    ),
    (
        "Jon Berg, Atlas",
        "Shipping the field app took half the time we had planned for.",
    ),
];

fn nav_links() -> Vec<NavLink> {
    [
        ("Home", "#home"),
        ("Work", "#work"),
        ("FAQ", "#faq"),
        ("Contact", "#contact"),
    ]
    .into_iter()
    .map(|(label, href)| NavLink {
        label: label.into(),
        href: href.into(),
    })
    .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .preloader { position: fixed; inset: 0; z-index: 20; background: #0d0d0d;
                        display: grid; place-items: center;
                        transition: opacity 0.5s ease, visibility 0.5s; }
                    .preloader.loaded { opacity: 0; visibility: hidden; }
                    .header { position: fixed; top: 0; left: 0; width: 100%; z-index: 10;
                        padding-block: 24px;
                        transition: background 0.25s ease, padding 0.25s ease; }
                    .header.active { background: rgba(13, 13, 13, 0.92); padding-block: 14px; }
                    .navbar { transition: transform 0.3s ease; }
                    .nav-toggle-btn, .overlay { display: none; }
                    @media (max-width: 767px) {
                        body.nav-active { overflow: hidden; }
                        .navbar { position: fixed; top: 0; right: 0; height: 100vh; width: 280px;
                            transform: translateX(100%); background: #141414; z-index: 11; }
                        .navbar.active { transform: translateX(0); }
                        .nav-toggle-btn { display: block; }
                        .overlay { display: block; position: fixed; inset: 0;
                            background: rgba(0, 0, 0, 0.5); opacity: 0; pointer-events: none;
                            transition: opacity 0.3s ease; }
                        .overlay.active { opacity: 1; pointer-events: all; }
                    }
                    .slider { --slider-items: 1; position: relative; overflow: hidden; }
                    .slider-container { position: relative; display: flex; list-style: none;
                        margin: 0; padding: 0; transition: transform 0.5s ease; }
                    .slider-item { flex: 0 0 calc(100% / var(--slider-items));
                        padding-inline: 12px; box-sizing: border-box; }
                    .testimonial-slider { --slider-items: 1; }
                    @media (min-width: 768px) { .project-slider { --slider-items: 2; } }
                    @media (min-width: 1200px) { .project-slider { --slider-items: 3; } }
                    .faq-answer { max-height: 0; overflow: hidden;
                        transition: max-height 0.3s ease; }
                    .glowing-circle { position: fixed; top: -100px; left: -100px;
                        width: 200px; height: 200px; border-radius: 50%;
                        pointer-events: none; z-index: -1;
                        background: radial-gradient(circle, rgba(255, 140, 50, 0.35),
                            transparent 70%); }
                "#}
            </style>

            <Preloader />
            <Header brand="Northwind Studio" links={nav_links()} />

            <main>
                <section class="section hero" id="home">
                    <div class="container">
                        <h1 class="h1 hero-title">
                            {"Design and code for brands that want to be remembered"}
                        </h1>
                        <p class="hero-text">
                            {"A small studio building identities, products and websites \
                              from first sketch to launch."}
                        </p>
                        <a href="#contact" class="btn btn-primary">{"Start a project"}</a>
                    </div>
                </section>

                <section class="section work" id="work">
                    <div class="container">
                        <h2 class="h2 section-title">{"Selected work"}</h2>
                        <p class="section-text">{"Hold Shift and scroll to browse."}</p>
                        <Slider label="Selected work" class="project-slider">
                            { for PROJECTS.iter().map(|project| html! {
                                <div class="project-card">
                                    <figure class="card-banner">
                                        <img src={project.image} alt={project.title}
                                            loading="lazy" />
                                    </figure>
                                    <span class="card-tag">{ project.tag }</span>
                                    <h3 class="h3 card-title">{ project.title }</h3>
                                </div>
                            }) }
                        </Slider>
                    </div>
                </section>

                <section class="section testimonials">
                    <div class="container">
                        <h2 class="h2 section-title">{"What clients say"}</h2>
                        <Slider label="Testimonials" class="testimonial-slider">
                            { for TESTIMONIALS.iter().map(|(author, quote)| html! {
                                <blockquote class="testimonial-card">
                                    <p class="testimonial-text">{ *quote }</p>
                                    <cite class="testimonial-author">{ *author }</cite>
                                </blockquote>
                            }) }
                        </Slider>
                    </div>
                </section>

                <section class="section faq" id="faq">
                    <div class="container">
                        <h2 class="h2 section-title">{"Frequently asked questions"}</h2>
                        <Faq>
                            <FaqItem question="How long does a typical project take?">
                                <p>
                                    {"Brand identities take four to six weeks. Websites and \
                                      product work are planned in two-week cycles once the \
                                      scope is agreed."}
                                </p>
                            </FaqItem>
                            <FaqItem question="Do you work with early-stage startups?">
                                <p>
                                    {"Yes. We keep a few slots each quarter for teams that \
                                      are still finding their shape."}
                                </p>
                            </FaqItem>
                            <FaqItem question="What happens after launch?">
                                <p>
                                    {"Every project includes a month of support. After that \
                                      we offer a maintenance plan or hand everything over to \
                                      your team."}
                                </p>
                            </FaqItem>
                        </Faq>
                    </div>
                </section>

                <section class="section contact" id="contact">
                    <div class="container">
                        <h2 class="h2 section-title">{"Tell us about your project"}</h2>
                        <ContactForm />
                    </div>
                </section>
            </main>

            <footer class="footer">
                <div class="container">
                    <p class="copyright">{"© Northwind Studio"}</p>
                </div>
            </footer>

            <GlowingCircle />
        </>
    }
}
