use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::navbar::{Nav, NAVBAR_ID};
use crate::components::scroll_to_top::ScrollToTop;
use crate::config;
use crate::contact::ContactForm;
use crate::reveal::{init_reveal, RevealOptions};
use crate::scroll::scroll_to_section;
use crate::slider::{HeroSlide, HeroSlider};

struct Service {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        icon: "fa-bug",
        title: "Insect Control",
        text: "Cockroaches, ants, bed bugs and flying insects treated at the source.",
    },
    Service {
        icon: "fa-mouse",
        title: "Rodent Control",
        text: "Baiting, trapping and sealing entry points to keep rats and mice out.",
    },
    Service {
        icon: "fa-house-damage",
        title: "Termite Treatment",
        text: "Inspection and barrier treatments that protect wood and foundations.",
    },
    Service {
        icon: "fa-spray-can",
        title: "Disinfection",
        text: "Sanitization of homes, offices and restaurants with approved products.",
    },
];

const REASONS: [(&str, &str); 3] = [
    ("fa-certificate", "Licensed technicians"),
    ("fa-leaf", "Family and pet safe products"),
    ("fa-clock", "Same-day intervention"),
];

fn cta(label: &'static str, href: &'static str) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(href, NAVBAR_ID);
    });
    html! {
        <a href={href} class="btn btn-primary" data-aos="fade-up" data-aos-delay="300" {onclick}>
            {label}
        </a>
    }
}

fn hero_slides() -> Vec<HeroSlide> {
    vec![
        HeroSlide {
            background: "/assets/images/hero-1.jpg".into(),
            content: html! {
                <>
                    <h1 data-aos="fade-up">{"Protect Your Home From Pests"}</h1>
                    <p data-aos="fade-up" data-aos-delay="200">
                        {"Fast, safe and guaranteed pest control across Morocco."}
                    </p>
                    { cta("Get a Free Quote", "#contact") }
                </>
            },
        },
        HeroSlide {
            background: "/assets/images/hero-2.jpg".into(),
            content: html! {
                <>
                    <h1 data-aos="fade-up">{"Termite Specialists"}</h1>
                    <p data-aos="fade-up" data-aos-delay="200">
                        {"Stop structural damage before it starts."}
                    </p>
                    { cta("Our Services", "#services") }
                </>
            },
        },
        HeroSlide {
            background: "/assets/images/hero-3.jpg".into(),
            content: html! {
                <>
                    <h1 data-aos="fade-up">{"Clean Spaces For Business"}</h1>
                    <p data-aos="fade-up" data-aos-delay="200">
                        {"Discreet treatments for restaurants, hotels and offices."}
                    </p>
                    { cta("Contact Us", "#contact") }
                </>
            },
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start reveal animations once the page is in the DOM
    use_effect_with_deps(
        move |_| {
            init_reveal(&RevealOptions::default());
            || ()
        },
        (),
    );

    let slides = use_memo(|_| hero_slides(), ());
    let year = Local::now().year();

    html! {
        <div class="landing-page">
            <Nav />

            <section id="home" class="hero">
                <HeroSlider slides={(*slides).clone()} />
            </section>

            <section id="services" class="services">
                <div class="container">
                    <h2 class="section-title" data-aos="fade-up">{"Our Services"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <div class="service-card" data-aos="fade-up" data-aos-delay={(i * 100).to_string()}>
                                <i class={classes!("fas", service.icon)}></i>
                                <h3>{service.title}</h3>
                                <p>{service.text}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="about" class="about">
                <div class="container" data-aos="fade-right">
                    <h2 class="section-title">{"About "}{config::BRAND_NAME}</h2>
                    <p>
                        {"We are a local team treating homes and businesses for more than ten years. "}
                        {"Every intervention starts with an inspection and ends with a written follow-up plan."}
                    </p>
                </div>
            </section>

            <section id="why-us" class="why-us">
                <div class="container">
                    <h2 class="section-title" data-aos="fade-up">{"Why Choose Us"}</h2>
                    <ul class="reasons">
                        { for REASONS.iter().map(|(icon, text)| html! {
                            <li data-aos="zoom-in">
                                <i class={classes!("fas", *icon)}></i>
                                <span>{*text}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container" data-aos="fade-up">
                    <h2 class="section-title">{"Request an Intervention"}</h2>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <p>{format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)}</p>
            </footer>

            <ScrollToTop />
        </div>
    }
}
