use crate::site::{
    Section, Site, ABOUT, ABOUT_HIGHLIGHTS, BLOG_POSTS, CONTACT_FIELDS, CURRICULUM, FAQS,
    FEATURES, FEES, HERO, OVERVIEW, OVERVIEW_OUTCOMES, RECRUITERS, ROLES, TESTIMONIALS,
};
use yew::{events::SubmitEvent, function_component, html, Callback, Html};

pub fn render_sections(site: &Site) -> Html {
    Section::ALL
        .into_iter()
        .map(|section| {
            html! {
                <section id={section.id()} key={section.id()}>
                    {section_body(site, section)}
                </section>
            }
        })
        .collect()
}

fn section_body(site: &Site, section: Section) -> Html {
    let title = site.config.title.clone();
    match section {
        Section::Home => html! {<>
            <h2>{HERO.headline}</h2>
            <p>{HERO.subheadline}</p>
            <div>
                <button class="cta" type="button">{"Enroll Now"}</button>
                <button class="cta-outline" type="button">{"Download Brochure"}</button>
            </div>
        </>},
        Section::AboutUs => html! {<>
            <h2>{format!("About {title}")}</h2>
            <p>{format!("{title} {ABOUT}")}</p>
            <div class="card">
                {checklist(ABOUT_HIGHLIGHTS)}
            </div>
        </>},
        Section::CourseOverview => html! {<>
            <h2>{"Why Learn Mortgages?"}</h2>
            <p>{OVERVIEW}</p>
            <div class="card">
                <h4>{format!("By enrolling in {title}, you will:")}</h4>
                {list(OVERVIEW_OUTCOMES)}
            </div>
        </>},
        Section::Curriculum => html! {<>
            <h2>{"Course Content"}</h2>
            <div class="card-grid">
                {CURRICULUM.iter().enumerate().map(|(i, module)| html! {
                    <div class="card" key={i}>
                        <strong>{format!("Module {}: {module}", i + 1)}</strong>
                        <p class="card_detail">
                            {format!("Learn in-depth about {module} with practical insights and real-world examples.")}
                        </p>
                    </div>
                }).collect::<Html>()}
            </div>
        </>},
        Section::Features => html! {<>
            <h2>{"Course Features"}</h2>
            <div class="card-grid">
                {FEATURES.iter().enumerate().map(|(i, feature)| html! {
                    <div class="card" key={i}>{*feature}</div>
                }).collect::<Html>()}
            </div>
        </>},
        Section::DurationFees => html! {<>
            <h2>{"Duration & Fees"}</h2>
            <div class="card">
                <ul>
                    {FEES.lines().into_iter().map(|line| html! {
                        <li>{line}</li>
                    }).collect::<Html>()}
                </ul>
                <div class="btn-row">
                    <button class="cta" type="button">{"Enroll Now"}</button>
                    <button class="cta-outline" type="button">{"Book Free Demo"}</button>
                </div>
            </div>
        </>},
        Section::Careers => html! {<>
            <h2>{"Career Path After This Course"}</h2>
            <div class="card">
                <p><strong>{"Roles:"}</strong></p>
                {list(ROLES)}
            </div>
            <div class="card recruiters">
                <p>
                    <strong>{"Recruiters:"}</strong>
                    {" "}
                    {RECRUITERS.join(" | ")}
                </p>
            </div>
        </>},
        Section::Testimonials => html! {<>
            <h2>{"What Our Students Say"}</h2>
            {TESTIMONIALS.iter().map(|t| html! {
                <div class="card quote">
                    {format!("🗣️ “{}” – {}, {}", t.quote, t.name, t.city)}
                </div>
            }).collect::<Html>()}
        </>},
        Section::Faqs => html! {<>
            <h2>{"Frequently Asked Questions"}</h2>
            {FAQS.iter().map(|faq| html! {
                <div class="card">
                    <p>
                        <strong>{format!("Q: {}", faq.question)}</strong>
                        <br/>
                        {format!("A: {}", faq.answer)}
                    </p>
                </div>
            }).collect::<Html>()}
        </>},
        Section::Blog => html! {<>
            <h2>{"Learn More About Mortgages"}</h2>
            {BLOG_POSTS.iter().map(|post| html! {
                <div class="card">{*post}</div>
            }).collect::<Html>()}
        </>},
        Section::Contact => html! {<>
            <h2>{"Contact Us"}</h2>
            <p>
                {format!(
                    "📧 {}\u{a0}\u{a0}|\u{a0}\u{a0}📱 {}",
                    site.config.contact_email, site.config.contact_phone
                )}
            </p>
            <div class="card">
                <ContactForm/>
            </div>
        </>},
    }
}

fn list(items: &[&'static str]) -> Html {
    html! {
        <ul>
            {items.iter().map(|item| html! {<li>{*item}</li>}).collect::<Html>()}
        </ul>
    }
}

fn checklist(items: &[&'static str]) -> Html {
    html! {
        <ul>
            {items.iter().map(|item| html! {<li>{format!("✅ {item}")}</li>}).collect::<Html>()}
        </ul>
    }
}

/// Collects name, email, phone and a message. Submitting does nothing.
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <form class="contact_form" {onsubmit}>
            {CONTACT_FIELDS.iter().map(|field| html! {
                <input
                    name={field.to_lowercase()}
                    placeholder={*field}
                    aria-label={*field}
                />
            }).collect::<Html>()}
            <textarea name="message" placeholder="Message" aria-label="Message" rows="5"/>
            <button type="submit">{"Submit"}</button>
        </form>
    }
}
