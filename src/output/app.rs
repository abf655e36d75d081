use crate::{
    output::{
        course_structured_data, faq_page_structured_data, render_sections,
        web_site_structured_data, write_structured_data, Header, OutputError,
    },
    site::Site,
    util::join,
};
use chrono::Datelike;
use yew::{function_component, html, AttrValue, Html, LocalServerRenderer, Properties};

pub struct AppProps<'a> {
    pub site: &'a Site,
    pub title: AttrValue,
    pub description: Option<AttrValue>,
    pub head: Html,
    pub body: Html,
}

/// The page, with every section and its structured data.
pub fn page(site: &Site) -> Result<Html, OutputError> {
    let web_site = write_structured_data(web_site_structured_data(site))?;
    let course = write_structured_data(course_structured_data(site))?;
    let faq_page = write_structured_data(faq_page_structured_data())?;
    let head = html! {<>
        {web_site}
        {course}
        {faq_page}
    </>};

    Ok(app(AppProps {
        site,
        title: site.config.title.clone().into(),
        description: site.config.description.clone().map(AttrValue::from),
        head,
        body: render_sections(site),
    }))
}

pub fn app(props: AppProps<'_>) -> Html {
    let config = &props.site.config;

    let style = Html::from_html_unchecked(
        format!(
            r#"
        :root {{
            --theme: {theme};
            --theme-light: #e8eef9;
            --text: #1f2933;
        }}

        html {{
            scroll-behavior: smooth;
            scroll-padding-top: 5rem;
        }}

        body {{
            margin: 0;
            color: var(--text);
            font-family: "Helvetica Neue", "Lucida Grande", Arial, Helvetica, sans-serif;
            line-height: 1.5;
        }}

        #header {{
            position: sticky;
            top: 0;
            z-index: 10;
            display: flex;
            align-items: center;
            justify-content: space-between;
            flex-wrap: wrap;
            padding: 0.75rem 2rem;
            background-color: var(--theme);
            color: white;
        }}

        #title {{
            margin: 0;
            font-size: 1.5rem;
        }}

        .hamburger {{
            display: none;
            background: none;
            border: none;
            color: white;
            font-size: 1.75rem;
            cursor: pointer;
        }}

        #site_nav {{
            display: flex;
            align-items: center;
            gap: 1rem;
        }}

        #site_nav a, .dropdown > button {{
            color: white;
            text-decoration: none;
            background: none;
            border: none;
            font: inherit;
            cursor: pointer;
        }}

        .dropdown {{
            position: relative;
        }}

        .dropdown-content {{
            display: none;
            position: absolute;
            right: 0;
            min-width: 12rem;
            padding: 0.5rem 0;
            background-color: white;
            box-shadow: 0 0.5rem 1rem rgba(0, 0, 0, 0.15);
        }}

        .dropdown:hover .dropdown-content, .dropdown:focus-within .dropdown-content {{
            display: flex;
            flex-direction: column;
        }}

        #site_nav .dropdown-content a {{
            color: var(--text);
            padding: 0.4rem 1rem;
        }}

        #site_nav .dropdown-content a:hover {{
            background-color: var(--theme-light);
        }}

        main section {{
            max-width: 60rem;
            margin: 0 auto;
            padding: 3rem 2rem;
        }}

        #home {{
            max-width: none;
            text-align: center;
            background-color: var(--theme-light);
        }}

        .card {{
            margin: 1rem 0;
            padding: 1rem 1.5rem;
            border-radius: 0.5rem;
            background-color: white;
            box-shadow: 0 0.1rem 0.5rem rgba(0, 0, 0, 0.1);
        }}

        .card-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
            gap: 1rem;
        }}

        .card-grid .card {{
            margin: 0;
        }}

        .card_detail {{
            margin-top: 0.5rem;
        }}

        .quote {{
            font-style: italic;
        }}

        .cta, .cta-outline, .contact_form button {{
            margin: 0.5rem;
            padding: 0.75rem 1.5rem;
            border-radius: 0.5rem;
            font: inherit;
            cursor: pointer;
        }}

        .cta, .contact_form button {{
            border: 2px solid var(--theme);
            background-color: var(--theme);
            color: white;
        }}

        .cta-outline {{
            border: 2px solid var(--theme);
            background-color: transparent;
            color: var(--theme);
        }}

        .contact_form {{
            display: flex;
            flex-direction: column;
            gap: 0.75rem;
        }}

        .contact_form input, .contact_form textarea {{
            padding: 0.6rem;
            border: 1px solid #c5ced8;
            border-radius: 0.25rem;
            font: inherit;
        }}

        #footer {{
            padding: 1.5rem 2rem;
            text-align: center;
            font-size: 0.9rem;
            background-color: var(--theme-light);
        }}

        @media (max-width: 768px) {{
            .hamburger {{
                display: block;
            }}

            #site_nav {{
                display: none;
                flex-basis: 100%;
                flex-direction: column;
                align-items: flex-start;
            }}

            #site_nav.open {{
                display: flex;
            }}

            .dropdown-content {{
                position: static;
                box-shadow: none;
            }}
        }}
    "#,
            theme = config.theme_color,
        )
        .into(),
    );

    let script = Html::from_html_unchecked(
        format!("<script>\n{}\n</script>", include_str!("menu.js")).into(),
    );

    let mut robots_meta = "index,follow".to_owned();
    if config.disallow_ai_training {
        robots_meta.push_str(",DisallowAITraining,noai,noimageai");
    }

    let year = chrono::Utc::now().year();

    html! {
        <html lang="en">
            <head>
                <meta charset="UTF-8"/>
                <title>{props.title.clone()}</title>
                <meta property="og:title" content={props.title.clone()}/>
                <meta property="og:site_name" content={config.title.clone()}/>
                if let Some(description) = props.description.clone() {
                    <meta name="description" content={description.clone()}/>
                    <meta property="og:description" content={description}/>
                }
                if !config.keywords.is_empty() {
                    <meta name="keywords" content={config.keywords.join(",")}/>
                }
                if let Some(author) = config.author.clone() {
                    <meta name="author" content={author}/>
                }
                <meta name="generator" content="coursepage"/>
                <meta name="robots" content={robots_meta}/>
                <meta name="theme-color" content={config.theme_color.clone()}/>
                <link rel="manifest" href="/manifest.json"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta property="og:type" content="website" />
                if let Some(canonical) = props.site.canonical_url() {
                    <link rel="canonical" href={canonical.clone()}/>
                    <meta property="og:url" content={canonical}/>
                }
                {props.head.clone()}
                <style>{style}</style>
            </head>
            <body>
                <Header title={config.title.clone()}/>
                <main id="main">
                    {props.body.clone()}
                </main>
                <footer id="footer">
                    {join(&[
                        html!{{format!("© {year} {}", config.title)}},
                        html!{<a href={format!("mailto:{}", config.contact_email)}>{config.contact_email.clone()}</a>},
                    ], &html!{{" | "}})}
                </footer>
                {script}
            </body>
        </html>
    }
}

#[derive(Properties, PartialEq)]
struct InnerAppProps {
    html: Html,
}

#[function_component(InnerApp)]
fn inner_app(props: &InnerAppProps) -> Html {
    props.html.clone()
}

pub fn render_html(html: Html) -> Result<Vec<u8>, OutputError> {
    let renderer =
        LocalServerRenderer::<InnerApp>::with_props(InnerAppProps { html }).hydratable(false);
    let html = futures::executor::block_on(renderer.render());

    let mut options = markup_fmt::config::FormatOptions::default();
    options.layout.use_tabs = true;
    options.layout.indent_width = 1;
    let mut html =
        markup_fmt::format_text(&html, markup_fmt::Language::Html, &options, |code, _| {
            Ok::<_, std::convert::Infallible>(code.into())
        })
        .map_err(|e| OutputError::Format(format!("{e:?}")))?;

    html.insert_str(0, "<!DOCTYPE html>\n");

    html = html
        .lines()
        .filter(|l| !l.chars().all(|c| c.is_whitespace()))
        .map(|l| format!("{l}\n"))
        .collect();

    Ok(html.into_bytes())
}
