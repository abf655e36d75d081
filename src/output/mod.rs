use crate::site::{nav_links, Site, HOME_ID};
use sitemap_rs::{
    url::{ChangeFrequency, Url},
    url_builder::UrlBuilder,
    url_set::UrlSet,
};
use std::{collections::BTreeMap, fmt::Write};
use thiserror::Error;

mod app;
mod build;
mod header;
mod pwa;
mod sections;
mod serve;
mod structured_data;

pub use app::*;
pub use build::*;
pub use header::*;
pub use pwa::*;
pub use sections::*;
pub use serve::*;
pub use structured_data::*;

/// Public path (`/index.html`) to file contents.
pub type Output = BTreeMap<String, Vec<u8>>;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("menu links to #{0}, which no section has")]
    DanglingAnchor(String),
    #[error("section #{0} isn't linked from the menu")]
    UnlinkedSection(String),
    #[error("section id #{0} is used more than once")]
    DuplicateSection(String),
    #[error("duplicate output {0}")]
    DuplicatePath(String),
    #[error("couldn't format html: {0}")]
    Format(String),
    #[error("couldn't serialize json")]
    Json(#[from] serde_json::Error),
    #[error("couldn't build sitemap: {0}")]
    Sitemap(String),
}

impl Site {
    pub fn output(&self) -> Result<Output, OutputError> {
        let mut ret = Output::new();
        fn ret_insert(ret: &mut Output, path: &str, file: Vec<u8>) -> Result<(), OutputError> {
            if ret.insert(path.to_owned(), file).is_some() {
                return Err(OutputError::DuplicatePath(path.to_owned()));
            }
            Ok(())
        }

        let index = render_html(page(self)?)?;
        verify_anchors(&String::from_utf8_lossy(&index))?;
        ret_insert(&mut ret, "/index.html", index)?;

        ret_insert(&mut ret, "/manifest.json", write_manifest(self)?)?;
        ret_insert(&mut ret, "/robots.txt", self.robots_txt())?;

        if let Some(sitemap) = self.sitemap()? {
            ret_insert(&mut ret, "/sitemap.xml", sitemap)?;
        }

        Ok(ret)
    }

    fn robots_txt(&self) -> Vec<u8> {
        let mut robots_txt = String::new();
        writeln!(robots_txt, "User-agent: *").unwrap();
        if self.config.disallow_ai_training {
            writeln!(robots_txt, "DisallowAITraining: /").unwrap();
        }
        writeln!(robots_txt, "Allow: /").unwrap();
        if let Some(root_url) = &self.config.root_url {
            writeln!(
                robots_txt,
                "Sitemap: {}/sitemap.xml",
                root_url.trim_end_matches('/')
            )
            .unwrap();
        }
        robots_txt.into_bytes()
    }

    fn sitemap(&self) -> Result<Option<Vec<u8>>, OutputError> {
        let Some(canonical) = self.canonical_url() else {
            return Ok(None);
        };
        let url: Url = UrlBuilder::new(canonical)
            .change_frequency(ChangeFrequency::Monthly)
            .build()
            .map_err(|e| OutputError::Sitemap(format!("{e:?}")))?;
        let sitemap = UrlSet::new(vec![url]).map_err(|e| OutputError::Sitemap(format!("{e:?}")))?;
        let mut ret = Vec::<u8>::new();
        sitemap
            .write(&mut ret)
            .map_err(|e| OutputError::Sitemap(format!("{e:?}")))?;
        Ok(Some(ret))
    }
}

/// Ids of every `<section>` in a rendered document, in order.
pub fn section_ids(html: &str) -> Vec<String> {
    html.match_indices("<section")
        .filter_map(|(start, _)| {
            let tag = &html[start..];
            let tag = &tag[..tag.find('>')?];
            let value = &tag[tag.find("id=\"")? + 4..];
            Some(value[..value.find('"')?].to_owned())
        })
        .collect()
}

/// Checks that each menu anchor lands on exactly one section and that
/// every section other than the hero is reachable from the menu. The
/// header's `Home` link counts as an anchor too.
pub fn verify_anchors(html: &str) -> Result<(), OutputError> {
    let ids = section_ids(html);
    let anchors = nav_links().map(|link| link.id).collect::<Vec<_>>();

    for (i, id) in ids.iter().enumerate() {
        if ids[..i].contains(id) {
            return Err(OutputError::DuplicateSection(id.clone()));
        }
        if id != HOME_ID && !anchors.contains(id) {
            return Err(OutputError::UnlinkedSection(id.clone()));
        }
    }
    for anchor in anchors {
        if !ids.contains(&anchor) {
            return Err(OutputError::DanglingAnchor(anchor));
        }
    }
    if !ids.iter().any(|id| id == HOME_ID) {
        return Err(OutputError::DanglingAnchor(HOME_ID.to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::SiteConfig, site::slugify};

    fn site() -> Site {
        Site::new(SiteConfig::default())
    }

    fn index_html(site: &Site) -> String {
        let output = site.output().unwrap();
        String::from_utf8(output["/index.html"].clone()).unwrap()
    }

    #[test]
    fn section_ids_match_menu() {
        let html = index_html(&site());
        let ids = section_ids(&html);
        assert_eq!(ids.first().map(String::as_str), Some(HOME_ID));
        assert_eq!(ids.len(), 11);
        for id in ids.iter().filter(|id| *id != HOME_ID) {
            let matching = crate::site::NAV_GROUPS
                .iter()
                .flat_map(|group| group.items)
                .filter(|label| slugify(label) == *id)
                .count();
            assert_eq!(matching, 1, "{id}");
        }
    }

    #[test]
    fn menu_rendered_closed() {
        let html = index_html(&site());
        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.contains("aria-label=\"Toggle Menu\""));
        assert!(html.contains("href=\"#duration-fees\""));
        assert!(html.contains("href=\"#home\""));
        assert!(!html.contains("class=\"open\""));
    }

    #[test]
    fn page_content() {
        let html = index_html(&site());
        assert!(html.contains("Module 6:"));
        assert!(html.contains("Fees: ₹15,000"));
        assert!(html.contains("+91-XXXXXXXXXX"));
        assert!(html.contains("placeholder=\"Message\""));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("\"FAQPage\""));
    }

    #[test]
    fn without_root_url() {
        let output = site().output().unwrap();
        assert!(!output.contains_key("/sitemap.xml"));
        assert!(output.contains_key("/manifest.json"));
        let robots = String::from_utf8(output["/robots.txt"].clone()).unwrap();
        assert_eq!(robots, "User-agent: *\nAllow: /\n");
        assert!(!index_html(&site()).contains("rel=\"canonical\""));
    }

    #[test]
    fn with_root_url() {
        let site = Site::new(SiteConfig {
            root_url: Some("https://example.com".to_owned()),
            disallow_ai_training: true,
            ..SiteConfig::default()
        });
        let output = site.output().unwrap();
        let sitemap = String::from_utf8(output["/sitemap.xml"].clone()).unwrap();
        assert!(sitemap.contains("https://example.com/"));
        let robots = String::from_utf8(output["/robots.txt"].clone()).unwrap();
        assert_eq!(
            robots,
            "User-agent: *\nDisallowAITraining: /\nAllow: /\nSitemap: https://example.com/sitemap.xml\n"
        );
        let html = index_html(&site);
        assert!(html.contains("https://example.com/"));
        assert!(html.contains("noai"));
    }

    #[test]
    fn menu_script_matches_markup() {
        let html = index_html(&site());
        let script = include_str!("menu.js");
        assert!(html.contains("<script>"));
        assert!(html.contains("classList.toggle(\"open\")"));
        assert!(html.contains("event.preventDefault()"));
        for selector in ["\"site_nav\"", "\"#header .hamburger\"", "\"form.contact_form\""] {
            assert!(script.contains(selector), "{selector}");
            assert!(html.contains(selector), "{selector}");
        }
        assert!(html.contains("id=\"site_nav\""));
        assert!(html.contains("id=\"header\""));
        assert!(html.contains("class=\"hamburger\""));
        assert!(html.contains("class=\"contact_form\""));
        assert_eq!(html.matches("class=\"contact_form\"").count(), 1);
    }

    #[test]
    fn finds_section_ids() {
        let html = r#"<main><section id="home" class="x"></section><section>
            </section><section class="y" id="blog"></section><div id="other"></div></main>"#;
        assert_eq!(section_ids(html), ["home", "blog"]);
    }

    #[test]
    fn rejects_mismatched_sections() {
        let all = nav_links()
            .map(|link| format!("<section id=\"{}\"></section>", link.id))
            .collect::<String>();
        assert!(verify_anchors(&format!("<section id=\"home\"></section>{all}")).is_ok());

        assert!(matches!(
            verify_anchors(&all),
            Err(OutputError::DanglingAnchor(id)) if id == HOME_ID
        ));
        assert!(matches!(
            verify_anchors("<section id=\"home\"></section>"),
            Err(OutputError::DanglingAnchor(id)) if id == "about-us"
        ));
        assert!(matches!(
            verify_anchors(&format!("{all}<section id=\"pricing\"></section>")),
            Err(OutputError::UnlinkedSection(id)) if id == "pricing"
        ));
        assert!(matches!(
            verify_anchors(&format!("{all}<section id=\"blog\"></section>")),
            Err(OutputError::DuplicateSection(id)) if id == "blog"
        ));
    }
}
