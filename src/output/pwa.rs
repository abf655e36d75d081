use serde::Serialize;

use crate::{output::OutputError, site::Site};

pub fn write_manifest(site: &Site) -> Result<Vec<u8>, OutputError> {
    let manifest = Manifest {
        name: site.config.title.clone(),
        description: site.config.description.clone(),
        display: "browser".to_owned(),
        categories: vec!["education".to_owned()],
        start_url: "/".to_owned(),
        theme_color: site.config.theme_color.clone(),
        background_color: "#ffffff".to_owned(),
    };

    Ok(serde_json::to_string(&manifest)?.into_bytes())
}

#[derive(Serialize)]
struct Manifest {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    display: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    categories: Vec<String>,
    start_url: String,
    theme_color: String,
    background_color: String,
}

#[cfg(test)]
mod tests {
    use super::write_manifest;
    use crate::{config::SiteConfig, site::Site};

    #[test]
    fn manifest_fields() {
        let site = Site::new(SiteConfig {
            description: None,
            ..SiteConfig::default()
        });
        let manifest: serde_json::Value =
            serde_json::from_slice(&write_manifest(&site).unwrap()).unwrap();
        assert_eq!(manifest["name"], "Bharat Mortgages");
        assert_eq!(manifest["start_url"], "/");
        assert!(manifest.get("description").is_none());
        assert_eq!(manifest["categories"][0], "education");
    }
}
