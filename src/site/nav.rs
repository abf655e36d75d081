use crate::site::slugify;

/// Anchor of the hero section, which has no menu item of its own.
pub const HOME_ID: &str = "home";

/// A dropdown in the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

pub const NAV_GROUPS: &[NavGroup] = &[
    NavGroup {
        label: "About",
        items: &[
            "About Us",
            "Course Overview",
            "Curriculum",
            "Features",
            "Duration & Fees",
        ],
    },
    NavGroup {
        label: "Opportunities",
        items: &["Careers", "Testimonials", "FAQs"],
    },
    NavGroup {
        label: "Resources",
        items: &["Blog", "Contact"],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub id: String,
}

impl NavLink {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            id: slugify(label),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

impl NavGroup {
    pub fn links(&self) -> impl Iterator<Item = NavLink> + '_ {
        self.items.iter().map(|&label| NavLink::new(label))
    }
}

/// Every item of every group, in menu order.
pub fn nav_links() -> impl Iterator<Item = NavLink> {
    NAV_GROUPS.iter().flat_map(|group| group.links())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_in_menu_order() {
        let ids = nav_links().map(|l| l.id).collect::<Vec<_>>();
        assert_eq!(
            ids,
            [
                "about-us",
                "course-overview",
                "curriculum",
                "features",
                "duration-fees",
                "careers",
                "testimonials",
                "faqs",
                "blog",
                "contact",
            ]
        );
    }

    #[test]
    fn href_is_fragment() {
        assert_eq!(NavLink::new("Duration & Fees").href(), "#duration-fees");
    }

    #[test]
    fn anchors_are_unique() {
        let mut ids = nav_links().map(|l| l.id).collect::<Vec<_>>();
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
        assert!(!ids.iter().any(|id| id == HOME_ID));
    }
}
