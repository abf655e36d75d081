use crate::site::{Site, FAQS, FEES};
use serde::Serialize;
use yew::Html;

pub fn write_structured_data<T: Serialize>(data: T) -> Result<Html, serde_json::Error> {
    #[derive(Serialize)]
    struct Context<T> {
        #[serde(rename = "@context")]
        context: &'static str,
        #[serde(flatten)]
        data: T,
    }

    let json = serde_json::to_string_pretty(&Context {
        context: "https://schema.org",
        data,
    })?;

    Ok(Html::from_html_unchecked(
        format!(
            "<script type=\"application/ld+json\">\n{}\n</script>",
            script_safe(&json)
        )
        .into(),
    ))
}

/// Keeps a `</script>` inside a JSON string from closing the tag.
fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// https://schema.org/Organization
#[derive(Clone, Serialize)]
pub struct OrganizationStructuredData {
    #[serde(rename = "@type")]
    pub _type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// https://schema.org/WebSite
#[derive(Serialize)]
pub struct WebSiteStructuredData {
    #[serde(rename = "@type")]
    pub _type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub name: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "copyrightHolder", skip_serializing_if = "Option::is_none")]
    pub copyright_holder: Option<OrganizationStructuredData>,
}

/// https://schema.org/Course
#[derive(Serialize)]
pub struct CourseStructuredData {
    #[serde(rename = "@type")]
    _type: &'static str,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    provider: OrganizationStructuredData,
    offers: Vec<OfferStructuredData>,
    #[serde(rename = "hasCourseInstance")]
    has_course_instance: Vec<CourseInstanceStructuredData>,
}

/// https://schema.org/Offer
#[derive(Serialize)]
pub struct OfferStructuredData {
    #[serde(rename = "@type")]
    _type: &'static str,
    category: &'static str,
    price: u32,
    #[serde(rename = "priceCurrency")]
    price_currency: &'static str,
}

/// https://schema.org/CourseInstance
#[derive(Serialize)]
pub struct CourseInstanceStructuredData {
    #[serde(rename = "@type")]
    _type: &'static str,
    #[serde(rename = "courseMode")]
    course_mode: &'static str,
    #[serde(rename = "courseWorkload")]
    course_workload: String,
    #[serde(rename = "courseSchedule")]
    course_schedule: ScheduleStructuredData,
}

/// https://schema.org/Schedule
#[derive(Serialize)]
pub struct ScheduleStructuredData {
    #[serde(rename = "@type")]
    _type: &'static str,
    duration: &'static str,
    #[serde(rename = "repeatFrequency")]
    repeat_frequency: &'static str,
    #[serde(rename = "repeatCount")]
    repeat_count: u32,
}

/// https://schema.org/FAQPage
#[derive(Serialize)]
pub struct FaqPageStructuredData {
    #[serde(rename = "@type")]
    _type: &'static str,
    #[serde(rename = "mainEntity")]
    main_entity: Vec<QuestionStructuredData>,
}

#[derive(Serialize)]
pub struct QuestionStructuredData {
    #[serde(rename = "@type")]
    _type: &'static str,
    name: &'static str,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: AnswerStructuredData,
}

#[derive(Serialize)]
pub struct AnswerStructuredData {
    #[serde(rename = "@type")]
    _type: &'static str,
    text: &'static str,
}

pub fn organization_structured_data(site: &Site) -> OrganizationStructuredData {
    OrganizationStructuredData {
        _type: "Organization",
        name: site.config.title.clone(),
        url: site.canonical_url(),
        email: Some(site.config.contact_email.clone()),
    }
}

pub fn web_site_structured_data(site: &Site) -> WebSiteStructuredData {
    WebSiteStructuredData {
        _type: "WebSite",
        url: site.canonical_url(),
        name: site.config.title.clone(),
        description: site.config.description.clone(),
        copyright_holder: Some(organization_structured_data(site)),
    }
}

pub fn course_structured_data(site: &Site) -> CourseStructuredData {
    let instance = |course_mode: &'static str| CourseInstanceStructuredData {
        _type: "CourseInstance",
        course_mode,
        course_workload: format!("PT{}H", FEES.workload_hours),
        course_schedule: ScheduleStructuredData {
            _type: "Schedule",
            duration: FEES.duration_iso,
            repeat_frequency: "Weekly",
            repeat_count: 6,
        },
    };
    let offer = |category: &'static str, price: u32| OfferStructuredData {
        _type: "Offer",
        category,
        price,
        price_currency: "INR",
    };

    CourseStructuredData {
        _type: "Course",
        name: format!("{} Mortgage Training", site.config.title),
        description: site.config.description.clone(),
        provider: organization_structured_data(site),
        offers: vec![
            offer("Paid", FEES.fee_inr),
            offer("Introductory Offer", FEES.discounted_fee_inr),
        ],
        has_course_instance: vec![instance("Online"), instance("Onsite")],
    }
}

pub fn faq_page_structured_data() -> FaqPageStructuredData {
    FaqPageStructuredData {
        _type: "FAQPage",
        main_entity: FAQS
            .iter()
            .map(|faq| QuestionStructuredData {
                _type: "Question",
                name: faq.question,
                accepted_answer: AnswerStructuredData {
                    _type: "Answer",
                    text: faq.answer,
                },
            })
            .collect(),
    }
}
