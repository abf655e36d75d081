//! Copy for each section of the page.

use crate::site::{slugify, HOME_ID};

/// Sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    AboutUs,
    CourseOverview,
    Curriculum,
    Features,
    DurationFees,
    Careers,
    Testimonials,
    Faqs,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Self; 11] = [
        Self::Home,
        Self::AboutUs,
        Self::CourseOverview,
        Self::Curriculum,
        Self::Features,
        Self::DurationFees,
        Self::Careers,
        Self::Testimonials,
        Self::Faqs,
        Self::Blog,
        Self::Contact,
    ];

    /// The menu item that links here. `None` for the hero.
    pub fn label(self) -> Option<&'static str> {
        Some(match self {
            Self::Home => return None,
            Self::AboutUs => "About Us",
            Self::CourseOverview => "Course Overview",
            Self::Curriculum => "Curriculum",
            Self::Features => "Features",
            Self::DurationFees => "Duration & Fees",
            Self::Careers => "Careers",
            Self::Testimonials => "Testimonials",
            Self::Faqs => "FAQs",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        })
    }

    pub fn id(self) -> String {
        self.label()
            .map(slugify)
            .unwrap_or_else(|| HOME_ID.to_owned())
    }
}

pub struct Hero {
    pub headline: &'static str,
    pub subheadline: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "Build Your Career in Banking & Finance with Mortgage Expertise",
    subheadline: "Learn from Mortgage Specialists & Get Job-Ready for Banks, HFCs, and NBFCs.",
};

pub const ABOUT: &str = "is an initiative by banking professionals with over 12 years of \
    experience in Mortgages & Home Loans. Our mission is simple: to bridge the gap between \
    students and the BFSI industry by offering specialized mortgage training that leads to \
    direct employability.";

pub const ABOUT_HIGHLIGHTS: &[&str] = &[
    "Courses conducted by Industry Specialists",
    "Practical & Job-Oriented Curriculum",
    "Placement Support with Leading Banks & HFCs",
];

pub const OVERVIEW: &str = "Mortgages are the backbone of lending institutions like Banks, \
    HFCs, and NBFCs. With India’s growing demand for home loans, professionals skilled in \
    mortgage processes are highly valued.";

pub const OVERVIEW_OUTCOMES: &[&str] = &[
    "Understand real-world lending processes.",
    "Gain practical skills in credit assessment, compliance, and customer handling.",
    "Enhance your job opportunities in the BFSI sector.",
];

pub const CURRICULUM: &[&str] = &[
    "Introduction to Mortgages & Housing Finance",
    "Loan Eligibility & Income Assessment",
    "Legal & Technical Aspects in Mortgages",
    "RBI Guidelines, KYC & Compliance",
    "Customer Handling & Communication Skills",
    "Case Studies & Practical Scenarios",
];

pub const FEATURES: &[&str] = &[
    "🎓 Live Online / Classroom Sessions",
    "📚 Industry Case Studies & Practical Learning",
    "📜 Certificate of Completion",
    "💼 Resume Building & Interview Prep",
    "🤝 Placement Assistance with Banks/HFCs/NBFCs",
];

pub struct Fees {
    pub duration: &'static str,
    /// ISO 8601, for structured data.
    pub duration_iso: &'static str,
    pub workload_hours: u32,
    pub mode: &'static str,
    pub fee_inr: u32,
    pub discounted_fee_inr: u32,
}

pub const FEES: Fees = Fees {
    duration: "6 Weeks / 40 Hours",
    duration_iso: "P6W",
    workload_hours: 40,
    mode: "Online + Offline",
    fee_inr: 15_000,
    discounted_fee_inr: 9_999,
};

impl Fees {
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Course Duration: {}", self.duration),
            format!("Mode: {}", self.mode),
            format!("Fees: {}", format_inr(self.fee_inr)),
            format!(
                "Discounted Price (Introductory Offer): {}",
                format_inr(self.discounted_fee_inr)
            ),
            "Easy EMI Options Available".to_owned(),
        ]
    }
}

pub const ROLES: &[&str] = &[
    "Credit Analyst",
    "Relationship Manager",
    "Loan Officer",
    "Operations Executive",
];

pub const RECRUITERS: &[&str] = &[
    "ICICI HFC",
    "Axis Bank",
    "Kotak Bank",
    "HDFC Ltd",
    "DCB Bank",
    "Mahindra Finance",
];

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub city: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The course gave me complete confidence to crack my bank interview. I got placed \
            at Axis Bank as a Credit Analyst.",
        name: "Rohan",
        city: "Pune",
    },
    Testimonial {
        quote: "Learning directly from mortgage specialists made a huge difference. The \
            real-life examples helped me understand how the industry works.",
        name: "Sneha",
        city: "Mumbai",
    },
];

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Who can join this course?",
        answer: "Graduates (B.Com, BBA, MBA, B.Tech) and freshers aspiring for BFSI jobs.",
    },
    Faq {
        question: "Is prior banking knowledge required?",
        answer: "No. We start from basics and build up to advanced topics.",
    },
    Faq {
        question: "Is this course online or classroom?",
        answer: "Both options available.",
    },
    Faq {
        question: "Will I get placement support?",
        answer: "Yes, we provide interview preparation and connect you with BFSI recruiters.",
    },
];

pub const BLOG_POSTS: &[&str] = &[
    "Top 5 Skills to Get Placed in Banking & Finance",
    "How Mortgage Lending Works in India",
    "Role of NBFCs in Affordable Housing",
];

pub const CONTACT_FIELDS: &[&str] = &["Name", "Email", "Phone"];

/// Rupee amount with Indian digit grouping, e.g. `₹1,50,000`.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }
    let (head, last3) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (more, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = more;
    }
    groups.push(rest);
    groups.reverse();
    format!("₹{},{last3}", groups.join(","))
}
