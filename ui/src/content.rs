//! Everything the site displays, in one place.
//!
//! The catalog is hand-authored `'static` data: nothing here is ever
//! constructed or mutated at runtime, components only read it. Display
//! order of every slice is the authored order.

use crate::components::icons::Glyph;

pub struct NavLink {
    pub label: &'static str,
    /// Fragment of the form `#section-id`; must match one of [`SECTION_IDS`].
    pub anchor: &'static str,
}

/// Every in-page scroll target the page renders, in document order.
/// The hero carries the `about` id.
pub const SECTION_IDS: [&str; 5] = ["about", "experience", "projects", "skills", "contact"];

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Experience", anchor: "#experience" },
    NavLink { label: "Projects", anchor: "#projects" },
    NavLink { label: "Skills", anchor: "#skills" },
    NavLink { label: "Contact", anchor: "#contact" },
];

pub struct SubProject {
    /// Empty when the role had a single undifferentiated project; the
    /// timeline then renders the bullets without a sub-heading.
    pub name: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct ExperienceEntry {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub sub_projects: &'static [SubProject],
}

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Freelance Developer",
        company: "Freelancer",
        period: "2025.12 - Present",
        sub_projects: &[
            SubProject {
                name: "Deco My Tree server maintenance",
                bullets: &[
                    "Mitigated DDoS attacks; vertical upgrades of RDS and Redis",
                    "Built additional API endpoints to grow ad revenue",
                ],
            },
            SubProject {
                name: "Uphill full-stack contract",
                bullets: &[
                    "Built a problem-solving app for students",
                    "Apple Pencil handwriting input through a React Native bridge",
                ],
            },
        ],
    },
    ExperienceEntry {
        role: "Server Developer",
        company: "Unboxers Inc.",
        period: "2022.09 - 2024.09",
        sub_projects: &[SubProject {
            name: "",
            bullets: &[
                "Built API servers and infrastructure for more than ten services",
                "Designed and tuned architecture for high-traffic workloads",
            ],
        }],
    },
];

pub struct EducationEntry {
    pub school: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
    pub awards: &'static [&'static str],
}

pub const EDUCATION: &[EducationEntry] = &[EducationEntry {
    school: "Yonsei University",
    degree: "B.S. in Architectural Engineering",
    period: "2024.02",
    awards: &[
        "2021 seismic structure design competition: Minister of Land award",
        "2022 LH real-estate finance paper contest: excellence award",
    ],
}];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LinkKind {
    Website,
    AppStore,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Website => "Website",
            LinkKind::AppStore => "App Store",
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            LinkKind::Website => Glyph::Globe,
            LinkKind::AppStore => Glyph::Smartphone,
        }
    }
}

pub struct ProjectLink {
    pub kind: LinkKind,
    pub url: &'static str,
}

pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    /// Raw image reference as authored, with or without a leading slash;
    /// resolve through [`asset_path`] before rendering.
    pub image: Option<&'static str>,
    pub details: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub links: &'static [ProjectLink],
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Deco My Tree",
        description: "Anonymous message service used by more than six million people. \
                      Solved a range of engineering challenges to keep large traffic \
                      spikes stable.",
        image: Some("deco.webp"),
        details: &[
            "Spread public API DB write load; DDoS response with fake tokens and AWS WAF",
            "High-throughput API server on Fiber (Golang)",
            "Operated AWS infrastructure (RDS, Redis, EC2, WAF)",
        ],
        tags: &["Golang", "Fiber", "AWS", "PostgreSQL", "Redis"],
        links: &[
            ProjectLink {
                kind: LinkKind::Website,
                url: "https://decomytree.com/",
            },
            ProjectLink {
                kind: LinkKind::AppStore,
                url: "https://apps.apple.com/us/app/deco-my-tree-x-mas-messages/id6473818952",
            },
        ],
    },
    ProjectEntry {
        title: "Concept - AI Profile",
        description: "AI profile picture generator with over a hundred thousand users. \
                      Built a reliable data pipeline between the AI workers and the \
                      client apps.",
        image: Some("/concept.webp"),
        details: &[
            "Built and maintained the FastAPI backend",
            "Infrastructure as code with Terraform",
            "Asynchronous job processing on AWS ECS and SQS",
        ],
        tags: &["Python", "FastAPI", "AWS ECS & SQS", "PostgreSQL"],
        links: &[ProjectLink {
            kind: LinkKind::AppStore,
            url: "https://apps.apple.com/kr/app/concept-ai-profile/id6470380557",
        }],
    },
    ProjectEntry {
        title: "HYPE - Anonymous Polls",
        description: "Anonymous polling SNS used by six hundred thousand students. \
                      Kept the service stable through database tuning and autoscaling.",
        image: Some("/hype.webp"),
        details: &[
            "RDS Aurora with EC2 auto scaling",
            "Response-time wins from a Redis cache strategy",
            "Online DDL migrations of large tables with Percona",
        ],
        tags: &["Django", "DRF", "AWS", "MySQL", "Datadog"],
        links: &[],
    },
    ProjectEntry {
        title: "Inbrain Math Academy",
        description: "Math tutoring program built from lecture videos and problem sets, \
                      with per-student problem selection.",
        image: Some("inbrain.webp"),
        details: &[
            "Problem selection algorithm driven by student skill level",
            "Full-stack development on Django",
            "Built and operated the AWS infrastructure",
        ],
        tags: &["Django", "AWS", "Full Stack"],
        links: &[],
    },
    ProjectEntry {
        title: "Uphill",
        description: "App where students solve problems and get feedback on their \
                      work, built full-stack with React Native and FastAPI.",
        image: Some("/uphill.webp"),
        details: &[
            "Apple Pencil handwriting input through a React Native bridge",
            "Teacher admin pages in React (Vite)",
            "FastAPI backend and AWS infrastructure",
        ],
        tags: &["FastAPI", "React Native", "React", "AWS"],
        links: &[ProjectLink {
            kind: LinkKind::AppStore,
            url: "https://apps.apple.com/kr/app/uphill/id6756876879",
        }],
    },
];

pub struct SkillCategory {
    pub label: &'static str,
    pub glyph: Glyph,
    /// Tailwind classes coloring the icon tile.
    pub accent: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        label: "Backend",
        glyph: Glyph::Server,
        accent: "bg-blue-100 text-primary",
        skills: &["Python", "Django", "FastAPI", "Golang", "Fiber"],
    },
    SkillCategory {
        label: "Infrastructure & DB",
        glyph: Glyph::Cloud,
        accent: "bg-green-100 text-green-600",
        skills: &["AWS", "PostgreSQL", "MySQL", "Redis", "Docker"],
    },
    SkillCategory {
        label: "Frontend & Others",
        glyph: Glyph::Code,
        accent: "bg-purple-100 text-purple-600",
        skills: &["React", "React Native", "JavaScript", "Git", "Datadog"],
    },
];

pub const CONTACT_EMAIL: &str = "sdhkygg@gmail.com";

/// Project images were authored both with and without a leading slash;
/// resolve both forms to the same place under the static assets mount.
pub fn asset_path(raw: &str) -> String {
    format!("/assets/img/{}", raw.trim_start_matches('/'))
}
