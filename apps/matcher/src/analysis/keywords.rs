//! Static keyword tables driving résumé analysis. All entries are lowercase
//! and matched by substring against the lowercased résumé text.

/// Technology and soft-skill keywords recognized as candidate skills.
pub const SKILL_KEYWORDS: &[&str] = &[
    "react",
    "angular",
    "vue",
    "javascript",
    "typescript",
    "node.js",
    "python",
    "java",
    "c#",
    "php",
    "ruby",
    "go",
    "swift",
    "kotlin",
    "flutter",
    "react native",
    "html",
    "css",
    "sass",
    "tailwind",
    "bootstrap",
    "jquery",
    "redux",
    "graphql",
    "rest api",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "git",
    "github",
    "agile",
    "scrum",
    "devops",
    "ci/cd",
    "terraform",
    "ansible",
    "linux",
    "machine learning",
    "ai",
    "data science",
    "tensorflow",
    "pytorch",
    "pandas",
    "figma",
    "sketch",
    "adobe",
    "photoshop",
    "illustrator",
    "ui/ux",
    "design",
    "project management",
    "leadership",
    "team lead",
    "communication",
    "problem solving",
];

/// Seniority tier markers, checked in precedence order executive → senior → mid.
pub const EXECUTIVE_KEYWORDS: &[&str] = &["director", "vp", "cto", "ceo", "executive"];
pub const SENIOR_KEYWORDS: &[&str] = &["senior", "lead", "principal", "architect", "manager"];
pub const MID_KEYWORDS: &[&str] = &["3 years", "4 years", "5 years", "intermediate"];

/// Role titles a candidate may express interest in.
pub const ROLE_KEYWORDS: &[&str] = &[
    "frontend developer",
    "backend developer",
    "full stack developer",
    "mobile developer",
    "ios developer",
    "android developer",
    "data scientist",
    "machine learning engineer",
    "devops engineer",
    "ui/ux designer",
    "product manager",
    "project manager",
    "software engineer",
    "web developer",
    "qa engineer",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "computer science",
    "engineering",
    "information technology",
    "software engineering",
];
