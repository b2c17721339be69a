//! Static display data for the portfolio sections and the statistics derived from it.

use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub role: &'static str,
    pub semester: &'static str,
    pub headline: &'static str,
    pub institute: &'static str,
    pub specialization: &'static str,
    pub position: &'static str,
    pub network_status: &'static str,
    pub bio: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug)]
pub struct HeroStat {
    pub label: &'static str,
    pub value: &'static str,
}

/// Row of the about section's stats panel.
#[derive(Debug)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub max_value: u32,
    pub description: &'static str,
}

impl Stat {
    pub fn percent(&self) -> u32 {
        (f64::from(self.value) / f64::from(self.max_value) * 100.0).round() as u32
    }
}

#[derive(
    Display, EnumString, AsRefStr, IntoStaticStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq,
)]
pub enum SkillCategory {
    Frontend,
    Backend,
    #[strum(serialize = "AI/ML")]
    AiMl,
    Tools,
}

impl SkillCategory {
    pub fn css_class(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "category-frontend",
            SkillCategory::Backend => "category-backend",
            SkillCategory::AiMl => "category-aiml",
            SkillCategory::Tools => "category-tools",
        }
    }
}

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    S,
    A,
    B,
    C,
    D,
}

pub fn skill_rank(level: u8) -> Rank {
    match level {
        90.. => Rank::S,
        80..=89 => Rank::A,
        70..=79 => Rank::B,
        60..=69 => Rank::C,
        _ => Rank::D,
    }
}

#[derive(Debug)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    pub category: SkillCategory,
    pub level: u8,
    pub experience: u32,
    pub max_experience: u32,
    pub description: &'static str,
    pub icon: &'static str,
}

impl Skill {
    pub fn rank(&self) -> Rank {
        skill_rank(self.level)
    }

    pub fn experience_percent(&self) -> f64 {
        f64::from(self.experience) / f64::from(self.max_experience) * 100.0
    }
}

#[derive(Display, EnumString, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

#[derive(Display, EnumString, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    B,
    A,
    S,
    SS,
}

#[derive(Display, EnumString, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Ml,
    System,
}

#[derive(Debug)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub status: ProjectStatus,
    pub difficulty: Difficulty,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub image: &'static str,
    pub category: ProjectCategory,
}

impl Project {
    /// Technologies shown on the card; the rest collapse into a `+N` badge.
    pub fn headline_technologies(&self) -> &'static [&'static str] {
        &self.technologies[..self.technologies.len().min(3)]
    }

    pub fn hidden_technology_count(&self) -> usize {
        self.technologies.len().saturating_sub(3)
    }
}

#[derive(Debug)]
pub struct ContactMethod {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub description: &'static str,
}

impl ContactMethod {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

pub static PROFILE: Profile = Profile {
    name: "Sidhartha Rayudu.M",
    initials: "MSR",
    role: "Developer",
    semester: "5th Semester",
    headline: "Aspiring Developer in Web Development and Machine Learning",
    institute: "Sathyabama Institute of Science and Technology",
    specialization: "Computer Science Engineering",
    position: "Skilled Developer",
    network_status: "Active",
    bio: "A dedicated developer specializing in web development and machine learning. \
          Currently progressing through academics while building real-world projects \
          and mastering emerging technologies. Recognized for strong problem-solving \
          skills and collaborative leadership.",
    tagline: "Ready to join for the next great adventure in technology",
};

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat {
        label: "CGPA",
        value: "8.0",
    },
    HeroStat {
        label: "Institute",
        value: "Sathyabama University",
    },
    HeroStat {
        label: "Status",
        value: "Active Student",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        label: "Academic Level",
        value: 5,
        max_value: 8,
        description: "5th Semester CSE Student",
    },
    Stat {
        label: "CGPA Score",
        value: 83,
        max_value: 100,
        description: "8.3 / 10.0",
    },
    Stat {
        label: "Web Development",
        value: 68,
        max_value: 100,
        description: "Intermediate Level",
    },
    Stat {
        label: "Machine Learning",
        value: 60,
        max_value: 100,
        description: "Intermediate Level",
    },
    Stat {
        label: "Problem Solving",
        value: 90,
        max_value: 100,
        description: "Expert",
    },
    Stat {
        label: "Team Collaboration",
        value: 88,
        max_value: 100,
        description: "Expert",
    },
];

const fn skill(
    id: &'static str,
    name: &'static str,
    category: SkillCategory,
    level: u8,
    description: &'static str,
    icon: &'static str,
) -> Skill {
    Skill {
        id,
        name,
        category,
        level,
        experience: level as u32 * 100,
        max_experience: 10_000,
        description,
        icon,
    }
}

pub const SKILLS: &[Skill] = &[
    skill(
        "react",
        "React Development",
        SkillCategory::Frontend,
        88,
        "Advanced React with hooks, context, and modern patterns",
        "⚛️",
    ),
    skill(
        "nextjs",
        "Next.js Framework",
        SkillCategory::Frontend,
        85,
        "Full-stack React framework with SSR and API routes",
        "▲",
    ),
    skill(
        "tailwind",
        "Tailwind CSS",
        SkillCategory::Frontend,
        90,
        "Utility-first CSS framework mastery",
        "🎨",
    ),
    skill(
        "typescript",
        "TypeScript",
        SkillCategory::Frontend,
        80,
        "Type-safe JavaScript development",
        "📘",
    ),
    skill(
        "nodejs",
        "Node.js",
        SkillCategory::Backend,
        80,
        "Server-side JavaScript runtime",
        "🟢",
    ),
    skill(
        "python",
        "Python",
        SkillCategory::Backend,
        85,
        "Backend development and data science",
        "🐍",
    ),
    skill(
        "databases",
        "Database Management",
        SkillCategory::Backend,
        75,
        "SQL and NoSQL database design and optimization",
        "🗄️",
    ),
    skill(
        "machine-learning",
        "Machine Learning",
        SkillCategory::AiMl,
        75,
        "Supervised and unsupervised learning algorithms",
        "🤖",
    ),
    skill(
        "tensorflow",
        "TensorFlow",
        SkillCategory::AiMl,
        70,
        "Deep learning framework for neural networks",
        "🧠",
    ),
    skill(
        "opencv",
        "Computer Vision",
        SkillCategory::AiMl,
        65,
        "Image processing and computer vision",
        "👁️",
    ),
    skill(
        "git",
        "Git & GitHub",
        SkillCategory::Tools,
        85,
        "Version control and collaborative development",
        "📚",
    ),
    skill(
        "docker",
        "Docker",
        SkillCategory::Tools,
        70,
        "Containerization and deployment",
        "🐳",
    ),
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: "donation-website",
        title: "Donation Platform",
        description: "Full-stack donation management system with payment integration",
        long_description: "A comprehensive donation platform built with Next.js and modern web \
            technologies. Features secure payment processing, donor management, campaign \
            tracking, and real-time analytics dashboard.",
        status: ProjectStatus::InProgress,
        difficulty: Difficulty::A,
        technologies: &["Next.js", "TypeScript", "Stripe", "PostgreSQL", "Tailwind CSS"],
        features: &[
            "Payment Integration",
            "User Authentication",
            "Admin Dashboard",
            "Real-time Analytics",
        ],
        github_url: None,
        live_url: None,
        image: "/static/images/donation-platform.svg",
        category: ProjectCategory::Web,
    },
    Project {
        id: "satellite-classifier",
        title: "Satellite Image Classifier",
        description: "ML model for classifying satellite imagery using deep learning",
        long_description: "Advanced machine learning project that uses convolutional neural \
            networks to classify different types of terrain and objects in satellite imagery. \
            Achieved 94% accuracy on test dataset.",
        status: ProjectStatus::Completed,
        difficulty: Difficulty::S,
        technologies: &["Python", "TensorFlow", "OpenCV", "NumPy", "Matplotlib"],
        features: &[
            "CNN Architecture",
            "Data Augmentation",
            "Transfer Learning",
            "Model Optimization",
        ],
        github_url: Some("https://github.com/SidharthaRayudu6303/satellite-classifier"),
        live_url: None,
        image: "/static/images/satellite-classifier.svg",
        category: ProjectCategory::Ml,
    },
    Project {
        id: "disaster-monitoring",
        title: "Disaster Monitoring System",
        description: "Real-time disaster detection and alert system using IoT sensors",
        long_description: "IoT-based disaster monitoring system that uses multiple sensors to \
            detect natural disasters like floods, earthquakes, and fires. Provides real-time \
            alerts and emergency response coordination.",
        status: ProjectStatus::Completed,
        difficulty: Difficulty::S,
        technologies: &["Python", "IoT Sensors", "Flask", "MongoDB", "WebSocket"],
        features: &[
            "Real-time Monitoring",
            "Alert System",
            "Data Visualization",
            "Emergency Response",
        ],
        github_url: Some("https://github.com/SidharthaRayudu6303/disaster-monitoring"),
        live_url: None,
        image: "/static/images/disaster-monitoring.svg",
        category: ProjectCategory::System,
    },
    Project {
        id: "ml-projects",
        title: "ML Research Projects",
        description: "Collection of machine learning experiments and research implementations",
        long_description: "Various machine learning projects including predictive models, data \
            analysis, and algorithm implementations. Covers supervised learning, unsupervised \
            learning, and deep learning techniques.",
        status: ProjectStatus::Completed,
        difficulty: Difficulty::A,
        technologies: &["Python", "Scikit-learn", "Pandas", "Jupyter", "Seaborn"],
        features: &[
            "Predictive Models",
            "Data Analysis",
            "Algorithm Implementation",
            "Research Documentation",
        ],
        github_url: Some("https://github.com/SidharthaRayudu6303/ml-projects"),
        live_url: None,
        image: "/static/images/ml-projects.svg",
        category: ProjectCategory::Ml,
    },
];

pub const CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        label: "Email",
        value: "madhavarapusidhartharayudu@gmail.com",
        href: "mailto:madhavarapusidhartharayudu@gmail.com",
        description: "Send a direct message",
    },
    ContactMethod {
        label: "Mobile",
        value: "6303075505",
        href: "tel:6303075505",
        description: "Call for urgent matters",
    },
    ContactMethod {
        label: "GitHub",
        value: "SidharthaRayudu6303",
        href: "https://github.com/SidharthaRayudu6303",
        description: "View code repositories",
    },
    ContactMethod {
        label: "Location",
        value: "Chennai, India",
        href: "#",
        description: "Based in Chennai",
    },
];

/// Filter labels: "All" then each category in order of first appearance.
pub fn skill_categories() -> Vec<&'static str> {
    let mut categories = vec![ALL_CATEGORIES];
    for skill in SKILLS {
        let label: &'static str = skill.category.into();
        if !categories.contains(&label) {
            categories.push(label);
        }
    }
    categories
}

/// Skills for a filter label. "All", a missing or an unknown label yields every skill.
pub fn filter_skills(category: Option<&str>) -> Vec<&'static Skill> {
    let category = category.and_then(|c| c.parse::<SkillCategory>().ok());

    SKILLS
        .iter()
        .filter(|skill| category.is_none_or(|c| skill.category == c))
        .collect()
}

pub fn average_skill_level() -> u32 {
    let total: u32 = SKILLS.iter().map(|skill| u32::from(skill.level)).sum();
    (f64::from(total) / SKILLS.len() as f64).round() as u32
}

/// Skills ranked A or better.
pub fn high_rank_skill_count() -> usize {
    SKILLS.iter().filter(|skill| skill.level >= 80).count()
}

/// Rounded mean of the about-section stat values.
pub fn overall_power_level(values: &[u32]) -> u32 {
    if values.is_empty() {
        return 0;
    }

    let total: u32 = values.iter().sum();
    (f64::from(total) / values.len() as f64).round() as u32
}

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}
