// SPDX-License-Identifier: MPL-2.0
use super::{
    Experience, ExperienceId, Feature, Profile, Project, ProjectId, SectionIntro, Skill,
    SkillLevel, SocialKind, SocialLink, Stat,
};

pub(super) static PROFILE: Profile = Profile {
    brand: "Portfolio",
    greeting: "Welcome to my portfolio",
    name: "Hans Cyril T. Eder",
    headline: "Full Stack Developer & Creative Designer",
    tagline: "I create beautiful, functional, and user-centered web experiences. \
              With expertise in React, TypeScript, and modern web technologies, \
              I help businesses and individuals bring their digital vision to life.",
    bio: &[
        "With over 5 years of experience in web development, I've had the privilege \
         of working with startups, agencies, and enterprises to build digital \
         solutions that make a real impact.",
        "I specialize in building modern, responsive web applications using \
         cutting-edge technologies like React, TypeScript, and Tailwind CSS. My \
         approach combines technical expertise with a deep understanding of user \
         experience design.",
        "When I'm not coding, you can find me exploring new design trends, \
         contributing to open-source projects, or mentoring aspiring developers. \
         I'm always eager to learn and grow in this ever-evolving field.",
    ],
    footer_blurb: "Creating beautiful and functional web experiences.",
    about: SectionIntro {
        title: "About Me",
        subtitle: "Passionate developer with a keen eye for design and a commitment \
                   to creating exceptional digital experiences.",
    },
    skills_title: "Technical Skills",
    projects: SectionIntro {
        title: "Featured Projects",
        subtitle: "Showcasing some of my best work across different technologies \
                   and industries.",
    },
    experience: SectionIntro {
        title: "Experience",
        subtitle: "My professional journey and roles in building amazing digital \
                   products.",
    },
    contact: SectionIntro {
        title: "Get In Touch",
        subtitle: "Have a project in mind? Let's work together to bring your ideas \
                   to life.",
    },
};

pub(super) static SKILLS: &[Skill] = &[
    skill("React", 95, "Frontend"),
    skill("TypeScript", 90, "Language"),
    skill("Tailwind CSS", 92, "Styling"),
    skill("JavaScript", 95, "Language"),
    skill("Next.js", 85, "Frontend"),
    skill("Node.js", 80, "Backend"),
    skill("MongoDB", 80, "Database"),
    skill("PostgreSQL", 78, "Database"),
];

const fn skill(name: &'static str, level: u8, category: &'static str) -> Skill {
    Skill {
        name,
        level: SkillLevel::new(level),
        category,
    }
}

pub(super) static PROJECTS: &[Project] = &[
    Project {
        id: ProjectId(1),
        title: "E-commerce Platform",
        description: "A full-stack e-commerce application with product filtering, \
                      shopping cart, and payment integration.",
        image: "https://images.unsplash.com/photo-1557821552-17105176677c?w=400&h=300&fit=crop",
        technologies: &["React", "Node.js", "MongoDB", "Stripe"],
        live_link: "#",
        github_link: "#",
        category: "Full Stack",
    },
    Project {
        id: ProjectId(2),
        title: "Task Management App",
        description: "A collaborative task management tool with real-time updates \
                      and user authentication.",
        image: "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=400&h=300&fit=crop",
        technologies: &["React", "Firebase", "Tailwind CSS"],
        live_link: "#",
        github_link: "#",
        category: "Frontend",
    },
    Project {
        id: ProjectId(3),
        title: "Weather Dashboard",
        description: "A weather application with real-time data, geolocation \
                      support, and beautiful visualizations.",
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=300&fit=crop",
        technologies: &["React", "API Integration", "Charts.js"],
        live_link: "#",
        github_link: "#",
        category: "Frontend",
    },
    Project {
        id: ProjectId(4),
        title: "Social Media Analytics",
        description: "An analytics dashboard for monitoring social media metrics \
                      and engagement.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=300&fit=crop",
        technologies: &["React", "D3.js", "Express", "PostgreSQL"],
        live_link: "#",
        github_link: "#",
        category: "Full Stack",
    },
    Project {
        id: ProjectId(5),
        title: "Portfolio Website",
        description: "A modern, responsive portfolio website with smooth animations \
                      and dark mode support.",
        image: "https://images.unsplash.com/photo-1460925895917-adf4198c838f?w=400&h=300&fit=crop",
        technologies: &["React", "Framer Motion", "Tailwind CSS"],
        live_link: "#",
        github_link: "#",
        category: "Frontend",
    },
    Project {
        id: ProjectId(6),
        title: "AI Chat Assistant",
        description: "An intelligent chat application powered by AI with natural \
                      language processing.",
        image: "https://images.unsplash.com/photo-1526374965328-7f5ae4e8e413?w=400&h=300&fit=crop",
        technologies: &["React", "OpenAI API", "TypeScript"],
        live_link: "#",
        github_link: "#",
        category: "Frontend",
    },
];

pub(super) static EXPERIENCE: &[Experience] = &[
    Experience {
        id: ExperienceId(1),
        role: "Senior Frontend Developer",
        company: "Tech Company Inc.",
        period: "2022 - Present",
        description: "Leading frontend development for multiple projects, mentoring \
                      junior developers, and implementing modern React patterns.",
        skills: &["React", "TypeScript", "Leadership"],
    },
    Experience {
        id: ExperienceId(2),
        role: "Full Stack Developer",
        company: "Digital Solutions Ltd.",
        period: "2020 - 2022",
        description: "Developed and maintained full-stack applications, implemented \
                      APIs, and optimized database queries.",
        skills: &["React", "Node.js", "MongoDB"],
    },
    Experience {
        id: ExperienceId(3),
        role: "Junior Developer",
        company: "StartUp Studio",
        period: "2018 - 2020",
        description: "Started career building responsive web applications, learning \
                      best practices, and working with agile teams.",
        skills: &["JavaScript", "React", "CSS"],
    },
];

pub(super) static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "#",
        kind: SocialKind::GitHub,
    },
    SocialLink {
        label: "LinkedIn",
        url: "#",
        kind: SocialKind::LinkedIn,
    },
    SocialLink {
        label: "Twitter",
        url: "#",
        kind: SocialKind::Twitter,
    },
    SocialLink {
        label: "Email",
        url: "mailto:your@email.com",
        kind: SocialKind::Email,
    },
    SocialLink {
        label: "Website",
        url: "#",
        kind: SocialKind::Website,
    },
];

pub(super) static FEATURES: &[Feature] = &[
    Feature {
        title: "Clean Code",
        description: "I write well-organized, maintainable code that follows \
                      industry best practices and standards.",
        glyph: "</>",
    },
    Feature {
        title: "Problem Solving",
        description: "I approach challenges with creativity and analytical thinking \
                      to deliver innovative solutions.",
        glyph: "✦",
    },
    Feature {
        title: "Quality Focused",
        description: "I ensure every project meets high standards of performance, \
                      accessibility, and user experience.",
        glyph: "★",
    },
];

pub(super) static STATS: &[Stat] = &[
    Stat {
        label: "Projects",
        value: "20+",
    },
    Stat {
        label: "Clients",
        value: "15+",
    },
    Stat {
        label: "Years Exp.",
        value: "5+",
    },
];
