//! Page content for the section views.

use folio_types::{ContactDetail, Project, SocialLink, StackCategory, TimelineEntry};

pub const OWNER: &str = "Adrian Tayeh";
pub const ROLE: &str = "Frontend Developer";
pub const GREETING: &str = "Hello, I'm";
pub const TAGLINE: &str = "Crafting beautiful, performant web experiences with modern technologies. \
Passionate about clean code and exceptional user interfaces.";

pub const PROJECTS_HEADING: &str = "Featured Work";
pub const PROJECTS_INTRO: &str =
    "A selection of projects showcasing my skills and passion for building great products.";

pub const PROJECTS: &[Project] = &[
    Project {
        title: "CVCreator",
        description: "CV Creator is a modern, React-based web application that allows users to \
easily create, customize, and download professional CVs. The app features a user-friendly \
interface for entering personal details, education, work experience, and skills, with live \
preview and PDF export functionality. Built with Vite for fast development and styled for \
clarity and accessibility, it helps users generate ATS-friendly resumes efficiently.",
        tags: &["React"],
        repository: "https://github.com/AdrianTayeh/CVCreator",
        live: Some("https://cv-template-react.netlify.app/"),
    },
    Project {
        title: "Guess The Footballer",
        description: "A web-based football player guessing game built with React and Vite, \
featuring a modern UI using Tailwind CSS and Material UI. Users select a league and try to guess \
a randomly chosen footballer, receiving feedback on attributes like nationality, league, club, \
position, and age. The backend provides player, club, and flag data via a REST API. The frontend \
was developed in collaboration with Kevin Ruangrad (https://github.com/KevinRuangrad).",
        tags: &["TailwindCSS", "React", "NodeJS", "Material UI"],
        repository: "https://github.com/KevinRuangrad/guessthefotballer",
        live: None,
    },
    Project {
        title: "WorkoutJournal",
        description: "A full-stack Workout Journal application where users can register, log in, \
and manage their workouts and activities. Built with React and FluentUI for a modern, accessible \
frontend, and Node.js/Express with a MySQL database for the backend, it allows users to create, \
edit, and delete workouts, link activities, and track workout details such as date, duration, \
and comments.",
        tags: &[
            "Fluent UI",
            "React",
            "NodeJS",
            "ReCharts",
            "MySQL",
            "TailwindCSS",
            "Axios",
            "Bcrypt",
            "Cors",
        ],
        repository: "https://github.com/MH-GRIT/databashantering-tr-ningsdagboken-AdrianTayeh",
        live: None,
    },
    Project {
        title: "AI Content Repurposer",
        description: "A Next.js application that uses Google Gemini AI to transform single pieces \
of content into multiple formats - tweet threads, LinkedIn posts, newsletters, summaries, and SEO \
hashtags. Features user authentication, content history dashboard, and document upload support, \
built with TypeScript, Prisma, and modern React patterns.",
        tags: &[
            "NextJS",
            "React",
            "ShadCN",
            "Motion",
            "Next-Auth",
            "Zustand",
            "Prisma",
            "PostgreSQL",
            "Typescript",
        ],
        repository: "https://github.com/AdrianTayeh/AI-Content-Repurposer",
        live: Some("https://content-repurposer-ebon.vercel.app/"),
    },
];

pub const STACK_HEADING: &str = "Tech Stack";
pub const STACK_INTRO: &str = "Tools and technologies I use to bring ideas to life.";

pub const STACK: &[StackCategory] = &[
    StackCategory {
        name: "Frontend",
        items: &[
            "React",
            "TypeScript",
            "Next.js",
            "Tailwind CSS",
            "Material UI",
            "Fluent UI",
            "ShadCN",
            "Motion",
        ],
    },
    StackCategory {
        name: "Backend",
        items: &["Node.js", "Express", "Prisma", "GraphQL", "REST APIs"],
    },
    StackCategory {
        name: "Databases",
        items: &["PostgreSQL", "MySQL"],
    },
    StackCategory {
        name: "Tooling",
        items: &["Git", "Vite", "Playwright", "Zustand", "TanStack Router"],
    },
];

pub const ABOUT_HEADING: &str = "Get to Know Me";

pub const STORY: &[&str] = &[
    "I'm an aspiring frontend developer currently studying at Grit Academy, with a strong \
foundation in modern web technologies. I enjoy turning ideas into clean, responsive, and \
user-friendly interfaces.",
    "When I'm not coding, I like experimenting with personal projects, exploring new frameworks, \
and continuously building my skills to grow as a developer. I'm always eager to learn and solve \
problems creatively.",
    "I thrive when collaborating with others and believe that sharing knowledge is key to \
improving as a developer. My goal is to create digital experiences that are not only functional \
but also meaningful for the people who use them.",
];

pub const ACHIEVEMENTS: &[&str] = &[
    "Led the migration of a 100,000+ line codebase from React Router v5 to TanStack Router v1, \
ensuring seamless navigation and improved maintainability",
    "Implemented accessibility improvements achieving WCAG 2.1 AA compliance",
    "Created new features for an internal admin web app in a large scale company",
];

pub const EXPERIENCE: &[TimelineEntry] = &[
    TimelineEntry {
        title: "Junior Frontend Developer - Summer Intern",
        organization: "Axis Communications",
        period: "June 2025 - August 2025",
        description: "Implemented Microsoft Fluent UI components and developed new features \
using React and TypeScript for an internal site, with comprehensive testing through Microsoft \
Playwright. Developed features with GraphQL queries and mutations, diagnosed and resolved complex \
bugs, and maintained automated tests to ensure code quality.",
    },
    TimelineEntry {
        title: "Assistant Project Lead - Internship",
        organization: "Commerz Consultants",
        period: "September 2023 - January 2025",
        description: "Coordinated project tasks and ensured all milestones were achieved within \
established deadlines while assisting in the development of technical documentation and reports \
for client presentations.",
    },
];

pub const EDUCATION: &[TimelineEntry] = &[
    TimelineEntry {
        title: "B.S. Computer Science - Specialisation in Game Development",
        organization: "Malmö University",
        period: "2020 - 2024",
        description: "Focused on game development in Unity using C#",
    },
    TimelineEntry {
        title: "Higher Vocational Education Diploma in Frontend Development",
        organization: "Grit Academy",
        period: "2024 - 2026",
        description: "Specialized in frontend development using React but also learnt NextJS, \
Node JS, and other useful tools",
    },
];

pub const CONTACT_HEADING: &str = "Let's Connect";
pub const CONTACT_INTRO: &str =
    "Have a project in mind or just want to chat? I'd love to hear from you.";

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Email",
        value: "adriantayeh@gmail.com",
        href: Some("mailto:adriantayeh@gmail.com"),
    },
    ContactDetail {
        label: "Phone",
        value: "+46 707 81 30 22",
        href: Some("tel:+46707813022"),
    },
    ContactDetail {
        label: "Location",
        value: "Malmö, Sweden",
        href: None,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/AdrianTayeh",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/adrian-tayeh/",
    },
    SocialLink {
        label: "Instagram",
        href: "https://instagram.com/adrian.tayeh",
    },
];

pub const AVAILABILITY_HEADING: &str = "Open to Opportunities";
pub const AVAILABILITY: &str = "I'm currently available for freelance projects and full-time \
positions. Let's create something amazing together!";

pub const FOOTER_COPYRIGHT: &str = "© 2025 Adrian Tayeh. All rights reserved.";
pub const FOOTER_CREDITS: &str = "Designed & Built with Rust, ratatui, and crossterm";
