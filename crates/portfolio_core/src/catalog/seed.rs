//! Built-in catalog content shipped with the site.

use crate::model::project::{Project, ProjectCategory, ProjectIcon, ProjectId};
use crate::model::skill::{Skill, SkillCategory};

const GITHUB_PLACEHOLDER: &str = "https://github.com";
const DEMO_PLACEHOLDER: &str = "https://example.com";

struct SeedProject {
    id: ProjectId,
    title: &'static str,
    description: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
    category: ProjectCategory,
    featured: bool,
    icon: ProjectIcon,
}

const SEED_PROJECTS: &[SeedProject] = &[
    SeedProject {
        id: 1,
        title: "NeoTech Dashboard",
        description: "Interface de contrôle futuriste pour la gestion de dispositifs IoT. Visualisation en temps réel des données capteurs avec graphiques interactifs et alertes personnalisables.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80",
        tags: &["React", "Node.js", "MQTT", "WebSockets", "Chart.js"],
        category: ProjectCategory::Fullstack,
        featured: true,
        icon: ProjectIcon::Monitor,
    },
    SeedProject {
        id: 2,
        title: "SmartHome Hub",
        description: "Système central de domotique connectant différents appareils IoT. Contrôle vocal, automatisations et scénarios personnalisés pour une maison intelligente.",
        image: "https://images.unsplash.com/photo-1558002038-1055907df827?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80",
        tags: &["ESP32", "Raspberry Pi", "MQTT", "React", "Node.js"],
        category: ProjectCategory::Iot,
        featured: true,
        icon: ProjectIcon::Cpu,
    },
    SeedProject {
        id: 3,
        title: "CyberShop E-commerce",
        description: "Plateforme e-commerce avec design cyberpunk pour vente de gadgets tech. Panier d'achat, paiement sécurisé et système de recommandation basé sur l'IA.",
        image: "https://images.unsplash.com/photo-1573164713988-8665fc963095?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2069&q=80",
        tags: &["React", "Node.js", "MongoDB", "Stripe", "Redux"],
        category: ProjectCategory::Web,
        featured: false,
        icon: ProjectIcon::Globe,
    },
    SeedProject {
        id: 4,
        title: "DataViz Platform",
        description: "Outil de visualisation de données avec tableaux de bord personnalisables. Transforme des données complexes en visualisations interactives et compréhensibles.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80",
        tags: &["D3.js", "React", "Node.js", "PostgreSQL", "GraphQL"],
        category: ProjectCategory::Web,
        featured: false,
        icon: ProjectIcon::Database,
    },
    SeedProject {
        id: 5,
        title: "PlantMonitor IoT",
        description: "Système de surveillance pour plantes d'intérieur. Mesure l'humidité du sol, la luminosité et la température pour optimiser la croissance des plantes.",
        image: "https://images.unsplash.com/photo-1530126483408-aa533e55bdb2?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2069&q=80",
        tags: &["Arduino", "ESP8266", "MQTT", "React", "Firebase"],
        category: ProjectCategory::Iot,
        featured: false,
        icon: ProjectIcon::Cpu,
    },
    SeedProject {
        id: 6,
        title: "Portfolio Cyberpunk",
        description: "Portfolio de développeur avec thème cyberpunk et animations futuristes. Présentation interactive des projets et compétences avec effets visuels immersifs.",
        image: "/public/CyberPunk.jpg",
        tags: &["React", "Framer Motion", "GSAP", "Tailwind CSS", "TypeScript"],
        category: ProjectCategory::Web,
        featured: true,
        icon: ProjectIcon::Code,
    },
];

const SEED_SKILLS: &[(&str, u8, SkillCategory)] = &[
    ("Angular", 90, SkillCategory::Frontend),
    ("React", 80, SkillCategory::Frontend),
    ("TypeScript", 80, SkillCategory::Frontend),
    ("Tailwind CSS", 70, SkillCategory::Frontend),
    ("Bootstrap CSS", 95, SkillCategory::Frontend),
    ("Node.js", 85, SkillCategory::Backend),
    ("Express", 80, SkillCategory::Backend),
    ("Laravel", 70, SkillCategory::Backend),
    ("REST API", 90, SkillCategory::Backend),
    ("MongoDB", 85, SkillCategory::Database),
    ("MySQL", 75, SkillCategory::Database),
    ("Firebase", 50, SkillCategory::Database),
    ("Arduino,ESP32/ESP8266", 90, SkillCategory::Iot),
    ("Raspberry Pi", 85, SkillCategory::Iot),
    ("MQTT", 75, SkillCategory::Iot),
    ("Sensors Integration", 70, SkillCategory::Iot),
    ("Git/GitHub", 90, SkillCategory::Tools),
    ("Docker", 75, SkillCategory::Tools),
    ("CI/CD", 70, SkillCategory::Tools),
    ("Figma", 80, SkillCategory::Tools),
];

/// The projects shown on the site, in page order.
pub fn builtin_projects() -> Vec<Project> {
    SEED_PROJECTS
        .iter()
        .map(|seed| Project {
            id: seed.id,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            image: seed.image.to_string(),
            tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
            github: GITHUB_PLACEHOLDER.to_string(),
            demo: DEMO_PLACEHOLDER.to_string(),
            category: seed.category,
            featured: seed.featured,
            icon: seed.icon,
        })
        .collect()
}

/// The skills shown on the site, in page order.
pub fn builtin_skills() -> Vec<Skill> {
    SEED_SKILLS
        .iter()
        .map(|(name, level, category)| Skill {
            name: (*name).to_string(),
            level: *level,
            category: *category,
        })
        .collect()
}
