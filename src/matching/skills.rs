// src/matching/skills.rs
use rand::seq::SliceRandom;
use rand::Rng;

/// Keyword vocabulary scanned for substring presence in free text.
pub const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "Spring",
    "Laravel",
    "Ruby on Rails",
    "HTML",
    "CSS",
    "Sass",
    "TypeScript",
    "PHP",
    "C++",
    "C#",
    "Go",
    "Rust",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "GraphQL",
    "REST API",
    "AWS",
    "Docker",
    "Kubernetes",
    "Git",
    "Linux",
    "DevOps",
    "CI/CD",
    "Machine Learning",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "Pandas",
    "Blockchain",
    "Solidity",
    "Web3",
    "Smart Contracts",
    "Ethereum",
    "Solana",
    "UI/UX",
    "Figma",
    "Photoshop",
    "Illustrator",
    "Design Systems",
    "Project Management",
    "Agile",
    "Scrum",
    "Leadership",
    "Communication",
];

const MIN_DIRECT_MATCHES: usize = 3;
const PADDED_TOTAL: usize = 5;
const MAX_RESULTS: usize = 8;

/// Scans the vocabulary for case-insensitive substring hits in `text`.
///
/// Below 3 direct hits the result is padded with random unused
/// vocabulary entries up to 5 total, then capped at 8. The padding
/// invents skills the text never mentioned; that quirk is part of the
/// observable contract and deliberately kept (see DESIGN.md).
pub fn extract_skills<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Vec<String> {
    let haystack = text.to_lowercase();
    let mut found: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    if found.len() < MIN_DIRECT_MATCHES {
        let mut unused: Vec<&str> = SKILL_VOCABULARY
            .iter()
            .copied()
            .filter(|skill| !found.iter().any(|f| f == skill))
            .collect();
        unused.shuffle(rng);
        let missing = PADDED_TOTAL.saturating_sub(found.len());
        found.extend(unused.into_iter().take(missing).map(String::from));
    }

    found.truncate(MAX_RESULTS);
    found
}
