// src/matching/suggestions.rs
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::types::User;

const TRENDING_SKILLS: &[&str] = &[
    "GraphQL",
    "Kubernetes",
    "Microservices",
    "Serverless",
    "JAMstack",
    "Next.js",
    "Svelte",
    "Deno",
    "WebAssembly",
    "Progressive Web Apps",
];

const SUGGESTION_COUNT: usize = 3;

/// Three profile-improvement nudges drawn from a fixed template set.
/// The profile itself does not influence the draw yet; the parameter is
/// kept so callers stay stable when it does.
pub fn for_user<R: Rng + ?Sized>(_user: &User, rng: &mut R) -> Vec<String> {
    let trending = TRENDING_SKILLS.choose(rng).copied().unwrap_or("GraphQL");

    let mut suggestions = vec![
        format!("Consider adding \"{}\" to your skillset", trending),
        "Update your LinkedIn profile to attract more opportunities".to_string(),
        "Connect with professionals in your field".to_string(),
        "Share your recent projects or achievements".to_string(),
        "Join relevant professional groups".to_string(),
        "Consider getting certified in trending technologies".to_string(),
    ];

    suggestions.shuffle(rng);
    suggestions.truncate(SUGGESTION_COUNT);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn user() -> User {
        User {
            id: "u1".into(),
            name: "Alex Johnson".into(),
            email: "alex@example.com".into(),
            bio: String::new(),
            linkedin_url: None,
            wallet_address: None,
            skills: vec![],
            avatar: None,
            location: None,
            title: None,
            company: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn returns_three_distinct_suggestions() {
        let mut rng = StdRng::seed_from_u64(3);
        let suggestions = for_user(&user(), &mut rng);

        assert_eq!(suggestions.len(), 3);
        assert_eq!(
            suggestions.len(),
            suggestions
                .iter()
                .collect::<std::collections::HashSet<_>>()
                .len()
        );
    }

    #[test]
    fn deterministic_under_a_seed() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);

        assert_eq!(for_user(&user(), &mut a), for_user(&user(), &mut b));
    }
}
