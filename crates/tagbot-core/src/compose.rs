use std::sync::Mutex;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Message skeletons. `{name}` is always present; `{adjective}` only in some
/// templates, which simply ignore the drawn adjective otherwise.
pub const TEMPLATES: &[&str] = &[
    "Hey {name} ❤️, tu toh bilkul {adjective} lag raha/rahi hai aaj!",
    "{name} 😍, teri smile ne mera dil chura liya!",
    "Oye {name} ✨, teri beauty ka koi answer nahi!",
    "{name} ji 💕, aapke liye ek special tag!",
    "Sun {name} 🌟, tu mere group ka sabse pyara member hai!",
    "{name} baby 😘, miss you in the group!",
    "Bhai {name} 🚀, tu aaya to group mein jaan aa gayi!",
    "{name} 😂, tera intezaar tha ki nahi?",
    "Oye {name} 🎭, tu toh famous ho gaya hai group mein!",
    "{name} 🌹, tujhe dekh ke dil garden garden ho gaya!",
];

pub const ADJECTIVES: &[&str] = &[
    "ekdum jhakaas",
    "superb",
    "awesome",
    "mast",
    "cool",
    "dhamakedar",
    "rocking",
    "fantastic",
    "amazing",
    "pyaara",
    "sweet",
    "lovely",
    "cute",
    "handsome",
];

pub const EMOJIS: &[&str] = &["❤️", "💕", "💖", "😍", "🥰", "😘", "✨", "🌟", "⭐"];

/// Composes a tag message from the static pools.
///
/// Template, adjective, and emoji are three independent uniform draws with
/// replacement, so output is deterministic for a fixed seed. Not
/// cryptographic and does not need to be.
pub struct Composer {
    rng: Mutex<StdRng>,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Seeded constructor for reproducible composition.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn compose(&self, name: &str) -> String {
        let mut rng = self.rng.lock().expect("composer rng poisoned");
        let template = TEMPLATES.choose(&mut *rng).expect("pool not empty");
        let adjective = ADJECTIVES.choose(&mut *rng).expect("pool not empty");
        let emoji = EMOJIS.choose(&mut *rng).expect("pool not empty");
        render(template, name, adjective, emoji)
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

fn render(template: &str, name: &str, adjective: &str, emoji: &str) -> String {
    let body = template
        .replace("{name}", name)
        .replace("{adjective}", adjective);
    format!("{body} {emoji}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitution_is_total_over_all_pools() {
        for template in TEMPLATES {
            for adjective in ADJECTIVES {
                for emoji in EMOJIS {
                    let out = render(template, "Asha", adjective, emoji);
                    assert!(
                        !out.contains('{') && !out.contains('}'),
                        "unresolved placeholder in {out:?}"
                    );
                    assert!(out.contains("Asha"));

                    // Exactly one emoji after a single trailing space.
                    let suffix = format!(" {emoji}");
                    assert!(out.ends_with(&suffix), "bad suffix in {out:?}");
                    let body = &out[..out.len() - suffix.len()];
                    assert!(!body.ends_with(' '), "double space before emoji in {out:?}");
                }
            }
        }
    }

    #[test]
    fn seeded_composition_is_deterministic() {
        let a = Composer::with_seed(7);
        let b = Composer::with_seed(7);
        for _ in 0..20 {
            assert_eq!(a.compose("Ravi"), b.compose("Ravi"));
        }
    }

    #[test]
    fn different_seeds_eventually_diverge() {
        let a = Composer::with_seed(1);
        let b = Composer::with_seed(2);
        let diverged = (0..20).any(|_| a.compose("Ravi") != b.compose("Ravi"));
        assert!(diverged);
    }

    #[test]
    fn only_some_templates_carry_the_adjective_slot() {
        assert!(TEMPLATES.iter().all(|t| t.contains("{name}")));
        assert!(TEMPLATES.iter().any(|t| t.contains("{adjective}")));
        assert!(TEMPLATES.iter().any(|t| !t.contains("{adjective}")));
    }
}
