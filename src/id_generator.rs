use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "amber", "bold", "calm", "crimson", "daring", "eager", "fleet", "golden",
    "keen", "lively", "quiet", "rapid", "sharp", "steady", "vivid", "wry",
];

const NOUNS: &[&str] = &[
    "gambit", "cascade", "column", "corner", "diagonal", "drop", "fork",
    "ladder", "opening", "pivot", "rally", "rematch", "stack", "streak",
    "tempo", "volley",
];

pub fn generate_record_id() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let suffix: u16 = rng.random_range(0..10000);
    format!("{}-{}-{:04}", adjective, noun, suffix)
}
