use notes_core::NoteInfo;
use rand::seq::SliceRandom;
use rand::Rng;

const WORDS: &[&str] = &[
    "amber", "bridge", "candle", "delta", "ember", "fable", "garden", "harbor", "island",
    "jungle", "kettle", "lantern", "meadow", "nickel", "orchard", "pepper", "quartz", "river",
    "saddle", "timber", "umbrella", "velvet", "willow", "yonder", "zephyr",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Boris", "Chen", "Dana", "Emil", "Farah", "Greta", "Hugo", "Ines", "Jonas", "Kira",
    "Luca", "Mira", "Nils", "Olga", "Priya",
];

const LAST_NAMES: &[&str] = &[
    "Abbott", "Berg", "Costa", "Dietrich", "Eriksen", "Fuentes", "Grant", "Horvat", "Ivanova",
    "Jensen", "Kowalski", "Lindqvist", "Moreau", "Novak",
];

/// Random note content for load and size checks
pub fn random_note_info<R: Rng>(rng: &mut R) -> NoteInfo {
    let title_words = rng.gen_range(2..=5);
    let sentences = rng.gen_range(1..=3);
    NoteInfo::new(
        capitalize(&words(rng, title_words)),
        (0..sentences)
            .map(|_| {
                let count = rng.gen_range(6..=14);
                format!("{}.", capitalize(&words(rng, count)))
            })
            .collect::<Vec<_>>()
            .join(" "),
        format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES)),
        rng.gen_bool(0.5),
    )
}

fn words<R: Rng>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| pick(rng, WORDS))
        .collect::<Vec<_>>()
        .join(" ")
}

fn pick<R: Rng>(rng: &mut R, choices: &[&'static str]) -> &'static str {
    choices.choose(rng).copied().unwrap_or_default()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
