#![deny(clippy::pedantic)]

const VARIABLES: [&str; 6] = [
    "FITFLEX_RAPID_API_KEY",
    "FITFLEX_EXERCISE_DB_URL",
    "FITFLEX_EXERCISE_DB_HOST",
    "FITFLEX_TAXONOMY_URL",
    "FITFLEX_CACHE_TTL_HOURS",
    "FITFLEX_LOG_LEVEL",
];

fn main() {
    for variable in VARIABLES {
        println!("cargo:rerun-if-env-changed={variable}");
    }
}
