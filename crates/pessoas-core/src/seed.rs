// ABOUTME: Generates placeholder person records used to populate an empty store.
// ABOUTME: Names come from a fixed list; age, city, and profession are randomized.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::person::{City, PersonFields, Profession};

/// Number of rows inserted when seeding an empty table.
pub const SEED_COUNT: usize = 10;

const SEED_NAMES: [&str; 10] = [
    "Ana", "Bruno", "Carla", "Diego", "Eduarda", "Felipe", "Gabriela", "Heitor", "Isabela",
    "João",
];

/// Build `count` placeholder records using the given random source.
pub fn generate_seed_records<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<PersonFields> {
    (0..count)
        .map(|i| {
            let name = SEED_NAMES[i % SEED_NAMES.len()];
            let age = rng.random_range(18..=65);
            // ALL is non-empty so choose always yields a value
            let city = City::ALL.choose(rng).copied().unwrap_or(City::SaoPaulo);
            let profession = Profession::ALL
                .choose(rng)
                .copied()
                .unwrap_or(Profession::Engenheiro);
            PersonFields::new(name, age, city, profession)
        })
        .collect()
}
