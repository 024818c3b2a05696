//! Cosmetic dice roll for choosing where to break the wall.
//!
//! Has no effect on the session.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DICE: usize = 3;
const FACES: [&str; 6] = ["⚀", "⚁", "⚂", "⚃", "⚄", "⚅"];

pub fn run(seed: Option<u64>) -> Result<(), String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let values = roll(&mut rng);
    let faces: Vec<&str> = values.iter().map(|&v| FACES[v as usize - 1]).collect();
    let total: u32 = values.iter().sum();

    println!("  {}  {:?}", faces.join(" "), values);
    println!("  Total: {total}");
    Ok(())
}

fn roll(rng: &mut StdRng) -> [u32; DICE] {
    std::array::from_fn(|_| rng.random_range(1..=6))
}
