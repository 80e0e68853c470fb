//! Company-style client names.

use rand::Rng;
use rand::seq::SliceRandom;

const SURNAMES: &[&str] = &[
    "Adams", "Baker", "Bennett", "Brooks", "Carter", "Chavez", "Collins", "Cooper", "Diaz",
    "Edwards", "Evans", "Fisher", "Foster", "Garcia", "Gomez", "Gray", "Green", "Hall", "Harris",
    "Hayes", "Hughes", "Jenkins", "Johnson", "Kelly", "Kim", "Lee", "Lewis", "Martin", "Mendoza",
    "Miller", "Mitchell", "Morgan", "Murphy", "Nelson", "Nguyen", "Ortiz", "Parker", "Patel",
    "Perry", "Powell", "Price", "Ramirez", "Reed", "Reyes", "Rivera", "Roberts", "Ross", "Sanders",
    "Scott", "Shaw", "Stewart", "Sullivan", "Taylor", "Thompson", "Torres", "Turner", "Walker",
    "Ward", "Watson", "Wood", "Wright", "Young",
];

const SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "PLC", "Ltd", "and Sons"];

/// Pick one entry, falling back to `""` for an empty list.
fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

/// Produce a company name in one of three shapes:
/// `Surname Suffix`, `Surname-Surname` or `Surname, Surname and Surname`.
pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, SURNAMES), pick(rng, SUFFIXES)),
        1 => format!("{}-{}", pick(rng, SURNAMES), pick(rng, SURNAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, SURNAMES),
            pick(rng, SURNAMES),
            pick(rng, SURNAMES)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_company_names_are_non_empty_and_varied() {
        let mut rng = StdRng::seed_from_u64(7);
        let names: Vec<String> = (0..50).map(|_| company_name(&mut rng)).collect();

        assert!(names.iter().all(|n| !n.trim().is_empty()));
        assert!(names.iter().any(|n| n.contains('-')));
        assert!(names.iter().any(|n| n.contains(" and ")));
    }
}
