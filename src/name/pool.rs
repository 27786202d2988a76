use rand::Rng;

/// Auto-suggested names for a new app password.
///
/// Any entry is a valid name on its own, so the suggestion can be
/// submitted untouched.
pub const DEFAULT_NAME_POOL: &[&str] = &[
    "AliceBlue",
    "Aqua",
    "Aquamarine",
    "Azure",
    "BabyBlue",
    "Blue",
    "BlueViolet",
    "CadetBlue",
    "CornflowerBlue",
    "Cyan",
    "DarkBlue",
    "DarkCyan",
    "DarkSlateBlue",
    "DeepSkyBlue",
    "DodgerBlue",
    "ElectricBlue",
    "LightBlue",
    "LightCyan",
    "LightSkyBlue",
    "LightSteelBlue",
    "MediumAquaMarine",
    "MediumBlue",
    "MediumSlateBlue",
    "MidnightBlue",
    "Navy",
    "PowderBlue",
    "RoyalBlue",
    "SkyBlue",
    "SlateBlue",
    "SteelBlue",
    "Teal",
    "Turquoise",
];

/// Uniform pick from the pool. The random source is an argument so
/// callers can seed it.
pub fn random_default_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    DEFAULT_NAME_POOL[rng.gen_range(0..DEFAULT_NAME_POOL.len())].to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::name::validate::{validate_edit, validate_submit};

    #[test]
    fn pool_entries_are_distinct_valid_names() {
        let unique: HashSet<_> = DEFAULT_NAME_POOL.iter().collect();
        assert_eq!(unique.len(), DEFAULT_NAME_POOL.len());
        for entry in DEFAULT_NAME_POOL {
            assert_eq!(validate_edit(entry), Ok(()), "{}", entry);
            assert_eq!(validate_submit(entry), Ok(()), "{}", entry);
        }
    }

    #[test]
    fn every_pool_entry_is_reachable() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            seen.insert(random_default_name(&mut rng));
        }
        assert_eq!(seen.len(), DEFAULT_NAME_POOL.len());
    }
}
