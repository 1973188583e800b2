//! Per-city fare tables.
//!
//! Fares are flat amounts keyed on hop count: each city publishes a
//! monotonically non-decreasing step table with a capped last tier. The
//! amounts are currency-agnostic integers.

struct FareTable {
    city: &'static str,
    /// (inclusive hop-count upper bound, fare) pairs in ascending order.
    tiers: &'static [(u32, u32)],
    /// Fare for any hop count beyond the last tier.
    cap: u32,
}

#[rustfmt::skip]
const FARE_TABLES: &[FareTable] = &[
    FareTable {
        city: "hyderabad",
        tiers: &[(3, 10), (6, 15), (9, 20), (12, 25), (15, 30),
                 (18, 35), (21, 40), (24, 45), (27, 50), (30, 55)],
        cap: 60,
    },
    FareTable {
        city: "chennai",
        tiers: &[(2, 10), (5, 20), (8, 30), (11, 40)],
        cap: 50,
    },
    FareTable {
        city: "mumbai",
        tiers: &[(3, 10), (6, 20), (9, 30)],
        cap: 40,
    },
    FareTable {
        city: "jaipur",
        tiers: &[(2, 10), (5, 15), (8, 20), (11, 25)],
        cap: 30,
    },
    FareTable {
        city: "bengaluru",
        tiers: &[(2, 10), (5, 15), (8, 20), (11, 25), (14, 30),
                 (17, 35), (20, 40), (23, 45), (26, 50), (29, 55)],
        cap: 60,
    },
];

/// Flat fare for travelling `hops` edges on `city`'s network.
///
/// City matching is case-insensitive. Zero hops cost nothing, and an
/// unknown city prices to 0 rather than failing.
pub fn fare(city: &str, hops: u32) -> u32 {
    if hops == 0 {
        return 0;
    }
    let city = city.to_lowercase();
    let Some(table) = FARE_TABLES.iter().find(|t| t.city == city) else {
        return 0;
    };
    table
        .tiers
        .iter()
        .find(|(bound, _)| hops <= *bound)
        .map(|(_, fare)| *fare)
        .unwrap_or(table.cap)
}
