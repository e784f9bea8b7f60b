// Seed data — synthetic raw posts for exercising the pipeline offline.
//
// The recent-search quota resets slowly on the free tier; this generates a
// realistic raw CSV (40% positive / 30% negative / 30% neutral) so the
// preprocess, analyze, and serve stages can be developed without burning it.

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::store::RawPost;

/// Base texts with their intended class. Variants are layered on top for
/// a bit of surface diversity.
const SEED_TEXTS: &[(&str, &str)] = &[
    // positive
    (
        "Tesla Model 3 is amazing! Best car I've ever owned. The autopilot feature is incredible.",
        "positive",
    ),
    (
        "Just got my Tesla Model Y and I'm in love! The acceleration is mind-blowing. @Tesla",
        "positive",
    ),
    (
        "TSLA stock is going to the moon! Elon Musk is a genius. Long term hold!",
        "positive",
    ),
    (
        "Tesla's Supercharger network is expanding rapidly. This is the future of transportation!",
        "positive",
    ),
    (
        "My Tesla has saved me so much money on gas. Best investment ever!",
        "positive",
    ),
    (
        "Love my Model S! The build quality is excellent and the range is impressive.",
        "positive",
    ),
    // negative
    (
        "Tesla quality control is terrible. My car has been in the shop 3 times this month.",
        "negative",
    ),
    (
        "TSLA stock is crashing again. Overvalued company with production issues.",
        "negative",
    ),
    (
        "My Tesla Model 3 has so many rattles and squeaks. Build quality is poor.",
        "negative",
    ),
    (
        "Tesla's customer service is awful. They don't respond to complaints.",
        "negative",
    ),
    (
        "The Cybertruck is ugly and impractical. What was Elon thinking?",
        "negative",
    ),
    (
        "Tesla's autopilot is dangerous. Multiple accidents reported. Not safe!",
        "negative",
    ),
    // neutral
    (
        "Tesla announced new Supercharger locations in Europe. Interesting development.",
        "neutral",
    ),
    (
        "TSLA stock price is $250 today. Market is volatile.",
        "neutral",
    ),
    (
        "Tesla delivered 400K vehicles this quarter. Production numbers are out.",
        "neutral",
    ),
    (
        "Elon Musk tweeted about Tesla's new factory in Texas. Construction update.",
        "neutral",
    ),
    (
        "Tesla's new software update includes bug fixes. Version 11.4.2 released.",
        "neutral",
    ),
    (
        "Model Y production increased at Fremont factory. Manufacturing update.",
        "neutral",
    ),
];

const SEED_USERS: &[&str] = &[
    "tesla_fan_2024",
    "ev_enthusiast",
    "stock_trader",
    "car_lover",
    "tech_guru",
    "elon_follower",
    "investor_pro",
    "electric_dreams",
    "sustainable_life",
    "future_cars",
    "model3_driver",
    "cybertruck_wait",
    "fsd_beta_user",
    "tsla_bull",
    "green_energy",
];

/// Class mix: 40% positive, 30% negative, 30% neutral.
const CLASS_MIX: &[(&str, f64)] = &[
    ("positive", 0.4),
    ("negative", 0.3),
    ("neutral", 0.3),
];

/// Generate `count` synthetic raw posts with randomized dates (within the
/// last 7 days) and engagement counts, shuffled into arrival order.
pub fn generate_posts(count: usize) -> Vec<RawPost> {
    let mut rng = rand::rng();
    let mut posts = Vec::with_capacity(count);
    let now = Utc::now();

    for (class, share) in CLASS_MIX {
        let class_count = (count as f64 * share) as usize;
        let base_texts: Vec<&str> = SEED_TEXTS
            .iter()
            .filter(|(_, c)| c == class)
            .map(|(t, _)| *t)
            .collect();

        for _ in 0..class_count {
            let base = base_texts[rng.random_range(0..base_texts.len())];
            let text = match rng.random_range(0..5) {
                0 => format!("{base} #Tesla #TSLA"),
                1 => format!("{base} @Tesla"),
                2 => format!("Just saw: {base}"),
                3 => format!("{base} What do you think?"),
                _ => base.to_string(),
            };

            let date = now
                - Duration::days(rng.random_range(0..=7))
                - Duration::hours(rng.random_range(0..24))
                - Duration::minutes(rng.random_range(0..60));

            // Positive chatter tends to pull more engagement
            let likes = if *class == "positive" {
                rng.random_range(0..1000)
            } else {
                rng.random_range(0..500)
            };
            let retweets = rng.random_range(0..=(likes / 10).max(1));
            let replies = rng.random_range(0..=(likes / 20).max(1));
            let quotes = rng.random_range(0..=(retweets / 5).max(1));

            posts.push(RawPost {
                id: format!("{}", 1_000_000_000_000_000_000u64 + posts.len() as u64),
                date,
                text,
                user: SEED_USERS[rng.random_range(0..SEED_USERS.len())].to_string(),
                likes,
                retweets,
                replies,
                quotes,
            });
        }
    }

    posts.shuffle(&mut rng);
    posts
}
