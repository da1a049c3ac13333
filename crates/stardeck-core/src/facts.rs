pub const SPACE_FACTS: [&str; 15] = [
    "The Sun accounts for 99.86% of the mass in our solar system.",
    "One million Earths could fit inside the Sun.",
    "Light from the Sun takes 8 minutes to reach Earth.",
    "Venus is the hottest planet in our solar system.",
    "A day on Venus is longer than its year.",
    "Mars has the largest volcano in the solar system - Olympus Mons.",
    "Jupiter's Great Red Spot is a storm that has raged for over 400 years.",
    "Saturn's rings are made of ice and rock particles.",
    "Neptune has the fastest winds in the solar system at 1,200 mph.",
    "There are more stars in the universe than grains of sand on Earth.",
    "The International Space Station orbits Earth every 90 minutes.",
    "The footprints on the Moon will last for millions of years.",
    "One teaspoon of a neutron star would weigh 6 billion tons.",
    "The Milky Way galaxy is on a collision course with Andromeda.",
    "Space is completely silent - there's no atmosphere to carry sound.",
];

/// Fact at `index`, wrapping around the list.
#[must_use]
pub fn fact_at(index: usize) -> &'static str {
    SPACE_FACTS[index % SPACE_FACTS.len()]
}
