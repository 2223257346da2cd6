//! CPWD-style productivity norms: output units one worker produces per
//! working day, keyed by activity code. Quantities divided by these rates
//! yield worker-days for the resource calculations.

/// Activity code to output-per-worker-day rate.
const CPWD_PRODUCTIVITY: &[(&str, f64)] = &[
    ("site_clearing", 450.0),
    ("excav_soft", 18.0),
    ("excav_hard", 10.0),
    ("excav_rock", 5.0),
    ("trench_excav", 15.0),
    ("backfilling", 22.0),
    ("compaction", 120.0),
    ("concrete_manual", 3.5),
    ("concrete_pump", 6.5),
    ("rebar_fabrication", 120.0),
    ("rebar_erection", 90.0),
    ("formwork_shuttering", 8.0),
    ("column_shuttering", 6.0),
    ("slab_formwork", 10.0),
    ("brick_masonry", 1.2),
    ("block_masonry", 1.6),
    ("stone_masonry", 0.9),
    ("plaster_12mm", 10.0),
    ("plaster_20mm", 8.0),
    ("tile_flooring", 9.0),
    ("granite_flooring", 3.5),
    ("painting", 45.0),
    ("putty", 55.0),
    ("conduit_laying", 55.0),
    ("wire_laying", 80.0),
    ("plumbing_ppr", 35.0),
    ("fire_piping", 22.0),
];

/// Productivity rate for an activity code. Unknown codes fall back to 1.0,
/// which makes worker-days equal the raw quantity rather than failing the
/// whole computation over one unrecognized row.
pub fn rate_for(activity: &str) -> f64 {
    CPWD_PRODUCTIVITY
        .iter()
        .find(|(code, _)| *code == activity)
        .map(|(_, rate)| *rate)
        .unwrap_or(1.0)
}

/// Every known activity code, in table order.
pub fn activity_codes() -> impl Iterator<Item = &'static str> {
    CPWD_PRODUCTIVITY.iter().map(|(code, _)| *code)
}
