use crate::model::Participation;
use crate::roster::Tier;

/// Tier symbol, or a dash when progress is not representable (zero quota).
pub fn tier_symbol(tier: Option<Tier>) -> &'static str {
    tier.map(Tier::symbol).unwrap_or("—")
}

/// Remaining count with a bonus marker when below zero.
/// - 5 -> "5"
/// - -2 -> "-2 ⭐ Bonus RDV!"
pub fn format_remaining(remaining: i64) -> String {
    if remaining < 0 {
        format!("{} ⭐ Bonus RDV!", remaining)
    } else {
        remaining.to_string()
    }
}

/// Encouragement line shown under each agent.
pub fn encouragement(participation: &Participation) -> String {
    match participation.remaining() {
        Some(r) if r > 0 => format!("{} RDV to go", r),
        Some(r) if r < 0 => format!("{} bonus RDV done!", -r),
        Some(_) => "Objective reached!".to_string(),
        None => String::new(),
    }
}

/// Rounded RDV-per-hour pace.
pub fn format_rate(rate: f64) -> String {
    format!("~{} RDV/h", rate.round() as i64)
}

pub fn format_elapsed(secs: u64) -> String {
    let mins = secs / 60;
    let hours = mins / 60;
    if hours > 0 {
        format!("{}h{}m", hours, mins % 60)
    } else if mins > 0 {
        format!("{}m{}s", mins, secs % 60)
    } else {
        format!("{}s", secs)
    }
}
