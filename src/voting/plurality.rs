use crate::models::{PollOption, StatisticsEntry, TallyMap, Vote};

pub fn compute_tally(options: &[PollOption], votes: &[Vote]) -> TallyMap {
    // Initialize all options with 0 votes
    let mut tally: TallyMap = options
        .iter()
        .map(|option| (option.id.clone(), 0))
        .collect();

    // Votes for options no longer in the registry are skipped
    for vote in votes {
        if let Some(count) = tally.get_mut(vote.option_id()) {
            *count += 1;
        }
    }

    tally
}

pub fn is_valid_option_id(option_id: &str, options: &[PollOption]) -> bool {
    options.iter().any(|option| option.id == option_id)
}

// Merge each option with its count, keeping registry order
pub fn statistics_entries(options: &[PollOption], tally: &TallyMap) -> Vec<StatisticsEntry> {
    options
        .iter()
        .map(|option| StatisticsEntry::new(option, tally.get(&option.id).copied().unwrap_or(0)))
        .collect()
}
