use crate::models::{Insights, JournalEntry, MoodCount, Suggestion, TagCount, TimelinePoint};
use std::collections::HashMap;
use thiserror::Error;

const TOP_TAG_LIMIT: usize = 5;
const UNSPECIFIED_KEY: &str = "unspecified";
const UNSPECIFIED_LABEL: &str = "Unspecified";
const NO_MOOD: &str = "N/A";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsightsError {
    #[error("no journal entries to analyze")]
    NoData,
}

pub fn compute_insights(entries: &[JournalEntry]) -> Result<Insights, InsightsError> {
    if entries.is_empty() {
        return Err(InsightsError::NoData);
    }

    let mut moods = Tally::default();
    let mut tags = Tally::default();
    let mut mood_timeline = Vec::with_capacity(entries.len());

    for entry in entries {
        let mood = entry.mood.as_deref().filter(|mood| !mood.is_empty());
        moods.add(mood.map_or_else(|| UNSPECIFIED_KEY.to_string(), str::to_lowercase));

        mood_timeline.push(TimelinePoint {
            date: entry.date.format("%b %d, %Y").to_string(),
            mood: mood.unwrap_or(UNSPECIFIED_LABEL).to_string(),
        });

        for tag in &entry.tags {
            tags.add(tag.to_lowercase());
        }
    }

    let dominant_mood = moods
        .ranked()
        .into_iter()
        .next()
        .map_or_else(|| NO_MOOD.to_string(), |(name, _)| name);

    let top_tags: Vec<TagCount> = tags
        .ranked()
        .into_iter()
        .take(TOP_TAG_LIMIT)
        .map(|(name, count)| TagCount { name, count })
        .collect();

    let suggestions = suggest(&dominant_mood, &top_tags, entries.len());

    let mood_counts = moods
        .counts
        .into_iter()
        .map(|(name, count)| MoodCount { name, count })
        .collect();

    Ok(Insights {
        mood_counts,
        top_tags,
        mood_timeline,
        dominant_mood,
        suggestions,
    })
}

/// Occurrence counts keyed by label, in first-seen order.
#[derive(Debug, Default)]
struct Tally {
    counts: Vec<(String, u64)>,
    slots: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, key: String) {
        match self.slots.get(&key) {
            Some(&slot) => {
                let count = &mut self.counts[slot].1;
                *count = count.saturating_add(1);
            }
            None => {
                self.slots.insert(key.clone(), self.counts.len());
                self.counts.push((key, 1));
            }
        }
    }

    /// Count descending; `sort_by` is stable so ties keep first-seen order.
    fn ranked(&self) -> Vec<(String, u64)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

fn suggest(dominant_mood: &str, top_tags: &[TagCount], entry_count: usize) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    suggestions.push(match dominant_mood {
        "sad" | "distressed" => Suggestion::Gratitude,
        "excited" | "content" => Suggestion::KeepGoing,
        _ => Suggestion::ReflectOnMood,
    });

    if top_tags.iter().any(|tag| tag.name == "work") {
        suggestions.push(Suggestion::BalanceWork);
    }
    if top_tags.iter().any(|tag| tag.name == "family") {
        suggestions.push(Suggestion::ExploreFamily);
    }

    // 5..=9 entries intentionally get neither.
    if entry_count < 5 {
        suggestions.push(Suggestion::WriteMore);
    } else if entry_count >= 10 {
        suggestions.push(Suggestion::HabitBuilt);
    }

    suggestions
}
