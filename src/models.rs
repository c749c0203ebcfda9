use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    #[serde(deserialize_with = "deserialize_entry_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default, alias = "entry")]
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct JournalData {
    pub entries: Vec<JournalEntry>,
}

/// Body of `POST /api/journal` and `PUT /api/journal/{id}`.
#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default, alias = "entry")]
    pub text: Option<String>,
    #[serde(default)]
    pub tags: Option<TagsInput>,
}

/// Tags arrive either as a JSON list or as the raw comma-separated form field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Csv(String),
}

impl TagsInput {
    pub fn into_tags(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            TagsInput::List(tags) => tags,
            TagsInput::Csv(joined) => joined.split(',').map(str::to_owned).collect(),
        };
        raw.iter()
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

/// Validated, normalized fields of an entry, before an id is attached.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryFields {
    pub date: NaiveDate,
    pub mood: String,
    pub text: String,
    pub tags: Vec<String>,
}

impl EntryFields {
    pub fn into_entry(self, id: String) -> JournalEntry {
        JournalEntry {
            id,
            date: self.date,
            mood: Some(self.mood),
            text: self.text,
            tags: self.tags,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: String,
    pub mood: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    Gratitude,
    KeepGoing,
    ReflectOnMood,
    BalanceWork,
    ExploreFamily,
    WriteMore,
    HabitBuilt,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::Gratitude => "Try journaling about gratitude or uplifting moments.",
            Suggestion::KeepGoing => "You're in a good place—keep doing what works for you!",
            Suggestion::ReflectOnMood => {
                "Reflect on what might be influencing a neutral or unclear mood."
            }
            Suggestion::BalanceWork => "Balance work reflections with personal or fun topics.",
            Suggestion::ExploreFamily => "Explore family dynamics more deeply in your writing.",
            Suggestion::WriteMore => "More entries will help uncover deeper patterns.",
            Suggestion::HabitBuilt => "You’ve built a great journaling habit—keep it up!",
        }
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub mood_counts: Vec<MoodCount>,
    pub top_tags: Vec<TagCount>,
    pub mood_timeline: Vec<TimelinePoint>,
    pub dominant_mood: String,
    pub suggestions: Vec<Suggestion>,
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the calendar date.
pub fn parse_entry_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

fn deserialize_entry_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_entry_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid entry date: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_date_accepts_plain_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(parse_entry_date("2024-01-05"), Some(expected));
        assert_eq!(parse_entry_date("2024-01-05T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_entry_date(" 2024-01-05 "), Some(expected));
        assert_eq!(parse_entry_date("05/01/2024"), None);
    }

    #[test]
    fn stored_entry_tolerates_missing_mood_and_tags() {
        let entry: JournalEntry = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "date": "2024-03-01T10:15:00Z",
            "entry": "quiet day"
        }))
        .unwrap();
        assert_eq!(entry.mood, None);
        assert!(entry.tags.is_empty());
        assert_eq!(entry.text, "quiet day");
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn tags_from_csv_are_trimmed_and_blank_dropped() {
        let tags = TagsInput::Csv(" work, ,Family ,".to_string()).into_tags();
        assert_eq!(tags, vec!["work", "Family"]);

        let tags = TagsInput::List(vec!["  ".into(), "gym".into()]).into_tags();
        assert_eq!(tags, vec!["gym"]);
    }

    #[test]
    fn suggestion_messages_match_product_copy() {
        assert_eq!(
            Suggestion::KeepGoing.message(),
            "You're in a good place—keep doing what works for you!"
        );
        assert_eq!(
            Suggestion::HabitBuilt.message(),
            "You’ve built a great journaling habit—keep it up!"
        );
    }

    #[test]
    fn null_or_missing_tags_are_absent() {
        let request: EntryRequest = serde_json::from_value(serde_json::json!({
            "date": "2024-01-05",
            "mood": "Sad",
            "text": "x",
            "tags": null
        }))
        .unwrap();
        assert!(request.tags.is_none());

        let request: EntryRequest =
            serde_json::from_value(serde_json::json!({ "mood": "Sad" })).unwrap();
        assert!(request.tags.is_none());
    }

    #[test]
    fn suggestions_serialize_as_messages() {
        let json = serde_json::to_value(vec![Suggestion::WriteMore]).unwrap();
        assert_eq!(
            json,
            serde_json::json!(["More entries will help uncover deeper patterns."])
        );
    }
}
