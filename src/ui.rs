use crate::models::{Insights, JournalEntry};
use std::fmt::Write;

pub fn render_index(entries: &[JournalEntry], insights: Option<&Insights>) -> String {
    let body = match insights {
        Some(insights) if !entries.is_empty() => {
            format!("{}{}", render_insights(insights), render_entries(entries))
        }
        _ => EMPTY_STATE.to_string(),
    };

    INDEX_HTML
        .replace("{{COUNT}}", &entries.len().to_string())
        .replace("{{BODY}}", &body)
}

pub fn mood_emoji(mood: Option<&str>) -> &'static str {
    match mood.map(str::to_lowercase).as_deref() {
        Some("excited") => "😄",
        Some("content") => "😊",
        Some("neutral") => "😐",
        Some("sad") => "😔",
        Some("distressed") => "😢",
        _ => "💭",
    }
}

fn render_insights(insights: &Insights) -> String {
    let mut html = String::from("<section class=\"card\"><h2>Your Journal Insights</h2>");

    html.push_str("<h3>Mood Frequency</h3><ul class=\"bars\">");
    for mood in &insights.mood_counts {
        let _ = write!(
            html,
            "<li><span class=\"label\">{}</span><span class=\"count\">{}</span></li>",
            escape(&mood.name),
            mood.count
        );
    }
    html.push_str("</ul>");

    let top_tags = if insights.top_tags.is_empty() {
        "None".to_string()
    } else {
        insights
            .top_tags
            .iter()
            .map(|tag| format!("{} ({})", escape(&tag.name), tag.count))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = write!(
        html,
        "<p><strong>Most Frequent Mood:</strong> <span class=\"capitalize\">{}</span></p>\
         <p><strong>Top Tags:</strong> {}</p>",
        escape(&insights.dominant_mood),
        top_tags
    );

    html.push_str("<p><strong>Suggestions:</strong></p><ul>");
    for suggestion in &insights.suggestions {
        let _ = write!(html, "<li>{}</li>", escape(suggestion.message()));
    }
    html.push_str("</ul><p><strong>Mood Over Time:</strong></p><ul class=\"timeline\">");
    for point in &insights.mood_timeline {
        let _ = write!(
            html,
            "<li>{}: <span class=\"capitalize\">{}</span></li>",
            escape(&point.date),
            escape(&point.mood)
        );
    }
    html.push_str("</ul></section>");
    html
}

fn render_entries(entries: &[JournalEntry]) -> String {
    let mut html = String::from("<section class=\"card\"><h2>Entries</h2>");
    for entry in entries {
        let tags = entry
            .tags
            .iter()
            .map(|tag| format!("<span class=\"tag\">#{}</span>", escape(tag)))
            .collect::<String>();
        let _ = write!(
            html,
            "<article class=\"entry\"><header><span class=\"emoji\">{}</span>\
             <span class=\"mood\">{}</span><time>{}</time></header><p>{}</p><div>{}</div></article>",
            mood_emoji(entry.mood.as_deref()),
            escape(entry.mood.as_deref().filter(|mood| !mood.is_empty()).unwrap_or("Unspecified")),
            entry.date.format("%b %d, %Y"),
            escape(&entry.text),
            tags
        );
    }
    html.push_str("</section>");
    html
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const EMPTY_STATE: &str = r#"<section class="card empty">
  <p class="big">No Journal Entries Found</p>
  <p>Add some journal entries to unlock personalized insights!</p>
</section>"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood Journal</title>
  <style>
    :root {
      --bg: #f8f3e6;
      --ink: #2b2a28;
      --accent: #4299e1;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      justify-items: center;
      padding: 32px 18px 48px;
    }

    main {
      width: min(860px, 100%);
      display: grid;
      gap: 24px;
    }

    .card {
      background: var(--card);
      border-radius: 24px;
      border-top: 4px solid var(--accent);
      box-shadow: var(--shadow);
      padding: 28px;
    }

    .empty {
      text-align: center;
    }

    .empty .big {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .bars {
      list-style: none;
      padding: 0;
      display: grid;
      gap: 6px;
    }

    .bars li {
      display: flex;
      justify-content: space-between;
      text-transform: capitalize;
    }

    .capitalize {
      text-transform: capitalize;
    }

    .entry {
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
      padding: 12px 0;
    }

    .entry header {
      display: flex;
      gap: 10px;
      align-items: center;
    }

    .entry time {
      margin-left: auto;
      color: #8b857d;
    }

    .tag {
      background: rgba(66, 153, 225, 0.12);
      border-radius: 999px;
      padding: 2px 10px;
      margin-right: 6px;
      font-size: 0.85rem;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>Mood Journal</h1>
      <p>{{COUNT}} entries</p>
    </header>
    {{BODY}}
  </main>
</body>
</html>
"#;
