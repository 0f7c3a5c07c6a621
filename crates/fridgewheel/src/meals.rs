//! Turning a model reply into a list of meal names.

use crate::prompts::MEAL_COUNT;

/// Extract up to [`MEAL_COUNT`] meal names from a reply.
///
/// The reply should be a JSON array of strings, possibly wrapped in a code
/// fence. Anything else is read line by line, dropping list markers, quotes
/// and commas.
#[must_use]
pub fn parse_meal_list(reply: &str) -> Vec<String> {
    let unfenced = reply.replace("```json", "").replace("```", "");
    let meals = match serde_json::from_str::<Vec<String>>(unfenced.trim()) {
        Ok(names) => names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        Err(_) => parse_lines(&unfenced),
    };
    meals.into_iter().take(MEAL_COUNT).collect()
}

fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.trim_start()
                .trim_start_matches(|c: char| c == '-' || c == '.' || c == '"' || c.is_ascii_digit())
                .replace(['"', ','], "")
                .trim()
                .to_string()
        })
        .filter(|name| !name.is_empty() && name != "[" && name != "]")
        .collect()
}
