use crate::color::{normalize_color, HexColor};
use crate::feeds::{Headlines, NewsSummary};
use serde::Serialize;
use std::fmt::Display;

/// Arch Linux logo in Nerd Fonts.
pub const ARCH_ICON: &str = "\u{f303}";

pub const ACTIVE_CLASS: &str = "arch_news_active";
pub const INACTIVE_CLASS: &str = "arch_news_inactive";
pub const ERROR_CLASS: &str = "arch-news-error";

/// The JSON object Waybar reads from a `custom` module with `return-type: json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaybarOutput {
    pub text: String,
    pub tooltip: String,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<HexColor>,
}

impl WaybarOutput {
    pub fn error(message: impl Display) -> Self {
        Self {
            text: format!("{} ✗", ARCH_ICON),
            tooltip: format!("Error: {}", message),
            class: ERROR_CLASS.to_string(),
            percentage: None,
            color: None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorOptions {
    pub active: Option<String>,
    pub inactive: Option<String>,
}

pub fn percentage(count: usize) -> u8 {
    count.saturating_mul(10).min(100) as u8
}

pub fn format_output(summary: &NewsSummary, days: u32, colors: &ColorOptions) -> WaybarOutput {
    let tooltip = if summary.headlines.is_empty() {
        format!("No Arch Linux news in the last {} days", days)
    } else {
        match &summary.headlines {
            Headlines::Items(items) => items
                .iter()
                .map(|item| format!("{} ({})", item.title, item.date))
                .collect::<Vec<_>>()
                .join("\n\n"),
            Headlines::Errors(errors) => errors.join("\n"),
        }
    };

    let count = summary.count;
    let class = if count > 0 { ACTIVE_CLASS } else { INACTIVE_CLASS };

    let color_token = if count > 0 {
        colors.active.as_deref()
    } else {
        colors.inactive.as_deref()
    };

    WaybarOutput {
        text: format!("{} {}", ARCH_ICON, count),
        tooltip,
        class: class.to_string(),
        percentage: Some(percentage(count)),
        color: color_token.and_then(normalize_color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeds::Headline;
    use serde_json::Value;

    fn headline(title: &str, date: &str) -> Headline {
        Headline {
            title: title.to_string(),
            date: date.to_string(),
            link: String::new(),
        }
    }

    fn colors(active: Option<&str>, inactive: Option<&str>) -> ColorOptions {
        ColorOptions {
            active: active.map(str::to_string),
            inactive: inactive.map(str::to_string),
        }
    }

    #[test]
    fn test_percentage_caps_at_100() {
        assert_eq!(percentage(0), 0);
        assert_eq!(percentage(1), 10);
        assert_eq!(percentage(7), 70);
        assert_eq!(percentage(10), 100);
        assert_eq!(percentage(42), 100);
        assert_eq!(percentage(usize::MAX), 100);
    }

    #[test]
    fn test_headlines_tooltip() {
        let summary = NewsSummary::from_headlines(vec![
            headline("Valkey to replace Redis", "2024-04-17 14:12"),
            headline("Increasing the default vm.max_map_count", "2024-04-07 10:23"),
        ]);

        let output = format_output(&summary, 7, &ColorOptions::default());
        assert_eq!(output.text, format!("{} 2", ARCH_ICON));
        assert_eq!(
            output.tooltip,
            "Valkey to replace Redis (2024-04-17 14:12)\n\nIncreasing the default vm.max_map_count (2024-04-07 10:23)"
        );
        assert_eq!(output.class, ACTIVE_CLASS);
        assert_eq!(output.percentage, Some(20));
        assert_eq!(output.color, None);
    }

    #[test]
    fn test_empty_tooltip_mentions_days() {
        let summary = NewsSummary::from_headlines(Vec::new());
        let output = format_output(&summary, 14, &ColorOptions::default());
        assert_eq!(output.tooltip, "No Arch Linux news in the last 14 days");
        assert_eq!(output.class, INACTIVE_CLASS);
        assert_eq!(output.percentage, Some(0));
    }

    #[test]
    fn test_error_headlines_tooltip() {
        let summary = NewsSummary {
            count: 0,
            headlines: Headlines::Errors(vec![
                "Error: first".to_string(),
                "Error: second".to_string(),
            ]),
        };

        let output = format_output(&summary, 7, &ColorOptions::default());
        assert_eq!(output.tooltip, "Error: first\nError: second");
        assert_eq!(output.class, INACTIVE_CLASS);
        assert!(!output.tooltip.contains("No Arch Linux news"));
    }

    #[test]
    fn test_active_color_only_when_news() {
        let summary = NewsSummary::from_headlines(vec![headline("a", "2024-01-01 00:00")]);
        let output = format_output(&summary, 7, &colors(Some("red"), Some("blue")));
        assert_eq!(output.color.as_ref().map(HexColor::as_str), Some("#ff0000"));

        let empty = NewsSummary::from_headlines(Vec::new());
        let output = format_output(&empty, 7, &colors(Some("red"), None));
        assert_eq!(output.color, None);
    }

    #[test]
    fn test_inactive_color_only_when_quiet() {
        let empty = NewsSummary::from_headlines(Vec::new());
        let output = format_output(&empty, 7, &colors(Some("red"), Some("4ecdc4")));
        assert_eq!(output.color.as_ref().map(HexColor::as_str), Some("#4ecdc4"));

        let summary = NewsSummary::from_headlines(vec![headline("a", "2024-01-01 00:00")]);
        let output = format_output(&summary, 7, &colors(None, Some("blue")));
        assert_eq!(output.color, None);
    }

    #[test]
    fn test_invalid_color_omitted() {
        let summary = NewsSummary::from_headlines(vec![headline("a", "2024-01-01 00:00")]);
        let output = format_output(&summary, 7, &colors(Some("#1234"), None));
        assert_eq!(output.color, None);

        let json: Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();
        assert!(json.get("color").is_none());
    }

    #[test]
    fn test_json_shape_on_success() {
        let summary = NewsSummary::from_headlines(vec![headline("a", "2024-01-01 00:00")]);
        let output = format_output(&summary, 7, &colors(Some("abc"), None));
        let json: Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

        assert_eq!(json["class"], ACTIVE_CLASS);
        assert_eq!(json["percentage"], 10);
        assert_eq!(json["color"], "#aabbcc");
        assert_eq!(json["tooltip"], "a (2024-01-01 00:00)");
    }

    #[test]
    fn test_error_output_shape() {
        let output = WaybarOutput::error("Days must be a positive number");
        let json: Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

        assert_eq!(json["class"], ERROR_CLASS);
        assert_eq!(json["tooltip"], "Error: Days must be a positive number");
        assert_eq!(json["text"], format!("{} ✗", ARCH_ICON));
        assert!(json.get("percentage").is_none());
        assert!(json.get("color").is_none());
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_json_is_single_line() {
        let summary = NewsSummary::from_headlines(vec![
            headline("a", "2024-01-02 00:00"),
            headline("b", "2024-01-01 00:00"),
        ]);
        let line = format_output(&summary, 7, &ColorOptions::default()).to_json().unwrap();
        assert!(!line.contains('\n'));
    }
}
