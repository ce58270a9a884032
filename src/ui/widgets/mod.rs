pub mod analysis;
pub mod tweets;

use crate::api::{ApiData, ApiRequest};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};

/// What the connection-failure outcome renders as, in either region.
pub const CONNECTION_ERROR_TEXT: &str = "Error connecting to backend";

/// A bordered panel owning one input field and one display region. The
/// region's contents are fully replaced by each `update_data` call.
pub trait PanelWidget {
    fn id(&self) -> &'static str;
    fn title(&self) -> &str;
    fn render(&self, frame: &mut Frame, area: Rect, focused: bool);
    fn update_data(&mut self, data: ApiData);
    /// Validate the current input. `Ok` carries the request to issue;
    /// `Err` carries the notification text to show instead. Nothing is
    /// sent anywhere for empty input.
    fn prepare_submit(&self) -> Result<ApiRequest, &'static str>;
    fn insert_char(&mut self, c: char);
    fn delete_char(&mut self);
    fn input(&self) -> &str;
    fn scroll_up(&mut self);
    fn scroll_down(&mut self);
}

pub fn is_negative(sentiment: &str) -> bool {
    sentiment == "Negative"
}

/// Label style shared by both regions. "Negative" gets the marker style;
/// every other label renders the same default way.
pub fn sentiment_style(sentiment: &str) -> Style {
    if is_negative(sentiment) {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }
}

pub fn card_border_style(sentiment: &str) -> Style {
    if is_negative(sentiment) {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Tail of the input that fits the field. Editing happens at the end, so
/// the end is what stays visible.
pub fn visible_tail(input: &str, width: usize) -> &str {
    if width == 0 {
        return "";
    }
    let chars = input.chars().count();
    if chars <= width {
        return input;
    }
    match input.char_indices().nth(chars - width) {
        Some((idx, _)) => &input[idx..],
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_negative_exact_match_only() {
        assert!(is_negative("Negative"));
        assert!(!is_negative("Positive"));
        assert!(!is_negative("negative"));
        assert!(!is_negative("Neutral"));
    }

    #[test]
    fn test_sentiment_style_marks_negative() {
        assert_eq!(sentiment_style("Negative").fg, Some(Color::Red));
        assert_eq!(sentiment_style("Positive").fg, Some(Color::Green));
        // Unknown labels share the default style.
        assert_eq!(sentiment_style("Mixed").fg, Some(Color::Green));
    }

    #[test]
    fn test_card_border_style_marks_negative() {
        assert_eq!(card_border_style("Negative").fg, Some(Color::Red));
        assert_eq!(card_border_style("Positive").fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_visible_tail_short_input() {
        assert_eq!(visible_tail("hello", 10), "hello");
    }

    #[test]
    fn test_visible_tail_exact_fit() {
        assert_eq!(visible_tail("hello", 5), "hello");
    }

    #[test]
    fn test_visible_tail_truncates_from_the_front() {
        assert_eq!(visible_tail("hello world", 5), "world");
    }

    #[test]
    fn test_visible_tail_zero_width() {
        assert_eq!(visible_tail("hello", 0), "");
    }

    #[test]
    fn test_visible_tail_multibyte() {
        assert_eq!(visible_tail("héllo wörld", 5), "wörld");
    }
}
