use crate::api::{AnalyzedTweet, ApiData, ApiRequest};
use crate::config::TweetsConfig;
use crate::ui::widgets::{sentiment_style, visible_tail, PanelWidget, CONNECTION_ERROR_TEXT};
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const EMPTY_USERNAME_NOTICE: &str = "Please enter a Twitter username";
const PLACEHOLDER: &str = "Fetching tweets...";
const IDLE_HINT: &str = "Type a Twitter username and press Enter to fetch recent tweets.";

/// Username input plus the tweet-list display region fed by `/tweets`.
pub struct TweetsPanel {
    config: TweetsConfig,
    input: String,
    tweets: Vec<AnalyzedTweet>,
    loading: bool,
    error: Option<String>,
    fetched_at: Option<DateTime<Local>>,
    scroll_state: ListState,
}

impl TweetsPanel {
    pub fn new(config: TweetsConfig) -> Self {
        let mut scroll_state = ListState::default();
        scroll_state.select(Some(0));

        Self {
            config,
            input: String::new(),
            tweets: Vec::new(),
            loading: false,
            error: None,
            fetched_at: None,
            scroll_state,
        }
    }

    fn region_title(&self) -> String {
        match (&self.error, self.fetched_at) {
            (None, Some(at)) => format!(
                " Tweets ({}, {}) ",
                self.tweets.len(),
                at.format("%H:%M:%S")
            ),
            _ => " Tweets ".to_string(),
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, focused: bool, border_style: Style) {
        let block = Block::default()
            .title(" Username ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let width = area.width.saturating_sub(3) as usize;
        let shown = visible_tail(&self.input, width);
        let line = if focused {
            Line::from(vec![
                Span::raw(shown),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ])
        } else {
            Line::from(shown)
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_region(&self, frame: &mut Frame, area: Rect, border_style: Style) {
        let block = Block::default()
            .title(self.region_title())
            .borders(Borders::ALL)
            .border_style(border_style);

        if self.loading {
            frame.render_widget(Paragraph::new(PLACEHOLDER).block(block), area);
            return;
        }

        if let Some(ref error) = self.error {
            frame.render_widget(
                Paragraph::new(error.as_str())
                    .wrap(Wrap { trim: false })
                    .block(block),
                area,
            );
            return;
        }

        if self.tweets.is_empty() {
            let text = if self.fetched_at.is_some() {
                "No tweets found."
            } else {
                IDLE_HINT
            };
            frame.render_widget(
                Paragraph::new(text)
                    .style(Style::default().fg(Color::DarkGray))
                    .wrap(Wrap { trim: false })
                    .block(block),
                area,
            );
            return;
        }

        let wrap_width = area.width.saturating_sub(4).max(10) as usize;
        let items: Vec<ListItem> = self
            .tweets
            .iter()
            .map(|tweet| {
                let mut lines: Vec<Line> = textwrap::wrap(&tweet.text, wrap_width)
                    .into_iter()
                    .map(|piece| {
                        Line::from(Span::styled(
                            piece.into_owned(),
                            Style::default().fg(Color::White),
                        ))
                    })
                    .collect();
                lines.push(Line::from(Span::styled(
                    tweet.sentiment.clone(),
                    sentiment_style(&tweet.sentiment),
                )));
                lines.push(Line::from(""));
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = self.scroll_state.clone();
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl PanelWidget for TweetsPanel {
    fn id(&self) -> &'static str {
        "tweets"
    }

    fn title(&self) -> &str {
        "User Tweets"
    }

    fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        self.render_input(frame, chunks[0], focused, border_style);
        self.render_region(frame, chunks[1], border_style);
    }

    fn update_data(&mut self, data: ApiData) {
        self.loading = false;
        match data {
            ApiData::Tweets(tweets) => {
                self.tweets = tweets;
                self.error = None;
                self.fetched_at = Some(Local::now());
                self.scroll_state.select(Some(0));
            }
            ApiData::BackendError(message) => {
                self.error = Some(format!("Error: {}", message));
            }
            ApiData::ConnectionFailed => {
                self.error = Some(CONNECTION_ERROR_TEXT.to_string());
            }
            ApiData::Loading => {
                self.loading = true;
            }
            _ => {}
        }
    }

    fn prepare_submit(&self) -> Result<ApiRequest, &'static str> {
        let username = self.input.trim();
        if username.is_empty() {
            return Err(EMPTY_USERNAME_NOTICE);
        }
        Ok(ApiRequest::Tweets {
            username: username.to_string(),
            count: self.config.count,
        })
    }

    fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    fn delete_char(&mut self) {
        self.input.pop();
    }

    fn input(&self) -> &str {
        &self.input
    }

    fn scroll_up(&mut self) {
        if let Some(selected) = self.scroll_state.selected() {
            if selected > 0 {
                self.scroll_state.select(Some(selected - 1));
            }
        }
    }

    fn scroll_down(&mut self) {
        if let Some(selected) = self.scroll_state.selected() {
            if selected < self.tweets.len().saturating_sub(1) {
                self.scroll_state.select(Some(selected + 1));
            }
        }
    }
}
