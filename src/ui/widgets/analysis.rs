use crate::api::{ApiData, ApiRequest};
use crate::ui::widgets::{
    card_border_style, sentiment_style, visible_tail, PanelWidget, CONNECTION_ERROR_TEXT,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const EMPTY_TEXT_NOTICE: &str = "Please enter some text";
const PLACEHOLDER: &str = "Analyzing...";
const IDLE_HINT: &str = "Type some text and press Enter to analyze it.";

/// Free-text input plus the single-result display region fed by
/// `/predict`.
pub struct AnalysisPanel {
    input: String,
    loading: bool,
    sentiment: Option<String>,
    error: Option<String>,
}

impl AnalysisPanel {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            loading: false,
            sentiment: None,
            error: None,
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, focused: bool, border_style: Style) {
        let block = Block::default()
            .title(" Text ")
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
            .title(" Result ")
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

        if let Some(ref sentiment) = self.sentiment {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            self.render_card(frame, inner, sentiment);
            return;
        }

        frame.render_widget(
            Paragraph::new(IDLE_HINT)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: false })
                .block(block),
            area,
        );
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, sentiment: &str) {
        let card_area = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area)[0];

        let card = Paragraph::new(Line::from(Span::styled(
            sentiment,
            sentiment_style(sentiment),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(card_border_style(sentiment)),
        );

        frame.render_widget(card, card_area);
    }
}

impl Default for AnalysisPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelWidget for AnalysisPanel {
    fn id(&self) -> &'static str {
        "analysis"
    }

    fn title(&self) -> &str {
        "Analyze Text"
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
            ApiData::Sentiment(label) => {
                self.sentiment = Some(label);
                self.error = None;
            }
            ApiData::BackendError(message) => {
                self.error = Some(format!("Error: {}", message));
                self.sentiment = None;
            }
            ApiData::ConnectionFailed => {
                self.error = Some(CONNECTION_ERROR_TEXT.to_string());
                self.sentiment = None;
            }
            ApiData::Loading => {
                self.loading = true;
            }
            _ => {}
        }
    }

    fn prepare_submit(&self) -> Result<ApiRequest, &'static str> {
        let text = self.input.trim();
        if text.is_empty() {
            return Err(EMPTY_TEXT_NOTICE);
        }
        Ok(ApiRequest::Predict {
            text: text.to_string(),
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
        // Single result card; nothing to scroll.
    }

    fn scroll_down(&mut self) {
        // Single result card; nothing to scroll.
    }
}
