use crate::api::{self, ApiData, ApiMessage, ApiRequest};
use crate::config::Config;
use crate::ui;
use crate::ui::widgets::analysis::AnalysisPanel;
use crate::ui::widgets::tweets::TweetsPanel;
use crate::ui::widgets::PanelWidget;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const TICK: Duration = Duration::from_millis(100);

pub struct App {
    config: Config,
    client: reqwest::Client,
    panels: Vec<Box<dyn PanelWidget>>,
    focus: usize,
    alert: Option<String>,
    generations: HashMap<String, u64>,
    tx: UnboundedSender<ApiMessage>,
    rx: UnboundedReceiver<ApiMessage>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .user_agent(concat!("sentui/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let panels: Vec<Box<dyn PanelWidget>> = vec![
            Box::new(AnalysisPanel::new()),
            Box::new(TweetsPanel::new(config.tweets.clone())),
        ];

        Self {
            config,
            client,
            panels,
            focus: 0,
            alert: None,
            generations: HashMap::new(),
            tx,
            rx,
            should_quit: false,
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            while let Ok(message) = self.rx.try_recv() {
                self.apply_message(message);
            }

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn panels(&self) -> &[Box<dyn PanelWidget>] {
        &self.panels
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // The notice modal is blocking: nothing else reacts until it is
        // dismissed.
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = (self.focus + 1) % self.panels.len(),
            KeyCode::BackTab => {
                self.focus = (self.focus + self.panels.len() - 1) % self.panels.len();
            }
            KeyCode::Enter => self.submit_focused(),
            KeyCode::Backspace => self.panels[self.focus].delete_char(),
            KeyCode::Up => self.panels[self.focus].scroll_up(),
            KeyCode::Down => self.panels[self.focus].scroll_down(),
            KeyCode::Char(c) => self.panels[self.focus].insert_char(c),
            _ => {}
        }
    }

    fn submit_focused(&mut self) {
        let panel = &mut self.panels[self.focus];
        match panel.prepare_submit() {
            Err(notice) => self.alert = Some(notice.to_string()),
            Ok(request) => {
                let widget_id = panel.id();
                // The placeholder goes up before the request is issued.
                panel.update_data(ApiData::Loading);
                let generation = self.bump_generation(widget_id);
                self.spawn_fetch(widget_id.to_string(), generation, request);
            }
        }
    }

    fn bump_generation(&mut self, widget_id: &str) -> u64 {
        let counter = self.generations.entry(widget_id.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    fn generation(&self, widget_id: &str) -> u64 {
        self.generations.get(widget_id).copied().unwrap_or(0)
    }

    fn spawn_fetch(&self, widget_id: String, generation: u64, request: ApiRequest) {
        let fetcher = request.into_fetcher(self.client.clone(), self.config.api.base_url.clone());
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let data = api::fetch_outcome(fetcher.fetch().await);
            // Send failure only means the UI is gone; nothing to do.
            let _ = tx.send(ApiMessage {
                widget_id,
                generation,
                data,
            });
        });
    }

    /// Deliver a finished call to its panel. Returns false when the
    /// message was stale or addressed to no panel.
    fn apply_message(&mut self, message: ApiMessage) -> bool {
        // A newer submission owns the region; overtaken responses are
        // dropped unrendered.
        if message.generation != self.generation(&message.widget_id) {
            return false;
        }
        match self
            .panels
            .iter_mut()
            .find(|panel| panel.id() == message.widget_id)
        {
            Some(panel) => {
                panel.update_data(message.data);
                true
            }
            None => false,
        }
    }
}
