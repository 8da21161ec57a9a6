use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{BarChart, Block, Borders, Clear, Paragraph, Wrap},
};

use super::TerminalManager;
use crate::{
    Res,
    error::Error,
    export, spotify,
    spotify::auth::TokenManager,
    types::TrackRecord,
    utils,
};

const CHART_TITLE: &str = "Top 5 Artists in Playlist";
const TOP_ARTIST_COUNT: usize = 5;

/// Application state and event loop.
///
/// All operations run synchronously on the event loop: a fetch awaits its
/// HTTP calls inline, so nothing else can happen until it finishes and no
/// second fetch can start while one is in flight. The fetched playlist is
/// the only mutable result state; it is replaced wholesale on a successful
/// fetch and left untouched by every error path.
pub struct App {
    input: String,
    result: Option<Vec<TrackRecord>>,
    table: String,
    scroll: u16,
    focus: Focus,
    modal: Option<Modal>,
    save_input: String,
    token_manager: TokenManager,
    should_quit: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Focus {
    Input,
    Results,
}

/// Modal overlays. While one is open, main-window keys are not processed;
/// closing it returns control to the main window.
#[derive(Debug, Clone, PartialEq)]
enum Modal {
    Chart,
    Error(String),
    SavePrompt,
    Saved(String),
}

impl App {
    pub fn new(url: Option<String>) -> Self {
        Self {
            input: url.unwrap_or_default(),
            result: None,
            table: String::new(),
            scroll: 0,
            focus: Focus::Input,
            modal: None,
            save_input: String::new(),
            token_manager: TokenManager::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Res<()> {
        let mut terminal = TerminalManager::new()?;

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key).await;
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(modal) = self.modal.clone() {
            self.handle_modal_key(&modal, key);
            return;
        }

        match self.focus {
            Focus::Input => match key.code {
                KeyCode::Enter => self.fetch().await,
                KeyCode::Char(c) => self.input.push(c),
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Tab => self.focus = Focus::Results,
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            },
            Focus::Results => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('s') => self.request_export(),
                KeyCode::Char('c') => self.open_chart(),
                KeyCode::Up => self.scroll_by(-1),
                KeyCode::Down => self.scroll_by(1),
                KeyCode::PageUp => self.scroll_by(-10),
                KeyCode::PageDown => self.scroll_by(10),
                KeyCode::Tab => self.focus = Focus::Input,
                _ => {}
            },
        }
    }

    fn handle_modal_key(&mut self, modal: &Modal, key: KeyEvent) {
        match modal {
            Modal::SavePrompt => match key.code {
                KeyCode::Enter => self.confirm_export(),
                // cancelling the prompt is a no-op, not an error
                KeyCode::Esc => self.modal = None,
                KeyCode::Char(c) => self.save_input.push(c),
                KeyCode::Backspace => {
                    self.save_input.pop();
                }
                _ => {}
            },
            Modal::Chart | Modal::Error(_) | Modal::Saved(_) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.modal = None;
                }
                _ => {}
            },
        }
    }

    /// Validates the input field and derives the playlist identifier.
    /// Runs before any token or network work, so an empty field never
    /// issues a request.
    fn prepare_fetch(&self) -> Result<String, Error> {
        let input = self.input.trim();
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(utils::extract_playlist_id(input))
    }

    async fn fetch(&mut self) {
        match self.fetch_playlist().await {
            Ok(()) => self.modal = Some(Modal::Chart),
            Err(e) => self.modal = Some(Modal::Error(e.to_string())),
        }
    }

    async fn fetch_playlist(&mut self) -> Result<(), Error> {
        let playlist_id = self.prepare_fetch()?;
        let token = self.token_manager.get_valid_token().await?;
        let items = spotify::playlist::get_playlist_tracks(&token, &playlist_id).await?;
        let records = utils::flatten_tracks(&items)?;

        self.table = utils::render_table(&records);
        self.scroll = 0;
        self.result = Some(records);
        Ok(())
    }

    fn request_export(&mut self) {
        if self.result.is_none() {
            self.modal = Some(Modal::Error(Error::NoData.to_string()));
            return;
        }

        self.save_input = String::from("playlist.csv");
        self.modal = Some(Modal::SavePrompt);
    }

    fn confirm_export(&mut self) {
        if self.save_input.trim().is_empty() {
            self.modal = None;
            return;
        }

        let Some(records) = &self.result else {
            self.modal = Some(Modal::Error(Error::NoData.to_string()));
            return;
        };

        let path = export::default_csv_path(&self.save_input);
        match export::write_csv(&path, records) {
            Ok(()) => self.modal = Some(Modal::Saved(path.display().to_string())),
            Err(e) => self.modal = Some(Modal::Error(e.to_string())),
        }
    }

    fn open_chart(&mut self) {
        if self.result.is_some() {
            self.modal = Some(Modal::Chart);
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = self.table.lines().count().saturating_sub(1) as u16;
        self.scroll = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            self.scroll.saturating_add(delta as u16).min(max)
        };
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // URL input
                Constraint::Min(0),    // track table
                Constraint::Length(1), // key help
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_input(f, chunks[1]);
        self.render_results(f, chunks[2]);
        self.render_help(f, chunks[3]);

        match &self.modal {
            Some(Modal::Chart) => self.render_chart(f),
            Some(Modal::Error(message)) => self.render_dialog(f, "Error", message, Color::Red),
            Some(Modal::Saved(path)) => self.render_dialog(
                f,
                "Saved",
                &format!("Playlist saved to {path}"),
                Color::Green,
            ),
            Some(Modal::SavePrompt) => self.render_save_prompt(f),
            None => {}
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let title = Paragraph::new("♪ Spotify Playlist Analyzer")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(title, area);
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let border_style = if self.focus == Focus::Input && self.modal.is_none() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let text = if self.focus == Focus::Input && self.modal.is_none() {
            format!("{}█", self.input)
        } else {
            self.input.clone()
        };

        let input = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Playlist URL"),
        );

        f.render_widget(input, area);
    }

    fn render_results(&self, f: &mut Frame, area: Rect) {
        let border_style = if self.focus == Focus::Results && self.modal.is_none() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let title = match &self.result {
            Some(records) => format!("Tracks ({})", records.len()),
            None => String::from("Tracks"),
        };

        let text = if self.result.is_some() {
            self.table.clone()
        } else {
            String::from("No playlist loaded. Enter a URL above and press Enter.")
        };

        let results = Paragraph::new(text).scroll((self.scroll, 0)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );

        f.render_widget(results, area);
    }

    fn render_help(&self, f: &mut Frame, area: Rect) {
        let help = Paragraph::new(" Tab focus · Enter fetch · ↑/↓ scroll · s save CSV · c chart · q quit")
            .style(Style::default().fg(Color::DarkGray));

        f.render_widget(help, area);
    }

    fn render_chart(&self, f: &mut Frame) {
        let area = centered_rect(70, 60, f.area());
        f.render_widget(Clear, area);

        let top = match &self.result {
            Some(records) => utils::top_artists(records, TOP_ARTIST_COUNT),
            None => Vec::new(),
        };
        let data: Vec<(&str, u64)> = top.iter().map(|(name, count)| (name.as_str(), *count)).collect();

        let bar_width = (area.width.saturating_sub(2) / TOP_ARTIST_COUNT as u16)
            .saturating_sub(1)
            .max(3);

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(CHART_TITLE)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .data(&data[..])
            .bar_width(bar_width)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::LightBlue))
            .value_style(Style::default().fg(Color::Black).bg(Color::LightBlue));

        f.render_widget(chart, area);
    }

    fn render_dialog(&self, f: &mut Frame, title: &str, message: &str, color: Color) {
        let area = centered_rect(50, 25, f.area());
        f.render_widget(Clear, area);

        let dialog = Paragraph::new(format!("{message}\n\nPress Enter to close"))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(color)),
            );

        f.render_widget(dialog, area);
    }

    fn render_save_prompt(&self, f: &mut Frame) {
        let area = centered_rect(60, 25, f.area());
        f.render_widget(Clear, area);

        let prompt = Paragraph::new(format!(
            "{}█\n\nEnter save · Esc cancel",
            self.save_input
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Save as CSV")
                .border_style(Style::default().fg(Color::Yellow)),
        );

        f.render_widget(prompt, area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<TrackRecord> {
        vec![TrackRecord {
            song_name: "Song".to_string(),
            artist: "Artist".to_string(),
            album: "Album".to_string(),
            duration_min: 3.5,
            popularity: 50,
        }]
    }

    #[test]
    fn export_without_data_reports_error_and_keeps_prompt_closed() {
        let mut app = App::new(None);

        app.request_export();

        assert_eq!(app.modal, Some(Modal::Error(Error::NoData.to_string())));
    }

    #[test]
    fn export_with_data_opens_save_prompt_with_default_name() {
        let mut app = App::new(None);
        app.result = Some(sample_records());

        app.request_export();

        assert_eq!(app.modal, Some(Modal::SavePrompt));
        assert_eq!(app.save_input, "playlist.csv");
    }

    #[test]
    fn empty_input_is_rejected_before_any_request() {
        let app = App::new(None);
        assert_eq!(app.prepare_fetch(), Err(Error::EmptyInput));

        let app = App::new(Some("   ".to_string()));
        assert_eq!(app.prepare_fetch(), Err(Error::EmptyInput));
    }

    #[test]
    fn prefilled_url_resolves_to_playlist_id() {
        let app = App::new(Some(
            "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc".to_string(),
        ));

        assert_eq!(
            app.prepare_fetch(),
            Ok("37i9dQZF1DXcBWIGoYBM5M".to_string())
        );
    }

    #[test]
    fn cancelled_save_prompt_is_a_no_op() {
        let mut app = App::new(None);
        app.result = Some(sample_records());
        app.request_export();

        app.handle_modal_key(
            &Modal::SavePrompt,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
        );

        assert_eq!(app.modal, None);
        assert!(app.result.is_some());
    }

    #[test]
    fn confirming_empty_save_path_closes_prompt_without_writing() {
        let mut app = App::new(None);
        app.result = Some(sample_records());
        app.request_export();
        app.save_input.clear();

        app.confirm_export();

        assert_eq!(app.modal, None);
    }

    #[test]
    fn chart_does_not_open_without_data() {
        let mut app = App::new(None);

        app.open_chart();

        assert_eq!(app.modal, None);
    }
}
