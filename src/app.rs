use std::{io, time::Duration};

use crate::{
    error::DashboardError,
    form::StudentForm,
    record::Record,
    roster::Roster,
    settings::Settings,
    ui::draw_ui,
};

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::{info, warn};

pub enum Mode {
    Browsing,
    EditingForm,
    Searching,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Success(String),
    Warning(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Found(Record),
    NotFound(u32),
}

pub struct App {
    pub mode: Mode,
    pub settings: Settings,
    pub roster: Roster,
    pub form: StudentForm,
    pub search_input: String,
    pub search_result: Option<SearchResult>,
    pub status: Status,
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            mode: Mode::Browsing,
            form: StudentForm::new(&settings),
            settings,
            roster: Roster::new(),
            search_input: String::new(),
            search_result: None,
            status: Status::Info("No students added yet.".into()),
            scroll_offset: 0,
            visible_rows: 0,
        }
    }

    pub fn run(&mut self) -> Result<(), DashboardError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = ratatui::backend::CrosstermBackend::new(stdout);
        let mut terminal = ratatui::Terminal::new(backend)?;
        info!("dashboard started");

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        info!(students = self.roster.len(), "dashboard closed");
        result
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<(), DashboardError> {
        loop {
            terminal.draw(|f| draw_ui(f, self))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.handle_key(key.code) {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Applies one key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.mode {
            Mode::Browsing => match code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('a') => self.mode = Mode::EditingForm,
                KeyCode::Char('/') | KeyCode::Char('s') => self.mode = Mode::Searching,
                KeyCode::Char('R') => self.reset(),
                KeyCode::Down | KeyCode::Char('j') => {
                    let max_offset = self.roster.len().saturating_sub(self.visible_rows.max(1));
                    if self.scroll_offset < max_offset {
                        self.scroll_offset += 1;
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.scroll_offset = self.scroll_offset.saturating_sub(1);
                }
                _ => {}
            },
            Mode::EditingForm => match code {
                KeyCode::Esc => self.mode = Mode::Browsing,
                KeyCode::Enter => self.add_student(),
                KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
                KeyCode::Left => self.form.adjust(-1),
                KeyCode::Right => self.form.adjust(1),
                KeyCode::PageDown => self.form.adjust(-10),
                KeyCode::PageUp => self.form.adjust(10),
                KeyCode::Backspace => self.form.backspace(),
                KeyCode::Char(c) => self.form.input_char(c),
                _ => {}
            },
            Mode::Searching => match code {
                KeyCode::Esc => self.mode = Mode::Browsing,
                KeyCode::Enter => self.search(),
                KeyCode::Backspace => {
                    self.search_input.pop();
                }
                KeyCode::Char(c) if c.is_ascii_digit() => self.search_input.push(c),
                _ => {}
            },
        }
        false
    }

    pub fn add_student(&mut self) {
        let record = match self.form.to_record() {
            Ok(record) => record,
            Err(e) => {
                self.status = Status::Error(e.to_string());
                return;
            }
        };
        let (name, id) = (record.name().to_string(), record.id());
        if self.roster.insert(record) {
            info!(id, name = %name, "student added");
            self.status = Status::Success(format!("{} added successfully!", name));
        } else {
            warn!(id, "roll number already exists");
            self.status = Status::Error("Roll number already exists!".into());
        }
    }

    pub fn search(&mut self) {
        let id = match self.search_input.parse::<u32>() {
            Ok(id) if id >= 1 => id,
            _ => {
                self.status = Status::Error("Enter a roll number of at least 1".into());
                return;
            }
        };
        match self.roster.find_by_id(id) {
            Some(record) => {
                info!(id, "student found");
                self.search_result = Some(SearchResult::Found(record.clone()));
                self.status = Status::Success("Student found".into());
            }
            None => {
                info!(id, "student not found");
                self.search_result = Some(SearchResult::NotFound(id));
                self.status = Status::Warning("Student not found".into());
            }
        }
    }

    pub fn reset(&mut self) {
        info!(discarded = self.roster.len(), "student database reset");
        self.roster.clear();
        self.search_result = None;
        self.scroll_offset = 0;
        self.status = Status::Success("Student database reset!".into());
    }
}
