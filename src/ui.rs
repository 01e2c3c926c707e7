use crate::{
    app::{App, Mode, SearchResult, Status},
    form::Field,
    record::{Record, Remark},
    roster::RosterState,
};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph, Row, Table, Wrap},
};

const BAR_COLORS: [Color; 3] = [
    Color::Rgb(0x4c, 0xaf, 0x50),
    Color::Rgb(0x21, 0x96, 0xf3),
    Color::Rgb(0xff, 0x98, 0x00),
];

pub fn draw_ui(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let title = Paragraph::new("SmartClass360 – Student Performance Dashboard")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .split(chunks[1]);

    draw_form(f, app, main_chunks[0]);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Min(0),
        ])
        .split(main_chunks[1]);

    draw_search(f, app, right_chunks[0], right_chunks[1]);

    if app.roster.state() == RosterState::Empty {
        let empty = Paragraph::new("No students added yet.")
            .block(panel("All Students Summary", false))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Blue));
        f.render_widget(empty, right_chunks[2]);
        app.visible_rows = 0;
    } else {
        draw_summary_table(f, app, right_chunks[2]);
        draw_average_chart(f, app.roster.list_all(), right_chunks[3]);
    }

    let status = match &app.status {
        Status::Info(msg) => Span::styled(msg.as_str(), Style::default().fg(Color::Blue)),
        Status::Success(msg) => Span::styled(msg.as_str(), Style::default().fg(Color::Green)),
        Status::Warning(msg) => Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)),
        Status::Error(msg) => Span::styled(msg.as_str(), Style::default().fg(Color::Red)),
    };
    f.render_widget(Paragraph::new(Line::from(status)), chunks[2]);

    let help = match app.mode {
        Mode::Browsing => {
            "<a> add student  </> search  <↑/↓> scroll  <R> reset data  <q> quit"
        }
        Mode::EditingForm => {
            "<Tab/↑↓> field  <←/→> ±1  <PgUp/PgDn> ±10  <Enter> add  <Esc> back"
        }
        Mode::Searching => "<0-9> roll number  <Enter> search  <Esc> back",
    };
    let footer = Line::from(vec![
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        Span::raw("  │  "),
        Span::styled(
            "SmartClass360 · built with Rust and ratatui",
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ]);
    f.render_widget(Paragraph::new(footer), chunks[3]);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        })
}

fn field_style(app: &App, field: Field) -> Style {
    if matches!(app.mode, Mode::EditingForm) && app.form.focus == field {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let block = panel("Add New Student", matches!(app.mode, Mode::EditingForm));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ];
    for _ in &app.form.sliders {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let editing = matches!(app.mode, Mode::EditingForm);
    let cursor = |field: Field| {
        if editing && app.form.focus == field {
            "_"
        } else {
            ""
        }
    };

    let name = Paragraph::new(format!("Full Name: {}{}", app.form.name, cursor(Field::Name)))
        .style(field_style(app, Field::Name));
    f.render_widget(name, rows[0]);

    let roll = Paragraph::new(format!("Roll No:   {}{}", app.form.roll_no, cursor(Field::RollNo)))
        .style(field_style(app, Field::RollNo));
    f.render_widget(roll, rows[1]);

    let subjects: Vec<&str> = app.settings.subject_names().collect();
    let header = Paragraph::new(format!("Subjects: {}", subjects.join(", ")))
        .style(Style::default().fg(Color::Magenta));
    f.render_widget(header, rows[3]);

    let span = (app.form.max_score - app.form.min_score) as f64;
    for (i, slider) in app.form.sliders.iter().enumerate() {
        let label = Paragraph::new(slider.subject.as_str()).style(field_style(app, Field::Subject(i)));
        f.render_widget(label, rows[4 + 2 * i]);

        let ratio = (slider.value - app.form.min_score) as f64 / span;
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(BAR_COLORS[i % BAR_COLORS.len()]))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{}", slider.value));
        f.render_widget(gauge, rows[5 + 2 * i]);
    }
}

fn draw_search(f: &mut Frame, app: &App, input_area: Rect, result_area: Rect) {
    let searching = matches!(app.mode, Mode::Searching);
    let cursor = if searching { "_" } else { "" };
    let input = Paragraph::new(format!("{}{}", app.search_input, cursor))
        .block(panel("Search Student by Roll No", searching))
        .style(Style::default().fg(Color::Green));
    f.render_widget(input, input_area);

    match &app.search_result {
        Some(SearchResult::Found(record)) => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(result_area);

            let remark = record.remark();
            let details = vec![
                Line::from(Span::styled(
                    "Student Found",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Name:    {}", record.name())),
                Line::from(format!("Roll No: {}", record.id())),
                Line::from(format!("Grades:  {}", record.scores())),
                Line::from(format!("Average: {:.2}", record.average())),
                Line::from(vec![
                    Span::raw("Remark:  "),
                    Span::styled(
                        format!("{} {}", remark.symbol(), remark.label()),
                        remark_style(remark),
                    ),
                ]),
            ];
            let details = Paragraph::new(details)
                .block(panel("Search Result", false))
                .wrap(Wrap { trim: true });
            f.render_widget(details, halves[0]);
            draw_subject_chart(f, record, halves[1]);
        }
        Some(SearchResult::NotFound(id)) => {
            let missing = Paragraph::new(format!("Student not found (Roll No {})", id))
                .block(panel("Search Result", false))
                .style(Style::default().fg(Color::Yellow));
            f.render_widget(missing, result_area);
        }
        None => {
            let hint = Paragraph::new("Press </> and enter a roll number to look a student up.")
                .block(panel("Search Result", false))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(hint, result_area);
        }
    }
}

fn remark_style(remark: Remark) -> Style {
    let color = match remark {
        Remark::Outstanding => Color::Green,
        Remark::Good => Color::Cyan,
        Remark::NeedsImprovement => Color::Yellow,
        Remark::Poor => Color::Red,
    };
    Style::default().fg(color)
}

/// Bar height for a score on the fixed 0..100 axis.
fn bar_value(score: f64) -> u64 {
    score.clamp(0.0, 100.0).round() as u64
}

fn bar_width(area: Rect, count: usize, gap: u16) -> u16 {
    let usable = area.width.saturating_sub(2);
    let per_bar = usable / count.max(1) as u16;
    per_bar.saturating_sub(gap).clamp(3, 12)
}

fn draw_subject_chart(f: &mut Frame, record: &Record, area: Rect) {
    let bars: Vec<Bar> = record
        .scores()
        .iter()
        .enumerate()
        .map(|(i, (subject, score))| {
            let color = BAR_COLORS[i % BAR_COLORS.len()];
            Bar::default()
                .value(bar_value(score))
                .label(Line::from(subject.to_string()))
                .text_value(format!("{}%", score))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Subjects vs Grades", false))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area, bars.len(), 2))
        .bar_gap(2)
        .max(100);
    f.render_widget(chart, area);
}

fn draw_summary_table(f: &mut Frame, app: &mut App, area: Rect) {
    let subjects: Vec<&str> = app.settings.subject_names().collect();

    let all_rows: Vec<Row> = app
        .roster
        .list_all()
        .iter()
        .map(|record| {
            let remark = record.remark();
            let mut cells = vec![record.name().to_string(), record.id().to_string()];
            cells.extend(subjects.iter().map(|subject| {
                record
                    .scores()
                    .get(subject)
                    .map_or_else(|| "-".to_string(), |score| score.to_string())
            }));
            cells.push(format!("{:.2}", record.average()));
            cells.push(format!("{} {}", remark.symbol(), remark.label()));
            Row::new(cells)
        })
        .collect();

    let height = area.height.saturating_sub(3) as usize;
    app.visible_rows = height;
    let start = app.scroll_offset.min(all_rows.len().saturating_sub(height));
    let end = (start + height).min(all_rows.len());
    let visible = &all_rows[start..end];

    let mut header = vec!["Name".to_string(), "Roll No".to_string()];
    header.extend(subjects.iter().map(|s| s.to_string()));
    header.push("Avg".to_string());
    header.push("Remark".to_string());

    let mut columns = vec![Constraint::Length(16), Constraint::Length(8)];
    columns.extend(
        subjects
            .iter()
            .map(|s| Constraint::Length(s.chars().count().max(5) as u16)),
    );
    columns.push(Constraint::Length(7));
    columns.push(Constraint::Min(18));

    let title = format!(
        "All Students Summary ({}) rows {}-{}",
        all_rows.len(),
        start + 1,
        end
    );
    let table = Table::new(visible.to_vec(), columns)
        .header(Row::new(header).style(Style::default().fg(Color::Cyan)))
        .block(panel(&title, matches!(app.mode, Mode::Browsing)));
    f.render_widget(table, area);
}

fn draw_average_chart(f: &mut Frame, records: &[Record], area: Rect) {
    let bars: Vec<Bar> = records
        .iter()
        .map(|record| {
            let average = record.average();
            Bar::default()
                .value(bar_value(average))
                .label(Line::from(record.name().to_string()))
                .text_value(format!("{:.2}", average))
                .style(Style::default().fg(BAR_COLORS[0]))
                .value_style(Style::default().fg(Color::Black).bg(BAR_COLORS[0]))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("All Students Average Grade", false))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(area, bars.len(), 1))
        .bar_gap(1)
        .max(100);
    f.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Scores;
    use crate::settings::Settings;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn ali() -> Record {
        let scores: Scores = [("Python", 80.0), ("TypeScript", 70.0), ("Next.js", 90.0)]
            .into_iter()
            .collect();
        Record::new("Ali", 1, scores)
    }

    #[test]
    fn empty_roster_shows_placeholder() {
        let mut app = App::new(Settings::default());
        let screen = render(&mut app);
        assert!(screen.contains("No students added yet."));
        assert!(screen.contains("Add New Student"));
        assert!(!screen.contains("All Students Average Grade"));
    }

    #[test]
    fn summary_lists_each_student() {
        let mut app = App::new(Settings::default());
        app.roster.insert(ali());
        let screen = render(&mut app);
        assert!(screen.contains("All Students Summary (1)"));
        assert!(screen.contains("Ali"));
        assert!(screen.contains("80.00"));
        assert!(screen.contains("Good"));
        assert!(screen.contains("All Students Average Grade"));
        assert!(app.visible_rows > 0);
    }

    #[test]
    fn search_hit_shows_details_and_chart() {
        let mut app = App::new(Settings::default());
        app.roster.insert(ali());
        app.search_input = "1".into();
        app.search();
        let screen = render(&mut app);
        assert!(screen.contains("Student Found"));
        assert!(screen.contains("Average: 80.00"));
        assert!(screen.contains("Subjects vs Grades"));
    }

    #[test]
    fn search_miss_shows_warning() {
        let mut app = App::new(Settings::default());
        app.search_input = "5".into();
        app.search();
        let screen = render(&mut app);
        assert!(screen.contains("Student not found (Roll No 5)"));
    }

    #[test]
    fn bar_values_stay_on_the_axis() {
        assert_eq!(bar_value(80.4), 80);
        assert_eq!(bar_value(150.0), 100);
        assert_eq!(bar_value(-3.0), 0);
    }
}
