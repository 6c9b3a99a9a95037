//! TUI module - weekly planner dashboard with ratatui

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::io::{stdout, Stdout};

use crate::catalog::{filter_by_focus, Workout, WORKOUT_LIBRARY};
use crate::schedule::{Direction as Shift, Planner, Weekday};
use crate::summary::{day_duration, focus_counts, format_duration, total_scheduled_minutes};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// App state for TUI
pub struct App {
    planner: Planner,
    library_cursor: usize,
    should_quit: bool,
}

impl App {
    pub fn new(start_day: Option<Weekday>) -> Result<Self> {
        let mut planner = Planner::new()?;
        planner.active_day = start_day.unwrap_or_else(Weekday::today);
        Ok(Self {
            planner,
            library_cursor: 0,
            should_quit: false,
        })
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }

        restore_terminal()?;
        Ok(())
    }

    fn visible_library(&self) -> Vec<&'static Workout> {
        filter_by_focus(WORKOUT_LIBRARY, self.planner.focus_filter)
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let header = Paragraph::new(format!(
            "weekfit - Weekly Workout Planner | strategy: {} | filter: {}",
            self.planner.strategy.name(),
            self.planner.focus_filter.label(),
        ))
        .style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(chunks[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(5)])
            .split(columns[0]);

        self.render_week(frame, left[0]);
        self.render_day_detail(frame, left[1]);
        self.render_library(frame, columns[1]);

        // Footer: keys plus derived weekly totals
        let schedule = self.planner.schedule();
        let counts = focus_counts(schedule);
        let mut split: Vec<String> = counts
            .iter()
            .map(|(area, count)| format!("{} {}", area.name(), count))
            .collect();
        split.sort();
        let totals = if split.is_empty() {
            "no workouts".to_string()
        } else {
            split.join(", ")
        };
        let footer = Paragraph::new(format!(
            "q quit | h/l day | j/k library | a add | d drop | r rest | f filter | e strategy | [/] shift   total {} | {}",
            format_duration(total_scheduled_minutes(schedule)),
            totals,
        ))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }

    fn render_week(&self, frame: &mut Frame, area: Rect) {
        let today = Weekday::today();

        let rows: Vec<Row> = self
            .planner
            .schedule()
            .days()
            .iter()
            .map(|day| {
                let label = if day.day == today {
                    format!("{} *", day.day.label())
                } else {
                    day.day.label().to_string()
                };
                let plan = if day.is_rest_day {
                    "rest".to_string()
                } else {
                    format!(
                        "{} workouts, {}",
                        day.workouts.len(),
                        format_duration(day_duration(&day.workouts))
                    )
                };
                let style = if day.day == self.planner.active_day {
                    Style::default().bg(Color::DarkGray).bold()
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(label),
                    Cell::from(day.focus.name()),
                    Cell::from(day.energy.name()),
                    Cell::from(day.anchor.name()),
                    Cell::from(plan),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Length(9),
                Constraint::Length(9),
                Constraint::Length(7),
                Constraint::Min(16),
            ],
        )
        .header(Row::new(vec!["Day", "Focus", "Energy", "Anchor", "Plan"])
            .style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title("Week"));

        frame.render_widget(table, area);
    }

    fn render_day_detail(&self, frame: &mut Frame, area: Rect) {
        let day = self.planner.active_plan();

        let mut lines: Vec<Line> = if day.is_rest_day {
            vec![Line::from("Rest day")]
        } else if day.workouts.is_empty() {
            vec![Line::from("Nothing assigned yet")]
        } else {
            day.workouts
                .iter()
                .map(|w| {
                    Line::from(format!(
                        "{} - {} ({}, {}, {})",
                        w.id,
                        w.name,
                        w.primary_focus().name(),
                        format_duration(w.duration_mins),
                        w.difficulty.name(),
                    ))
                })
                .collect()
        };
        lines.push(Line::from(""));
        lines.push(Line::from(day.notes.clone()).style(Style::default().fg(Color::DarkGray)));

        let title = format!(
            "{} - {} ({})",
            day.day.label(),
            day.focus.name(),
            format_duration(day_duration(&day.workouts)),
        );
        let detail = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(detail, area);
    }

    fn render_library(&self, frame: &mut Frame, area: Rect) {
        let library = self.visible_library();

        let rows: Vec<Row> = library
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let style = if i == self.library_cursor {
                    Style::default().bg(Color::DarkGray).bold()
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(w.id),
                    Cell::from(w.name),
                    Cell::from(w.primary_focus().name()),
                    Cell::from(format_duration(w.duration_mins)),
                ])
                .style(style)
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Min(18),
                Constraint::Length(11),
                Constraint::Length(7),
            ],
        )
        .header(Row::new(vec!["Id", "Workout", "Focus", "Time"])
            .style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title("Library"));

        frame.render_widget(table, area);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => self.should_quit = true,
                        KeyCode::Left | KeyCode::Char('h') => self.select_day(-1),
                        KeyCode::Right | KeyCode::Char('l') => self.select_day(1),
                        KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
                        KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
                        KeyCode::Char('a') => self.add_selected(),
                        KeyCode::Char('d') => self.drop_last(),
                        KeyCode::Char('r') => {
                            let day_id = self.planner.active_plan().id;
                            self.planner.toggle_rest(day_id);
                        }
                        KeyCode::Char('f') => {
                            self.planner.focus_filter = self.planner.focus_filter.next();
                            self.library_cursor = 0;
                        }
                        KeyCode::Char('e') => {
                            self.planner.strategy = self.planner.strategy.next();
                        }
                        KeyCode::Char('[') => self.planner.shift_week(Shift::Backward),
                        KeyCode::Char(']') => self.planner.shift_week(Shift::Forward),
                        _ => {}
                    }
                }
        Ok(())
    }

    fn select_day(&mut self, offset: i32) {
        let days = Weekday::all();
        let current = days
            .iter()
            .position(|d| *d == self.planner.active_day)
            .unwrap_or(0) as i32;
        let next = (current + offset).rem_euclid(days.len() as i32) as usize;
        self.planner.active_day = days[next];
    }

    fn move_cursor(&mut self, offset: i32) {
        let len = self.visible_library().len();
        if len == 0 {
            return;
        }
        let next = (self.library_cursor as i32 + offset).rem_euclid(len as i32);
        self.library_cursor = next as usize;
    }

    fn add_selected(&mut self) {
        let library = self.visible_library();
        if let Some(workout) = library.get(self.library_cursor) {
            let day_id = self.planner.active_plan().id;
            self.planner.add_workout(day_id, workout);
        }
    }

    fn drop_last(&mut self) {
        let day = self.planner.active_plan();
        if let Some(last) = day.workouts.last() {
            let day_id = day.id;
            let workout_id = last.id;
            self.planner.remove_workout(day_id, workout_id);
        }
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
