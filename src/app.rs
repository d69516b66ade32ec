use crate::help::Help;
use crate::planner::{DayId, Grid, Planner};
use crate::prompt::{Prompt, PromptInput, PromptOutput, PromptState};
use crate::theme::{BASE_STYLE, STATUS_STYLE};
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    planner: Planner,
    show_dates: bool,
    state: AppState,
}

impl App {
    pub(crate) fn new(planner: Planner) -> App {
        App {
            planner,
            show_dates: true,
            state: AppState::Grid,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Grid => match key {
                KeyCode::Char('j') | KeyCode::Down => self.planner.cursor_down(1).is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.planner.cursor_up(1).is_ok(),
                KeyCode::Char('h') | KeyCode::Left => self.planner.cursor_left().is_ok(),
                KeyCode::Char('l') | KeyCode::Right => self.planner.cursor_right().is_ok(),
                KeyCode::Char('z') | KeyCode::PageDown => {
                    let page = self.planner.page();
                    self.planner.cursor_down(page).is_ok()
                }
                KeyCode::Char('w') | KeyCode::PageUp => {
                    let page = self.planner.page();
                    self.planner.cursor_up(page).is_ok()
                }
                KeyCode::Char('0') | KeyCode::Home => {
                    self.planner.jump_to_start();
                    true
                }
                KeyCode::Char(' ') => {
                    self.planner.toggle(self.planner.cursor());
                    true
                }
                KeyCode::Char('e') | KeyCode::Enter => {
                    let id = self.planner.cursor();
                    let title = match self.planner.cursor_date() {
                        Some(date) => {
                            format!("Note for {}/{}", u8::from(date.month()), date.day())
                        }
                        None => String::from("Note"),
                    };
                    let state = PromptState::new(title, self.planner.get_note(id));
                    self.state = AppState::Prompting(PromptFor::EditNote(id), state);
                    true
                }
                KeyCode::Char('a') => {
                    if self.planner.has_selection() {
                        let state = PromptState::new("New event", "");
                        self.state = AppState::Prompting(PromptFor::MultiEvent, state);
                        true
                    } else {
                        false
                    }
                }
                KeyCode::Char('c') => {
                    self.planner.clear_week(self.planner.cursor().week);
                    true
                }
                KeyCode::Char('d') => {
                    self.show_dates = !self.show_dates;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Grid;
                true
            }
            AppState::Prompting(target, state) => {
                if key == KeyCode::Esc {
                    // Cancel: the planner was never touched
                    self.state = AppState::Grid;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char(c) => state.handle_input(PromptInput::Char(c)),
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(PromptInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(PromptInput::Enter),
                        _ => PromptOutput::Invalid,
                    };
                    match output {
                        PromptOutput::Ok => true,
                        PromptOutput::Invalid => false,
                        PromptOutput::Submit(text) => {
                            match *target {
                                PromptFor::EditNote(id) => self.planner.set_note(id, text),
                                PromptFor::MultiEvent => self.planner.apply_to_selection(&text),
                            }
                            self.state = AppState::Grid;
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn status_line(&self) -> Line<'static> {
        if self.planner.has_selection() {
            let qty = self.planner.selection_len();
            let days = if qty == 1 { "day" } else { "days" };
            Line::styled(
                format!(" {qty} {days} selected; press a to add an event to all"),
                STATUS_STYLE,
            )
        } else {
            Line::styled(" SPACE select / e edit / ? help", BASE_STYLE)
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [grid_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        Grid::new(self.show_dates).render(grid_area, buf, &mut self.planner);
        self.status_line().render(status_area, buf);
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        } else if let AppState::Prompting(_, ref mut state) = self.state {
            Prompt.render(area, buf, state);
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum AppState {
    Grid,
    Helping,
    Prompting(PromptFor, PromptState),
    Quitting,
}

/// What a submitted prompt text is applied to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PromptFor {
    EditNote(DayId),
    MultiEvent,
}
