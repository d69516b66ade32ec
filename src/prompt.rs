use crate::theme::{
    prompt::{HINT_STYLE, INPUT_CURSOR_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};

const OUTER_WIDTH: u16 = 44;
const OUTER_HEIGHT: u16 = 7;

/// Characters of the input that fit on the input line
const INPUT_WIDTH: usize = 37;

/// Modal free-text entry.  Centered box with a title, the text typed so
/// far, and a confirm/cancel hint.  Dismissal is explicit: Enter submits,
/// Esc (handled by the caller) cancels and must leave all other state
/// untouched.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Prompt;

impl StatefulWidget for Prompt {
    type State = PromptState;

    /*
     * ............................................
     * .┌───────────── New event ────────────────┐.
     * .│                                        │.
     * .│ dentist at noon█                       │.
     * .│                                        │.
     * .│      ENTER to save — ESC to cancel     │.
     * .└────────────────────────────────────────┘.
     * ............................................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(format!(" {} ", state.title))
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct PromptState {
    title: String,
    input: String,
}

impl PromptState {
    pub(crate) fn new<S: Into<String>>(title: S, initial: &str) -> PromptState {
        PromptState {
            title: title.into(),
            input: initial.to_owned(),
        }
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    fn to_text(&self) -> Text<'static> {
        Text::from_iter([
            Line::from_iter([
                Span::styled(self.visible_tail().to_owned(), BASE_STYLE),
                Span::styled(" ", INPUT_CURSOR_STYLE),
            ]),
            Line::styled("", BASE_STYLE),
            Line::styled("ENTER to save, ESC to cancel", HINT_STYLE).centered(),
        ])
    }

    // Tail of the input that fits the input line, cut on char boundaries
    fn visible_tail(&self) -> &str {
        let excess = self.input.chars().count().saturating_sub(INPUT_WIDTH);
        if excess == 0 {
            &self.input
        } else {
            match self.input.char_indices().nth(excess) {
                Some((i, _)) => &self.input[i..],
                None => "",
            }
        }
    }

    pub(crate) fn handle_input(&mut self, input: PromptInput) -> PromptOutput {
        match input {
            PromptInput::Char(c) => {
                self.input.push(c);
                PromptOutput::Ok
            }
            PromptInput::Backspace => {
                if self.input.pop().is_some() {
                    PromptOutput::Ok
                } else {
                    PromptOutput::Invalid
                }
            }
            PromptInput::Enter => PromptOutput::Submit(self.input.clone()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PromptInput {
    Char(char),
    Backspace,
    Enter,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum PromptOutput {
    Ok,
    Invalid,
    Submit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_then_enter_submits() {
        let mut state = PromptState::new("New event", "");
        for c in "hi".chars() {
            assert_eq!(state.handle_input(PromptInput::Char(c)), PromptOutput::Ok);
        }
        assert_eq!(
            state.handle_input(PromptInput::Enter),
            PromptOutput::Submit("hi".into())
        );
    }

    #[test]
    fn starts_from_the_initial_text() {
        let mut state = PromptState::new("Note", "dentist");
        assert_eq!(state.input(), "dentist");
        state.handle_input(PromptInput::Backspace);
        assert_eq!(
            state.handle_input(PromptInput::Enter),
            PromptOutput::Submit("dentis".into())
        );
    }

    #[test]
    fn enter_on_empty_input_submits_empty_text() {
        let mut state = PromptState::new("New event", "");
        assert_eq!(
            state.handle_input(PromptInput::Enter),
            PromptOutput::Submit(String::new())
        );
    }

    #[test]
    fn backspace_on_empty_input_is_invalid() {
        let mut state = PromptState::new("New event", "");
        assert_eq!(
            state.handle_input(PromptInput::Backspace),
            PromptOutput::Invalid
        );
    }

    #[test]
    fn long_input_shows_only_the_tail() {
        let text = "x".repeat(INPUT_WIDTH + 5);
        let state = PromptState::new("New event", &text);
        assert_eq!(state.visible_tail().chars().count(), INPUT_WIDTH);
    }
}
