use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::presenter::{Screen, present};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    BusyPanel, ErrorBanner, IntroPanel, ResultList, SuggestionChips, TitleBar,
};

/// Draw one frame: title line, the screen for the current outcome, input.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let input_height = tui.input_box.calculate_height(frame.area().width);
    let layout = Layout::vertical([Length(1), Min(0), Length(input_height)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    let screen = present(&app.outcome);
    tui.suggestions.count = match &screen {
        Screen::NotFound { suggestions, .. } => suggestions.len(),
        _ => 0,
    };

    match &screen {
        Screen::Intro(steps) => IntroPanel::new(*steps).render(frame, main_area),
        Screen::Busy => BusyPanel { spinner_frame }.render(frame, main_area),
        Screen::NotFound {
            message,
            suggestions,
        } => SuggestionChips {
            message,
            suggestions,
            selected: tui.suggestions.selected,
        }
        .render(frame, main_area),
        Screen::Error { message } => ErrorBanner { message }.render(frame, main_area),
        Screen::Results(view) => ResultList::new(view, &mut tui.results).render(frame, main_area),
    }

    let has_unseen_content =
        matches!(screen, Screen::Results(_)) && tui.results.has_unseen_content();
    TitleBar::new(app.endpoint(), app.status_message.clone(), has_unseen_content)
        .render(frame, title_area);

    tui.input_box.busy = app.outcome.is_pending();
    tui.input_box.focused = !tui.suggestions.is_focused();
    tui.input_box.render(frame, input_area);
}
