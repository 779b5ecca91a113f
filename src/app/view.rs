//! Gallery view rendering

use iced::widget::{button, column, container, pick_list, row, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use circular_progress::state::{InteractiveState, ProgressState};
use circular_progress::ui::styles::{InteractiveStyle, RotatingStyle, SimpleStyle, StyleKind};
use circular_progress::ui::theme;
use circular_progress::ui::widgets;

/// Side of each demo ring
const RING_SIZE: f32 = 160.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let stroke = self.settings.stroke_width;

        let simple = card(
            "Simple",
            widgets::circular_progress(stroke, self.simple)
                .width(RING_SIZE)
                .height(RING_SIZE)
                .style(SimpleStyle::default())
                .into(),
            percent(self.simple.fraction()),
        );

        let interactive = card(
            "Interactive",
            widgets::circular_progress(stroke, self.interactive)
                .width(RING_SIZE)
                .height(RING_SIZE)
                .style(InteractiveStyle::from(&self.glyph))
                .into(),
            status_label(&self.interactive),
        );

        let rotating = card(
            "Rotating",
            widgets::circular_progress(stroke, self.rotating)
                .width(RING_SIZE)
                .height(RING_SIZE)
                .style(RotatingStyle::from(&self.rotation))
                .into(),
            percent(self.rotating.fraction()),
        );

        let featured = card(
            "Featured",
            widgets::circular_progress(stroke, self.interactive)
                .width(RING_SIZE)
                .height(RING_SIZE)
                .style(self.featured_style.resolve(&self.rotation, &self.glyph))
                .into(),
            status_label(&self.interactive),
        );

        let timer_label = if self.timer.is_armed() {
            "Pause"
        } else {
            "Resume"
        };

        let controls = row![
            button(text("Restart"))
                .on_press(Message::Restart)
                .style(theme::primary_button),
            button(text(timer_label))
                .on_press(Message::ToggleTimer)
                .style(theme::secondary_button),
            pick_list(StyleKind::ALL, Some(self.featured_style), Message::StyleSelected),
            button(text("Save"))
                .on_press(Message::SaveSettings)
                .style(theme::secondary_button),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        container(
            column![
                row![simple, interactive, rotating, featured].spacing(16),
                controls,
            ]
            .spacing(24)
            .align_x(Alignment::Center),
        )
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::main_content)
        .into()
    }
}

fn card<'a>(
    title: &'a str,
    progress: Element<'a, Message>,
    caption: String,
) -> Element<'a, Message> {
    container(
        column![text(title).size(16), progress, text(caption).size(13)]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .padding(16)
    .style(theme::card)
    .into()
}

fn percent(fraction: f32) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn status_label(state: &InteractiveState) -> String {
    match state {
        InteractiveState::InProgress(fraction) => percent(*fraction),
        InteractiveState::Succeeded => "Done".to_string(),
        InteractiveState::Failed => "Failed".to_string(),
    }
}
