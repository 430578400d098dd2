use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, container::bordered_box, row, scrollable, text},
};

use crate::core::model::Organisation;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{badge, layout},
};
use crate::report::{BACK_LINK, NOT_FOUND_TITLE};

/// Organisations and workspaces of one project.
#[derive(Debug, Clone)]
pub struct ProjectPageScreen {
    project_id: String,
}

#[derive(Debug, Clone)]
pub enum ProjectPageMessage {
    Back,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    BackToDashboard,
}

impl ProjectPageScreen {
    pub fn new(project_id: String) -> Self {
        Self { project_id }
    }
}

impl Screen for ProjectPageScreen {
    type Message = ProjectPageMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let back = |label: &'a str| {
            button(label).on_press(ScreenMessage::ScreenMessage(ProjectPageMessage::Back))
        };

        let project = match state.session.catalog().project(&self.project_id) {
            Ok(project) => project,
            Err(e) => {
                tracing::debug!("{e}");
                return container(
                    column![text(NOT_FOUND_TITLE).size(24), back(BACK_LINK)]
                        .spacing(16)
                        .align_x(Center),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
            }
        };

        let header = column![
            row![back("Back to Projects"), text(project.id.as_str()).size(14)]
                .spacing(16)
                .align_y(Center),
            text(project.name.as_str()).size(28),
            text("Organisations & Workspaces within this project"),
        ]
        .spacing(8);

        let mut cards = column![].spacing(16);
        for chunk in state.session.catalog().organisations().chunks(3) {
            cards = cards.push(row(chunk.iter().map(organisation_card)).spacing(16));
        }

        layout(header, scrollable(cards))
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ProjectPageMessage::Back => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::BackToDashboard))
            }
        }
    }
}

fn organisation_card<'a, Message: 'a>(organisation: &'a Organisation) -> Element<'a, Message> {
    let stat = |value: u32, label: &'a str| {
        column![text(value.to_string()).size(22), text(label).size(12)]
    };
    container(
        column![
            row![
                text(organisation.role.label()).size(12).width(Length::Fill),
                badge(organisation.status, organisation.status.color()),
            ],
            text(organisation.name.as_str()).size(20),
            row![
                stat(organisation.documents_count, "Documents"),
                stat(organisation.team_members, "Team Members"),
                stat(organisation.pending_tasks, "Pending Tasks"),
            ]
            .spacing(24),
        ]
        .spacing(12),
    )
    .padding(16)
    .style(bordered_box)
    .width(Length::FillPortion(1))
    .into()
}
