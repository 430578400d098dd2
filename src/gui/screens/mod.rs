pub mod dashboard;
pub mod project_page;

use iced::{Element, Task};

use crate::gui::{AppState, Message};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Dashboard(dashboard::DashboardScreen),
    ProjectPage(project_page::ProjectPageScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::Dashboard(screen) => screen.view(state).map(Message::Dashboard),
            ScreenData::ProjectPage(screen) => screen.view(state).map(Message::ProjectPage),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (ScreenData::Dashboard(page), Message::Dashboard(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Dashboard)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(dashboard::ParentMessage::OpenProject(id)) => {
                    tracing::info!(%id, "opening project page");
                    Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                        ScreenData::ProjectPage(project_page::ProjectPageScreen::new(id)),
                    )))
                }
            },
            (ScreenData::ProjectPage(page), Message::ProjectPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::ProjectPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(project_page::ParentMessage::BackToDashboard) => {
                    Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                        ScreenData::Dashboard(dashboard::DashboardScreen),
                    )))
                }
            },
            _ => Task::none(),
        }
    }
}
