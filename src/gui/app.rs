use iced::{Element, Task, Theme};

use super::screens::{Screen, ScreenData, ScreenMessage, dashboard};
use super::{AppState, Message};
use crate::config::Config;
use crate::core::Catalog;

pub struct SiteboardApp {
    state: AppState,
    screen: ScreenData,
}

impl SiteboardApp {
    /// Opens on the dashboard and asks for the map to be laid out once the window is up.
    pub fn new(config: Config, catalog: Catalog) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(config, catalog),
                screen: ScreenData::Dashboard(dashboard::DashboardScreen),
            },
            Task::done(Message::Dashboard(ScreenMessage::ScreenMessage(
                dashboard::DashboardMessage::MapReady,
            ))),
        )
    }

    pub fn title(&self) -> String {
        "Siteboard - Project Portfolio".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen
            .view(&self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
