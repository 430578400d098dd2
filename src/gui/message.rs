use crate::gui::screens::{
    ScreenData, ScreenMessage, dashboard::DashboardScreen, project_page::ProjectPageScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(ScreenMessage<DashboardScreen>),
    ProjectPage(ScreenMessage<ProjectPageScreen>),
    ChangeScreen(ScreenData),
}
