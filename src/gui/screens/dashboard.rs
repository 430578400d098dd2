use iced::{
    Element, Length, Task,
    widget::{
        button, canvas, column, container, container::bordered_box, pick_list, progress_bar, row,
        scrollable, text, text_input,
    },
};

use crate::core::{
    CategoryFilter, MapEvent, Project, ScreenProjection, Selector, StatusFilter,
    model::{Category, Status},
    progress_color,
    session::GRID_COLUMN_CHOICES,
};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{
        badge, layout,
        map::{MapCanvas, Marker},
        to_iced,
    },
};
use crate::report;

const PAN_STEP: f64 = 100.0;

#[derive(Debug, Clone)]
pub struct DashboardScreen;

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    QueryChanged(String),
    StatusSelected(StatusFilter),
    CategorySelected(CategoryFilter),
    ToggleFavorite(String),
    SelectProject(String),
    CloseDetails,
    SetColumns(u8),
    ToggleMap,
    MapReady,
    Pan(f64, f64),
    Zoom(f64),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    OpenProject(String),
}

type Msg = ScreenMessage<DashboardScreen>;

fn msg(message: DashboardMessage) -> Msg {
    ScreenMessage::ScreenMessage(message)
}

impl Screen for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, Msg> {
        let session = &state.session;
        let filter = session.filter();

        let columns = row(GRID_COLUMN_CHOICES.iter().map(|&n| -> Element<'a, Msg> {
            let label = button(text(format!("{n}")));
            if n == session.grid_columns() {
                label.into()
            } else {
                label
                    .style(button::secondary)
                    .on_press(msg(DashboardMessage::SetColumns(n)))
                    .into()
            }
        }))
        .spacing(4);

        let header = column![
            text("Your Projects").size(32),
            text("Shaping the future, one landmark at a time."),
            row![
                text_input("Search projects by name, ID, or location...", &filter.query)
                    .on_input(|q| msg(DashboardMessage::QueryChanged(q)))
                    .width(Length::FillPortion(2)),
                pick_list(Selector::options(Status::ALL), Some(filter.status), |s| {
                    msg(DashboardMessage::StatusSelected(s))
                }),
                pick_list(Selector::options(Category::ALL), Some(filter.category), |c| {
                    msg(DashboardMessage::CategorySelected(c))
                }),
                columns,
                button(if session.is_map_expanded() {
                    "Hide map"
                } else {
                    "Show map"
                })
                .on_press(msg(DashboardMessage::ToggleMap)),
            ]
            .spacing(10),
            text(session.summary()).size(14),
        ]
        .spacing(10);

        let mut content = column![].spacing(20);
        if let Some(project) = session.selected_project() {
            content = content.push(details_panel(project));
        }
        if session.is_map_expanded() {
            content = content.push(map_panel(state));
        }
        content = content.push(project_grid(state));

        layout(header, scrollable(content))
    }

    fn update(&mut self, message: Self::Message, state: &mut AppState) -> Task<Msg> {
        match message {
            DashboardMessage::QueryChanged(query) => state.session.set_query(query),
            DashboardMessage::StatusSelected(status) => state.session.set_status_filter(status),
            DashboardMessage::CategorySelected(category) => {
                state.session.set_category_filter(category)
            }
            DashboardMessage::ToggleFavorite(id) => {
                state.session.toggle_favorite(&id);
            }
            DashboardMessage::SelectProject(id) => {
                if let Err(e) = state.session.select_project(&id) {
                    tracing::warn!("{e}");
                }
            }
            DashboardMessage::CloseDetails => state.session.clear_selection(),
            DashboardMessage::SetColumns(columns) => {
                if let Err(e) = state.session.set_grid_columns(columns) {
                    tracing::warn!("{e}");
                }
            }
            DashboardMessage::ToggleMap => {
                state.session.toggle_map();
            }
            DashboardMessage::MapReady => {
                let [width, height] = state.config.map.viewport;
                state.map.resize(width, height);
                state.session.handle_map_event(MapEvent::Ready, &state.map);
            }
            DashboardMessage::Pan(dx, dy) => {
                state.map.pan_by(dx, dy);
                state.session.handle_map_event(MapEvent::PanEnd, &state.map);
            }
            DashboardMessage::Zoom(delta) => {
                state.map.zoom_to(state.map.zoom() + delta);
                state.session.handle_map_event(MapEvent::ZoomEnd, &state.map);
            }
        }
        Task::none()
    }
}

fn details_panel(project: &Project) -> Element<'_, Msg> {
    container(column![
        row![
            text("Project Details").size(18).width(Length::Fill),
            button("Open project page").on_press(ScreenMessage::ParentMessage(
                ParentMessage::OpenProject(project.id.clone())
            )),
            button("Close")
                .style(button::secondary)
                .on_press(msg(DashboardMessage::CloseDetails)),
        ]
        .spacing(10),
        badge(project.status, project.status_color()),
        text(report::project_details(project)),
    ]
    .spacing(10))
    .padding(16)
    .style(bordered_box)
    .width(Length::Fill)
    .into()
}

fn map_panel(state: &AppState) -> Element<'_, Msg> {
    let Some((width, height)) = state.map.viewport_size() else {
        return text("Loading map...").into();
    };
    let session = &state.session;
    let visible = session.visible();
    let markers: Vec<Marker> = visible
        .iter()
        .filter_map(|project| {
            let position = state.map.project_to_screen(project.coordinates)?;
            Some(Marker {
                id: project.id.clone(),
                position,
                color: project.status_color(),
                title: project.name.clone(),
                subtitle: format!("{} • {}", project.id, project.status),
                placement: session.tooltip_placement(&project.id),
            })
        })
        .collect();
    let selected = session
        .selected_project()
        .and_then(|selected| markers.iter().position(|m| m.id == selected.id));

    let controls = row![
        button("+").on_press(msg(DashboardMessage::Zoom(1.0))),
        button("-").on_press(msg(DashboardMessage::Zoom(-1.0))),
        button("←").on_press(msg(DashboardMessage::Pan(PAN_STEP, 0.0))),
        button("→").on_press(msg(DashboardMessage::Pan(-PAN_STEP, 0.0))),
        button("↑").on_press(msg(DashboardMessage::Pan(0.0, PAN_STEP))),
        button("↓").on_press(msg(DashboardMessage::Pan(0.0, -PAN_STEP))),
    ]
    .spacing(4);

    column![
        controls,
        canvas(MapCanvas {
            markers,
            selected,
            tooltip: state.config.tooltip_geometry(),
            on_select: |id| msg(DashboardMessage::SelectProject(id)),
        })
        .width(Length::Fixed(width as f32))
        .height(Length::Fixed(height as f32)),
    ]
    .spacing(8)
    .into()
}

fn project_grid(state: &AppState) -> Element<'_, Msg> {
    let session = &state.session;
    let per_row = usize::from(session.grid_columns());
    let compact = session.is_compact();
    let visible = session.visible();

    let mut grid = column![].spacing(16);
    for chunk in visible.chunks(per_row) {
        let mut cards = row![].spacing(16);
        for project in chunk {
            cards = cards.push(project_card(project, session.is_favorite(&project.id), compact));
        }
        for _ in chunk.len()..per_row {
            cards = cards.push(container(text("")).width(Length::FillPortion(1)));
        }
        grid = grid.push(cards);
    }
    grid.into()
}

fn project_card(project: &Project, favorite: bool, compact: bool) -> Element<'_, Msg> {
    let star = button(if favorite { "★" } else { "☆" })
        .style(button::text)
        .on_press(msg(DashboardMessage::ToggleFavorite(project.id.clone())));
    let percent = text(format!("{}%", project.progress))
        .size(12)
        .color(to_iced(progress_color(project.progress).to_rgb()));

    let mut body = column![
        text(project.name.as_str()).size(if compact { 14 } else { 18 }),
        text(project.location.as_str()).size(12),
    ]
    .spacing(4);
    if compact {
        body = body.push(percent);
    } else {
        body = body
            .push(row![progress_bar(0.0..=100.0, f32::from(project.progress)), percent].spacing(8))
            .push(text(project.category.label()).size(12));
    }

    container(column![
        row![
            badge(project.status, project.status_color()),
            text(project.id.as_str()).size(12).width(Length::Fill),
            star,
        ]
        .spacing(8),
        button(body)
            .style(button::text)
            .width(Length::Fill)
            .on_press(msg(DashboardMessage::SelectProject(project.id.clone()))),
    ])
    .padding(if compact { 8 } else { 16 })
    .style(bordered_box)
    .width(Length::FillPortion(1))
    .into()
}
