use iced::widget::canvas::{self, Action, Event, Frame, Geometry, Path, Stroke};
use iced::{Rectangle, Renderer, Size, Theme, mouse};

use crate::core::model::Point;
use crate::core::placement::{Direction, Placement, TooltipGeometry, marker_at};
use crate::gui::widgets::to_iced;

const MARKER_RADIUS: f32 = 12.0;

#[derive(Debug, Clone)]
pub struct Marker {
    pub id: String,
    pub position: Point,
    pub color: crate::core::Color,
    pub title: String,
    pub subtitle: String,
    pub placement: Placement,
}

/// Markers drawn over a plain background.
///
/// Hovering a marker shows its tooltip, clicking it publishes `on_select`.
/// With nothing hovered the selected marker keeps its tooltip.
#[derive(Debug, Clone)]
pub struct MapCanvas<Message> {
    pub markers: Vec<Marker>,
    pub selected: Option<usize>,
    pub tooltip: TooltipGeometry,
    pub on_select: fn(String) -> Message,
}

#[derive(Debug, Default)]
pub struct MapInteraction {
    hovered: Option<usize>,
}

impl<Message> MapCanvas<Message> {
    fn marker_under(&self, bounds: Rectangle, cursor: mouse::Cursor) -> Option<usize> {
        let position = cursor.position_in(bounds)?;
        let positions: Vec<Point> = self.markers.iter().map(|m| m.position).collect();
        marker_at(
            &positions,
            Point::new(f64::from(position.x), f64::from(position.y)),
            f64::from(MARKER_RADIUS),
        )
    }
}

fn iced_point(point: Point) -> iced::Point {
    iced::Point::new(point.x as f32, point.y as f32)
}

/// Top-left corner of a tooltip box anchored to `marker`.
fn tooltip_origin(marker: Point, placement: &Placement, size: Size) -> iced::Point {
    let anchor = iced_point(Point::new(
        marker.x + placement.offset.x,
        marker.y + placement.offset.y,
    ));
    match placement.direction {
        Direction::Top => iced::Point::new(anchor.x - size.width / 2.0, anchor.y - size.height),
        Direction::Bottom => iced::Point::new(anchor.x - size.width / 2.0, anchor.y),
        Direction::Left => iced::Point::new(anchor.x - size.width, anchor.y - size.height / 2.0),
        Direction::Right => iced::Point::new(anchor.x, anchor.y - size.height / 2.0),
    }
}

impl<Message> canvas::Program<Message> for MapCanvas<Message> {
    type State = MapInteraction;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let hovered = self.marker_under(bounds, cursor);
                if hovered != state.hovered {
                    state.hovered = hovered;
                    return Some(Action::request_redraw());
                }
                None
            }
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let marker = self
                    .marker_under(bounds, cursor)
                    .and_then(|i| self.markers.get(i))?;
                tracing::debug!(id = %marker.id, "marker clicked");
                Some(Action::publish((self.on_select)(marker.id.clone())).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme.extended_palette();
        frame.fill_rectangle(iced::Point::ORIGIN, bounds.size(), palette.background.weak.color);

        for marker in &self.markers {
            let dot = Path::circle(iced_point(marker.position), MARKER_RADIUS);
            frame.fill(&dot, to_iced(marker.color));
            frame.stroke(
                &dot,
                Stroke::default()
                    .with_color(iced::Color::WHITE)
                    .with_width(3.0),
            );
        }

        let shown = state.hovered.or(self.selected);
        if let Some(marker) = shown.and_then(|i| self.markers.get(i)) {
            let size = Size::new(self.tooltip.width as f32, self.tooltip.height as f32);
            let origin = tooltip_origin(marker.position, &marker.placement, size);
            frame.fill_rectangle(origin, size, palette.background.base.color);
            frame.fill_text(canvas::Text {
                content: marker.title.clone(),
                position: iced::Point::new(origin.x + 8.0, origin.y + 8.0),
                color: palette.background.base.text,
                size: 14.0.into(),
                ..canvas::Text::default()
            });
            frame.fill_text(canvas::Text {
                content: marker.subtitle.clone(),
                position: iced::Point::new(origin.x + 8.0, origin.y + 30.0),
                color: palette.background.strong.text,
                size: 12.0.into(),
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.hovered.is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
