mod style;

use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

use iced::button::{self, Button};
use iced::canvas::event::{self, Event};
use iced::canvas::{Cache, Canvas, Cursor, Frame, Geometry, Path, Stroke};
use iced::slider::{self, Slider};
use iced::time;
use iced::{
    mouse, Align, Application, Clipboard, Color, Column, Command, Container, Element,
    HorizontalAlignment, Length, Point, Rectangle, Row, Settings, Subscription,
    VerticalAlignment,
};

use connected_dots::{Bounds, Field, Options, Rect, Rgba, Surface};

const OPTIONS_PATH: &str = "connected_dots.json";
const FRAME_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Clone, Debug)]
enum Message {
    Tick(Instant),
    ToggleRunning,
    Restart,
    DotCountChanged(i32),
    DotDistanceChanged(f32),
    PointerMoved(Point),
    PointerLeft,
    OptionsLoaded(Options),
}

#[derive(Default)]
struct Controls {
    run_button: button::State,
    restart_button: button::State,
    dot_count_slider: slider::State,
    dot_distance_slider: slider::State,
}

#[derive(Default)]
struct ConnectedDots {
    state: State,
    controls: Controls,
}

impl ConnectedDots {
    fn restart(&mut self) {
        let field = self.state.field.get_mut();
        field.stop();
        if let Err(error) = field.configure(self.state.pending.clone()) {
            eprintln!("Rejected options, keeping previous ones: {}", error);
            self.state.pending = field.options().clone();
        }
        let bounds = field.bounds();
        field.start(bounds, Instant::now());
        self.state.cache.clear();
    }
}

impl Application for ConnectedDots {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, Command<Message>) {
        (
            Self { ..Self::default() },
            Command::perform(Options::load(OPTIONS_PATH), |result| match result {
                Ok(options) => Message::OptionsLoaded(options),
                Err(error) => {
                    eprintln!("Using default options ({}): {}", OPTIONS_PATH, error);
                    Message::OptionsLoaded(Options::default())
                }
            }),
        )
    }

    fn title(&self) -> String {
        String::from("Connected Dots")
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.state.field.borrow().is_running() {
            time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Self::Message, _clipboard: &mut Clipboard) -> Command<Message> {
        match message {
            Message::Tick(now) => {
                self.state.field.get_mut().populate(now);
                // the next draw runs exactly one frame, however many ticks came in
                self.state.cache.clear();
            }
            Message::ToggleRunning => {
                let field = self.state.field.get_mut();
                if field.is_running() {
                    field.stop();
                } else {
                    field.resume(Instant::now());
                }
                self.state.cache.clear();
            }
            Message::Restart => self.restart(),
            Message::DotCountChanged(dot_count) => {
                self.state.pending.dot_count = dot_count.max(0) as usize;
            }
            Message::DotDistanceChanged(dot_distance) => {
                self.state.pending.dot_distance = dot_distance;
            }
            Message::PointerMoved(position) => {
                self.state
                    .field
                    .get_mut()
                    .on_pointer_move(connected_dots::Point::new(position.x, position.y));
            }
            Message::PointerLeft => {
                self.state.field.get_mut().on_pointer_leave();
            }
            Message::OptionsLoaded(options) => {
                self.state.pending = options;
                self.restart();
            }
        }
        Command::none()
    }

    fn view(&mut self) -> Element<Message> {
        let running = self.state.field.borrow().is_running();
        let pending = &self.state.pending;
        let widgets = &mut self.controls;

        let controls = Row::new()
            .spacing(20)
            .align_items(Align::Center)
            .push(labelled_button(
                &mut widgets.run_button,
                if running { "Stop" } else { "Start" },
                Message::ToggleRunning,
            ))
            .push(labelled_button(
                &mut widgets.restart_button,
                "Restart",
                Message::Restart,
            ))
            .push(labelled_slider(
                Slider::new(
                    &mut widgets.dot_count_slider,
                    10..=300,
                    pending.dot_count as i32,
                    Message::DotCountChanged,
                )
                .step(1)
                .width(Length::Units(200))
                .style(style::Slider),
                format!("Dots = {}", pending.dot_count),
            ))
            .push(labelled_slider(
                Slider::new(
                    &mut widgets.dot_distance_slider,
                    20.0..=250.0,
                    pending.dot_distance,
                    Message::DotDistanceChanged,
                )
                .step(1.0)
                .width(Length::Units(200))
                .style(style::Slider),
                format!("Distance = {:.0}", pending.dot_distance),
            ));

        let canvas = Canvas::new(&mut self.state)
            .width(Length::Fill)
            .height(Length::Fill);

        Container::new(
            Column::new()
                .spacing(10)
                .padding(10)
                .align_items(Align::Center)
                .push(canvas)
                .push(controls),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::Container)
        .into()
    }
}

fn labelled_button<'a>(
    state: &'a mut button::State,
    label: &str,
    message: Message,
) -> Button<'a, Message> {
    Button::new(state, iced::widget::Text::new(label))
        .on_press(message)
        .style(style::Button)
}

fn labelled_slider<'a>(
    slider: impl Into<Element<'a, Message>>,
    label: String,
) -> Row<'a, Message> {
    Row::new()
        .spacing(10)
        .align_items(Align::Center)
        .push(slider)
        .push(iced::widget::Text::new(label).size(16))
}

struct State {
    field: RefCell<Field>,
    /// Options applied on the next restart.
    pending: Options,
    last_frame_duration: Cell<Duration>,
    cache: Cache,
}

impl Default for State {
    fn default() -> Self {
        Self {
            field: RefCell::new(Field::new(Bounds::new(1024.0, 768.0))),
            pending: Options::default(),
            last_frame_duration: Cell::new(Duration::default()),
            cache: Cache::default(),
        }
    }
}

impl iced::canvas::Program<Message> for State {
    fn update(
        &mut self,
        event: Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (event::Status, Option<Message>) {
        match event {
            Event::Mouse(mouse::Event::CursorMoved { .. })
            | Event::Mouse(mouse::Event::CursorLeft)
            | Event::Mouse(mouse::Event::CursorEntered) => {
                let message = match cursor.position_in(&bounds) {
                    Some(position) => Message::PointerMoved(position),
                    None => Message::PointerLeft,
                };
                (event::Status::Ignored, Some(message))
            }
            _ => (event::Status::Ignored, None),
        }
    }

    fn draw(&self, bounds: Rectangle, _cursor: Cursor) -> Vec<Geometry> {
        let size = Bounds::new(bounds.width, bounds.height);

        let dots_geometry = self.cache.draw(bounds.size(), |frame| {
            let start = Instant::now();
            let mut field = self.field.borrow_mut();

            if field.bounds() != size {
                field.on_resize(size);
            }

            let background = Path::rectangle(Point::ORIGIN, frame.size());
            frame.fill(&background, style::BACKGROUND);

            field.on_frame(&mut FrameSurface(frame));

            self.last_frame_duration.set(start.elapsed());
        });

        let overlay = {
            let field = self.field.borrow();
            let mut frame = Frame::new(bounds.size());

            let text = iced::canvas::Text {
                color: Color::from_rgb(0.6, 0.6, 0.6),
                size: 14.0,
                position: Point::new(frame.width(), frame.height()),
                horizontal_alignment: HorizontalAlignment::Right,
                vertical_alignment: VerticalAlignment::Bottom,
                ..Default::default()
            };

            frame.fill_text(iced::canvas::Text {
                content: format! {
                    "Dots: {}/{}\nFrame duration: {:?}",
                    field.populated(),
                    field.capacity(),
                    self.last_frame_duration.get(),
                },
                ..text
            });

            frame.into_geometry()
        };

        vec![dots_geometry, overlay]
    }
}

/// Draws field output onto an iced canvas frame.
struct FrameSurface<'a>(&'a mut Frame);

impl Surface for FrameSurface<'_> {
    fn draw_line(
        &mut self,
        from: connected_dots::Point,
        to: connected_dots::Point,
        color: Rgba,
        width: f32,
    ) {
        let line = Path::line(Point::new(from.x, from.y), Point::new(to.x, to.y));
        self.0.stroke(
            &line,
            Stroke {
                color: to_color(color),
                width,
                ..Stroke::default()
            },
        );
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Rgba) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let center = rect.center();
        let circle = Path::circle(
            Point::new(center.x, center.y),
            rect.width.min(rect.height) / 2.0,
        );
        self.0.fill(&circle, to_color(color));
    }
}

fn to_color(color: Rgba) -> Color {
    Color::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a as f32 / 255.0,
    )
}

fn main() -> iced::Result {
    ConnectedDots::run(Settings {
        antialiasing: true,
        ..Settings::default()
    })
}
