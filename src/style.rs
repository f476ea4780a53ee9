use iced::{button, container, slider, Background, Color, Vector};

pub const BACKGROUND: Color = Color {
    r: 0.07,
    g: 0.08,
    b: 0.11,
    a: 1.0,
};

const SURFACE: Color = Color {
    r: 0.14,
    g: 0.16,
    b: 0.21,
    a: 1.0,
};

const ACCENT: Color = Color {
    r: 0.55,
    g: 0.62,
    b: 0.78,
    a: 1.0,
};

const TEXT: Color = Color {
    r: 0.85,
    g: 0.86,
    b: 0.9,
    a: 1.0,
};

pub struct Container;

impl container::StyleSheet for Container {
    fn style(&self) -> container::Style {
        container::Style {
            background: Some(Background::Color(BACKGROUND)),
            text_color: Some(TEXT),
            ..container::Style::default()
        }
    }
}

pub struct Button;

impl button::StyleSheet for Button {
    fn active(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(SURFACE)),
            border_radius: 3.0,
            text_color: TEXT,
            ..button::Style::default()
        }
    }

    fn hovered(&self) -> button::Style {
        button::Style {
            background: Some(Background::Color(ACCENT)),
            text_color: BACKGROUND,
            ..self.active()
        }
    }

    fn pressed(&self) -> button::Style {
        button::Style {
            shadow_offset: Vector::new(0.0, 1.0),
            ..self.hovered()
        }
    }
}

pub struct Slider;

impl slider::StyleSheet for Slider {
    fn active(&self) -> slider::Style {
        slider::Style {
            rail_colors: (ACCENT, Color { a: 0.1, ..ACCENT }),
            handle: slider::Handle {
                shape: slider::HandleShape::Circle { radius: 7.0 },
                color: SURFACE,
                border_color: ACCENT,
                border_width: 1.0,
            },
        }
    }

    fn hovered(&self) -> slider::Style {
        let active = self.active();

        slider::Style {
            handle: slider::Handle {
                color: ACCENT,
                ..active.handle
            },
            ..active
        }
    }

    fn dragging(&self) -> slider::Style {
        let active = self.active();

        slider::Style {
            handle: slider::Handle {
                color: TEXT,
                ..active.handle
            },
            ..active
        }
    }
}
