use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.08, 0.07, 0.07),
                text: Color::from_rgb(0.96, 0.94, 0.92),
                primary: Color::from_rgb(0.85, 0.55, 0.30),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.99, 0.97, 0.94),
                text: Color::from_rgb(0.15, 0.10, 0.08),
                primary: Color::from_rgb(0.72, 0.40, 0.16),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

/// Flat list row that only shows a background while hovered or pressed.
pub fn result_row_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();

    let highlight = |alpha: f32| {
        Some(Background::Color(Color {
            a: alpha,
            ..palette.primary
        }))
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => highlight(0.12),
        button::Status::Pressed => highlight(0.24),
    };

    button::Style {
        background,
        text_color: palette.text,
        border: Border {
            color: Color {
                a: 0.2,
                ..palette.primary
            },
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap: matches!(status, button::Status::Pressed),
    }
}
