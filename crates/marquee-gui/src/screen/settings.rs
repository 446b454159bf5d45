//! Settings screen: TMDB credentials, carousel timing, appearance.

use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use marquee_core::config::{AppConfig, ThemeMode};

use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Settings screen state. Inputs are kept as raw strings until Save.
pub struct Settings {
    pub api_key_input: String,
    pub language_input: String,
    pub auto_advance_input: String,
    pub page_size_input: String,
    pub selected_mode: ThemeMode,
}

/// Messages handled by the Settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    ApiKeyChanged(String),
    LanguageChanged(String),
    AutoAdvanceChanged(String),
    PageSizeChanged(String),
    ModeChanged(ThemeMode),
    Save,
}

impl Settings {
    /// Initialize form state from the current config.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_key_input: config.tmdb.api_key.clone().unwrap_or_default(),
            language_input: config.tmdb.language.clone(),
            auto_advance_input: config.general.auto_advance_secs.to_string(),
            page_size_input: config.general.page_size.to_string(),
            selected_mode: config.appearance.mode,
        }
    }

    pub fn update(&mut self, message: Message, config: &mut AppConfig) -> Action {
        match message {
            Message::ApiKeyChanged(value) => {
                self.api_key_input = value;
                Action::None
            }
            Message::LanguageChanged(value) => {
                self.language_input = value;
                Action::None
            }
            Message::AutoAdvanceChanged(value) => {
                self.auto_advance_input = value;
                Action::None
            }
            Message::PageSizeChanged(value) => {
                self.page_size_input = value;
                Action::None
            }
            Message::ModeChanged(mode) => {
                self.selected_mode = mode;
                config.appearance.mode = mode;
                if let Err(e) = config.save() {
                    tracing::warn!("Failed to save config: {e}");
                }
                Action::None
            }
            Message::Save => {
                let key = self.api_key_input.trim();
                config.tmdb.api_key = (!key.is_empty()).then(|| key.to_string());

                let language = self.language_input.trim();
                if !language.is_empty() {
                    config.tmdb.language = language.to_string();
                }

                // Unparseable numbers keep their previous values.
                if let Ok(secs) = self.auto_advance_input.trim().parse() {
                    config.general.auto_advance_secs = secs;
                }
                if let Ok(size) = self.page_size_input.trim().parse::<usize>() {
                    config.general.page_size = size.max(1);
                }

                self.auto_advance_input = config.general.auto_advance_secs.to_string();
                self.page_size_input = config.general.page_size.to_string();

                match config.save() {
                    Ok(()) => Action::SetStatus("Settings saved".into()),
                    Err(e) => Action::SetStatus(format!("Error saving settings: {e}")),
                }
            }
        }
    }

    pub fn view<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let tmdb_section = container(
            column![
                self.section_title(cs, "TMDB"),
                self.form_row(
                    cs,
                    "API key",
                    text_input("TMDB API key (v3)", &self.api_key_input)
                        .on_input(Message::ApiKeyChanged)
                        .secure(true)
                        .size(style::TEXT_SM)
                        .width(Length::Fixed(style::INPUT_WIDTH))
                        .style(theme::text_input_style(cs))
                        .into(),
                ),
                self.form_row(
                    cs,
                    "Language",
                    text_input("en-US", &self.language_input)
                        .on_input(Message::LanguageChanged)
                        .size(style::TEXT_SM)
                        .width(Length::Fixed(style::INPUT_WIDTH))
                        .style(theme::text_input_style(cs))
                        .into(),
                ),
                text("The TMDB_API_KEY environment variable overrides the stored key.")
                    .size(style::TEXT_XS)
                    .color(cs.outline)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_MD),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_XL)
        .width(Length::Fill);

        let carousel_section = container(
            column![
                self.section_title(cs, "Carousel"),
                self.form_row(
                    cs,
                    "Auto-advance (seconds)",
                    text_input("8", &self.auto_advance_input)
                        .on_input(Message::AutoAdvanceChanged)
                        .size(style::TEXT_SM)
                        .width(Length::Fixed(style::INPUT_WIDTH))
                        .style(theme::text_input_style(cs))
                        .into(),
                ),
                self.form_row(
                    cs,
                    "Cards per page",
                    text_input("6", &self.page_size_input)
                        .on_input(Message::PageSizeChanged)
                        .size(style::TEXT_SM)
                        .width(Length::Fixed(style::INPUT_WIDTH))
                        .style(theme::text_input_style(cs))
                        .into(),
                ),
                text("Set auto-advance to 0 to only advance on click.")
                    .size(style::TEXT_XS)
                    .color(cs.outline)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_MD),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_XL)
        .width(Length::Fill);

        let appearance_section = container(
            column![
                self.section_title(cs, "Appearance"),
                self.form_row(
                    cs,
                    "Mode",
                    pick_list(ThemeMode::ALL, Some(self.selected_mode), Message::ModeChanged)
                        .text_size(style::TEXT_SM)
                        .width(Length::Fixed(style::INPUT_WIDTH))
                        .style(theme::pick_list_style(cs))
                        .menu_style(theme::pick_list_menu_style(cs))
                        .into(),
                ),
            ]
            .spacing(style::SPACE_MD),
        )
        .style(theme::card(cs))
        .padding(style::SPACE_XL)
        .width(Length::Fill);

        let footer = row![
            text(format!("Config: {}", AppConfig::config_path().display()))
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
            iced::widget::Space::new().width(Length::Fill),
            button(text("Save").size(style::TEXT_SM))
                .padding([style::SPACE_SM, style::SPACE_XL])
                .on_press(Message::Save)
                .style(theme::primary_button(cs)),
        ]
        .align_y(Alignment::Center);

        let content = column![
            text("Settings")
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_TIGHT),
            tmdb_section,
            carousel_section,
            appearance_section,
            footer,
        ]
        .spacing(style::SPACE_XL)
        .padding(style::SPACE_XL)
        .max_width(760.0);

        widgets::styled_scrollable(content, cs)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn section_title<'a>(&self, cs: &ColorScheme, label: &'a str) -> Element<'a, Message> {
        text(label)
            .size(style::TEXT_LG)
            .font(style::FONT_HEADING)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_TIGHT)
            .into()
    }

    /// `[ label (fixed) | control ]` with consistent size and alignment.
    fn form_row<'a>(
        &self,
        cs: &ColorScheme,
        label: &'a str,
        control: Element<'a, Message>,
    ) -> Element<'a, Message> {
        row![
            text(label)
                .size(style::TEXT_SM)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_NORMAL)
                .width(Length::Fixed(style::INPUT_LABEL_WIDTH)),
            control,
        ]
        .align_y(Alignment::Center)
        .spacing(style::SPACE_MD)
        .into()
    }
}
