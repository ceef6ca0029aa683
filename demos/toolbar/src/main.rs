use iced::widget::{button, column, container, row, slider, text, toggler};
use iced::{Center, Element, Fill, Length};
use icy_responsive_list::{ButtonSize, ResponsiveList, Settings};

use std::time::Duration;

pub fn main() -> iced::Result {
    iced::application(Toolbar::new, Toolbar::update, Toolbar::view)
        .title("Responsive toolbar")
        .run()
}

const ACTIONS: [&str; 9] = [
    "New", "Open", "Save", "Undo", "Redo", "Cut", "Copy", "Paste", "Find",
];

struct Toolbar {
    settings: Settings,
    width: f32,
    debounce: bool,
    menu_open: bool,
    last_action: Option<&'static str>,
}

#[derive(Debug, Clone)]
enum Message {
    Action(&'static str),
    WidthChanged(f32),
    DebounceToggled(bool),
    MenuOpened,
    MenuClosed,
}

impl Toolbar {
    fn new() -> Self {
        // A settings file next to the binary overrides the defaults
        let settings = match Settings::load("toolbar.ron") {
            Ok(settings) => settings,
            Err(error) => {
                log::warn!("using default toolbar settings: {error}");

                Settings {
                    spacing: 4.0,
                    menu_button_size: ButtonSize::Medium,
                    close_on_content_click: true,
                    ..Settings::default()
                }
            }
        };

        Self {
            settings,
            width: 480.0,
            debounce: false,
            menu_open: false,
            last_action: None,
        }
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Action(action) => self.last_action = Some(action),
            Message::WidthChanged(width) => self.width = width,
            Message::DebounceToggled(debounce) => self.debounce = debounce,
            Message::MenuOpened => self.menu_open = true,
            Message::MenuClosed => self.menu_open = false,
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let actions: Vec<Element<'_, Message>> = ACTIONS
            .into_iter()
            .map(|action| button(action).on_press(Message::Action(action)).into())
            .collect();

        let debounce = if self.debounce {
            Duration::from_millis(200)
        } else {
            Duration::ZERO
        };

        let toolbar = ResponsiveList::with_children(actions)
            .id("toolbar")
            .with_settings(&self.settings)
            .resize_debounce(debounce)
            .on_open(Message::MenuOpened)
            .on_close(Message::MenuClosed);

        let controls = row![
            text("Width"),
            slider(80.0..=800.0, self.width, Message::WidthChanged).width(240),
            toggler(self.debounce)
                .label("Debounce resizes")
                .on_toggle(Message::DebounceToggled),
        ]
        .spacing(12)
        .align_y(Center);

        let status = text(format!(
            "Last action: {} | menu {}",
            self.last_action.unwrap_or("none"),
            if self.menu_open { "open" } else { "closed" },
        ));

        column![
            controls,
            container(toolbar)
                .width(Length::Fixed(self.width))
                .style(container::bordered_box),
            status,
        ]
        .spacing(20)
        .padding(20)
        .width(Fill)
        .into()
    }
}
