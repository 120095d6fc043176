//! The dashboard window.
//!
//! Owns the Iced application loop and wires together:
//! - the grid of icon / label cells built from the widget list
//! - a 1-second timer driving the stats publisher
//! - window open events (needed to start a native drag)
//! - a stylesheet watcher (live theme reload; the layout itself is fixed)

use dash_config::{default_theme_path, load_theme, load_widgets, watch_stylesheet, GridConfig};
use dash_core::{event::Message as AppMessage, DashError, Result};
use dash_renderer::{DashboardState, StatsTask};
use dash_system::SysinfoMetrics;
use dash_theme::Theme;
use dash_widgets::CellView;
use futures::channel::mpsc::Sender;
use iced::{
    widget::{container, mouse_area, Column, Row},
    window, Element, Length, Subscription, Task,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

const TITLE: &str = "RiceDashboard";

// ── Entry point ───────────────────────────────────────────────────────────────

/// Load the widget list at `widgets_path` and open the dashboard.
///
/// A missing or malformed widget list is fatal; a broken stylesheet only
/// costs the custom look.
pub fn run(widgets_path: PathBuf) -> Result<()> {
    let specs = load_widgets(&widgets_path)?;
    let state = DashboardState::build(specs, GridConfig::default());
    let theme = read_theme();

    let geometry = &state.geometry;
    info!(
        "Grid {}x{} → window {}x{}",
        geometry.columns, geometry.rows, geometry.window_width, geometry.window_height
    );

    let size = iced::Size::new(geometry.window_width as f32, geometry.window_height as f32);

    iced::application(
        move || Dashboard::new(state.clone(), theme.clone()),
        Dashboard::update,
        Dashboard::view,
    )
    .title(TITLE)
    .subscription(Dashboard::subscription)
    .style(Dashboard::style)
    .window(window::Settings {
        size,
        resizable:   false,
        decorations: false,
        transparent: true,
        level:       window::Level::AlwaysOnTop,
        ..Default::default()
    })
    .run()
    .map_err(|e| DashError::Window(e.to_string()))
}

// ── Message ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    /// Propagate a core event-bus message.
    App(AppMessage),
    /// The dashboard window has been created.
    WindowOpened(window::Id),
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Dashboard {
    state:  DashboardState,
    stats:  StatsTask<SysinfoMetrics>,
    theme:  Theme,
    cells:  CellView,
    window: Option<window::Id>,
}

impl Dashboard {
    fn new(mut state: DashboardState, theme: Theme) -> Self {
        let mut stats = StatsTask::new(SysinfoMetrics::new());
        // Fill the labels right away instead of waiting for the first tick.
        stats.tick(&mut state);

        Self {
            state,
            stats,
            theme,
            cells: CellView::new(),
            window: None,
        }
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowOpened(id) => {
                self.window = Some(id);
                Task::none()
            }
            Message::App(msg) => self.handle_app(msg),
        }
    }

    fn handle_app(&mut self, msg: AppMessage) -> Task<Message> {
        match msg {
            AppMessage::Tick => {
                self.stats.tick(&mut self.state);
                if let Some(sample) = self.stats.last_sample() {
                    debug!(?sample, "stats refreshed");
                }
            }
            AppMessage::Launch(index) => {
                if let Some(icon) = self.state.widgets.get(index).and_then(|w| w.as_icon()) {
                    if let Some(pid) = dash_system::launch(&icon.argv) {
                        info!("Icon #{index} launched pid {pid}");
                    }
                }
            }
            AppMessage::DragStart => {
                if let Some(id) = self.window {
                    return window::drag(id);
                }
            }
            AppMessage::ThemeReloaded => {
                info!("Stylesheet changed; reloading");
                self.theme = read_theme();
            }
        }
        Task::none()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let spacing = self.state.grid.spacing as f32;

        let rows: Vec<Element<'_, AppMessage>> = (0..self.state.geometry.rows)
            .map(|r| {
                let cells = self
                    .state
                    .row(r)
                    .iter()
                    .map(|w| self.cells.view(w, &self.theme))
                    .collect();
                Row::from_vec(cells).spacing(spacing).into()
            })
            .collect();

        let grid = container(Column::from_vec(rows).spacing(spacing))
            .padding(self.state.grid.padding as f32)
            .width(Length::Fill)
            .height(Length::Fill);

        // Presses not captured by an icon move the window.
        let element: Element<'_, AppMessage> = mouse_area(grid)
            .on_press(AppMessage::DragStart)
            .into();

        element.map(Message::App)
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let tick = iced::time::every(self.stats.interval()).map(|_| Message::App(AppMessage::Tick));

        Subscription::batch([
            tick,
            window::open_events().map(Message::WindowOpened),
            Subscription::run(theme_stream),
        ])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.window_background().to_iced(),
            text_color:       self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches the stylesheet for writes and sends `ThemeReloaded`.
fn theme_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let mut rx = watch_stylesheet(default_theme_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::App(AppMessage::ThemeReloaded));
        }

        // Watcher gave up (e.g. no stylesheet directory); stall rather than end.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_theme() -> Theme {
    match load_theme(default_theme_path()) {
        Ok(cfg) => Theme::from_config(&cfg),
        Err(e) => {
            warn!("{e}; using the default theme");
            Theme::default()
        }
    }
}
