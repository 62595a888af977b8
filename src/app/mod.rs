// SPDX-License-Identifier: MPL-2.0
//! Demo application: a control panel that spawns, updates and removes toasts.
//!
//! The `App` struct owns the toast board and the option set new toasts are
//! created with. Options start from the config file (overridden by CLI
//! flags) and can be saved back as defaults.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, ToastDefaults};
use crate::toasts::{self, Board, ToastId, Update};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

const WELCOME_TEXT: &str = "Click a toast to dismiss it";

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    board: Board,
    /// Options the next toast is created with.
    options: ToastDefaults,
    draft: String,
    theme_mode: ThemeMode,
    last_toast: Option<ToastId>,
    shown: usize,
    /// Incremented by each toast's completion callback.
    closed: Arc<AtomicUsize>,
    config_path: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            board: Board::new(),
            options: ToastDefaults::default(),
            draft: String::new(),
            theme_mode: ThemeMode::System,
            last_toast: None,
            shown: 0,
            closed: Arc::new(AtomicUsize::new(0)),
            config_path: None,
        }
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, applies CLI overrides and greets with a first toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match &flags.config_path {
            Some(path) if path.exists() => config::load_from_path(path),
            Some(_) => Ok(config::Config::default()),
            None => config::load(),
        };
        let config = loaded.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load config, using defaults");
            config::Config::default()
        });

        let mut app = App {
            options: config.toast,
            theme_mode: flags.theme_mode.unwrap_or(config.theme_mode),
            config_path: flags.config_path.clone(),
            ..Self::default()
        };
        apply_flags(&mut app.options, &flags);
        tracing::info!(
            position = %app.options.position,
            auto_close_ms = app.options.auto_close_ms,
            "starting"
        );

        app.show(WELCOME_TEXT.to_string(), Instant::now());
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Iced Toast ({} visible)", self.board.len())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(&self.board)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Toast(toasts::Message::Clicked(id)) => {
                self.board.click(id, now);
            }
            Message::Toast(toasts::Message::Hovered(id, hovered)) => {
                self.board.hover(id, hovered, now);
            }
            Message::Tick(instant) => {
                for id in self.board.tick(instant) {
                    tracing::trace!(?id, "toast detached");
                    if self.last_toast == Some(id) {
                        self.last_toast = None;
                    }
                }
            }
            Message::DraftChanged(draft) => self.draft = draft,
            Message::PositionSelected(position) => self.options.position = position,
            Message::AutoCloseChanged(seconds) => {
                self.options.auto_close_ms = seconds_to_millis(seconds);
            }
            Message::ShowProgressToggled(value) => self.options.show_progress = value,
            Message::CanCloseToggled(value) => self.options.can_close = value,
            Message::PauseOnHoverToggled(value) => self.options.pause_on_hover = value,
            Message::Show => {
                let text = self.draft_or_placeholder();
                self.show(text, now);
                self.draft.clear();
            }
            Message::UpdateLast => {
                if let Some(id) = self.last_toast {
                    let mut update = self.options_update();
                    if !self.draft.trim().is_empty() {
                        update = update.text(self.draft.trim());
                        self.draft.clear();
                    }
                    if !self.board.update(id, update, now) {
                        self.last_toast = None;
                    }
                }
            }
            Message::RemoveLast => {
                if let Some(id) = self.last_toast.take() {
                    self.board.remove(id, now);
                }
            }
            Message::ClearAll => {
                self.board.clear(now);
                self.last_toast = None;
            }
            Message::SaveDefaults => self.save_defaults(now),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            board: &self.board,
            options: &self.options,
            draft: &self.draft,
            has_last_toast: self.last_toast.is_some(),
            shown: self.shown,
            closed: self.closed.load(Ordering::Relaxed),
        })
    }

    fn show(&mut self, text: String, now: Instant) -> ToastId {
        let closed = Arc::clone(&self.closed);
        let options = self.options.options(text).on_close(move |id| {
            closed.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(?id, "toast closed");
        });
        let id = self.board.show(options, now);
        self.last_toast = Some(id);
        self.shown += 1;
        id
    }

    /// Every current option as a partial update (text excluded).
    fn options_update(&self) -> Update {
        Update::new()
            .position(self.options.position)
            .auto_close(self.options.auto_close())
            .show_progress(self.options.show_progress)
            .can_close(self.options.can_close)
            .pause_on_hover(self.options.pause_on_hover)
    }

    fn draft_or_placeholder(&self) -> String {
        let draft = self.draft.trim();
        if draft.is_empty() {
            format!("Toast #{}", self.shown + 1)
        } else {
            draft.to_string()
        }
    }

    fn save_defaults(&mut self, now: Instant) {
        let config = config::Config {
            theme_mode: self.theme_mode,
            toast: self.options.clone(),
        };
        let result = match &self.config_path {
            Some(path) => config::save_to_path(&config, path),
            None => config::save(&config),
        };
        let text = match result {
            Ok(()) => {
                tracing::info!("defaults saved");
                "Defaults saved".to_string()
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save defaults");
                format!("Could not save defaults: {err}")
            }
        };
        self.show(text, now);
    }
}

/// Overlays CLI flags on the options loaded from config.
fn apply_flags(options: &mut ToastDefaults, flags: &Flags) {
    if let Some(position) = flags.position {
        options.position = position;
    }
    if let Some(ms) = flags.auto_close_ms {
        options.auto_close_ms = config::defaults::clamp_auto_close_ms(ms);
    }
    if flags.no_progress {
        options.show_progress = false;
    }
    if flags.no_close {
        options.can_close = false;
    }
    if flags.pause_on_hover {
        options.pause_on_hover = true;
    }
}

fn seconds_to_millis(seconds: f32) -> u64 {
    if seconds <= 0.0 {
        0
    } else {
        config::defaults::clamp_auto_close_ms((seconds * 1000.0).round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::{AutoClose, Position, TRANSITION};
    use std::time::Duration;
    use tempfile::tempdir;

    fn last(app: &App) -> &crate::toasts::Toast {
        app.board
            .get(app.last_toast.expect("a toast was shown"))
            .expect("last toast is attached")
    }

    #[test]
    fn show_uses_draft_and_current_options() {
        let mut app = App::default();
        let _ = app.update(Message::DraftChanged("Hello".into()));
        let _ = app.update(Message::PositionSelected(Position::BottomLeft));
        let _ = app.update(Message::CanCloseToggled(false));
        let _ = app.update(Message::Show);

        let toast = last(&app);
        assert_eq!(toast.text(), "Hello");
        assert_eq!(toast.position(), Position::BottomLeft);
        assert!(!toast.can_close());
        assert!(app.draft.is_empty());
        assert_eq!(app.shown, 1);
    }

    #[test]
    fn empty_draft_gets_a_numbered_placeholder() {
        let mut app = App::default();
        let _ = app.update(Message::Show);
        assert_eq!(last(&app).text(), "Toast #1");
    }

    #[test]
    fn update_last_moves_the_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Show);
        let _ = app.update(Message::PositionSelected(Position::TopCenter));
        let _ = app.update(Message::AutoCloseChanged(0.0));
        let _ = app.update(Message::UpdateLast);

        let toast = last(&app);
        assert_eq!(toast.position(), Position::TopCenter);
        assert_eq!(toast.auto_close(), AutoClose::Disabled);
        assert!(app.board.container(Position::TopRight).is_none());
    }

    #[test]
    fn remove_last_runs_the_close_callback() {
        let mut app = App::default();
        let _ = app.update(Message::Show);
        let id = app.last_toast.unwrap();
        let _ = app.update(Message::RemoveLast);

        assert!(app.last_toast.is_none());
        assert!(app.board.get(id).unwrap().is_leaving());
        assert_eq!(app.closed.load(Ordering::Relaxed), 1);

        let _ = app.update(Message::Tick(Instant::now() + TRANSITION));
        assert!(app.board.is_empty());
    }

    #[test]
    fn clicking_a_closable_toast_dismisses_it() {
        let mut app = App::default();
        let _ = app.update(Message::Show);
        let id = app.last_toast.unwrap();

        let _ = app.update(Message::Toast(toasts::Message::Clicked(id)));
        assert!(app.board.get(id).unwrap().is_leaving());
    }

    #[test]
    fn clear_all_dismisses_every_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Show);
        let _ = app.update(Message::PositionSelected(Position::BottomRight));
        let _ = app.update(Message::Show);

        let _ = app.update(Message::ClearAll);
        assert!(app.board.toasts().all(crate::toasts::Toast::is_leaving));
        assert_eq!(app.closed.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn auto_close_slider_clamps_and_disables() {
        assert_eq!(seconds_to_millis(0.0), 0);
        assert_eq!(seconds_to_millis(2.5), 2500);
        assert_eq!(seconds_to_millis(0.1), config::defaults::MIN_AUTO_CLOSE_MS);
    }

    #[test]
    fn flags_override_config_options() {
        let mut options = ToastDefaults::default();
        let flags = Flags {
            position: Some(Position::BottomCenter),
            auto_close_ms: Some(0),
            no_progress: true,
            no_close: true,
            pause_on_hover: true,
            ..Flags::default()
        };
        apply_flags(&mut options, &flags);

        assert_eq!(options.position, Position::BottomCenter);
        assert_eq!(options.auto_close(), AutoClose::Disabled);
        assert!(!options.show_progress);
        assert!(!options.can_close);
        assert!(options.pause_on_hover);
    }

    #[test]
    fn save_defaults_writes_config_and_confirms() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        let mut app = App {
            config_path: Some(path.clone()),
            ..App::default()
        };
        let _ = app.update(Message::PositionSelected(Position::TopLeft));
        let _ = app.update(Message::SaveDefaults);

        let saved = config::load_from_path(&path).expect("config was written");
        assert_eq!(saved.toast.position, Position::TopLeft);
        assert_eq!(last(&app).text(), "Defaults saved");
    }

    #[test]
    fn new_applies_flags_and_shows_welcome() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_path: Some(temp_dir.path().join("missing.toml")),
            position: Some(Position::BottomLeft),
            theme_mode: Some(ThemeMode::Light),
            ..Flags::default()
        };
        let (app, _) = App::new(flags);

        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(last(&app).text(), WELCOME_TEXT);
        assert_eq!(last(&app).position(), Position::BottomLeft);
    }

    #[test]
    fn tick_forgets_detached_last_toast() {
        let mut app = App::default();
        let _ = app.update(Message::AutoCloseChanged(1.0));
        let _ = app.update(Message::Show);
        let start = Instant::now();

        let _ = app.update(Message::Tick(start + Duration::from_secs(2)));
        let _ = app.update(Message::Tick(start + Duration::from_secs(2) + TRANSITION));

        assert!(app.last_toast.is_none());
        assert!(app.board.is_empty());
        assert!(app.title().contains("0 visible"));
    }
}
