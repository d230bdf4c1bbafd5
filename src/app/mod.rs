// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced update loop.
//!
//! `App` owns the page scene, the slideshow timer and the controllers bound
//! to them. View messages are translated into page input; page output
//! (anchor jumps, revealed elements) is turned back into Iced tasks and
//! transition state.

mod message;
mod subscription;

pub use message::{Flags, Message};

use crate::application::effects::Viewport;
use crate::application::page::{Page, PageSettings};
use crate::application::port::{NodeId, PresentationTree};
use crate::config;
use crate::infrastructure::{build_from_manifest, IntervalTimer, Scene};
use crate::manifest::PageManifest;
use crate::ui::assets::Assets;
use crate::ui::design_tokens::sizing;
use crate::ui::landing::{self, ViewContext};
use crate::ui::layout::PageLayout;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

const APP_NAME: &str = "IcedShowcase";

/// Root Iced application state.
pub struct App {
    scene: Scene,
    timer: IntervalTimer,
    page: Page,
    layout: PageLayout,
    assets: Assets,
    viewport: Viewport,
    /// Start of each entrance transition, keyed by revealed element.
    revealed_at: HashMap<NodeId, Instant>,
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("nodes", &self.scene.len())
            .field("viewport", &self.viewport)
            .field("revealed", &self.revealed_at.len())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Loads the manifest named by `path`, falling back to the demo page.
///
/// Returns the manifest and the directory its media locators resolve
/// against.
fn load_manifest(path: Option<&Path>) -> (PageManifest, PathBuf) {
    let Some(path) = path else {
        return (PageManifest::demo(), PathBuf::from("."));
    };
    let root = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    match PageManifest::load_from_path(path) {
        Ok(manifest) => (manifest, root),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "manifest rejected, showing demo page");
            (PageManifest::demo(), root)
        }
    }
}

impl App {
    /// Loads config and manifest, builds the scene and attaches the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "config not loaded, using defaults");
        }
        if let Some(interval_ms) = flags.interval_ms {
            config.slideshow.interval_ms = Some(interval_ms);
        }
        if flags.no_autoplay {
            config.slideshow.autoplay = Some(false);
        }

        let (manifest, root) = load_manifest(flags.manifest_path.as_deref());
        let now = Instant::now();
        let mut scene = build_from_manifest(&manifest);
        let mut timer = IntervalTimer::new(now);
        let page = Page::attach(&mut scene, &mut timer, &PageSettings::from_config(&config));
        let assets = Assets::scan(&root, &scene);
        let layout = PageLayout::compute(&scene, WINDOW_DEFAULT_WIDTH);

        let mut app = App {
            scene,
            timer,
            page,
            layout,
            assets,
            viewport: Viewport {
                scroll_top: 0.0,
                height: WINDOW_DEFAULT_HEIGHT - sizing::NAV_HEIGHT,
            },
            revealed_at: HashMap::new(),
            now,
        };
        // Reveal whatever is visible before the first scroll.
        app.apply_scroll();

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.scene
            .query_all(".hero-title")
            .first()
            .and_then(|title| self.scene.element(*title))
            .map(|title| title.text_content().trim())
            .filter(|title| !title.is_empty())
            .map_or_else(|| APP_NAME.to_string(), str::to_string)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Landing(landing::Message::Clicked(node)) => {
                self.click_at(node, Instant::now())
            }
            Message::Landing(landing::Message::Scrolled {
                offset_y,
                viewport_height,
            }) => {
                self.viewport = Viewport {
                    scroll_top: offset_y,
                    height: viewport_height,
                };
                self.apply_scroll();
                Task::none()
            }
            Message::Key(key) => {
                self.page.key(&mut self.scene, key);
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                self.advance_clock(now);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.layout = PageLayout::compute(&self.scene, size.width);
                self.viewport.height = (size.height - sizing::NAV_HEIGHT).max(0.0);
                self.apply_scroll();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        landing::view(ViewContext {
            scene: &self.scene,
            layout: &self.layout,
            assets: &self.assets,
            revealed_at: &self.revealed_at,
            now: self.now,
        })
        .map(Message::Landing)
    }

    /// Dispatches a click received at `now`.
    ///
    /// The timer clock only moves on ticks, so it is brought up to the click
    /// first. Countdowns restarted by the click then run from `now`.
    fn click_at(&mut self, node: NodeId, now: Instant) -> Task<Message> {
        self.advance_clock(now);
        let target = self.page.click(&mut self.scene, &mut self.timer, node);
        target
            .and_then(|target| self.layout.relative_scroll_to(target, self.viewport.height))
            .map_or_else(Task::none, |y| {
                operation::snap_to(
                    Id::new(landing::SCROLLABLE_ID),
                    RelativeOffset { x: 0.0, y },
                )
            })
    }

    /// Moves the timer clock to `now` and delivers the fires that came due.
    fn advance_clock(&mut self, now: Instant) {
        for handle in self.timer.advance_to(now) {
            if !self.page.timer_fired(&mut self.scene, handle) {
                tracing::debug!(?handle, "unclaimed timer fire");
            }
        }
    }

    /// Runs scroll effects for the current viewport and starts the entrance
    /// transition of newly revealed elements.
    fn apply_scroll(&mut self) {
        let layout = &self.layout;
        let revealed = self
            .page
            .scrolled(&mut self.scene, self.viewport, |node| layout.bounds(node));
        let started = Instant::now();
        for node in revealed {
            self.revealed_at.insert(node, started);
        }
    }

    fn is_animating(&self) -> bool {
        let now = Instant::now();
        self.revealed_at
            .iter()
            .any(|(node, started)| landing::is_transitioning(&self.scene, *node, *started, now))
    }
}
