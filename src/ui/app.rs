//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::frame::{FRAME_WIDTH, SCROLL_STEP};
use crate::consts::cli_consts::{
    ACTIVITY_PANEL_MIN_WIDTH, MAX_ACTIVITY_LOGS, SPLASH_DURATION_SECS, UI_POLL_INTERVAL_MS,
};
use crate::events::Event as CardEvent;
use crate::ui::activity::render_activity_panel;
use crate::ui::auth_card::{AuthCard, AuthScreen, FadeTimings, handle_key};
use crate::ui::phone_frame::PhoneFrame;
use crate::ui::pointer::{PointerBus, PointerDown};
use crate::ui::splash::render_splash;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::{Frame, Terminal, backend::Backend};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub timings: FadeTimings,
    pub show_activity: bool,
    pub skip_splash: bool,
}

impl UIConfig {
    pub fn new(
        with_background_color: bool,
        timings: FadeTimings,
        show_activity: bool,
        skip_splash: bool,
    ) -> Self {
        Self {
            with_background_color,
            timings,
            show_activity,
            skip_splash,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The phone-framed login / sign-up card.
    Auth(Box<AuthCard>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Document-level mouse-down listeners.
    pointer_bus: PointerBus,

    /// Rows scrolled inside the phone viewport.
    scroll: u16,

    /// Largest scroll the last render allowed.
    max_scroll: u16,

    /// Recent card events, oldest first.
    activity: VecDeque<CardEvent>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(ui_config: UIConfig) -> Self {
        let mut app = Self {
            current_screen: Screen::Splash,
            pointer_bus: PointerBus::new(),
            scroll: 0,
            max_scroll: 0,
            activity: VecDeque::with_capacity(MAX_ACTIVITY_LOGS),
            ui_config,
        };
        if app.ui_config.skip_splash {
            app.show_auth();
        }
        app
    }

    /// Leaves the splash screen and mounts the card.
    pub fn show_auth(&mut self) {
        if let Screen::Splash = self.current_screen {
            let card = AuthCard::mount(&self.pointer_bus, self.ui_config.timings);
            self.current_screen = Screen::Auth(Box::new(card));
        }
    }

    /// Unmounts the card and mounts a fresh one.
    pub fn remount(&mut self) {
        // The old card must be gone before the new one subscribes.
        self.current_screen = Screen::Splash;
        self.scroll = 0;
        self.show_auth();
        self.push_activity(CardEvent::lifecycle("Remounted"));
    }

    /// Applies finished timers and collects card events.
    pub fn tick(&mut self) {
        let drained = match &mut self.current_screen {
            Screen::Auth(card) => {
                card.poll();
                card.drain_events()
            }
            Screen::Splash => Vec::new(),
        };
        for event in drained {
            self.push_activity(event);
        }
    }

    fn push_activity(&mut self, event: CardEvent) {
        if self.activity.len() >= MAX_ACTIVITY_LOGS {
            self.activity.pop_front();
        }
        self.activity.push_back(event);
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll = next as u16;
    }

    /// Handles one terminal event. Returns true when the app should exit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => {
                self.handle_mouse_event(mouse);
                false
            }
            _ => false,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        // Skip events that are not KeyEventKind::Press
        if key.kind != KeyEventKind::Press {
            return false;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return true;
        }

        if let Screen::Splash = self.current_screen {
            if key.code == KeyCode::Esc {
                return true;
            }
            // Any other key press will skip the splash screen
            self.show_auth();
            return false;
        }

        match key.code {
            KeyCode::Char('r') if ctrl => self.remount(),
            KeyCode::PageUp => self.scroll_by(-i32::from(SCROLL_STEP)),
            KeyCode::PageDown => self.scroll_by(i32::from(SCROLL_STEP)),
            code => {
                let Screen::Auth(card) = &mut self.current_screen else {
                    return false;
                };
                if code == KeyCode::Esc {
                    if !card.is_dropdown_open() {
                        return true;
                    }
                    card.close_dropdown();
                } else {
                    handle_key(card, key);
                }
            }
        }
        false
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Document listeners see the press before the control does.
                self.pointer_bus
                    .dispatch(PointerDown::at(mouse.column, mouse.row));
                if let Screen::Auth(card) = &mut self.current_screen {
                    card.poll();
                    card.click(Position::new(mouse.column, mouse.row));
                }
            }
            MouseEventKind::ScrollUp => self.scroll_by(-i32::from(SCROLL_STEP)),
            MouseEventKind::ScrollDown => self.scroll_by(i32::from(SCROLL_STEP)),
            _ => {}
        }
    }

    /// Renders the current screen and refreshes the card's hit map.
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        let (phone_area, activity_area) = self.split(area);

        match &mut self.current_screen {
            Screen::Splash => {
                render_splash(f, phone_area, self.ui_config.with_background_color)
            }
            Screen::Auth(card) => {
                let (viewport, hits) = PhoneFrame::new(AuthScreen::new(card))
                    .scroll(self.scroll)
                    .background(self.ui_config.with_background_color)
                    .render(phone_area, f.buffer_mut());
                self.scroll = viewport.scroll;
                self.max_scroll = viewport.max_scroll;
                card.set_hit_map(hits.to_screen(&viewport));
            }
        }

        if let Some(activity_area) = activity_area {
            render_activity_panel(f, activity_area, &self.activity);
        }
    }

    /// Phone on the left, activity on the right when there is room.
    fn split(&self, area: Rect) -> (Rect, Option<Rect>) {
        let wide_enough = area.width >= FRAME_WIDTH + ACTIVITY_PANEL_MIN_WIDTH;
        if !self.ui_config.show_activity || !wide_enough {
            return (area, None);
        }
        let [phone, activity] =
            Layout::horizontal([Constraint::Min(FRAME_WIDTH), Constraint::Percentage(40)])
                .areas(area);
        (phone, Some(activity))
    }
}

// Accessors used to drive the app from tests.
#[cfg(test)]
impl App {
    pub fn screen(&self) -> &Screen {
        &self.current_screen
    }

    pub fn card(&self) -> Option<&AuthCard> {
        match &self.current_screen {
            Screen::Auth(card) => Some(card),
            Screen::Splash => None,
        }
    }

    pub fn card_mut(&mut self) -> Option<&mut AuthCard> {
        match &mut self.current_screen {
            Screen::Auth(card) => Some(card),
            Screen::Splash => None,
        }
    }

    pub fn pointer_bus(&self) -> &PointerBus {
        &self.pointer_bus
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn activity(&self) -> &VecDeque<CardEvent> {
        &self.activity
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(SPLASH_DURATION_SECS);

    // UI event loop
    loop {
        app.tick();
        terminal.draw(|f| app.render(f))?;

        // Handle splash-to-auth transition
        if let Screen::Splash = app.current_screen {
            if splash_start.elapsed() >= splash_duration {
                app.show_auth();
                continue;
            }
        }

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if app.handle_event(event::read()?) {
                log::info!("Exiting on user request");
                return Ok(());
            }
        }
    }
}
