//! Auth card state and operations
//!
//! All interactive state of the mockup lives here. Operations are plain
//! methods; the only asynchronous part is the fade transition, whose phases
//! come back through [`FadeTimer`] and are applied by [`AuthCard::poll`].

use super::hit_map::{ClickTarget, HitMap};
use super::state::{Focus, Mode, PIN_LENGTH, PinDigits, Role};
use super::transition::{FadePhase, FadeTimer, FadeTimings};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::ui::pointer::{PointerBus, PointerDown, PointerSubscription};
use crossterm::event::KeyCode;
use ratatui::layout::Position;
use std::collections::VecDeque;
use tokio::sync::mpsc;

#[derive(Debug)]
pub struct AuthCard {
    mode: Mode,
    animating: bool,
    pin: PinDigits,
    dropdown_open: bool,
    selected_role: Option<Role>,
    /// Keyboard cursor inside the open role menu.
    highlighted_role: usize,
    focus: Focus,
    email: String,
    password: String,
    confirm_password: String,

    /// Screen-space rectangles from the last render.
    hit_map: HitMap,
    timer: FadeTimer,
    pointer_events: mpsc::UnboundedReceiver<PointerDown>,
    /// Released on drop, which removes the outside-click listener.
    _pointer_subscription: PointerSubscription,
    events: VecDeque<Event>,
}

impl AuthCard {
    /// Mounts a fresh card and registers its outside-click listener.
    pub fn mount(pointer_bus: &PointerBus, timings: FadeTimings) -> Self {
        let (subscription, pointer_events) = pointer_bus.subscribe();
        let mut card = Self {
            mode: Mode::default(),
            animating: false,
            pin: PinDigits::default(),
            dropdown_open: false,
            selected_role: None,
            highlighted_role: 0,
            focus: Focus::default(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            hit_map: HitMap::default(),
            timer: FadeTimer::new(timings),
            pointer_events,
            _pointer_subscription: subscription,
            events: VecDeque::new(),
        };
        card.record(Event::lifecycle("Auth card mounted"));
        card
    }

    // Getters

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn pin(&self) -> &PinDigits {
        &self.pin
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn selected_role(&self) -> Option<Role> {
        self.selected_role
    }

    pub fn highlighted_role(&self) -> Role {
        Role::ALL[self.highlighted_role % Role::ALL.len()]
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> &str {
        &self.confirm_password
    }

    #[cfg(test)]
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    pub fn set_hit_map(&mut self, hit_map: HitMap) {
        self.hit_map = hit_map;
    }

    /// Takes the activity events recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }

    fn record(&mut self, event: Event) {
        log::debug!("{}", event);
        if self.events.len() >= MAX_ACTIVITY_LOGS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    // Mode switching

    /// Starts a fade transition toward `target`.
    ///
    /// Ignored while a transition is running or when `target` is already
    /// the current mode. Returns whether a transition started.
    pub fn switch_mode(&mut self, target: Mode) -> bool {
        if self.animating || target == self.mode {
            return false;
        }
        self.animating = true;
        self.timer.start_fade_out(target);
        self.record(Event::transition(format!("Fading out toward {}", target)));
        true
    }

    fn apply_fade(&mut self, phase: FadePhase) {
        match phase {
            FadePhase::FadedOut(target) => {
                self.pin.clear();
                self.selected_role = None;
                self.mode = target;
                if !target.shows_confirm_password() {
                    self.confirm_password.clear();
                    if self.focus == Focus::ConfirmPassword {
                        self.focus = Focus::Submit;
                    }
                }
                self.timer.start_fade_in();
                self.record(Event::transition(format!("Switched to {}", target)));
            }
            FadePhase::FadedIn => {
                self.animating = false;
                self.record(Event::transition("Fade in complete"));
            }
        }
    }

    /// Applies elapsed fade phases and pending pointer presses.
    pub fn poll(&mut self) {
        while let Some(phase) = self.timer.try_next() {
            self.apply_fade(phase);
        }
        while let Ok(press) = self.pointer_events.try_recv() {
            self.on_pointer_down(press);
        }
    }

    /// Waits for the next fade phase and applies it.
    pub async fn next_fade_phase(&mut self) -> Option<FadePhase> {
        let phase = self.timer.next().await?;
        self.apply_fade(phase);
        Some(phase)
    }

    /// Waits until any running transition has finished.
    pub async fn settle(&mut self) {
        while self.animating {
            if self.next_fade_phase().await.is_none() {
                break;
            }
        }
    }

    // PIN entry

    /// Writes `raw` into PIN slot `index`.
    ///
    /// Anything but an empty string or a single ASCII digit is ignored. A
    /// digit in any slot but the last moves focus to the next slot.
    pub fn pin_input(&mut self, index: usize, raw: &str) -> bool {
        match self.pin.set(index, raw) {
            Ok(value) => {
                if value.is_some() && index + 1 < PIN_LENGTH {
                    self.focus = Focus::Pin(index + 1);
                }
                self.record(Event::input(format!("PIN slot {} updated", index + 1)));
                true
            }
            Err(e) => {
                self.record(Event::rejected(e.to_string()));
                false
            }
        }
    }

    /// Moves focus back one slot when Backspace hits an empty slot.
    ///
    /// Runs before the key edits the slot, so a filled slot keeps focus.
    pub fn pin_key_down(&mut self, index: usize, key: KeyCode) {
        if key == KeyCode::Backspace && self.pin.is_empty_at(index) && index > 0 {
            self.focus = Focus::Pin(index - 1);
        }
    }

    // Role selection

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
        if self.dropdown_open {
            self.highlighted_role = self.selected_role.map(Role::index).unwrap_or(0);
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    pub fn select_role(&mut self, role: Role) {
        self.selected_role = Some(role);
        self.dropdown_open = false;
        self.record(Event::selection(format!("Role selected: {}", role)));
    }

    pub fn move_highlight(&mut self, forward: bool) {
        let len = Role::ALL.len();
        self.highlighted_role = if forward {
            (self.highlighted_role + 1) % len
        } else {
            (self.highlighted_role + len - 1) % len
        };
    }

    /// Document-level press: anything outside the dropdown closes it.
    pub fn on_pointer_down(&mut self, press: PointerDown) {
        if self.dropdown_open && !self.hit_map.is_inside_dropdown(press.position) {
            self.dropdown_open = false;
            self.record(Event::selection("Role menu dismissed"));
        }
    }

    // Focus and text fields

    pub fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::ConfirmPassword && !self.mode.shows_confirm_password() {
            return;
        }
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.mode);
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous(self.mode);
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
            Focus::ConfirmPassword => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    pub fn erase_char(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    /// Submit has no effect beyond being noticed.
    pub fn submit(&mut self) {
        self.record(Event::input(format!(
            "{} pressed (mockup, nothing is sent)",
            self.mode.submit_label()
        )));
    }

    /// Routes a click to the control under the pointer.
    pub fn click(&mut self, position: Position) {
        let Some(target) = self.hit_map.target_at(position) else {
            return;
        };
        match target {
            ClickTarget::Back => self.set_focus(Focus::Back),
            ClickTarget::RoleButton => {
                self.set_focus(Focus::RoleSelector);
                self.toggle_dropdown();
            }
            ClickTarget::RoleItem(role) => self.select_role(role),
            ClickTarget::Pin(index) => self.set_focus(Focus::Pin(index)),
            ClickTarget::Email => self.set_focus(Focus::Email),
            ClickTarget::Password => self.set_focus(Focus::Password),
            ClickTarget::ConfirmPassword => self.set_focus(Focus::ConfirmPassword),
            ClickTarget::Submit => {
                self.set_focus(Focus::Submit);
                self.submit();
            }
            ClickTarget::Tab(mode) => {
                self.set_focus(Focus::Tab(mode));
                self.switch_mode(mode);
            }
        }
    }
}

impl Drop for AuthCard {
    fn drop(&mut self) {
        log::debug!("Auth card torn down in {} mode", self.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;
    use std::time::Duration;
    use tokio::time::Instant;

    fn mount() -> (PointerBus, AuthCard) {
        let bus = PointerBus::new();
        let card = AuthCard::mount(&bus, FadeTimings::from_millis(150, 150));
        (bus, card)
    }

    #[test]
    fn starts_in_sign_up_with_empty_state() {
        let (_bus, card) = mount();
        assert_eq!(card.mode(), Mode::SignUp);
        assert!(!card.is_animating());
        assert_eq!(card.pin().slots(), [None, None, None]);
        assert!(!card.is_dropdown_open());
        assert_eq!(card.selected_role(), None);
    }

    #[test]
    fn typing_three_digits_fills_pin_and_stops_at_last_slot() {
        let (_bus, mut card) = mount();
        for (i, digit) in ["1", "2", "3"].iter().enumerate() {
            assert!(card.pin_input(i, digit));
        }
        assert_eq!(card.pin().slots(), [Some('1'), Some('2'), Some('3')]);
        assert_eq!(card.focus(), Focus::Pin(2));
    }

    #[test]
    fn digit_advances_focus_and_empty_value_does_not() {
        let (_bus, mut card) = mount();
        card.pin_input(0, "5");
        assert_eq!(card.focus(), Focus::Pin(1));

        card.set_focus(Focus::Pin(0));
        card.pin_input(0, "");
        assert_eq!(card.focus(), Focus::Pin(0));
        assert!(card.pin().is_empty_at(0));
    }

    #[test]
    fn non_digit_input_changes_nothing() {
        let (_bus, mut card) = mount();
        card.pin_input(0, "4");
        let before = card.pin().clone();
        let focus = card.focus();

        for raw in ["a", "12", " ", "#"] {
            assert!(!card.pin_input(1, raw));
        }
        assert!(!card.pin_input(7, "1"));
        assert_eq!(card.pin(), &before);
        assert_eq!(card.focus(), focus);
    }

    #[test]
    fn backspace_moves_back_only_from_empty_slot() {
        let (_bus, mut card) = mount();
        card.pin_input(0, "1");
        card.pin_input(1, "2");
        assert_eq!(card.focus(), Focus::Pin(2));

        // Empty slot 2: focus moves back.
        card.pin_key_down(2, KeyCode::Backspace);
        assert_eq!(card.focus(), Focus::Pin(1));

        // Filled slot 1: focus stays.
        card.pin_key_down(1, KeyCode::Backspace);
        assert_eq!(card.focus(), Focus::Pin(1));

        // Slot 0 never moves further back.
        card.set_focus(Focus::Pin(0));
        card.pin_input(0, "");
        card.set_focus(Focus::Pin(0));
        card.pin_key_down(0, KeyCode::Backspace);
        assert_eq!(card.focus(), Focus::Pin(0));

        // Other keys are ignored.
        card.set_focus(Focus::Pin(2));
        card.pin_key_down(2, KeyCode::Delete);
        assert_eq!(card.focus(), Focus::Pin(2));
    }

    #[test]
    fn role_select_sets_role_and_closes_menu() {
        let (_bus, mut card) = mount();
        for role in Role::ALL {
            card.toggle_dropdown();
            assert!(card.is_dropdown_open());
            card.select_role(role);
            assert_eq!(card.selected_role(), Some(role));
            assert!(!card.is_dropdown_open());
        }
    }

    #[test]
    fn toggle_highlights_current_role() {
        let (_bus, mut card) = mount();
        card.select_role(Role::Instructor);
        card.toggle_dropdown();
        assert_eq!(card.highlighted_role(), Role::Instructor);
        card.move_highlight(true);
        assert_eq!(card.highlighted_role(), Role::Student);
        card.move_highlight(true);
        assert_eq!(card.highlighted_role(), Role::Administration);
        card.move_highlight(false);
        assert_eq!(card.highlighted_role(), Role::Student);
    }

    #[test]
    fn pointer_outside_dropdown_closes_it() {
        let (bus, mut card) = mount();
        card.set_hit_map(HitMap {
            role_button: Rect::new(10, 5, 18, 3),
            role_menu: Some(Rect::new(10, 8, 18, 6)),
            ..HitMap::default()
        });
        card.toggle_dropdown();

        bus.dispatch(PointerDown::at(12, 10));
        card.poll();
        assert!(card.is_dropdown_open(), "press inside keeps the menu open");

        bus.dispatch(PointerDown::at(1, 30));
        card.poll();
        assert!(!card.is_dropdown_open());
    }

    #[test]
    fn listener_lives_exactly_as_long_as_the_card() {
        let bus = PointerBus::new();
        let card = AuthCard::mount(&bus, FadeTimings::default());
        assert_eq!(bus.listener_count(), 1);
        drop(card);
        assert_eq!(bus.listener_count(), 0);

        let remounted = AuthCard::mount(&bus, FadeTimings::default());
        assert_eq!(bus.listener_count(), 1);
        drop(remounted);
        assert_eq!(bus.listener_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn switching_to_current_mode_is_a_no_op() {
        let (_bus, mut card) = mount();
        assert!(!card.switch_mode(Mode::SignUp));
        assert!(!card.is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn mode_switch_resets_between_fade_out_and_fade_in() {
        let (_bus, mut card) = mount();
        card.select_role(Role::Instructor);
        card.pin_input(0, "9");
        let start = Instant::now();

        assert!(card.switch_mode(Mode::Login));
        assert!(card.is_animating());
        // Nothing changes until the fade-out elapses.
        assert_eq!(card.mode(), Mode::SignUp);
        assert_eq!(card.selected_role(), Some(Role::Instructor));

        assert_eq!(
            card.next_fade_phase().await,
            Some(FadePhase::FadedOut(Mode::Login))
        );
        assert!(start.elapsed() >= Duration::from_millis(150));
        assert_eq!(card.mode(), Mode::Login);
        assert_eq!(card.pin().slots(), [None, None, None]);
        assert_eq!(card.selected_role(), None);
        assert!(card.is_animating(), "still fading in");

        assert_eq!(card.next_fade_phase().await, Some(FadePhase::FadedIn));
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(!card.is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn mode_switch_is_ignored_while_animating() {
        let (_bus, mut card) = mount();
        assert!(card.switch_mode(Mode::Login));
        assert!(!card.switch_mode(Mode::Login));
        assert!(!card.switch_mode(Mode::SignUp));

        card.settle().await;
        assert_eq!(card.mode(), Mode::Login);
        assert!(!card.is_animating());

        // No stray phase from the rejected calls.
        tokio::time::sleep(Duration::from_millis(1_000)).await;
        card.poll();
        assert_eq!(card.mode(), Mode::Login);
        assert!(!card.is_animating());
    }

    #[tokio::test(start_paused = true)]
    async fn dropdown_stays_open_across_mode_switch() {
        let (_bus, mut card) = mount();
        card.toggle_dropdown();
        card.switch_mode(Mode::Login);
        card.settle().await;
        assert!(card.is_dropdown_open());
    }

    #[tokio::test(start_paused = true)]
    async fn login_mode_drops_confirm_password() {
        let (_bus, mut card) = mount();
        card.set_focus(Focus::ConfirmPassword);
        card.type_char('x');
        card.set_focus(Focus::Email);
        card.type_char('a');
        card.set_focus(Focus::ConfirmPassword);

        card.switch_mode(Mode::Login);
        card.settle().await;

        assert_eq!(card.confirm_password(), "");
        assert_eq!(card.email(), "a");
        assert_eq!(card.focus(), Focus::Submit);
        card.set_focus(Focus::ConfirmPassword);
        assert_eq!(card.focus(), Focus::Submit);
    }

    #[tokio::test(start_paused = true)]
    async fn clicking_a_tab_switches_mode() {
        let (_bus, mut card) = mount();
        card.set_hit_map(HitMap {
            tabs: vec![
                (Mode::SignUp, Rect::new(0, 20, 10, 3)),
                (Mode::Login, Rect::new(10, 20, 10, 3)),
            ],
            ..HitMap::default()
        });

        card.click(Position::new(12, 21));
        assert!(card.is_animating());
        card.settle().await;
        assert_eq!(card.mode(), Mode::Login);

        // Re-activating the active tab does nothing.
        card.click(Position::new(12, 21));
        assert!(!card.is_animating());
    }

    #[test]
    fn activity_events_are_recorded() {
        let (_bus, mut card) = mount();
        card.select_role(Role::Owner);
        let events = card.drain_events();
        assert_eq!(events.len(), 2);
        assert!(events[1].msg.contains("Owner"));
        assert!(card.drain_events().is_empty());
    }
}
