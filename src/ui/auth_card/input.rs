//! Keyboard routing for the auth card

use super::card::AuthCard;
use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Applies a key press to the focused control. Returns false when the key
/// meant nothing to the card, leaving it to the app.
pub fn handle_key(card: &mut AuthCard, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab => {
            card.focus_next();
            return true;
        }
        KeyCode::BackTab => {
            card.focus_previous();
            return true;
        }
        _ => {}
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }

    match card.focus() {
        Focus::Pin(index) => handle_pin_key(card, index, key.code),
        Focus::RoleSelector => handle_role_key(card, key.code),
        Focus::Email | Focus::Password | Focus::ConfirmPassword => match key.code {
            KeyCode::Char(c) => {
                card.type_char(c);
                true
            }
            KeyCode::Backspace => {
                card.erase_char();
                true
            }
            _ => false,
        },
        Focus::Tab(mode) => activate(key.code, || {
            card.switch_mode(mode);
        }),
        Focus::Submit => activate(key.code, || card.submit()),
        // The back button is decorative.
        Focus::Back => matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')),
    }
}

fn activate(code: KeyCode, action: impl FnOnce()) -> bool {
    if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
        action();
        true
    } else {
        false
    }
}

fn handle_pin_key(card: &mut AuthCard, index: usize, code: KeyCode) -> bool {
    match code {
        KeyCode::Char(c) => {
            card.pin_input(index, &c.to_string());
            true
        }
        KeyCode::Backspace => {
            // Navigation sees the slot before the deletion lands.
            let was_filled = !card.pin().is_empty_at(index);
            card.pin_key_down(index, code);
            if was_filled {
                card.pin_input(index, "");
            }
            true
        }
        _ => false,
    }
}

fn handle_role_key(card: &mut AuthCard, code: KeyCode) -> bool {
    let open = card.is_dropdown_open();
    match code {
        KeyCode::Enter | KeyCode::Char(' ') if open => {
            card.select_role(card.highlighted_role());
            true
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down if !open => {
            card.toggle_dropdown();
            true
        }
        KeyCode::Down if open => {
            card.move_highlight(true);
            true
        }
        KeyCode::Up if open => {
            card.move_highlight(false);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::auth_card::state::{Mode, Role};
    use crate::ui::auth_card::transition::FadeTimings;
    use crate::ui::pointer::PointerBus;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn card() -> (PointerBus, AuthCard) {
        let bus = PointerBus::new();
        let card = AuthCard::mount(&bus, FadeTimings::default());
        (bus, card)
    }

    #[test]
    fn typed_digits_auto_advance() {
        let (_bus, mut card) = card();
        for c in ['1', '2', '3'] {
            assert!(handle_key(&mut card, press(KeyCode::Char(c))));
        }
        assert_eq!(card.pin().slots(), [Some('1'), Some('2'), Some('3')]);
        assert_eq!(card.focus(), Focus::Pin(2));
    }

    #[test]
    fn letters_in_pin_are_swallowed() {
        let (_bus, mut card) = card();
        handle_key(&mut card, press(KeyCode::Char('x')));
        assert_eq!(card.pin().slots(), [None, None, None]);
        assert_eq!(card.focus(), Focus::Pin(0));
    }

    #[test]
    fn backspace_clears_filled_slot_then_walks_back() {
        let (_bus, mut card) = card();
        handle_key(&mut card, press(KeyCode::Char('1')));
        handle_key(&mut card, press(KeyCode::Char('2')));
        handle_key(&mut card, press(KeyCode::Char('3')));

        // Slot 2 is filled: clear it, stay.
        handle_key(&mut card, press(KeyCode::Backspace));
        assert_eq!(card.pin().slots(), [Some('1'), Some('2'), None]);
        assert_eq!(card.focus(), Focus::Pin(2));

        // Slot 2 is empty: move to slot 1 without touching it.
        handle_key(&mut card, press(KeyCode::Backspace));
        assert_eq!(card.focus(), Focus::Pin(1));
        assert_eq!(card.pin().slots(), [Some('1'), Some('2'), None]);

        handle_key(&mut card, press(KeyCode::Backspace));
        assert_eq!(card.pin().slots(), [Some('1'), None, None]);
    }

    #[test]
    fn role_menu_is_keyboard_driven() {
        let (_bus, mut card) = card();
        card.set_focus(Focus::RoleSelector);

        handle_key(&mut card, press(KeyCode::Enter));
        assert!(card.is_dropdown_open());
        handle_key(&mut card, press(KeyCode::Down));
        handle_key(&mut card, press(KeyCode::Down));
        handle_key(&mut card, press(KeyCode::Enter));

        assert_eq!(card.selected_role(), Some(Role::Instructor));
        assert!(!card.is_dropdown_open());
    }

    #[test]
    fn text_fields_take_characters() {
        let (_bus, mut card) = card();
        card.set_focus(Focus::Email);
        for c in "a@b.io".chars() {
            handle_key(&mut card, press(KeyCode::Char(c)));
        }
        handle_key(&mut card, press(KeyCode::Backspace));
        assert_eq!(card.email(), "a@b.i");

        handle_key(&mut card, press(KeyCode::Tab));
        assert_eq!(card.focus(), Focus::Password);
        handle_key(&mut card, press(KeyCode::Char('s')));
        assert_eq!(card.password(), "s");
    }

    #[test]
    fn control_chords_are_left_to_the_app() {
        let (_bus, mut card) = card();
        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!handle_key(&mut card, chord));
    }

    #[tokio::test(start_paused = true)]
    async fn enter_on_tab_switches_mode() {
        let (_bus, mut card) = card();
        card.set_focus(Focus::Tab(Mode::Login));
        handle_key(&mut card, press(KeyCode::Enter));
        assert!(card.is_animating());
        card.settle().await;
        assert_eq!(card.mode(), Mode::Login);
    }
}
