//! Auth card main renderer

use super::card::AuthCard;
use super::components::fields::{self, TextField};
use super::components::{header, pin, role_selector, tabs};
use super::hit_map::HitMap;
use super::state::Focus;
use super::utils::{CARD_BG, OUTLINE, blank};
use crate::consts::cli_consts::card::{
    BACK_HEIGHT, BOTTOM_MARGIN, CAPTION_HEIGHT, CARD_HEIGHT, FIELD_HEIGHT, LOGO_HEIGHT,
};
use crate::ui::phone_frame::FrameContent;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Widget};

/// The whole screen hosted in the phone: header, logo, caption and card.
pub struct AuthScreen<'a> {
    card: &'a AuthCard,
}

impl<'a> AuthScreen<'a> {
    pub fn new(card: &'a AuthCard) -> Self {
        Self { card }
    }
}

impl FrameContent for AuthScreen<'_> {
    type Output = HitMap;

    fn content_height(&self, _width: u16) -> u16 {
        BACK_HEIGHT + LOGO_HEIGHT + CAPTION_HEIGHT + CARD_HEIGHT + BOTTOM_MARGIN
    }

    fn render_content(self, area: Rect, buf: &mut Buffer) -> HitMap {
        let [back, logo, caption, card_area, _] = Layout::vertical([
            Constraint::Length(BACK_HEIGHT),
            Constraint::Length(LOGO_HEIGHT),
            Constraint::Length(CAPTION_HEIGHT),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Length(BOTTOM_MARGIN),
        ])
        .areas(area);

        let mut hits = HitMap {
            back: header::render_back(back, buf, self.card.focus() == Focus::Back),
            ..HitMap::default()
        };
        header::render_logo(logo, buf);
        header::render_caption(caption, buf);
        render_card(card_area, buf, self.card, &mut hits);
        hits
    }
}

fn render_card(area: Rect, buf: &mut Buffer, card: &AuthCard, hits: &mut HitMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(OUTLINE))
        .style(Style::default().bg(CARD_BG).fg(Color::Black))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    block.render(area, buf);

    let [
        heading,
        role,
        pins,
        email,
        password,
        confirm,
        submit,
        _,
        tab_row,
    ] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(FIELD_HEIGHT),
    ])
    .areas(inner);

    let mode = card.mode();
    let focus = card.focus();

    header::render_heading(heading, buf, mode);
    hits.role_button = role_selector::render_button(role, buf, card);
    hits.pin_slots = pin::render_pin_row(pins, buf, card);
    hits.email = TextField {
        placeholder: "Email",
        value: card.email(),
        masked: false,
        focused: focus == Focus::Email,
    }
    .render(email, buf);
    hits.password = TextField {
        placeholder: "Password",
        value: card.password(),
        masked: true,
        focused: focus == Focus::Password,
    }
    .render(password, buf);
    // Login keeps the row as blank space so the card does not change height.
    hits.confirm_password = mode.shows_confirm_password().then(|| {
        TextField {
            placeholder: "Confirm password",
            value: card.confirm_password(),
            masked: true,
            focused: focus == Focus::ConfirmPassword,
        }
        .render(confirm, buf)
    });
    hits.submit = fields::render_submit(submit, buf, mode.submit_label(), focus == Focus::Submit);
    hits.tabs = tabs::render_tabs(tab_row, buf, card);

    if card.is_dropdown_open() {
        let (menu, items) = role_selector::render_menu(hits.role_button, buf, card);
        hits.role_menu = Some(menu);
        hits.role_items = items;
    }

    // Faded out: nothing visible, but controls keep their places.
    if card.is_animating() {
        blank(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::frame::{FRAME_HEIGHT, FRAME_WIDTH};
    use crate::ui::auth_card::state::{Mode, Role};
    use crate::ui::auth_card::transition::FadeTimings;
    use crate::ui::phone_frame::PhoneFrame;
    use crate::ui::pointer::PointerBus;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    fn mount() -> (PointerBus, AuthCard) {
        let bus = PointerBus::new();
        let card = AuthCard::mount(&bus, FadeTimings::from_millis(150, 150));
        (bus, card)
    }

    /// Renders the card at its natural height, without the phone frame.
    fn render_plain(card: &AuthCard) -> (Buffer, HitMap) {
        let screen = AuthScreen::new(card);
        let height = screen.content_height(36);
        let mut buf = Buffer::empty(Rect::new(0, 0, 36, height));
        let area = buf.area;
        let hits = screen.render_content(area, &mut buf);
        (buf, hits)
    }

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn sign_up_shows_confirm_password() {
        let (_bus, card) = mount();
        let (buf, hits) = render_plain(&card);
        let screen = text(&buf);

        assert!(screen.contains("Create Account"));
        assert!(screen.contains("SignUp"));
        assert!(screen.contains("Confirm password"));
        assert!(screen.contains("Select Role"));
        assert!(hits.confirm_password.is_some());
        assert_eq!(screen.matches(pin::EMPTY_SLOT).count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn login_replaces_confirm_with_spacer_of_same_height() {
        let (_bus, mut card) = mount();
        let (sign_up_buf, sign_up_hits) = render_plain(&card);

        card.switch_mode(Mode::Login);
        card.settle().await;
        let (buf, hits) = render_plain(&card);
        let screen = text(&buf);

        assert!(screen.contains("Welcome Back"));
        assert!(screen.contains("Log In"));
        assert!(!screen.contains("Confirm password"));
        assert!(hits.confirm_password.is_none());
        // Layout is stable across modes.
        assert_eq!(buf.area, sign_up_buf.area);
        assert_eq!(hits.submit, sign_up_hits.submit);
        assert_eq!(hits.tabs, sign_up_hits.tabs);
    }

    #[test]
    fn filled_pin_slots_show_digits() {
        let (_bus, mut card) = mount();
        card.pin_input(0, "4");
        card.pin_input(1, "2");
        let (buf, hits) = render_plain(&card);
        let screen = text(&buf);

        assert_eq!(screen.matches(pin::EMPTY_SLOT).count(), 1);
        let slot = hits.pin_slots[0];
        let middle = buf.cell((slot.x + slot.width / 2, slot.y + 1)).unwrap();
        assert_eq!(middle.symbol(), "4");
    }

    #[test]
    fn open_menu_lists_roles_and_reports_regions() {
        let (_bus, mut card) = mount();
        card.select_role(Role::Owner);
        card.toggle_dropdown();
        let (buf, hits) = render_plain(&card);
        let screen = text(&buf);

        for role in Role::ALL {
            assert!(screen.contains(&role.to_string()));
        }
        let menu = hits.role_menu.expect("menu is open");
        assert_eq!(menu.y, hits.role_button.bottom());
        assert_eq!(hits.role_items.len(), Role::ALL.len());
        assert!(hits.dropdown_region().contains(Position::new(menu.x + 1, menu.y + 1)));
    }

    #[tokio::test(start_paused = true)]
    async fn card_body_is_hidden_while_fading() {
        let (_bus, mut card) = mount();
        card.switch_mode(Mode::Login);
        let (buf, hits) = render_plain(&card);
        let screen = text(&buf);

        assert!(!screen.contains("Create Account"));
        assert!(!screen.contains("SignUp"));
        // Still clickable where the controls sit.
        assert!(!hits.submit.is_empty());
        assert!(screen.contains("State Name"));
    }

    #[test]
    fn renders_inside_phone_frame() {
        let (_bus, card) = mount();
        let mut terminal = Terminal::new(TestBackend::new(FRAME_WIDTH, FRAME_HEIGHT)).unwrap();
        let mut viewport = None;
        terminal
            .draw(|f| {
                let (vp, hits) = PhoneFrame::new(AuthScreen::new(&card)).render(f.area(), f.buffer_mut());
                assert!(!hits.email.is_empty());
                viewport = Some(vp);
            })
            .unwrap();

        let viewport = viewport.unwrap();
        assert!(viewport.max_scroll > 0, "card is taller than the phone");
        let screen = text(terminal.backend().buffer());
        assert!(screen.contains("Create Account"));
    }
}
