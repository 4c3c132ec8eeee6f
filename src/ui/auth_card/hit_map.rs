//! Hit-testing for rendered controls

use super::state::{Mode, PIN_LENGTH, Role};
use crate::ui::phone_frame::Viewport;
use ratatui::layout::{Position, Rect};

/// A control under the pointer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    Back,
    RoleButton,
    RoleItem(Role),
    Pin(usize),
    Email,
    Password,
    ConfirmPassword,
    Submit,
    Tab(Mode),
}

/// Rectangles of every interactive control as last rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub back: Rect,
    pub role_button: Rect,
    /// Present while the role menu is open.
    pub role_menu: Option<Rect>,
    pub role_items: Vec<(Role, Rect)>,
    pub pin_slots: [Rect; PIN_LENGTH],
    pub email: Rect,
    pub password: Rect,
    /// Absent in login mode, where a spacer takes its place.
    pub confirm_password: Option<Rect>,
    pub submit: Rect,
    pub tabs: Vec<(Mode, Rect)>,
}

impl HitMap {
    /// The region that counts as "inside" the role dropdown.
    pub fn dropdown_region(&self) -> Rect {
        match self.role_menu {
            Some(menu) if !menu.is_empty() && !self.role_button.is_empty() => {
                self.role_button.union(menu)
            }
            Some(menu) if !menu.is_empty() => menu,
            _ => self.role_button,
        }
    }

    pub fn is_inside_dropdown(&self, position: Position) -> bool {
        self.dropdown_region().contains(position)
    }

    /// Topmost control at `position`. The open menu covers what lies beneath.
    pub fn target_at(&self, position: Position) -> Option<ClickTarget> {
        if let Some((role, _)) = self
            .role_items
            .iter()
            .find(|(_, rect)| rect.contains(position))
        {
            return Some(ClickTarget::RoleItem(*role));
        }
        if self.role_menu.is_some_and(|menu| menu.contains(position)) {
            // Menu border.
            return None;
        }
        if self.role_button.contains(position) {
            return Some(ClickTarget::RoleButton);
        }
        if let Some(index) = self.pin_slots.iter().position(|r| r.contains(position)) {
            return Some(ClickTarget::Pin(index));
        }
        if let Some((mode, _)) = self.tabs.iter().find(|(_, r)| r.contains(position)) {
            return Some(ClickTarget::Tab(*mode));
        }
        let fixed = [
            (self.back, ClickTarget::Back),
            (self.email, ClickTarget::Email),
            (self.password, ClickTarget::Password),
            (self.submit, ClickTarget::Submit),
        ];
        if let Some((_, target)) = fixed.iter().find(|(r, _)| r.contains(position)) {
            return Some(*target);
        }
        if self.confirm_password.is_some_and(|r| r.contains(position)) {
            return Some(ClickTarget::ConfirmPassword);
        }
        None
    }

    /// Moves every rectangle from content space to screen space.
    pub fn to_screen(&self, viewport: &Viewport) -> HitMap {
        let map = |r: Rect| viewport.to_screen(r);
        HitMap {
            back: map(self.back),
            role_button: map(self.role_button),
            role_menu: self.role_menu.map(map),
            role_items: self.role_items.iter().map(|(role, r)| (*role, map(*r))).collect(),
            pin_slots: self.pin_slots.map(map),
            email: map(self.email),
            password: map(self.password),
            confirm_password: self.confirm_password.map(map),
            submit: map(self.submit),
            tabs: self.tabs.iter().map(|(mode, r)| (*mode, map(*r))).collect(),
        }
    }
}
