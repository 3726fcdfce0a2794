//! View-state transitions for the navigation menu, the skill overlay and the
//! memo drafts.
//!
//! Components keep the values in signals and call these functions from their
//! event handlers, so every transition is testable without a browser.

use crate::content::Skill;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// hamburger / close icon pressed
    Toggle,
    /// any link inside the dropdown activated
    LinkActivated,
}

pub fn menu_update(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Toggle => !open,
        MenuEvent::LinkActivated => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    Select(Skill),
    CloseButton,
    Key(String),
}

pub fn is_escape(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

/// Only one skill is ever shown; selecting another replaces it.
pub fn overlay_update(selected: Option<Skill>, event: OverlayEvent) -> Option<Skill> {
    match event {
        OverlayEvent::Select(skill) => Some(skill),
        OverlayEvent::CloseButton => None,
        OverlayEvent::Key(key) if is_escape(&key) => None,
        OverlayEvent::Key(_) => selected,
    }
}

/// Keys that activate a focused tile, mirroring a button.
pub fn activates_tile(key: &str) -> bool {
    key == "Enter" || key == " "
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoField {
    First,
    Second,
}

/// Unsaved text of the two memo panels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoDraft {
    pub first: String,
    pub second: String,
}

impl MemoDraft {
    pub fn edit(&mut self, field: MemoField, text: String) {
        match field {
            MemoField::First => self.first = text,
            MemoField::Second => self.second = text,
        }
    }

    pub fn get(&self, field: MemoField) -> &str {
        match field {
            MemoField::First => &self.first,
            MemoField::Second => &self.second,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BACKEND_SKILLS, FRONTEND_SKILLS};

    fn key(k: &str) -> OverlayEvent {
        OverlayEvent::Key(k.to_string())
    }

    #[test]
    fn toggle_flips_menu() {
        assert!(menu_update(false, MenuEvent::Toggle));
        assert!(!menu_update(true, MenuEvent::Toggle));
    }

    #[test]
    fn link_always_closes_menu() {
        assert!(!menu_update(true, MenuEvent::LinkActivated));
        assert!(!menu_update(false, MenuEvent::LinkActivated));
    }

    #[test]
    fn selecting_a_tile_opens_overlay_with_its_data() {
        let skill = FRONTEND_SKILLS[3];
        let selected = overlay_update(None, OverlayEvent::Select(skill));
        assert_eq!(selected, Some(skill));
        assert_eq!(selected.map(|s| s.name), Some("React"));
    }

    #[test]
    fn selecting_another_tile_replaces_the_open_one() {
        let first = overlay_update(None, OverlayEvent::Select(FRONTEND_SKILLS[0]));
        let second = overlay_update(first, OverlayEvent::Select(BACKEND_SKILLS[0]));
        assert_eq!(second, Some(BACKEND_SKILLS[0]));
    }

    #[test]
    fn close_button_clears_selection() {
        let open = Some(BACKEND_SKILLS[1]);
        assert_eq!(overlay_update(open, OverlayEvent::CloseButton), None);
    }

    #[test]
    fn escape_clears_selection() {
        let open = Some(BACKEND_SKILLS[2]);
        assert_eq!(overlay_update(open, key("Escape")), None);
        assert_eq!(overlay_update(open, key("Esc")), None);
    }

    #[test]
    fn escape_without_overlay_is_a_no_op() {
        assert_eq!(overlay_update(None, key("Escape")), None);
    }

    #[test]
    fn other_keys_keep_overlay_open() {
        let open = Some(FRONTEND_SKILLS[1]);
        assert_eq!(overlay_update(open, key("Enter")), open);
        assert_eq!(overlay_update(open, key("a")), open);
    }

    #[test]
    fn enter_and_space_activate_tiles() {
        assert!(activates_tile("Enter"));
        assert!(activates_tile(" "));
        assert!(!activates_tile("Tab"));
    }

    #[test]
    fn memo_fields_do_not_cross_talk() {
        let mut draft = MemoDraft::default();
        draft.edit(MemoField::First, "내일 3시 회의".into());
        assert_eq!(draft.get(MemoField::First), "내일 3시 회의");
        assert_eq!(draft.get(MemoField::Second), "");

        draft.edit(MemoField::Second, "금요일 저녁".into());
        assert_eq!(draft.get(MemoField::First), "내일 3시 회의");
        assert_eq!(draft.get(MemoField::Second), "금요일 저녁");
    }
}
