//! Tray menu command identifiers.

use super::types::AppEvent;
use crate::model::constants::HIDE_DELAY_PRESETS;
use crate::model::PlacementMode;

pub const MENU_STARTUP: u32 = 1001;
pub const MENU_SHOW_SHAPE: u32 = 1002;
pub const MENU_SHOW_SYMBOL: u32 = 1003;
pub const MENU_SHOW_NOW: u32 = 1004;
pub const MENU_ABOUT: u32 = 1005;
pub const MENU_EXIT: u32 = 1006;

/// First hide-delay item; one ID per preset.
pub const MENU_HIDE_DELAY_BASE: u32 = 1100;

/// First position item; one ID per `PlacementMode::ALL` entry.
pub const MENU_PLACEMENT_BASE: u32 = 1200;

pub fn hide_delay_menu_id(preset: usize) -> u32 {
    MENU_HIDE_DELAY_BASE + preset as u32
}

pub fn placement_menu_id(mode: PlacementMode) -> u32 {
    let index = PlacementMode::ALL
        .iter()
        .position(|m| *m == mode)
        .unwrap_or(0);
    MENU_PLACEMENT_BASE + index as u32
}

/// Event for a `WM_COMMAND` menu identifier.
pub fn event_for_menu_id(id: u32) -> Option<AppEvent> {
    match id {
        MENU_STARTUP => Some(AppEvent::ToggleStartup),
        MENU_SHOW_SHAPE => Some(AppEvent::ToggleShowShape),
        MENU_SHOW_SYMBOL => Some(AppEvent::ToggleShowSymbol),
        MENU_SHOW_NOW => Some(AppEvent::ShowNow),
        MENU_ABOUT => Some(AppEvent::ShowAbout),
        MENU_EXIT => Some(AppEvent::Quit),
        id if (MENU_HIDE_DELAY_BASE..MENU_HIDE_DELAY_BASE + HIDE_DELAY_PRESETS.len() as u32)
            .contains(&id) =>
        {
            Some(AppEvent::SetHideDelay((id - MENU_HIDE_DELAY_BASE) as usize))
        }
        id if (MENU_PLACEMENT_BASE..MENU_PLACEMENT_BASE + PlacementMode::ALL.len() as u32)
            .contains(&id) =>
        {
            Some(AppEvent::SetPlacement(
                PlacementMode::ALL[(id - MENU_PLACEMENT_BASE) as usize],
            ))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_maps_back_to_its_index() {
        for preset in 0..HIDE_DELAY_PRESETS.len() {
            assert_eq!(
                event_for_menu_id(hide_delay_menu_id(preset)),
                Some(AppEvent::SetHideDelay(preset))
            );
        }
    }

    #[test]
    fn every_placement_maps_back() {
        for mode in PlacementMode::ALL {
            assert_eq!(
                event_for_menu_id(placement_menu_id(mode)),
                Some(AppEvent::SetPlacement(mode))
            );
        }
    }

    #[test]
    fn ids_past_the_ranges_are_unknown() {
        assert_eq!(event_for_menu_id(hide_delay_menu_id(HIDE_DELAY_PRESETS.len())), None);
        assert_eq!(event_for_menu_id(MENU_PLACEMENT_BASE + 3), None);
        assert_eq!(event_for_menu_id(0), None);
    }

    #[test]
    fn fixed_items() {
        assert_eq!(event_for_menu_id(MENU_STARTUP), Some(AppEvent::ToggleStartup));
        assert_eq!(event_for_menu_id(MENU_EXIT), Some(AppEvent::Quit));
    }
}
