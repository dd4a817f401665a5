use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use tauri::menu::{CheckMenuItem, MenuItem};

use crate::{DEFAULT_ZOOM_LEVEL, MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL, ZOOM_STEP};

#[derive(Clone)]
pub(crate) struct TrayMenuState {
    pub(crate) toggle_item: MenuItem<tauri::Wry>,
    pub(crate) quit_item: MenuItem<tauri::Wry>,
}

/// Handles to app menu items whose state is read back by handlers.
#[derive(Clone)]
pub(crate) struct MenuHandles {
    pub(crate) close_to_tray_item: CheckMenuItem<tauri::Wry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ZoomDirection {
    In,
    Out,
}

/// One zoom step from `current`, clamped to the supported range.
pub(crate) fn stepped_zoom_level(current: f64, direction: ZoomDirection) -> f64 {
    let stepped = match direction {
        ZoomDirection::In => current + ZOOM_STEP,
        ZoomDirection::Out => current - ZOOM_STEP,
    };
    stepped.clamp(MIN_ZOOM_LEVEL, MAX_ZOOM_LEVEL)
}

#[derive(Debug)]
pub(crate) struct ShellState {
    is_quitting: AtomicBool,
    zoom_level: Mutex<f64>,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            is_quitting: AtomicBool::new(false),
            zoom_level: Mutex::new(DEFAULT_ZOOM_LEVEL),
        }
    }
}

impl ShellState {
    pub(crate) fn mark_quitting(&self) {
        self.is_quitting.store(true, Ordering::Relaxed);
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.is_quitting.load(Ordering::Relaxed)
    }

    pub(crate) fn step_zoom(&self, direction: ZoomDirection) -> f64 {
        match self.zoom_level.lock() {
            Ok(mut guard) => {
                *guard = stepped_zoom_level(*guard, direction);
                *guard
            }
            Err(_) => DEFAULT_ZOOM_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_state_starts_not_quitting_and_latches_quit() {
        let state = ShellState::default();
        assert!(!state.is_quitting());

        state.mark_quitting();
        assert!(state.is_quitting());
        state.mark_quitting();
        assert!(state.is_quitting());
    }

    #[test]
    fn stepped_zoom_level_moves_by_one_step() {
        assert_eq!(stepped_zoom_level(1.0, ZoomDirection::In), 1.0 + ZOOM_STEP);
        assert_eq!(stepped_zoom_level(1.0, ZoomDirection::Out), 1.0 - ZOOM_STEP);
    }

    #[test]
    fn stepped_zoom_level_clamps_at_the_range_bounds() {
        assert_eq!(
            stepped_zoom_level(MAX_ZOOM_LEVEL, ZoomDirection::In),
            MAX_ZOOM_LEVEL
        );
        assert_eq!(
            stepped_zoom_level(MIN_ZOOM_LEVEL, ZoomDirection::Out),
            MIN_ZOOM_LEVEL
        );
    }

    #[test]
    fn zoom_in_then_out_restores_the_starting_level() {
        let state = ShellState::default();
        let raised = state.step_zoom(ZoomDirection::In);
        assert!(raised > DEFAULT_ZOOM_LEVEL);

        let restored = state.step_zoom(ZoomDirection::Out);
        assert!((restored - DEFAULT_ZOOM_LEVEL).abs() < 1e-9);
    }
}
