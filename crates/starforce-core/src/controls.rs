//! Controls manager: press/release edges in, "is it pressed" queries out.

use std::collections::HashMap;

use glam::Vec3;

use crate::enums::{Control, KeyCode, MouseButton};

#[derive(Debug, Clone, Default)]
pub struct Controls {
    /// Only registered controls are tracked; everything else passes through.
    pressed: HashMap<Control, bool>,
    pointer_target: Option<Vec3>,
    pointer_on_screen: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self {
            pointer_on_screen: true,
            ..Default::default()
        }
    }

    /// Arrow keys and the three mouse buttons.
    pub fn with_default_bindings() -> Self {
        let mut controls = Self::new();
        for key in [KeyCode::Up, KeyCode::Left, KeyCode::Right, KeyCode::Down] {
            controls.control_key(key);
        }
        for button in [MouseButton::Left, MouseButton::Wheel, MouseButton::Right] {
            controls.control_mouse_button(button);
        }
        controls
    }

    pub fn control_key(&mut self, key: KeyCode) {
        self.pressed.insert(Control::Key(key), false);
    }

    pub fn control_mouse_button(&mut self, button: MouseButton) {
        self.pressed.insert(Control::Mouse(button), false);
    }

    pub fn is_controlled(&self, control: Control) -> bool {
        self.pressed.contains_key(&control)
    }

    /// Returns `false` when the control is not registered.
    pub fn press(&mut self, control: Control) -> bool {
        match self.pressed.get_mut(&control) {
            Some(state) => {
                *state = true;
                true
            }
            None => false,
        }
    }

    /// Returns `true` only on a pressed-to-released edge.
    pub fn release(&mut self, control: Control) -> bool {
        match self.pressed.get_mut(&control) {
            Some(state) => std::mem::replace(state, false),
            None => false,
        }
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        self.pressed.get(&control).copied().unwrap_or(false)
    }

    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.is_pressed(Control::Mouse(button))
    }

    pub fn set_pointer(&mut self, target: Option<Vec3>, on_screen: bool) {
        self.pointer_target = target;
        self.pointer_on_screen = on_screen;
    }

    /// Pointer projection on the play plane, if the ray hit it.
    pub fn pointer_target(&self) -> Option<Vec3> {
        self.pointer_target
    }

    pub fn pointer_on_screen(&self) -> bool {
        self.pointer_on_screen
    }

    /// Drop every held control, e.g. when focus is lost mid-press.
    pub fn release_all(&mut self) {
        for state in self.pressed.values_mut() {
            *state = false;
        }
    }
}
