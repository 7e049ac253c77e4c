use macroquad::input::{KeyCode, get_keys_down, get_keys_pressed, get_keys_released};
use skyflight_core::KeyHub;

/// Browser-style lower-case key name for a macroquad key code.
pub fn key_name(key: KeyCode) -> Option<&'static str> {
    let name = match key {
        KeyCode::A => "a",
        KeyCode::B => "b",
        KeyCode::C => "c",
        KeyCode::D => "d",
        KeyCode::E => "e",
        KeyCode::F => "f",
        KeyCode::G => "g",
        KeyCode::H => "h",
        KeyCode::I => "i",
        KeyCode::J => "j",
        KeyCode::K => "k",
        KeyCode::L => "l",
        KeyCode::M => "m",
        KeyCode::N => "n",
        KeyCode::O => "o",
        KeyCode::P => "p",
        KeyCode::Q => "q",
        KeyCode::R => "r",
        KeyCode::S => "s",
        KeyCode::T => "t",
        KeyCode::U => "u",
        KeyCode::V => "v",
        KeyCode::W => "w",
        KeyCode::X => "x",
        KeyCode::Y => "y",
        KeyCode::Z => "z",
        KeyCode::Key0 => "0",
        KeyCode::Key1 => "1",
        KeyCode::Key2 => "2",
        KeyCode::Key3 => "3",
        KeyCode::Key4 => "4",
        KeyCode::Key5 => "5",
        KeyCode::Key6 => "6",
        KeyCode::Key7 => "7",
        KeyCode::Key8 => "8",
        KeyCode::Key9 => "9",
        KeyCode::Up => "arrowup",
        KeyCode::Down => "arrowdown",
        KeyCode::Left => "arrowleft",
        KeyCode::Right => "arrowright",
        KeyCode::Space => " ",
        KeyCode::Enter => "enter",
        KeyCode::Escape => "escape",
        KeyCode::Tab => "tab",
        KeyCode::Backspace => "backspace",
        KeyCode::LeftShift | KeyCode::RightShift => "shift",
        KeyCode::LeftControl | KeyCode::RightControl => "control",
        KeyCode::LeftAlt | KeyCode::RightAlt => "alt",
        _ => return None,
    };
    Some(name)
}

/// Names of the keys currently down, for reconciling the latch.
pub fn held_names(keys: impl IntoIterator<Item = KeyCode>) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = keys.into_iter().filter_map(key_name).collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Forwards this frame's press/release edges into the hub, then releases any
/// latched key the window no longer reports as down.
pub fn pump_keyboard(hub: &KeyHub) {
    for key in get_keys_pressed() {
        if let Some(name) = key_name(key) {
            hub.key_down(name);
        } else {
            log::trace!("dropping unnamed key {:?}", key);
        }
    }
    for key in get_keys_released() {
        if let Some(name) = key_name(key) {
            hub.key_up(name);
        }
    }
    hub.sync_held(&held_names(get_keys_down()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyflight_core::{ControlAction, ControlBindings};

    #[test]
    fn default_bindings_are_reachable_from_the_keyboard() {
        let bindings = ControlBindings::default();
        let keys = [
            (KeyCode::W, ControlAction::PitchUp),
            (KeyCode::S, ControlAction::PitchDown),
            (KeyCode::A, ControlAction::RollLeft),
            (KeyCode::D, ControlAction::RollRight),
            (KeyCode::Q, ControlAction::YawLeft),
            (KeyCode::E, ControlAction::YawRight),
            (KeyCode::Up, ControlAction::SpeedIncrease),
            (KeyCode::Down, ControlAction::SpeedDecrease),
        ];

        for (key, action) in keys {
            let name = key_name(key).unwrap();
            assert_eq!(bindings.action_for(name), Some(action), "{key:?}");
        }
    }

    #[test]
    fn modifier_pairs_share_a_name() {
        assert_eq!(key_name(KeyCode::LeftShift), key_name(KeyCode::RightShift));
        assert_eq!(key_name(KeyCode::LeftControl), Some("control"));
    }

    #[test]
    fn held_names_merge_modifier_pairs_and_skip_unnamed_keys() {
        let names = held_names([KeyCode::LeftShift, KeyCode::RightShift, KeyCode::W, KeyCode::F5]);
        assert_eq!(names, vec!["shift", "w"]);
    }

    #[test]
    fn released_keys_stop_steering_after_a_sync() {
        let hub = KeyHub::new();
        let subscription = hub.subscribe();
        hub.key_down("w");
        hub.key_down("arrowup");

        hub.sync_held(&held_names([KeyCode::Up]));

        let bindings = ControlBindings::default();
        let input = subscription.with_latch(|latch| bindings.sample(latch));
        assert!(!input.is_active(ControlAction::PitchUp));
        assert!(input.is_active(ControlAction::SpeedIncrease));
    }

    #[test]
    fn unnamed_keys_are_dropped() {
        assert_eq!(key_name(KeyCode::F5), None);
        assert_eq!(key_name(KeyCode::Unknown), None);
    }
}
