use bevy::prelude::*;

use crate::engine::core::route::Route;

const ROUTE_KEYS: [KeyCode; 5] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
];

/// Route selected by a number key, in `Route::ALL` order.
pub fn route_for_key(key: KeyCode) -> Option<Route> {
    ROUTE_KEYS
        .iter()
        .position(|candidate| *candidate == key)
        .map(|index| Route::ALL[index])
}

/// Number keys 1-5 switch pages in native builds.
pub fn keyboard_navigation(
    keyboard: Res<ButtonInput<KeyCode>>,
    route: Res<State<Route>>,
    mut next_route: ResMut<NextState<Route>>,
) {
    let Some(target) = keyboard.get_just_pressed().find_map(|key| route_for_key(*key)) else {
        return;
    };

    if target != *route.get() {
        info!("Navigating {} -> {}", route.get().path(), target.path());
        next_route.set(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_map_to_routes() {
        assert_eq!(route_for_key(KeyCode::Digit1), Some(Route::Hero));
        assert_eq!(route_for_key(KeyCode::Digit4), Some(Route::Contact));
        assert_eq!(route_for_key(KeyCode::Digit5), Some(Route::Archive));
        assert_eq!(route_for_key(KeyCode::Digit6), None);
        assert_eq!(route_for_key(KeyCode::KeyA), None);
    }
}
