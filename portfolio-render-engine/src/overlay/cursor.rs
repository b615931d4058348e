use bevy::prelude::*;
use bevy::ui::FocusPolicy;
use bevy::window::PrimaryWindow;
use constants::cursor::*;

use crate::engine::scene::palette::hex_color;

/// Replaces the OS cursor with a dot and a ring that follow the pointer.
/// The ring widens and turns cyan over interactive UI.
pub struct CursorPlugin;

impl Plugin for CursorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorState>()
            .add_systems(Startup, (hide_system_cursor, spawn_cursor))
            .add_systems(
                Update,
                (track_cursor, detect_hover, apply_cursor_style).chain(),
            );
    }
}

/// Resolved look of the cursor for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorStyle {
    pub ring_diameter: f32,
    pub ring_color: Color,
    /// Dot size multiplier; the dot vanishes while hovering.
    pub dot_scale: f32,
}

impl CursorStyle {
    pub fn for_hover(hovering: bool) -> Self {
        Self::blended(if hovering { 1.0 } else { 0.0 })
    }

    /// Interpolate from idle (0) to hover (1).
    pub fn blended(t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let idle = Srgba::new(1.0, 1.0, 1.0, CURSOR_RING_IDLE_ALPHA);
        let hover = hex_color(CURSOR_HOVER_COLOR, 1.0).to_srgba();
        let lerp = |a: f32, b: f32| a + (b - a) * t;

        Self {
            ring_diameter: lerp(CURSOR_RING_SIZE, CURSOR_RING_HOVER_SIZE),
            ring_color: Color::srgba(
                lerp(idle.red, hover.red),
                lerp(idle.green, hover.green),
                lerp(idle.blue, hover.blue),
                lerp(idle.alpha, hover.alpha),
            ),
            dot_scale: 1.0 - t,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct CursorState {
    /// Last pointer position in logical pixels; `None` until the first move.
    pub position: Option<Vec2>,
    pub hovering: bool,
    blend: f32,
}

impl CursorState {
    /// Move the hover blend toward the current target.
    pub fn tick(&mut self, delta: f32) {
        let step = delta / CURSOR_TRANSITION_SECS;
        self.blend = if self.hovering {
            (self.blend + step).min(1.0)
        } else {
            (self.blend - step).max(0.0)
        };
    }

    pub fn style(&self) -> CursorStyle {
        CursorStyle::blended(self.blend)
    }
}

#[derive(Component)]
pub struct CursorDot;

#[derive(Component)]
pub struct CursorRing;

fn hide_system_cursor(mut windows: Query<&mut Window, With<PrimaryWindow>>) {
    for mut window in &mut windows {
        window.cursor_options.visible = false;
    }
}

fn cursor_node(size: f32) -> Node {
    Node {
        position_type: PositionType::Absolute,
        width: Val::Px(size),
        height: Val::Px(size),
        // Hidden until the pointer first moves over the window.
        display: Display::None,
        ..default()
    }
}

fn spawn_cursor(mut commands: Commands) {
    let idle = CursorStyle::for_hover(false);

    commands.spawn((
        Node {
            border: UiRect::all(Val::Px(CURSOR_RING_BORDER)),
            ..cursor_node(idle.ring_diameter)
        },
        BorderColor(idle.ring_color),
        BorderRadius::MAX,
        FocusPolicy::Pass,
        GlobalZIndex(i32::MAX),
        CursorRing,
    ));

    commands.spawn((
        cursor_node(CURSOR_DOT_SIZE),
        BackgroundColor(Color::WHITE),
        BorderRadius::MAX,
        FocusPolicy::Pass,
        GlobalZIndex(i32::MAX),
        CursorDot,
    ));
}

fn track_cursor(mut moved: EventReader<CursorMoved>, mut state: ResMut<CursorState>) {
    if let Some(event) = moved.read().last() {
        state.position = Some(event.position);
    }
}

fn detect_hover(interactions: Query<&Interaction>, time: Res<Time>, mut state: ResMut<CursorState>) {
    state.hovering = interactions
        .iter()
        .any(|interaction| matches!(interaction, Interaction::Hovered | Interaction::Pressed));
    state.tick(time.delta_secs());
}

fn place_centred(node: &mut Node, centre: Vec2, size: f32) {
    node.display = Display::Flex;
    node.left = Val::Px(centre.x - size / 2.0);
    node.top = Val::Px(centre.y - size / 2.0);
    node.width = Val::Px(size);
    node.height = Val::Px(size);
}

fn apply_cursor_style(
    state: Res<CursorState>,
    mut rings: Query<(&mut Node, &mut BorderColor), (With<CursorRing>, Without<CursorDot>)>,
    mut dots: Query<&mut Node, (With<CursorDot>, Without<CursorRing>)>,
) {
    let Some(position) = state.position else {
        return;
    };
    let style = state.style();

    for (mut node, mut border) in &mut rings {
        place_centred(&mut node, position, style.ring_diameter);
        border.0 = style.ring_color;
    }
    for mut node in &mut dots {
        place_centred(&mut node, position, CURSOR_DOT_SIZE * style.dot_scale);
    }
}
