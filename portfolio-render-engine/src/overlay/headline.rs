use std::time::Duration;

use bevy::prelude::*;
use constants::headline::{
    HEADLINE_CARET, HEADLINE_PHRASES, HEADLINE_TAGLINE, TYPEWRITER_CHAR_INTERVAL_MS,
    TYPEWRITER_HOLD_TICKS,
};

use super::typewriter::Typewriter;
use crate::engine::core::route::Route;
use crate::rpc::web_rpc::WebRpcInterface;

/// Landing page headline. Restarts from the first phrase on every visit.
pub struct HeadlinePlugin;

impl Plugin for HeadlinePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeadlineTypewriter>()
            .add_systems(OnEnter(Route::Hero), spawn_headline)
            .add_systems(OnExit(Route::Hero), despawn_page_content)
            .add_systems(Update, tick_headline.run_if(in_state(Route::Hero)));
    }
}

#[derive(Resource)]
pub struct HeadlineTypewriter {
    pub typewriter: Typewriter,
    pub timer: Timer,
}

impl Default for HeadlineTypewriter {
    fn default() -> Self {
        Self {
            typewriter: Typewriter::new(HEADLINE_PHRASES.iter().copied(), TYPEWRITER_HOLD_TICKS),
            timer: Timer::new(
                Duration::from_millis(TYPEWRITER_CHAR_INTERVAL_MS),
                TimerMode::Repeating,
            ),
        }
    }
}

/// UI owned by the current page; removed when the route is left.
#[derive(Component)]
pub struct PageContent;

#[derive(Component)]
pub struct HeadlineText;

#[derive(Component)]
pub struct HeadlineCaret;

fn spawn_headline(mut commands: Commands, mut headline: ResMut<HeadlineTypewriter>) {
    *headline = HeadlineTypewriter::default();

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(60.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            PageContent,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Text::new(headline.typewriter.text()),
                    TextFont {
                        font_size: 72.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    HeadlineText,
                ))
                .with_child((
                    TextSpan::new(HEADLINE_CARET),
                    TextFont {
                        font_size: 72.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.0, 1.0, 1.0)),
                    HeadlineCaret,
                ));

            parent.spawn((
                Text::new(HEADLINE_TAGLINE),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
                TextLayout::new_with_justify(JustifyText::Center),
                Node {
                    max_width: Val::Px(640.0),
                    ..default()
                },
            ));
        });
}

fn tick_headline(
    time: Res<Time>,
    mut headline: ResMut<HeadlineTypewriter>,
    mut texts: Query<&mut Text, With<HeadlineText>>,
    mut carets: Query<&mut TextColor, With<HeadlineCaret>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let headline = &mut *headline;
    headline.timer.tick(time.delta());

    let mut changed = false;
    for _ in 0..headline.timer.times_finished_this_tick() {
        changed |= headline.typewriter.step();
    }

    let caret_alpha = if headline.typewriter.is_typing() { 1.0 } else { 0.0 };
    for mut color in &mut carets {
        color.0.set_alpha(caret_alpha);
    }

    if !changed {
        return;
    }

    let text = headline.typewriter.text();
    for mut headline_text in &mut texts {
        headline_text.0 = text.to_string();
    }
    rpc_interface.send_notification(
        "headline_update",
        serde_json::json!({
            "text": text,
            "typing": headline.typewriter.is_typing(),
        }),
    );
}

pub fn despawn_page_content(mut commands: Commands, content: Query<Entity, With<PageContent>>) {
    for entity in &content {
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_starts_blank_on_first_phrase() {
        let headline = HeadlineTypewriter::default();
        assert_eq!(headline.typewriter.text(), "");
        assert_eq!(headline.typewriter.phrase_index(), 0);
        assert_eq!(headline.timer.duration(), Duration::from_millis(100));
    }

    #[test]
    fn tick_types_and_notifies() {
        let mut app = App::new();
        app.init_resource::<HeadlineTypewriter>()
            .init_resource::<WebRpcInterface>()
            .init_resource::<Time>()
            .add_systems(Update, tick_headline);
        let text = app
            .world_mut()
            .spawn((Text::new(""), HeadlineText))
            .id();

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_millis(300));
        app.update();

        assert_eq!(app.world().get::<Text>(text).map(|t| t.0.as_str()), Some("COD"));
        let notifications = app.world().resource::<WebRpcInterface>().pending_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].method, "headline_update");
        assert_eq!(notifications[0].params["text"], "COD");
    }
}
