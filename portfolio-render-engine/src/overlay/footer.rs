use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use constants::crt_signal::{FOOTER_NOTICE, FOOTER_TAGLINE, FOOTER_TITLE};
use constants::links::FOOTER_LINKS;
use constants::render_settings::{CRT_LAYER_POOL, FOOTER_HEIGHT_PERCENT};
use serde_json::json;

use super::crt_signal::{CrtOp, CrtSignal};
use crate::engine::core::route::Route;
use crate::rpc::web_rpc::WebRpcInterface;

/// Footer strip along the bottom of every page, with a CRT signal behind its text.
pub struct FooterPlugin;

impl Plugin for FooterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_footer)
            .add_systems(Update, (resize_footer, animate_footer).chain())
            .add_systems(Update, (follow_footer_links, highlight_footer_links));
    }
}

#[derive(Resource)]
pub struct FooterSignal {
    signal: CrtSignal,
    ops: Vec<CrtOp>,
}

#[derive(Component)]
pub struct FooterStrip;

/// Pooled node drawing the op at this index, hidden when unused.
#[derive(Component)]
pub struct CrtLayer(pub usize);

/// Button for the footer link at this index of `FOOTER_LINKS`.
#[derive(Component)]
pub struct FooterLink(pub usize);

#[derive(Component)]
pub struct FooterLinkLabel(pub usize);

const LINK_IDLE: Color = Color::srgb(0.42, 0.45, 0.5);

/// Where a footer link leads: an in-app route or an address the host opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Route(Route),
    External(&'static str),
}

pub fn link_target(url: &'static str) -> LinkTarget {
    match Route::from_path(url) {
        Some(route) => LinkTarget::Route(route),
        None => LinkTarget::External(url),
    }
}

fn footer_size(window_width: f32, window_height: f32) -> Vec2 {
    Vec2::new(window_width, window_height * FOOTER_HEIGHT_PERCENT / 100.0)
}

fn spawn_footer(mut commands: Commands, windows: Query<&Window, With<PrimaryWindow>>) {
    let size = windows
        .single()
        .map(|window| footer_size(window.width(), window.height()))
        .unwrap_or(Vec2::ZERO);

    commands.insert_resource(FooterSignal {
        signal: CrtSignal::new(size, &mut rand::thread_rng()),
        ops: Vec::with_capacity(CRT_LAYER_POOL),
    });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                bottom: Val::Px(0.0),
                width: Val::Percent(100.0),
                height: Val::Percent(FOOTER_HEIGHT_PERCENT),
                overflow: Overflow::clip(),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            FooterStrip,
        ))
        .with_children(|footer| {
            for index in 0..CRT_LAYER_POOL {
                footer.spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        display: Display::None,
                        ..default()
                    },
                    BackgroundColor(Color::NONE),
                    CrtLayer(index),
                ));
            }

            footer
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(8.0),
                        ..default()
                    },
                    ZIndex(1),
                ))
                .with_children(|text| {
                    text.spawn((
                        Text::new(FOOTER_TITLE),
                        TextFont {
                            font_size: 48.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    ));
                    text.spawn((
                        Text::new(FOOTER_TAGLINE),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.0, 1.0, 1.0)),
                    ));
                    text.spawn(Node {
                        column_gap: Val::Px(24.0),
                        flex_wrap: FlexWrap::Wrap,
                        justify_content: JustifyContent::Center,
                        ..default()
                    })
                    .with_children(|row| {
                        for (index, link) in FOOTER_LINKS.iter().enumerate() {
                            row.spawn((Button, FooterLink(index))).with_child((
                                Text::new(link.label),
                                TextFont {
                                    font_size: 12.0,
                                    ..default()
                                },
                                TextColor(LINK_IDLE),
                                FooterLinkLabel(index),
                            ));
                        }
                    });
                    text.spawn((
                        Text::new(FOOTER_NOTICE),
                        TextFont {
                            font_size: 12.0,
                            ..default()
                        },
                        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.5)),
                    ));
                });
        });
}

fn resize_footer(mut resized: EventReader<WindowResized>, footer: Option<ResMut<FooterSignal>>) {
    let Some(mut footer) = footer else {
        return;
    };

    if let Some(event) = resized.read().last() {
        footer.signal.resize(footer_size(event.width, event.height));
    }
}

fn animate_footer(
    footer: Option<ResMut<FooterSignal>>,
    mut layers: Query<(&CrtLayer, &mut Node, &mut BackgroundColor)>,
) {
    let Some(mut footer) = footer else {
        return;
    };
    let footer = &mut *footer;
    footer.signal.frame(&mut rand::thread_rng(), &mut footer.ops);

    let size = footer.signal.size();
    for (layer, mut node, mut background) in &mut layers {
        match footer.ops.get(layer.0) {
            Some(op) => {
                let (rect, color) = op.layer(size);
                node.display = Display::Flex;
                node.left = Val::Px(rect.min.x);
                node.top = Val::Px(rect.min.y);
                node.width = Val::Px(rect.width());
                node.height = Val::Px(rect.height());
                background.0 = color;
            }
            None => node.display = Display::None,
        }
    }
}

fn follow_footer_links(
    links: Query<(&Interaction, &FooterLink), Changed<Interaction>>,
    mut next_route: ResMut<NextState<Route>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for (interaction, link) in &links {
        if *interaction != Interaction::Pressed {
            continue;
        }
        let Some(entry) = FOOTER_LINKS.get(link.0) else {
            continue;
        };
        match link_target(entry.url) {
            LinkTarget::Route(route) => next_route.set(route),
            LinkTarget::External(url) => {
                rpc_interface.send_notification("open_link", json!({ "url": url }));
            }
        }
    }
}

fn highlight_footer_links(
    links: Query<(&Interaction, &FooterLink), Changed<Interaction>>,
    mut labels: Query<(&FooterLinkLabel, &mut TextColor)>,
) {
    for (interaction, link) in &links {
        let color = match interaction {
            Interaction::None => LINK_IDLE,
            Interaction::Hovered | Interaction::Pressed => Color::WHITE,
        };
        for (label, mut text_color) in &mut labels {
            if label.0 == link.0 {
                text_color.0 = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_covers_bottom_share_of_window() {
        assert_eq!(footer_size(1000.0, 800.0), Vec2::new(1000.0, 320.0));
    }

    #[test]
    fn footer_links_split_into_routes_and_external() {
        assert_eq!(link_target("/contact"), LinkTarget::Route(Route::Contact));
        assert_eq!(link_target("/archive"), LinkTarget::Route(Route::Archive));
        assert!(matches!(
            link_target(FOOTER_LINKS[2].url),
            LinkTarget::External(url) if url.starts_with("https://")
        ));
    }

    #[test]
    fn pressing_source_link_asks_host_to_open_it() {
        let mut app = App::new();
        app.init_resource::<WebRpcInterface>()
            .init_resource::<NextState<Route>>()
            .add_systems(Update, follow_footer_links);
        app.world_mut().spawn((Interaction::Pressed, FooterLink(2)));
        app.world_mut().spawn((Interaction::Hovered, FooterLink(0)));

        app.update();

        let notifications = app.world().resource::<WebRpcInterface>().pending_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].method, "open_link");
        assert_eq!(notifications[0].params["url"], FOOTER_LINKS[2].url);
        assert!(matches!(
            app.world().resource::<NextState<Route>>(),
            NextState::Unchanged
        ));
    }

    #[test]
    fn unused_layers_stay_hidden() {
        let mut app = App::new();
        app.insert_resource(FooterSignal {
            signal: CrtSignal::new(Vec2::new(200.0, 80.0), &mut rand::thread_rng()),
            ops: Vec::new(),
        })
        .add_systems(Update, animate_footer);
        let last = app
            .world_mut()
            .spawn((
                Node::default(),
                BackgroundColor(Color::NONE),
                CrtLayer(CRT_LAYER_POOL - 1),
            ))
            .id();

        app.update();

        let node = app.world().get::<Node>(last).unwrap();
        assert_eq!(node.display, Display::None);
    }
}
