// Placement HUD - static help line and live cursor status
use bevy::prelude::*;

use crate::placement::Placer;
use crate::units::Loadout;

#[derive(Component)]
pub struct PlacerStatusUI;

pub fn spawn_placement_ui(commands: &mut Commands) {
    // Controls summary
    commands.spawn((
        Text::new(
            "WEDSAQ: move cursor | Z/X: rotate | C: mirror | 1-4: select unit, again: place\n\
             Arrows: pan camera | Drag: rotate | Scroll: zoom",
        ),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));

    // Live cursor status
    commands.spawn((
        Text::new("No unit selected"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::srgb(0.4, 0.8, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(58.0),
            left: Val::Px(10.0),
            ..default()
        },
        PlacerStatusUI,
    ));
}

/// Update the status line whenever the placer changes.
pub fn update_placement_ui(
    placer: Res<Placer>,
    loadout: Res<Loadout>,
    mut query: Query<&mut Text, With<PlacerStatusUI>>,
) {
    if !placer.is_changed() {
        return;
    }
    for mut text in query.iter_mut() {
        *text = match placer.selected_kind(&loadout) {
            Some(kind) => Text::new(format!(
                "{} at ({}, {}) facing {}{}",
                kind.label(),
                placer.tile.q,
                placer.tile.r,
                placer.facing.label(),
                if placer.mirrored { " | mirrored" } else { "" }
            )),
            None => Text::new("No unit selected"),
        };
    }
}
