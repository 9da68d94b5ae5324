//! Label host backed by Bevy `Commands`: each label is a `Text2dBundle`
//! entity, parented under the grid's entity.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use grid_core::{LabelHost, SceneHost};
use serde::{Deserialize, Serialize};

/// Marker for text entities created by a grid visualizer.
#[derive(Component, Debug, Default)]
pub struct GridLabel;

/// Appearance of grid labels.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    /// Font size in points before scaling
    pub font_size: f32,
    /// sRGBA color, components in 0..=1
    pub color: [f32; 4],
    /// Uniform scale applied to the label transform
    pub scale: f32,
    /// Draw depth relative to the parent
    pub z: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: 40.0,
            color: [1.0, 1.0, 1.0, 1.0],
            scale: 0.5,
            z: 1.0,
        }
    }
}

impl LabelStyle {
    pub fn color(&self) -> Color {
        let [r, g, b, a] = self.color;
        Color::srgba(r, g, b, a)
    }

    fn text(&self, value: &str) -> Text {
        Text::from_section(
            value,
            TextStyle {
                font_size: self.font_size,
                color: self.color(),
                ..default()
            },
        )
        .with_justify(JustifyText::Center)
    }

    fn transform(&self, position: Vec2) -> Transform {
        Transform::from_translation(position.extend(self.z)).with_scale(Vec3::splat(self.scale))
    }
}

/// [`LabelHost`] that queues entity commands.
///
/// Positions are local to the parent entity when one is given.
pub struct BevyLabelHost<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    style: &'a LabelStyle,
}

impl<'a, 'w, 's> BevyLabelHost<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, style: &'a LabelStyle) -> Self {
        Self { commands, style }
    }
}

impl SceneHost for BevyLabelHost<'_, '_, '_> {
    type Scope = Entity;
}

impl LabelHost for BevyLabelHost<'_, '_, '_> {
    type Label = Entity;

    fn create_label(&mut self, text: &str, parent: Option<Entity>, position: Vec2) -> Entity {
        let mut label = self.commands.spawn((
            Text2dBundle {
                text: self.style.text(text),
                text_anchor: Anchor::Center,
                transform: self.style.transform(position),
                ..default()
            },
            GridLabel,
        ));
        if let Some(parent) = parent {
            label.set_parent(parent);
        }
        label.id()
    }

    fn set_label_text(&mut self, label: Entity, text: &str) {
        match self.commands.get_entity(label) {
            Some(mut entity) => {
                entity.try_insert(self.style.text(text));
            }
            None => tracing::warn!("Label {:?} no longer exists, text not updated", label),
        }
    }

    fn set_label_position(&mut self, label: Entity, position: Vec2) {
        match self.commands.get_entity(label) {
            Some(mut entity) => {
                entity.try_insert(self.style.transform(position));
            }
            None => tracing::warn!("Label {:?} no longer exists, not moved", label),
        }
    }

    fn remove_label(&mut self, label: Entity) {
        if let Some(entity) = self.commands.get_entity(label) {
            entity.despawn_recursive();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_style_default() {
        let style = LabelStyle::default();

        assert_eq!(style.font_size, 40.0);
        assert_eq!(style.color(), Color::srgba(1.0, 1.0, 1.0, 1.0));
        assert_eq!(style.z, 1.0);
    }

    #[test]
    fn test_label_transform() {
        let style = LabelStyle {
            scale: 0.25,
            z: 3.0,
            ..LabelStyle::default()
        };
        let transform = style.transform(Vec2::new(10.0, -4.0));

        assert_eq!(transform.translation, Vec3::new(10.0, -4.0, 3.0));
        assert_eq!(transform.scale, Vec3::splat(0.25));
    }

    #[test]
    fn test_label_text() {
        let style = LabelStyle::default();
        let text = style.text("42");

        assert_eq!(text.sections.len(), 1);
        assert_eq!(text.sections[0].value, "42");
        assert_eq!(text.sections[0].style.font_size, 40.0);
        assert_eq!(text.justify, JustifyText::Center);
    }
}
