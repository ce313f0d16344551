use common::{GameSettings, Gameplay, Point};
use eframe::egui;
use egui::{Color32, Painter, Pos2, Rect};

use crate::ui::sprites::{SpriteTextures, Sprites};

const FIELD_BACKGROUND: Color32 = Color32::from_rgb(245, 245, 240);
const CHECKER: Color32 = Color32::from_rgba_premultiplied(10, 10, 10, 26);
const HEAD: Color32 = Color32::from_rgb(100, 150, 100);
const HEAD_LOST: Color32 = Color32::from_rgb(255, 51, 51);
const TAIL: Color32 = Color32::from_rgb(100, 100, 150);
const TAIL_WITH_FRUIT: Color32 = Color32::from_rgb(0, 102, 204);

/// Paints a [`Gameplay`] snapshot. Holds nothing but the sprite cache.
pub struct Drawer {
    sprites: Sprites,
}

impl Drawer {
    pub fn new() -> Self {
        Self {
            sprites: Sprites::load(),
        }
    }

    pub fn draw(&mut self, ui: &mut egui::Ui, gameplay: &Gameplay) {
        let settings = *gameplay.settings();
        let side = settings.field_length() as f32;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, FIELD_BACKGROUND);
        draw_background(&painter, origin, &settings);
        draw_snake(&painter, origin, &settings, gameplay);

        let textures = self.sprites.textures(ui.ctx());
        draw_fruit(&painter, origin, &settings, gameplay, textures);
        draw_mongoose(&painter, origin, &settings, gameplay, textures);
    }
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen rectangle of a grid cell; borders sit between and around cells.
pub fn cell_rect(origin: Pos2, settings: &GameSettings, cell: Point) -> Rect {
    let pitch = (settings.cell_length + settings.border_thickness) as f32;
    let border = settings.border_thickness as f32;
    let min = egui::pos2(
        origin.x + border + cell.x as f32 * pitch,
        origin.y + border + cell.y as f32 * pitch,
    );
    Rect::from_min_size(min, egui::Vec2::splat(settings.cell_length as f32))
}

/// Checkerboard cells, the ones whose coordinates add up to an even number.
pub fn shaded_cells(field_size: u32) -> impl Iterator<Item = Point> {
    let size = field_size as i32;
    (0..size)
        .flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
        .filter(|cell| (cell.x + cell.y) % 2 == 0)
}

fn draw_background(painter: &Painter, origin: Pos2, settings: &GameSettings) {
    for cell in shaded_cells(settings.field_size) {
        painter.rect_filled(cell_rect(origin, settings, cell), 0.0, CHECKER);
    }
}

fn draw_snake(painter: &Painter, origin: Pos2, settings: &GameSettings, gameplay: &Gameplay) {
    let head_color = if gameplay.is_game_over() { HEAD_LOST } else { HEAD };
    painter.rect_filled(cell_rect(origin, settings, gameplay.head()), 2.0, head_color);

    for (index, segment) in gameplay.segments().enumerate() {
        let color = if gameplay.carries_fruit(index) {
            TAIL_WITH_FRUIT
        } else {
            TAIL
        };
        painter.rect_filled(cell_rect(origin, settings, segment), 2.0, color);
    }
}

fn draw_fruit(
    painter: &Painter,
    origin: Pos2,
    settings: &GameSettings,
    gameplay: &Gameplay,
    textures: &SpriteTextures,
) {
    if let Some(fruit) = gameplay.fruit() {
        blit(painter, textures.fruit(fruit.kind), cell_rect(origin, settings, fruit.position));
    }
}

fn draw_mongoose(
    painter: &Painter,
    origin: Pos2,
    settings: &GameSettings,
    gameplay: &Gameplay,
    textures: &SpriteTextures,
) {
    for &mongoose in gameplay.mongoose() {
        blit(painter, textures.mongoose(), cell_rect(origin, settings, mongoose));
    }
}

fn blit(painter: &Painter, texture: &egui::TextureHandle, rect: Rect) {
    painter.image(
        texture.id(),
        rect,
        Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );
}
