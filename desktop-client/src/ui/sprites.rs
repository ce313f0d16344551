use common::games::snake::FRUIT_KINDS;
use eframe::egui;

type Rgba = [u8; 4];

const FRUIT_COLORS: [Rgba; FRUIT_KINDS as usize] = [
    [220, 40, 40, 255],   // apple
    [245, 150, 30, 255],  // orange
    [245, 220, 50, 255],  // lemon
    [120, 200, 60, 255],  // lime
    [130, 50, 150, 255],  // plum
    [60, 90, 200, 255],   // blueberry
    [250, 160, 150, 255], // peach
];

const LEAF: Rgba = [40, 140, 50, 255];
const STEM: Rgba = [100, 70, 40, 255];
const FUR: Rgba = [150, 105, 60, 255];
const FUR_LIGHT: Rgba = [185, 145, 95, 255];
const FUR_DARK: Rgba = [95, 65, 35, 255];
const BLACK: Rgba = [20, 20, 20, 255];

#[derive(Clone)]
pub struct Sprite {
    pixels: Vec<u8>,
    size: usize,
    name: String,
}

impl Sprite {
    pub const PIXELS_PER_SIDE: usize = 32;

    /// Rasterizes `shader` over the unit square; `None` leaves a pixel transparent.
    fn paint(name: &str, shader: impl Fn(f32, f32) -> Option<Rgba>) -> Self {
        let size = Self::PIXELS_PER_SIDE;
        let mut pixels = Vec::with_capacity(size * size * 4);

        for y in 0..size {
            for x in 0..size {
                let u = (x as f32 + 0.5) / size as f32;
                let v = (y as f32 + 0.5) / size as f32;
                pixels.extend_from_slice(&shader(u, v).unwrap_or([0, 0, 0, 0]));
            }
        }

        Sprite {
            pixels,
            size,
            name: name.to_string(),
        }
    }

    pub fn fruit(kind: u8) -> Self {
        let body = FRUIT_COLORS[kind as usize % FRUIT_COLORS.len()];
        let highlight = lighten(body);

        Self::paint(&format!("fruit_{}", kind), |u, v| {
            if in_ellipse(u, v, (0.62, 0.17), (0.13, 0.06)) {
                Some(LEAF)
            } else if (0.47..0.53).contains(&u) && (0.08..0.3).contains(&v) {
                Some(STEM)
            } else if in_circle(u, v, (0.4, 0.47), 0.08) {
                Some(highlight)
            } else if in_circle(u, v, (0.5, 0.6), 0.36) {
                Some(body)
            } else {
                None
            }
        })
    }

    pub fn mongoose() -> Self {
        Self::paint("mongoose", |u, v| {
            if in_circle(u, v, (0.41, 0.33), 0.045)
                || in_circle(u, v, (0.59, 0.33), 0.045)
                || in_circle(u, v, (0.5, 0.44), 0.04)
            {
                Some(BLACK)
            } else if in_circle(u, v, (0.3, 0.16), 0.08) || in_circle(u, v, (0.7, 0.16), 0.08) {
                Some(FUR_DARK)
            } else if in_circle(u, v, (0.5, 0.35), 0.22) {
                Some(FUR_LIGHT)
            } else if in_ellipse(u, v, (0.5, 0.7), (0.36, 0.26)) {
                Some(FUR)
            } else {
                None
            }
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let offset = (y * self.size + x) * 4;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }

    pub fn to_egui_texture(&self, ctx: &egui::Context) -> egui::TextureHandle {
        let color_image =
            egui::ColorImage::from_rgba_unmultiplied([self.size, self.size], &self.pixels);
        ctx.load_texture(self.name(), color_image, egui::TextureOptions::LINEAR)
    }
}

/// Textures uploaded once per context and reused every frame.
pub struct Sprites {
    fruits: Vec<Sprite>,
    mongoose: Sprite,
    textures: Option<SpriteTextures>,
}

pub struct SpriteTextures {
    fruits: Vec<egui::TextureHandle>,
    mongoose: egui::TextureHandle,
}

impl SpriteTextures {
    pub fn fruit(&self, kind: u8) -> &egui::TextureHandle {
        &self.fruits[kind as usize % self.fruits.len()]
    }

    pub fn mongoose(&self) -> &egui::TextureHandle {
        &self.mongoose
    }
}

impl Sprites {
    pub fn load() -> Self {
        Self {
            fruits: (0..FRUIT_KINDS).map(Sprite::fruit).collect(),
            mongoose: Sprite::mongoose(),
            textures: None,
        }
    }

    pub fn textures(&mut self, ctx: &egui::Context) -> &SpriteTextures {
        self.textures.get_or_insert_with(|| SpriteTextures {
            fruits: self.fruits.iter().map(|s| s.to_egui_texture(ctx)).collect(),
            mongoose: self.mongoose.to_egui_texture(ctx),
        })
    }
}

fn in_circle(u: f32, v: f32, center: (f32, f32), radius: f32) -> bool {
    let (du, dv) = (u - center.0, v - center.1);
    du * du + dv * dv <= radius * radius
}

fn in_ellipse(u: f32, v: f32, center: (f32, f32), radii: (f32, f32)) -> bool {
    let (du, dv) = ((u - center.0) / radii.0, (v - center.1) / radii.1);
    du * du + dv * dv <= 1.0
}

fn lighten(color: Rgba) -> Rgba {
    let up = |c: u8| c.saturating_add((255 - c) / 2);
    [up(color[0]), up(color[1]), up(color[2]), color[3]]
}
