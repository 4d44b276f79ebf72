use super::geometry::{Rgb, Vec3};

pub const BOARD_SIZE: u8 = 8;

/// Shifts grid coordinates so the board is centred on the origin.
const BOARD_OFFSET: f64 = 3.5;

/// Markers hover above the cells at this height.
const MARKER_LIFT: f64 = 0.5;

pub const YAW_SPEED: f64 = 0.3;
pub const YAW_AMPLITUDE: f64 = 0.3;
pub const PITCH: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

impl Shade {
    pub fn of(x: u8, z: u8) -> Self {
        if (x + z) % 2 == 0 {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn material(self) -> Material {
        match self {
            Self::Light => LIGHT_SQUARE,
            Self::Dark => DARK_SQUARE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub metalness: f64,
    pub roughness: f64,
    pub emissive: Rgb,
    pub emissive_intensity: f64,
}

const LIGHT_SQUARE: Material = Material {
    color: Rgb::hex(0xf0d9b5),
    metalness: 0.3,
    roughness: 0.7,
    emissive: Rgb::hex(0x000000),
    emissive_intensity: 0.0,
};

const DARK_SQUARE: Material = Material {
    color: Rgb::hex(0xb58863),
    ..LIGHT_SQUARE
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxGeometry {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

pub const CELL_GEOMETRY: BoxGeometry = BoxGeometry {
    width: 0.95,
    height: 0.1,
    depth: 0.95,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderGeometry {
    pub radius_top: f64,
    pub radius_bottom: f64,
    pub height: f64,
    pub segments: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: u8,
    pub z: u8,
    pub shade: Shade,
}

impl Cell {
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            f64::from(self.x) - BOARD_OFFSET,
            0.0,
            f64::from(self.z) - BOARD_OFFSET,
        )
    }

    pub fn material(&self) -> Material {
        self.shade.material()
    }
}

/// Decorative stand-in for a chess piece.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub x: u8,
    pub z: u8,
    pub height: f64,
    pub color: Rgb,
}

const DARK_MARKER: Rgb = Rgb::hex(0x1a1a1a);
const LIGHT_MARKER: Rgb = Rgb::hex(0xe8e8e8);

const fn marker(x: u8, z: u8, height: f64, color: Rgb) -> Marker {
    Marker { x, z, height, color }
}

/// A stylised back rank for each side: outer, inner and centre markers only.
pub const MARKERS: [Marker; 10] = [
    marker(0, 0, 0.8, DARK_MARKER),
    marker(7, 0, 0.8, DARK_MARKER),
    marker(1, 0, 0.7, DARK_MARKER),
    marker(6, 0, 0.7, DARK_MARKER),
    marker(3, 0, 1.0, DARK_MARKER),
    marker(0, 7, 0.8, LIGHT_MARKER),
    marker(7, 7, 0.8, LIGHT_MARKER),
    marker(1, 7, 0.7, LIGHT_MARKER),
    marker(6, 7, 0.7, LIGHT_MARKER),
    marker(3, 7, 1.0, LIGHT_MARKER),
];

impl Marker {
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            f64::from(self.x) - BOARD_OFFSET,
            MARKER_LIFT,
            f64::from(self.z) - BOARD_OFFSET,
        )
    }

    pub fn geometry(&self) -> CylinderGeometry {
        CylinderGeometry {
            radius_top: 0.15,
            radius_bottom: 0.25,
            height: self.height,
            segments: 16,
        }
    }

    pub fn material(&self) -> Material {
        Material {
            color: self.color,
            metalness: 0.8,
            roughness: 0.2,
            emissive: self.color,
            emissive_intensity: 0.2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient {
        color: Rgb,
        intensity: f64,
    },
    Point {
        position: Vec3,
        color: Rgb,
        intensity: f64,
    },
    /// Points at the origin.
    Spot {
        position: Vec3,
        color: Rgb,
        intensity: f64,
        angle: f64,
        penumbra: f64,
    },
}

pub const LIGHTS: [Light; 4] = [
    Light::Ambient {
        color: Rgb::WHITE,
        intensity: 0.5,
    },
    Light::Point {
        position: Vec3::new(10.0, 10.0, 10.0),
        color: Rgb::hex(0x6366f1),
        intensity: 1.0,
    },
    Light::Point {
        position: Vec3::new(-10.0, 10.0, -10.0),
        color: Rgb::hex(0x8b5cf6),
        intensity: 1.0,
    },
    Light::Spot {
        position: Vec3::new(0.0, 10.0, 0.0),
        color: Rgb::WHITE,
        intensity: 1.0,
        angle: 0.6,
        penumbra: 1.0,
    },
];

/// Orientation of the whole board group. Applied yaw first, then pitch.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub yaw: f64,
    pub pitch: f64,
}

impl Rotation {
    pub fn apply(&self, v: Vec3) -> Vec3 {
        v.rotate_y(self.yaw).rotate_x(self.pitch)
    }
}

/// Idle sway of the board for a given clock value.
pub fn board_rotation(elapsed: f64) -> Rotation {
    Rotation {
        yaw: (elapsed * YAW_SPEED).sin() * YAW_AMPLITUDE,
        pitch: PITCH,
    }
}

pub fn cells() -> Vec<Cell> {
    (0..BOARD_SIZE)
        .flat_map(|x| {
            (0..BOARD_SIZE).map(move |z| Cell {
                x,
                z,
                shade: Shade::of(x, z),
            })
        })
        .collect()
}

/// Everything that makes up the board: cells, markers and the lights
/// that travel with them.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardScene {
    pub cells: Vec<Cell>,
    pub markers: &'static [Marker],
    pub lights: &'static [Light],
}

/// Handle to the rotating group, returned by [`BoardScene::build`] and
/// updated once per frame by whoever drives the render loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardHandle {
    rotation: Rotation,
}

impl BoardHandle {
    pub fn on_frame(&mut self, elapsed: f64) {
        self.rotation = board_rotation(elapsed);
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

impl BoardScene {
    pub fn build() -> (Self, BoardHandle) {
        let scene = Self {
            cells: cells(),
            markers: &MARKERS,
            lights: &LIGHTS,
        };
        let handle = BoardHandle {
            rotation: board_rotation(0.0),
        };
        (scene, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::f64::consts::PI;

    #[test]
    fn sixty_four_unique_cells_split_evenly() {
        let cells = cells();
        assert_eq!(cells.len(), 64);

        let unique: HashSet<(u8, u8)> = cells.iter().map(|c| (c.x, c.z)).collect();
        assert_eq!(unique.len(), 64);

        let light = cells.iter().filter(|c| c.shade == Shade::Light).count();
        assert_eq!(light, 32);
        assert_eq!(cells.len() - light, 32);

        for cell in &cells {
            let even = (cell.x + cell.z) % 2 == 0;
            assert_eq!(cell.shade == Shade::Light, even);
        }
    }

    #[test]
    fn cells_are_centred_on_origin() {
        let cells = cells();
        let first = cells.first().unwrap().position();
        let last = cells.last().unwrap().position();
        assert_eq!(first, Vec3::new(-3.5, 0.0, -3.5));
        assert_eq!(last, Vec3::new(3.5, 0.0, 3.5));
        assert_eq!(cells[0].material().color, Rgb::hex(0xf0d9b5));
        assert_eq!(cells[1].material().color, Rgb::hex(0xb58863));
    }

    #[test]
    fn markers_are_fixed() {
        let (a, _) = BoardScene::build();
        let (b, _) = BoardScene::build();
        assert_eq!(a.markers.len(), 10);
        assert_eq!(a.markers, b.markers);

        let dark = a.markers.iter().filter(|m| m.z == 0).count();
        assert_eq!(dark, 5);
        for (d, l) in a.markers[..5].iter().zip(&a.markers[5..]) {
            assert_eq!(d.x, l.x);
            assert_eq!(d.height, l.height);
        }
        assert_eq!(a.markers[4].position(), Vec3::new(-0.5, 0.5, -3.5));
    }

    #[test]
    fn rotation_starts_at_rest_and_repeats() {
        assert_eq!(board_rotation(0.0).yaw, 0.0);
        let period = 2.0 * PI / YAW_SPEED;
        for t in [0.0, 1.3, 7.5, 19.0, 123.4] {
            let a = board_rotation(t).yaw;
            let b = board_rotation(t + period).yaw;
            assert!((a - b).abs() < 1e-9, "t = {}", t);
        }
    }

    #[test]
    fn yaw_is_bounded_and_pitch_is_fixed() {
        let mut t = 0.0;
        while t < 60.0 {
            let rotation = board_rotation(t);
            assert!(rotation.yaw.abs() <= YAW_AMPLITUDE);
            assert_eq!(rotation.pitch, 0.2);
            t += 0.05;
        }
    }

    #[test]
    fn restarting_the_clock_reproduces_the_first_frame() {
        let (scene_a, mut handle_a) = BoardScene::build();
        handle_a.on_frame(42.0);
        handle_a.on_frame(0.0);

        let (scene_b, mut handle_b) = BoardScene::build();
        handle_b.on_frame(0.0);

        assert_eq!(scene_a, scene_b);
        assert_eq!(handle_a.rotation(), handle_b.rotation());
        assert_eq!(handle_b.rotation(), Rotation { yaw: 0.0, pitch: PITCH });
    }
}
