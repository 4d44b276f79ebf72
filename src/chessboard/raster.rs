//! Flattens the board scene into shaded screen-space polygons.
//!
//! Faces are back-face culled, shaded once per face, and ordered with the
//! painter's algorithm: board first, then markers, each layer far to near.
//! Markers always stand on top of the board, so the two layers never need
//! to interleave.

use std::f64::consts::TAU;

use super::camera::View;
use super::geometry::{Rgb, Vec3};
use super::scene::{BoardScene, BoxGeometry, Light, Material, Rotation, CELL_GEOMETRY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Board,
    Markers,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub points: Vec<[f64; 2]>,
    pub fill: Rgb,
    pub depth: f64,
    pub layer: Layer,
}

/// A planar face in board space, before rotation.
struct Face {
    vertices: Vec<Vec3>,
    normal: Vec3,
}

fn box_faces(centre: Vec3, size: BoxGeometry) -> Vec<Face> {
    let hx = size.width / 2.0;
    let hy = size.height / 2.0;
    let hz = size.depth / 2.0;
    let corner = |sx: f64, sy: f64, sz: f64| centre + Vec3::new(sx * hx, sy * hy, sz * hz);

    vec![
        Face {
            vertices: vec![corner(-1.0, 1.0, -1.0), corner(1.0, 1.0, -1.0), corner(1.0, 1.0, 1.0), corner(-1.0, 1.0, 1.0)],
            normal: Vec3::new(0.0, 1.0, 0.0),
        },
        Face {
            vertices: vec![corner(-1.0, -1.0, -1.0), corner(-1.0, -1.0, 1.0), corner(1.0, -1.0, 1.0), corner(1.0, -1.0, -1.0)],
            normal: Vec3::new(0.0, -1.0, 0.0),
        },
        Face {
            vertices: vec![corner(-1.0, -1.0, 1.0), corner(-1.0, 1.0, 1.0), corner(1.0, 1.0, 1.0), corner(1.0, -1.0, 1.0)],
            normal: Vec3::new(0.0, 0.0, 1.0),
        },
        Face {
            vertices: vec![corner(-1.0, -1.0, -1.0), corner(1.0, -1.0, -1.0), corner(1.0, 1.0, -1.0), corner(-1.0, 1.0, -1.0)],
            normal: Vec3::new(0.0, 0.0, -1.0),
        },
        Face {
            vertices: vec![corner(1.0, -1.0, -1.0), corner(1.0, -1.0, 1.0), corner(1.0, 1.0, 1.0), corner(1.0, 1.0, -1.0)],
            normal: Vec3::new(1.0, 0.0, 0.0),
        },
        Face {
            vertices: vec![corner(-1.0, -1.0, -1.0), corner(-1.0, 1.0, -1.0), corner(-1.0, 1.0, 1.0), corner(-1.0, -1.0, 1.0)],
            normal: Vec3::new(-1.0, 0.0, 0.0),
        },
    ]
}

fn cylinder_faces(centre: Vec3, radius_top: f64, radius_bottom: f64, height: f64, segments: usize) -> Vec<Face> {
    let half = height / 2.0;
    let ring = |radius: f64, y: f64, i: usize| {
        let angle = TAU * i as f64 / segments as f64;
        centre + Vec3::new(radius * angle.sin(), y, radius * angle.cos())
    };

    let mut faces = Vec::with_capacity(segments + 2);
    for i in 0..segments {
        let mid = TAU * (i as f64 + 0.5) / segments as f64;
        // Slanted outward normal of a frustum side.
        let normal = Vec3::new(mid.sin() * height, radius_bottom - radius_top, mid.cos() * height).normalize();
        faces.push(Face {
            vertices: vec![
                ring(radius_bottom, -half, i),
                ring(radius_bottom, -half, i + 1),
                ring(radius_top, half, i + 1),
                ring(radius_top, half, i),
            ],
            normal,
        });
    }
    faces.push(Face {
        vertices: (0..segments).map(|i| ring(radius_top, half, i)).collect(),
        normal: Vec3::UP,
    });
    faces.push(Face {
        vertices: (0..segments).rev().map(|i| ring(radius_bottom, -half, i)).collect(),
        normal: Vec3::new(0.0, -1.0, 0.0),
    });
    faces
}

fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 <= edge0 {
        return if x >= edge0 { 1.0 } else { 0.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Lambert diffuse plus a Blinn-Phong highlight whose sharpness follows the
/// material roughness. Lights are part of the board group and turn with it.
fn shade(material: &Material, point: Vec3, normal: Vec3, eye: Vec3, lights: &[Light], rotation: Rotation) -> Rgb {
    let base = material.color.to_unit();
    let to_eye = (eye - point).normalize();
    let diffuse_weight = 1.0 - material.metalness * 0.5;
    let specular_weight = 0.04 + material.metalness * 0.6;
    let shininess = 2.0 + (1.0 - material.roughness) * 62.0;

    let direct = |color: Rgb, intensity: f64, to_light: Vec3| -> [f64; 3] {
        let ndl = normal.dot(to_light).max(0.0);
        if ndl == 0.0 {
            return [0.0; 3];
        }
        let half = (to_light + to_eye).normalize();
        let spec = normal.dot(half).max(0.0).powf(shininess) * specular_weight;
        let light = color.to_unit();
        let mut out = [0.0; 3];
        for c in 0..3 {
            out[c] = intensity * light[c] * (base[c] * ndl * diffuse_weight + spec);
        }
        out
    };

    let mut acc = [0.0f64; 3];
    let mut add = |contribution: [f64; 3]| {
        for c in 0..3 {
            acc[c] += contribution[c];
        }
    };

    for light in lights {
        match *light {
            Light::Ambient { color, intensity } => {
                let light = color.to_unit();
                add([
                    base[0] * light[0] * intensity,
                    base[1] * light[1] * intensity,
                    base[2] * light[2] * intensity,
                ]);
            }
            Light::Point { position, color, intensity } => {
                let position = rotation.apply(position);
                add(direct(color, intensity, (position - point).normalize()));
            }
            Light::Spot { position, color, intensity, angle, penumbra } => {
                let position = rotation.apply(position);
                let axis = (rotation.apply(Vec3::ZERO) - position).normalize();
                let cos_theta = (point - position).normalize().dot(axis);
                let cone = smoothstep(angle.cos(), (angle * (1.0 - penumbra)).cos(), cos_theta);
                if cone > 0.0 {
                    add(direct(color, intensity * cone, (position - point).normalize()));
                }
            }
        }
    }

    let emissive = material.emissive.to_unit();
    add(emissive.map(|c| c * material.emissive_intensity));
    Rgb::from_unit(acc)
}

fn centroid(points: &[Vec3]) -> Vec3 {
    let sum = points.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
    sum * (1.0 / points.len().max(1) as f64)
}

fn emit(out: &mut Vec<Polygon>, faces: Vec<Face>, material: &Material, layer: Layer, scene: &BoardScene, rotation: Rotation, view: &View) {
    for face in faces {
        let vertices: Vec<Vec3> = face.vertices.iter().map(|v| rotation.apply(*v)).collect();
        let normal = rotation.apply(face.normal);
        let centre = centroid(&vertices);
        if normal.dot(view.eye - centre) <= 0.0 {
            continue;
        }

        let projected: Option<Vec<_>> = vertices.iter().map(|v| view.project(*v)).collect();
        let Some(projected) = projected else {
            continue;
        };

        let depth = projected.iter().map(|p| p.depth).sum::<f64>() / projected.len() as f64;
        out.push(Polygon {
            points: projected.iter().map(|p| [p.x, p.y]).collect(),
            fill: shade(material, centre, normal, view.eye, scene.lights, rotation),
            depth,
            layer,
        });
    }
}

/// Polygons for one frame, in paint order.
pub fn rasterize(scene: &BoardScene, rotation: Rotation, view: &View) -> Vec<Polygon> {
    let mut polygons = Vec::with_capacity(scene.cells.len() * 3 + scene.markers.len() * 12);

    for cell in &scene.cells {
        let faces = box_faces(cell.position(), CELL_GEOMETRY);
        emit(&mut polygons, faces, &cell.material(), Layer::Board, scene, rotation, view);
    }
    for marker in scene.markers {
        let geometry = marker.geometry();
        let faces = cylinder_faces(
            marker.position(),
            geometry.radius_top,
            geometry.radius_bottom,
            geometry.height,
            geometry.segments,
        );
        emit(&mut polygons, faces, &marker.material(), Layer::Markers, scene, rotation, view);
    }

    polygons.sort_by(|a, b| a.layer.cmp(&b.layer).then(b.depth.total_cmp(&a.depth)));
    polygons
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chessboard::camera::OrbitCamera;
    use crate::chessboard::scene::{board_rotation, Cell, Shade, LIGHTS};

    fn frame(elapsed: f64) -> Vec<Polygon> {
        let (scene, mut handle) = BoardScene::build();
        handle.on_frame(elapsed);
        let view = OrbitCamera::default().view(800.0, 600.0);
        rasterize(&scene, handle.rotation(), &view)
    }

    /// Screen outline of a cell's top face under the given frame.
    fn top_outline(cell: &Cell, rotation: Rotation, view: &View) -> Vec<[f64; 2]> {
        let top = box_faces(cell.position(), CELL_GEOMETRY).swap_remove(0);
        assert_eq!(top.normal, Vec3::UP);
        top.vertices
            .iter()
            .map(|v| view.project(rotation.apply(*v)).unwrap())
            .map(|p| [p.x, p.y])
            .collect()
    }

    fn assert_one_top_per_cell(camera: OrbitCamera) {
        let (scene, mut handle) = BoardScene::build();
        handle.on_frame(0.0);
        let view = camera.view(800.0, 600.0);
        let polygons = rasterize(&scene, handle.rotation(), &view);

        assert_eq!(scene.cells.len(), 64);
        for cell in &scene.cells {
            let outline = top_outline(cell, handle.rotation(), &view);
            let drawn = polygons
                .iter()
                .filter(|p| p.layer == Layer::Board && p.points == outline)
                .count();
            assert_eq!(drawn, 1, "cell ({}, {})", cell.x, cell.z);
        }
    }

    #[test]
    fn every_cell_top_is_drawn() {
        assert_one_top_per_cell(OrbitCamera::default());
        assert!(frame(0.0).iter().any(|p| p.layer == Layer::Markers));
    }

    #[test]
    fn every_cell_top_is_drawn_from_the_lowest_orbit() {
        let mut camera = OrbitCamera::default();
        camera.drag(0.0, -10_000.0, 400.0);
        assert_eq!(camera.polar, camera.max_polar);
        assert_one_top_per_cell(camera);
    }

    #[test]
    fn paint_order_is_board_then_far_to_near() {
        let polygons = frame(3.0);
        let first_marker = polygons
            .iter()
            .position(|p| p.layer == Layer::Markers)
            .unwrap();
        assert!(polygons[first_marker..].iter().all(|p| p.layer == Layer::Markers));

        for layer in polygons[..first_marker].windows(2).chain(polygons[first_marker..].windows(2)) {
            assert!(layer[0].depth >= layer[1].depth);
        }
    }

    #[test]
    fn projected_points_are_finite() {
        for polygon in frame(11.0) {
            assert!(polygon.points.len() >= 4);
            for [x, y] in polygon.points {
                assert!(x.is_finite() && y.is_finite());
            }
        }
    }

    #[test]
    fn same_clock_same_frame() {
        assert_eq!(frame(5.5), frame(5.5));
    }

    #[test]
    fn light_squares_render_brighter_than_dark() {
        let rotation = board_rotation(0.0);
        let eye = Vec3::new(0.0, 5.0, 8.0);
        let point = Vec3::new(0.0, 0.05, 0.0);
        let lum = |rgb: Rgb| u32::from(rgb.r) + u32::from(rgb.g) + u32::from(rgb.b);

        let light = shade(&Shade::Light.material(), point, Vec3::UP, eye, &LIGHTS, rotation);
        let dark = shade(&Shade::Dark.material(), point, Vec3::UP, eye, &LIGHTS, rotation);
        assert!(lum(light) > lum(dark));
    }

    #[test]
    fn unlit_faces_keep_ambient_and_emissive() {
        let (scene, _) = BoardScene::build();
        let marker = scene.markers[0].material();
        let lights = [Light::Ambient { color: Rgb::WHITE, intensity: 0.5 }];
        let rgb = shade(&marker, Vec3::ZERO, Vec3::UP, Vec3::new(0.0, 5.0, 0.0), &lights, Rotation::default());
        // 0x1a * (0.5 + 0.2)
        assert_eq!(rgb, Rgb::hex(0x121212));
    }

    #[test]
    fn smoothstep_handles_hard_edges() {
        assert_eq!(smoothstep(0.5, 0.5, 0.6), 1.0);
        assert_eq!(smoothstep(0.5, 0.5, 0.4), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    }
}
