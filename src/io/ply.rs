//! PLY (Stanford polygon) format support.
//!
//! PLY is the one format this library reads and writes, because it carries
//! per-vertex colors alongside positions and faces. Loading accepts uchar
//! (0-255) or native float color properties; saving always writes ASCII with
//! uchar colors.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::{Point3, Vector3};
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

use crate::error::{Result, SwatchError};
use crate::mesh::ColorMesh;

/// Load a colored triangle mesh from a PLY file.
///
/// Vertex positions come from the `x`, `y`, `z` properties and colors from
/// `red`, `green`, `blue` (uchar values are normalized to `[0, 1]`). Faces
/// with more than three vertices are fan-triangulated. A file without
/// positions, colors, or faces is a load error.
///
/// # Example
///
/// ```no_run
/// use swatch::io::ply;
///
/// let mesh = ply::load("model.ply").unwrap();
/// println!("{} vertices", mesh.num_vertices());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<ColorMesh> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let parser = Parser::<DefaultElement>::new();
    let ply = parser
        .read_ply(&mut reader)
        .map_err(|e| SwatchError::LoadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // Extract vertices with their colors
    let vertex_element = ply
        .payload
        .get("vertex")
        .ok_or_else(|| SwatchError::LoadError {
            path: path.to_path_buf(),
            message: "PLY file has no vertex element".to_string(),
        })?;

    let mut positions: Vec<Point3<f64>> = Vec::with_capacity(vertex_element.len());
    let mut colors: Vec<Vector3<f64>> = Vec::with_capacity(vertex_element.len());
    for vertex in vertex_element {
        let mut coord = [0.0; 3];
        for (value, name) in coord.iter_mut().zip(["x", "y", "z"]) {
            *value = get_float_property(vertex, name).ok_or_else(|| SwatchError::LoadError {
                path: path.to_path_buf(),
                message: format!("vertex missing {} coordinate", name),
            })?;
        }
        positions.push(Point3::new(coord[0], coord[1], coord[2]));

        let mut channel = [0.0; 3];
        for (value, name) in channel.iter_mut().zip(["red", "green", "blue"]) {
            *value = get_color_property(vertex, name).ok_or_else(|| SwatchError::LoadError {
                path: path.to_path_buf(),
                message: format!("vertex missing {} color property", name),
            })?;
        }
        colors.push(Vector3::new(channel[0], channel[1], channel[2]));
    }

    // Extract faces
    let face_element = ply
        .payload
        .get("face")
        .ok_or_else(|| SwatchError::LoadError {
            path: path.to_path_buf(),
            message: "PLY file has no face element".to_string(),
        })?;

    let mut triangles: Vec<[usize; 3]> = Vec::with_capacity(face_element.len());
    for face in face_element {
        let indices = get_list_property(face, "vertex_indices")
            .or_else(|| get_list_property(face, "vertex_index"))
            .ok_or_else(|| SwatchError::LoadError {
                path: path.to_path_buf(),
                message: "face missing vertex_indices property".to_string(),
            })?;

        if indices.len() == 3 {
            triangles.push([indices[0], indices[1], indices[2]]);
        } else if indices.len() > 3 {
            // Triangulate polygon by fan triangulation
            for i in 1..indices.len() - 1 {
                triangles.push([indices[0], indices[i], indices[i + 1]]);
            }
        }
    }

    if triangles.is_empty() {
        return Err(SwatchError::LoadError {
            path: path.to_path_buf(),
            message: "PLY file contains no faces".to_string(),
        });
    }

    ColorMesh::new(positions, triangles, colors)
}

fn get_float_property(element: &DefaultElement, name: &str) -> Option<f64> {
    match element.get(name)? {
        Property::Float(v) => Some(*v as f64),
        Property::Double(v) => Some(*v),
        Property::Int(v) => Some(*v as f64),
        Property::UInt(v) => Some(*v as f64),
        Property::Short(v) => Some(*v as f64),
        Property::UShort(v) => Some(*v as f64),
        Property::Char(v) => Some(*v as f64),
        Property::UChar(v) => Some(*v as f64),
        _ => None,
    }
}

/// Color channels store uchar 0-255 or native floats; both map to [0, 1].
fn get_color_property(element: &DefaultElement, name: &str) -> Option<f64> {
    match element.get(name)? {
        Property::UChar(v) => Some(*v as f64 / 255.0),
        Property::UShort(v) => Some(*v as f64 / 65535.0),
        Property::Float(v) => Some(*v as f64),
        Property::Double(v) => Some(*v),
        _ => None,
    }
}

fn get_list_property(element: &DefaultElement, name: &str) -> Option<Vec<usize>> {
    match element.get(name)? {
        Property::ListInt(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUInt(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListShort(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUShort(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListChar(v) => Some(v.iter().map(|&x| x as usize).collect()),
        Property::ListUChar(v) => Some(v.iter().map(|&x| x as usize).collect()),
        _ => None,
    }
}

/// Save a colored triangle mesh to a PLY file (ASCII format).
///
/// Colors are quantized to uchar, so a channel value `c` in `[0, 1]` is
/// written as `round(c * 255)`.
///
/// # Example
///
/// ```no_run
/// use swatch::io::ply;
/// # use swatch::mesh::ColorMesh;
/// # let mesh = ColorMesh::new(Vec::new(), Vec::new(), Vec::new()).unwrap();
/// ply::save(&mesh, "output.ply").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(mesh: &ColorMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    // Write header
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "comment Generated by swatch")?;
    writeln!(writer, "element vertex {}", mesh.num_vertices())?;
    writeln!(writer, "property double x")?;
    writeln!(writer, "property double y")?;
    writeln!(writer, "property double z")?;
    writeln!(writer, "property uchar red")?;
    writeln!(writer, "property uchar green")?;
    writeln!(writer, "property uchar blue")?;
    writeln!(writer, "element face {}", mesh.num_triangles())?;
    writeln!(writer, "property list uchar int vertex_indices")?;
    writeln!(writer, "end_header")?;

    // Write vertices with colors
    for (p, c) in mesh.positions().iter().zip(mesh.colors()) {
        writeln!(
            writer,
            "{} {} {} {} {} {}",
            p.x,
            p.y,
            p.z,
            quantize_channel(c.x),
            quantize_channel(c.y),
            quantize_channel(c.z)
        )?;
    }

    // Write faces
    for t in mesh.triangles() {
        writeln!(writer, "3 {} {} {}", t[0], t[1], t[2])?;
    }

    writer.flush()?;
    Ok(())
}

fn quantize_channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("swatch-{}-{}", std::process::id(), name))
    }

    fn two_triangle_mesh() -> ColorMesh {
        let positions = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.5, 1.0, 0.0),
            Point3::new(1.5, 1.0, 0.0),
        ];
        let triangles = vec![[0, 1, 2], [1, 3, 2]];
        let colors = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ];
        ColorMesh::new(positions, triangles, colors).unwrap()
    }

    #[test]
    fn test_save_load_round_trip() {
        let mesh = two_triangle_mesh();
        let path = temp_path("round-trip.ply");

        save(&mesh, &path).unwrap();
        let loaded = load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.num_vertices(), mesh.num_vertices());
        assert_eq!(loaded.triangles(), mesh.triangles());
        // Colors quantize through uchar, but 0.0 and 1.0 survive exactly.
        assert_eq!(loaded.colors(), mesh.colors());
        assert_eq!(loaded.positions(), mesh.positions());
    }

    #[test]
    fn test_load_rejects_missing_colors() {
        let path = temp_path("no-colors.ply");
        std::fs::write(
            &path,
            "ply\nformat ascii 1.0\n\
             element vertex 3\n\
             property double x\nproperty double y\nproperty double z\n\
             element face 1\n\
             property list uchar int vertex_indices\n\
             end_header\n\
             0 0 0\n1 0 0\n0.5 1 0\n\
             3 0 1 2\n",
        )
        .unwrap();

        let err = load(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        match err {
            SwatchError::LoadError { message, .. } => {
                assert!(message.contains("color"), "message: {}", message);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_garbage() {
        let path = temp_path("garbage.ply");
        std::fs::write(&path, "this is not a ply file\n").unwrap();

        let err = load(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, SwatchError::LoadError { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(temp_path("does-not-exist.ply")).unwrap_err();
        assert!(matches!(err, SwatchError::Io(_)));
    }

    #[test]
    fn test_quad_faces_fan_triangulate() {
        let path = temp_path("quad.ply");
        std::fs::write(
            &path,
            "ply\nformat ascii 1.0\n\
             element vertex 4\n\
             property double x\nproperty double y\nproperty double z\n\
             property uchar red\nproperty uchar green\nproperty uchar blue\n\
             element face 1\n\
             property list uchar int vertex_indices\n\
             end_header\n\
             0 0 0 255 0 0\n1 0 0 255 0 0\n1 1 0 255 0 0\n0 1 0 255 0 0\n\
             4 0 1 2 3\n",
        )
        .unwrap();

        let mesh = load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(mesh.triangles(), [[0, 1, 2], [0, 2, 3]]);
    }
}
