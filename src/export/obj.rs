//! Wavefront OBJ export.
//!
//! OBJ is a simple, widely-supported text-based 3D format. Each named mesh
//! becomes an `o` object with n-gon faces; block colors are written as
//! vertex colors and each block material gets an MTL entry.

use crate::catalog::resolve_material;
use crate::error::Result;
use crate::mesher::MesherOutput;
use crate::types::Color;
use glam::Vec3;
use std::collections::BTreeSet;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Export meshes to OBJ format.
/// Returns (obj_content, mtl_content) as strings.
///
/// OBJ has no node transforms, so mesh origins are baked into the vertex
/// positions.
pub fn export_obj(output: &MesherOutput, name: &str) -> Result<(String, String)> {
    let total_verts = output.total_vertices();
    let total_faces = output.total_faces();

    let mut obj = String::with_capacity(256 + total_verts * 60 + total_faces * 24);
    let mut mtl = String::with_capacity(512);

    // OBJ header
    writeln!(obj, "# Avorion Mesher OBJ Export")?;
    writeln!(obj, "# Vertices: {}", total_verts)?;
    writeln!(obj, "# Faces: {}", total_faces)?;
    writeln!(obj)?;
    writeln!(obj, "mtllib {}.mtl", name)?;

    let mut used_materials = BTreeSet::new();
    let mut vertex_offset: usize = 0;

    for mesh in &output.meshes {
        writeln!(obj)?;
        writeln!(obj, "o {}", mesh.name)?;

        // A vertex belongs to one block, so the first face using it
        // decides its color.
        let mut vertex_colors: Vec<Option<Color>> = vec![None; mesh.fragment.vertex_count()];
        for (face, polygon) in mesh.fragment.polygons().enumerate() {
            let color = mesh.primary_colors.get(face).copied().unwrap_or(Color::WHITE);
            for &i in polygon {
                vertex_colors[i as usize].get_or_insert(color);
            }
        }

        let origin = mesh.origin.unwrap_or(Vec3::ZERO);
        for (vertex, color) in mesh.fragment.vertices.iter().zip(&vertex_colors) {
            let p = Vec3::from(*vertex) + origin;
            let [r, g, b, _] = color.unwrap_or(Color::WHITE).to_rgba_f32();
            writeln!(obj, "v {} {} {} {} {} {}", p.x, p.y, p.z, r, g, b)?;
        }

        let mut current_material = None;
        for (face, polygon) in mesh.fragment.polygons().enumerate() {
            let material = mesh.materials.get(face).copied().unwrap_or_default();
            if current_material != Some(material) {
                writeln!(obj, "usemtl {}", resolve_material(material)?.name)?;
                used_materials.insert(material);
                current_material = Some(material);
            }

            write!(obj, "f")?;
            for &i in polygon {
                write!(obj, " {}", i as usize + vertex_offset + 1)?;
            }
            writeln!(obj)?;
        }

        vertex_offset += mesh.fragment.vertex_count();
    }

    // MTL file
    writeln!(mtl, "# Avorion Mesher Material")?;
    for code in used_materials {
        let material = resolve_material(code)?;
        let [r, g, b, _] = material.display_color().to_rgba_f32();
        writeln!(mtl)?;
        writeln!(mtl, "newmtl {}", material.name)?;
        writeln!(mtl, "Ka 1.0 1.0 1.0")?;
        writeln!(mtl, "Kd {} {} {}", r, g, b)?;
        writeln!(mtl, "Ks 0.0 0.0 0.0")?;
        writeln!(mtl, "Ns 10.0")?;
        writeln!(mtl, "d 1.0")?;
        writeln!(mtl, "illum 1")?;
    }

    Ok((obj, mtl))
}

/// OBJ and MTL text ready to be written to files.
pub struct ObjExport {
    pub obj: String,
    pub mtl: String,
    /// Stem of the MTL file the OBJ's `mtllib` line refers to.
    pub mtl_name: String,
}

impl ObjExport {
    pub fn from_output(output: &MesherOutput, name: &str) -> Result<Self> {
        let (obj, mtl) = export_obj(output, name)?;
        Ok(Self {
            obj,
            mtl,
            mtl_name: name.to_string(),
        })
    }

    /// Write the OBJ to `obj_path` and the MTL next to it, under the name
    /// its `mtllib` line uses. Returns the MTL path.
    pub fn write_to<P: AsRef<Path>>(&self, obj_path: P) -> Result<PathBuf> {
        let obj_path = obj_path.as_ref();
        let mtl_path = obj_path.with_file_name(format!("{}.mtl", self.mtl_name));
        std::fs::write(obj_path, &self.obj)?;
        std::fs::write(&mtl_path, &self.mtl)?;
        Ok(mtl_path)
    }
}
