//! glTF/GLB export.
//!
//! Every named mesh becomes a node (translated by the mesh origin) holding
//! one primitive per block material. Polygons are fan-triangulated and
//! unwelded so each face keeps its flat normal and block color.

use crate::catalog::resolve_material;
use crate::error::{MesherError, Result};
use crate::mesher::{MesherOutput, NamedMesh};
use glam::Vec3;
use gltf_json as json;
use json::validation::Checked::Valid;
use json::validation::USize64;
use std::collections::{BTreeMap, HashMap};

/// Per-corner vertex data of one primitive.
#[derive(Debug, Default)]
struct CornerBuffers {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    colors: Vec<[f32; 4]>,
    indices: Vec<u32>,
}

impl CornerBuffers {
    fn push_polygon(&mut self, corners: &[[f32; 3]], color: [f32; 4]) {
        let normal = face_normal(corners);
        let base = self.positions.len() as u32;
        for corner in corners {
            self.positions.push(*corner);
            self.normals.push(normal);
            self.colors.push(color);
        }
        for k in 1..corners.len().saturating_sub(1) as u32 {
            self.indices.extend_from_slice(&[base, base + k, base + k + 1]);
        }
    }
}

/// Export meshes to GLB format (binary glTF).
pub fn export_glb(output: &MesherOutput) -> Result<Vec<u8>> {
    if output.meshes.iter().all(|m| m.fragment.is_empty()) {
        return Err(MesherError::Export("Cannot export empty mesh".to_string()));
    }

    let mut root = json::Root::default();
    let mut bin_data: Vec<u8> = Vec::new();
    let mut materials: HashMap<i32, json::Index<json::Material>> = HashMap::new();
    let mut nodes = Vec::with_capacity(output.meshes.len());

    for mesh in &output.meshes {
        let mut primitives = Vec::new();
        for (material, buffers) in split_by_material(mesh) {
            let material = match materials.get(&material) {
                Some(index) => *index,
                None => {
                    let index = push_material(&mut root, material)?;
                    materials.insert(material, index);
                    index
                }
            };
            primitives.push(push_primitive(&mut root, &mut bin_data, &buffers, material));
        }

        let gltf_mesh = root.push(json::Mesh {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some(mesh.name.clone()),
            primitives,
            weights: None,
        });
        nodes.push(root.push(json::Node {
            mesh: Some(gltf_mesh),
            name: Some(mesh.name.clone()),
            translation: mesh.origin.map(|o| o.to_array()),
            ..Default::default()
        }));
    }

    pad_to_4(&mut bin_data);
    root.push(json::Buffer {
        byte_length: USize64::from(bin_data.len()),
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        uri: None,
    });

    let scene = root.push(json::Scene {
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        nodes,
    });
    root.scene = Some(scene);

    let json_string = json::serialize::to_string(&root)
        .map_err(|e| MesherError::Export(format!("Failed to serialize glTF JSON: {}", e)))?;

    Ok(write_glb(json_string.as_bytes(), &bin_data))
}

/// Group the faces of a mesh by material, in material order.
fn split_by_material(mesh: &NamedMesh) -> BTreeMap<i32, CornerBuffers> {
    let mut groups: BTreeMap<i32, CornerBuffers> = BTreeMap::new();
    let vertices = &mesh.fragment.vertices;

    for (face, polygon) in mesh.fragment.polygons().enumerate() {
        let material = mesh.materials.get(face).copied().unwrap_or_default();
        let color = mesh
            .primary_colors
            .get(face)
            .map(|c| c.to_rgba_f32())
            .unwrap_or([1.0; 4]);
        let corners: Vec<[f32; 3]> = polygon.iter().map(|&i| vertices[i as usize]).collect();
        groups.entry(material).or_default().push_polygon(&corners, color);
    }
    groups
}

fn push_material(root: &mut json::Root, code: i32) -> Result<json::Index<json::Material>> {
    let material = resolve_material(code)?;
    Ok(root.push(json::Material {
        name: Some(material.name.to_string()),
        double_sided: true,
        pbr_metallic_roughness: json::material::PbrMetallicRoughness {
            base_color_factor: json::material::PbrBaseColorFactor([1.0, 1.0, 1.0, 1.0]),
            metallic_factor: json::material::StrengthFactor(0.0),
            roughness_factor: json::material::StrengthFactor(1.0),
            ..Default::default()
        },
        ..Default::default()
    }))
}

fn push_primitive(
    root: &mut json::Root,
    bin_data: &mut Vec<u8>,
    buffers: &CornerBuffers,
    material: json::Index<json::Material>,
) -> json::mesh::Primitive {
    let (min, max) = bounding_coords(&buffers.positions);

    let positions = push_accessor(
        root,
        bin_data,
        buffers.positions.iter().flatten().flat_map(|v| v.to_le_bytes()),
        buffers.positions.len(),
        json::accessor::Type::Vec3,
        json::accessor::ComponentType::F32,
        Some(json::buffer::Target::ArrayBuffer),
        Some((min, max)),
    );
    let normals = push_accessor(
        root,
        bin_data,
        buffers.normals.iter().flatten().flat_map(|v| v.to_le_bytes()),
        buffers.normals.len(),
        json::accessor::Type::Vec3,
        json::accessor::ComponentType::F32,
        Some(json::buffer::Target::ArrayBuffer),
        None,
    );
    let colors = push_accessor(
        root,
        bin_data,
        buffers.colors.iter().flatten().flat_map(|v| v.to_le_bytes()),
        buffers.colors.len(),
        json::accessor::Type::Vec4,
        json::accessor::ComponentType::F32,
        Some(json::buffer::Target::ArrayBuffer),
        None,
    );
    let indices = push_accessor(
        root,
        bin_data,
        buffers.indices.iter().flat_map(|i| i.to_le_bytes()),
        buffers.indices.len(),
        json::accessor::Type::Scalar,
        json::accessor::ComponentType::U32,
        Some(json::buffer::Target::ElementArrayBuffer),
        None,
    );

    let mut attributes = BTreeMap::new();
    attributes.insert(Valid(json::mesh::Semantic::Positions), positions);
    attributes.insert(Valid(json::mesh::Semantic::Normals), normals);
    attributes.insert(Valid(json::mesh::Semantic::Colors(0)), colors);

    json::mesh::Primitive {
        attributes,
        extensions: Default::default(),
        extras: Default::default(),
        indices: Some(indices),
        material: Some(material),
        mode: Valid(json::mesh::Mode::Triangles),
        targets: None,
    }
}

/// Append a buffer view and its accessor.
#[allow(clippy::too_many_arguments)]
fn push_accessor(
    root: &mut json::Root,
    bin_data: &mut Vec<u8>,
    bytes: impl Iterator<Item = u8>,
    count: usize,
    type_: json::accessor::Type,
    component_type: json::accessor::ComponentType,
    target: Option<json::buffer::Target>,
    bounds: Option<([f32; 3], [f32; 3])>,
) -> json::Index<json::Accessor> {
    let byte_offset = bin_data.len();
    bin_data.extend(bytes);
    let byte_length = bin_data.len() - byte_offset;
    pad_to_4(bin_data);

    let view = root.push(json::buffer::View {
        buffer: json::Index::new(0),
        byte_length: USize64::from(byte_length),
        byte_offset: Some(USize64::from(byte_offset)),
        byte_stride: None,
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        target: target.map(Valid),
    });

    root.push(json::Accessor {
        buffer_view: Some(view),
        byte_offset: Some(USize64(0)),
        count: USize64::from(count),
        component_type: Valid(json::accessor::GenericComponentType(component_type)),
        extensions: Default::default(),
        extras: Default::default(),
        type_: Valid(type_),
        min: bounds.map(|(min, _)| json::Value::from(min.to_vec())),
        max: bounds.map(|(_, max)| json::Value::from(max.to_vec())),
        name: None,
        normalized: false,
        sparse: None,
    })
}

/// Assemble the GLB container from a JSON chunk and a BIN chunk.
fn write_glb(json_bytes: &[u8], buffer_data: &[u8]) -> Vec<u8> {
    // Pad JSON to 4-byte alignment
    let json_padding = (4 - (json_bytes.len() % 4)) % 4;
    let padded_json_len = json_bytes.len() + json_padding;

    // Pad buffer to 4-byte alignment
    let buffer_padding = (4 - (buffer_data.len() % 4)) % 4;
    let padded_buffer_len = buffer_data.len() + buffer_padding;

    let total_size = 12 + // GLB header
        8 + padded_json_len + // JSON chunk
        8 + padded_buffer_len; // BIN chunk

    let mut glb = Vec::with_capacity(total_size);

    // GLB Header
    glb.extend_from_slice(b"glTF"); // magic
    glb.extend_from_slice(&2u32.to_le_bytes()); // version
    glb.extend_from_slice(&(total_size as u32).to_le_bytes()); // length

    // JSON Chunk
    glb.extend_from_slice(&(padded_json_len as u32).to_le_bytes());
    glb.extend_from_slice(&0x4E4F534Au32.to_le_bytes()); // chunk type: JSON
    glb.extend_from_slice(json_bytes);
    glb.extend(std::iter::repeat(0x20u8).take(json_padding)); // padding (spaces)

    // BIN Chunk
    glb.extend_from_slice(&(padded_buffer_len as u32).to_le_bytes());
    glb.extend_from_slice(&0x004E4942u32.to_le_bytes()); // chunk type: BIN
    glb.extend_from_slice(buffer_data);
    glb.extend(std::iter::repeat(0u8).take(buffer_padding)); // padding (zeros)

    glb
}

/// Newell normal of a planar polygon.
fn face_normal(corners: &[[f32; 3]]) -> [f32; 3] {
    let mut normal = Vec3::ZERO;
    for (k, current) in corners.iter().enumerate() {
        let a = Vec3::from(*current);
        let b = Vec3::from(corners[(k + 1) % corners.len()]);
        normal += Vec3::new(
            (a.y - b.y) * (a.z + b.z),
            (a.z - b.z) * (a.x + b.x),
            (a.x - b.x) * (a.y + b.y),
        );
    }
    normal.normalize_or_zero().to_array()
}

fn pad_to_4(data: &mut Vec<u8>) {
    while data.len() % 4 != 0 {
        data.push(0);
    }
}

fn bounding_coords(points: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for p in points {
        for i in 0..3 {
            min[i] = f32::min(min[i], p[i]);
            max[i] = f32::max(max[i], p[i]);
        }
    }
    (min, max)
}
