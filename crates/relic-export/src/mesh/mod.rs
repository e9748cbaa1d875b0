//! Mesh export: the vertex-animation stream and the packed geometry stream.
//!
//! Both streams are produced in full before being handed back; a zero-length
//! buffer means the mesh variant has nothing to emit (skeletal variants are
//! deliberate stubs), never that something went wrong.

pub mod format;

use byteorder::{LittleEndian, WriteBytesExt};

use relic_assets::{
    GenericMesh, LodMesh, MeshAsset, SkeletalAnimationAsset, SkeletalMesh,
};

use crate::error::{ExportError, ExportResult};
use format::{AnivHeader, DataHeader, TriangleRecord};

/// Encodes the vertex-animation stream of a mesh.
///
/// Skeletal meshes return an empty buffer. For the others the stream is the
/// 4-byte header followed by one packed word per vertex, frame-major.
pub fn export_vertex_anim(mesh: &MeshAsset) -> ExportResult<Vec<u8>> {
    let Some(anim) = mesh.vertex_animation() else {
        return Ok(Vec::new());
    };

    if anim.verts.len() != anim.expected_len() {
        return Err(ExportError::VertexCountMismatch {
            mesh: mesh.name().to_string(),
            expected: anim.expected_len(),
            actual: anim.verts.len(),
        });
    }

    let mut data = Vec::with_capacity(4 + anim.verts.len() * 4);
    AnivHeader {
        num_frames: anim.frame_count,
        frame_size: anim.verts_per_frame.wrapping_mul(4),
    }
    .write(&mut data)?;

    for &v in &anim.verts {
        data.write_u32::<LittleEndian>(format::pack_vertex(v))?;
    }

    Ok(data)
}

/// Encodes the geometry stream of a mesh.
///
/// Skeletal meshes return an empty buffer (the skeletal stream format is not
/// produced yet). Generic meshes encode their triangle list directly; LOD
/// meshes resolve vertices and UVs through the wedge table and take flags and
/// texture index from the face's material entry.
pub fn export_geometry(mesh: &MeshAsset) -> ExportResult<Vec<u8>> {
    match mesh {
        MeshAsset::Generic(m) => export_generic(m),
        MeshAsset::Lod(m) => export_lod(m),
        MeshAsset::Skeletal(m) => Ok(export_skeletal_mesh(m)),
    }
}

/// Skeletal mesh geometry export. Produces nothing by design.
pub fn export_skeletal_mesh(_mesh: &SkeletalMesh) -> Vec<u8> {
    Vec::new()
}

/// Skeletal animation export. Produces nothing by design.
pub fn export_skeletal_anim(_anim: &SkeletalAnimationAsset) -> Vec<u8> {
    Vec::new()
}

fn checked_polygon_count(name: &str, count: usize) -> ExportResult<u16> {
    if count > u16::MAX as usize {
        return Err(ExportError::TooManyPolygons {
            mesh: name.to_string(),
            count,
        });
    }
    Ok(count as u16)
}

fn export_generic(mesh: &GenericMesh) -> ExportResult<Vec<u8>> {
    let num_polygons = checked_polygon_count(&mesh.name, mesh.tris.len())?;

    let mut data =
        Vec::with_capacity(format::DATA_HEADER_SIZE + mesh.tris.len() * format::TRIANGLE_SIZE);
    DataHeader {
        num_polygons,
        num_vertices: mesh.anim.verts_per_frame,
    }
    .write(&mut data)?;

    for tri in &mesh.tris {
        TriangleRecord {
            vertex: tri.vertex,
            triangle_type: format::triangle_type_for(tri.poly_flags),
            color: format::TRIANGLE_COLOR,
            uv: tri.uv,
            tex_num: tri.texture_index,
            flags: 0,
        }
        .write(&mut data)?;
    }

    Ok(data)
}

fn export_lod(mesh: &LodMesh) -> ExportResult<Vec<u8>> {
    let num_polygons = checked_polygon_count(&mesh.name, mesh.faces.len())?;

    let mut data =
        Vec::with_capacity(format::DATA_HEADER_SIZE + mesh.faces.len() * format::TRIANGLE_SIZE);
    DataHeader {
        num_polygons,
        num_vertices: mesh.anim.verts_per_frame,
    }
    .write(&mut data)?;

    for (i, face) in mesh.faces.iter().enumerate() {
        let mut record = TriangleRecord {
            color: format::TRIANGLE_COLOR,
            ..TriangleRecord::default()
        };

        for (k, &wedge_index) in face.wedges.iter().enumerate() {
            let wedge = &mesh.wedges[wedge_index as usize];
            record.vertex[k] = wedge.vertex;
            record.uv[k] = [wedge.u, wedge.v];
        }

        let material = &mesh.materials[face.material_index as usize];
        // A lone special-face entry marks the mesh's last face as the
        // first-person weapon triangle, whatever its material says.
        record.triangle_type = if mesh.special_faces.len() == 1 && i == mesh.faces.len() - 1 {
            format::triangle_type::WEAPON_TRIANGLE
        } else {
            format::triangle_type_for(material.poly_flags)
        };
        record.tex_num = material.texture_index;

        record.write(&mut data)?;
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use relic_assets::{
        poly_flags, MeshFace, MeshMaterial, MeshTriangle, MeshWedge, Vec3, VertexAnimation,
    };

    fn generic_mesh(tris: Vec<MeshTriangle>) -> MeshAsset {
        MeshAsset::Generic(GenericMesh {
            name: "Cube".into(),
            anim: VertexAnimation::single_frame(vec![Vec3::default(); 8]),
            tris,
        })
    }

    #[test]
    fn test_anim_stream_layout() {
        let mesh = MeshAsset::Generic(GenericMesh {
            name: "Tri".into(),
            anim: VertexAnimation {
                frame_count: 2,
                verts_per_frame: 1,
                verts: vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0)],
            },
            tris: Vec::new(),
        });

        let data = export_vertex_anim(&mesh).unwrap();
        assert_eq!(data.len(), 4 + 2 * 4);
        assert_eq!(&data[0..2], &2u16.to_le_bytes());
        assert_eq!(&data[2..4], &4u16.to_le_bytes());

        let word = u32::from_le_bytes(data[4..8].try_into().unwrap());
        assert_eq!(word, format::pack_vertex(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_skeletal_anim_stream_is_empty() {
        let mesh = MeshAsset::Skeletal(SkeletalMesh {
            name: "Warlord".into(),
        });
        assert!(export_vertex_anim(&mesh).unwrap().is_empty());
        assert!(export_geometry(&mesh).unwrap().is_empty());
    }

    #[test]
    fn test_vertex_count_mismatch() {
        let mesh = MeshAsset::Generic(GenericMesh {
            name: "Broken".into(),
            anim: VertexAnimation {
                frame_count: 2,
                verts_per_frame: 4,
                verts: vec![Vec3::default(); 5],
            },
            tris: Vec::new(),
        });

        match export_vertex_anim(&mesh) {
            Err(ExportError::VertexCountMismatch {
                expected, actual, ..
            }) => {
                assert_eq!(expected, 8);
                assert_eq!(actual, 5);
            }
            other => panic!("expected VertexCountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_generic_geometry_record() {
        let mesh = generic_mesh(vec![MeshTriangle {
            vertex: [0, 1, 2],
            uv: [[10, 20], [30, 40], [50, 60]],
            texture_index: 3,
            poly_flags: poly_flags::TWO_SIDED | poly_flags::TRANSLUCENT,
        }]);

        let data = export_geometry(&mesh).unwrap();
        assert_eq!(data.len(), format::DATA_HEADER_SIZE + format::TRIANGLE_SIZE);

        let record = &data[format::DATA_HEADER_SIZE..];
        assert_eq!(&record[0..2], &0u16.to_le_bytes());
        assert_eq!(&record[2..4], &1u16.to_le_bytes());
        assert_eq!(&record[4..6], &2u16.to_le_bytes());
        assert_eq!(record[6] as i8, format::triangle_type::TRANSLUCENT);
        assert_eq!(record[7] as i8, format::TRIANGLE_COLOR);
        assert_eq!(&record[8..14], &[10, 20, 30, 40, 50, 60]);
        assert_eq!(record[14] as i8, 3);
        assert_eq!(record[15], 0);
    }

    #[test]
    fn test_too_many_polygons_rejected() {
        let mesh = generic_mesh(vec![MeshTriangle::default(); u16::MAX as usize + 1]);
        match export_geometry(&mesh) {
            Err(ExportError::TooManyPolygons { mesh, count }) => {
                assert_eq!(mesh, "Cube");
                assert_eq!(count, 65536);
            }
            other => panic!("expected TooManyPolygons, got {:?}", other),
        }
    }

    fn lod_mesh(special_faces: Vec<MeshFace>) -> LodMesh {
        LodMesh {
            name: "Sniper".into(),
            anim: VertexAnimation::single_frame(vec![Vec3::default(); 4]),
            wedges: vec![
                MeshWedge { vertex: 0, u: 1, v: 2 },
                MeshWedge { vertex: 1, u: 3, v: 4 },
                MeshWedge { vertex: 2, u: 5, v: 6 },
                MeshWedge { vertex: 3, u: 7, v: 8 },
            ],
            faces: vec![
                MeshFace {
                    wedges: [0, 1, 2],
                    material_index: 0,
                },
                MeshFace {
                    wedges: [1, 2, 3],
                    material_index: 1,
                },
            ],
            materials: vec![
                MeshMaterial {
                    poly_flags: poly_flags::TWO_SIDED | poly_flags::MASKED,
                    texture_index: 0,
                },
                MeshMaterial {
                    poly_flags: poly_flags::TWO_SIDED | poly_flags::MODULATED,
                    texture_index: 1,
                },
            ],
            special_faces,
        }
    }

    #[test]
    fn test_lod_wedge_indirection() {
        let data = export_geometry(&MeshAsset::Lod(lod_mesh(Vec::new()))).unwrap();
        assert_eq!(
            data.len(),
            format::DATA_HEADER_SIZE + 2 * format::TRIANGLE_SIZE
        );

        let first = &data[format::DATA_HEADER_SIZE..];
        // Wedge 0 resolves to vertex 0 with UV (1, 2).
        assert_eq!(&first[0..2], &0u16.to_le_bytes());
        assert_eq!(&first[8..10], &[1, 2]);
        assert_eq!(first[6] as i8, format::triangle_type::MASKED_TWO_SIDED);
    }

    #[test]
    fn test_single_special_face_forces_weapon_triangle() {
        let special = vec![MeshFace::default()];
        let data = export_geometry(&MeshAsset::Lod(lod_mesh(special))).unwrap();

        let first = &data[format::DATA_HEADER_SIZE..];
        let last = &data[format::DATA_HEADER_SIZE + format::TRIANGLE_SIZE..];
        // Only the last face is overridden.
        assert_eq!(first[6] as i8, format::triangle_type::MASKED_TWO_SIDED);
        assert_eq!(last[6] as i8, format::triangle_type::WEAPON_TRIANGLE);
    }

    #[test]
    fn test_two_special_faces_do_not_override() {
        let special = vec![MeshFace::default(), MeshFace::default()];
        let data = export_geometry(&MeshAsset::Lod(lod_mesh(special))).unwrap();
        let last = &data[format::DATA_HEADER_SIZE + format::TRIANGLE_SIZE..];
        assert_eq!(last[6] as i8, format::triangle_type::MODULATED_TWO_SIDED);
    }
}
