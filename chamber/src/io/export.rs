use std::{
    io::{BufWriter, Write},
    path::Path,
};

use crate::{ChamberError, Vertex};

/// Writes a triangle list as a Wavefront OBJ object named `name`.
///
/// Every vertex gets its own `v` and `vt` line; each triangle becomes one
/// `f` line referencing both by the same 1-based index. A trailing partial
/// triangle is ignored.
pub fn write_obj<W: Write>(
    name: &str,
    vertices: &[Vertex],
    writer: &mut W,
) -> Result<(), ChamberError> {
    writeln!(writer, "o {name}")?;

    for vertex in vertices.iter() {
        let [x, y, z] = vertex.position;
        writeln!(writer, "v {x} {y} {z}")?;
    }

    for vertex in vertices.iter() {
        let [u, v] = vertex.uv;
        writeln!(writer, "vt {u} {v}")?;
    }

    for triangle in 0..vertices.len() / 3 {
        let a = triangle * 3 + 1;
        let b = a + 1;
        let c = a + 2;
        writeln!(writer, "f {a}/{a} {b}/{b} {c}/{c}")?;
    }

    Ok(())
}

/// Writes a triangle list to the OBJ file at `path`, replacing it.
pub fn export_to_obj<P: AsRef<Path>>(
    name: &str,
    path: P,
    vertices: &[Vertex],
) -> Result<(), ChamberError> {
    let file = std::fs::File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    write_obj(name, vertices, &mut writer)?;
    writer.flush()?;

    log::debug!(
        "Exported {} triangles to {}",
        vertices.len() / 3,
        path.as_ref().display()
    );

    Ok(())
}
