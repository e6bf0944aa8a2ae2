// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use ahash::AHashMap;
use tracing::{debug, info};

use crate::{
    error::{MeshError, MeshResult},
    geometry::point::Point3,
    mesh::{core::TriMesh, handles::VertexHandle},
    numeric::scalar::Scalar,
};

/// Write a mesh as OFF.
/// Format:
///   OFF
///   <numVertices> <numFaces> 0
///   x y z
///   ...
///   3 i j k   (zero-based indices)
pub fn write_off<T: Scalar, W: Write>(mesh: &TriMesh<T>, writer: W) -> MeshResult<()> {
    let mut out = BufWriter::new(writer);
    writeln!(out, "OFF")?;
    writeln!(out, "{} {} {}", mesh.vertex_count(), mesh.face_count(), 0)?;

    // Faces are written through handles, so each vertex handle is mapped to
    // the index it was emitted at.
    let mut emitted: AHashMap<VertexHandle, usize> = AHashMap::with_capacity(mesh.vertex_count());
    for v in mesh.vertices() {
        let p = v.position(mesh)?;
        writeln!(out, "{} {} {}", to_f64(p.x()), to_f64(p.y()), to_f64(p.z()))?;
        emitted.insert(v, emitted.len());
    }

    for f in mesh.faces() {
        let [a, b, c] = f.vertices(mesh)?.map(|v| emitted[&v]);
        writeln!(out, "3 {} {} {}", a, b, c)?;
    }

    out.flush()?;
    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Wrote OFF mesh"
    );
    Ok(())
}

pub fn write_off_file<T: Scalar, P: AsRef<Path>>(mesh: &TriMesh<T>, path: P) -> MeshResult<()> {
    write_off(mesh, File::create(path)?)
}

/// Read a mesh from OFF.
/// Supports:
///   OFF                    (counts may follow on the same line)
///   <V> <F> [<E>]          (the edge count is ignored)
///   V lines of "x y z"
///   F lines of "3 i j k"   (any other polygon size is an error)
/// `#` starts a comment.
pub fn read_off<T: Scalar, R: BufRead>(reader: R) -> MeshResult<TriMesh<T>> {
    let mut lines = Lines::new(reader);

    let mut header = lines.next_line()?.ok_or_else(|| MeshError::parse("OFF: empty input"))?;
    if header.first().map(String::as_str) != Some("OFF") {
        return Err(MeshError::parse(format!(
            "OFF: expected 'OFF', got '{}'",
            header.join(" ")
        )));
    }
    header.remove(0);
    let counts = if header.is_empty() {
        lines.expect_line("counts")?
    } else {
        header
    };
    if !(2..=3).contains(&counts.len()) {
        return Err(MeshError::parse(format!(
            "OFF: line {}: expected 2 or 3 counts, got {}",
            lines.line_no,
            counts.len()
        )));
    }
    let vcount: usize = parse_token(&counts[0], "vertex count", lines.line_no)?;
    let fcount: usize = parse_token(&counts[1], "face count", lines.line_no)?;

    let mut mesh = TriMesh::with_capacity(vcount, fcount);
    for _ in 0..vcount {
        let tokens = lines.expect_line("vertex")?;
        if tokens.len() < 3 {
            return Err(MeshError::parse(format!(
                "OFF: line {}: incomplete vertex",
                lines.line_no
            )));
        }
        let mut c = [T::zero(); 3];
        for (dst, tok) in c.iter_mut().zip(&tokens) {
            *dst = T::lit(parse_token::<f64>(tok, "coordinate", lines.line_no)?);
        }
        mesh.add_vertex(Point3::from(c));
    }

    for _ in 0..fcount {
        let tokens = lines.expect_line("face")?;
        let size: usize = match tokens.first() {
            Some(tok) => parse_token(tok, "face size", lines.line_no)?,
            None => 0,
        };
        if size != 3 || tokens.len() < 4 {
            return Err(MeshError::parse(format!(
                "OFF: line {}: only triangles are supported",
                lines.line_no
            )));
        }
        let mut idx = [0usize; 3];
        for (dst, tok) in idx.iter_mut().zip(&tokens[1..4]) {
            *dst = parse_token(tok, "vertex index", lines.line_no)?;
        }
        mesh.add_face(idx[0], idx[1], idx[2])?;
    }

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "Read OFF mesh"
    );
    Ok(mesh)
}

pub fn read_off_file<T: Scalar, P: AsRef<Path>>(path: P) -> MeshResult<TriMesh<T>> {
    read_off(BufReader::new(File::open(path)?))
}

fn to_f64<T: Scalar>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

fn parse_token<F: FromStr>(token: &str, what: &str, line_no: usize) -> MeshResult<F> {
    token
        .parse()
        .map_err(|_| MeshError::parse(format!("OFF: line {line_no}: bad {what} '{token}'")))
}

/// Non-empty, comment-stripped lines split into tokens.
struct Lines<R> {
    inner: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            inner: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> MeshResult<Option<Vec<String>>> {
        for line in self.inner.by_ref() {
            let line = line?;
            self.line_no += 1;
            let content = line.split('#').next().unwrap_or("").trim();
            if !content.is_empty() {
                return Ok(Some(content.split_whitespace().map(str::to_owned).collect()));
            }
        }
        Ok(None)
    }

    fn expect_line(&mut self, what: &str) -> MeshResult<Vec<String>> {
        self.next_line()?
            .ok_or_else(|| MeshError::parse(format!("OFF: unexpected end of input, expected {what}")))
    }
}
