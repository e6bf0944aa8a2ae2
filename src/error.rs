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

use std::fmt;

use thiserror::Error;

use crate::mesh::canonical_edge::Edge;

/// Result alias used across the mesh API.
pub type MeshResult<T> = Result<T, MeshError>;

/// The kind of mesh element a handle or index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Vertex,
    Edge,
    Face,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Vertex => f.write_str("vertex"),
            ElementKind::Edge => f.write_str("edge"),
            ElementKind::Face => f.write_str("face"),
        }
    }
}

#[derive(Debug, Error)]
pub enum MeshError {
    /// A vertex cannot be removed while a face still uses it.
    #[error("vertex {vertex} is still referenced by face {face}")]
    ReferentialIntegrity { vertex: usize, face: usize },

    /// A third face claimed an already occupied side of an edge.
    #[error("non-manifold edge {edge}: slot {slot} already holds face {first}, cannot assign face {second}")]
    NonManifoldEdge {
        edge: Edge,
        slot: usize,
        first: usize,
        second: usize,
    },

    /// A handle was used against a mesh that did not create it.
    #[error("{kind} handle does not belong to this mesh")]
    HandleOwnership { kind: ElementKind },

    /// A handle was created before an index-shifting removal.
    #[error("{kind} handle is outdated (generation {handle}, mesh is at {mesh})")]
    StaleHandle {
        kind: ElementKind,
        handle: u64,
        mesh: u64,
    },

    #[error("{kind} index {index} is out of range (count is {count})")]
    IndexOutOfRange {
        kind: ElementKind,
        index: usize,
        count: usize,
    },

    #[error("edge {edge} is not part of the mesh")]
    MissingEdge { edge: Edge },

    #[error("face ({}, {}, {}) uses the same vertex twice", .vertices[0], .vertices[1], .vertices[2])]
    DegenerateFace { vertices: [usize; 3] },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OFF parse error: {0}")]
    Parse(String),
}

impl MeshError {
    #[must_use]
    pub fn out_of_range(kind: ElementKind, index: usize, count: usize) -> Self {
        Self::IndexOutOfRange { kind, index, count }
    }

    #[must_use]
    pub fn parse(details: impl Into<String>) -> Self {
        Self::Parse(details.into())
    }
}
