//! Tightly packed little-endian buffers for uploading to graphics APIs
//!
//! Matrices are written column by column, which is the layout expected by
//! `glUniformMatrix4fv` with `transpose = false` and by WGSL/GLSL `mat4x4` uniforms.

use crate::matrix::Matrix;
use crate::vec::Vector;
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// Element type of the packed buffer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Precision {
    /// 4 bytes per element, values are rounded to the nearest `f32`
    #[default]
    F32,
    F64,
}

impl Precision {
    pub const fn element_size(self) -> usize {
        match self {
            Precision::F32 => 4,
            Precision::F64 => 8,
        }
    }
}

fn write_elements<W: Write>(
    writer: &mut W,
    elements: &[f64],
    precision: Precision,
) -> io::Result<()> {
    for e in elements {
        match precision {
            Precision::F32 => writer.write_f32::<LittleEndian>(*e as f32)?,
            Precision::F64 => writer.write_f64::<LittleEndian>(*e)?,
        }
    }
    Ok(())
}

fn read_elements<R: Read>(
    reader: &mut R,
    elements: &mut [f64],
    precision: Precision,
) -> io::Result<()> {
    for e in elements {
        *e = match precision {
            Precision::F32 => f64::from(reader.read_f32::<LittleEndian>()?),
            Precision::F64 => reader.read_f64::<LittleEndian>()?,
        };
    }
    Ok(())
}

pub fn write_vector<W: Write, const N: usize>(
    writer: &mut W,
    v: &Vector<N>,
    precision: Precision,
) -> io::Result<()> {
    write_elements(writer, v.as_slice(), precision)
}

/// Fails with [`io::ErrorKind::UnexpectedEof`] when the reader runs out of data.
pub fn read_vector<R: Read, const N: usize>(
    reader: &mut R,
    precision: Precision,
) -> io::Result<Vector<N>> {
    let mut v = Vector::zero();
    read_elements(reader, &mut v.0, precision)?;
    Ok(v)
}

pub fn write_matrix<W: Write, const N: usize>(
    writer: &mut W,
    m: &Matrix<N>,
    precision: Precision,
) -> io::Result<()> {
    write_elements(writer, m.as_slice(), precision)
}

/// Fails with [`io::ErrorKind::UnexpectedEof`] when the reader runs out of data.
pub fn read_matrix<R: Read, const N: usize>(
    reader: &mut R,
    precision: Precision,
) -> io::Result<Matrix<N>> {
    let mut m = Matrix::zero();
    read_elements(reader, m.0.as_flattened_mut(), precision)?;
    Ok(m)
}

/// Packs all matrices back to back.
pub fn matrices_to_bytes<const N: usize>(matrices: &[Matrix<N>], precision: Precision) -> Vec<u8> {
    let elements: Vec<f64> = matrices
        .iter()
        .flat_map(|m| m.as_slice().iter().copied())
        .collect();
    to_bytes(&elements, precision)
}

/// Packs all vectors back to back, e.g. a vertex position buffer.
pub fn vectors_to_bytes<const N: usize>(vectors: &[Vector<N>], precision: Precision) -> Vec<u8> {
    let elements: Vec<f64> = vectors
        .iter()
        .flat_map(|v| v.as_slice().iter().copied())
        .collect();
    to_bytes(&elements, precision)
}

fn to_bytes(elements: &[f64], precision: Precision) -> Vec<u8> {
    let size = precision.element_size();
    let mut bytes = vec![0u8; elements.len() * size];
    for (chunk, e) in bytes.chunks_exact_mut(size).zip(elements) {
        match precision {
            Precision::F32 => LittleEndian::write_f32(chunk, *e as f32),
            Precision::F64 => LittleEndian::write_f64(chunk, *e),
        }
    }
    bytes
}
