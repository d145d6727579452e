//! Precomputed vertex normals
//!
//! MD2 frames store each vertex normal as an index into a fixed set of 162
//! unit directions instead of a full vector.

/// Number of entries in [`NORMALS`]
pub const NORMAL_COUNT: usize = 162;

/// The fixed MD2 normal table
#[rustfmt::skip]
pub const NORMALS: [[f32; 3]; NORMAL_COUNT] = [
    [-0.525731,  0.000000,  0.850651], [-0.442863,  0.238856,  0.864188],
    [-0.295242,  0.000000,  0.955423], [-0.309017,  0.500000,  0.809017],
    [-0.162460,  0.262866,  0.951056], [ 0.000000,  0.000000,  1.000000],
    [ 0.000000,  0.850651,  0.525731], [-0.147621,  0.716567,  0.681718],
    [ 0.147621,  0.716567,  0.681718], [ 0.000000,  0.525731,  0.850651],
    [ 0.309017,  0.500000,  0.809017], [ 0.525731,  0.000000,  0.850651],
    [ 0.295242,  0.000000,  0.955423], [ 0.442863,  0.238856,  0.864188],
    [ 0.162460,  0.262866,  0.951056], [-0.681718,  0.147621,  0.716567],
    [-0.809017,  0.309017,  0.500000], [-0.587785,  0.425325,  0.688191],
    [-0.850651,  0.525731,  0.000000], [-0.864188,  0.442863,  0.238856],
    [-0.716567,  0.681718,  0.147621], [-0.688191,  0.587785,  0.425325],
    [-0.500000,  0.809017,  0.309017], [-0.238856,  0.864188,  0.442863],
    [-0.425325,  0.688191,  0.587785], [-0.716567,  0.681718, -0.147621],
    [-0.500000,  0.809017, -0.309017], [-0.525731,  0.850651,  0.000000],
    [ 0.000000,  0.850651, -0.525731], [-0.238856,  0.864188, -0.442863],
    [ 0.000000,  0.955423, -0.295242], [-0.262866,  0.951056, -0.162460],
    [ 0.000000,  1.000000,  0.000000], [ 0.000000,  0.955423,  0.295242],
    [-0.262866,  0.951056,  0.162460], [ 0.238856,  0.864188,  0.442863],
    [ 0.262866,  0.951056,  0.162460], [ 0.500000,  0.809017,  0.309017],
    [ 0.238856,  0.864188, -0.442863], [ 0.262866,  0.951056, -0.162460],
    [ 0.500000,  0.809017, -0.309017], [ 0.850651,  0.525731,  0.000000],
    [ 0.716567,  0.681718,  0.147621], [ 0.716567,  0.681718, -0.147621],
    [ 0.525731,  0.850651,  0.000000], [ 0.425325,  0.688191,  0.587785],
    [ 0.864188,  0.442863,  0.238856], [ 0.688191,  0.587785,  0.425325],
    [ 0.809017,  0.309017,  0.500000], [ 0.681718,  0.147621,  0.716567],
    [ 0.587785,  0.425325,  0.688191], [ 0.955423,  0.295242,  0.000000],
    [ 1.000000,  0.000000,  0.000000], [ 0.951056,  0.162460,  0.262866],
    [ 0.850651, -0.525731,  0.000000], [ 0.955423, -0.295242,  0.000000],
    [ 0.864188, -0.442863,  0.238856], [ 0.951056, -0.162460,  0.262866],
    [ 0.809017, -0.309017,  0.500000], [ 0.681718, -0.147621,  0.716567],
    [ 0.850651,  0.000000,  0.525731], [ 0.864188,  0.442863, -0.238856],
    [ 0.809017,  0.309017, -0.500000], [ 0.951056,  0.162460, -0.262866],
    [ 0.525731,  0.000000, -0.850651], [ 0.681718,  0.147621, -0.716567],
    [ 0.681718, -0.147621, -0.716567], [ 0.850651,  0.000000, -0.525731],
    [ 0.809017, -0.309017, -0.500000], [ 0.864188, -0.442863, -0.238856],
    [ 0.951056, -0.162460, -0.262866], [ 0.147621,  0.716567, -0.681718],
    [ 0.309017,  0.500000, -0.809017], [ 0.425325,  0.688191, -0.587785],
    [ 0.442863,  0.238856, -0.864188], [ 0.587785,  0.425325, -0.688191],
    [ 0.688191,  0.587785, -0.425325], [-0.147621,  0.716567, -0.681718],
    [-0.309017,  0.500000, -0.809017], [ 0.000000,  0.525731, -0.850651],
    [-0.525731,  0.000000, -0.850651], [-0.442863,  0.238856, -0.864188],
    [-0.295242,  0.000000, -0.955423], [-0.162460,  0.262866, -0.951056],
    [ 0.000000,  0.000000, -1.000000], [ 0.295242,  0.000000, -0.955423],
    [ 0.162460,  0.262866, -0.951056], [-0.442863, -0.238856, -0.864188],
    [-0.309017, -0.500000, -0.809017], [-0.162460, -0.262866, -0.951056],
    [ 0.000000, -0.850651, -0.525731], [-0.147621, -0.716567, -0.681718],
    [ 0.147621, -0.716567, -0.681718], [ 0.000000, -0.525731, -0.850651],
    [ 0.309017, -0.500000, -0.809017], [ 0.442863, -0.238856, -0.864188],
    [ 0.162460, -0.262866, -0.951056], [ 0.238856, -0.864188, -0.442863],
    [ 0.500000, -0.809017, -0.309017], [ 0.425325, -0.688191, -0.587785],
    [ 0.716567, -0.681718, -0.147621], [ 0.688191, -0.587785, -0.425325],
    [ 0.587785, -0.425325, -0.688191], [ 0.000000, -0.955423, -0.295242],
    [ 0.000000, -1.000000,  0.000000], [ 0.262866, -0.951056, -0.162460],
    [ 0.000000, -0.850651,  0.525731], [ 0.000000, -0.955423,  0.295242],
    [ 0.238856, -0.864188,  0.442863], [ 0.262866, -0.951056,  0.162460],
    [ 0.500000, -0.809017,  0.309017], [ 0.716567, -0.681718,  0.147621],
    [ 0.525731, -0.850651,  0.000000], [-0.238856, -0.864188, -0.442863],
    [-0.500000, -0.809017, -0.309017], [-0.262866, -0.951056, -0.162460],
    [-0.850651, -0.525731,  0.000000], [-0.716567, -0.681718, -0.147621],
    [-0.716567, -0.681718,  0.147621], [-0.525731, -0.850651,  0.000000],
    [-0.500000, -0.809017,  0.309017], [-0.238856, -0.864188,  0.442863],
    [-0.262866, -0.951056,  0.162460], [-0.864188, -0.442863,  0.238856],
    [-0.809017, -0.309017,  0.500000], [-0.688191, -0.587785,  0.425325],
    [-0.681718, -0.147621,  0.716567], [-0.442863, -0.238856,  0.864188],
    [-0.587785, -0.425325,  0.688191], [-0.309017, -0.500000,  0.809017],
    [-0.147621, -0.716567,  0.681718], [-0.425325, -0.688191,  0.587785],
    [-0.162460, -0.262866,  0.951056], [ 0.442863, -0.238856,  0.864188],
    [ 0.162460, -0.262866,  0.951056], [ 0.309017, -0.500000,  0.809017],
    [ 0.147621, -0.716567,  0.681718], [ 0.000000, -0.525731,  0.850651],
    [ 0.425325, -0.688191,  0.587785], [ 0.587785, -0.425325,  0.688191],
    [ 0.688191, -0.587785,  0.425325], [-0.955423,  0.295242,  0.000000],
    [-0.951056,  0.162460,  0.262866], [-1.000000,  0.000000,  0.000000],
    [-0.850651,  0.000000,  0.525731], [-0.955423, -0.295242,  0.000000],
    [-0.951056, -0.162460,  0.262866], [-0.864188,  0.442863, -0.238856],
    [-0.951056,  0.162460, -0.262866], [-0.809017,  0.309017, -0.500000],
    [-0.864188, -0.442863, -0.238856], [-0.951056, -0.162460, -0.262866],
    [-0.809017, -0.309017, -0.500000], [-0.681718,  0.147621, -0.716567],
    [-0.681718, -0.147621, -0.716567], [-0.850651,  0.000000, -0.525731],
    [-0.688191,  0.587785, -0.425325], [-0.587785,  0.425325, -0.688191],
    [-0.425325,  0.688191, -0.587785], [-0.425325, -0.688191, -0.587785],
    [-0.587785, -0.425325, -0.688191], [-0.688191, -0.587785, -0.425325],
];

/// Look up a normal by its compressed index
///
/// Returns `None` for indices outside the table.
pub fn normal(index: u8) -> Option<[f32; 3]> {
    NORMALS.get(usize::from(index)).copied()
}
