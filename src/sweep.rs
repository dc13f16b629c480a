//! Iteration shapes shared by the generators.
//!
//! Every generator walks particles in one of a few fixed ways: a straight
//! parametric sweep, a square lattice, or a set of equal-length segments
//! (lines, rays, rings, polyhedron edges). These iterators carry the loop
//! bounds so no generator can write past `count`.
//!
//! ```ignore
//! for (index, cell) in grid_sweep(count) {
//!     let x = cell.u * 600.0 * config.spread;
//!     let z = cell.v * 600.0 * config.spread;
//!     // ...
//! }
//! ```

/// Normalized progress `i / count` in `[0, 1)`.
#[inline]
pub fn progress(index: usize, count: usize) -> f32 {
    index as f32 / count as f32
}

/// Parametric sweep: yields `(index, t)` with `t = index / count`.
pub fn parametric(count: usize) -> impl Iterator<Item = (usize, f32)> {
    (0..count).map(move |i| (i, progress(i, count)))
}

/// Side length of the smallest square lattice holding `count` particles.
pub fn grid_side(count: usize) -> usize {
    (count as f64).sqrt().ceil() as usize
}

/// One lattice point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// Outer (first axis) lattice index.
    pub row: usize,
    /// Inner (second axis) lattice index.
    pub col: usize,
    /// `row / side - 0.5`, in `[-0.5, 0.5)`.
    pub u: f32,
    /// `col / side - 0.5`, in `[-0.5, 0.5)`.
    pub v: f32,
}

/// All cells of a `side × side` lattice, row-major.
pub fn lattice(side: usize) -> impl Iterator<Item = GridCell> {
    (0..side).flat_map(move |row| {
        (0..side).map(move |col| GridCell {
            row,
            col,
            u: row as f32 / side as f32 - 0.5,
            v: col as f32 / side as f32 - 0.5,
        })
    })
}

/// Grid sweep: the first `count` cells of a `ceil(sqrt(count))²` lattice.
pub fn grid_sweep(count: usize) -> impl Iterator<Item = (usize, GridCell)> {
    lattice(grid_side(count)).take(count).enumerate()
}

/// One particle placed on a segment (line, ray, ring or edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSample {
    /// Buffer index of the particle.
    pub index: usize,
    /// Which segment the particle belongs to.
    pub segment: usize,
    /// Position along the segment, `step / per_segment` in `[0, 1)`.
    pub t: f32,
}

/// Segment sweep: `per_segment` particles on each of `segments`, buffer
/// indices starting at `start`, stopping once an index reaches `limit`.
///
/// Remainders are not redistributed: if `segments * per_segment` is below
/// the budget, the trailing slots are never visited.
pub fn segments(
    start: usize,
    limit: usize,
    segments: usize,
    per_segment: usize,
) -> impl Iterator<Item = SegmentSample> {
    let segments = if per_segment == 0 { 0 } else { segments };
    (0..segments)
        .flat_map(move |segment| {
            (0..per_segment).map(move |step| (segment, step))
        })
        .enumerate()
        .map(move |(n, (segment, step))| SegmentSample {
            index: start + n,
            segment,
            t: progress(step, per_segment),
        })
        .take_while(move |s| s.index < limit)
}

/// Edge sweep: `count / edges` particles on each edge, in edge order.
pub fn edge_sweep(count: usize, edges: usize) -> impl Iterator<Item = SegmentSample> {
    let per_edge = if edges == 0 { 0 } else { count / edges };
    segments(0, count, edges, per_edge)
}
