//! The `Simd` backend: vectorized desired-position computation over the
//! `AgentStore`'s SoA mirrors.
//!
//! Fast-path only, like the other two parallel backends — committed cells
//! are never checked against neighbours.
//!
//! Arithmetic (the diff, the squared length, the square root, the division)
//! runs 8 agents at a time through `std::simd::f32x8`. The one place this
//! backend cannot stay vectorized is waypoint-queue rotation: a reached
//! waypoint mutates a `VecDeque`, which has no SIMD representation, so
//! reached lanes fall back to [`Agent::rotate_queue`] one at a time before
//! the vector pass resumes. Final rounding uses
//! [`round_half_to_even`][pedsim_core::round_half_to_even] per lane rather
//! than `Simd::round()` (which rounds half-away-from-zero) so this backend's
//! output is bit-for-bit identical to every other backend's.
//!
//! `xs`/`ys` are never mutated mid-chunk, so a full 8-agent chunk loads
//! straight off [`AlignedF32Buffer`][pedsim_agent::AlignedF32Buffer]'s
//! backing storage with [`f32x8::from_slice`] instead of staging through a
//! scratch array first; only the ragged tail chunk (when `count` isn't a
//! multiple of 8) pays for the copy.

use std::simd::{f32x8, StdFloat};

use pedsim_agent::{AgentStore, WaypointCatalogue};
use pedsim_core::{round_half_to_even, EPSILON};

const LANES: usize = 8;

/// Load `len` lanes starting at `start` from `buf`. A full chunk reads
/// directly off the aligned backing slice; a ragged tail is padded with
/// zeros through `scratch`.
fn load_chunk(buf: &pedsim_agent::AlignedF32Buffer, start: usize, len: usize) -> f32x8 {
    if len == LANES {
        f32x8::from_slice(&buf.as_slice()[start..start + LANES])
    } else {
        let mut scratch = [0f32; LANES];
        scratch[..len].copy_from_slice(&buf[start..start + len]);
        f32x8::from_array(scratch)
    }
}

pub fn run(store: &mut AgentStore, catalogue: &WaypointCatalogue) {
    store.sync_soa_from_agents();

    let count = store.count();
    let mut chunk_start = 0;
    while chunk_start < count {
        let chunk_len = LANES.min(count - chunk_start);
        step_chunk(store, catalogue, chunk_start, chunk_len);
        chunk_start += chunk_len;
    }

    store.sync_soa_from_agents();
}

fn step_chunk(
    store: &mut AgentStore,
    catalogue: &WaypointCatalogue,
    start: usize,
    len: usize,
) {
    let xs_v = load_chunk(&store.xs, start, len);
    let ys_v = load_chunk(&store.ys, start, len);
    let xs = xs_v.to_array();
    let ys = ys_v.to_array();

    let mut dest_xs = [0f32; LANES];
    let mut dest_ys = [0f32; LANES];
    let mut dest_rs = [0f32; LANES];
    let mut idle = [false; LANES];
    dest_xs[..len].copy_from_slice(&store.dest_xs[start..start + len]);
    dest_ys[..len].copy_from_slice(&store.dest_ys[start..start + len]);
    dest_rs[..len].copy_from_slice(&store.dest_rs[start..start + len]);
    for lane in 0..len {
        let id = pedsim_core::AgentId((start + lane) as u32);
        if store.agent(id).current_waypoint().is_none() {
            // Empty queue: dest fields are meaningless zeros, so this lane
            // sits out the vector pass entirely and keeps its own position.
            idle[lane] = true;
            dest_xs[lane] = xs[lane];
            dest_ys[lane] = ys[lane];
            dest_rs[lane] = 0.0;
        }
    }

    let (mut diff_x, mut diff_y, mut length) =
        direction_and_length(xs, ys, dest_xs, dest_ys);

    // Scalar fallback for reached lanes: waypoint rotation touches a
    // `VecDeque`, which has no vector form.
    for lane in 0..len {
        if !idle[lane] && length[lane] < dest_rs[lane] {
            let agent_index = start + lane;
            let id = pedsim_core::AgentId(agent_index as u32);
            let agent = store.agent_mut(id);
            agent.rotate_queue(catalogue);
            let (dx, dy, dr) = agent.dest();
            dest_xs[lane] = dx as f32;
            dest_ys[lane] = dy as f32;
            dest_rs[lane] = dr as f32;
            diff_x[lane] = dest_xs[lane] - xs[lane];
            diff_y[lane] = dest_ys[lane] - ys[lane];
            length[lane] = (diff_x[lane] * diff_x[lane] + diff_y[lane] * diff_y[lane]).sqrt();
        }
    }

    let diff_x_v = f32x8::from_array(diff_x);
    let diff_y_v = f32x8::from_array(diff_y);
    let length_v = f32x8::from_array(length) + f32x8::splat(EPSILON);

    let new_x = xs_v + diff_x_v / length_v;
    let new_y = ys_v + diff_y_v / length_v;

    let new_x = new_x.to_array().map(round_half_to_even);
    let new_y = new_y.to_array().map(round_half_to_even);

    for lane in 0..len {
        let agent_index = start + lane;
        let id = pedsim_core::AgentId(agent_index as u32);
        let agent = store.agent_mut(id);
        agent.commit(new_x[lane] as i32, new_y[lane] as i32);
    }
}

fn direction_and_length(
    xs: [f32; LANES],
    ys: [f32; LANES],
    dest_xs: [f32; LANES],
    dest_ys: [f32; LANES],
) -> ([f32; LANES], [f32; LANES], [f32; LANES]) {
    let diff_x = f32x8::from_array(dest_xs) - f32x8::from_array(xs);
    let diff_y = f32x8::from_array(dest_ys) - f32x8::from_array(ys);
    let length = (diff_x * diff_x + diff_y * diff_y).sqrt();
    (diff_x.to_array(), diff_y.to_array(), length.to_array())
}
