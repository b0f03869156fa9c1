//! Binary trace writer.
//!
//! Wire format, little-endian throughout:
//!
//! ```text
//! [ tick_count: u32 ]                         (placeholder, rewritten on finish)
//! per tick:
//!   [ agent_count: u32 ]
//!   [ x: i16, y: i16 ] * agent_count
//!   [ sentinel: u64 = 0xFFFF0000FFFF0000 ]
//!   [ alpha: u8 ] * (HEATMAP_WIDTH * HEATMAP_HEIGHT)
//! ```
//!
//! Field widths are fixed at 32 bits rather than a platform `size_t` (see
//! DESIGN.md's Open Question decisions).

use std::fs::File;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use pedsim_agent::AgentStore;

use crate::error::{TraceError, TraceResult};

const SENTINEL: u64 = 0xFFFF_0000_FFFF_0000;
const HEATMAP_WIDTH: usize = 800;
const HEATMAP_HEIGHT: usize = 600;
const HEATMAP_BAND_LEN: usize = HEATMAP_WIDTH * HEATMAP_HEIGHT;

/// Writes one binary trace file, one frame per call to [`write_frame`](Self::write_frame).
pub struct TraceWriter {
    file: File,
    tick_count: u32,
    finished: bool,
}

impl TraceWriter {
    /// Create `path`, writing the placeholder tick-count header.
    pub fn new(path: &Path) -> TraceResult<Self> {
        let mut file = File::create(path)?;
        file.write_all(&0u32.to_le_bytes())?;
        Ok(Self { file, tick_count: 0, finished: false })
    }

    /// Append one tick's frame: agent positions, the sentinel, and a
    /// placeholder all-zero heatmap alpha band.
    pub fn write_frame(&mut self, positions: &AgentStore) -> TraceResult<()> {
        let count = positions.count() as u32;
        self.file.write_all(&count.to_le_bytes())?;

        for id in positions.agent_ids() {
            let agent = positions.agent(id);
            self.file.write_all(&(agent.x as i16).to_le_bytes())?;
            self.file.write_all(&(agent.y as i16).to_le_bytes())?;
        }

        self.file.write_all(&SENTINEL.to_le_bytes())?;
        self.file.write_all(&[0u8; HEATMAP_BAND_LEN])?;

        self.tick_count += 1;
        Ok(())
    }

    /// Seek back and rewrite the true tick count. Safe to call more than
    /// once; subsequent calls are no-ops.
    pub fn finish(&mut self) -> TraceResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(&self.tick_count.to_le_bytes())?;
        self.file.flush().map_err(TraceError::from)
    }
}

impl Drop for TraceWriter {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}
