//! Design exporters
//!
//! The seam between the lattice pipeline and whatever turns a design into a
//! machine program or a preview. Only a JSON exporter ships here.

use crate::design::LatticeDesign;
use latticekit_core::Result;
use std::io::Write;

/// Trait for design exporters
///
/// Exporters receive the finished design record and write it out in their
/// own format.
pub trait DesignExporter: Send + Sync {
    /// Get the name/identifier of this exporter
    fn name(&self) -> &str;

    /// File extension of the written format, without the dot
    fn extension(&self) -> &str;

    /// Write `design` to `out`
    fn export(&self, design: &LatticeDesign, out: &mut dyn Write) -> Result<()>;

    /// Export into an in-memory buffer
    fn export_to_vec(&self, design: &LatticeDesign) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.export(design, &mut buf)?;
        Ok(buf)
    }
}

/// Writes the design record as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pub pretty: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl DesignExporter for JsonExporter {
    fn name(&self) -> &str {
        "json"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn export(&self, design: &LatticeDesign, out: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, design)?;
        } else {
            serde_json::to_writer(&mut *out, design)?;
        }
        writeln!(out)?;
        Ok(())
    }
}
