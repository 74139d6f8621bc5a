//! Quantizer configuration.
//!
//! These parameters are fixed system-wide in any real deployment: changing
//! any of them invalidates every previously issued `HelperData`, since a
//! reproduction quantized under different parameters will not land on the
//! same bit positions as the enrollment quantization.

use serde::{Deserialize, Serialize};

/// Quantizer parameters. See the module docs for the invalidation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantParams {
    /// Spatial grid cell size, in micrometers.
    pub grid_cell_um: u32,
    /// Number of angular bins a full rotation is divided into.
    pub angle_bins: u16,
    /// Sensor image width, in micrometers.
    pub image_width_um: u32,
    /// Sensor image height, in micrometers.
    pub image_height_um: u32,
    /// Minimum number of set bits a quantized vector must have to be
    /// considered a usable template.
    pub min_set_bits: u32,
}

impl Default for QuantParams {
    fn default() -> Self {
        Self {
            grid_cell_um: 50,
            angle_bins: 32,
            image_width_um: 12_800,
            image_height_um: 16_000,
            min_set_bits: 12,
        }
    }
}

impl QuantParams {
    /// Number of spatial columns in the grid.
    #[must_use]
    pub fn cells_x(&self) -> u32 {
        self.image_width_um.div_ceil(self.grid_cell_um).max(1)
    }

    /// Number of spatial rows in the grid.
    #[must_use]
    pub fn cells_y(&self) -> u32 {
        self.image_height_um.div_ceil(self.grid_cell_um).max(1)
    }
}
