//! Grid-and-angle quantization: turns a finger's minutiae into the 127-bit
//! vector the BCH codec and fuzzy extractor operate on.

use tracing::debug;

use crate::error::QuantizeError;
use crate::minutia::FingerTemplate;
use crate::params::QuantParams;
use crate::vector::QuantizedVector;

/// Width of the 127-bit output space every `(cell, angle_bin)` pair is
/// folded into.
const OUTPUT_BITS: u32 = 127;

/// Quantizes a finger template into a fixed-length 127-bit vector.
///
/// Every minutia is binned into a `(cell_index, angle_bin)` pair and the
/// corresponding output bit is set (collisions OR together, so duplicate
/// minutiae landing in the same bin do not compound). The function is pure
/// and order-independent: permuting or duplicating `template.minutiae`
/// never changes the result.
///
/// Small positional jitter (at most one cell) or angular jitter (at most
/// one angle bin) on a single minutia changes the `(cell, angle_bin)` pair
/// it lands in, which changes at most two output bits — the bit the
/// unperturbed minutia would have set, and the bit the perturbed one sets
/// instead (fewer than two if another minutia also sets one of them). The
/// BCH(127,64,10) code is sized to absorb the accumulated bit flips across
/// a full ten-point perturbation.
///
/// # Errors
/// Returns [`QuantizeError::InsufficientFeatures`] if `template.minutiae`
/// is empty or the resulting vector has fewer than `params.min_set_bits`
/// set bits.
pub fn quantize(
    template: &FingerTemplate,
    params: &QuantParams,
) -> Result<QuantizedVector, QuantizeError> {
    if template.minutiae.is_empty() {
        return Err(QuantizeError::InsufficientFeatures);
    }

    let mut vector = QuantizedVector::zero();
    for minutia in &template.minutiae {
        let position = bin_position(minutia.x, minutia.y, minutia.theta_deg, params);
        vector.0.set(position, true);
    }

    if vector.count_ones() < params.min_set_bits {
        debug!(
            finger = template.finger_id.tag(),
            set_bits = vector.count_ones(),
            min_required = params.min_set_bits,
            "quantized vector below minimum set-bit threshold"
        );
        return Err(QuantizeError::InsufficientFeatures);
    }

    Ok(vector)
}

/// Maps one minutia's `(cell_index, angle_bin)` pair to an output bit
/// position in `0..127`.
///
/// The map is a pure function of `params` and is fixed per-deployment: any
/// change to `grid_cell_um`, `angle_bins`, or the image dimensions changes
/// every bit position and invalidates previously issued helper data.
fn bin_position(x: u32, y: u32, theta_deg: u16, params: &QuantParams) -> usize {
    let cell_x = (x / params.grid_cell_um).min(params.cells_x() - 1);
    let cell_y = (y / params.grid_cell_um).min(params.cells_y() - 1);
    let cell_index = u64::from(cell_y) * u64::from(params.cells_x()) + u64::from(cell_x);

    let bin_width = 360 / u32::from(params.angle_bins).max(1);
    let angle_bin = u64::from(u32::from(theta_deg) / bin_width.max(1));

    let combined = cell_index * u64::from(params.angle_bins) + angle_bin;
    (combined % u64::from(OUTPUT_BITS)) as usize
}
