//! Four-lane 32-bit mixing hash.
//!
//! The mixer absorbs a canonical sequence one UTF-16 code unit at a time
//! into four wrapping `u32` lanes, then projects 6-bit symbol indices out
//! of the final state.
//!
//! Lane arithmetic is explicit: `wrapping_mul` for the 32-bit multiplies,
//! logical `>>` on `u32` while mixing, and arithmetic `>>` on the `i32`
//! reinterpretation while projecting. Mixing those up changes the output.

/// Initial lane values.
const SEED: [u32; 4] = [1_779_033_703, 3_144_134_277, 1_013_904_242, 2_773_480_762];

/// Per-lane multipliers for the cross-lane step.
const CROSS: [u32; 4] = [597_399_067, 2_869_860_233, 951_274_213, 2_716_044_179];

/// Per-lane multipliers for the avalanche step.
const AVALANCHE: [u32; 4] = [2_246_822_507, 3_266_489_909, 2_246_822_507, 3_266_489_909];

/// Per-lane logical shift for the avalanche step.
const AVALANCHE_SHIFT: [u32; 4] = [16, 13, 16, 13];

/// Mask selecting a 6-bit symbol index.
const INDEX_MASK: i32 = 63;

/// Number of distinct projections before the output repeats.
pub const PROJECTION_PERIOD: usize = 20;

/// Snapshot of the four hash lanes.
///
/// A plain value: every step takes a state and returns the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneState {
    /// Lanes `h1..h4`.
    pub lanes: [u32; 4],
}

impl LaneState {
    /// State before any input has been absorbed.
    pub const INITIAL: LaneState = LaneState { lanes: SEED };
}

impl Default for LaneState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Absorb one code unit into `state`.
pub fn absorb(state: LaneState, unit: u16) -> LaneState {
    let [h1, h2, h3, h4] = state.lanes;

    let c1 = h2 ^ h1.wrapping_mul(CROSS[0]);
    let c2 = h3 ^ h2.wrapping_mul(CROSS[1]);
    let c3 = h4 ^ h3.wrapping_mul(CROSS[2]);
    // Lane 4 takes the already-updated lane 1.
    let c4 = c1 ^ h4.wrapping_mul(CROSS[3]);

    let avalanche = |i: usize, c: u32| (c ^ (c >> AVALANCHE_SHIFT[i])).wrapping_mul(AVALANCHE[i]);

    LaneState {
        lanes: [
            avalanche(0, c1) ^ u32::from(unit),
            avalanche(1, c2),
            avalanche(2, c3),
            avalanche(3, c4),
        ],
    }
}

/// Absorb every code unit of `units`, left to right, starting from
/// [`LaneState::INITIAL`].
pub fn mix_units<I>(units: I) -> LaneState
where
    I: IntoIterator<Item = u16>,
{
    units.into_iter().fold(LaneState::INITIAL, absorb)
}

/// Absorb the UTF-16 code units of `text`.
pub fn mix_str(text: &str) -> LaneState {
    mix_units(text.encode_utf16())
}

/// 6-bit symbol index for output position `position`.
///
/// Lane selection cycles every 4 positions and the shift every 5, so the
/// projection repeats with period [`PROJECTION_PERIOD`].
pub fn project(state: &LaneState, position: usize) -> usize {
    let lane = state.lanes[position % 4] as i32;
    let shift = (position % 5) * 3;
    ((lane >> shift) & INDEX_MASK) as usize
}
