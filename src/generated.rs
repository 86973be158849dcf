//! Checked-in output of the `gendist` tool. Consumers that want the table
//! without paying for the (tiny) computation can include this constant;
//! it is pinned to [`crate::distance::EdgeDistances::build`] by a test.

/// Edge distances for all 64 squares, row order N, E, S, W, NE, SE, SW,
/// NW. Generated by `gendist`, do not edit by hand.
pub const EDGE_DISTANCES: [[u8; 8]; 64] = include!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/generated/edge_distances.rs"
));
