//! times-normalize: cumulative distributions of timing samples.
//!
//! Reads `times-<digit>.txt` files of raw timing values, writes one
//! sorted cumulative-percentage table per input, and emits a gnuplot
//! script plotting all of them. The companion fix-times binary
//! produces those sample sets by timing FIX message parsing.

pub mod capture;
pub mod dataset;
pub mod discover;
pub mod fix;
pub mod normalize;
pub mod plot;
