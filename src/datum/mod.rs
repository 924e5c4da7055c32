//! Datum obfuscation transforms: WGS84 <-> GCJ02 <-> BD09.

pub mod bd09;
pub mod gcj02;

pub use bd09::{bd09_to_gcj02, bd09_to_wgs84, bd09_to_wgs84_exact, gcj02_to_bd09, wgs84_to_bd09};
pub use gcj02::{
    gcj02_to_wgs84, gcj02_to_wgs84_exact, is_outside_china, wgs84_to_gcj02, Gcj02Inverse,
};
