/// Confidence table: increments, saturation decay, ceiling bound.
pub mod fdt;




/// Mutex-guarded handle.
pub mod shared;
