pub mod exam;
pub mod mcq;
pub mod probes;
pub mod results;

#[cfg(test)]
pub(crate) mod testing;
