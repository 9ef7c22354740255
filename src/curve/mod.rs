pub mod builder;
pub(crate) mod sampler;
