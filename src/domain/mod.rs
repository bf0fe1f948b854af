pub mod allocator;
pub mod currency;
pub mod discount;
pub mod engine;
pub mod pricing;
pub mod reporter;
pub mod segmenter;
pub mod vehicle;
