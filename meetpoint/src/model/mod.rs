pub mod city;
pub mod coordinate;
pub mod estimate;
pub mod geocode;
pub mod geometry;
pub mod optimizer;
pub mod scoring;
pub mod window;
