pub mod app;
pub mod core;
pub mod corpus;
pub mod fixture;
pub mod pipeline;
pub mod results;
pub mod scanner;
