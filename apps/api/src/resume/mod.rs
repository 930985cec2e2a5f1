// Resume content: the line classifier, the built-in sample, and the content endpoints.

pub mod handlers;
pub mod lines;
pub mod sample;
