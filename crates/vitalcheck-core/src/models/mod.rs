pub mod flow;
pub mod input;
pub mod session;
