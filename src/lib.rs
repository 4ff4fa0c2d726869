pub mod engine;
mod root;
mod ui;

pub use root::RootState;
