pub mod momentum;

pub use momentum::apply_momentum;
