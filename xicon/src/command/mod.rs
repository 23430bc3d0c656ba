mod generate;
mod plan;

pub use generate::generate;
pub use plan::plan;
