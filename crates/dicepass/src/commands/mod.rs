pub mod generate;
pub mod import;
pub mod lookup;

pub use generate::GenerateArgs;
