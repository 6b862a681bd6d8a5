mod parser_cfg;
mod parser_cfg_builder;

pub use parser_cfg::*;
pub use parser_cfg_builder::*;
