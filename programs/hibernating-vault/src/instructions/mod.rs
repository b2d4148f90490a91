pub mod deposit;
pub mod hibernate;
pub mod initialize;
pub mod initialize_config;
pub mod update_root;
pub mod wake_up;
pub mod withdraw;

pub use deposit::*;
pub use hibernate::*;
pub use initialize::*;
pub use initialize_config::*;
pub use update_root::*;
pub use wake_up::*;
pub use withdraw::*;
