pub mod api;
pub mod arguments;
pub mod run;

pub use self::run::run;
