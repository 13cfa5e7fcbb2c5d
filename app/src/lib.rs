pub mod context;
pub mod launch;
pub mod options;
pub mod prepare;
