pub mod audio;
pub mod authorization;
pub mod credentials;
pub mod observability;
