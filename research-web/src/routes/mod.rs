pub mod studies;

mod not_found;

pub use not_found::NotFound;
