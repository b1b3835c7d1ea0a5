pub mod hash;
pub mod locate;
pub mod properties;
pub mod relativize;
