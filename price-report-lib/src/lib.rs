pub mod codec;
pub mod currency;
pub mod snapshot;
pub mod torob;
