pub mod collapse;
pub mod combined;
pub mod filter;
pub mod markers;
pub mod merge;
pub mod timeline;
pub mod timezone;
