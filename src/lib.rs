//! Scan a Cloudinary account's uploaded images for keyword matches on
//! `public_id` and export the matches as a JS snippet, a URL list and JSON.

pub mod cloudinary;
pub mod config;
pub mod output;
pub mod report;
pub mod resource;
