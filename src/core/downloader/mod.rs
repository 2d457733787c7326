mod client;

pub use client::{download_file, fetch_json, Downloader, Fetch};
