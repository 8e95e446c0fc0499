//! stuff-feed - an RSS feed and index page for a directory of HTML posts.
//!
//! Every run rescans the posts directory, pulls title, description and
//! keywords out of each document's head, takes the `<main>` block as the
//! feed body and the file's creation time as its date, then writes:
//!
//! - an RSS 2.0 feed (`../feed` relative to the posts directory)
//! - an HTML index of every post (`index.html`)
//!
//! Output is always regenerated in full; there is no cache.

pub mod cli;
pub mod config;
pub mod embed;
pub mod generator;
pub mod logger;
pub mod page;
pub mod utils;
