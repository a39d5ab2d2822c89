// src/specs/mod.rs
//! Page-specific scraping specs. Each spec knows where the ground
//! truth lives in one page's HTML and how to pull it out; callers
//! decide when to fetch and what to do with the rows. Specs stay pure
//! past the network call so they can be tested offline against
//! captured markup.

pub mod rank;
