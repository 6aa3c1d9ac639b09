mod common;
mod filter;
mod render;
