pub mod extract;
pub mod info;
pub mod pages;
pub mod split;
