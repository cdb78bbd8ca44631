pub mod union;
