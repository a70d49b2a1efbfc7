//MIT License
#![allow(non_snake_case)]
pub mod Utils;
pub mod equation;
pub mod render;
