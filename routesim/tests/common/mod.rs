#![allow(dead_code)]

pub mod graphs;
pub mod reference;
