//! Data types shared by the whole crate: expression trees and the fold list

pub mod list;
pub mod node;
pub mod operators;
