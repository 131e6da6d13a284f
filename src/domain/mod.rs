//! Domain Layer - 领域层
//!
//! - Chapter Context: 章节代码

pub mod chapter;
