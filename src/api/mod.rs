//! Внешний API расчёта.
//!
//! - dto.rs – запрос/ответ в виде, удобном для JSON;
//! - commands.rs – выполнить расчёт по запросу;
//! - errors.rs – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;

pub use commands::*;
pub use dto::*;
pub use errors::*;
