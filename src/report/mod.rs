//! Текстовый отчёт по расчёту: таблицы банков по ранам и итоговые стеки.
//!
//! Чистый потребитель `Settlement`, ничего не пересчитывает.

pub mod table;

use serde::{Deserialize, Serialize};

pub use table::render_settlement;

/// Настройки отчёта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Подсвечивать (затемнять) игроков, которые не претендуют на банк.
    pub color: bool,
    /// Ширина колонки игрока.
    pub column_width: usize,
    /// Показывать строки по каждому рану, а не только итог банка.
    pub show_runs: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            color: true,
            column_width: 10,
            show_runs: true,
        }
    }
}

impl ReportConfig {
    /// Конфиг без ANSI-цветов (файлы, тесты).
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }
}
