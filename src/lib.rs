//! 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 세션/카탈로그를 공유한다.

pub mod app;
pub mod calc;
pub mod catalog;
pub mod config;
pub mod hazard;
pub mod i18n;
pub mod report;
pub mod session;
pub mod ui_cli;
pub mod units;
