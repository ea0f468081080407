//! 工具函数模块

mod log_sanitizer;

pub(crate) use log_sanitizer::truncate_for_log;
