//! EduAdmin - 教务管理 REST 客户端
//!
//! 封装教务后端的课程、学生、教师、选课、成绩与作业接口，并在资源变化后
//! 重建绑定到这些资源的下拉框与表格。
//!
//! # 架构
//! - `client`: HTTP 传输、响应规整与失败策略
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `notify`: 面向用户的失败提示
//! - `refresh`: 视图刷新与级联
//! - `services`: 各资源接口与身份解析
//! - `utils`: 本地搜索过滤
//! - `views`: 视图部件抽象与内存实现

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod notify;
pub mod refresh;
pub mod services;
pub mod utils;
pub mod views;
