//! 视图契约
//!
//! 页面上的下拉框和表格由展示层持有，本层只通过名称查找它们。
//! 查找入口 [`ViewRegistry`] 由调用方注入，测试和命令行使用
//! [`MemoryViewRegistry`]。

pub mod memory;
pub mod names;

pub use memory::{MemorySelect, MemoryTable, MemoryViewRegistry};

use std::sync::Arc;

/// 下拉框选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// 值为空的“请选择”占位项
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self::new(String::new(), label)
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// 表格行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Cells(Vec<String>),
    /// 无数据时的占位行，横跨 colspan 列
    Placeholder { message: String, colspan: usize },
}

pub trait SelectWidget: Send + Sync {
    /// 当前选中值，未选或选中占位项时为 None
    fn selected_value(&self) -> Option<String>;
    /// 替换全部选项，选中状态回到第一项
    fn replace_options(&self, options: Vec<SelectOption>);
    /// 按值选中，值不存在时返回 false 且不改变选中状态
    fn select_value(&self, value: &str) -> bool;
}

pub trait TableWidget: Send + Sync {
    fn replace_rows(&self, rows: Vec<TableRow>);
}

#[derive(Clone)]
pub enum WidgetHandle {
    Select(Arc<dyn SelectWidget>),
    Table(Arc<dyn TableWidget>),
}

impl WidgetHandle {
    pub fn as_select(&self) -> Option<&Arc<dyn SelectWidget>> {
        match self {
            WidgetHandle::Select(select) => Some(select),
            WidgetHandle::Table(_) => None,
        }
    }

    pub fn as_table(&self) -> Option<&Arc<dyn TableWidget>> {
        match self {
            WidgetHandle::Table(table) => Some(table),
            WidgetHandle::Select(_) => None,
        }
    }
}

/// 按名称查找视图部件
pub trait ViewRegistry: Send + Sync {
    fn get(&self, name: &str) -> Option<WidgetHandle>;

    fn select(&self, name: &str) -> Option<Arc<dyn SelectWidget>> {
        self.get(name).and_then(|handle| handle.as_select().cloned())
    }

    fn table(&self, name: &str) -> Option<Arc<dyn TableWidget>> {
        self.get(name).and_then(|handle| handle.as_table().cloned())
    }
}
