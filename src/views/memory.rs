use std::fmt::Write as _;
use std::sync::{Arc, PoisonError, RwLock};

use dashmap::DashMap;

use super::names;
use super::{SelectOption, SelectWidget, TableRow, TableWidget, ViewRegistry, WidgetHandle};

#[derive(Debug, Default)]
struct SelectState {
    options: Vec<SelectOption>,
    selected: Option<String>,
}

/// 内存中的下拉框
#[derive(Debug, Default)]
pub struct MemorySelect {
    state: RwLock<SelectState>,
}

impl MemorySelect {
    pub fn options(&self) -> Vec<SelectOption> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .options
            .clone()
    }
}

impl SelectWidget for MemorySelect {
    fn selected_value(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .selected
            .clone()
    }

    fn replace_options(&self, options: Vec<SelectOption>) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        // 与浏览器一致：替换后默认选中第一项
        state.selected = options
            .first()
            .filter(|option| !option.is_placeholder())
            .map(|option| option.value.clone());
        state.options = options;
    }

    fn select_value(&self, value: &str) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.options.iter().any(|option| option.value == value) {
            state.selected = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            };
            true
        } else {
            false
        }
    }
}

/// 内存中的表格
#[derive(Debug, Default)]
pub struct MemoryTable {
    rows: RwLock<Vec<TableRow>>,
}

impl MemoryTable {
    pub fn rows(&self) -> Vec<TableRow> {
        self.rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TableWidget for MemoryTable {
    fn replace_rows(&self, rows: Vec<TableRow>) {
        *self.rows.write().unwrap_or_else(PoisonError::into_inner) = rows;
    }
}

/// 基于 DashMap 的部件注册表
#[derive(Debug, Default)]
pub struct MemoryViewRegistry {
    selects: DashMap<String, Arc<MemorySelect>>,
    tables: DashMap<String, Arc<MemoryTable>>,
}

impl MemoryViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册展示层约定的全部部件
    pub fn with_standard_widgets() -> Self {
        let registry = Self::new();
        for name in names::COURSE_SELECTS
            .iter()
            .chain(names::TEACHER_SELECTS)
            .chain(names::STUDENT_SELECTS)
        {
            registry.register_select(name);
        }
        for name in names::TABLES {
            registry.register_table(name);
        }
        registry
    }

    pub fn register_select(&self, name: &str) -> Arc<MemorySelect> {
        self.selects
            .entry(names::normalize(name).to_string())
            .or_default()
            .clone()
    }

    pub fn register_table(&self, name: &str) -> Arc<MemoryTable> {
        self.tables
            .entry(names::normalize(name).to_string())
            .or_default()
            .clone()
    }

    pub fn select_widget(&self, name: &str) -> Option<Arc<MemorySelect>> {
        self.selects
            .get(names::normalize(name))
            .map(|entry| entry.value().clone())
    }

    pub fn table_widget(&self, name: &str) -> Option<Arc<MemoryTable>> {
        self.tables
            .get(names::normalize(name))
            .map(|entry| entry.value().clone())
    }

    /// 以文本形式输出所有部件，按名称排序
    pub fn render(&self) -> String {
        let mut out = String::new();

        let mut selects: Vec<(String, Arc<MemorySelect>)> = self
            .selects
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        selects.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, select) in selects {
            let selected = select.selected_value();
            let _ = writeln!(out, "#{name}");
            for option in select.options() {
                let marker = if selected.as_deref() == Some(option.value.as_str()) {
                    '*'
                } else {
                    ' '
                };
                let _ = writeln!(out, "  {marker} [{}] {}", option.value, option.label);
            }
        }

        let mut tables: Vec<(String, Arc<MemoryTable>)> = self
            .tables
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();
        tables.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, table) in tables {
            let _ = writeln!(out, "#{name}");
            for row in table.rows() {
                match row {
                    TableRow::Cells(cells) => {
                        let _ = writeln!(out, "  | {} |", cells.join(" | "));
                    }
                    TableRow::Placeholder { message, .. } => {
                        let _ = writeln!(out, "  ({message})");
                    }
                }
            }
        }

        out
    }
}

impl ViewRegistry for MemoryViewRegistry {
    fn get(&self, name: &str) -> Option<WidgetHandle> {
        if let Some(select) = self.select_widget(name) {
            return Some(WidgetHandle::Select(select as Arc<dyn SelectWidget>));
        }
        self.table_widget(name)
            .map(|table| WidgetHandle::Table(table as Arc<dyn TableWidget>))
    }
}
