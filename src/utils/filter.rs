//! 本地搜索过滤
//!
//! 搜索词为空时按原顺序截取前 `limit` 条；否则返回所有名称（学生/教师还包括
//! 学号/工号）不区分大小写包含搜索词的记录，此时不做数量限制。

use serde_json::Value;

use crate::models::courses::Course;
use crate::models::students::Student;
use crate::models::teachers::Teacher;

pub const DEFAULT_FILTER_LIMIT: usize = 25;

/// 可参与本地搜索的记录
pub trait Searchable {
    /// 名称；没有名称的记录永远不匹配
    fn search_name(&self) -> Option<&str>;

    /// 附加的标识字段（学号、工号）
    fn search_code(&self) -> Option<&str> {
        None
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

impl Searchable for Course {
    fn search_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
}

impl Searchable for Student {
    fn search_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    fn search_code(&self) -> Option<&str> {
        non_empty(&self.student_id)
    }
}

impl Searchable for Teacher {
    fn search_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    fn search_code(&self) -> Option<&str> {
        non_empty(&self.teacher_id)
    }
}

impl Searchable for Value {
    fn search_name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str).and_then(non_empty)
    }

    // 学号优先，其次工号
    fn search_code(&self) -> Option<&str> {
        let field = |key: &str| self.get(key).and_then(Value::as_str).and_then(non_empty);
        field("student_id").or_else(|| field("teacher_id"))
    }
}

fn matches<T: Searchable>(item: &T, needle: &str) -> bool {
    let Some(name) = item.search_name() else {
        return false;
    };
    name.to_lowercase().contains(needle)
        || item
            .search_code()
            .is_some_and(|code| code.to_lowercase().contains(needle))
}

pub fn filter_with_limit<T: Searchable + Clone>(items: &[T], search: &str, limit: usize) -> Vec<T> {
    if search.trim().is_empty() {
        return items.iter().take(limit).cloned().collect();
    }

    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| matches(*item, &needle))
        .cloned()
        .collect()
}

/// 使用默认上限 [`DEFAULT_FILTER_LIMIT`]
pub fn filter_records<T: Searchable + Clone>(items: &[T], search: &str) -> Vec<T> {
    filter_with_limit(items, search, DEFAULT_FILTER_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input() {
        let items: Vec<Course> = Vec::new();
        assert!(filter_with_limit(&items, "", 25).is_empty());
    }

    #[test]
    fn test_blank_search_takes_first_items_in_order() {
        let items: Vec<Course> = (0..30)
            .map(|i| Course::new(i, format!("Course {i:02}")))
            .collect();
        let result = filter_with_limit(&items, "   ", 25);
        assert_eq!(result.len(), 25);
        assert_eq!(result, items[..25].to_vec());
    }

    #[test]
    fn test_student_code_matches_case_insensitively() {
        let items = vec![Student::new("S1", "Alice"), Student::new("S2", "Bob")];
        assert_eq!(filter_with_limit(&items, "s1", 25), vec![Student::new("S1", "Alice")]);
    }

    #[test]
    fn test_no_match() {
        let items = vec![json!({"name": "Alice"})];
        assert!(filter_with_limit(&items, "Z", 25).is_empty());
    }

    #[test]
    fn test_match_branch_is_not_capped() {
        let items: Vec<Teacher> = (0..40)
            .map(|i| Teacher::new(format!("T{i}"), format!("Teacher {i}")))
            .collect();
        assert_eq!(filter_with_limit(&items, "teacher", 25).len(), 40);
    }

    #[test]
    fn test_course_code_like_fields_are_ignored() {
        let items = vec![json!({"name": "Math", "id": 7})];
        assert!(filter_with_limit(&items, "7", 25).is_empty());
        let items = vec![Course::new(7, "Math")];
        assert!(filter_with_limit(&items, "7", 25).is_empty());
    }

    #[test]
    fn test_json_records_follow_shape() {
        let items = vec![
            json!({"name": "Wang", "teacher_id": "T100"}),
            json!({"name": "Li", "student_id": "S200"}),
            json!({"student_id": "S300"}),
        ];
        assert_eq!(filter_with_limit(&items, "t100", 25), vec![items[0].clone()]);
        assert_eq!(filter_with_limit(&items, "S200", 25), vec![items[1].clone()]);
        // 没有名称的记录不匹配
        assert!(filter_with_limit(&items, "S300", 25).is_empty());
    }

    #[test]
    fn test_default_limit() {
        let items: Vec<Student> = (0..30)
            .map(|i| Student::new(format!("S{i}"), format!("Student {i}")))
            .collect();
        assert_eq!(filter_records(&items, "").len(), DEFAULT_FILTER_LIMIT);
    }
}
