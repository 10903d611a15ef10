use tracing::debug;

use crate::models::courses::Course;
use crate::models::students::Student;
use crate::models::teachers::Teacher;
use crate::views::{TableRow, ViewRegistry};

pub const NO_DATA: &str = "No data";
pub const NO_COURSES: &str = "No courses";

pub const TEACHER_COLUMNS: usize = 2;
pub const STUDENT_COLUMNS: usize = 3;
pub const COURSE_COLUMNS: usize = 4;

pub fn teacher_row(teacher: &Teacher) -> Vec<String> {
    vec![teacher.name.clone(), teacher.teacher_id.clone()]
}

pub fn student_row(student: &Student) -> Vec<String> {
    vec![
        student.name.clone(),
        student.student_id.clone(),
        student
            .enrollment_year
            .map(|year| year.to_string())
            .unwrap_or_default(),
    ]
}

pub fn course_row(course: &Course) -> Vec<String> {
    vec![
        course.name.clone(),
        course.learn_time.clone().unwrap_or_default(),
        course
            .credit
            .map(|credit| credit.to_string())
            .unwrap_or_default(),
        course.times.clone().unwrap_or_default(),
    ]
}

/// 重绘表格：每条记录一行，空集合渲染一行占位
///
/// 部件不存在时返回 false。
pub fn render_table(
    views: &dyn ViewRegistry,
    name: &str,
    rows: Vec<Vec<String>>,
    columns: usize,
    empty_message: &str,
) -> bool {
    let Some(table) = views.table(name) else {
        debug!("Table '{}' is not present, skipping", name);
        return false;
    };

    let rows = if rows.is_empty() {
        vec![TableRow::Placeholder {
            message: empty_message.to_string(),
            colspan: columns,
        }]
    } else {
        rows.into_iter().map(TableRow::Cells).collect()
    };
    table.replace_rows(rows);
    true
}
