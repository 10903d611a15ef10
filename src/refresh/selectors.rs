use tracing::debug;

use crate::models::courses::Course;
use crate::models::students::Student;
use crate::models::teachers::Teacher;
use crate::views::{SelectOption, ViewRegistry};

pub const COURSE_PLACEHOLDER: &str = "Select a course";
pub const TEACHER_PLACEHOLDER: &str = "Select a teacher";
pub const STUDENT_PLACEHOLDER: &str = "Select a student";

pub fn course_option(course: &Course) -> SelectOption {
    SelectOption::new(course.id.to_string(), course.name.clone())
}

pub fn teacher_option(teacher: &Teacher) -> SelectOption {
    SelectOption::new(
        teacher.teacher_id.clone(),
        format!("{} - {}", teacher.name, teacher.teacher_id),
    )
}

pub fn student_option(student: &Student) -> SelectOption {
    SelectOption::new(
        student.student_id.clone(),
        format!("{} - {}", student.name, student.student_id),
    )
}

/// 用占位项加记录选项重建一组下拉框
///
/// 原先选中的值如果仍在新选项中则恢复选中。不存在的部件直接跳过，
/// 返回实际更新的部件数。
pub fn populate_selects(
    views: &dyn ViewRegistry,
    names: &[&str],
    placeholder: &str,
    options: &[SelectOption],
) -> usize {
    let mut updated = 0;
    for name in names {
        let Some(select) = views.select(name) else {
            debug!("Select '{}' is not present, skipping", name);
            continue;
        };

        let previous = select.selected_value();

        let mut all = Vec::with_capacity(options.len() + 1);
        all.push(SelectOption::placeholder(placeholder));
        all.extend(options.iter().cloned());
        select.replace_options(all);

        if let Some(previous) = previous
            && !select.select_value(&previous)
        {
            debug!("Selection '{}' of '{}' is gone after refresh", previous, name);
        }
        updated += 1;
    }
    updated
}
