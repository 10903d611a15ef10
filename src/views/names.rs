// 展示层约定的部件名称

pub const ENROLL_COURSE_SELECT: &str = "enrollCourseSelect";
pub const MODIFY_COURSE_SELECT: &str = "modifyCourseSelect";
pub const DELETE_COURSE_SELECT: &str = "deleteCourseSelect";

pub const TEACHER_SELECT: &str = "teacherSelect";
pub const SCHEDULE_TEACHER_SELECT: &str = "scheduleTeacherSelect";
pub const MODIFY_TEACHER_SELECT: &str = "modifyTeacherSelect";
pub const DELETE_TEACHER_SELECT: &str = "deleteTeacherSelect";

pub const STUDENT_SELECT: &str = "studentSelect";
pub const ENROLL_STUDENT_SELECT: &str = "enrollStudentSelect";
pub const MODIFY_STUDENT_SELECT: &str = "modifyStudentSelect";
pub const DELETE_STUDENT_SELECT: &str = "deleteStudentSelect";

pub const TEACHER_TABLE: &str = "teacherTableBody";
pub const TEACHER_COURSES_TABLE: &str = "teacherCoursesTableBody";
pub const STUDENT_TABLE: &str = "studentTableBody";
pub const STUDENT_COURSES_TABLE: &str = "studentCoursesTableBody";

pub const COURSE_SELECTS: &[&str] = &[
    ENROLL_COURSE_SELECT,
    MODIFY_COURSE_SELECT,
    DELETE_COURSE_SELECT,
];

pub const TEACHER_SELECTS: &[&str] = &[
    TEACHER_SELECT,
    SCHEDULE_TEACHER_SELECT,
    MODIFY_TEACHER_SELECT,
    DELETE_TEACHER_SELECT,
];

pub const STUDENT_SELECTS: &[&str] = &[
    STUDENT_SELECT,
    ENROLL_STUDENT_SELECT,
    MODIFY_STUDENT_SELECT,
    DELETE_STUDENT_SELECT,
];

pub const TABLES: &[&str] = &[
    TEACHER_TABLE,
    TEACHER_COURSES_TABLE,
    STUDENT_TABLE,
    STUDENT_COURSES_TABLE,
];

/// 去掉选择器前缀 `#`，`#teacherSelect` 与 `teacherSelect` 等价
pub fn normalize(name: &str) -> &str {
    name.strip_prefix('#').unwrap_or(name)
}
