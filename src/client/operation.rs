use std::fmt;

use super::OnFailure;

/// 客户端发起的所有资源操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // 课程
    AddCourse,
    ListCourses,
    UpdateCourse,
    DeleteCourse,
    // 学生
    AddStudent,
    ListStudents,
    ListStudentCourses,
    ListStudentGrades,
    UpdateStudent,
    DeleteStudent,
    // 教师
    AddTeacher,
    ListTeachers,
    ListTeacherCourses,
    UpdateTeacher,
    DeleteTeacher,
    // 选课 / 排课
    EnrollStudent,
    DropStudentCourse,
    AssignTeacherCourse,
    // 成绩
    SaveGrades,
    ListCourseGrades,
    SaveCourseGrades,
    // 作业
    AddAssignment,
    ListAssignments,
    UpdateAssignment,
    DeleteAssignment,
}

impl Operation {
    /// 失败提示的前缀
    pub fn failure_context(&self) -> &'static str {
        match self {
            Operation::AddCourse => "Failed to add course",
            Operation::ListCourses => "Failed to load courses",
            Operation::UpdateCourse => "Failed to update course",
            Operation::DeleteCourse => "Failed to delete course",
            Operation::AddStudent => "Failed to add student",
            Operation::ListStudents => "Failed to load students",
            Operation::ListStudentCourses => "Failed to load student courses",
            Operation::ListStudentGrades => "Failed to load grades",
            Operation::UpdateStudent => "Failed to update student",
            Operation::DeleteStudent => "Failed to delete student",
            Operation::AddTeacher => "Failed to add teacher",
            Operation::ListTeachers => "Failed to load teachers",
            Operation::ListTeacherCourses => "Failed to load teacher courses",
            Operation::UpdateTeacher => "Failed to update teacher",
            Operation::DeleteTeacher => "Failed to delete teacher",
            Operation::EnrollStudent => "Failed to enroll in course",
            Operation::DropStudentCourse => "Failed to drop course",
            Operation::AssignTeacherCourse => "Failed to schedule course",
            Operation::SaveGrades => "Failed to save grades",
            Operation::ListCourseGrades => "Failed to load course grades",
            Operation::SaveCourseGrades => "Failed to save course grades",
            Operation::AddAssignment => "Failed to add assignment",
            Operation::ListAssignments => "Failed to load assignments",
            Operation::UpdateAssignment => "Failed to update assignment",
            Operation::DeleteAssignment => "Failed to delete assignment",
        }
    }

    /// 历史上各接口的失败处理方式
    ///
    /// 学生和作业的修改/删除会继续抛出错误，其余接口提示后吞掉。
    /// 调用方仍需显式传入策略，这里只是可选的参考值。
    pub fn default_policy(&self) -> OnFailure {
        match self {
            Operation::UpdateStudent
            | Operation::DeleteStudent
            | Operation::UpdateAssignment
            | Operation::DeleteAssignment => OnFailure::Propagate,
            _ => OnFailure::Suppress,
        }
    }

    /// 是否会修改服务端数据
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Operation::ListCourses
                | Operation::ListStudents
                | Operation::ListStudentCourses
                | Operation::ListStudentGrades
                | Operation::ListTeachers
                | Operation::ListTeacherCourses
                | Operation::ListCourseGrades
                | Operation::ListAssignments
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        assert_eq!(Operation::DeleteStudent.default_policy(), OnFailure::Propagate);
        assert_eq!(Operation::UpdateAssignment.default_policy(), OnFailure::Propagate);
        assert_eq!(Operation::AddCourse.default_policy(), OnFailure::Suppress);
        assert_eq!(Operation::UpdateTeacher.default_policy(), OnFailure::Suppress);
    }

    #[test]
    fn test_is_mutation() {
        assert!(Operation::DropStudentCourse.is_mutation());
        assert!(Operation::SaveGrades.is_mutation());
        assert!(!Operation::ListTeachers.is_mutation());
        assert!(!Operation::ListAssignments.is_mutation());
    }
}
