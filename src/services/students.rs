use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::client::{ApiClient, OnFailure, Operation, Outcome};
use crate::models::CreatedRecord;
use crate::models::courses::Course;
use crate::models::students::{Student, StudentCourseGrade};

impl ApiClient {
    // 添加学生
    pub async fn add_student<P: Serialize + ?Sized>(
        &self,
        student: &P,
        on_failure: OnFailure,
    ) -> Outcome<CreatedRecord> {
        debug!("Adding student");
        self.send(Operation::AddStudent, Method::POST, &["students"], student, on_failure)
            .await
    }

    // 获取学生列表
    pub async fn list_students(&self, on_failure: OnFailure) -> Outcome<Vec<Student>> {
        self.get(Operation::ListStudents, &["students"], on_failure)
            .await
    }

    // 获取学生已选课程
    pub async fn list_student_courses(
        &self,
        student_id: &str,
        on_failure: OnFailure,
    ) -> Outcome<Vec<Course>> {
        debug!("Loading courses of student {}", student_id);
        self.get(
            Operation::ListStudentCourses,
            &["students", student_id, "courses"],
            on_failure,
        )
        .await
    }

    // 获取学生成绩
    pub async fn list_student_grades(
        &self,
        student_id: &str,
        on_failure: OnFailure,
    ) -> Outcome<Vec<StudentCourseGrade>> {
        debug!("Loading grades of student {}", student_id);
        self.get(
            Operation::ListStudentGrades,
            &["students", student_id, "grades"],
            on_failure,
        )
        .await
    }

    // 更新学生信息，成功时返回更新后的记录
    pub async fn update_student<P: Serialize + ?Sized>(
        &self,
        student_id: &str,
        student: &P,
        on_failure: OnFailure,
    ) -> Outcome<Student> {
        debug!("Updating student {}", student_id);
        self.send(
            Operation::UpdateStudent,
            Method::PUT,
            &["students", student_id],
            student,
            on_failure,
        )
        .await
    }

    // 删除学生（服务端会一并删除选课和成绩记录）
    pub async fn delete_student(&self, student_id: &str, on_failure: OnFailure) -> Outcome<Value> {
        debug!("Deleting student {}", student_id);
        self.delete(Operation::DeleteStudent, &["students", student_id], on_failure)
            .await
    }
}
