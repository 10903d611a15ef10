//! 视图刷新
//!
//! 每个刷新任务拉取一种资源，再重建绑定到该资源的所有部件。
//! [`Orchestrator::refresh_all`] 并发执行全部任务，单个任务失败只记录日志，
//! 不影响其他任务。

pub mod cascade;
pub mod selectors;
pub mod tables;

pub use cascade::affected_views;

use std::fmt;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{debug, error};

use crate::client::{ApiClient, OnFailure, Outcome};
use crate::errors::Result;
use crate::views::{ViewRegistry, names};

use selectors::{
    COURSE_PLACEHOLDER, STUDENT_PLACEHOLDER, TEACHER_PLACEHOLDER, course_option,
    populate_selects, student_option, teacher_option,
};
use tables::{
    COURSE_COLUMNS, NO_COURSES, NO_DATA, STUDENT_COLUMNS, TEACHER_COLUMNS, course_row,
    render_table, student_row, teacher_row,
};

/// 刷新任务
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshKind {
    TeacherSelectors,
    TeacherList,
    TeacherCourses,
    CourseSelectors,
    StudentSelectors,
    StudentList,
    StudentCourses,
}

impl RefreshKind {
    pub const ALL: [RefreshKind; 7] = [
        RefreshKind::TeacherSelectors,
        RefreshKind::TeacherList,
        RefreshKind::TeacherCourses,
        RefreshKind::CourseSelectors,
        RefreshKind::StudentSelectors,
        RefreshKind::StudentList,
        RefreshKind::StudentCourses,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RefreshKind::TeacherSelectors => "teacher selectors",
            RefreshKind::TeacherList => "teacher list",
            RefreshKind::TeacherCourses => "teacher courses",
            RefreshKind::CourseSelectors => "course selectors",
            RefreshKind::StudentSelectors => "student selectors",
            RefreshKind::StudentList => "student list",
            RefreshKind::StudentCourses => "student courses",
        }
    }
}

impl fmt::Display for RefreshKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 一批刷新的结果，失败项逐个记录，不合并为单个错误
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub completed: Vec<RefreshKind>,
    pub failed: Vec<RefreshKind>,
}

impl RefreshReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Orchestrator {
    client: Arc<ApiClient>,
    views: Arc<dyn ViewRegistry>,
}

/// 取出列表数据；请求被吞掉时返回 None，表示不更新视图
fn records<T>(outcome: Outcome<Vec<T>>) -> Result<Option<Vec<T>>> {
    Ok(outcome?
        .filter(|envelope| envelope.success)
        .map(|envelope| envelope.data.unwrap_or_default()))
}

impl Orchestrator {
    pub fn new(client: Arc<ApiClient>, views: Arc<dyn ViewRegistry>) -> Self {
        Self { client, views }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn views(&self) -> &dyn ViewRegistry {
        self.views.as_ref()
    }

    pub async fn refresh(&self, kind: RefreshKind) -> Result<()> {
        match kind {
            RefreshKind::TeacherSelectors => self.refresh_teacher_selectors().await,
            RefreshKind::TeacherList => self.refresh_teacher_list().await,
            RefreshKind::TeacherCourses => self.refresh_teacher_courses().await,
            RefreshKind::CourseSelectors => self.refresh_course_selectors().await,
            RefreshKind::StudentSelectors => self.refresh_student_selectors().await,
            RefreshKind::StudentList => self.refresh_student_list().await,
            RefreshKind::StudentCourses => self.refresh_student_courses().await,
        }
    }

    /// 并发执行一组刷新
    pub async fn refresh_many(&self, kinds: &[RefreshKind]) -> RefreshReport {
        let results = join_all(
            kinds
                .iter()
                .map(|&kind| async move { (kind, self.refresh(kind).await) }),
        )
        .await;

        let mut report = RefreshReport::default();
        for (kind, result) in results {
            match result {
                Ok(()) => report.completed.push(kind),
                Err(e) => {
                    error!("Failed to refresh {}: {}", kind, e);
                    report.failed.push(kind);
                }
            }
        }
        report
    }

    /// 刷新所有视图
    pub async fn refresh_all(&self) -> RefreshReport {
        self.refresh_many(&RefreshKind::ALL).await
    }

    pub async fn refresh_course_selectors(&self) -> Result<()> {
        let Some(courses) = records(self.client.list_courses(OnFailure::Propagate).await)? else {
            return Ok(());
        };
        let options: Vec<_> = courses.iter().map(course_option).collect();
        let updated = populate_selects(
            self.views(),
            names::COURSE_SELECTS,
            COURSE_PLACEHOLDER,
            &options,
        );
        debug!("Refreshed {} course selector(s) with {} course(s)", updated, courses.len());
        Ok(())
    }

    pub async fn refresh_teacher_selectors(&self) -> Result<()> {
        let Some(teachers) = records(self.client.list_teachers(OnFailure::Propagate).await)?
        else {
            return Ok(());
        };
        let options: Vec<_> = teachers.iter().map(teacher_option).collect();
        let updated = populate_selects(
            self.views(),
            names::TEACHER_SELECTS,
            TEACHER_PLACEHOLDER,
            &options,
        );
        debug!("Refreshed {} teacher selector(s) with {} teacher(s)", updated, teachers.len());
        Ok(())
    }

    pub async fn refresh_student_selectors(&self) -> Result<()> {
        let Some(students) = records(self.client.list_students(OnFailure::Propagate).await)?
        else {
            return Ok(());
        };
        let options: Vec<_> = students.iter().map(student_option).collect();
        let updated = populate_selects(
            self.views(),
            names::STUDENT_SELECTS,
            STUDENT_PLACEHOLDER,
            &options,
        );
        debug!("Refreshed {} student selector(s) with {} student(s)", updated, students.len());
        Ok(())
    }

    pub async fn refresh_teacher_list(&self) -> Result<()> {
        let Some(teachers) = records(self.client.list_teachers(OnFailure::Propagate).await)?
        else {
            return Ok(());
        };
        render_table(
            self.views(),
            names::TEACHER_TABLE,
            teachers.iter().map(teacher_row).collect(),
            TEACHER_COLUMNS,
            NO_DATA,
        );
        Ok(())
    }

    pub async fn refresh_student_list(&self) -> Result<()> {
        let Some(students) = records(self.client.list_students(OnFailure::Propagate).await)?
        else {
            return Ok(());
        };
        render_table(
            self.views(),
            names::STUDENT_TABLE,
            students.iter().map(student_row).collect(),
            STUDENT_COLUMNS,
            NO_DATA,
        );
        Ok(())
    }

    /// 按 `#teacherSelect` 当前选中的教师刷新其课程表
    pub async fn refresh_teacher_courses(&self) -> Result<()> {
        let Some(teacher_id) = self.selected(names::TEACHER_SELECT) else {
            debug!("No teacher selected, teacher courses left unchanged");
            return Ok(());
        };
        let Some(courses) = records(
            self.client
                .list_teacher_courses(&teacher_id, OnFailure::Propagate)
                .await,
        )?
        else {
            return Ok(());
        };
        render_table(
            self.views(),
            names::TEACHER_COURSES_TABLE,
            courses.iter().map(course_row).collect(),
            COURSE_COLUMNS,
            NO_COURSES,
        );
        Ok(())
    }

    /// 按 `#studentSelect` 当前选中的学生刷新其课程表
    pub async fn refresh_student_courses(&self) -> Result<()> {
        let Some(student_id) = self.selected(names::STUDENT_SELECT) else {
            debug!("No student selected, student courses left unchanged");
            return Ok(());
        };
        let Some(courses) = records(
            self.client
                .list_student_courses(&student_id, OnFailure::Propagate)
                .await,
        )?
        else {
            return Ok(());
        };
        render_table(
            self.views(),
            names::STUDENT_COURSES_TABLE,
            courses.iter().map(course_row).collect(),
            COURSE_COLUMNS,
            NO_COURSES,
        );
        Ok(())
    }

    fn selected(&self, name: &str) -> Option<String> {
        self.views
            .select(name)
            .and_then(|select| select.selected_value())
    }
}
