//! 写操作后的级联刷新
//!
//! 每个写操作在这里声明它会影响哪些视图。目前只有更新教师会级联刷新，
//! 其余写操作后的视图需要调用方手动刷新。

use serde::Serialize;
use tracing::debug;

use super::{Orchestrator, RefreshKind};
use crate::client::{OnFailure, Operation, Outcome};
use crate::models::teachers::Teacher;

const TEACHER_VIEWS: &[RefreshKind] = &[
    RefreshKind::TeacherSelectors,
    RefreshKind::TeacherList,
    RefreshKind::TeacherCourses,
];

/// 写操作成功后需要刷新的视图
pub fn affected_views(operation: Operation) -> &'static [RefreshKind] {
    if !operation.is_mutation() {
        return &[];
    }
    match operation {
        Operation::UpdateTeacher => TEACHER_VIEWS,
        _ => &[],
    }
}

impl Orchestrator {
    /// 写操作成功后刷新其声明的视图，等刷新完成再返回原结果
    pub async fn after_mutation<T>(&self, operation: Operation, outcome: Outcome<T>) -> Outcome<T> {
        let succeeded = matches!(&outcome, Ok(Some(envelope)) if envelope.success);
        let views = affected_views(operation);
        if succeeded && !views.is_empty() {
            debug!("{} succeeded, refreshing {} view(s)", operation, views.len());
            let report = self.refresh_many(views).await;
            if !report.is_complete() {
                debug!(
                    "Cascade after {} left {:?} stale",
                    operation, report.failed
                );
            }
        }
        outcome
    }

    /// 更新教师信息并刷新教师相关视图
    pub async fn update_teacher<P: Serialize + ?Sized>(
        &self,
        teacher_id: &str,
        teacher: &P,
        on_failure: OnFailure,
    ) -> Outcome<Teacher> {
        let outcome = self
            .client()
            .update_teacher(teacher_id, teacher, on_failure)
            .await;
        self.after_mutation(Operation::UpdateTeacher, outcome).await
    }
}
