//! 当前会话对应的学生身份
//!
//! 先取 `/current-user`；若其中没有学号，只能按用户名去学生列表里找同名学生。
//! 按姓名匹配存在歧义（重名时取第一个），因此结果会标明是如何得到的，
//! 重名时额外输出警告。整个过程不会向外抛出错误。
//!
//! `/current-user` 失败只记录日志；回退时的 `/students` 请求失败则与其他
//! 列表请求一样会提示用户，但结果仍是 [`DerivedIdentity::Unresolved`]。

use reqwest::Method;
use tracing::{debug, error, warn};

use crate::client::{ApiClient, OnFailure};
use crate::models::students::Student;
use crate::models::users::CurrentUser;

/// 身份解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivedIdentity {
    /// 会话信息直接给出了学号
    Direct(String),
    /// 通过用户名与学生姓名精确匹配得到；candidates 为同名学生数量
    MatchedByName { student_id: String, candidates: usize },
    /// 无法确定
    Unresolved,
}

impl DerivedIdentity {
    pub fn student_id(&self) -> Option<&str> {
        match self {
            DerivedIdentity::Direct(id) => Some(id),
            DerivedIdentity::MatchedByName { student_id, .. } => Some(student_id),
            DerivedIdentity::Unresolved => None,
        }
    }

    pub fn into_student_id(self) -> Option<String> {
        match self {
            DerivedIdentity::Direct(id) => Some(id),
            DerivedIdentity::MatchedByName { student_id, .. } => Some(student_id),
            DerivedIdentity::Unresolved => None,
        }
    }

    /// 是否存在重名导致的歧义
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, DerivedIdentity::MatchedByName { candidates, .. } if *candidates > 1)
    }
}

/// 在学生列表中按姓名精确匹配（区分大小写），返回第一个匹配项及同名数量
pub fn match_student_by_name<'a>(
    students: &'a [Student],
    username: &str,
) -> Option<(&'a Student, usize)> {
    let mut matches = students.iter().filter(|student| student.name == username);
    let first = matches.next()?;
    Some((first, 1 + matches.count()))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl ApiClient {
    /// 解析当前会话的学生身份
    pub async fn resolve_current_student(&self) -> DerivedIdentity {
        let user = match self
            .fetch::<CurrentUser>(Method::GET, &["current-user"], None)
            .await
        {
            Ok(envelope) => match envelope.into_data() {
                Some(user) => user,
                None => {
                    debug!("Current user response carried no data");
                    return DerivedIdentity::Unresolved;
                }
            },
            Err(e) => {
                error!("Failed to resolve student identity: {}", e);
                return DerivedIdentity::Unresolved;
            }
        };

        debug!("Current user info: {:?}", user);

        if let Some(student_id) = non_empty(user.student_id.as_deref()) {
            return DerivedIdentity::Direct(student_id.to_string());
        }

        let Some(username) = non_empty(user.username.as_deref()) else {
            return DerivedIdentity::Unresolved;
        };

        let students = match self.list_students(OnFailure::Propagate).await {
            Ok(Some(envelope)) => envelope.into_data().unwrap_or_default(),
            Ok(None) => return DerivedIdentity::Unresolved,
            Err(e) => {
                error!("Failed to resolve student identity: {}", e);
                return DerivedIdentity::Unresolved;
            }
        };

        match match_student_by_name(&students, username) {
            Some((student, candidates)) => {
                if candidates > 1 {
                    warn!(
                        "{} students are named '{}'; using the first match ({})",
                        candidates, username, student.student_id
                    );
                }
                DerivedIdentity::MatchedByName {
                    student_id: student.student_id.clone(),
                    candidates,
                }
            }
            None => {
                error!("No student record matches user '{}'", username);
                DerivedIdentity::Unresolved
            }
        }
    }

    /// 当前会话的学号，无法确定时为 None
    pub async fn current_student_id(&self) -> Option<String> {
        self.resolve_current_student().await.into_student_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        let students = vec![Student::new("S1", "Bob"), Student::new("S2", "bob")];
        let (student, candidates) = match_student_by_name(&students, "bob").unwrap();
        assert_eq!(student.student_id, "S2");
        assert_eq!(candidates, 1);
        assert!(match_student_by_name(&students, "bo").is_none());
    }

    #[test]
    fn test_duplicate_names_take_first_and_count() {
        let students = vec![
            Student::new("S1", "alice"),
            Student::new("S2", "alice"),
            Student::new("S3", "carol"),
        ];
        let (student, candidates) = match_student_by_name(&students, "alice").unwrap();
        assert_eq!(student.student_id, "S1");
        assert_eq!(candidates, 2);
    }

    #[test]
    fn test_identity_accessors() {
        let identity = DerivedIdentity::MatchedByName {
            student_id: "S42".to_string(),
            candidates: 2,
        };
        assert_eq!(identity.student_id(), Some("S42"));
        assert!(identity.is_ambiguous());
        assert!(!DerivedIdentity::Direct("S1".into()).is_ambiguous());
        assert_eq!(DerivedIdentity::Unresolved.into_student_id(), None);
    }
}
