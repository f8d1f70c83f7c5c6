//! Wire shapes of the schedule server endpoints.
//!
//! Responses decode into these DTOs first and are then mapped into domain
//! records in one pass. Several endpoints answer either with a wrapping
//! object or with the bare list; both are accepted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    BoardDetail, BoardDraft, BoardId, BoardSubmission, Member, ProjectId, ProjectMembers,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserAllListDto {
    #[serde(default)]
    pub(super) user_all_list: Vec<Member>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum MemberListDto {
    Bare(Vec<Member>),
    Wrapped {
        #[serde(rename = "memberList")]
        member_list: Vec<Member>,
    },
}

impl MemberListDto {
    pub(super) fn into_members(self) -> Vec<Member> {
        match self {
            Self::Wrapped { member_list } => member_list,
            Self::Bare(members) => members,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum ProjectListDto {
    Bare(Vec<ProjectDto>),
    Wrapped {
        #[serde(rename = "projectList")]
        project_list: Vec<ProjectDto>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProjectDto {
    project_id: i64,
    #[serde(default)]
    project_name: String,
    #[serde(default)]
    members: Vec<Member>,
}

impl ProjectListDto {
    pub(super) fn into_domain_projects(self) -> Result<Vec<ProjectMembers>, String> {
        let projects = match self {
            Self::Wrapped { project_list } => project_list,
            Self::Bare(projects) => projects,
        };
        projects
            .into_iter()
            .map(|project| {
                let project_id = ProjectId::new(project.project_id)
                    .ok_or_else(|| format!("project id {} is not positive", project.project_id))?;
                Ok(ProjectMembers {
                    project_id,
                    project_name: project.project_name,
                    members: project.members,
                })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BoardInfoResponseDto {
    board_info: BoardInfoDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardInfoDto {
    #[serde(default)]
    name: String,
    #[serde(default)]
    content: String,
    start_date: Option<String>,
    end_date: Option<String>,
    #[serde(default, alias = "members")]
    member_list: Vec<Member>,
}

impl BoardInfoResponseDto {
    pub(super) fn into_domain_board(self, id: BoardId) -> Result<BoardDetail, String> {
        let info = self.board_info;
        Ok(BoardDetail {
            id,
            draft: BoardDraft {
                name: info.name,
                content: info.content,
                start_date: parse_day(info.start_date.as_deref())?,
                end_date: parse_day(info.end_date.as_deref())?,
            },
            members: info.member_list,
        })
    }
}

/// Parse the calendar day at the start of a server timestamp.
///
/// The server sends either `YYYY-MM-DD` or a full timestamp; only the first
/// ten characters are meaningful. Blank values mean "no date".
pub(super) fn parse_day(raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    let day: String = raw.chars().take(10).collect();
    NaiveDate::parse_from_str(&day, "%Y-%m-%d")
        .map(Some)
        .map_err(|error| format!("invalid date {raw:?}: {error}"))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BoardIdBody {
    pub(super) board_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProjectIdBody {
    pub(super) project_id: i64,
}

#[derive(Debug, Serialize)]
pub(super) struct EmptyBody {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BoardWriteBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    board_id: Option<i64>,
    name: &'a str,
    content: &'a str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    member_list: &'a [Member],
}

impl<'a> From<&'a BoardSubmission> for BoardWriteBody<'a> {
    fn from(value: &'a BoardSubmission) -> Self {
        Self {
            board_id: value.board_id.map(BoardId::get),
            name: value.draft.name.as_str(),
            content: value.draft.content.as_str(),
            start_date: value.draft.start_date,
            end_date: value.draft.end_date,
            member_list: &value.member_list,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Decoding and encoding of the schedule server payloads.

    use super::*;
    use insta::assert_json_snapshot;
    use rstest::rstest;

    #[rstest]
    #[case::day(Some("2024-03-01"), NaiveDate::from_ymd_opt(2024, 3, 1))]
    #[case::timestamp(Some("2024-03-01T09:30:00"), NaiveDate::from_ymd_opt(2024, 3, 1))]
    #[case::blank(Some("  "), None)]
    #[case::missing(None, None)]
    fn parses_leading_calendar_days(#[case] raw: Option<&str>, #[case] expected: Option<NaiveDate>) {
        assert_eq!(parse_day(raw).expect("date should parse"), expected);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_day(Some("03/01/2024")).is_err());
    }

    #[rstest]
    #[case::wrapped(r#"{ "memberList": [{ "userId": "a", "userName": "A", "email": "a@x" }] }"#)]
    #[case::bare(r#"[{ "userId": "a", "userName": "A", "email": "a@x" }]"#)]
    fn member_lists_accept_wrapped_and_bare_shapes(#[case] body: &str) {
        let decoded: MemberListDto = serde_json::from_str(body).expect("member list decodes");
        let members = decoded.into_members();
        assert_eq!(members, vec![Member::from_strings("a", "A", "a@x")]);
    }

    #[test]
    fn board_info_defaults_missing_members_to_empty() {
        let body = r#"{ "boardInfo": { "name": "Retro", "content": "", "startDate": "2024-03-01 00:00:00" } }"#;
        let decoded: BoardInfoResponseDto = serde_json::from_str(body).expect("board decodes");
        let board = decoded
            .into_domain_board(BoardId::new(3).expect("positive id"))
            .expect("board maps");

        assert!(board.members.is_empty());
        assert_eq!(board.draft.name, "Retro");
        assert_eq!(board.draft.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(board.draft.end_date, None);
    }

    #[rstest]
    #[case::wrapped(
        r#"{ "projectList": [{ "projectId": 4, "projectName": "Alpha", "members": [{ "userId": "a", "userName": "A", "email": "a@x" }] }] }"#
    )]
    #[case::bare(
        r#"[{ "projectId": 4, "projectName": "Alpha", "members": [{ "userId": "a", "userName": "A", "email": "a@x" }] }]"#
    )]
    fn project_lists_accept_wrapped_and_bare_shapes(#[case] body: &str) {
        let decoded: ProjectListDto = serde_json::from_str(body).expect("project list decodes");
        let projects = decoded.into_domain_projects().expect("projects map");

        assert_eq!(
            projects,
            vec![ProjectMembers {
                project_id: ProjectId::new(4).expect("positive project id"),
                project_name: "Alpha".to_owned(),
                members: vec![Member::from_strings("a", "A", "a@x")],
            }]
        );
    }

    #[test]
    fn project_members_default_to_empty() {
        let decoded: ProjectListDto =
            serde_json::from_str(r#"[{ "projectId": 2 }]"#).expect("project list decodes");
        let projects = decoded.into_domain_projects().expect("projects map");

        assert_eq!(projects.len(), 1);
        assert!(projects.iter().all(|project| project.members.is_empty()));
    }

    #[test]
    fn project_lists_reject_non_positive_ids() {
        let decoded: ProjectListDto =
            serde_json::from_str(r#"{ "projectList": [{ "projectId": 0, "projectName": "x" }] }"#)
                .expect("project list decodes");
        assert!(decoded.into_domain_projects().is_err());
    }

    #[test]
    fn board_write_body_carries_the_member_list_verbatim() {
        let submission = BoardSubmission {
            board_id: BoardId::new(7),
            draft: BoardDraft {
                name: "Sprint review".to_owned(),
                content: "Agenda".to_owned(),
                start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                end_date: None,
            },
            member_list: vec![
                Member::from_strings("u-2", "Lee", "lee@example.com"),
                Member::from_strings("u-1", "Kim", "kim@example.com"),
            ],
        };

        assert_json_snapshot!(BoardWriteBody::from(&submission), @r#"
        {
          "boardId": 7,
          "name": "Sprint review",
          "content": "Agenda",
          "startDate": "2024-03-01",
          "endDate": null,
          "memberList": [
            {
              "userId": "u-2",
              "userName": "Lee",
              "email": "lee@example.com"
            },
            {
              "userId": "u-1",
              "userName": "Kim",
              "email": "kim@example.com"
            }
          ]
        }
        "#);
    }

    #[test]
    fn create_body_omits_the_board_id() {
        let submission = BoardSubmission {
            board_id: None,
            draft: BoardDraft {
                name: "Kick-off".to_owned(),
                content: String::new(),
                start_date: None,
                end_date: NaiveDate::from_ymd_opt(2024, 4, 30),
            },
            member_list: vec![Member::from_strings("u-1", "Kim", "kim@example.com")],
        };

        assert_json_snapshot!(BoardWriteBody::from(&submission), @r#"
        {
          "name": "Kick-off",
          "content": "",
          "startDate": null,
          "endDate": "2024-04-30",
          "memberList": [
            {
              "userId": "u-1",
              "userName": "Kim",
              "email": "kim@example.com"
            }
          ]
        }
        "#);
    }
}
