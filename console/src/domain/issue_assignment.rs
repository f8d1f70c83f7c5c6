//! Project→member cascade of the issue screens.
//!
//! An issue is assigned to one member of its project. Changing the project
//! swaps the selectable members and clears the assignee, so an issue can
//! never point at someone outside the chosen project.

use tracing::debug;

use crate::domain::{Member, MemberId, ProjectId, ProjectMembers};

/// Rejected assignee selections.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentError {
    /// The project is not in the loaded project list.
    #[error("project {project_id} is not available")]
    UnknownProject {
        /// Requested project.
        project_id: ProjectId,
    },
    /// The user is not a member of the selected project.
    #[error("user {user_id} is not a member of the selected project")]
    NotAProjectMember {
        /// Requested assignee.
        user_id: MemberId,
    },
}

/// Selection state of the project and assignee pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssigneePicker {
    projects: Vec<ProjectMembers>,
    selected: Option<ProjectId>,
    members: Vec<Member>,
    assignee: Option<MemberId>,
}

impl AssigneePicker {
    /// Empty picker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the project list of the creation screen.
    ///
    /// The first project becomes the selection and no assignee is chosen.
    pub fn load_projects(&mut self, projects: Vec<ProjectMembers>) {
        self.projects = projects;
        self.assignee = None;
        match self.projects.first() {
            Some(first) => {
                self.selected = Some(first.project_id);
                self.members = first.members.clone();
            }
            None => {
                self.selected = None;
                self.members.clear();
            }
        }
    }

    /// Preselect an existing issue's project and assignee in the edit screen.
    ///
    /// The member list stays empty until [`replace_members`](Self::replace_members)
    /// delivers it.
    pub fn preselect(&mut self, project_id: ProjectId, assignee: Option<MemberId>) {
        self.selected = Some(project_id);
        self.members.clear();
        self.assignee = assignee;
    }

    /// Change the selected project, or clear it with `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::UnknownProject`] for projects missing from
    /// the loaded list; the selection is left untouched.
    pub fn select_project(&mut self, project_id: Option<ProjectId>) -> Result<(), AssignmentError> {
        let Some(project_id) = project_id else {
            self.selected = None;
            self.members.clear();
            self.assignee = None;
            return Ok(());
        };
        let project = self
            .projects
            .iter()
            .find(|project| project.project_id == project_id)
            .ok_or(AssignmentError::UnknownProject { project_id })?;

        self.selected = Some(project_id);
        self.members = project.members.clone();
        self.assignee = None;
        Ok(())
    }

    /// Apply a per-project member fetch.
    ///
    /// Ignored unless `project_id` is still selected. The assignee survives
    /// when it is part of the new list and is cleared otherwise. Returns
    /// whether the list was applied.
    pub fn replace_members(&mut self, project_id: ProjectId, members: Vec<Member>) -> bool {
        if self.selected != Some(project_id) {
            debug!(%project_id, "ignoring member list for a project no longer selected");
            return false;
        }
        self.members = members;
        let assignee_kept = self
            .assignee
            .as_ref()
            .is_some_and(|assignee| self.members.iter().any(|member| member.user_id() == assignee));
        if !assignee_kept {
            self.assignee = None;
        }
        true
    }

    /// Choose the assignee among the selected project's members.
    ///
    /// # Errors
    ///
    /// Returns [`AssignmentError::NotAProjectMember`] for anyone else.
    pub fn select_assignee(&mut self, user_id: &MemberId) -> Result<(), AssignmentError> {
        if !self.members.iter().any(|member| member.user_id() == user_id) {
            return Err(AssignmentError::NotAProjectMember {
                user_id: user_id.clone(),
            });
        }
        self.assignee = Some(user_id.clone());
        Ok(())
    }

    /// Loaded projects.
    pub fn projects(&self) -> &[ProjectMembers] {
        &self.projects
    }

    /// Selected project.
    pub fn selected_project(&self) -> Option<ProjectId> {
        self.selected
    }

    /// Members of the selected project.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Chosen assignee.
    pub fn assignee(&self) -> Option<&MemberId> {
        self.assignee.as_ref()
    }
}
