use super::*;

impl ProjectAssignmentService {
    /// Returns whether the pair is linked. Unknown ids yield `false`.
    pub async fn is_assigned(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> AppResult<bool> {
        Ok(self
            .assignment_repository
            .find(employee_id, project_id)
            .await?
            .is_some())
    }

    /// Looks up the link for a pair.
    pub async fn find_assignment(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> AppResult<Option<ProjectAssignment>> {
        self.assignment_repository
            .find(employee_id, project_id)
            .await
    }

    /// Maps every employee on a project to their displayed project role.
    pub async fn roles_for_project(
        &self,
        project_id: ProjectId,
    ) -> AppResult<BTreeMap<EmployeeId, String>> {
        let assignments = self
            .assignment_repository
            .list_for_project(project_id)
            .await?;

        Ok(assignments
            .into_iter()
            .map(|assignment| {
                (
                    assignment.employee_id(),
                    assignment.role().display().to_owned(),
                )
            })
            .collect())
    }

    /// Same as [`Self::roles_for_project`], but logs read failures and
    /// returns an empty map so a page render can continue.
    pub async fn roles_for_project_or_empty(
        &self,
        project_id: ProjectId,
    ) -> BTreeMap<EmployeeId, String> {
        match self.roles_for_project(project_id).await {
            Ok(roles) => roles,
            Err(error) => {
                warn!(
                    project_id = %project_id,
                    %error,
                    "failed to load project roles; rendering without them"
                );
                BTreeMap::new()
            }
        }
    }

    /// Lists the projects of one employee with their role and team size.
    ///
    /// Links whose project no longer resolves are skipped.
    pub async fn projects_with_details_for_employee(
        &self,
        employee_id: EmployeeId,
    ) -> AppResult<Vec<ProjectDetails>> {
        let assignments = self
            .assignment_repository
            .list_for_employee(employee_id)
            .await?;

        let mut details = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let Some(project) = self
                .project_repository
                .find_by_id(assignment.project_id())
                .await?
            else {
                debug!(
                    employee_id = %employee_id,
                    project_id = %assignment.project_id(),
                    "skipping assignment to a project that no longer resolves"
                );
                continue;
            };

            let team_size = self
                .assignment_repository
                .count_for_project(project.id())
                .await?;

            details.push(ProjectDetails {
                project,
                role: assignment.role().display().to_owned(),
                team_size,
            });
        }

        details.sort_by(|left, right| left.project.name().cmp(right.project.name()));
        Ok(details)
    }

    /// Lists the team of one project ordered by employee name.
    ///
    /// Links whose employee no longer resolves are skipped.
    pub async fn team_for_project(&self, project_id: ProjectId) -> AppResult<Vec<TeamMember>> {
        let assignments = self
            .assignment_repository
            .list_for_project(project_id)
            .await?;

        let mut team = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            let Some(employee) = self
                .employee_repository
                .find_by_id(assignment.employee_id())
                .await?
            else {
                continue;
            };

            team.push(TeamMember {
                employee,
                role: assignment.role().display().to_owned(),
            });
        }

        team.sort_by(|left, right| left.employee.name().cmp(right.employee.name()));
        Ok(team)
    }
}
