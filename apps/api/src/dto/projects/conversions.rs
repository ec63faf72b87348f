use talentsoft_application::{SaveProjectInput, TeamMember};
use talentsoft_domain::Project;

use super::types::{ProjectResponse, SaveProjectRequest, TeamMemberResponse};

impl From<SaveProjectRequest> for SaveProjectInput {
    fn from(request: SaveProjectRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            start_date: request.start_date,
            end_date: request.end_date,
            status: request.status,
        }
    }
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        let profile = project.profile();

        Self {
            project_id: project.id().as_i64(),
            name: profile.name().to_owned(),
            description: profile.description().map(str::to_owned),
            start_date: profile.start_date(),
            end_date: profile.end_date(),
            status: profile.status().to_owned(),
        }
    }
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        Self {
            employee_id: member.employee.id().as_i64(),
            name: member.employee.name().to_owned(),
            email: member.employee.email().to_owned(),
            role: member.role,
        }
    }
}
