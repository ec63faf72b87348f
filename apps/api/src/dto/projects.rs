mod conversions;
mod types;

pub use types::{
    ProjectResponse, ProjectRoleEntryResponse, SaveProjectRequest, TeamMemberResponse,
};
