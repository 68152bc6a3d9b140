use crate::{
    model::organization::OrgRole,
    server::{
        data::organization::OrganizationRepository, error::AppError,
        model::organization::OrganizationParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_for_user;
mod members;

fn org_param(name: &str) -> OrganizationParam {
    OrganizationParam {
        name: name.to_string(),
        description: "Komunitas".to_string(),
        address: "Jakarta".to_string(),
        phone: "021000".to_string(),
        category: "Teknologi".to_string(),
    }
}
