//! Organization CRUD scoped to the owning trainer.

use std::sync::Arc;

use tracing::info;

use sideline_core::error::AppError;
use sideline_database::repositories::organization::OrganizationRepository;
use sideline_entity::organization::{CreateOrganization, Organization};

use crate::context::RequestContext;

/// Manages organization operations.
#[derive(Debug, Clone)]
pub struct OrganizationService {
    /// Organization repository.
    org_repo: Arc<OrganizationRepository>,
}

impl OrganizationService {
    /// Creates a new organization service.
    pub fn new(org_repo: Arc<OrganizationRepository>) -> Self {
        Self { org_repo }
    }

    /// Creates a new organization owned by the caller.
    pub async fn create_organization(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> Result<Organization, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Organization name cannot be empty"));
        }

        let organization = self
            .org_repo
            .create(&CreateOrganization {
                name: name.trim().to_string(),
                trainer_id: ctx.trainer_id,
            })
            .await?;

        info!(
            trainer_id = %ctx.trainer_id,
            organization_id = %organization.id,
            name = %organization.name,
            "Organization created"
        );

        Ok(organization)
    }

    /// Lists all organizations owned by the caller.
    pub async fn list_organizations(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<Organization>, AppError> {
        self.org_repo.find_by_trainer(ctx.trainer_id).await
    }
}
