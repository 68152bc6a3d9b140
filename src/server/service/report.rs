use sea_orm::DatabaseConnection;

use crate::server::{
    data::{report::ReportRepository, user::UserRepository},
    error::AppError,
    model::{
        event::DomainEvent,
        report::{CreateReportParam, Report},
    },
    service::{access::require_admin, event::EventBus},
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
    events: &'a EventBus,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection, events: &'a EventBus) -> Self {
        Self { db, events }
    }

    /// Files a report against another user.
    ///
    /// # Returns
    /// - `Ok(Report)` - Stored report
    /// - `Err(AppError::NotFound)` - Reported user does not exist
    pub async fn create(&self, param: CreateReportParam) -> Result<Report, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(param.reported_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let report = ReportRepository::new(self.db).create(param).await?;
        tracing::info!(
            "User {} reported user {} (report {})",
            report.sender_id,
            report.reported_id,
            report.id
        );

        Ok(report)
    }

    /// All reports, optionally filtered by resolution. Admin only.
    pub async fn get_all(
        &self,
        actor_id: i32,
        resolved: Option<bool>,
    ) -> Result<Vec<Report>, AppError> {
        require_admin(self.db, actor_id).await?;
        Ok(ReportRepository::new(self.db).get_all(resolved).await?)
    }

    /// Marks a report as resolved and notifies the reporter. Admin only.
    ///
    /// # Returns
    /// - `Ok(Report)` - Resolved report
    /// - `Err(AppError::NotFound)` - Report does not exist
    /// - `Err(AppError::BadRequest)` - Report was already resolved
    pub async fn resolve(&self, actor_id: i32, report_id: i32) -> Result<Report, AppError> {
        require_admin(self.db, actor_id).await?;

        let repo = ReportRepository::new(self.db);
        let mut report = repo
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;
        if report.resolved {
            return Err(AppError::BadRequest(
                "Report is already resolved".to_string(),
            ));
        }

        repo.set_resolved(report_id, true).await?;
        report.resolved = true;

        self.events
            .emit(DomainEvent::ReportResolved {
                report_id: report.id,
                report_title: report.title.clone(),
                reporter_id: report.sender_id,
            })
            .await;

        Ok(report)
    }
}
