use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::report::{CreateReportParam, Report};

pub struct ReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateReportParam) -> Result<Report, DbErr> {
        let entity = entity::report::ActiveModel {
            sender_id: ActiveValue::Set(param.sender_id),
            reported_id: ActiveValue::Set(param.reported_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            resolved: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Report::from_entity(entity))
    }

    pub async fn find_by_id(&self, report_id: i32) -> Result<Option<Report>, DbErr> {
        let entity = entity::prelude::Report::find_by_id(report_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Report::from_entity))
    }

    /// Reports newest first, optionally filtered by resolution state.
    pub async fn get_all(&self, resolved: Option<bool>) -> Result<Vec<Report>, DbErr> {
        let mut query = entity::prelude::Report::find();
        if let Some(resolved) = resolved {
            query = query.filter(entity::report::Column::Resolved.eq(resolved));
        }

        let entities = query
            .order_by_desc(entity::report::Column::CreatedAt)
            .order_by_desc(entity::report::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Report::from_entity).collect())
    }

    pub async fn set_resolved(&self, report_id: i32, resolved: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::Report::update_many()
            .col_expr(entity::report::Column::Resolved, Expr::value(resolved))
            .filter(entity::report::Column::Id.eq(report_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
