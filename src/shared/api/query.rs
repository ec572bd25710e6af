// src/shared/api/query.rs
use serde::Deserialize;
use utoipa::IntoParams;

/// `?limit=N` on the "first N" endpoints. Absent means no limit.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}
