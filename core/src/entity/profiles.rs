use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    #[sea_orm(column_type = "Double", nullable)]
    pub height_cm: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub weight_kg: Option<f64>,
    #[sea_orm(column_type = "JsonBinary")]
    pub dietary_goals: Json,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
